use super::*;

#[test]
fn compound_step_collects_every_part() -> Result<()> {
    let step = parse_selector_step("input.choice#pick[name=\"g1\"]:radio:checked")?;
    assert_eq!(step.tag.as_deref(), Some("input"));
    assert_eq!(step.id.as_deref(), Some("pick"));
    assert_eq!(step.classes, vec!["choice".to_string()]);
    assert_eq!(
        step.attrs,
        vec![SelectorAttrCondition::Eq {
            key: "name".into(),
            value: "g1".into(),
        }]
    );
    assert_eq!(
        step.pseudo_classes,
        vec![SelectorPseudoClass::Radio, SelectorPseudoClass::Checked]
    );
    Ok(())
}

#[test]
fn id_only_step_is_detected() -> Result<()> {
    assert_eq!(parse_selector_step("#g1")?.id_only(), Some("g1"));
    assert_eq!(parse_selector_step("div#g1")?.id_only(), None);
    Ok(())
}

#[test]
fn chain_records_combinators() -> Result<()> {
    let chain = parse_selector_chain("div > label span ~ em + b")?;
    let combinators = chain.iter().map(|part| part.combinator).collect::<Vec<_>>();
    assert_eq!(
        combinators,
        vec![
            None,
            Some(SelectorCombinator::Child),
            Some(SelectorCombinator::Descendant),
            Some(SelectorCombinator::GeneralSibling),
            Some(SelectorCombinator::AdjacentSibling),
        ]
    );
    Ok(())
}

#[test]
fn groups_split_only_at_top_level_commas() -> Result<()> {
    let groups = split_selector_groups("a[title=\"x,y\"], b:not(i, u), c")?;
    assert_eq!(groups, vec!["a[title=\"x,y\"]", "b:not(i, u)", "c"]);
    Ok(())
}

#[test]
fn quoted_attribute_values_keep_spaces_and_combinator_chars() -> Result<()> {
    let tokens = tokenize_selector("input[value=\"a > b ~ c\"] span")?;
    assert_eq!(tokens, vec!["input[value=\"a > b ~ c\"]", "span"]);
    Ok(())
}

#[test]
fn escaped_characters_are_unescaped_in_values_and_idents() -> Result<()> {
    let step = parse_selector_step("[value=\"a\\.b\\\"c\\\\\"]")?;
    assert_eq!(
        step.attrs,
        vec![SelectorAttrCondition::Eq {
            key: "value".into(),
            value: "a.b\"c\\".into(),
        }]
    );

    let step = parse_selector_step("#my\\.id")?;
    assert_eq!(step.id.as_deref(), Some("my.id"));
    Ok(())
}

#[test]
fn hex_escape_decodes_code_point_and_swallows_one_space() {
    assert_eq!(read_css_escape("\\41 b", 0), Some(('A', 4)));
    assert_eq!(read_css_escape("\\#x", 0), Some(('#', 2)));
    assert_eq!(read_css_escape("\\0", 0), Some(('\u{FFFD}', 2)));
    assert_eq!(read_css_escape("\\", 0), None);
}

#[test]
fn attribute_operators_are_parsed() -> Result<()> {
    let cases = [
        ("[a^=x]", SelectorAttrCondition::StartsWith { key: "a".into(), value: "x".into() }),
        ("[a$=x]", SelectorAttrCondition::EndsWith { key: "a".into(), value: "x".into() }),
        ("[a*=x]", SelectorAttrCondition::Contains { key: "a".into(), value: "x".into() }),
        ("[a~=x]", SelectorAttrCondition::Includes { key: "a".into(), value: "x".into() }),
        ("[a|=x]", SelectorAttrCondition::DashMatch { key: "a".into(), value: "x".into() }),
        ("[a]", SelectorAttrCondition::Exists { key: "a".into() }),
    ];
    for (selector, expected) in cases {
        assert_eq!(parse_selector_step(selector)?.attrs, vec![expected], "{selector}");
    }
    Ok(())
}

#[test]
fn malformed_selectors_are_rejected() {
    for selector in [
        "",
        "div >",
        "> div",
        "a[",
        "a[name=\"x]",
        "a:hover",
        "a, ,b",
        "a)",
        "div span:not()",
    ] {
        assert!(
            matches!(
                parse_selector_groups(selector),
                Err(Error::UnsupportedSelector(_))
            ),
            "{selector} should be rejected"
        );
    }
}

#[test]
fn matching_honours_structure_and_state() -> Result<()> {
    let dom = page(
        r#"<form id="f">
             <label id="l"><input id="r1" type="radio" name="g" checked><span>one</span></label>
             <input id="r2" type="radio" name="g" disabled>
             <input id="c1" type="checkbox">
           </form>"#,
    )?;
    let r1 = dom.by_id("r1").ok_or_else(|| Error::SelectorNotFound("#r1".into()))?;
    let r2 = dom.by_id("r2").ok_or_else(|| Error::SelectorNotFound("#r2".into()))?;
    let c1 = dom.by_id("c1").ok_or_else(|| Error::SelectorNotFound("#c1".into()))?;

    assert!(dom.matches_selector(r1, "form > label > input:radio:checked")?);
    assert!(dom.matches_selector(r1, "form input:first-child")?);
    assert!(!dom.matches_selector(r1, "form > input")?);
    assert!(dom.matches_selector(r2, "label + input:disabled")?);
    assert!(dom.matches_selector(c1, "label ~ input:checkbox:enabled:last-child")?);
    assert!(dom.matches_selector(c1, "input:not(:radio)")?);
    assert!(!dom.matches_selector(r2, "input:not([disabled], :checkbox)")?);
    Ok(())
}

#[test]
fn descendant_steps_try_every_ancestor_before_failing() -> Result<()> {
    let dom = page(
        r#"<div class="a"><div class="b"><div class="b"><span id="c" class="c"></span></div></div></div>
           <ul><li class="x"></li><li class="y"></li><li class="x"></li><li id="z" class="z"></li></ul>"#,
    )?;
    let c = dom.by_id("c").ok_or_else(|| Error::SelectorNotFound("#c".into()))?;
    let z = dom.by_id("z").ok_or_else(|| Error::SelectorNotFound("#z".into()))?;

    assert_eq!(dom.query_selector_all(".a > .b .c")?, vec![c]);
    assert!(dom.matches_selector(c, ".a > .b > .b > .c")?);
    assert!(!dom.matches_selector(c, ".a > .b > .c")?);
    assert_eq!(dom.query_selector_all(".y + .x ~ .z")?, vec![z]);
    assert!(dom.matches_selector(z, "ul .y + .x ~ li")?);
    assert!(!dom.matches_selector(z, ".x + .y ~ .x + .y")?);
    Ok(())
}
