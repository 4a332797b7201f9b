use super::*;
use serde_json::json;

#[test]
fn find_returns_containers_below_scope_in_document_order() -> Result<()> {
    let dom = page(
        r#"<section id="s">
             <div id="one" class="shiny-input-radiogroup"></div>
             <div><div id="two" class="shiny-input-radiogroup"></div></div>
           </section>
           <div id="outside" class="shiny-input-radiogroup"></div>"#,
    )?;
    let binding = RadioInputBinding::new();
    let scope = dom.by_id("s").ok_or_else(|| Error::SelectorNotFound("#s".into()))?;

    let found = binding.find(&dom, scope)?;
    let ids = found
        .iter()
        .filter_map(|node| dom.attr(*node, "id"))
        .collect::<Vec<_>>();
    assert_eq!(ids, vec!["one", "two"]);
    assert_eq!(binding.find(&dom, dom.root())?.len(), 3);
    assert!(binding.find(&dom, found[0])?.is_empty());
    Ok(())
}

#[test]
fn value_is_none_until_a_radio_is_checked() -> Result<()> {
    let mut dom = page(RADIO_GROUP_HTML)?;
    let binding = RadioInputBinding::new();
    let g1 = group(&dom)?;

    assert_eq!(binding.value(&dom, g1)?, None);
    assert_eq!(binding.get_value(&dom, g1)?, json!(null));

    binding.set_selection(&mut dom, g1, &SelectionValue::single("b"))?;
    assert_eq!(binding.value(&dom, g1)?, Some("b".into()));
    assert_eq!(binding.get_value(&dom, g1)?, json!("b"));
    Ok(())
}

#[test]
fn single_selection_relies_on_native_exclusivity() -> Result<()> {
    let mut dom = page(RADIO_GROUP_HTML)?;
    let binding = RadioInputBinding::new();
    let g1 = group(&dom)?;

    binding.set_value(&mut dom, g1, json!("a"))?;
    binding.set_value(&mut dom, g1, json!("b"))?;
    let checked = dom.query_selector_all("input:radio:checked")?;
    assert_eq!(checked.len(), 1);
    assert_eq!(dom.value(checked[0])?, "b");
    Ok(())
}

#[test]
fn unknown_value_and_null_leave_selection_unchanged() -> Result<()> {
    let mut dom = page(RADIO_GROUP_HTML)?;
    let binding = RadioInputBinding::new();
    let g1 = group(&dom)?;

    binding.set_value(&mut dom, g1, json!("a"))?;
    binding.set_value(&mut dom, g1, json!("zzz"))?;
    assert_eq!(binding.value(&dom, g1)?, Some("a".into()));
    binding.set_value(&mut dom, g1, json!(null))?;
    assert_eq!(binding.value(&dom, g1)?, Some("a".into()));
    Ok(())
}

#[test]
fn clear_all_unchecks_every_radio_of_the_group_only() -> Result<()> {
    let mut dom = page(&format!(
        "{RADIO_GROUP_HTML}<input id=\"other\" type=\"radio\" name=\"g2\" value=\"x\" checked>"
    ))?;
    let binding = RadioInputBinding::new();
    let g1 = group(&dom)?;

    binding.set_value(&mut dom, g1, json!("a"))?;
    binding.set_value(&mut dom, g1, json!([]))?;
    assert_eq!(binding.value(&dom, g1)?, None);
    binding.set_value(&mut dom, g1, json!([]))?;
    assert_eq!(binding.value(&dom, g1)?, None);

    let other = dom.by_id("other").ok_or_else(|| Error::SelectorNotFound("#other".into()))?;
    assert!(dom.checked(other)?);
    Ok(())
}

#[test]
fn group_ids_with_selector_metacharacters_are_escaped() -> Result<()> {
    let mut dom = page(
        r#"<div id="my.group:1" class="shiny-input-radiogroup">
             <label for="my.group:1">Odd</label>
             <label><input type="radio" name="my.group:1" value="a&quot;b"><span>Quote</span></label>
             <label><input type="radio" name="my.group:1" value="c[d]"><span>Bracket</span></label>
           </div>"#,
    )?;
    let binding = RadioInputBinding::new();
    let el = dom
        .by_id("my.group:1")
        .ok_or_else(|| Error::SelectorNotFound("my.group:1".into()))?;

    binding.set_selection(&mut dom, el, &SelectionValue::single("a\"b"))?;
    assert_eq!(binding.value(&dom, el)?, Some("a\"b".into()));
    binding.set_selection(&mut dom, el, &SelectionValue::single("c[d]"))?;
    assert_eq!(binding.value(&dom, el)?, Some("c[d]".into()));
    assert_eq!(binding.state(&dom, el)?.label, "Odd");
    Ok(())
}

#[test]
fn radio_without_value_attribute_reports_on() -> Result<()> {
    let mut dom = page(
        r#"<div id="g" class="shiny-input-radiogroup"><input type="radio" name="g"></div>"#,
    )?;
    let binding = RadioInputBinding::new();
    let g = dom.by_id("g").ok_or_else(|| Error::SelectorNotFound("#g".into()))?;
    let radio = binding.radios(&dom, g)?[0];
    dom.set_checked(radio, true)?;
    assert_eq!(binding.value(&dom, g)?, Some("on".into()));
    Ok(())
}

#[test]
fn choice_labels_read_span_text_of_wrapping_label() -> Result<()> {
    let mut dom = page(
        r#"<div id="g" class="shiny-input-radiogroup">
             <label><input id="wrapped" type="radio" name="g" value="a"><span>  First </span><span>Part</span></label>
             <input id="bare" type="radio" name="g" value="b">
           </div>"#,
    )?;
    let wrapped = dom.by_id("wrapped").ok_or_else(|| Error::SelectorNotFound("#wrapped".into()))?;
    let bare = dom.by_id("bare").ok_or_else(|| Error::SelectorNotFound("#bare".into()))?;

    assert_eq!(choice_label(&dom, wrapped), Some("First Part".into()));
    assert_eq!(choice_label(&dom, bare), None);

    set_choice_label(&mut dom, wrapped, "Renamed")?;
    assert_eq!(choice_label(&dom, wrapped), Some("RenamedRenamed".into()));
    set_choice_label(&mut dom, bare, "ignored")?;
    assert_eq!(choice_label(&dom, bare), None);
    Ok(())
}

#[test]
fn state_snapshot_lists_every_named_radio() -> Result<()> {
    let mut dom = page(RADIO_GROUP_HTML)?;
    let binding = RadioInputBinding::new();
    let g1 = group(&dom)?;
    binding.set_selection(&mut dom, g1, &SelectionValue::single("a"))?;

    let state = binding.state(&dom, g1)?;
    assert_eq!(
        state,
        RadioState {
            label: "Pick one".into(),
            value: Some("a".into()),
            options: vec![ValueLabel::new("a", "A"), ValueLabel::new("b", "B")],
        }
    );
    assert_eq!(
        binding.get_state(&dom, g1)?,
        json!({
            "label": "Pick one",
            "value": "a",
            "options": [{"value": "a", "label": "A"}, {"value": "b", "label": "B"}],
        })
    );
    assert_eq!(state.options.len(), binding.radios(&dom, g1)?.len());
    Ok(())
}

#[test]
fn group_label_is_found_among_the_container_siblings() -> Result<()> {
    let dom = page(
        r#"<div id="wrap">
             <label id="outer-label" for="g">Outer</label>
             <div id="g" class="shiny-input-radiogroup"></div>
           </div>
           <label for="g">Elsewhere</label>"#,
    )?;
    let binding = RadioInputBinding::new();
    let g = dom.by_id("g").ok_or_else(|| Error::SelectorNotFound("#g".into()))?;
    let outer = dom
        .by_id("outer-label")
        .ok_or_else(|| Error::SelectorNotFound("#outer-label".into()))?;

    assert_eq!(binding.label_nodes(&dom, g)?, vec![outer]);
    assert_eq!(binding.state(&dom, g)?.label, "Outer");
    Ok(())
}

#[test]
fn detached_container_has_no_label_nodes() -> Result<()> {
    let mut dom = page(RADIO_GROUP_HTML)?;
    let binding = RadioInputBinding::new();
    let g1 = group(&dom)?;
    dom.remove_node(g1)?;
    assert!(binding.label_nodes(&dom, g1)?.is_empty());
    Ok(())
}

#[test]
fn default_contract_hooks() -> Result<()> {
    let dom = page(
        r#"<div id="g" data-input-id="override" class="shiny-input-radiogroup"></div>
           <div id="h" class="shiny-input-radiogroup"></div>
           <div class="shiny-input-radiogroup"></div>"#,
    )?;
    let binding: Box<dyn InputBinding> = Box::new(RadioInputBinding::new());
    let all = binding.find(&dom, dom.root())?;

    assert_eq!(binding.get_id(&dom, all[0]), Some("override".into()));
    assert_eq!(binding.get_id(&dom, all[1]), Some("h".into()));
    assert_eq!(binding.get_id(&dom, all[2]), None);
    assert_eq!(binding.get_type(&dom, all[0]), None);
    assert_eq!(binding.get_rate_policy(), None);
    Ok(())
}

#[test]
fn rate_policy_serializes_with_policy_tag() -> Result<()> {
    assert_eq!(
        serde_json::to_value(RatePolicy::Debounce { delay: 250 })?,
        json!({"policy": "debounce", "delay": 250})
    );
    Ok(())
}

#[test]
fn custom_markup_changes_container_selector_and_namespace() -> Result<()> {
    let mut dom = page(r#"<div id="g" class="my-radios"></div>"#)?;
    let binding = RadioInputBinding::with_markup(RadioMarkup {
        container_selector: ".my-radios".into(),
        event_namespace: "mine".into(),
        ..RadioMarkup::default()
    });
    let found = binding.find(&dom, dom.root())?;
    assert_eq!(found.len(), 1);
    assert_eq!(binding.markup().event_namespace, "mine");

    binding.subscribe(&mut dom, found[0], Box::new(|_changed: bool| {}))?;
    assert_eq!(dom.off(found[0], ".mine")?, 1);
    Ok(())
}

#[test]
fn multi_step_container_selector_finds_nested_group() -> Result<()> {
    let dom = page(
        r#"<section class="panel"><div class="row"><div class="row">
             <div id="g" class="rg"><input type="radio" name="g" value="a"></div>
           </div></div></section>"#,
    )?;
    let binding = RadioInputBinding::with_markup(RadioMarkup {
        container_selector: ".panel > .row .rg".into(),
        ..RadioMarkup::default()
    });
    let found = binding.find(&dom, dom.root())?;
    let g = dom.by_id("g").ok_or_else(|| Error::SelectorNotFound("#g".into()))?;
    assert_eq!(found, vec![g]);
    Ok(())
}
