use input_bindings::{
    Harness, InputBinding, RadioInputBinding, SelectionValue, ValueLabel, escape_selector,
    render_options,
};
use proptest::collection::vec;
use proptest::prelude::*;
use proptest::test_runner::{FileFailurePersistence, TestCaseError, TestCaseResult};
use serde_json::json;

const RADIO_PROPTEST_REGRESSION_FILE: &str =
    "tests/proptest-regressions/radio_value_property_test.txt";
const DEFAULT_RADIO_PROPTEST_CASES: u32 = 64;

fn radio_proptest_cases() -> u32 {
    std::env::var("INPUT_BINDINGS_PROPTEST_CASES")
        .ok()
        .and_then(|raw| raw.parse::<u32>().ok())
        .filter(|value| *value > 0)
        .unwrap_or(DEFAULT_RADIO_PROPTEST_CASES)
}

// Option values mixing identifier characters with every selector metacharacter.
fn option_value_strategy() -> BoxedStrategy<String> {
    vec(
        prop_oneof![
            4 => prop::char::range('a', 'z'),
            2 => prop::char::range('0', '9'),
            3 => prop::sample::select(
                "!\"#$%&'()*+,./:;<=>?@[\\]^`{|}~ -_".chars().collect::<Vec<_>>()
            ),
            1 => Just('é'),
        ],
        1..=8,
    )
    .prop_map(|chars| chars.into_iter().collect())
    .boxed()
}

fn distinct_values_strategy() -> BoxedStrategy<Vec<String>> {
    prop::collection::btree_set(option_value_strategy(), 1..=5)
        .prop_map(|values| values.into_iter().collect())
        .boxed()
}

fn fail(err: impl std::fmt::Debug) -> TestCaseError {
    TestCaseError::fail(format!("{err:?}"))
}

fn page_for(group_id: &str, values: &[String]) -> Result<Harness, TestCaseError> {
    let choices = values
        .iter()
        .map(|value| ValueLabel::new(value.clone(), value.to_uppercase()))
        .collect::<Vec<_>>();
    let options = render_options(group_id, &choices, None, false);
    let id = group_id.replace('&', "&amp;").replace('"', "&quot;");
    Harness::from_html(&format!(
        "<div id=\"{id}\" class=\"shiny-input-radiogroup\">{options}</div>"
    ))
    .map_err(fail)
}

fn assert_selection_round_trips(group_id: &str, values: &[String], pick: usize) -> TestCaseResult {
    let mut h = page_for(group_id, values)?;
    let binding = RadioInputBinding::new();
    let el = h
        .dom()
        .by_id(group_id)
        .ok_or_else(|| fail(format!("group {group_id:?} not indexed")))?;

    prop_assert_eq!(binding.get_value(h.dom(), el).map_err(fail)?, json!(null));

    let wanted = &values[pick % values.len()];
    binding
        .set_selection(h.dom_mut(), el, &SelectionValue::single(wanted.clone()))
        .map_err(fail)?;
    prop_assert_eq!(
        binding.value(h.dom(), el).map_err(fail)?,
        Some(wanted.clone())
    );

    let state = binding.state(h.dom(), el).map_err(fail)?;
    prop_assert_eq!(state.options.len(), values.len());

    binding
        .set_value(h.dom_mut(), el, json!([]))
        .map_err(fail)?;
    prop_assert_eq!(binding.value(h.dom(), el).map_err(fail)?, None);
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: radio_proptest_cases(),
        failure_persistence: Some(Box::new(
            FileFailurePersistence::Direct(RADIO_PROPTEST_REGRESSION_FILE),
        )),
        .. ProptestConfig::default()
    })]

    #[test]
    fn selection_round_trips_for_arbitrary_option_values(
        group_id in option_value_strategy(),
        values in distinct_values_strategy(),
        pick in any::<usize>(),
    ) {
        assert_selection_round_trips(&group_id, &values, pick)?;
    }

    #[test]
    fn escaped_values_never_leave_metacharacters_bare(value in option_value_strategy()) {
        let escaped = escape_selector(&value).map_err(fail)?;
        let mut chars = escaped.chars();
        while let Some(ch) = chars.next() {
            if ch == '\\' {
                prop_assert!(chars.next().is_some(), "dangling escape in {escaped:?}");
                continue;
            }
            prop_assert!(
                !"!\"#$%&'()*+,./:;<=>?@[]^`{|}~".contains(ch),
                "unescaped {ch:?} in {escaped:?}"
            );
        }
    }
}
