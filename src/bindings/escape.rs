use super::*;
use fancy_regex::{Captures, Regex};
use std::sync::LazyLock;

static SELECTOR_META: LazyLock<std::result::Result<Regex, String>> = LazyLock::new(|| {
    Regex::new(r##"([!"#$%&'()*+,./:;<=>?@\[\\\]^`{|}~])"##).map_err(|err| err.to_string())
});

/// Backslash-escapes CSS selector metacharacters so `value` can be embedded in an
/// attribute selector such as `[name="..."]`.
pub fn escape_selector(value: &str) -> Result<String> {
    let regex = SELECTOR_META
        .as_ref()
        .map_err(|err| Error::UnsupportedSelector(format!("escape pattern: {err}")))?;
    let escaped = regex
        .try_replacen(value, 0, |caps: &Captures<'_>| format!("\\{}", &caps[1]))
        .map_err(|err| Error::UnsupportedSelector(format!("escape {value:?}: {err}")))?;
    Ok(escaped.into_owned())
}
