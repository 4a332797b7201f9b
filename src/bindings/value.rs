use super::*;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A selection as it travels between client and server.
///
/// `[]` on the wire is the clear-all sentinel and stays distinct from `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Value", into = "Value")]
pub enum SelectionValue {
    Single(String),
    None,
    ClearAll,
}

impl SelectionValue {
    pub fn single(value: impl Into<String>) -> Self {
        Self::Single(value.into())
    }
}

impl From<Option<String>> for SelectionValue {
    fn from(value: Option<String>) -> Self {
        value.map_or(Self::None, Self::Single)
    }
}

impl TryFrom<Value> for SelectionValue {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Null => Ok(Self::None),
            Value::Array(items) if items.is_empty() => Ok(Self::ClearAll),
            Value::Array(items) => {
                let parts = items
                    .into_iter()
                    .map(scalar_to_string)
                    .collect::<Result<Vec<_>>>()?;
                Ok(Self::Single(parts.join(",")))
            }
            other => scalar_to_string(other).map(Self::Single),
        }
    }
}

impl From<SelectionValue> for Value {
    fn from(value: SelectionValue) -> Self {
        match value {
            SelectionValue::Single(value) => Value::String(value),
            SelectionValue::None => Value::Null,
            SelectionValue::ClearAll => Value::Array(Vec::new()),
        }
    }
}

fn scalar_to_string(value: Value) -> Result<String> {
    match value {
        Value::String(text) => Ok(text),
        Value::Number(number) => Ok(number.to_string()),
        Value::Bool(flag) => Ok(flag.to_string()),
        Value::Null => Ok(String::new()),
        other => Err(Error::InvalidMessage(format!(
            "expected a scalar selection value, got {other}"
        ))),
    }
}

/// New content for a group label.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "Value")]
pub enum LabelContent {
    Html(String),
    /// Hide the label and keep its current content.
    Hidden,
}

impl TryFrom<Value> for LabelContent {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Array(items) if items.is_empty() => Ok(Self::Hidden),
            // Rich content arrives as `{html, deps}`; dependencies are not loaded here.
            Value::Object(mut fields) => match fields.remove("html") {
                Some(html) => scalar_to_string(html).map(Self::Html),
                None => Err(Error::InvalidMessage(
                    "label object is missing `html`".into(),
                )),
            },
            Value::Array(_) => Err(Error::InvalidMessage(
                "label must be a string, an html object or []".into(),
            )),
            other => scalar_to_string(other).map(Self::Html),
        }
    }
}

/// One choice of a group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueLabel {
    pub value: String,
    #[serde(default)]
    pub label: Option<String>,
}

impl ValueLabel {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: Some(label.into()),
        }
    }
}

/// Replacement option set carried by an update.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "Value")]
pub enum OptionsPayload {
    /// Server-rendered option markup, appended as parsed.
    Markup(String),
    /// Structured choices, rendered with [`render_options`] before appending.
    Choices(Vec<ValueLabel>),
}

impl TryFrom<Value> for OptionsPayload {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Null => Ok(Self::Markup(String::new())),
            Value::String(markup) => Ok(Self::Markup(markup)),
            Value::Array(items) if items.iter().all(Value::is_string) => {
                let mut markup = String::new();
                for item in items {
                    if let Value::String(chunk) = item {
                        markup.push_str(&chunk);
                    }
                }
                Ok(Self::Markup(markup))
            }
            Value::Array(items) => {
                let choices = items
                    .into_iter()
                    .map(serde_json::from_value::<ValueLabel>)
                    .collect::<std::result::Result<Vec<_>, _>>()?;
                Ok(Self::Choices(choices))
            }
            other => Err(Error::InvalidMessage(format!(
                "options must be markup or a list of choices, got {other}"
            ))),
        }
    }
}

/// A partial update pushed by the server. Absent fields leave the widget untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RadioMessage {
    #[serde(default, deserialize_with = "deserialize_present")]
    pub label: Option<LabelContent>,
    #[serde(default, deserialize_with = "deserialize_present")]
    pub value: Option<SelectionValue>,
    #[serde(default, deserialize_with = "deserialize_present")]
    pub options: Option<OptionsPayload>,
}

// A present `null` still decodes to `Some`, so it is not confused with absence.
fn deserialize_present<'de, D, T>(deserializer: D) -> std::result::Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

/// Snapshot of a group for inspection and bookmarking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RadioState {
    pub label: String,
    pub value: Option<String>,
    pub options: Vec<ValueLabel>,
}
