use super::*;

/// Renders the option markup of a radio group named `group_id`.
///
/// A choice without a label shows its value. `selected` marks the matching choice
/// `checked`; `inline` lays choices out as `label.radio-inline`.
pub fn render_options(
    group_id: &str,
    choices: &[ValueLabel],
    selected: Option<&str>,
    inline: bool,
) -> String {
    let name = escape_html_attr_for_serialization(group_id);
    let mut out = String::from("<div class=\"shiny-options-group\">");
    for choice in choices {
        let value = escape_html_attr_for_serialization(&choice.value);
        let text = escape_html_text_for_serialization(
            choice.label.as_deref().unwrap_or(&choice.value),
        );
        let checked = if selected == Some(choice.value.as_str()) {
            " checked=\"checked\""
        } else {
            ""
        };
        let input =
            format!("<input type=\"radio\" name=\"{name}\" value=\"{value}\"{checked}/><span>{text}</span>");
        if inline {
            out.push_str(&format!("<label class=\"radio-inline\">{input}</label>"));
        } else {
            out.push_str(&format!("<div class=\"radio\"><label>{input}</label></div>"));
        }
    }
    out.push_str("</div>");
    out
}
