use super::*;

/// Markup conventions the radio binding relies on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RadioMarkup {
    pub container_selector: String,
    /// Option markup removed before new options are appended, current layout first.
    pub removable_option_selectors: Vec<String>,
    pub event_namespace: String,
    pub hidden_label_class: String,
    /// Container class that switches rendered choices to the inline layout.
    pub inline_container_class: String,
}

impl Default for RadioMarkup {
    fn default() -> Self {
        Self {
            container_selector: ".shiny-input-radiogroup".into(),
            removable_option_selectors: vec![
                "div.shiny-options-group".into(),
                "label.radio".into(),
            ],
            event_namespace: "radioInputBinding".into(),
            hidden_label_class: "shiny-label-null".into(),
            inline_container_class: "shiny-input-container-inline".into(),
        }
    }
}

/// Binding for groups of mutually exclusive radio inputs.
///
/// The container's `id` names the group: its choices are every
/// `input[type=radio]` in the document whose `name` equals that id.
#[derive(Debug, Clone, Default)]
pub struct RadioInputBinding {
    markup: RadioMarkup,
}

impl RadioInputBinding {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_markup(markup: RadioMarkup) -> Self {
        Self { markup }
    }

    pub fn markup(&self) -> &RadioMarkup {
        &self.markup
    }

    fn group_id(dom: &Dom, el: NodeId) -> String {
        dom.attr(el, "id").unwrap_or_default()
    }

    fn radios_selector(dom: &Dom, el: NodeId) -> Result<String> {
        Ok(format!(
            "input:radio[name=\"{}\"]",
            escape_selector(&Self::group_id(dom, el))?
        ))
    }

    /// Every radio of the group, in document order.
    pub fn radios(&self, dom: &Dom, el: NodeId) -> Result<Vec<NodeId>> {
        dom.query_selector_all(&Self::radios_selector(dom, el)?)
    }

    /// Value of the checked radio, or `None` when nothing is checked.
    pub fn value(&self, dom: &Dom, el: NodeId) -> Result<Option<String>> {
        let selector = format!("{}:checked", Self::radios_selector(dom, el)?);
        match dom.query_selector(&selector)? {
            Some(checked) => dom.value(checked).map(Some),
            None => Ok(None),
        }
    }

    /// Applies a selection. Checking one radio unchecks its siblings through the
    /// store's group exclusivity; [`SelectionValue::None`] changes nothing.
    pub fn set_selection(&self, dom: &mut Dom, el: NodeId, value: &SelectionValue) -> Result<()> {
        match value {
            SelectionValue::ClearAll => {
                for radio in self.radios(dom, el)? {
                    dom.set_checked(radio, false)?;
                }
            }
            SelectionValue::Single(value) => {
                let selector = format!(
                    "{}[value=\"{}\"]",
                    Self::radios_selector(dom, el)?,
                    escape_selector(value)?
                );
                for radio in dom.query_selector_all(&selector)? {
                    dom.set_checked(radio, true)?;
                }
            }
            SelectionValue::None => {}
        }
        tracing::debug!(
            target: "input_bindings::radio",
            group = %Self::group_id(dom, el),
            ?value,
            "selection applied"
        );
        Ok(())
    }

    /// Group label nodes: `label[for=<id>]` among the descendants of the
    /// container's parent.
    pub fn label_nodes(&self, dom: &Dom, el: NodeId) -> Result<Vec<NodeId>> {
        let Some(parent) = dom.parent(el) else {
            return Ok(Vec::new());
        };
        let selector = format!(
            "label[for=\"{}\"]",
            escape_selector(&Self::group_id(dom, el))?
        );
        dom.query_selector_all_from(parent, &selector)
    }

    pub fn state(&self, dom: &Dom, el: NodeId) -> Result<RadioState> {
        let label = self
            .label_nodes(dom, el)?
            .into_iter()
            .map(|node| dom.text_content(node))
            .collect::<String>();
        let options = self
            .radios(dom, el)?
            .into_iter()
            .map(|radio| {
                Ok(ValueLabel {
                    value: dom.value(radio)?,
                    label: choice_label(dom, radio),
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(RadioState {
            label,
            value: self.value(dom, el)?,
            options,
        })
    }

    /// Removes the current option markup (every layout the binding knows) and
    /// appends `options` in its place.
    pub fn replace_options(
        &self,
        dom: &mut Dom,
        el: NodeId,
        options: &OptionsPayload,
    ) -> Result<()> {
        for selector in &self.markup.removable_option_selectors {
            for stale in dom.query_selector_all_from(el, selector)? {
                dom.remove_node(stale)?;
            }
        }

        let markup = match options {
            OptionsPayload::Markup(markup) => markup.clone(),
            OptionsPayload::Choices(choices) => render_options(
                &Self::group_id(dom, el),
                choices,
                None,
                dom.has_class(el, &self.markup.inline_container_class),
            ),
        };
        let appended = dom.append_html(el, &markup)?;
        tracing::debug!(
            target: "input_bindings::radio",
            group = %Self::group_id(dom, el),
            appended = appended.len(),
            "options replaced"
        );
        Ok(())
    }

    /// Applies options, then value, then label, and finally fires `change` on the
    /// container once the label has been rendered.
    pub async fn apply_update(&self, dom: &mut Dom, el: NodeId, message: RadioMessage) -> Result<()> {
        let RadioMessage {
            label,
            value,
            options,
        } = message;

        if let Some(options) = &options {
            self.replace_options(dom, el, options)?;
        }
        if let Some(value) = &value {
            self.set_selection(dom, el, value)?;
        }

        let nodes = self.label_nodes(dom, el)?;
        update_label(dom, label.as_ref(), &nodes, &self.markup.hidden_label_class).await?;

        dom.dispatch_event(el, "change")?;
        Ok(())
    }

    fn namespaced(&self, event_type: &str) -> String {
        format!("{event_type}.{}", self.markup.event_namespace)
    }
}

impl InputBinding for RadioInputBinding {
    fn find(&self, dom: &Dom, scope: NodeId) -> Result<Vec<NodeId>> {
        dom.query_selector_all_from(scope, &self.markup.container_selector)
    }

    fn get_value(&self, dom: &Dom, el: NodeId) -> Result<serde_json::Value> {
        Ok(SelectionValue::from(self.value(dom, el)?).into())
    }

    fn set_value(&self, dom: &mut Dom, el: NodeId, value: serde_json::Value) -> Result<()> {
        let value = SelectionValue::try_from(value)?;
        self.set_selection(dom, el, &value)
    }

    fn get_state(&self, dom: &Dom, el: NodeId) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(self.state(dom, el)?)?)
    }

    fn receive_message<'a>(
        &'a self,
        dom: &'a mut Dom,
        el: NodeId,
        data: serde_json::Value,
    ) -> LocalBoxFuture<'a, Result<()>> {
        Box::pin(async move {
            let message: RadioMessage = serde_json::from_value(data)?;
            tracing::debug!(
                target: "input_bindings::radio",
                group = %Self::group_id(dom, el),
                label = message.label.is_some(),
                value = message.value.is_some(),
                options = message.options.is_some(),
                "receiving message"
            );
            self.apply_update(dom, el, message).await
        })
    }

    /// Reports every `change` reaching the container as `callback(false)`.
    /// Subscribing twice keeps a single listener.
    fn subscribe(&self, dom: &mut Dom, el: NodeId, mut callback: ChangeCallback) -> Result<()> {
        self.unsubscribe(dom, el)?;
        dom.on(el, &self.namespaced("change"), move |_event| callback(false))
    }

    fn unsubscribe(&self, dom: &mut Dom, el: NodeId) -> Result<()> {
        let removed = dom.off(el, &self.namespaced(""))?;
        tracing::trace!(target: "input_bindings::radio", removed, "unsubscribed");
        Ok(())
    }
}

/// Text of the `<span>`s inside the `<label>` wrapping `input`, trimmed. `None`
/// when the input is not wrapped by a label.
pub fn choice_label(dom: &Dom, input: NodeId) -> Option<String> {
    let parent = wrapping_label(dom, input)?;
    let spans = dom.query_selector_all_from(parent, "span").ok()?;
    let text = spans
        .into_iter()
        .map(|span| dom.text_content(span))
        .collect::<String>();
    Some(text.trim().to_string())
}

/// Replaces the text of every `<span>` in the label wrapping `input`. Inputs
/// without a wrapping label are left alone.
pub fn set_choice_label(dom: &mut Dom, input: NodeId, text: &str) -> Result<()> {
    let Some(parent) = wrapping_label(dom, input) else {
        return Ok(());
    };
    for span in dom.query_selector_all_from(parent, "span")? {
        dom.set_text_content(span, text)?;
    }
    Ok(())
}

fn wrapping_label(dom: &Dom, input: NodeId) -> Option<NodeId> {
    dom.parent(input)
        .filter(|parent| dom.tag_name(*parent) == Some("label"))
}
