use super::*;
use super::dom::is_form_control;
use super::html::ParseOutput;
use crate::bindings::InputBinding;

/// Owns a page and drives user actions, binding updates and assertions against it.
#[derive(Debug)]
pub struct Harness {
    dom: Dom,
}

impl Harness {
    pub fn from_html(html: &str) -> Result<Self> {
        stacker::grow(32 * 1024 * 1024, || -> Result<Self> {
            let ParseOutput { dom } = parse_html(html)?;
            Ok(Self { dom })
        })
    }

    pub fn dom(&self) -> &Dom {
        &self.dom
    }

    pub fn dom_mut(&mut self) -> &mut Dom {
        &mut self.dom
    }

    /// First element matching `selector`, or [`Error::SelectorNotFound`].
    pub fn select_one(&self, selector: &str) -> Result<NodeId> {
        self.dom
            .query_selector(selector)?
            .ok_or_else(|| Error::SelectorNotFound(selector.to_string()))
    }

    /// Checks or unchecks a checkbox or radio the way a user would: disabled
    /// controls are ignored and a state change fires `input` then `change`.
    pub fn set_checked(&mut self, selector: &str, checked: bool) -> Result<()> {
        let target = self.select_one(selector)?;
        if self.is_effectively_disabled(target) {
            return Ok(());
        }
        let tag = self
            .dom
            .tag_name(target)
            .unwrap_or_default()
            .to_ascii_lowercase();
        if tag != "input" {
            return Err(Error::TypeMismatch {
                selector: selector.to_string(),
                expected: "input[type=checkbox|radio]".into(),
                actual: tag,
            });
        }

        let kind = self
            .dom
            .attr(target, "type")
            .unwrap_or_else(|| "text".into())
            .to_ascii_lowercase();
        if kind != "checkbox" && kind != "radio" {
            return Err(Error::TypeMismatch {
                selector: selector.to_string(),
                expected: "input[type=checkbox|radio]".into(),
                actual: format!("input[type={kind}]"),
            });
        }

        stacker::grow(32 * 1024 * 1024, || -> Result<()> {
            let current = self.dom.checked(target)?;
            if current != checked {
                self.dom.set_checked(target, checked)?;
                let trusted = EventOptions {
                    bubbles: true,
                    is_trusted: true,
                };
                self.dom.dispatch_event_with_options(target, "input", trusted)?;
                self.dom.dispatch_event_with_options(target, "change", trusted)?;
            }

            Ok(())
        })
    }

    /// Fires a synthetic bubbling event at the first match of `selector`.
    pub fn dispatch(&mut self, selector: &str, event_type: &str) -> Result<()> {
        let target = self.select_one(selector)?;
        self.dom.dispatch_event(target, event_type)?;
        Ok(())
    }

    /// Delivers a server update to the element matching `selector` and blocks until
    /// the binding has finished applying it.
    pub fn receive_message<B>(
        &mut self,
        binding: &B,
        selector: &str,
        data: serde_json::Value,
    ) -> Result<()>
    where
        B: InputBinding + ?Sized,
    {
        let target = self.select_one(selector)?;
        pollster::block_on(binding.receive_message(&mut self.dom, target, data))
    }

    pub fn assert_text(&self, selector: &str, expected: &str) -> Result<()> {
        let target = self.select_one(selector)?;
        let actual = self.dom.text_content(target);
        if actual != expected {
            return Err(Error::AssertionFailed {
                selector: selector.to_string(),
                expected: expected.to_string(),
                actual,
                dom_snippet: self.node_snippet(target),
            });
        }
        Ok(())
    }

    pub fn assert_value(&self, selector: &str, expected: &str) -> Result<()> {
        let target = self.select_one(selector)?;
        let actual = self.dom.value(target)?;
        if actual != expected {
            return Err(Error::AssertionFailed {
                selector: selector.to_string(),
                expected: expected.to_string(),
                actual,
                dom_snippet: self.node_snippet(target),
            });
        }
        Ok(())
    }

    pub fn assert_checked(&self, selector: &str, expected: bool) -> Result<()> {
        let target = self.select_one(selector)?;
        let actual = self.dom.checked(target)?;
        if actual != expected {
            return Err(Error::AssertionFailed {
                selector: selector.to_string(),
                expected: expected.to_string(),
                actual: actual.to_string(),
                dom_snippet: self.node_snippet(target),
            });
        }
        Ok(())
    }

    pub fn assert_exists(&self, selector: &str) -> Result<()> {
        let _ = self.select_one(selector)?;
        Ok(())
    }

    pub fn dump_dom(&self, selector: &str) -> Result<String> {
        let target = self.select_one(selector)?;
        Ok(self.dom.dump_node(target))
    }

    /// Disabled itself, or a form control inside a disabled `<fieldset>`.
    fn is_effectively_disabled(&self, node: NodeId) -> bool {
        if self.dom.disabled(node) {
            return true;
        }
        if !is_form_control(&self.dom, node) {
            return false;
        }

        let mut cursor = self.dom.parent(node);
        while let Some(parent) = cursor {
            if self
                .dom
                .tag_name(parent)
                .is_some_and(|tag| tag.eq_ignore_ascii_case("fieldset"))
                && self.dom.disabled(parent)
            {
                return true;
            }
            cursor = self.dom.parent(parent);
        }

        false
    }

    fn node_snippet(&self, node_id: NodeId) -> String {
        truncate_chars(&self.dom.dump_node(node_id), 200)
    }
}
