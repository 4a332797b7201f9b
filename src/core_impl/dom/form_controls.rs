use super::*;

fn is_input_of_type(dom: &Dom, node_id: NodeId, kind: &str) -> bool {
    let Some(element) = dom.element(node_id) else {
        return false;
    };

    if !element.tag_name.eq_ignore_ascii_case("input") {
        return false;
    }

    element
        .attrs
        .get("type")
        .map(|value| value.trim().eq_ignore_ascii_case(kind))
        .unwrap_or(false)
}

pub(crate) fn is_radio_input(dom: &Dom, node_id: NodeId) -> bool {
    is_input_of_type(dom, node_id, "radio")
}

pub(crate) fn is_checkbox_input(dom: &Dom, node_id: NodeId) -> bool {
    is_input_of_type(dom, node_id, "checkbox")
}

pub(crate) fn is_form_control(dom: &Dom, node_id: NodeId) -> bool {
    dom.tag_name(node_id).is_some_and(|tag| {
        ["input", "select", "textarea", "button"]
            .iter()
            .any(|control| tag.eq_ignore_ascii_case(control))
    })
}

impl Dom {
    pub fn checked(&self, node_id: NodeId) -> Result<bool> {
        Ok(self.require_element(node_id, "checked")?.checked)
    }

    /// Sets the checked state. Checking a radio unchecks every other radio with the
    /// same name, form owner and tree, the way a browser does.
    pub fn set_checked(&mut self, node_id: NodeId, checked: bool) -> Result<()> {
        if checked && is_radio_input(self, node_id) {
            self.uncheck_other_radios_in_group(node_id);
        }
        self.require_element_mut(node_id, "checked")?.checked = checked;
        Ok(())
    }

    pub(crate) fn uncheck_other_radios_in_group(&mut self, target: NodeId) {
        let target_name = self.attr(target, "name").unwrap_or_default();
        if target_name.is_empty() {
            return;
        }
        let target_form = self.find_ancestor_by_tag(target, "form");
        let target_tree = self.tree_root(target);

        let mut candidates = Vec::new();
        self.collect_elements_dfs(target_tree, &mut candidates);
        for node in candidates {
            if node == target || !is_radio_input(self, node) {
                continue;
            }
            if self.attr(node, "name").unwrap_or_default() != target_name {
                continue;
            }
            if self.find_ancestor_by_tag(node, "form") != target_form {
                continue;
            }
            if let Some(element) = self.element_mut(node) {
                element.checked = false;
            }
        }
    }

    /// Re-applies `checked` to every checked radio under `scope` so the last one in
    /// document order wins within its group.
    pub(crate) fn normalize_radio_groups(&mut self, scope: NodeId) -> Result<()> {
        let mut nodes = Vec::new();
        self.collect_elements_dfs(scope, &mut nodes);
        let checked = nodes
            .into_iter()
            .filter(|node| is_radio_input(self, *node) && self.element(*node).is_some_and(|e| e.checked))
            .collect::<Vec<_>>();
        for node in checked {
            self.set_checked(node, true)?;
        }
        Ok(())
    }

    /// The `value` property. Radios and checkboxes without a `value` attribute
    /// report `"on"`.
    pub fn value(&self, node_id: NodeId) -> Result<String> {
        let element = self.require_element(node_id, "value")?;
        if (is_radio_input(self, node_id) || is_checkbox_input(self, node_id))
            && !element.attrs.contains_key("value")
        {
            return Ok("on".to_string());
        }
        Ok(element.value.clone())
    }

    pub fn disabled(&self, node_id: NodeId) -> bool {
        self.element(node_id).map(|e| e.disabled).unwrap_or(false)
    }
}
