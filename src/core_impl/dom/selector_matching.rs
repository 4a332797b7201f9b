use super::*;

impl Dom {
    pub(crate) fn matches_step(&self, node_id: NodeId, step: &SelectorStep) -> bool {
        let Some(element) = self.element(node_id) else {
            return false;
        };

        if let Some(tag) = &step.tag {
            if !element.tag_name.eq_ignore_ascii_case(tag) {
                return false;
            }
        }

        if let Some(id) = &step.id {
            if element.attrs.get("id") != Some(id) {
                return false;
            }
        }

        if step
            .classes
            .iter()
            .any(|class_name| !has_class(element, class_name))
        {
            return false;
        }

        for cond in &step.attrs {
            let matched = match cond {
                SelectorAttrCondition::Exists { key } => element.attrs.contains_key(key),
                SelectorAttrCondition::Eq { key, value } => element.attrs.get(key) == Some(value),
                SelectorAttrCondition::StartsWith { key, value } => element
                    .attrs
                    .get(key)
                    .is_some_and(|attr| !value.is_empty() && attr.starts_with(value)),
                SelectorAttrCondition::EndsWith { key, value } => element
                    .attrs
                    .get(key)
                    .is_some_and(|attr| !value.is_empty() && attr.ends_with(value)),
                SelectorAttrCondition::Contains { key, value } => element
                    .attrs
                    .get(key)
                    .is_some_and(|attr| !value.is_empty() && attr.contains(value)),
                SelectorAttrCondition::Includes { key, value } => element
                    .attrs
                    .get(key)
                    .is_some_and(|attr| attr.split_whitespace().any(|token| token == value)),
                SelectorAttrCondition::DashMatch { key, value } => element
                    .attrs
                    .get(key)
                    .is_some_and(|attr| attr == value || attr.starts_with(&format!("{value}-"))),
            };
            if !matched {
                return false;
            }
        }

        step.pseudo_classes.iter().all(|pseudo| match pseudo {
            SelectorPseudoClass::FirstChild => self.previous_element_sibling(node_id).is_none(),
            SelectorPseudoClass::LastChild => self.next_element_sibling(node_id).is_none(),
            SelectorPseudoClass::Checked => element.checked,
            SelectorPseudoClass::Disabled => element.disabled,
            SelectorPseudoClass::Enabled => !element.disabled,
            SelectorPseudoClass::Radio => is_radio_input(self, node_id),
            SelectorPseudoClass::Checkbox => is_checkbox_input(self, node_id),
            SelectorPseudoClass::Not(inners) => !inners
                .iter()
                .any(|inner| self.matches_selector_chain(node_id, inner)),
        })
    }

    pub(crate) fn matches_selector_chain(&self, node_id: NodeId, steps: &[SelectorPart]) -> bool {
        let Some(last) = steps.last() else {
            return false;
        };
        self.matches_step(node_id, &last.step) && self.matches_chain_prefix(node_id, steps, steps.len() - 1)
    }

    /// Whether `steps[..idx]` matches relative to `current`, which already matched
    /// `steps[idx]`. Descendant and general-sibling steps try every candidate.
    fn matches_chain_prefix(&self, current: NodeId, steps: &[SelectorPart], idx: usize) -> bool {
        if idx == 0 {
            return true;
        }
        let prev_step = &steps[idx - 1].step;
        let rest_matches = |candidate: NodeId| {
            self.matches_step(candidate, prev_step)
                && self.matches_chain_prefix(candidate, steps, idx - 1)
        };

        match steps[idx]
            .combinator
            .unwrap_or(SelectorCombinator::Descendant)
        {
            SelectorCombinator::Child => self.parent(current).is_some_and(rest_matches),
            SelectorCombinator::AdjacentSibling => self
                .previous_element_sibling(current)
                .is_some_and(rest_matches),
            SelectorCombinator::Descendant => {
                let mut cursor = self.parent(current);
                while let Some(parent) = cursor {
                    if rest_matches(parent) {
                        return true;
                    }
                    cursor = self.parent(parent);
                }
                false
            }
            SelectorCombinator::GeneralSibling => {
                let mut cursor = self.previous_element_sibling(current);
                while let Some(sibling) = cursor {
                    if rest_matches(sibling) {
                        return true;
                    }
                    cursor = self.previous_element_sibling(sibling);
                }
                false
            }
        }
    }
}
