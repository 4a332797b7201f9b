use super::*;

impl Dom {
    /// Concatenated text of every text node under `node_id`.
    pub fn text_content(&self, node_id: NodeId) -> String {
        let mut out = String::new();
        let mut stack = vec![node_id];
        while let Some(node) = stack.pop() {
            let Some(entry) = self.nodes.get(node.0) else {
                continue;
            };
            match &entry.node_type {
                NodeType::Text(text) => out.push_str(text),
                NodeType::Document | NodeType::Element(_) => {
                    for child in entry.children.iter().rev() {
                        stack.push(*child);
                    }
                }
            }
        }
        out
    }

    pub fn set_text_content(&mut self, node_id: NodeId, value: &str) -> Result<()> {
        self.require_element(node_id, "textContent")?;
        self.detach_children(node_id);
        if !value.is_empty() {
            self.create_text(node_id, value.to_string());
        }
        self.rebuild_id_index();
        Ok(())
    }

    pub fn inner_html(&self, node_id: NodeId) -> Result<String> {
        self.require_element(node_id, "innerHTML")?;
        let mut out = String::new();
        for child in &self.nodes[node_id.0].children {
            out.push_str(&self.dump_node(*child));
        }
        Ok(out)
    }

    /// Replaces the children of `node_id` with the parsed fragment.
    pub fn set_inner_html(&mut self, node_id: NodeId, html: &str) -> Result<Vec<NodeId>> {
        self.require_element(node_id, "innerHTML")?;
        let ParseOutput { dom: fragment } = parse_html(html)?;
        self.detach_children(node_id);
        self.import_fragment(&fragment, node_id)
    }

    /// Parses `html` and appends the resulting nodes to `node_id`, returning the
    /// top-level nodes appended.
    pub fn append_html(&mut self, node_id: NodeId, html: &str) -> Result<Vec<NodeId>> {
        self.require_element(node_id, "append")?;
        let ParseOutput { dom: fragment } = parse_html(html)?;
        self.import_fragment(&fragment, node_id)
    }

    fn detach_children(&mut self, node_id: NodeId) {
        let old_children = std::mem::take(&mut self.nodes[node_id.0].children);
        for child in old_children {
            self.nodes[child.0].parent = None;
            self.forget_listeners_in(child);
        }
    }

    fn import_fragment(&mut self, fragment: &Dom, parent: NodeId) -> Result<Vec<NodeId>> {
        let mut imported = Vec::new();
        for child in &fragment.nodes[fragment.root.0].children {
            imported.push(self.clone_subtree_from_dom(fragment, *child, parent)?);
        }
        self.rebuild_id_index();
        // Inserted checked radios take over their group like in a browser.
        for node in &imported {
            self.normalize_radio_groups(*node)?;
        }
        tracing::trace!(
            target: "input_bindings::dom",
            ?parent,
            imported = imported.len(),
            "imported html fragment"
        );
        Ok(imported)
    }

    pub fn dump_node(&self, node_id: NodeId) -> String {
        let Some(entry) = self.nodes.get(node_id.0) else {
            return String::new();
        };
        match &entry.node_type {
            NodeType::Document => {
                let mut out = String::new();
                for child in &entry.children {
                    out.push_str(&self.dump_node(*child));
                }
                out
            }
            NodeType::Text(text) => escape_html_text_for_serialization(text),
            NodeType::Element(element) => {
                let mut out = String::new();
                out.push('<');
                out.push_str(&element.tag_name);
                let mut attrs = element.attrs.iter().collect::<Vec<_>>();
                attrs.sort_by(|(left, _), (right, _)| left.cmp(right));
                for (k, v) in attrs {
                    out.push(' ');
                    out.push_str(k);
                    out.push_str("=\"");
                    out.push_str(&escape_html_attr_for_serialization(v));
                    out.push('"');
                }
                out.push('>');
                if is_void_tag(&element.tag_name) {
                    return out;
                }
                for child in &entry.children {
                    out.push_str(&self.dump_node(*child));
                }
                out.push_str("</");
                out.push_str(&element.tag_name);
                out.push('>');
                out
            }
        }
    }
}
