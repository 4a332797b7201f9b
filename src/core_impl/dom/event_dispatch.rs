use super::*;

impl Dom {
    /// Registers `handler` for a spec like `change` or `change.myNamespace`.
    pub fn on<F>(&mut self, node_id: NodeId, spec: &str, handler: F) -> Result<()>
    where
        F: FnMut(&EventState) + 'static,
    {
        self.require_element(node_id, "on")?;
        let EventSpec {
            event_type,
            namespaces,
        } = EventSpec::parse(spec)?;
        let Some(event_type) = event_type else {
            return Err(Error::InvalidEvent(spec.to_string()));
        };
        let handler: EventHandler = Rc::new(RefCell::new(handler));
        self.listeners.add(
            node_id,
            event_type,
            Listener {
                namespaces,
                handler,
            },
        );
        Ok(())
    }

    /// Removes the listeners selected by `spec` (`change`, `.ns`, `change.ns`) and
    /// returns how many were removed. Listeners outside the spec are kept.
    pub fn off(&mut self, node_id: NodeId, spec: &str) -> Result<usize> {
        let spec = EventSpec::parse(spec)?;
        Ok(self.listeners.remove(node_id, &spec))
    }

    pub fn listener_count(&self, node_id: NodeId, event_type: &str) -> usize {
        self.listeners
            .count(node_id, &event_type.to_ascii_lowercase())
    }

    /// Dispatches a synthetic, bubbling event at `target`.
    pub fn dispatch_event(&mut self, target: NodeId, event_type: &str) -> Result<EventState> {
        self.dispatch_event_with_options(target, event_type, EventOptions::default())
    }

    pub(crate) fn dispatch_event_with_options(
        &mut self,
        target: NodeId,
        event_type: &str,
        options: EventOptions,
    ) -> Result<EventState> {
        self.require_element(target, "dispatchEvent")?;
        let event_type = event_type.to_ascii_lowercase();

        let mut path = vec![target];
        if options.bubbles {
            let mut cursor = self.parent(target);
            while let Some(node) = cursor {
                path.push(node);
                cursor = self.parent(node);
            }
        }

        let mut event = EventState {
            event_type: event_type.clone(),
            target,
            current_target: target,
            bubbles: options.bubbles,
            is_trusted: options.is_trusted,
        };
        tracing::trace!(
            target: "input_bindings::dom",
            event = %event_type,
            ?target,
            trusted = options.is_trusted,
            "dispatching event"
        );

        for node in path {
            event.current_target = node;
            // Snapshot so handlers registered during dispatch do not run this time.
            for listener in self.listeners.get(node, &event_type) {
                let mut handler = listener.handler.borrow_mut();
                (*handler)(&event);
            }
        }

        Ok(event)
    }
}
