use super::*;

pub(crate) type EventHandler = Rc<RefCell<dyn FnMut(&EventState)>>;

#[derive(Clone)]
pub(crate) struct Listener {
    pub(crate) namespaces: Vec<String>,
    pub(crate) handler: EventHandler,
}

impl fmt::Debug for Listener {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listener")
            .field("namespaces", &self.namespaces)
            .finish_non_exhaustive()
    }
}

impl Listener {
    fn in_namespaces(&self, namespaces: &[String]) -> bool {
        namespaces
            .iter()
            .all(|namespace| self.namespaces.iter().any(|own| own == namespace))
    }
}

#[derive(Debug, Default, Clone)]
pub(crate) struct ListenerStore {
    pub(crate) map: HashMap<NodeId, HashMap<String, Vec<Listener>>>,
}

impl ListenerStore {
    pub(crate) fn add(&mut self, node_id: NodeId, event: String, listener: Listener) {
        self.map
            .entry(node_id)
            .or_default()
            .entry(event)
            .or_default()
            .push(listener);
    }

    /// Drops every listener registered on `nodes`.
    pub(crate) fn forget_nodes(&mut self, nodes: &[NodeId]) -> usize {
        nodes
            .iter()
            .filter_map(|node| self.map.remove(node))
            .map(|events| events.values().map(Vec::len).sum::<usize>())
            .sum()
    }

    /// Removes listeners matched by `spec` and returns how many were dropped.
    ///
    /// A listener matches when its event type equals the requested type (any type
    /// when none is given) and it carries every requested namespace.
    pub(crate) fn remove(&mut self, node_id: NodeId, spec: &EventSpec) -> usize {
        let Some(events) = self.map.get_mut(&node_id) else {
            return 0;
        };

        let mut removed = 0usize;
        for (event_type, listeners) in events.iter_mut() {
            if spec
                .event_type
                .as_deref()
                .is_some_and(|wanted| wanted != event_type)
            {
                continue;
            }
            let before = listeners.len();
            listeners.retain(|listener| !listener.in_namespaces(&spec.namespaces));
            removed += before - listeners.len();
        }

        events.retain(|_, listeners| !listeners.is_empty());
        if events.is_empty() {
            self.map.remove(&node_id);
        }
        removed
    }

    pub(crate) fn get(&self, node_id: NodeId, event: &str) -> Vec<Listener> {
        self.map
            .get(&node_id)
            .and_then(|events| events.get(event))
            .cloned()
            .unwrap_or_default()
    }

    pub(crate) fn count(&self, node_id: NodeId, event: &str) -> usize {
        self.map
            .get(&node_id)
            .and_then(|events| events.get(event))
            .map(Vec::len)
            .unwrap_or(0)
    }
}

/// A parsed listener specification such as `change.radioInputBinding` or
/// `.radioInputBinding`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventSpec {
    pub event_type: Option<String>,
    pub namespaces: Vec<String>,
}

impl EventSpec {
    pub fn parse(spec: &str) -> Result<Self> {
        let spec = spec.trim();
        if spec.is_empty() || spec.chars().any(char::is_whitespace) {
            return Err(Error::InvalidEvent(spec.to_string()));
        }

        let mut parts = spec.split('.');
        let event_type = parts
            .next()
            .filter(|name| !name.is_empty())
            .map(str::to_ascii_lowercase);
        let mut namespaces = Vec::new();
        for namespace in parts {
            if namespace.is_empty() {
                return Err(Error::InvalidEvent(spec.to_string()));
            }
            namespaces.push(namespace.to_string());
        }

        if event_type.is_none() && namespaces.is_empty() {
            return Err(Error::InvalidEvent(spec.to_string()));
        }
        Ok(Self {
            event_type,
            namespaces,
        })
    }
}

/// What a listener observes while an event travels from its target to the root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventState {
    pub event_type: String,
    pub target: NodeId,
    pub current_target: NodeId,
    pub bubbles: bool,
    pub is_trusted: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct EventOptions {
    pub(crate) bubbles: bool,
    pub(crate) is_trusted: bool,
}

impl Default for EventOptions {
    fn default() -> Self {
        Self {
            bubbles: true,
            is_trusted: false,
        }
    }
}
