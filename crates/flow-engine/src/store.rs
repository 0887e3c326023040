use std::collections::{BTreeSet, HashMap};
use std::sync::RwLock;

use crate::error::AnalyzerError;

/// Id of the synthetic root component representing the internet.
pub const INTERNET_ID: u32 = 0;

/// A node in the topology graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Component {
    pub name: String,
    /// Outgoing edges, kept ordered so traversal is deterministic.
    pub connections: BTreeSet<u32>,
}

impl Component {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            connections: BTreeSet::new(),
        }
    }
}

struct Inner {
    components: HashMap<u32, Component>,
    next_id: u32,
}

/// Registry for components and the directed communications between them.
///
/// All mutations and reads go through one lock, so a path computation
/// never observes a half-applied edge insertion. The root component is
/// created exactly once here and is never removed.
pub struct TopologyStore {
    inner: RwLock<Inner>,
}

impl Default for TopologyStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TopologyStore {
    pub fn new() -> Self {
        let mut components = HashMap::new();
        components.insert(INTERNET_ID, Component::new("The internet"));
        Self {
            inner: RwLock::new(Inner {
                components,
                next_id: 1,
            }),
        }
    }

    /// Registers a component and returns its freshly allocated id.
    pub fn add_component(&self, name: &str) -> u32 {
        let mut inner = self.inner.write().unwrap();
        let cid = inner.next_id;
        inner.next_id += 1;
        inner.components.insert(cid, Component::new(name));
        tracing::debug!(cid, name, "registered component");
        cid
    }

    /// Records a directed communication from `source` to `destination`.
    /// A missing source means the traffic originates from the internet.
    ///
    /// Both endpoints must already exist; nothing is committed when the
    /// existence check fails. Re-adding an existing communication is a
    /// no-op.
    pub fn add_communication(
        &self,
        source: Option<u32>,
        destination: u32,
    ) -> Result<(), AnalyzerError> {
        let source = source.unwrap_or(INTERNET_ID);
        let mut inner = self.inner.write().unwrap();
        if !inner.components.contains_key(&destination) {
            return Err(AnalyzerError::ComponentNotFound(destination));
        }
        let component = inner
            .components
            .get_mut(&source)
            .ok_or(AnalyzerError::ComponentNotFound(source))?;
        component.connections.insert(destination);
        tracing::debug!(source, destination, "recorded communication");
        Ok(())
    }

    /// Consistent read view of the whole graph for path computation.
    /// Reflects every mutation committed before the call.
    pub fn snapshot(&self) -> HashMap<u32, Component> {
        self.inner.read().unwrap().components.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_exists_and_ids_start_at_one() {
        let store = TopologyStore::new();
        let snapshot = store.snapshot();
        assert_eq!(snapshot[&INTERNET_ID].name, "The internet");

        let first = store.add_component("gateway");
        let second = store.add_component("gateway");
        assert_eq!(first, 1);
        assert_eq!(second, 2);
    }

    #[test]
    fn missing_source_defaults_to_internet() {
        let store = TopologyStore::new();
        let cid = store.add_component("web");
        store.add_communication(None, cid).unwrap();

        let snapshot = store.snapshot();
        assert!(snapshot[&INTERNET_ID].connections.contains(&cid));
    }

    #[test]
    fn rejects_unknown_endpoints() {
        let store = TopologyStore::new();
        let cid = store.add_component("web");

        assert_eq!(
            store.add_communication(Some(cid), 99),
            Err(AnalyzerError::ComponentNotFound(99))
        );
        assert_eq!(
            store.add_communication(Some(99), cid),
            Err(AnalyzerError::ComponentNotFound(99))
        );
        // Failed insertions leave no partial state behind.
        assert!(store.snapshot()[&cid].connections.is_empty());
    }

    #[test]
    fn duplicate_communications_are_idempotent() {
        let store = TopologyStore::new();
        let a = store.add_component("a");
        let b = store.add_component("b");
        store.add_communication(Some(a), b).unwrap();
        store.add_communication(Some(a), b).unwrap();

        let snapshot = store.snapshot();
        assert_eq!(snapshot[&a].connections.len(), 1);
    }

    #[test]
    fn self_loops_are_allowed() {
        let store = TopologyStore::new();
        let a = store.add_component("a");
        store.add_communication(Some(a), a).unwrap();
        assert!(store.snapshot()[&a].connections.contains(&a));
    }
}
