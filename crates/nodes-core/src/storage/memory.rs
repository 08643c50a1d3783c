//! In-memory node store guarded by a single mutex
//!
//! The node map and the identifier counter live behind one
//! `parking_lot::Mutex`, so id assignment, writes and snapshots are totally
//! ordered. Every operation holds the lock only for the map access itself.

use parking_lot::Mutex;
use std::collections::HashMap;
use tracing::trace;

use crate::storage::NodeStorage;
use crate::types::{Node, NodeId};

#[derive(Debug, Default)]
struct Inner {
    nodes: HashMap<NodeId, Node>,
    /// Last id handed out; zero until the first `next_id`
    last_id: u64,
}

/// Process-local node store. Empty on construction, counter at zero.
#[derive(Debug, Default)]
pub struct MemoryNodeStore {
    inner: Mutex<Inner>,
}

impl MemoryNodeStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }
}

impl NodeStorage for MemoryNodeStore {
    fn next_id(&self) -> NodeId {
        let mut inner = self.inner.lock();
        inner.last_id += 1;
        inner.last_id.to_string()
    }

    fn insert(&self, id: NodeId, node: Node) {
        let mut inner = self.inner.lock();
        if inner.nodes.insert(id.clone(), node).is_some() {
            trace!(%id, "overwrote node");
        }
    }

    fn replace<F>(&self, id: &str, f: F) -> Option<Node>
    where
        F: FnOnce(&Node) -> Node,
    {
        let mut inner = self.inner.lock();
        let slot = inner.nodes.get_mut(id)?;
        *slot = f(slot);
        Some(slot.clone())
    }

    fn get(&self, id: &str) -> Option<Node> {
        self.inner.lock().nodes.get(id).cloned()
    }

    fn list(&self) -> Vec<Node> {
        self.inner.lock().nodes.values().cloned().collect()
    }

    fn delete(&self, id: &str) -> bool {
        self.inner.lock().nodes.remove(id).is_some()
    }

    fn len(&self) -> usize {
        self.inner.lock().nodes.len()
    }
}
