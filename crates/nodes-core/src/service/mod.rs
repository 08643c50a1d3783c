//! CRUD contract over a node store
//!
//! `NodeService` is what request handlers call. It stamps timestamps, asks the
//! store for ids and turns missing records into [`NodeError::NotFound`]. Status
//! codes are the transport's business; the mapping the HTTP layer uses is
//! create → 201, list/get/update → 200, delete → 204, `NotFound` → 404.
//!
//! Each call maps onto a single store operation, so it is atomic on its own.
//! Update goes through `NodeStorage::replace`, which means a concurrent delete
//! either wins before the update (update sees `NotFound`) or after it.

use chrono::Utc;
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::storage::StorageImpl;
use crate::types::{Node, NodeError, NodeInput, NodeResult};

/// Node CRUD operations backed by a shared store
pub struct NodeService<S: StorageImpl> {
    store: Arc<S>,
}

// Cloning only bumps the Arc; S itself need not be Clone
impl<S: StorageImpl> Clone for NodeService<S> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
        }
    }
}

impl<S: StorageImpl> NodeService<S> {
    /// Wrap a shared store
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Create a node from `input` and return the stored record
    pub fn create(&self, input: NodeInput) -> Node {
        let now = Utc::now();
        let id = self.store.next_id();
        let node = Node::from_input(id.clone(), input, now);
        self.store.insert(id, node.clone());
        info!(id = %node.id, "node created");
        node
    }

    /// All nodes currently stored, in no particular order
    pub fn list(&self) -> Vec<Node> {
        let nodes = self.store.list();
        debug!(count = nodes.len(), "listed nodes");
        nodes
    }

    /// A single node by id
    pub fn get(&self, id: &str) -> NodeResult<Node> {
        self.store.get(id).ok_or_else(|| not_found(id))
    }

    /// Replace the content of node `id`, keeping its creation time
    pub fn update(&self, id: &str, input: NodeInput) -> NodeResult<Node> {
        let node = self
            .store
            .replace(id, |existing| existing.clone().replaced(input, Utc::now()))
            .ok_or_else(|| not_found(id))?;
        info!(%id, "node updated");
        Ok(node)
    }

    /// Remove node `id`
    pub fn delete(&self, id: &str) -> NodeResult<()> {
        if self.store.delete(id) {
            info!(%id, "node deleted");
            Ok(())
        } else {
            Err(not_found(id))
        }
    }

    /// Number of stored nodes
    pub fn count(&self) -> usize {
        self.store.len()
    }
}

fn not_found(id: &str) -> NodeError {
    warn!(%id, "node not found");
    NodeError::NotFound(id.to_string())
}

#[cfg(test)]
mod tests;
