//! Storage layer for the Nodes API
//!
//! This module provides the storage abstraction the CRUD contract is written
//! against. Backends own both the node map and the identifier counter, and must
//! serialize every operation with respect to every other one.

use crate::types::{Node, NodeId};

/// Trait for node storage implementations
pub trait NodeStorage: Send + Sync {
    /// Advance the identifier counter and return the new value as a string.
    /// No two calls ever return the same id.
    fn next_id(&self) -> NodeId;

    /// Insert or overwrite the node stored under `id`
    fn insert(&self, id: NodeId, node: Node);

    /// Rewrite the node stored under `id` in place with `f`, returning the new
    /// record. Returns `None` and leaves the store untouched if `id` is absent.
    /// The read and the write happen under one lock acquisition.
    fn replace<F>(&self, id: &str, f: F) -> Option<Node>
    where
        F: FnOnce(&Node) -> Node;

    /// Get a copy of the node stored under `id`
    fn get(&self, id: &str) -> Option<Node>;

    /// Snapshot of every stored node, in no particular order
    fn list(&self) -> Vec<Node>;

    /// Remove the node stored under `id`, returning whether it existed
    fn delete(&self, id: &str) -> bool;

    /// Number of stored nodes
    fn len(&self) -> usize;

    /// Whether the store holds no nodes
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Mutex-guarded in-memory store
pub mod memory;

pub use memory::MemoryNodeStore;

/// Helper trait that combines all requirements for storage implementations
/// This cleans up generic bounds throughout the codebase
pub trait StorageImpl: NodeStorage + Send + Sync + 'static {}

/// Blanket implementation for any type that meets the requirements
impl<T> StorageImpl for T where T: NodeStorage + Send + Sync + 'static {}
