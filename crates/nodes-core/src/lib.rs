//! # Nodes Core
//!
//! Node records, the in-memory node store and the CRUD contract the HTTP
//! layer drives. Nothing in this crate performs I/O apart from reading the
//! configuration file at startup.

#![warn(missing_docs)]

/// Application configuration, state and factory
pub mod core;

/// Default values shared by configuration and server
pub mod constants;

/// Record and error types
pub mod types;

/// Node storage backends
pub mod storage;

/// CRUD contract over a node store
pub mod service;

// Re-export commonly used items
pub use types::{Node, NodeError, NodeId, NodeInput};
pub use storage::{MemoryNodeStore, NodeStorage, StorageImpl};
pub use service::NodeService;
