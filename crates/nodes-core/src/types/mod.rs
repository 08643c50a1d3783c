//! Type definitions for node records and their errors

/// Node record and input payload
pub mod node;

/// Domain error type
pub mod error;

pub use node::{Node, NodeId, NodeInput};
pub use error::{NodeError, NodeResult};
