//! Error types for node operations

use thiserror::Error;

use super::NodeId;

/// Domain errors returned by the CRUD contract
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NodeError {
    /// No node is stored under the given id. Malformed ids end up here too.
    #[error("node {0} not found")]
    NotFound(NodeId),
}

/// Result alias for node operations
pub type NodeResult<T> = std::result::Result<T, NodeError>;
