//! Node record and the input payload used by create and update

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Store key of a node. Generated from a counter, so always a decimal string.
pub type NodeId = String;

/// A stored node
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    /// Identifier assigned by the store
    pub id: NodeId,
    /// Node title
    pub title: String,
    /// Free-form description
    pub description: String,
    /// Set once at creation
    pub created_on: DateTime<Utc>,
    /// Refreshed on every successful update
    pub updated_on: DateTime<Utc>,
}

/// Content fields accepted from clients on create and update.
///
/// Missing fields decode to empty strings. Unknown fields, including any
/// client-supplied `id`, `createdOn` or `updatedOn`, are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeInput {
    /// Node title
    #[serde(default)]
    pub title: String,
    /// Free-form description
    #[serde(default)]
    pub description: String,
}

impl NodeInput {
    /// Build an input from title and description
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}

impl Node {
    /// Create a fresh node with both timestamps set to `now`
    pub fn from_input(id: NodeId, input: NodeInput, now: DateTime<Utc>) -> Self {
        Self {
            id,
            title: input.title,
            description: input.description,
            created_on: now,
            updated_on: now,
        }
    }

    /// Replace the content fields, keeping `id` and `created_on`
    pub fn replaced(self, input: NodeInput, now: DateTime<Utc>) -> Self {
        Self {
            title: input.title,
            description: input.description,
            updated_on: now,
            ..self
        }
    }
}
