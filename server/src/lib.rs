//! # Nodes Server
//!
//! HTTP transport for the Nodes API: routing, middleware, logging setup and
//! server startup around the `nodes-core` CRUD contract.

#![warn(missing_docs)]

/// HTTP API handlers and routing
pub mod api;

/// Command line parsing and config resolution
pub mod cli;

/// Tracing subscriber setup
pub mod logging;

// Re-export the core crate for downstream users
pub use nodes_core;
