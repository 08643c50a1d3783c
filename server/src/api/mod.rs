//! HTTP API module for the Nodes server

/// HTTP request handlers
pub mod api_handlers;

/// Router construction and server startup
pub mod api_server;

// Re-export commonly used items
pub use api_server::{create_router, serve, shutdown_signal, start_api_server};
