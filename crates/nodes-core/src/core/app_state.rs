//! Application state
//!
//! One `AppState` is built at startup and shared by every request handler. It
//! owns the node store (through the service) for the lifetime of the process.

use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::core::config::Config;
use crate::service::NodeService;
use crate::storage::StorageImpl;

/// Central application state holding all services and components
pub struct AppState<S: StorageImpl> {
    /// CRUD contract over the configured store
    pub nodes: NodeService<S>,

    /// Application configuration
    pub config: Config,

    started_at: Instant,
}

// Manual Clone so S does not need to be Clone; the store sits behind an Arc
impl<S: StorageImpl> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            nodes: self.nodes.clone(),
            config: self.config.clone(),
            started_at: self.started_at,
        }
    }
}

impl<S: StorageImpl> AppState<S> {
    /// Create a new AppState around an already constructed store
    pub fn new(store: Arc<S>, config: Config) -> Self {
        Self {
            nodes: NodeService::new(store),
            config,
            started_at: Instant::now(),
        }
    }

    /// Time since the state was created
    pub fn uptime(&self) -> Duration {
        self.started_at.elapsed()
    }
}
