//! Application Factory
//!
//! Builds the [`AppState`] from a validated configuration.

use std::sync::Arc;
use thiserror::Error;
use tracing::info;

use crate::core::app_state::AppState;
use crate::core::config::{Config, ConfigError};
use crate::storage::MemoryNodeStore;

/// AppState factory errors
#[derive(Debug, Error)]
pub enum AppStateFactoryError {
    /// Configuration did not validate
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Create AppState based on configuration
///
/// The store always starts empty with its id counter at zero.
pub fn create_app_state(config: Config) -> Result<Arc<AppState<MemoryNodeStore>>, AppStateFactoryError> {
    config.validate()?;

    info!("Initializing in-memory node store");
    let store = Arc::new(MemoryNodeStore::new());

    let app_state = AppState::new(store, config);
    info!("AppState created successfully");
    Ok(Arc::new(app_state))
}
