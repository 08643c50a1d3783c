//! Core application logic and configuration

/// Application configuration
pub mod config;

/// Application state management
pub mod app_state;

/// Factory pattern for app creation
pub mod factory;

// Re-export commonly used items
pub use config::{Config, ConfigError, env_override, load_config};
pub use app_state::AppState;
pub use factory::{AppStateFactoryError, create_app_state};
