//! Configuration for the Nodes API
//!
//! Settings come from an optional TOML file, then `NODES_*` environment
//! variables, then command line flags (applied by the server binary). Every
//! field has a default, so a partial file is enough.

use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

use crate::constants::{
    DEFAULT_HTTP_ADDR, DEFAULT_LOG_LEVEL, DEFAULT_MAX_BODY_BYTES, DEFAULT_REQUEST_TIMEOUT_SECS,
    ENV_PREFIX, LOG_LEVELS,
};

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("failed to read config file {path}: {source}")]
    Read {
        /// File that was requested
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
    /// Config file is not valid TOML for [`Config`]
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        /// File that was requested
        path: PathBuf,
        /// Underlying TOML error
        #[source]
        source: toml::de::Error,
    },
    /// A setting has an unusable value
    #[error("invalid {field}: {reason}")]
    Invalid {
        /// Name of the offending setting
        field: &'static str,
        /// Why it was rejected
        reason: String,
    },
}

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Server configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// HTTP server bind address
    #[serde(default = "default_http_addr")]
    pub http_addr: SocketAddr,

    /// Per-request timeout in seconds
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Largest accepted request body
    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,

    /// Gzip responses when the client accepts it
    #[serde(default = "default_enable_compression")]
    pub enable_compression: bool,

    /// Directory served for paths no route matches (favicon, static files)
    #[serde(default)]
    pub static_dir: Option<PathBuf>,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error). `RUST_LOG` wins if set.
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            http_addr: default_http_addr(),
            request_timeout_secs: default_request_timeout_secs(),
            max_body_bytes: default_max_body_bytes(),
            enable_compression: default_enable_compression(),
            static_dir: None,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

// Default value functions for serde
fn default_http_addr() -> SocketAddr {
    DEFAULT_HTTP_ADDR
        .parse()
        .unwrap_or_else(|_| SocketAddr::from(([0, 0, 0, 0], 8080)))
}
fn default_request_timeout_secs() -> u64 { DEFAULT_REQUEST_TIMEOUT_SECS }
fn default_max_body_bytes() -> usize { DEFAULT_MAX_BODY_BYTES }
fn default_enable_compression() -> bool { true }
fn default_log_level() -> String { DEFAULT_LOG_LEVEL.to_string() }

impl ServerConfig {
    /// Request timeout as a `Duration`
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

impl Config {
    /// Apply overrides from any key lookup (`HTTP_ADDR`, `LOG_LEVEL`,
    /// `REQUEST_TIMEOUT_SECS`)
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(addr) = lookup("HTTP_ADDR") {
            self.set_http_addr(&addr)?;
        }

        if let Some(level) = lookup("LOG_LEVEL") {
            self.logging.level = level;
        }

        if let Some(secs) = lookup("REQUEST_TIMEOUT_SECS") {
            self.server.request_timeout_secs = secs.parse().map_err(|e| ConfigError::Invalid {
                field: "request_timeout_secs",
                reason: format!("{secs:?}: {e}"),
            })?;
        }

        Ok(())
    }

    /// Parse and set the HTTP bind address
    pub fn set_http_addr(&mut self, addr: &str) -> Result<(), ConfigError> {
        self.server.http_addr = addr.parse().map_err(|e| ConfigError::Invalid {
            field: "http_addr",
            reason: format!("{addr:?}: {e}"),
        })?;
        Ok(())
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !LOG_LEVELS.contains(&self.logging.level.as_str()) {
            return Err(ConfigError::Invalid {
                field: "logging.level",
                reason: format!("{:?} is not one of {}", self.logging.level, LOG_LEVELS.join(", ")),
            });
        }

        if self.server.request_timeout_secs == 0 {
            return Err(ConfigError::Invalid {
                field: "server.request_timeout_secs",
                reason: "must be greater than zero".to_string(),
            });
        }

        if self.server.max_body_bytes == 0 {
            return Err(ConfigError::Invalid {
                field: "server.max_body_bytes",
                reason: "must be greater than zero".to_string(),
            });
        }

        Ok(())
    }
}

/// Look up the `NODES_*` environment variable for an override key
pub fn env_override(key: &str) -> Option<String> {
    std::env::var(format!("{ENV_PREFIX}{key}")).ok()
}

/// Load configuration from file
pub fn load_config(path: impl AsRef<Path>) -> Result<Config, ConfigError> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
