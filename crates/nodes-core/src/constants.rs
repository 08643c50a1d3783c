//! Global constants used by configuration defaults and the server
//!
//! Kept in one place so the config defaults and the documentation of the
//! HTTP layer agree.

/// Default HTTP bind address
pub const DEFAULT_HTTP_ADDR: &str = "0.0.0.0:8080";

/// Default per-request timeout in seconds
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

/// Default maximum request body size (1 MiB)
pub const DEFAULT_MAX_BODY_BYTES: usize = 1 << 20;

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Log levels accepted by the configuration
pub const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Prefix for environment variable overrides
pub const ENV_PREFIX: &str = "NODES_";

/// Config file picked up from the working directory when none is given
pub const DEFAULT_CONFIG_FILE: &str = "nodes.toml";
