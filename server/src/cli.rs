//! Command line interface and startup configuration resolution
//!
//! Precedence, lowest to highest: config file, `NODES_*` environment
//! variables, command line flags.

use anyhow::Context;
use clap::{Arg, ArgMatches, Command};
use std::path::Path;

use nodes_core::constants::DEFAULT_CONFIG_FILE;
use nodes_core::core::{load_config, Config};

/// Build the `nodes-server` command
pub fn command() -> Command {
    Command::new("nodes-server")
        .version(env!("CARGO_PKG_VERSION"))
        .about("In-memory CRUD API for nodes")
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .help("Configuration file path"),
        )
        .arg(
            Arg::new("http-addr")
                .long("http-addr")
                .value_name("ADDR")
                .help("HTTP server bind address"),
        )
        .arg(
            Arg::new("log-level")
                .long("log-level")
                .value_name("LEVEL")
                .help("Log level (trace, debug, info, warn, error)"),
        )
}

/// Resolve the startup configuration from file, environment and CLI.
///
/// `env` looks up override keys (`HTTP_ADDR`, `LOG_LEVEL`,
/// `REQUEST_TIMEOUT_SECS`). Returns the config and a description of where the
/// file layer came from.
pub fn build_config<F>(matches: &ArgMatches, env: F) -> anyhow::Result<(Config, String)>
where
    F: Fn(&str) -> Option<String>,
{
    let (mut config, source) = load_startup_config(matches.get_one::<String>("config"))?;
    config
        .apply_overrides(env)
        .context("invalid environment override")?;
    apply_cli_overrides(&mut config, matches)?;
    Ok((config, source))
}

/// Explicit `--config` must load; otherwise `nodes.toml` is used if present
fn load_startup_config(path: Option<&String>) -> anyhow::Result<(Config, String)> {
    match path {
        Some(path) => Ok((load_config(path)?, path.clone())),
        None if Path::new(DEFAULT_CONFIG_FILE).exists() => {
            Ok((load_config(DEFAULT_CONFIG_FILE)?, DEFAULT_CONFIG_FILE.to_string()))
        }
        None => Ok((Config::default(), "defaults".to_string())),
    }
}

/// Apply command line argument overrides to configuration
fn apply_cli_overrides(config: &mut Config, matches: &ArgMatches) -> anyhow::Result<()> {
    if let Some(addr) = matches.get_one::<String>("http-addr") {
        config.set_http_addr(addr)?;
    }

    if let Some(level) = matches.get_one::<String>("log-level") {
        config.logging.level = level.clone();
    }

    Ok(())
}
