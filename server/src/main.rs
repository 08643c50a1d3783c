//! Nodes API server
//!
//! In-memory CRUD service for nodes over HTTP/JSON.

use anyhow::Context;
use tracing::info;

use nodes_core::core::{create_app_state, env_override};
use nodes_server::{api::start_api_server, cli, logging::init_tracing};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse command line arguments
    let matches = cli::command().get_matches();

    // Load configuration: file, then environment, then CLI
    let (config, source) = cli::build_config(&matches, env_override)?;

    // Initialize logging
    init_tracing(&config.logging.level)?;

    info!("Starting Nodes API v{}", env!("CARGO_PKG_VERSION"));
    info!("Configuration source: {}", source);

    // Create AppState using factory pattern
    let app_state = create_app_state(config)?;

    start_api_server(app_state).await.context("HTTP server failed")?;

    info!("Shutdown complete");
    Ok(())
}
