//! HTTP server implementation for the Nodes API

use axum::{
    extract::DefaultBodyLimit,
    http::{header::CONTENT_TYPE, Method},
    routing::get,
    Router,
};
use std::{future::Future, io, sync::Arc};
use tokio::{net::TcpListener, signal};
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    services::ServeDir,
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::{error, info};

use super::api_handlers;
use nodes_core::{
    core::{config::ServerConfig, AppState},
    StorageImpl,
};

/// Creates the main application router with all routes and middleware
pub fn create_router<S: StorageImpl>(app_state: Arc<AppState<S>>) -> Router {
    let mut router = Router::new()
        // Root route
        .route("/", get(api_handlers::root_handler))

        // Node routes
        .route(
            "/api/nodes",
            get(api_handlers::list_nodes::<S>).post(api_handlers::create_node::<S>),
        )
        .route(
            "/api/nodes/{id}",
            get(api_handlers::get_node::<S>)
                .put(api_handlers::update_node::<S>)
                .delete(api_handlers::delete_node::<S>),
        )

        // System routes
        .route("/health", get(api_handlers::health_check::<S>))
        .route("/info", get(api_handlers::system_info));

    // Static files (favicon etc.) for anything no route claims
    if let Some(dir) = &app_state.config.server.static_dir {
        router = router.fallback_service(ServeDir::new(dir));
    }

    apply_middleware(router, &app_state.config.server).with_state(app_state)
}

/// Wrap every route of `router` in the server middleware stack
pub fn apply_middleware<St>(router: Router<St>, server_config: &ServerConfig) -> Router<St>
where
    St: Clone + Send + Sync + 'static,
{
    // CORS configuration - permissive
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .allow_origin(Any);

    router
        .layer(DefaultBodyLimit::max(server_config.max_body_bytes))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new().gzip(server_config.enable_compression))
                .layer(cors)
                .layer(TimeoutLayer::new(server_config.request_timeout())),
        )
}

/// Serve the API on an already bound listener until `shutdown` resolves
pub async fn serve<S, F>(listener: TcpListener, app_state: Arc<AppState<S>>, shutdown: F) -> io::Result<()>
where
    S: StorageImpl,
    F: Future<Output = ()> + Send + 'static,
{
    let app = create_router(app_state);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
}

/// Bind the configured address and serve until Ctrl-C or SIGTERM
pub async fn start_api_server<S: StorageImpl>(app_state: Arc<AppState<S>>) -> io::Result<()> {
    let addr = app_state.config.server.http_addr;
    info!("Starting Nodes API server on {}", addr);

    let listener = TcpListener::bind(addr).await?;

    info!("Server listening on http://{}", listener.local_addr()?);
    info!("Node endpoints available at http://{}/api/nodes", addr);
    info!("Health check available at http://{}/health", addr);

    serve(listener, app_state, shutdown_signal()).await?;

    info!("Server stopped");
    Ok(())
}

/// Resolves on Ctrl-C, or SIGTERM on unix
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C signal");
        },
        _ = terminate => {
            info!("Received terminate signal");
        },
    }
}
