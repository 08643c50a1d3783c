//! HTTP request handlers for the Nodes API
//!
//! Handlers decode the request, call into [`NodeService`](nodes_core::NodeService)
//! and encode the result. Nodes are returned as bare JSON objects; failures
//! use [`ErrorResponse`].

use axum::{
    extract::{rejection::JsonRejection, FromRequest, Path, Request, State},
    http::StatusCode,
    response::Json,
    Json as JsonExtractor,
};
use serde::Serialize;
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::{debug, warn};

use nodes_core::{core::AppState, Node, NodeError, NodeInput, StorageImpl};

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Whether the operation was successful (always false)
    pub success: bool,
    /// Error message
    pub error: String,
}

impl ErrorResponse {
    /// Create an error response with the given message
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
        }
    }
}

/// Error half of every fallible handler
pub type ApiError = (StatusCode, Json<ErrorResponse>);

fn node_error(err: NodeError) -> ApiError {
    match err {
        NodeError::NotFound(_) => (StatusCode::NOT_FOUND, Json(ErrorResponse::new(err.to_string()))),
    }
}

/// System health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Current system status
    pub status: String,
    /// Time since startup, e.g. `1h 2m 3s`
    pub uptime: String,
    /// Server version
    pub version: String,
    /// Number of stored nodes
    pub nodes: usize,
}

/// System information and capabilities
#[derive(Debug, Serialize)]
pub struct InfoResponse {
    /// Service name
    pub name: String,
    /// Server version
    pub version: String,
    /// Supported operations
    pub capabilities: Vec<String>,
    /// Supported protocols
    pub protocols: Vec<String>,
}

/// Custom JSON extractor that returns proper JSON error responses
pub struct JsonRequest<T>(pub T);

impl<T, S> FromRequest<S> for JsonRequest<T>
where
    T: serde::de::DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match JsonExtractor::<T>::from_request(req, state).await {
            Ok(JsonExtractor(value)) => Ok(JsonRequest(value)),
            Err(rejection) => {
                let (status, error_message) = match &rejection {
                    JsonRejection::JsonDataError(err) => {
                        (StatusCode::BAD_REQUEST, format!("Invalid JSON data: {}", err.body_text()))
                    }
                    JsonRejection::JsonSyntaxError(_) => {
                        (StatusCode::BAD_REQUEST, "Malformed JSON".to_string())
                    }
                    JsonRejection::MissingJsonContentType(_) => (
                        StatusCode::BAD_REQUEST,
                        "Missing or invalid Content-Type header. Expected 'application/json'".to_string(),
                    ),
                    JsonRejection::BytesRejection(_) if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE => {
                        (StatusCode::PAYLOAD_TOO_LARGE, "Request body too large".to_string())
                    }
                    JsonRejection::BytesRejection(_) => {
                        (StatusCode::BAD_REQUEST, "Failed to read request body".to_string())
                    }
                    _ => (StatusCode::BAD_REQUEST, "Invalid JSON request".to_string()),
                };

                warn!("JSON parsing error: {}", error_message);
                Err((status, Json(ErrorResponse::new(error_message))))
            }
        }
    }
}

/// `GET /api/nodes`
pub async fn list_nodes<S: StorageImpl>(State(app_state): State<Arc<AppState<S>>>) -> Json<Vec<Node>> {
    Json(app_state.nodes.list())
}

/// `POST /api/nodes`
pub async fn create_node<S: StorageImpl>(
    State(app_state): State<Arc<AppState<S>>>,
    JsonRequest(input): JsonRequest<NodeInput>,
) -> (StatusCode, Json<Node>) {
    let node = app_state.nodes.create(input);
    (StatusCode::CREATED, Json(node))
}

/// `GET /api/nodes/{id}`
pub async fn get_node<S: StorageImpl>(
    State(app_state): State<Arc<AppState<S>>>,
    Path(id): Path<String>,
) -> Result<Json<Node>, ApiError> {
    debug!(%id, "get node");
    app_state.nodes.get(&id).map(Json).map_err(node_error)
}

/// `PUT /api/nodes/{id}`
pub async fn update_node<S: StorageImpl>(
    State(app_state): State<Arc<AppState<S>>>,
    Path(id): Path<String>,
    JsonRequest(input): JsonRequest<NodeInput>,
) -> Result<Json<Node>, ApiError> {
    app_state.nodes.update(&id, input).map(Json).map_err(node_error)
}

/// `DELETE /api/nodes/{id}`
pub async fn delete_node<S: StorageImpl>(
    State(app_state): State<Arc<AppState<S>>>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    app_state
        .nodes
        .delete(&id)
        .map(|()| StatusCode::NO_CONTENT)
        .map_err(node_error)
}

// System handlers

/// Health check endpoint
pub async fn health_check<S: StorageImpl>(State(app_state): State<Arc<AppState<S>>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        uptime: format_uptime(app_state.uptime().as_secs()),
        version: env!("CARGO_PKG_VERSION").to_string(),
        nodes: app_state.nodes.count(),
    })
}

/// System information endpoint
pub async fn system_info() -> Json<InfoResponse> {
    Json(InfoResponse {
        name: "Nodes API".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        capabilities: vec![
            "create".to_string(),
            "list".to_string(),
            "get".to_string(),
            "update".to_string(),
            "delete".to_string(),
        ],
        protocols: vec!["http".to_string()],
    })
}

/// Root API endpoint
pub async fn root_handler() -> Json<Value> {
    Json(json!({
        "service": "Nodes API",
        "version": env!("CARGO_PKG_VERSION"),
        "status": "operational",
        "endpoints": {
            "nodes": "/api/nodes",
            "node": "/api/nodes/{id}",
            "health": "/health",
            "info": "/info"
        }
    }))
}

fn format_uptime(secs: u64) -> String {
    let (h, m, s) = (secs / 3600, (secs % 3600) / 60, secs % 60);
    if h > 0 {
        format!("{h}h {m}m {s}s")
    } else if m > 0 {
        format!("{m}m {s}s")
    } else {
        format!("{s}s")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uptime_formatting() {
        assert_eq!(format_uptime(0), "0s");
        assert_eq!(format_uptime(59), "59s");
        assert_eq!(format_uptime(61), "1m 1s");
        assert_eq!(format_uptime(3600 + 23 * 60 + 45), "1h 23m 45s");
    }

    #[test]
    fn not_found_maps_to_404() {
        let (status, Json(body)) = node_error(NodeError::NotFound("9".to_string()));
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(!body.success);
        assert_eq!(body.error, "node 9 not found");
    }
}
