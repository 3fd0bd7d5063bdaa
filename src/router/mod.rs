//! Routing module for the greeting MCP server

use crate::mcp::models::{PROTOCOL_VERSION, SERVER_NAME, SERVER_VERSION};
use crate::tools::state::SharedState;
use axum::{
    body::Body, extract::Request, middleware::Next, response::IntoResponse, routing::get, Json,
    Router,
};
use serde_json::json;
use tower_http::cors::{Any, CorsLayer};

/// Creates and configures the application router with all routes and middleware
pub fn create_app_router(state: SharedState) -> Router {
    // Middleware: Log requests
    let log_layer = axum::middleware::from_fn(|req: Request<Body>, next: Next| async move {
        tracing::info!("REQ: {} {}", req.method(), req.uri());
        let res = next.run(req).await;
        if !res.status().is_success() {
            tracing::warn!("RES: {} (Error)", res.status());
        }
        res
    });

    // Middleware: CORS (Permissive for local dev)
    let cors_layer = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Routes
    Router::new()
        .merge(crate::mcp::routes())
        .route("/health", get(health))
        .route("/info", get(info))
        .layer(log_layer)
        .layer(cors_layer)
        .with_state(state)
}

/// Endpoint: GET /health
async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

/// Endpoint: GET /info
/// Static server identity, mirroring the `initialize` handshake fields.
async fn info() -> impl IntoResponse {
    Json(json!({
        "name": SERVER_NAME,
        "version": SERVER_VERSION,
        "protocolVersion": PROTOCOL_VERSION,
    }))
}
