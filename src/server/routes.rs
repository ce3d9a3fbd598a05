//! Axum route handlers for the gateway HTTP server.
//!
//! # Routes
//!
//! - `GET /health`            — Returns `{"status": "ok", "version": "0.1.0"}`
//! - `GET /api/signature/get` — Returns the deployment-role greeting

use axum::{extract::State, response::IntoResponse, routing::get, Json, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Shared application state for the HTTP server.
#[derive(Clone)]
pub struct AppState {
    /// Deployment-role identifier interpolated into the greeting.
    pub role: String,
}

impl AppState {
    pub fn new(role: impl Into<String>) -> Self {
        Self { role: role.into() }
    }

    /// Build state from the process environment (`ROLE`).
    pub fn from_env() -> Self {
        Self::new(std::env::var("ROLE").unwrap_or_default())
    }
}

/// Build the axum router with all routes.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/api/signature/get", get(signature_handler))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// GET /health — liveness probe.
async fn health_handler() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "version": crate::VERSION,
        "service": "slc-gateway",
    }))
}

/// GET /api/signature/get — deployment-role greeting.
///
/// Placeholder surface: it consumes no parameters, has no error path and
/// does not reach the contract orchestrator.
async fn signature_handler(State(state): State<AppState>) -> String {
    format!("Hello World! I am {}", state.role)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
