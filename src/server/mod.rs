//! HTTP server surface for the gateway.
//!
//! # Endpoints
//!
//! - `GET /health`            — Liveness probe
//! - `GET /api/signature/get` — Deployment-role greeting

pub mod routes;

pub use routes::{app_router, AppState};
