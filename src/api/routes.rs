//! API route configuration.

use crate::api::handlers::health_handler;
use crate::state::AppState;
use axum::{Router, routing::get};

/// Public JSON endpoints.
///
/// # Endpoints
///
/// - `GET /health` - Store connectivity check
pub fn routes() -> Router<AppState> {
    Router::new().route("/health", get(health_handler))
}
