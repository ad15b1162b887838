//! Route configuration.

use axum::{Router, routing::get};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

use crate::api::handlers::{health_handler, resolve_handler};
use crate::api::middleware;
use crate::state::AppState;

/// Constructs the application router with all routes and middleware.
///
/// # Endpoints
///
/// - `GET /api/health` - Service health with store connectivity check
/// - `GET /{code}`     - Resolve a short code and redirect
///
/// Trailing slashes are normalized before routing, so `/{code}/` resolves
/// the same record as `/{code}`.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let router = Router::new()
        .route("/api/health", get(health_handler))
        .route("/{code}", get(resolve_handler))
        .layer(middleware::tracing::layer())
        .with_state(state);

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
