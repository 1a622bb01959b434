//! Route definitions for the demo HTTP API.
//!
//! All routes are mounted under `/api`.

use axum::http::HeaderName;
use axum::{Extension, Router, middleware as axum_middleware, routing::get};
use tower_http::trace::TraceLayer;

use libapi::extractors::TraceHeaderName;
use libapi_core::config::AppConfig;
use libapi_core::error::AppError;

use crate::handlers;
use crate::middleware;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(config: &AppConfig) -> Result<Router, AppError> {
    let trace_header = HeaderName::try_from(config.server.trace_header.as_str()).map_err(|e| {
        AppError::configuration(format!(
            "Invalid trace header '{}': {e}",
            config.server.trace_header
        ))
    })?;

    let api_routes = Router::new()
        .route("/success", get(handlers::success))
        .route("/error", get(handlers::error))
        .route("/validation", get(handlers::validation))
        .route("/paginated", get(handlers::paginated))
        .route("/health", get(handlers::health));

    Ok(Router::new()
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(axum_middleware::from_fn(middleware::request_logging))
        // outermost, so the access log sees the configured header too
        .layer(Extension(TraceHeaderName(trace_header))))
}
