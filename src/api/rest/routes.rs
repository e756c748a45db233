//! # REST Routes
//!
//! Route definitions for the REST API.
//!
//! # Route Structure
//!
//! ```text
//! /api/v1
//! ├── /health        GET  - Health check
//! ├── /cotizacion    GET  - Latest quotation snapshot
//! ├── /pedido        GET  - Order confirmation
//! └── /diferencias   POST - MEP − crypto differences
//! ```
//!
//! Unknown routes fall through to axum's 404; known routes with a
//! disallowed method return 405.

use crate::api::rest::handlers::{
    AppState, calculate_differences, get_order, get_quotation, health_check,
};
use axum::{Router, routing::get, routing::post};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Creates the REST API router with all endpoints and middleware.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .nest("/api/v1", api_v1_routes())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

fn api_v1_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/health", get(health_check))
        .route("/cotizacion", get(get_quotation))
        .route("/pedido", get(get_order))
        .route("/diferencias", post(calculate_differences))
}

/// Creates a minimal router for testing without middleware.
#[cfg(test)]
pub fn create_test_router(state: Arc<AppState>) -> Router {
    Router::new().nest("/api/v1", api_v1_routes()).with_state(state)
}
