//! # REST Interface
//!
//! axum handlers and routing for the public HTTP API.

pub mod handlers;
pub mod routes;

pub use handlers::AppState;
pub use routes::create_router;
