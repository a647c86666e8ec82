//! HTTP API application wiring (Axum router + service wiring).
//!
//! Layout:
//! - `services.rs`: storage wiring behind [`services::AppServices`]
//! - `routes/`: HTTP routes + handlers (one file per resource)
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{routing::get, Extension, Router};

pub mod errors;
pub mod routes;
pub mod services;

/// Build the full HTTP router (public entrypoint used by `main.rs`).
pub fn build_app() -> Router {
    build_app_with(Arc::new(services::build_services()))
}

/// Build the router over explicit services.
///
/// Tests inject a fake or pre-seeded Storage Gateway through here; nothing
/// in the handler path reaches for ambient global state.
pub fn build_app_with(services: Arc<services::AppServices>) -> Router {
    Router::new()
        .route("/health", get(routes::system::health))
        .merge(routes::router().layer(Extension(services)))
}
