//! HTTP API application wiring (Axum router + service wiring).
//!
//! Layout:
//! - `services.rs`: shared state (catalog, shipping policy, per-session carts)
//! - `routes/`: HTTP routes + handlers (one file per storefront area)
//! - `dto.rs`: request DTOs and JSON mapping helpers
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{Extension, Router, routing::get};

use crate::session;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

/// Build the full HTTP router (public entrypoint used by `main.rs` and the
/// black-box tests).
pub fn build_app() -> Router {
    build_app_with(services::AppServices::new())
}

/// Build the router around pre-configured services (custom shipping policy,
/// alternate catalog).
pub fn build_app_with(app_services: services::AppServices) -> Router {
    let app_services = Arc::new(app_services);

    // Session-scoped routes: everything except the health probe.
    let storefront = routes::router()
        .layer(Extension(app_services))
        .layer(axum::middleware::from_fn(session::session_middleware));

    Router::new()
        .route("/health", get(routes::system::health))
        .merge(storefront)
}
