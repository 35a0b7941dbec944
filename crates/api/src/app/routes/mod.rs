use axum::Router;

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod system;

/// Router for all session-scoped storefront endpoints.
pub fn router() -> Router {
    Router::new()
        .nest("/catalog", catalog::router())
        .nest("/cart", cart::router())
        .nest("/checkout", checkout::router())
}
