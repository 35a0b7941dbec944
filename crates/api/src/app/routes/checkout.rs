use std::sync::Arc;

use axum::{
    Json, Router,
    extract::Extension,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use chrono::Utc;

use closet_checkout::{pay, quote};

use crate::app::{dto, errors};
use crate::app::services::AppServices;
use crate::context::SessionContext;

pub fn router() -> Router {
    Router::new()
        .route("/quote", get(get_quote))
        .route("/pay", post(pay_now))
}

pub async fn get_quote(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(session): Extension<SessionContext>,
) -> axum::response::Response {
    let summary = services.read_cart(session.session_id(), |cart| {
        quote(cart, services.shipping())
    });
    (StatusCode::OK, Json(dto::quote_to_json(&summary))).into_response()
}

/// Simulated payment: on success the cart is cleared and a receipt returned.
pub async fn pay_now(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(session): Extension<SessionContext>,
) -> axum::response::Response {
    let result = services.with_cart(session.session_id(), |cart| {
        pay(cart, services.shipping(), Utc::now())
    });
    match result {
        Ok(receipt) => {
            tracing::info!(
                session_id = %session.session_id(),
                order_id = %receipt.order_id,
                total_cents = receipt.total.cents(),
                "payment simulated"
            );
            (StatusCode::OK, Json(dto::receipt_to_json(&receipt))).into_response()
        }
        Err(e) => errors::domain_error_to_response(e),
    }
}
