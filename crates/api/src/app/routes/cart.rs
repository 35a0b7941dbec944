use std::sync::Arc;

use axum::{
    Json, Router,
    extract::Extension,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};

use closet_cart::NewLineItem;
use closet_catalog::Color;
use closet_core::ProductId;

use crate::app::{dto, errors};
use crate::app::services::AppServices;
use crate::context::SessionContext;

pub fn router() -> Router {
    Router::new()
        .route("/", get(get_cart))
        .route("/items", post(add_item))
        .route("/items/remove", post(remove_item))
        .route("/items/quantity", post(update_quantity))
        .route("/clear", post(clear_cart))
        .route("/open", post(set_open))
        .route("/toggle", post(toggle_open))
}

pub async fn get_cart(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(session): Extension<SessionContext>,
) -> axum::response::Response {
    let payload = services.read_cart(session.session_id(), dto::cart_to_json);
    (StatusCode::OK, Json(payload)).into_response()
}

/// Add one unit of a product variant.
///
/// The catalog is authoritative for name/price/image: the request only names
/// the variant, and the denormalized fields are frozen here, at add-time.
pub async fn add_item(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(session): Extension<SessionContext>,
    Json(body): Json<dto::AddItemRequest>,
) -> axum::response::Response {
    let product_id: ProductId = match body.product_id.parse() {
        Ok(v) => v,
        Err(_) => {
            return errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid product id");
        }
    };
    let Some(product) = services.find_product(&product_id) else {
        return errors::json_error(StatusCode::NOT_FOUND, "not_found", "product not found");
    };
    let color: Color = match body.color.parse() {
        Ok(c) => c,
        Err(e) => return errors::json_error(StatusCode::BAD_REQUEST, "invalid_color", format!("{e}")),
    };

    if !product.offers_size(&body.size) {
        return errors::json_error(
            StatusCode::BAD_REQUEST,
            "validation_error",
            format!("size {:?} not offered for {}", body.size, product.id),
        );
    }
    if !product.offers_color(color) {
        return errors::json_error(
            StatusCode::BAD_REQUEST,
            "validation_error",
            format!("color {:?} not offered for {}", color.as_str(), product.id),
        );
    }

    let candidate = NewLineItem {
        product_id: product.id.clone(),
        name: product.name.clone(),
        price: product.price,
        size: body.size,
        color,
        image: product.image.clone(),
    };

    tracing::info!(session_id = %session.session_id(), product_id = %candidate.product_id, "adding to cart");
    let payload = services.with_cart(session.session_id(), |cart| {
        cart.add_item(candidate);
        dto::cart_to_json(cart)
    });
    (StatusCode::OK, Json(payload)).into_response()
}

pub async fn remove_item(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(session): Extension<SessionContext>,
    Json(body): Json<dto::LineKeyRequest>,
) -> axum::response::Response {
    let key = match dto::parse_line_key(&body.product_id, &body.size, &body.color) {
        Ok(k) => k,
        Err(res) => return res,
    };
    let payload = services.with_cart(session.session_id(), |cart| {
        cart.remove_item(&key);
        dto::cart_to_json(cart)
    });
    (StatusCode::OK, Json(payload)).into_response()
}

pub async fn update_quantity(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(session): Extension<SessionContext>,
    Json(body): Json<dto::UpdateQuantityRequest>,
) -> axum::response::Response {
    let key = match dto::parse_line_key(&body.product_id, &body.size, &body.color) {
        Ok(k) => k,
        Err(res) => return res,
    };
    let payload = services.with_cart(session.session_id(), |cart| {
        cart.update_quantity(&key, body.quantity);
        dto::cart_to_json(cart)
    });
    (StatusCode::OK, Json(payload)).into_response()
}

pub async fn clear_cart(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(session): Extension<SessionContext>,
) -> axum::response::Response {
    let payload = services.with_cart(session.session_id(), |cart| {
        cart.clear();
        dto::cart_to_json(cart)
    });
    (StatusCode::OK, Json(payload)).into_response()
}

pub async fn set_open(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(session): Extension<SessionContext>,
    Json(body): Json<dto::SetOpenRequest>,
) -> axum::response::Response {
    let payload = services.with_cart(session.session_id(), |cart| {
        cart.set_open(body.open);
        dto::cart_to_json(cart)
    });
    (StatusCode::OK, Json(payload)).into_response()
}

pub async fn toggle_open(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(session): Extension<SessionContext>,
) -> axum::response::Response {
    let payload = services.with_cart(session.session_id(), |cart| {
        cart.toggle_open();
        dto::cart_to_json(cart)
    });
    (StatusCode::OK, Json(payload)).into_response()
}
