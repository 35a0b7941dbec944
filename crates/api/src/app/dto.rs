use axum::http::StatusCode;
use serde::Deserialize;

use closet_cart::{Cart, LineItem, LineKey};
use closet_catalog::{Color, Product};
use closet_checkout::{CheckoutQuote, Receipt};
use closet_core::ProductId;

use crate::app::errors;

// -------------------------
// Request DTOs
// -------------------------

/// Variant selected on a product page. Denormalized name/price/image come
/// from the catalog server-side, never from the client.
#[derive(Debug, Deserialize)]
pub struct AddItemRequest {
    pub product_id: String,
    pub size: String,
    pub color: String,
}

/// Exact line key for remove operations.
#[derive(Debug, Deserialize)]
pub struct LineKeyRequest {
    pub product_id: String,
    pub size: String,
    pub color: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateQuantityRequest {
    pub product_id: String,
    pub size: String,
    pub color: String,
    /// Absolute quantity; zero or negative removes the line.
    pub quantity: i64,
}

#[derive(Debug, Deserialize)]
pub struct SetOpenRequest {
    pub open: bool,
}

pub fn parse_line_key(
    product_id: &str,
    size: &str,
    color: &str,
) -> Result<LineKey, axum::response::Response> {
    let product_id: ProductId = product_id
        .parse()
        .map_err(|e| errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", format!("{e}")))?;
    let color: Color = color
        .parse()
        .map_err(|e| errors::json_error(StatusCode::BAD_REQUEST, "invalid_color", format!("{e}")))?;
    Ok(LineKey {
        product_id,
        size: size.to_string(),
        color,
    })
}

// -------------------------
// JSON mapping helpers
// -------------------------

pub fn product_to_json(p: &Product) -> serde_json::Value {
    serde_json::json!({
        "id": p.id.as_str(),
        "name": p.name,
        "category": p.category,
        "price_cents": p.price.cents(),
        "price_display": p.price.to_string(),
        "sizes": p.sizes,
        "colors": p.colors.iter().map(|c| c.as_str()).collect::<Vec<_>>(),
        "image": p.image,
        "description": p.description,
    })
}

pub fn line_to_json(item: &LineItem) -> serde_json::Value {
    serde_json::json!({
        "product_id": item.product_id.as_str(),
        "name": item.name,
        "price_cents": item.price.cents(),
        "price_display": item.price.to_string(),
        "size": item.size,
        "color": item.color.as_str(),
        "image": item.image,
        "quantity": item.quantity,
        "line_total_cents": item.line_total().cents(),
    })
}

pub fn cart_to_json(cart: &Cart) -> serde_json::Value {
    serde_json::json!({
        "items": cart.items().iter().map(line_to_json).collect::<Vec<_>>(),
        "total_items": cart.total_items(),
        "subtotal_cents": cart.subtotal().cents(),
        "subtotal_display": cart.subtotal().to_string(),
        "is_open": cart.is_open(),
    })
}

pub fn quote_to_json(q: &CheckoutQuote) -> serde_json::Value {
    serde_json::json!({
        "lines": q.lines.iter().map(|l| serde_json::json!({
            "product_id": l.product_id.as_str(),
            "name": l.name,
            "size": l.size,
            "quantity": l.quantity,
            "line_total_cents": l.line_total.cents(),
        })).collect::<Vec<_>>(),
        "subtotal_cents": q.subtotal.cents(),
        "shipping_cents": q.shipping.cents(),
        "shipping_display": if q.shipping.is_zero() { "Free".to_string() } else { q.shipping.to_string() },
        "total_cents": q.total.cents(),
        "total_display": q.total.to_string(),
        "vat_note": "All prices include 15% VAT",
    })
}

pub fn receipt_to_json(r: &Receipt) -> serde_json::Value {
    serde_json::json!({
        "order_id": r.order_id.to_string(),
        "total_cents": r.total.cents(),
        "total_display": r.total.to_string(),
        "paid_at": r.paid_at.to_rfc3339(),
    })
}
