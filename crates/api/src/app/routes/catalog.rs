use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};

use closet_catalog::{
    Color, FilterSelection, category_options, color_options, filter_products, size_options,
};
use closet_core::ProductId;

use crate::app::{dto, errors};
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_products))
        .route("/facets", get(facets))
        .route("/:id", get(get_product))
}

/// List the catalog, optionally filtered.
///
/// Filter dimensions arrive as repeated query params
/// (`?category=Shirts&color=Black&size=M`); repetition within a dimension is
/// OR, dimensions combine with AND.
pub async fn list_products(
    Extension(services): Extension<Arc<AppServices>>,
    Query(params): Query<Vec<(String, String)>>,
) -> axum::response::Response {
    let mut selection = FilterSelection::default();
    for (key, value) in params {
        match key.as_str() {
            "category" => {
                selection.categories.insert(value);
            }
            "size" => {
                selection.sizes.insert(value);
            }
            "color" => {
                let color: Color = match value.parse() {
                    Ok(c) => c,
                    Err(e) => {
                        return errors::json_error(
                            StatusCode::BAD_REQUEST,
                            "invalid_color",
                            format!("{e}"),
                        );
                    }
                };
                selection.colors.insert(color);
            }
            other => {
                return errors::json_error(
                    StatusCode::BAD_REQUEST,
                    "unknown_filter",
                    format!("unknown filter dimension: {other:?}"),
                );
            }
        }
    }

    let items = filter_products(services.catalog(), &selection)
        .into_iter()
        .map(dto::product_to_json)
        .collect::<Vec<_>>();
    let count = items.len();
    (
        StatusCode::OK,
        Json(serde_json::json!({ "items": items, "count": count })),
    )
        .into_response()
}

pub async fn get_product(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let product_id: ProductId = match id.parse() {
        Ok(v) => v,
        Err(_) => {
            return errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid product id");
        }
    };
    match services.find_product(&product_id) {
        Some(p) => (StatusCode::OK, Json(dto::product_to_json(p))).into_response(),
        None => errors::json_error(StatusCode::NOT_FOUND, "not_found", "product not found"),
    }
}

/// The option lists the filter sidebar renders.
pub async fn facets() -> impl IntoResponse {
    Json(serde_json::json!({
        "categories": category_options(),
        "sizes": size_options(),
        "colors": color_options()
            .into_iter()
            .map(|c| serde_json::json!({ "label": c.as_str(), "hex": c.hex() }))
            .collect::<Vec<_>>(),
    }))
}
