use std::sync::Arc;

use axum::{
    extract::{Extension, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde::Deserialize;

use crate::app::{errors, services::AppServices};

pub fn router() -> Router {
    Router::new().route("/", get(get_products))
}

#[derive(Debug, Deserialize)]
pub struct GetProductsParams {
    seller_id: Option<String>,
}

/// `GET /api/v1/products?seller_id=<id>`
///
/// Three-way outcome: 400 when `seller_id` is missing or empty (the service
/// is never invoked), 200 with the JSON array of matches, 500 with the
/// error's message text for any lookup failure.
pub async fn get_products(
    Extension(services): Extension<Arc<AppServices>>,
    Query(params): Query<GetProductsParams>,
) -> axum::response::Response {
    let seller_id = match params.seller_id.as_deref() {
        Some(id) if !id.is_empty() => id,
        _ => {
            return errors::json_error(
                StatusCode::BAD_REQUEST,
                "seller_id query param is required",
            );
        }
    };

    tracing::debug!(seller_id, "listing products by seller");

    match services.products().get_all_by_seller(seller_id) {
        Ok(products) => (StatusCode::OK, Json(products)).into_response(),
        Err(e) => errors::lookup_error_to_response(e),
    }
}
