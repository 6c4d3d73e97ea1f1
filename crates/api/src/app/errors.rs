use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use feria_products::RepositoryError;

/// Map a lookup failure onto the transport contract.
///
/// Every repository failure surfaces as 500 with the error's own message
/// verbatim, including "no products for this seller". A future `NotFound`
/// -> 404 mapping would slot in here.
pub fn lookup_error_to_response(err: RepositoryError) -> axum::response::Response {
    match err {
        RepositoryError::NotFound => {
            json_error(StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
        }
    }
}

pub fn json_error(status: StatusCode, message: impl Into<String>) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": message.into(),
        })),
    )
        .into_response()
}
