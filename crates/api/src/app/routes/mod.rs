use axum::{routing::get, Router};

pub mod products;
pub mod system;

/// Router for the whole public surface.
pub fn router() -> Router {
    Router::new()
        .route("/health", get(system::health))
        .nest("/api/v1/products", products::router())
}
