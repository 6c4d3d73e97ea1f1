use thiserror::Error;

use crate::product::Product;

/// Result type used across the repository layer.
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Storage-level failure for seller-scoped lookups.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// No product in the dataset belongs to the requested seller.
    ///
    /// The message text is part of the wire contract (it travels verbatim in
    /// the 500 response body) and must not change. Today this variant covers
    /// both "unknown seller" and "known seller without products".
    #[error("Error en el repositorio")]
    NotFound,
}

/// Storage contract for product lookups.
///
/// The in-memory implementation below is one variant; a real backing store
/// becomes a second implementation without touching the service or the HTTP
/// layer.
pub trait ProductRepository: Send + Sync {
    /// Return every product whose `seller_id` matches exactly, in dataset
    /// order. Success implies a non-empty vector; zero matches is
    /// [`RepositoryError::NotFound`].
    fn get_all_by_seller(&self, seller_id: &str) -> RepositoryResult<Vec<Product>>;
}

/// Fixed in-memory dataset standing in for a real backing store.
///
/// The dataset is materialized once at construction and never mutated;
/// lookups hand out clones, so callers cannot corrupt it.
pub struct InMemoryProductRepository {
    products: Vec<Product>,
}

impl InMemoryProductRepository {
    /// Repository over the default mock dataset.
    pub fn new() -> Self {
        Self::with_products(mock_dataset())
    }

    /// Repository over an explicit dataset (tests, alternative fixtures).
    pub fn with_products(products: Vec<Product>) -> Self {
        Self { products }
    }
}

impl Default for InMemoryProductRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl ProductRepository for InMemoryProductRepository {
    fn get_all_by_seller(&self, seller_id: &str) -> RepositoryResult<Vec<Product>> {
        let matches: Vec<Product> = self
            .products
            .iter()
            .filter(|product| product.seller_id == seller_id)
            .cloned()
            .collect();

        if matches.is_empty() {
            return Err(RepositoryError::NotFound);
        }
        Ok(matches)
    }
}

fn mock_dataset() -> Vec<Product> {
    vec![Product {
        id: "mock".to_string(),
        seller_id: "FEX112AC".to_string(),
        description: "generic product".to_string(),
        price: 123.55,
    }]
}
