use std::sync::Arc;

use crate::product::Product;
use crate::repository::{ProductRepository, RepositoryResult};

/// Read-side query surface the HTTP layer depends on.
///
/// Handlers talk to this trait only. It is deliberately kept even though the
/// default implementation is a pass-through: cross-cutting concerns (caching,
/// enrichment, authorization) attach here without the handler ever learning
/// about storage.
pub trait ProductQueries: Send + Sync {
    /// List every product belonging to `seller_id`.
    fn get_all_by_seller(&self, seller_id: &str) -> RepositoryResult<Vec<Product>>;
}

/// Default query service: delegates straight to the repository.
pub struct ProductService {
    repository: Arc<dyn ProductRepository>,
}

impl ProductService {
    pub fn new(repository: Arc<dyn ProductRepository>) -> Self {
        Self { repository }
    }
}

impl ProductQueries for ProductService {
    /// Pass-through. Errors propagate unchanged: same variant, same message,
    /// no wrapping, no logging.
    fn get_all_by_seller(&self, seller_id: &str) -> RepositoryResult<Vec<Product>> {
        self.repository.get_all_by_seller(seller_id)
    }
}
