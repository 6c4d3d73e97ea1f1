use std::sync::Arc;

use feria_products::{InMemoryProductRepository, ProductQueries, ProductService};

/// Service wiring shared with every handler via `Extension`.
///
/// Handlers only ever see [`ProductQueries`]; the repository behind it is an
/// implementation detail of this module.
pub struct AppServices {
    products: Arc<dyn ProductQueries>,
}

impl AppServices {
    pub fn new(products: Arc<dyn ProductQueries>) -> Self {
        Self { products }
    }

    pub fn products(&self) -> &dyn ProductQueries {
        self.products.as_ref()
    }
}

/// Default wiring: the query service over the fixed in-memory dataset.
pub fn build_services() -> AppServices {
    let repository = Arc::new(InMemoryProductRepository::new());
    AppServices::new(Arc::new(ProductService::new(repository)))
}
