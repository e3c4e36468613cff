use std::sync::Arc;

use catalog_infra::InMemoryProductRepository;
use catalog_products::{ProductRepository, ProductService};

/// Use-case service as seen by the HTTP layer; the concrete store is erased.
pub type AppServices = ProductService<Arc<dyn ProductRepository>>;

/// Wire the service over a fresh in-memory store.
pub fn build_services() -> Arc<AppServices> {
    with_repository(Arc::new(InMemoryProductRepository::new()))
}

/// Wire the service over any repository chosen at startup.
pub fn with_repository(repository: Arc<dyn ProductRepository>) -> Arc<AppServices> {
    tracing::debug!("wiring product service");
    Arc::new(ProductService::new(repository))
}
