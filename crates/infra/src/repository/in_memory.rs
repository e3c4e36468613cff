use std::collections::BTreeMap;
use std::sync::{PoisonError, RwLock};

use catalog_products::{Product, ProductId, ProductRepository, ProductStatus, RepositoryError};

/// Flat storage row; products are rebuilt (and re-validated) on every read.
#[derive(Debug, Clone, PartialEq)]
struct ProductRecord {
    name: String,
    price: f64,
    status: ProductStatus,
}

impl From<&Product> for ProductRecord {
    fn from(product: &Product) -> Self {
        Self {
            name: product.name().to_string(),
            price: product.price().amount(),
            status: product.status(),
        }
    }
}

impl ProductRecord {
    fn to_product(&self, id: ProductId) -> Result<Product, RepositoryError> {
        Product::restore(id, self.name.clone(), self.price, self.status)
            .map_err(|e| RepositoryError::backend(format!("corrupt record {id}: {e}")))
    }
}

/// In-memory product store for tests/dev.
///
/// A single `RwLock` makes every call atomic. `find_all` returns products in
/// id order, which for UUIDv7 ids is creation order.
#[derive(Debug, Default)]
pub struct InMemoryProductRepository {
    inner: RwLock<BTreeMap<ProductId, ProductRecord>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.inner.read().map(|map| map.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn poisoned<T>(_: PoisonError<T>) -> RepositoryError {
    RepositoryError::backend("product store lock poisoned")
}

impl ProductRepository for InMemoryProductRepository {
    fn save(&self, product: Product) -> Result<Product, RepositoryError> {
        let mut map = self.inner.write().map_err(poisoned)?;
        map.insert(product.id_typed(), ProductRecord::from(&product));
        tracing::trace!(product_id = %product.id_typed(), "stored product");
        Ok(product)
    }

    fn find_by_id(&self, id: &ProductId) -> Result<Product, RepositoryError> {
        let map = self.inner.read().map_err(poisoned)?;
        map.get(id)
            .ok_or(RepositoryError::NotFound(*id))?
            .to_product(*id)
    }

    fn find_all(&self) -> Result<Vec<Product>, RepositoryError> {
        let map = self.inner.read().map_err(poisoned)?;
        map.iter()
            .map(|(id, record)| record.to_product(*id))
            .collect()
    }

    fn delete_by_id(&self, id: &ProductId) -> Result<(), RepositoryError> {
        let mut map = self.inner.write().map_err(poisoned)?;
        map.remove(id)
            .map(|_| ())
            .ok_or(RepositoryError::NotFound(*id))
    }
}
