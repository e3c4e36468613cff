//! Persistence port for products.
//!
//! The use-case layer depends only on this trait; concrete stores live in
//! infrastructure crates. Implementations are expected to make each call
//! atomic per product id.

use std::sync::Arc;

use thiserror::Error;

use crate::product::{Product, ProductId};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("product {0} not found")]
    NotFound(ProductId),

    /// Any failure of the backing store (IO, poisoned lock, corrupt record, ...).
    #[error("repository failure: {0}")]
    Backend(String),
}

impl RepositoryError {
    pub fn backend(msg: impl Into<String>) -> Self {
        Self::Backend(msg.into())
    }
}

pub trait ProductRepository: Send + Sync {
    /// Insert or replace the whole product; returns the persisted form.
    fn save(&self, product: Product) -> Result<Product, RepositoryError>;

    fn find_by_id(&self, id: &ProductId) -> Result<Product, RepositoryError>;

    /// All known products (empty when none).
    fn find_all(&self) -> Result<Vec<Product>, RepositoryError>;

    fn delete_by_id(&self, id: &ProductId) -> Result<(), RepositoryError>;
}

impl<R> ProductRepository for Arc<R>
where
    R: ProductRepository + ?Sized,
{
    fn save(&self, product: Product) -> Result<Product, RepositoryError> {
        (**self).save(product)
    }

    fn find_by_id(&self, id: &ProductId) -> Result<Product, RepositoryError> {
        (**self).find_by_id(id)
    }

    fn find_all(&self) -> Result<Vec<Product>, RepositoryError> {
        (**self).find_all()
    }

    fn delete_by_id(&self, id: &ProductId) -> Result<(), RepositoryError> {
        (**self).delete_by_id(id)
    }
}
