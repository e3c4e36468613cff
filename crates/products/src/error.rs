//! Errors surfaced by the product use-cases.

use thiserror::Error;

use catalog_core::DomainError;

use crate::product::ProductId;
use crate::repository::RepositoryError;

pub type ProductResult<T> = Result<T, ProductError>;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ProductError {
    /// Input or resulting state violates a product invariant.
    #[error("invalid product: {0}")]
    InvalidProduct(String),

    #[error("product {0} not found")]
    NotFound(ProductId),

    /// Opaque storage failure, propagated unchanged.
    #[error(transparent)]
    Repository(RepositoryError),
}

impl ProductError {
    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidProduct(msg.into())
    }

    /// Stable machine-readable kind, used by adapters for error payloads.
    pub fn kind(&self) -> &'static str {
        match self {
            ProductError::InvalidProduct(_) => "invalid_product",
            ProductError::NotFound(_) => "not_found",
            ProductError::Repository(_) => "internal_error",
        }
    }
}

impl From<DomainError> for ProductError {
    fn from(value: DomainError) -> Self {
        ProductError::InvalidProduct(value.detail().to_string())
    }
}

impl From<RepositoryError> for ProductError {
    fn from(value: RepositoryError) -> Self {
        match value {
            RepositoryError::NotFound(id) => ProductError::NotFound(id),
            other => ProductError::Repository(other),
        }
    }
}
