//! Product use-cases (application-level orchestration).
//!
//! `ProductService` is the only place that combines repository calls with the
//! entity's lifecycle rules. Every operation follows the same shape:
//!
//! ```text
//! load (or construct) -> mutate in memory (validated) -> save whole entity
//! ```
//!
//! Validation always happens before the write, so a failed operation never
//! persists anything. Errors are surfaced immediately; nothing is retried.

use tracing::{debug, info, warn};

use crate::command::{CreateProductCommand, UpdateProductCommand};
use crate::error::{ProductError, ProductResult};
use crate::product::{Product, ProductId};
use crate::repository::ProductRepository;

/// Use-case service over a product repository.
///
/// Stateless beyond the injected repository; wire it explicitly at startup.
#[derive(Debug, Clone)]
pub struct ProductService<R> {
    repository: R,
}

impl<R> ProductService<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }
}

impl<R> ProductService<R>
where
    R: ProductRepository,
{
    #[tracing::instrument(skip(self, command), fields(name = %command.name))]
    pub fn create_product(&self, command: CreateProductCommand) -> ProductResult<Product> {
        let product = Product::create(command.name, command.price).map_err(|e| {
            warn!(error = %e, "rejected product creation");
            ProductError::from(e)
        })?;

        let saved = self.repository.save(product)?;
        info!(product_id = %saved.id_typed(), "product created");
        Ok(saved)
    }

    #[tracing::instrument(skip(self), fields(product_id = %id))]
    pub fn find_product(&self, id: &ProductId) -> ProductResult<Product> {
        debug!("loading product");
        Ok(self.repository.find_by_id(id)?)
    }

    #[tracing::instrument(skip(self))]
    pub fn find_all_products(&self) -> ProductResult<Vec<Product>> {
        let products = self.repository.find_all()?;
        debug!(count = products.len(), "listed products");
        Ok(products)
    }

    /// Apply any supplied field changes. Both are validated against the loaded
    /// copy before the single save.
    #[tracing::instrument(skip(self, command), fields(product_id = %id))]
    pub fn update_product(
        &self,
        id: &ProductId,
        command: UpdateProductCommand,
    ) -> ProductResult<Product> {
        let mut product = self.repository.find_by_id(id)?;

        if let Some(name) = command.name {
            product.rename(name).map_err(|e| reject(id, e))?;
        }
        if let Some(price) = command.price {
            product.reprice(price).map_err(|e| reject(id, e))?;
        }

        let saved = self.repository.save(product)?;
        info!("product updated");
        Ok(saved)
    }

    #[tracing::instrument(skip(self), fields(product_id = %id))]
    pub fn delete_product(&self, id: &ProductId) -> ProductResult<()> {
        self.repository.find_by_id(id)?;
        self.repository.delete_by_id(id)?;
        info!("product deleted");
        Ok(())
    }

    #[tracing::instrument(skip(self), fields(product_id = %id))]
    pub fn activate_product(&self, id: &ProductId) -> ProductResult<Product> {
        let mut product = self.repository.find_by_id(id)?;
        product.activate().map_err(|e| reject(id, e))?;

        let saved = self.repository.save(product)?;
        info!("product activated");
        Ok(saved)
    }

    #[tracing::instrument(skip(self), fields(product_id = %id))]
    pub fn deactivate_product(&self, id: &ProductId) -> ProductResult<Product> {
        let mut product = self.repository.find_by_id(id)?;
        product.deactivate();

        let saved = self.repository.save(product)?;
        info!("product deactivated");
        Ok(saved)
    }
}

fn reject(id: &ProductId, err: catalog_core::DomainError) -> ProductError {
    warn!(product_id = %id, error = %err, "rejected product change");
    ProductError::from(err)
}
