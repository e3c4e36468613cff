use serde::{Deserialize, Serialize};

use catalog_core::uuid::Uuid;
use catalog_core::{DomainError, DomainResult, Entity};

use crate::price::Price;

/// Product identifier.
///
/// UUIDv7-backed, so ordering follows creation time.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(Uuid);

catalog_core::uuid_newtype!(ProductId, "ProductId");

/// Product status lifecycle.
///
/// Both states are reachable from either; there is no terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ProductStatus {
    Active,
    Inactive,
}

impl ProductStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            ProductStatus::Active => "ACTIVE",
            ProductStatus::Inactive => "INACTIVE",
        }
    }
}

impl core::fmt::Display for ProductStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Entity: Product.
///
/// Every constructor and mutator validates its input before touching state, so
/// a failed call leaves the entity exactly as it was.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    id: ProductId,
    name: String,
    price: Price,
    status: ProductStatus,
}

impl Product {
    /// Create a brand-new product with a fresh identity and status `ACTIVE`.
    pub fn create(name: impl Into<String>, price: f64) -> DomainResult<Self> {
        let name = validate_name(name.into())?;
        let price = Price::new(price)?;

        Ok(Self {
            id: ProductId::new(),
            name,
            price,
            status: ProductStatus::Active,
        })
    }

    /// Rebuild a product from previously persisted state.
    pub fn restore(
        id: ProductId,
        name: impl Into<String>,
        price: f64,
        status: ProductStatus,
    ) -> DomainResult<Self> {
        Ok(Self {
            id,
            name: validate_name(name.into())?,
            price: Price::new(price)?,
            status,
        })
    }

    pub fn id_typed(&self) -> ProductId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Price {
        self.price
    }

    pub fn status(&self) -> ProductStatus {
        self.status
    }

    pub fn is_active(&self) -> bool {
        self.status == ProductStatus::Active
    }

    pub fn rename(&mut self, name: impl Into<String>) -> DomainResult<()> {
        self.name = validate_name(name.into())?;
        Ok(())
    }

    pub fn reprice(&mut self, price: f64) -> DomainResult<()> {
        self.price = Price::new(price)?;
        Ok(())
    }

    /// Transition to `ACTIVE`. Re-checks the invariants first, even when the
    /// product is already active.
    pub fn activate(&mut self) -> DomainResult<()> {
        self.ensure_activatable()?;
        self.status = ProductStatus::Active;
        Ok(())
    }

    /// Transition to `INACTIVE`. No-op if already inactive.
    pub fn deactivate(&mut self) {
        self.status = ProductStatus::Inactive;
    }

    fn ensure_activatable(&self) -> DomainResult<()> {
        if self.name.trim().is_empty() {
            return Err(DomainError::invariant(
                "cannot activate a product without a name",
            ));
        }
        if Price::new(self.price.amount()).is_err() {
            return Err(DomainError::invariant(
                "cannot activate a product with an invalid price",
            ));
        }
        Ok(())
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

fn validate_name(name: String) -> DomainResult<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(DomainError::validation("name cannot be empty"));
    }
    if trimmed.len() == name.len() {
        Ok(name)
    } else {
        Ok(trimmed.to_string())
    }
}
