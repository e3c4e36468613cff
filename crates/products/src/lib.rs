//! Products domain module.
//!
//! This crate contains the product catalog core: the `Product` entity and its
//! lifecycle rules, the `ProductRepository` port, and the `ProductService`
//! use-case layer. No IO, no HTTP, no storage technology.

pub mod command;
pub mod error;
pub mod price;
pub mod product;
pub mod repository;
pub mod service;

pub use command::{CreateProductCommand, UpdateProductCommand};
pub use error::{ProductError, ProductResult};
pub use price::Price;
pub use product::{Product, ProductId, ProductStatus};
pub use repository::{ProductRepository, RepositoryError};
pub use service::ProductService;
