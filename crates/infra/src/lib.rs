//! Infrastructure layer: outbound adapters for the product catalog ports.

pub mod repository;

#[cfg(test)]
mod integration_tests;

pub use repository::InMemoryProductRepository;
