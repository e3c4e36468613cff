//! HTTP API application wiring (Axum router + service wiring).
//!
//! Layout:
//! - `services.rs`: explicit wiring of the use-case service to its repository
//! - `routes/`: HTTP routes + handlers
//! - `dto.rs`: request/response DTOs and mapping to/from domain types
//! - `errors.rs`: consistent error responses
//! - `docs.rs`: static API documentation metadata

use std::sync::Arc;

use axum::{routing::get, Extension, Router};
use tower::ServiceBuilder;

use crate::middleware;

pub mod docs;
pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

/// Build the full HTTP router (public entrypoint used by `main.rs` and tests).
pub fn build_app(services: Arc<services::AppServices>) -> Router {
    Router::new()
        .route("/health", get(routes::system::health))
        .route("/api-docs", get(routes::system::api_docs))
        .merge(routes::router())
        .layer(
            ServiceBuilder::new()
                .layer(axum::middleware::from_fn(middleware::request_logging))
                .layer(Extension(services)),
        )
}
