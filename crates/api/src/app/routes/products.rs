use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, patch},
    Json, Router,
};

use crate::app::dto::{self, ProductResponse};
use crate::app::errors;
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_products).post(create_product))
        .route(
            "/:id",
            get(get_product).put(update_product).delete(delete_product),
        )
        .route("/:id/activate", patch(activate_product))
        .route("/:id/deactivate", patch(deactivate_product))
}

pub async fn create_product(
    Extension(services): Extension<Arc<AppServices>>,
    body: Result<Json<dto::CreateProductRequest>, JsonRejection>,
) -> axum::response::Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => return errors::json_rejection_to_response(rejection),
    };

    match services.create_product(body.into()) {
        Ok(product) => (StatusCode::CREATED, Json(ProductResponse::from(product))).into_response(),
        Err(e) => errors::product_error_to_response(e),
    }
}

pub async fn get_product(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let product_id = match errors::parse_product_id(&id) {
        Ok(v) => v,
        Err(res) => return res,
    };

    match services.find_product(&product_id) {
        Ok(product) => (StatusCode::OK, Json(ProductResponse::from(product))).into_response(),
        Err(e) => errors::product_error_to_response(e),
    }
}

pub async fn list_products(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    match services.find_all_products() {
        Ok(products) => {
            let items = products
                .iter()
                .map(ProductResponse::from)
                .collect::<Vec<_>>();
            (StatusCode::OK, Json(items)).into_response()
        }
        Err(e) => errors::product_error_to_response(e),
    }
}

pub async fn update_product(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    body: Result<Json<dto::UpdateProductRequest>, JsonRejection>,
) -> axum::response::Response {
    let product_id = match errors::parse_product_id(&id) {
        Ok(v) => v,
        Err(res) => return res,
    };
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => return errors::json_rejection_to_response(rejection),
    };

    match services.update_product(&product_id, body.into()) {
        Ok(product) => (StatusCode::OK, Json(ProductResponse::from(product))).into_response(),
        Err(e) => errors::product_error_to_response(e),
    }
}

pub async fn delete_product(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let product_id = match errors::parse_product_id(&id) {
        Ok(v) => v,
        Err(res) => return res,
    };

    match services.delete_product(&product_id) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => errors::product_error_to_response(e),
    }
}

pub async fn activate_product(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let product_id = match errors::parse_product_id(&id) {
        Ok(v) => v,
        Err(res) => return res,
    };

    match services.activate_product(&product_id) {
        Ok(product) => (StatusCode::OK, Json(ProductResponse::from(product))).into_response(),
        Err(e) => errors::product_error_to_response(e),
    }
}

pub async fn deactivate_product(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let product_id = match errors::parse_product_id(&id) {
        Ok(v) => v,
        Err(res) => return res,
    };

    match services.deactivate_product(&product_id) {
        Ok(product) => (StatusCode::OK, Json(ProductResponse::from(product))).into_response(),
        Err(e) => errors::product_error_to_response(e),
    }
}
