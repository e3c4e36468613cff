use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use chrono::Utc;
use serde_json::json;

use catalog_products::{ProductError, ProductId};

pub fn product_error_to_response(err: ProductError) -> axum::response::Response {
    let status = match &err {
        ProductError::InvalidProduct(_) => StatusCode::BAD_REQUEST,
        ProductError::NotFound(_) => StatusCode::NOT_FOUND,
        ProductError::Repository(e) => {
            tracing::error!(error = %e, "repository failure");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };
    json_error(status, err.kind(), err.to_string())
}

pub fn json_rejection_to_response(rejection: JsonRejection) -> axum::response::Response {
    json_error(StatusCode::BAD_REQUEST, "invalid_request", rejection.body_text())
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
            "timestamp": Utc::now().to_rfc3339(),
        })),
    )
        .into_response()
}

/// Parse a path id; malformed ids are invalid input, not missing products.
pub fn parse_product_id(raw: &str) -> Result<ProductId, axum::response::Response> {
    raw.parse::<ProductId>()
        .map_err(|e| product_error_to_response(ProductError::from(e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_products::RepositoryError;

    #[test]
    fn error_kinds_map_to_status_codes() {
        let id = ProductId::new();
        assert_eq!(
            product_error_to_response(ProductError::invalid("bad")).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            product_error_to_response(ProductError::NotFound(id)).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            product_error_to_response(ProductError::Repository(RepositoryError::backend("x")))
                .status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn malformed_id_is_bad_request() {
        let res = parse_product_id("abc").unwrap_err();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        assert!(parse_product_id(&ProductId::new().to_string()).is_ok());
    }
}
