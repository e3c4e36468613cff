use axum::{http::StatusCode, response::IntoResponse, Json};

use crate::app::docs;

pub async fn health() -> StatusCode {
    StatusCode::OK
}

pub async fn api_docs() -> impl IntoResponse {
    Json(docs::api_docs())
}
