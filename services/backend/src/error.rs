use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

use crate::db::StoreError;

pub const VALIDATION_MESSAGE: &str = "Please provide Artist and Song";
pub const NOT_FOUND_MESSAGE: &str = "Artist does not exist";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("missing artist or song")]
    Validation,

    #[error("artist not found")]
    NotFound,

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": VALIDATION_MESSAGE })),
            )
                .into_response(),
            ApiError::NotFound => (
                StatusCode::NOT_FOUND,
                Json(json!({ "error": NOT_FOUND_MESSAGE })),
            )
                .into_response(),
            ApiError::Store(e) => {
                error!("Store request failed: {}", e);
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}
