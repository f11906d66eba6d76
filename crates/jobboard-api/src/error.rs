//! API error handling.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

/// API error type.
#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    BadRequest(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
        };

        let body = Json(json!({
            "error": message
        }));

        (status, body).into_response()
    }
}

impl From<jobboard_core::Error> for ApiError {
    fn from(err: jobboard_core::Error) -> Self {
        match err {
            jobboard_core::Error::NotFound(_) => ApiError::NotFound(err.to_string()),
            jobboard_core::Error::InvalidInput(_) => ApiError::BadRequest(err.to_string()),
        }
    }
}
