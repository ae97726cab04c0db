use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// The analysis pipeline is infallible, so rejected input is the only error
/// this service produces.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let AppError::Validation(message) = self;

        let body = Json(json!({
            "error": {
                "code": "VALIDATION_ERROR",
                "message": message
            }
        }));

        (StatusCode::BAD_REQUEST, body).into_response()
    }
}
