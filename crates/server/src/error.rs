use axum::{
    http::StatusCode,
    response::{IntoResponse, Json as ResponseJson, Response},
};
use serde_json::Value as JsonValue;
use services::services::page::{PageError, ValidationErrors};
use thiserror::Error;
use tracing::error;
use utils::response::ApiResponse;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Validation failed")]
    Validation(ValidationErrors),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    /// Read-path failure: log the cause, respond with a generic message.
    pub fn internal(message: &str, source: impl std::fmt::Display) -> Self {
        error!(error = %source, "{message}");
        Self::Internal(message.to_string())
    }
}

/// Write-path translation. Store failures surface as 400 with the message
/// preserved; the read paths wrap their own errors via [`ApiError::internal`].
impl From<PageError> for ApiError {
    fn from(error: PageError) -> Self {
        let message = error.to_string();
        match error {
            PageError::Validation(issues) => Self::Validation(issues),
            PageError::NotFound => Self::NotFound(message),
            PageError::DuplicateSlug | PageError::Storage(_) => Self::BadRequest(message),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::Validation(issues) => {
                let issues = serde_json::to_value(&issues).unwrap_or(JsonValue::Null);
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    ApiResponse::<JsonValue>::error_with_data("Validation failed", issues),
                )
            }
            ApiError::NotFound(message) => (
                StatusCode::NOT_FOUND,
                ApiResponse::<JsonValue>::error(&message),
            ),
            ApiError::BadRequest(message) => (
                StatusCode::BAD_REQUEST,
                ApiResponse::<JsonValue>::error(&message),
            ),
            ApiError::Internal(message) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiResponse::<JsonValue>::error(&message),
            ),
        };

        (status, ResponseJson(body)).into_response()
    }
}
