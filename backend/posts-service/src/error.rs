/// Error types for Posts Service
///
/// Every failure surfaced by the listing pipeline maps to the same opaque
/// 500 response. The `Display` output carries the detail and is only ever
/// written to logs.
use crate::models::ErrorResponse;
use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};

/// Message returned to clients for any internal failure
pub const GENERIC_ERROR_MESSAGE: &str = "An error occurred while processing your request.";

/// Result type for posts-service operations
pub type Result<T> = std::result::Result<T, AppError>;

/// Application error types
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Database operation failed
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Response body could not be encoded
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: GENERIC_ERROR_MESSAGE.to_string(),
        })
    }
}
