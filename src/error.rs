//! Error types for the Books API

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{api::response::ApiResponse, repository::StoreError};

/// Message returned when a path parameter cannot be parsed
pub const INVALID_PARAMETER: &str = "invalid parameter";

/// Message returned when a request body is missing, malformed or invalid
pub const INVALID_PAYLOAD: &str = "invalid payload";

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Client input rejected at the boundary
    #[error("{0}")]
    Validation(String),

    #[error("book not found: id {0}")]
    BookNotFound(i64),

    #[error("route not found")]
    RouteNotFound,

    #[error("Method Not Allowed")]
    MethodNotAllowed,

    /// Record store failure, tagged with the operation that hit it
    #[error("storage error: failed to {operation}")]
    Storage {
        operation: &'static str,
        #[source]
        source: StoreError,
    },

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn invalid_parameter() -> Self {
        AppError::Validation(INVALID_PARAMETER.to_string())
    }

    pub fn invalid_payload() -> Self {
        AppError::Validation(INVALID_PAYLOAD.to_string())
    }

    pub fn storage(operation: &'static str, source: StoreError) -> Self {
        AppError::Storage { operation, source }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::BookNotFound(_) | AppError::RouteNotFound => StatusCode::NOT_FOUND,
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            AppError::Storage { .. } | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        // Storage failures are logged with context by the service
        let message = match &self {
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                "internal server error".to_string()
            }
            _ => self.to_string(),
        };

        (status, Json(ApiResponse::<()>::error(message))).into_response()
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(AppError::invalid_payload().status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(AppError::BookNotFound(3).status_code(), StatusCode::NOT_FOUND);
        assert_eq!(AppError::MethodNotAllowed.status_code(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(
            AppError::storage("delete book", StoreError::Backend("disk full".into())).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_messages_do_not_leak_store_details() {
        let err = AppError::storage("save book", StoreError::Backend("disk full".into()));
        assert_eq!(err.to_string(), "storage error: failed to save book");
        assert_eq!(AppError::BookNotFound(99).to_string(), "book not found: id 99");
    }
}
