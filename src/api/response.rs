//! Uniform response envelope

use serde::Serialize;
use utoipa::ToSchema;

use crate::{api::health::HealthStatus, models::Book};

pub const SUCCESS: &str = "success";
pub const ERROR: &str = "error";

/// `{message, data?, error?}` wrapper used by every response
///
/// `data` and `error` are mutually exclusive; whichever is unset is omitted.
#[derive(Debug, Serialize, ToSchema)]
#[aliases(
    BookResponse = ApiResponse<Book>,
    BookListResponse = ApiResponse<Vec<Book>>,
    HealthResponse = ApiResponse<HealthStatus>
)]
pub struct ApiResponse<T> {
    /// `success` or `error`
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            message: SUCCESS.to_string(),
            data: Some(data),
            error: None,
        }
    }

    pub fn error(error: impl Into<String>) -> Self {
        Self {
            message: ERROR.to_string(),
            data: None,
            error: Some(error.into()),
        }
    }
}
