//! Health check endpoint

use axum::Json;
use serde::Serialize;
use utoipa::ToSchema;

use super::response::ApiResponse;

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthStatus {
    /// Current status of the service
    pub status: String,
    /// Version of the service
    pub version: String,
}

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is healthy", body = crate::api::response::HealthResponse)
    )
)]
pub async fn health_check() -> Json<ApiResponse<HealthStatus>> {
    Json(ApiResponse::success(HealthStatus {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    }))
}
