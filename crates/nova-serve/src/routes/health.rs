//! Health check endpoint.

use axum::Json;
use serde::Serialize;

use crate::response::ApiResponse;

/// Health check payload.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

/// Liveness endpoint. Answers every method and never fails.
pub async fn health_check() -> Json<ApiResponse<HealthResponse>> {
    Json(ApiResponse::ok_with_message(
        "NOVA API is running",
        HealthResponse {
            status: "healthy",
            version: env!("CARGO_PKG_VERSION"),
        },
    ))
}
