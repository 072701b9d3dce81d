//! Product catalog endpoints.

use axum::Json;
use nova_core::{Feature, Spec, catalog};

use crate::response::ApiResponse;

/// `GET /api/features`
pub async fn features() -> Json<ApiResponse<Vec<Feature>>> {
    Json(ApiResponse::ok(catalog::features()))
}

/// `GET /api/specs`
pub async fn specs() -> Json<ApiResponse<Vec<Spec>>> {
    Json(ApiResponse::ok(catalog::specs()))
}
