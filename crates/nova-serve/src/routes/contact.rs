//! Contact form submission and listing endpoints.

use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use nova_core::{ContactForm, ContactSubmission};
use serde::Serialize;

use crate::error::{ApiError, INVALID_BODY};
use crate::response::ApiResponse;
use crate::state::AppState;

/// Shown to the visitor after a successful submission.
pub const THANK_YOU: &str = "Thank you for contacting us! We'll get back to you soon.";

/// Payload returned for a stored submission.
#[derive(Debug, Clone, Serialize)]
pub struct SubmitResponse {
    pub id: i64,
}

/// `POST /api/contact`
///
/// The body is parsed as JSON whatever the `Content-Type` header says.
pub async fn submit(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<ApiResponse<SubmitResponse>>, ApiError> {
    let form: ContactForm = serde_json::from_slice(&body).map_err(|e| {
        tracing::debug!(error = %e, "malformed contact body");
        ApiError::BadRequest(INVALID_BODY.to_string())
    })?;

    let id = state
        .submissions
        .submit(&form)
        .map_err(ApiError::from_service("Failed to save contact information"))?;

    Ok(Json(ApiResponse::ok_with_message(
        THANK_YOU,
        SubmitResponse { id },
    )))
}

/// `GET /api/contacts`
///
/// Lists every submission, newest first. Not authenticated.
pub async fn list(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<ContactSubmission>>>, ApiError> {
    let contacts = state
        .submissions
        .list()
        .map_err(ApiError::from_service("Failed to fetch contacts"))?;

    Ok(Json(ApiResponse::ok(contacts)))
}
