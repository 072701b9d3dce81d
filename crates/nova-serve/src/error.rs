//! API error types and response formatting.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::response::ApiResponse;

/// User-facing message for a body that is not a valid contact form.
pub const INVALID_BODY: &str = "Invalid request body";

/// User-facing message when a required contact field is empty.
pub const FIELDS_REQUIRED: &str = "All fields are required";

/// User-facing message for a method an endpoint does not accept.
pub const METHOD_NOT_ALLOWED: &str = "Method not allowed";

/// API error type that converts to an enveloped JSON response.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Malformed or incomplete request data.
    #[error("bad request: {0}")]
    BadRequest(String),

    /// The endpoint exists but does not accept this method.
    #[error("method not allowed")]
    MethodNotAllowed,

    /// Contact store failure. `message` is what the client sees.
    #[error("storage error: {source}")]
    Storage {
        message: &'static str,
        #[source]
        source: nova_core::Error,
    },
}

impl ApiError {
    /// Map a service error, using `message` for storage failures.
    ///
    /// ```rust,ignore
    /// service.list().map_err(ApiError::from_service("Failed to fetch contacts"))?;
    /// ```
    pub fn from_service(message: &'static str) -> impl FnOnce(nova_core::Error) -> Self {
        move |err| {
            if err.is_validation() {
                Self::BadRequest(FIELDS_REQUIRED.to_string())
            } else {
                Self::Storage {
                    message,
                    source: err,
                }
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            Self::MethodNotAllowed => (
                StatusCode::METHOD_NOT_ALLOWED,
                METHOD_NOT_ALLOWED.to_string(),
            ),
            Self::Storage { message, source } => {
                tracing::error!(error = %source, "storage error");
                (StatusCode::INTERNAL_SERVER_ERROR, message.to_string())
            }
        };

        (status, Json(ApiResponse::failure(message))).into_response()
    }
}

/// Fallback for routes hit with a method they don't serve.
pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}
