//! Error types for the page service.
//!
//! Errors are rendered as simple HTML error pages rather than JSON,
//! since this is a user-facing HTML service.

use axum::http::{StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use maud::{DOCTYPE, PreEscaped, html};

use crate::render::Page;
use crate::render::components::ERROR_CSS;

/// Page service error type.
#[derive(Debug, thiserror::Error)]
pub enum PagesError {
    /// No page is served at the requested path.
    #[error("not found: {0}")]
    NotFound(String),
}

impl IntoResponse for PagesError {
    fn into_response(self) -> Response {
        let (status, title, message) = match &self {
            Self::NotFound(path) => {
                tracing::debug!(path = %path, "page not found");
                (
                    StatusCode::NOT_FOUND,
                    "Not Found",
                    format!("There is no page at {path}."),
                )
            }
        };

        let markup = html! {
            (DOCTYPE)
            html lang="en" {
                head {
                    meta charset="utf-8";
                    meta name="viewport" content="width=device-width, initial-scale=1";
                    title { (title) }
                    meta name="robots" content="noindex";
                    style { (PreEscaped(ERROR_CSS)) }
                }
                body {
                    main class="error-page" {
                        h1 { (title) }
                        p { (message) }
                        a href=(Page::Home.path()) { "Back to the home page" }
                    }
                }
            }
        };

        (status, markup).into_response()
    }
}

/// Fallback handler for paths no route matches.
pub async fn not_found(uri: Uri) -> PagesError {
    PagesError::NotFound(uri.path().to_string())
}
