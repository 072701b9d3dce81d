//! API route definitions.

mod catalog;
mod contact;
mod health;

#[cfg(test)]
mod tests;

pub use contact::{SubmitResponse, THANK_YOU};
pub use health::HealthResponse;

use axum::Router;
use axum::http::{HeaderValue, Method, header};
use axum::middleware;
use axum::response::Response;
use axum::routing::{any, get, post};
use tower_http::cors::{Any, CorsLayer};

use crate::error::method_not_allowed;
use crate::state::AppState;

/// Methods advertised to browsers on every response.
const ALLOWED_METHODS: [Method; 5] = [
    Method::GET,
    Method::POST,
    Method::PUT,
    Method::DELETE,
    Method::OPTIONS,
];

/// Endpoint listing (method, path, description), logged at startup.
pub const ENDPOINTS: &[(&str, &str, &str)] = &[
    ("GET", "/api/health", "Health check"),
    ("GET", "/api/features", "Product features"),
    ("GET", "/api/specs", "Technical specs"),
    ("POST", "/api/contact", "Submit contact form"),
    ("GET", "/api/contacts", "List all contacts"),
];

/// Build the complete API router.
///
/// # Route Structure
///
/// - `ANY  /api/health` - Health check
/// - `GET  /api/features` - Feature catalog
/// - `GET  /api/specs` - Spec catalog
/// - `POST /api/contact` - Store a contact submission
/// - `GET  /api/contacts` - List submissions, newest first
///
/// `/api/contacts` has no authentication and exposes every submission.
///
/// Every response carries permissive CORS headers, and any `OPTIONS`
/// request is answered with an empty 200 before reaching a handler.
pub fn router(state: AppState) -> Router {
    let api = Router::new()
        .route("/health", any(health::health_check))
        .route(
            "/features",
            get(catalog::features).fallback(method_not_allowed),
        )
        .route("/specs", get(catalog::specs).fallback(method_not_allowed))
        .route("/contact", post(contact::submit).fallback(method_not_allowed))
        .route("/contacts", get(contact::list).fallback(method_not_allowed))
        .layer(middleware::map_response(add_cors_headers))
        .layer(cors_layer());

    Router::new().nest("/api", api).with_state(state)
}

/// Wildcard-origin CORS; also short-circuits every `OPTIONS` request.
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(ALLOWED_METHODS)
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
}

/// Advertise allowed methods and headers on regular (non-preflight) responses.
///
/// The CORS layer only sends these two on preflight.
async fn add_cors_headers(mut response: Response) -> Response {
    let headers = response.headers_mut();
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static("GET, POST, PUT, DELETE, OPTIONS"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static("Content-Type, Authorization"),
    );
    response
}
