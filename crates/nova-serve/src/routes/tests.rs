use axum::Router;
use axum::body::{Body, Bytes};
use axum::http::{HeaderMap, Method, Request, StatusCode, header};
use http_body_util::BodyExt;
use nova_core::SubmissionService;
use serde_json::{Value, json};
use tempfile::TempDir;
use tower::ServiceExt;

use super::{THANK_YOU, router};
use crate::state::{AppState, Config};

fn in_memory_state() -> AppState {
    let service = SubmissionService::open_in_memory().unwrap();
    AppState::with_service(Config::default(), service)
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, HeaderMap, Bytes) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, headers, body)
}

async fn send_json(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let (status, _, body) = send(app, request).await;
    let value = serde_json::from_slice(&body).unwrap();
    (status, value)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn post_json(uri: &str, body: impl Into<Body>) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(body.into())
        .unwrap()
}

fn ada() -> String {
    json!({"name": "Ada", "email": "ada@x.io", "subject": "Hi", "message": "Test"}).to_string()
}

fn header_str<'a>(headers: &'a HeaderMap, name: header::HeaderName) -> &'a str {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
}

// ═══════════════════════════════════════════════════════════════════════════
// Health and catalog
// ═══════════════════════════════════════════════════════════════════════════

#[tokio::test]
async fn health_reports_running() {
    let app = router(in_memory_state());
    let (status, body) = send_json(&app, get("/api/health")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "NOVA API is running");
    assert_eq!(body["data"]["status"], "healthy");
    assert_eq!(body["data"]["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn health_answers_any_method() {
    let app = router(in_memory_state());
    let (status, body) = send_json(&app, post_json("/api/health", "")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
}

#[tokio::test]
async fn features_returns_catalog() {
    let app = router(in_memory_state());
    let (status, first) = send_json(&app, get("/api/features")).await;
    let (_, second) = send_json(&app, get("/api/features")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(first["success"], true);
    assert!(first.get("message").is_none());
    let features = first["data"].as_array().unwrap();
    assert_eq!(features.len(), 6);
    assert_eq!(features[0]["title"], "Hi-Res Audio");
    assert_eq!(features[0]["icon"], "🎵");
    assert_eq!(first, second);
}

#[tokio::test]
async fn specs_returns_catalog() {
    let app = router(in_memory_state());
    let (status, body) = send_json(&app, get("/api/specs")).await;

    assert_eq!(status, StatusCode::OK);
    let specs = body["data"].as_array().unwrap();
    assert_eq!(specs.len(), 4);
    assert_eq!(specs[0]["category"], "Audio");
    assert_eq!(specs[1]["items"].as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn catalog_rejects_other_methods() {
    let app = router(in_memory_state());
    for uri in ["/api/features", "/api/specs"] {
        let (status, body) = send_json(&app, post_json(uri, "{}")).await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED, "{uri}");
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "Method not allowed");
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// CORS
// ═══════════════════════════════════════════════════════════════════════════

#[tokio::test]
async fn options_short_circuits_with_cors_headers() {
    let app = router(in_memory_state());
    for uri in [
        "/api/health",
        "/api/features",
        "/api/specs",
        "/api/contact",
        "/api/contacts",
    ] {
        let request = Request::builder()
            .method(Method::OPTIONS)
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        let (status, headers, body) = send(&app, request).await;

        assert_eq!(status, StatusCode::OK, "{uri}");
        assert!(body.is_empty(), "{uri}");
        assert_eq!(
            header_str(&headers, header::ACCESS_CONTROL_ALLOW_ORIGIN),
            "*"
        );
        let methods = header_str(&headers, header::ACCESS_CONTROL_ALLOW_METHODS);
        for method in ["GET", "POST", "PUT", "DELETE", "OPTIONS"] {
            assert!(methods.contains(method), "{uri}: {methods}");
        }
        let allowed = header_str(&headers, header::ACCESS_CONTROL_ALLOW_HEADERS).to_lowercase();
        assert!(allowed.contains("content-type"), "{uri}: {allowed}");
        assert!(allowed.contains("authorization"), "{uri}: {allowed}");
    }
}

#[tokio::test]
async fn options_does_not_persist_anything() {
    let state = in_memory_state();
    let app = router(state.clone());
    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/api/contact")
        .header(header::ORIGIN, "https://example.com")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .body(Body::from(ada()))
        .unwrap();
    let (status, _, _) = send(&app, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(state.submissions.count().unwrap(), 0);
}

#[tokio::test]
async fn regular_responses_carry_cors_headers() {
    let app = router(in_memory_state());
    let requests = [
        get("/api/features"),
        get("/api/contact"),
        post_json("/api/contact", "oops"),
    ];

    for request in requests {
        let (_, headers, _) = send(&app, request).await;
        assert_eq!(
            header_str(&headers, header::ACCESS_CONTROL_ALLOW_ORIGIN),
            "*"
        );
        assert_eq!(
            header_str(&headers, header::ACCESS_CONTROL_ALLOW_METHODS),
            "GET, POST, PUT, DELETE, OPTIONS"
        );
        assert_eq!(
            header_str(&headers, header::ACCESS_CONTROL_ALLOW_HEADERS),
            "Content-Type, Authorization"
        );
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Contact submission
// ═══════════════════════════════════════════════════════════════════════════

#[tokio::test]
async fn submit_then_list_round_trip() {
    let app = router(in_memory_state());

    let (status, body) = send_json(&app, post_json("/api/contact", ada())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], THANK_YOU);
    let id = body["data"]["id"].as_i64().unwrap();

    let (status, body) = send_json(&app, get("/api/contacts")).await;
    assert_eq!(status, StatusCode::OK);
    let contacts = body["data"].as_array().unwrap();
    assert_eq!(contacts.len(), 1);
    let contact = &contacts[0];
    assert_eq!(contact["id"], id);
    assert_eq!(contact["name"], "Ada");
    assert_eq!(contact["email"], "ada@x.io");
    assert_eq!(contact["subject"], "Hi");
    assert_eq!(contact["message"], "Test");
    assert!(contact["created_at"].is_string());
}

#[tokio::test]
async fn submit_ids_strictly_increase() {
    let app = router(in_memory_state());
    let mut last = 0;
    for _ in 0..3 {
        let (_, body) = send_json(&app, post_json("/api/contact", ada())).await;
        let id = body["data"]["id"].as_i64().unwrap();
        assert!(id > last);
        last = id;
    }
}

#[tokio::test]
async fn submit_ignores_content_type() {
    let app = router(in_memory_state());
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/contact")
        .header(header::CONTENT_TYPE, "text/plain")
        .body(Body::from(ada()))
        .unwrap();
    let (status, body) = send_json(&app, request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
}

#[tokio::test]
async fn submit_malformed_body_is_bad_request() {
    let state = in_memory_state();
    let app = router(state.clone());

    for payload in ["not json", "", "[1,2,3]", "null", r#"{"name": 5}"#] {
        let (status, body) = send_json(&app, post_json("/api/contact", payload)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{payload}");
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "Invalid request body");
        assert!(body.get("data").is_none());
    }

    assert_eq!(state.submissions.count().unwrap(), 0);
}

#[tokio::test]
async fn submit_missing_or_empty_field_is_bad_request() {
    let state = in_memory_state();
    let app = router(state.clone());
    let payloads = [
        json!({"name": "Ada", "email": "ada@x.io", "subject": "Hi"}),
        json!({"name": "", "email": "ada@x.io", "subject": "Hi", "message": "Test"}),
        json!({"name": null, "email": "a", "subject": "s", "message": "m"}),
        json!({}),
    ];

    for payload in payloads {
        let (status, body) =
            send_json(&app, post_json("/api/contact", payload.to_string())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{payload}");
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "All fields are required");
    }

    assert_eq!(state.submissions.count().unwrap(), 0);
}

#[tokio::test]
async fn contact_endpoints_reject_wrong_method() {
    let app = router(in_memory_state());

    let (status, body) = send_json(&app, get("/api/contact")).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(body["success"], false);

    let (status, _) = send_json(&app, post_json("/api/contacts", ada())).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn list_empty_store_returns_empty_array() {
    let app = router(in_memory_state());
    let (status, body) = send_json(&app, get("/api/contacts")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"], json!([]));
}

#[tokio::test]
async fn storage_failure_is_generic_server_error() {
    let tmp = TempDir::new().unwrap();
    let db_path = tmp.path().join("contacts.db");
    let config = Config {
        db_path: db_path.clone(),
        ..Config::default()
    };
    let app = router(AppState::new(config).unwrap());

    // Break the store behind the service's back.
    let other = rusqlite::Connection::open(&db_path).unwrap();
    other.execute_batch("DROP TABLE contacts").unwrap();
    drop(other);

    let (status, body) = send_json(&app, post_json("/api/contact", ada())).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Failed to save contact information");

    let (status, body) = send_json(&app, get("/api/contacts")).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["message"], "Failed to fetch contacts");
    assert!(!body.to_string().contains("no such table"));
}
