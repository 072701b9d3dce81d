//! Prometheus metrics helpers for the NOVA services.
//!
//! Recording is a no-op until a recorder is installed, so library code can
//! count unconditionally and binaries decide whether to export.
//!
//! # Usage
//!
//! ```rust,ignore
//! use nova_core::metrics::{init_metrics, start_metrics_server};
//!
//! #[tokio::main]
//! async fn main() {
//!     let handle = init_metrics();
//!     start_metrics_server(9091, handle).await.unwrap();
//! }
//! ```

use axum::{Router, routing::get};
use metrics::describe_counter;
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use std::net::SocketAddr;

/// Contact submissions stored successfully.
pub const SUBMISSIONS_ACCEPTED: &str = "contact_submissions_total";

/// Contact submissions rejected by validation.
pub const SUBMISSIONS_REJECTED: &str = "contact_submissions_rejected_total";

/// Storage failures (label: operation).
pub const STORAGE_ERRORS: &str = "contact_storage_errors_total";

/// Initialize the Prometheus metrics recorder.
///
/// This must be called once at startup before any metrics are recorded.
///
/// # Panics
///
/// Panics if called more than once (the recorder can only be installed once).
pub fn init_metrics() -> PrometheusHandle {
    let handle = PrometheusBuilder::new()
        .install_recorder()
        .expect("Failed to install Prometheus recorder");

    register_metrics();

    handle
}

/// Like [`init_metrics`] but returns `None` if a recorder is already installed.
pub fn try_init_metrics() -> Option<PrometheusHandle> {
    let handle = PrometheusBuilder::new().install_recorder().ok()?;
    register_metrics();
    Some(handle)
}

/// Start the Prometheus metrics HTTP server.
///
/// Binds `/metrics` on `0.0.0.0:port` and serves it from a background task.
/// Bind errors are returned to the caller; the task itself only logs.
pub async fn start_metrics_server(
    port: u16,
    handle: PrometheusHandle,
) -> Result<(), std::io::Error> {
    let app = Router::new().route(
        "/metrics",
        get(move || {
            let handle = handle.clone();
            async move { handle.render() }
        }),
    );

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Metrics server listening on http://{}/metrics", addr);

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            tracing::error!(error = %e, "metrics server stopped");
        }
    });

    Ok(())
}

fn register_metrics() {
    describe_counter!(
        SUBMISSIONS_ACCEPTED,
        "Contact submissions persisted to the store"
    );
    describe_counter!(
        SUBMISSIONS_REJECTED,
        "Contact submissions rejected because a required field was empty"
    );
    describe_counter!(
        STORAGE_ERRORS,
        "Contact store failures (label: operation)"
    );
}

/// Increment a counter.
#[inline]
pub fn increment(name: &'static str, count: u64) {
    metrics::counter!(name).increment(count);
}

/// Count a storage failure for the given operation.
#[inline]
pub fn record_storage_error(operation: &'static str) {
    metrics::counter!(STORAGE_ERRORS, "operation" => operation).increment(1);
}
