//! Serving with graceful shutdown.

use std::future::Future;
use std::sync::Arc;

use axum::Router;
use nova_core::SubmissionService;
use tokio::net::TcpListener;

/// Serve `app` until `shutdown` resolves, then flush the contact store.
///
/// In-flight requests are drained before the store is flushed. A failed
/// flush is logged; the data is still in the write-ahead log.
pub async fn serve<F>(
    listener: TcpListener,
    app: Router,
    submissions: Arc<SubmissionService>,
    shutdown: F,
) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;

    if let Err(e) = submissions.flush() {
        tracing::warn!(error = %e, "failed to flush contact store");
    }
    tracing::info!("server stopped");

    Ok(())
}
