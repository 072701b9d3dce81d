//! NOVA Serve - HTTP API server for the NOVA headphones site.
//!
//! Opens the contact store, then serves the JSON API until SIGINT/SIGTERM.

use anyhow::Context;
use axum::http::Request;
use clap::Parser;
use tower_http::trace::TraceLayer;
use tracing::Level;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use nova_serve::{AppState, Config, ENDPOINTS, router, serve, shutdown_signal};

/// NOVA API server.
#[derive(Parser, Debug)]
#[command(name = "nova-serve")]
#[command(about = "HTTP API server for the NOVA product site", long_about = None)]
struct Args {
    /// Path to .env file (optional).
    #[arg(long, env = "DOTENV_PATH", default_value = ".env")]
    dotenv: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Load .env file if it exists
    if std::path::Path::new(&args.dotenv).exists() {
        dotenvy::from_path(&args.dotenv)?;
        eprintln!("Loaded environment from {}", args.dotenv);
    }

    // Initialize tracing
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env()?;
    let bind_addr = config.bind_addr.clone();
    let metrics_port = config.metrics_port;

    // Open the contact store; failure here is fatal
    let state = AppState::new(config).inspect_err(|e| {
        tracing::error!(error = %format!("{e:#}"), "failed to initialize contact store");
    })?;
    let submissions = state.submissions.clone();
    if let Some(count) = state.stored_contacts() {
        tracing::info!(stored_contacts = count, "contact store ready");
    }

    if let Some(port) = metrics_port {
        let handle = nova_core::metrics::init_metrics();
        nova_core::metrics::start_metrics_server(port, handle)
            .await
            .context("failed to start metrics server")?;
    }

    // Build router with middleware
    let app = router(state).layer(
        TraceLayer::new_for_http().make_span_with(|request: &Request<_>| {
            tracing::span!(
                Level::INFO,
                "http_request",
                method = %request.method(),
                path = %request.uri().path(),
            )
        }),
    );

    // Start server
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {bind_addr}"))?;
    tracing::info!(addr = %bind_addr, "starting server");
    for (method, path, description) in ENDPOINTS {
        tracing::info!("  {method:<4} {path:<14} - {description}");
    }

    serve(listener, app, submissions, shutdown_signal()).await?;

    Ok(())
}
