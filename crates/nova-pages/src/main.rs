//! NOVA Pages - HTTP server for the NOVA site pages and JSON API.
//!
//! Renders the HTML pages and serves the contact API from one listener.

use anyhow::Context;
use axum::http::Request;
use clap::Parser;
use tower_http::trace::TraceLayer;
use tracing::Level;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use nova_pages::{PagesConfig, PagesState, app};
use nova_serve::{AppState, Config, serve, shutdown_signal};

/// NOVA page server.
#[derive(Parser, Debug)]
#[command(name = "nova-pages")]
#[command(about = "HTML page server for the NOVA product site", long_about = None)]
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
    let pages_config = PagesConfig::from_env()?;
    let bind_addr = config.bind_addr.clone();
    let metrics_port = config.metrics_port;

    let api_state = AppState::new(config).inspect_err(|e| {
        tracing::error!(error = %format!("{e:#}"), "failed to initialize contact store");
    })?;
    let submissions = api_state.submissions.clone();
    if let Some(count) = api_state.stored_contacts() {
        tracing::info!(stored_contacts = count, "contact store ready");
    }

    if let Some(port) = metrics_port {
        let handle = nova_core::metrics::init_metrics();
        nova_core::metrics::start_metrics_server(port, handle)
            .await
            .context("failed to start metrics server")?;
    }

    // Build router with middleware
    let app = app(api_state, PagesState::new(pages_config)).layer(
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
    tracing::info!(addr = %bind_addr, "starting page server");

    serve(listener, app, submissions, shutdown_signal()).await?;

    Ok(())
}
