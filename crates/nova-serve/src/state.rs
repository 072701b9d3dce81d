//! Application state and configuration.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use nova_core::SubmissionService;

/// Application configuration loaded from environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Server bind address (e.g., "0.0.0.0:8080").
    pub bind_addr: String,

    /// Path to the SQLite contacts database.
    pub db_path: PathBuf,

    /// Port for the Prometheus `/metrics` endpoint (disabled when unset).
    pub metrics_port: Option<u16>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:8080".to_string(),
            db_path: PathBuf::from("./contacts.db"),
            metrics_port: None,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `NOVA_BIND_ADDR`: Server bind address (default: "0.0.0.0:8080")
    /// - `NOVA_DB_PATH`: SQLite database file (default: "./contacts.db")
    /// - `NOVA_METRICS_PORT`: Enables the metrics endpoint on this port
    pub fn from_env() -> anyhow::Result<Self> {
        let defaults = Self::default();

        let bind_addr = std::env::var("NOVA_BIND_ADDR").unwrap_or(defaults.bind_addr);

        let db_path = std::env::var("NOVA_DB_PATH")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.db_path);

        let metrics_port = match std::env::var("NOVA_METRICS_PORT") {
            Ok(raw) if !raw.trim().is_empty() => Some(
                raw.trim()
                    .parse::<u16>()
                    .with_context(|| format!("NOVA_METRICS_PORT is not a valid port: {raw}"))?,
            ),
            _ => None,
        };

        tracing::info!(
            bind_addr = %bind_addr,
            db_path = %db_path.display(),
            metrics_port = ?metrics_port,
            "configuration loaded"
        );

        Ok(Self {
            bind_addr,
            db_path,
            metrics_port,
        })
    }
}

/// Shared application state available to all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Contact submission service (owns the SQLite store).
    pub submissions: Arc<SubmissionService>,

    /// Application configuration.
    pub config: Arc<Config>,
}

impl AppState {
    /// Create the application state, opening the contact store.
    ///
    /// Fails if the database cannot be opened or its schema created; callers
    /// must not start serving in that case.
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let service = SubmissionService::open(&config.db_path).with_context(|| {
            format!(
                "failed to open contact store at {}",
                config.db_path.display()
            )
        })?;

        Ok(Self::with_service(config, service))
    }

    /// Number of stored submissions, or `None` if the store cannot be read.
    ///
    /// Read failures are logged at WARN.
    pub fn stored_contacts(&self) -> Option<u64> {
        self.submissions
            .count()
            .inspect_err(|e| tracing::warn!(error = %e, "failed to count stored contacts"))
            .ok()
    }

    /// Create the application state around an existing service.
    pub fn with_service(config: Config, service: SubmissionService) -> Self {
        Self {
            submissions: Arc::new(service),
            config: Arc::new(config),
        }
    }
}
