//! NOVA Serve - JSON API for the NOVA headphones site.
//!
//! Serves the product catalog and accepts contact-form submissions, which are
//! stored in a local SQLite database.
//!
//! # Architecture
//!
//! - **AppState**: Shared application state (submission service, configuration)
//! - **Routes**: Endpoint handlers plus the CORS layer
//! - **ApiResponse**: The `{success, message?, data?}` envelope used by every endpoint

mod error;
mod response;
mod routes;
mod serve;
mod shutdown;
mod state;

pub use self::error::ApiError;
pub use self::response::ApiResponse;
pub use self::routes::{ENDPOINTS, HealthResponse, SubmitResponse, THANK_YOU, router};
pub use self::serve::serve;
pub use self::shutdown::shutdown_signal;
pub use self::state::{AppState, Config};
