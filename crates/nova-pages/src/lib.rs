//! NOVA Pages - server-rendered HTML pages for the NOVA headphones site.
//!
//! Serves the home, features, specs and contact pages, and mounts the JSON
//! API from `nova-serve` next to them so one process serves the whole site.
//!
//! # Architecture
//!
//! - **Render**: Page bodies and the shared shell, generated with maud
//! - **Routes**: Page handlers, the `/` redirect and the HTML 404 fallback
//! - **Config**: Site name and product price from the environment
//!
//! All dynamic content is HTML-escaped by maud.

pub mod config;
pub mod error;
pub mod render;
pub mod routes;
pub mod state;

pub use config::PagesConfig;
pub use routes::{app, router};
pub use state::PagesState;
