//! Core types, storage, and services for the NOVA product site.
//!
//! This crate provides:
//! - Domain types for contact submissions and catalog entries
//! - The fixed product catalog (features and technical specs)
//! - SQLite-backed contact storage
//! - The submission service that validates and persists contact forms
//! - Prometheus metrics helpers
//! - Shared error types

pub mod catalog;
mod error;
pub mod metrics;
pub mod model;
pub mod store;
pub mod submission;

pub use error::{Error, Result};
pub use model::{ContactForm, ContactSubmission, Feature, Spec};
pub use store::ContactStore;
pub use submission::SubmissionService;
