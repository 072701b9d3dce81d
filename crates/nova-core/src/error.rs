//! Error types for contact storage and submission.

use thiserror::Error;

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while validating or persisting contact submissions.
#[derive(Error, Debug)]
pub enum Error {
    /// A required form field was empty.
    ///
    /// Raised before storage is touched; nothing is persisted.
    #[error("validation error: field '{field}' is required")]
    Validation {
        /// The name of the first empty field.
        field: &'static str,
    },

    /// SQLite open, read, or write failure.
    #[error("storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    /// I/O error (e.g. creating the database directory).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Whether the caller supplied bad input (as opposed to a storage failure).
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }
}
