//! Contact submission service: validation in front of the store.

use std::path::Path;

use crate::metrics;
use crate::model::{ContactForm, ContactSubmission};
use crate::store::ContactStore;
use crate::Result;

/// Validates and persists contact submissions.
///
/// Owns its [`ContactStore`]; nothing else writes to the contacts table.
pub struct SubmissionService {
    store: ContactStore,
}

impl SubmissionService {
    /// Wrap an already opened store.
    pub fn new(store: ContactStore) -> Self {
        Self { store }
    }

    /// Open the store at `path` and wrap it.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self::new(ContactStore::open(path)?))
    }

    /// Service backed by an in-memory store (for testing).
    pub fn open_in_memory() -> Result<Self> {
        Ok(Self::new(ContactStore::open_in_memory()?))
    }

    /// Validate and store a submission, returning its id.
    ///
    /// An empty field fails with [`crate::Error::Validation`] before storage is
    /// touched. Storage failures are logged and returned, never retried.
    pub fn submit(&self, form: &ContactForm) -> Result<i64> {
        if let Err(e) = form.validate() {
            metrics::increment(metrics::SUBMISSIONS_REJECTED, 1);
            return Err(e);
        }

        match self.store.insert_contact(form) {
            Ok(id) => {
                metrics::increment(metrics::SUBMISSIONS_ACCEPTED, 1);
                tracing::info!(id, name = %form.name, email = %form.email, "new contact saved");
                Ok(id)
            }
            Err(e) => {
                metrics::record_storage_error("insert");
                tracing::error!(
                    error = %e,
                    name = %form.name,
                    email = %form.email,
                    "failed to save contact submission"
                );
                Err(e)
            }
        }
    }

    /// All stored submissions, newest first.
    pub fn list(&self) -> Result<Vec<ContactSubmission>> {
        self.store.list_contacts().inspect_err(|e| {
            metrics::record_storage_error("list");
            tracing::error!(error = %e, "failed to list contact submissions");
        })
    }

    /// Number of stored submissions.
    pub fn count(&self) -> Result<u64> {
        self.store.count_contacts()
    }

    /// Flush pending writes to disk (call on shutdown).
    pub fn flush(&self) -> Result<()> {
        self.store.flush()
    }
}
