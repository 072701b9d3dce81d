//! State shared across all page handlers.

use std::sync::Arc;

use crate::config::PagesConfig;

/// Shared state available to all page handlers.
#[derive(Clone, Debug, Default)]
pub struct PagesState {
    /// Presentation settings.
    pub config: Arc<PagesConfig>,
}

impl PagesState {
    pub fn new(config: PagesConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }
}
