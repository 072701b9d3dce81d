//! Page configuration loaded from environment variables.

/// Presentation settings for the rendered pages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PagesConfig {
    /// Brand name shown in the navigation bar and page titles.
    pub site_name: String,

    /// Price label on the home page call to action (e.g., "$299").
    pub product_price: String,
}

impl Default for PagesConfig {
    fn default() -> Self {
        Self {
            site_name: "NOVA".to_string(),
            product_price: "$299".to_string(),
        }
    }
}

impl PagesConfig {
    /// Load configuration from environment variables.
    ///
    /// Optional:
    /// - `NOVA_SITE_NAME`: Brand name (default: "NOVA")
    /// - `NOVA_PRODUCT_PRICE`: Price label (default: "$299")
    pub fn from_env() -> anyhow::Result<Self> {
        let defaults = Self::default();

        let site_name = non_blank_var("NOVA_SITE_NAME").unwrap_or(defaults.site_name);
        let product_price = non_blank_var("NOVA_PRODUCT_PRICE").unwrap_or(defaults.product_price);

        tracing::info!(
            site_name = %site_name,
            product_price = %product_price,
            "page configuration loaded"
        );

        Ok(Self {
            site_name,
            product_price,
        })
    }
}

fn non_blank_var(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}
