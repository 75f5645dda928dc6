//! # Inventory API Configuration
//!
//! Configuration for the HTTP inventory source. Loaded from environment
//! variables so deployments can point the cart at any catalog instance.

use cart_core::CartError;
use std::env;

/// Default request timeout in seconds
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Inventory API configuration
#[derive(Debug, Clone)]
pub struct InventoryApiConfig {
    /// Base URL of the inventory API (e.g. `http://localhost:3333`)
    pub base_url: String,

    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

impl InventoryApiConfig {
    /// Load configuration from environment variables.
    ///
    /// Required env vars:
    /// - `CART_API_URL`
    ///
    /// Optional:
    /// - `CART_API_TIMEOUT_SECS` (defaults to 10)
    pub fn from_env() -> Result<Self, CartError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let base_url = env::var("CART_API_URL")
            .map_err(|_| CartError::Configuration("CART_API_URL not set".to_string()))?;

        let timeout_secs = env::var("CART_API_TIMEOUT_SECS")
            .ok()
            .and_then(|t| t.parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Self::new(base_url).map(|config| Self {
            timeout_secs,
            ..config
        })
    }

    /// Create config with an explicit base URL (for testing)
    pub fn new(base_url: impl Into<String>) -> Result<Self, CartError> {
        let base_url: String = base_url.into();
        let base_url = base_url.trim_end_matches('/').to_string();

        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(CartError::Configuration(
                "CART_API_URL must start with http:// or https://".to_string(),
            ));
        }

        Ok(Self {
            base_url,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        })
    }

    /// URL of the stock endpoint for a product
    pub fn stock_url(&self, product_id: u64) -> String {
        format!("{}/stock/{}", self.base_url, product_id)
    }

    /// URL of the product endpoint for a product
    pub fn product_url(&self, product_id: u64) -> String {
        format!("{}/products/{}", self.base_url, product_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_non_http_url() {
        assert!(InventoryApiConfig::new("ftp://example.com").is_err());
        assert!(InventoryApiConfig::new("localhost:3333").is_err());
    }

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let config = InventoryApiConfig::new("http://localhost:3333/").unwrap();
        assert_eq!(config.stock_url(1), "http://localhost:3333/stock/1");
        assert_eq!(config.product_url(7), "http://localhost:3333/products/7");
    }
}
