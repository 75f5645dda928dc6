//! # Application Configuration
//!
//! Environment-driven settings for the CLI. The inventory API URL is read
//! separately by `cart_http::InventoryApiConfig`.

use cart_core::DEFAULT_STORAGE_KEY;
use std::path::PathBuf;

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Directory holding persisted cart snapshots
    pub storage_dir: PathBuf,

    /// Storage key for this session's cart
    pub storage_key: String,
}

impl AppConfig {
    /// Load from environment variables
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            storage_dir: std::env::var("CART_STORAGE_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(".swift-cart")),
            storage_key: std::env::var("CART_STORAGE_KEY")
                .unwrap_or_else(|_| DEFAULT_STORAGE_KEY.to_string()),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_env()
    }
}
