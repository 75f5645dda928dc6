//! # cart-http
//!
//! HTTP inventory lookup for swift-cart-rs.
//!
//! Implements `cart_core::InventoryLookup` against the catalog's REST API:
//!
//! | Method | Path | Returns |
//! |--------|------|---------|
//! | GET | `/stock/{id}` | `{ "id", "amount" }` |
//! | GET | `/products/{id}` | `{ "id", "title", "price", "image" }` |
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use cart_http::HttpInventory;
//!
//! // Reads CART_API_URL from the environment
//! let inventory = HttpInventory::from_env()?;
//! let stock = inventory.stock(1).await?;
//! ```

pub mod client;
pub mod config;

// Re-exports
pub use client::HttpInventory;
pub use config::InventoryApiConfig;
