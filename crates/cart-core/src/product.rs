//! # Product and Stock Types
//!
//! Catalog-facing types for the cart. The cart treats catalog attributes
//! (title, price, image) as opaque passthrough data; only `ProductId` and
//! stock amounts take part in mutation rules.

use serde::{Deserialize, Serialize};

/// Stable product identifier assigned by the catalog
pub type ProductId = u64;

/// Price with amount in smallest currency unit (cents)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Price {
    /// Amount in cents
    pub cents: i64,
}

impl Price {
    /// Create a price from a decimal amount (e.g. `29.99`)
    pub fn new(amount: f64) -> Self {
        Self {
            cents: (amount * 100.0).round() as i64,
        }
    }

    /// Create a price directly from cents
    pub const fn from_cents(cents: i64) -> Self {
        Self { cents }
    }

    /// Get the decimal amount
    pub fn as_decimal(&self) -> f64 {
        self.cents as f64 / 100.0
    }

    /// Format for display (e.g., "$10.00")
    pub fn display(&self) -> String {
        format!("${:.2}", self.as_decimal())
    }
}

/// A product as resolved by the inventory source
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    /// Unique product identifier
    pub id: ProductId,

    /// Display title
    pub title: String,

    /// Unit price
    pub price: Price,

    /// Optional image URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl Product {
    /// Create a new product
    pub fn new(id: ProductId, title: impl Into<String>, price: Price) -> Self {
        Self {
            id,
            title: title.into(),
            price,
            image_url: None,
        }
    }

    /// Builder: set image URL
    pub fn with_image(mut self, url: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self
    }
}

/// Availability count for a product, fetched fresh on every mutating
/// operation. Never persisted by the cart.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Stock {
    /// Product this count belongs to
    pub product_id: ProductId,

    /// Units available
    pub amount: u32,
}

impl Stock {
    /// Create a stock record
    pub const fn new(product_id: ProductId, amount: u32) -> Self {
        Self { product_id, amount }
    }
}
