//! # Cart Error Types
//!
//! Typed error handling for the cart engine.
//! All fallible cart operations return `Result<T, CartError>`.
//!
//! The public store operations never surface these to the caller; they are
//! translated into notifier messages at the operation boundary (fail-soft,
//! notify-and-stop). Inside the library and in adapters they propagate
//! normally with `?`.

use crate::product::ProductId;
use thiserror::Error;

/// Core error type for all cart operations
#[derive(Debug, Error)]
pub enum CartError {
    /// Configuration errors (missing env vars, invalid URLs)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Product record could not be resolved by the inventory source
    #[error("Product not found: {product_id}")]
    ProductNotFound { product_id: ProductId },

    /// Stock record could not be resolved by the inventory source
    #[error("Stock not found for product: {product_id}")]
    StockNotFound { product_id: ProductId },

    /// Requested cumulative quantity exceeds available stock
    #[error("Out of stock for product {product_id}: requested {requested}, available {available}")]
    OutOfStock {
        product_id: ProductId,
        requested: u32,
        available: u32,
    },

    /// Mutation targeted an identifier absent from the cart
    #[error("Product {product_id} is not in the cart")]
    NotInCart { product_id: ProductId },

    /// Network/HTTP error communicating with the inventory source
    #[error("Network error: {0}")]
    Network(String),

    /// Snapshot serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl CartError {
    /// Returns true if this error is a stock violation (as opposed to a
    /// resolution or transport failure)
    pub fn is_stock_violation(&self) -> bool {
        matches!(self, CartError::OutOfStock { .. })
    }
}

/// Result type alias for cart operations
pub type CartResult<T> = Result<T, CartError>;
