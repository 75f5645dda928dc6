//! # Inventory Lookup Trait
//!
//! Seam between the cart store and whatever supplies product and stock
//! data. The store calls it once or twice per mutating operation and never
//! caches the result; stock is always read fresh.
//!
//! Implementations: HTTP inventory API (cart-http), in-memory
//! `StaticInventory` for tests and offline use.

use crate::error::{CartError, CartResult};
use crate::product::{Product, ProductId, Stock};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;

/// Core trait for inventory sources.
///
/// Both lookups may fail on transport errors or when the identifier does
/// not resolve; the store treats those failures identically.
#[async_trait]
pub trait InventoryLookup: Send + Sync {
    /// Fetch the current stock record for a product.
    async fn stock(&self, product_id: ProductId) -> CartResult<Stock>;

    /// Fetch the catalog record for a product.
    async fn product(&self, product_id: ProductId) -> CartResult<Product>;

    /// Get the source name (for logging).
    fn source_name(&self) -> &'static str {
        "inventory"
    }
}

/// Type alias for a shared inventory source (dynamic dispatch)
pub type BoxedInventoryLookup = Arc<dyn InventoryLookup>;

/// In-memory inventory backed by fixed maps.
///
/// Stock amounts here are totals available at the source, independent of
/// what any cart holds.
#[derive(Debug, Clone, Default)]
pub struct StaticInventory {
    products: HashMap<ProductId, Product>,
    stock: HashMap<ProductId, u32>,
}

impl StaticInventory {
    /// Create an empty inventory
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: register a product with its available stock
    pub fn with_product(mut self, product: Product, available: u32) -> Self {
        self.stock.insert(product.id, available);
        self.products.insert(product.id, product);
        self
    }

    /// Replace the available stock for a product
    pub fn set_stock(&mut self, product_id: ProductId, available: u32) {
        self.stock.insert(product_id, available);
    }
}

#[async_trait]
impl InventoryLookup for StaticInventory {
    async fn stock(&self, product_id: ProductId) -> CartResult<Stock> {
        self.stock
            .get(&product_id)
            .map(|&amount| Stock::new(product_id, amount))
            .ok_or(CartError::StockNotFound { product_id })
    }

    async fn product(&self, product_id: ProductId) -> CartResult<Product> {
        self.products
            .get(&product_id)
            .cloned()
            .ok_or(CartError::ProductNotFound { product_id })
    }

    fn source_name(&self) -> &'static str {
        "static"
    }
}
