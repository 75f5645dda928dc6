//! # Cart Types
//!
//! The ordered collection of line items and its persisted snapshot form.
//!
//! Mutation helpers are pure: each one computes the next full collection
//! instead of editing in place. The store persists the computed collection
//! as a whole-snapshot overwrite before swapping it in, so the in-memory
//! cart and the stored snapshot never diverge after a successful mutation.

use crate::error::{CartError, CartResult};
use crate::product::{Price, Product, ProductId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A line item in the cart
///
/// Product attributes are denormalized at add time so the cart can render
/// without a further catalog round trip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// Product ID
    pub product_id: ProductId,

    /// Product title (denormalized for display)
    pub title: String,

    /// Unit price
    pub price: Price,

    /// Optional image URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,

    /// Quantity in the cart; always at least 1
    pub amount: u32,
}

impl LineItem {
    /// Create a line item from a resolved product
    pub fn from_product(product: &Product, amount: u32) -> Self {
        Self {
            product_id: product.id,
            title: product.title.clone(),
            price: product.price,
            image_url: product.image_url.clone(),
            amount,
        }
    }

    /// Calculate the total price for this line item
    pub fn subtotal(&self) -> Price {
        Price::from_cents(self.price.cents * self.amount as i64)
    }
}

/// The ordered collection of line items, unique by product identifier
///
/// Insertion order is preserved on add; relative order among existing items
/// is preserved across updates and removals.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    items: Vec<LineItem>,
}

impl Cart {
    /// Create an empty cart
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Find a line item by product ID
    pub fn get(&self, product_id: ProductId) -> Option<&LineItem> {
        self.items.iter().find(|i| i.product_id == product_id)
    }

    /// Check whether a product is in the cart
    pub fn contains(&self, product_id: ProductId) -> bool {
        self.get(product_id).is_some()
    }

    /// Iterate over the line items in insertion order
    pub fn items(&self) -> impl Iterator<Item = &LineItem> {
        self.items.iter()
    }

    /// Number of distinct line items
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the cart is empty
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Total unit count across all line items
    pub fn unit_count(&self) -> u32 {
        self.items.iter().map(|i| i.amount).sum()
    }

    /// Calculate the cart total
    pub fn total(&self) -> Price {
        Price::from_cents(self.items.iter().map(|i| i.subtotal().cents).sum())
    }

    /// Compute the next cart with a new line item appended
    pub fn with_item(&self, item: LineItem) -> Cart {
        let mut items = self.items.clone();
        items.push(item);
        Cart { items }
    }

    /// Compute the next cart with the matching item's amount replaced.
    /// Non-matching items pass through untouched, in order.
    pub fn with_amount(&self, product_id: ProductId, amount: u32) -> Cart {
        let items = self
            .items
            .iter()
            .map(|item| {
                if item.product_id == product_id {
                    LineItem {
                        amount,
                        ..item.clone()
                    }
                } else {
                    item.clone()
                }
            })
            .collect();
        Cart { items }
    }

    /// Compute the next cart with the matching item filtered out
    pub fn without(&self, product_id: ProductId) -> Cart {
        let items = self
            .items
            .iter()
            .filter(|item| item.product_id != product_id)
            .cloned()
            .collect();
        Cart { items }
    }
}

/// The persisted form of the cart: the full item list plus the time it was
/// written. One snapshot replaces the previous one wholesale.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    /// When this snapshot was written
    pub saved_at: DateTime<Utc>,

    /// Line items, in cart order
    pub items: Vec<LineItem>,
}

impl Snapshot {
    /// Capture a snapshot of the given cart
    pub fn of(cart: &Cart) -> Self {
        Self {
            saved_at: Utc::now(),
            items: cart.items.clone(),
        }
    }

    /// Restore the cart this snapshot was taken from
    pub fn into_cart(self) -> Cart {
        Cart { items: self.items }
    }

    /// Serialize to the storage wire form
    pub fn to_json(&self) -> CartResult<String> {
        serde_json::to_string(self).map_err(|e| CartError::Serialization(e.to_string()))
    }

    /// Parse a snapshot from its storage wire form
    pub fn from_json(raw: &str) -> CartResult<Self> {
        serde_json::from_str(raw).map_err(|e| CartError::Serialization(e.to_string()))
    }
}
