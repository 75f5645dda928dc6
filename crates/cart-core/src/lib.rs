//! # cart-core
//!
//! Core types, traits, and the cart store for the swift-cart engine.
//!
//! This crate provides:
//! - `CartStore` — the client-side cart state manager
//! - `Cart`, `LineItem`, and `Snapshot` for cart state and persistence
//! - `InventoryLookup` trait for stock/product resolution
//! - `Notifier` trait for the fire-and-forget error channel
//! - `SnapshotStorage` trait for durable string-keyed persistence
//! - `CartError` for typed error handling
//!
//! ## Example
//!
//! ```rust,ignore
//! use cart_core::{CartStore, StaticInventory, TracingNotifier, MemoryStorage};
//! use std::sync::Arc;
//!
//! let mut store = CartStore::open(
//!     Arc::new(inventory),
//!     Arc::new(TracingNotifier),
//!     Arc::new(MemoryStorage::new()),
//! );
//!
//! store.add_product(1).await;
//! store.update_product_amount(1, 3).await;
//!
//! for item in store.cart().items() {
//!     println!("{} x{} = {}", item.title, item.amount, item.subtotal().display());
//! }
//! ```

pub mod cart;
pub mod error;
pub mod inventory;
pub mod notify;
pub mod product;
pub mod storage;
pub mod store;

// Re-exports for convenience
pub use cart::{Cart, LineItem, Snapshot};
pub use error::{CartError, CartResult};
pub use inventory::{BoxedInventoryLookup, InventoryLookup, StaticInventory};
pub use notify::{BoxedNotifier, Notifier, RecordingNotifier, TracingNotifier};
pub use product::{Price, Product, ProductId, Stock};
pub use storage::{BoxedSnapshotStorage, JsonFileStorage, MemoryStorage, SnapshotStorage};
pub use store::{
    CartStore, DEFAULT_STORAGE_KEY, MSG_ADD_FAILED, MSG_OUT_OF_STOCK, MSG_REMOVE_FAILED,
    MSG_UPDATE_FAILED,
};
