//! # Cart Store
//!
//! The single stateful component: owns the current cart, validates every
//! mutation against the inventory source, and rewrites the persisted
//! snapshot after each successful mutation.
//!
//! ## Failure policy
//!
//! Operations return `()`. Every failure is caught at the operation
//! boundary, translated into one notifier message, and the cart is left
//! untouched — fail-soft, notify-and-stop. Stock violations get their own
//! message; everything else collapses into the operation's generic message.
//! Internally each operation is a `try_*` returning `CartResult`, so the
//! expected business conditions flow as values rather than unwinding.

use crate::cart::{Cart, LineItem, Snapshot};
use crate::error::{CartError, CartResult};
use crate::inventory::BoxedInventoryLookup;
use crate::notify::BoxedNotifier;
use crate::product::ProductId;
use crate::storage::BoxedSnapshotStorage;
use tracing::{debug, instrument, warn};

/// Storage key used when none is configured
pub const DEFAULT_STORAGE_KEY: &str = "@swift-cart:cart";

/// Message for add/update attempts that exceed available stock
pub const MSG_OUT_OF_STOCK: &str = "Requested quantity is out of stock";
/// Generic message for failed add operations
pub const MSG_ADD_FAILED: &str = "Could not add the product";
/// Generic message for failed remove operations
pub const MSG_REMOVE_FAILED: &str = "Could not remove the product";
/// Generic message for failed amount updates
pub const MSG_UPDATE_FAILED: &str = "Could not update the product amount";

/// Client-side cart state manager.
///
/// Created once per session; operations take `&mut self`, so a caller can
/// only issue them sequentially against one handle. If two handles are
/// opened over the same storage, the later write wins — accepted
/// limitation, not an invariant.
pub struct CartStore {
    inventory: BoxedInventoryLookup,
    notifier: BoxedNotifier,
    storage: BoxedSnapshotStorage,
    storage_key: String,
    cart: Cart,
}

impl CartStore {
    /// Open a store hydrated from storage under the default key.
    pub fn open(
        inventory: BoxedInventoryLookup,
        notifier: BoxedNotifier,
        storage: BoxedSnapshotStorage,
    ) -> Self {
        Self::open_with_key(inventory, notifier, storage, DEFAULT_STORAGE_KEY)
    }

    /// Open a store hydrated from storage under an explicit key.
    ///
    /// An absent snapshot starts an empty cart; an unparsable one is
    /// logged and discarded rather than wedging the session.
    pub fn open_with_key(
        inventory: BoxedInventoryLookup,
        notifier: BoxedNotifier,
        storage: BoxedSnapshotStorage,
        storage_key: impl Into<String>,
    ) -> Self {
        let storage_key = storage_key.into();
        let cart = match storage.load(&storage_key) {
            Some(raw) => match Snapshot::from_json(&raw) {
                Ok(snapshot) => snapshot.into_cart(),
                Err(err) => {
                    warn!(key = %storage_key, %err, "discarding unparsable cart snapshot");
                    Cart::new()
                }
            },
            None => Cart::new(),
        };

        debug!(
            key = %storage_key,
            items = cart.len(),
            source = inventory.source_name(),
            "cart store opened"
        );

        Self {
            inventory,
            notifier,
            storage,
            storage_key,
            cart,
        }
    }

    /// Read the current cart snapshot.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Add one unit of a product to the cart.
    ///
    /// A product already present is incremented by 1; an absent one is
    /// appended with amount 1. The resulting amount must not exceed the
    /// stock fetched during this call.
    #[instrument(skip(self))]
    pub async fn add_product(&mut self, product_id: ProductId) {
        match self.try_add(product_id).await {
            Ok(()) => {}
            Err(err) if err.is_stock_violation() => self.notifier.error(MSG_OUT_OF_STOCK),
            Err(err) => {
                debug!(%err, "add aborted");
                self.notifier.error(MSG_ADD_FAILED);
            }
        }
    }

    /// Remove a product's line item from the cart.
    ///
    /// Removing an identifier that is not in the cart is reported as a
    /// failure and leaves the cart unchanged.
    #[instrument(skip(self))]
    pub fn remove_product(&mut self, product_id: ProductId) {
        match self.try_remove(product_id) {
            Ok(()) => {}
            Err(err) => {
                debug!(%err, "remove aborted");
                self.notifier.error(MSG_REMOVE_FAILED);
            }
        }
    }

    /// Set a product's amount to an exact value.
    ///
    /// Amounts `<= 0` are a deliberate silent no-op: no fetch, no
    /// notification, no mutation. An identifier absent from the cart is
    /// silently skipped while the collection is rewritten (asymmetric with
    /// remove, intentionally).
    #[instrument(skip(self))]
    pub async fn update_product_amount(&mut self, product_id: ProductId, amount: i64) {
        if amount <= 0 {
            return;
        }
        let amount = u32::try_from(amount).unwrap_or(u32::MAX);

        match self.try_update(product_id, amount).await {
            Ok(()) => {}
            Err(err) if err.is_stock_violation() => self.notifier.error(MSG_OUT_OF_STOCK),
            Err(err) => {
                debug!(%err, "update aborted");
                self.notifier.error(MSG_UPDATE_FAILED);
            }
        }
    }

    /// Drop the cart and its persisted snapshot (session teardown).
    pub fn clear(&mut self) {
        self.storage.remove(&self.storage_key);
        self.cart = Cart::new();
    }

    async fn try_add(&mut self, product_id: ProductId) -> CartResult<()> {
        let stock = self.inventory.stock(product_id).await?;
        let product = self.inventory.product(product_id).await?;

        // An absent item is an increment of an implicit zero.
        let current = self.cart.get(product_id).map(|i| i.amount).unwrap_or(0);
        let requested = current + 1;
        if requested > stock.amount {
            return Err(CartError::OutOfStock {
                product_id,
                requested,
                available: stock.amount,
            });
        }

        let next = if current == 0 {
            self.cart.with_item(LineItem::from_product(&product, 1))
        } else {
            self.cart.with_amount(product_id, requested)
        };
        self.commit(next)
    }

    fn try_remove(&mut self, product_id: ProductId) -> CartResult<()> {
        if !self.cart.contains(product_id) {
            return Err(CartError::NotInCart { product_id });
        }
        let next = self.cart.without(product_id);
        self.commit(next)
    }

    async fn try_update(&mut self, product_id: ProductId, amount: u32) -> CartResult<()> {
        let stock = self.inventory.stock(product_id).await?;

        match self.cart.get(product_id) {
            Some(_) if amount > stock.amount => Err(CartError::OutOfStock {
                product_id,
                requested: amount,
                available: stock.amount,
            }),
            Some(_) => self.commit(self.cart.with_amount(product_id, amount)),
            // Absent ids are skipped; the unchanged collection is still
            // rewritten and re-persisted.
            None => self.commit(self.cart.clone()),
        }
    }

    /// Persist the computed next cart, then swap it in. Storage is written
    /// first so a successful mutation is never observable in memory without
    /// its snapshot on disk.
    fn commit(&mut self, next: Cart) -> CartResult<()> {
        let raw = Snapshot::of(&next).to_json()?;
        self.storage.save(&self.storage_key, &raw);
        self.cart = next;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::StaticInventory;
    use crate::notify::RecordingNotifier;
    use crate::product::{Price, Product};
    use crate::storage::{MemoryStorage, SnapshotStorage};
    use std::sync::Arc;

    fn sneaker() -> Product {
        Product::new(1, "Trail Sneaker", Price::new(179.9))
    }

    fn sandal() -> Product {
        Product::new(2, "Beach Sandal", Price::new(59.9))
    }

    struct Harness {
        store: CartStore,
        notifier: Arc<RecordingNotifier>,
        storage: Arc<MemoryStorage>,
    }

    fn harness(inventory: StaticInventory) -> Harness {
        let notifier = Arc::new(RecordingNotifier::new());
        let storage = Arc::new(MemoryStorage::new());
        let store = CartStore::open(
            Arc::new(inventory),
            notifier.clone(),
            storage.clone(),
        );
        Harness {
            store,
            notifier,
            storage,
        }
    }

    fn persisted_cart(storage: &MemoryStorage) -> Cart {
        let raw = storage.load(DEFAULT_STORAGE_KEY).expect("snapshot written");
        Snapshot::from_json(&raw).unwrap().into_cart()
    }

    #[tokio::test]
    async fn test_add_to_empty_cart() {
        let mut h = harness(StaticInventory::new().with_product(sneaker(), 5));

        h.store.add_product(1).await;

        let item = h.store.cart().get(1).expect("item added");
        assert_eq!(item.amount, 1);
        assert_eq!(item.title, "Trail Sneaker");
        assert!(h.notifier.messages().is_empty());
    }

    #[tokio::test]
    async fn test_add_merges_duplicate_identifier() {
        let mut h = harness(StaticInventory::new().with_product(sneaker(), 5));

        h.store.add_product(1).await;
        h.store.add_product(1).await;

        assert_eq!(h.store.cart().len(), 1);
        assert_eq!(h.store.cart().get(1).map(|i| i.amount), Some(2));
    }

    #[tokio::test]
    async fn test_add_beyond_stock_notifies_once() {
        let mut h = harness(StaticInventory::new().with_product(sneaker(), 1));

        h.store.add_product(1).await;
        let before = h.store.cart().clone();

        h.store.add_product(1).await;

        assert_eq!(h.store.cart(), &before);
        assert_eq!(h.notifier.take(), vec![MSG_OUT_OF_STOCK]);
    }

    #[tokio::test]
    async fn test_add_zero_stock_product() {
        let mut h = harness(StaticInventory::new().with_product(sneaker(), 0));

        h.store.add_product(1).await;

        assert!(h.store.cart().is_empty());
        assert_eq!(h.notifier.take(), vec![MSG_OUT_OF_STOCK]);
    }

    #[tokio::test]
    async fn test_add_unresolvable_product_fails_generic() {
        let mut h = harness(StaticInventory::new());

        h.store.add_product(42).await;

        assert!(h.store.cart().is_empty());
        assert_eq!(h.notifier.take(), vec![MSG_ADD_FAILED]);
        // nothing persisted either
        assert!(h.storage.load(DEFAULT_STORAGE_KEY).is_none());
    }

    #[tokio::test]
    async fn test_remove_existing_item() {
        let mut h = harness(
            StaticInventory::new()
                .with_product(sneaker(), 5)
                .with_product(sandal(), 5),
        );
        h.store.add_product(1).await;
        h.store.add_product(1).await;
        h.store.add_product(2).await;

        h.store.remove_product(1);

        let ids: Vec<_> = h.store.cart().items().map(|i| i.product_id).collect();
        assert_eq!(ids, vec![2]);
        assert!(h.notifier.messages().is_empty());
    }

    #[tokio::test]
    async fn test_remove_absent_item_notifies_once() {
        let mut h = harness(StaticInventory::new().with_product(sneaker(), 5));
        h.store.add_product(1).await;
        let before = h.store.cart().clone();
        let persisted_before = h.storage.load(DEFAULT_STORAGE_KEY);

        h.store.remove_product(99);

        assert_eq!(h.store.cart(), &before);
        // byte-for-byte unchanged in storage too
        assert_eq!(h.storage.load(DEFAULT_STORAGE_KEY), persisted_before);
        assert_eq!(h.notifier.take(), vec![MSG_REMOVE_FAILED]);
    }

    #[tokio::test]
    async fn test_update_within_stock() {
        let mut h = harness(StaticInventory::new().with_product(sneaker(), 10));
        h.store.add_product(1).await;

        h.store.update_product_amount(1, 5).await;

        assert_eq!(h.store.cart().get(1).map(|i| i.amount), Some(5));
        assert!(h.notifier.messages().is_empty());
    }

    #[tokio::test]
    async fn test_update_beyond_stock_aborts() {
        let mut h = harness(StaticInventory::new().with_product(sneaker(), 3));
        h.store.add_product(1).await;

        h.store.update_product_amount(1, 7).await;

        assert_eq!(h.store.cart().get(1).map(|i| i.amount), Some(1));
        assert_eq!(h.notifier.take(), vec![MSG_OUT_OF_STOCK]);
    }

    #[tokio::test]
    async fn test_update_to_zero_is_silent_noop() {
        let mut h = harness(StaticInventory::new().with_product(sneaker(), 10));
        h.store.add_product(1).await;
        let before = h.store.cart().clone();

        h.store.update_product_amount(1, 0).await;
        h.store.update_product_amount(1, -3).await;

        assert_eq!(h.store.cart(), &before);
        assert!(h.notifier.messages().is_empty());
    }

    #[tokio::test]
    async fn test_update_absent_id_is_silent() {
        let mut h = harness(
            StaticInventory::new()
                .with_product(sneaker(), 10)
                .with_product(sandal(), 10),
        );
        h.store.add_product(1).await;
        let before = h.store.cart().clone();

        // id 2 resolves in inventory but is not in the cart
        h.store.update_product_amount(2, 4).await;

        assert_eq!(h.store.cart(), &before);
        assert!(h.notifier.messages().is_empty());
    }

    #[tokio::test]
    async fn test_update_lookup_failure_notifies_generic() {
        let mut h = harness(StaticInventory::new().with_product(sneaker(), 10));
        h.store.add_product(1).await;

        h.store.update_product_amount(42, 2).await;

        assert_eq!(h.notifier.take(), vec![MSG_UPDATE_FAILED]);
    }

    #[tokio::test]
    async fn test_stock_bound_after_successful_mutations() {
        let mut h = harness(StaticInventory::new().with_product(sneaker(), 3));

        for _ in 0..5 {
            h.store.add_product(1).await;
        }

        // capped at the stock fetched during the operations
        assert_eq!(h.store.cart().get(1).map(|i| i.amount), Some(3));
    }

    #[tokio::test]
    async fn test_persistence_matches_memory_after_each_mutation() {
        let mut h = harness(
            StaticInventory::new()
                .with_product(sneaker(), 10)
                .with_product(sandal(), 10),
        );

        h.store.add_product(1).await;
        assert_eq!(&persisted_cart(&h.storage), h.store.cart());

        h.store.add_product(2).await;
        h.store.update_product_amount(1, 4).await;
        assert_eq!(&persisted_cart(&h.storage), h.store.cart());

        h.store.remove_product(2);
        assert_eq!(&persisted_cart(&h.storage), h.store.cart());
    }

    #[tokio::test]
    async fn test_reopen_hydrates_persisted_cart() {
        let inventory = StaticInventory::new().with_product(sneaker(), 10);
        let mut h = harness(inventory.clone());

        h.store.add_product(1).await;
        h.store.update_product_amount(1, 4).await;
        let expected = h.store.cart().clone();
        drop(h.store);

        let reopened = CartStore::open(
            Arc::new(inventory),
            Arc::new(RecordingNotifier::new()),
            h.storage.clone(),
        );
        assert_eq!(reopened.cart(), &expected);
    }

    #[tokio::test]
    async fn test_corrupt_snapshot_starts_empty() {
        let storage = Arc::new(MemoryStorage::seeded(DEFAULT_STORAGE_KEY, "{broken"));
        let store = CartStore::open(
            Arc::new(StaticInventory::new()),
            Arc::new(RecordingNotifier::new()),
            storage,
        );
        assert!(store.cart().is_empty());
    }

    #[tokio::test]
    async fn test_identifiers_stay_unique() {
        let mut h = harness(
            StaticInventory::new()
                .with_product(sneaker(), 10)
                .with_product(sandal(), 10),
        );

        for _ in 0..4 {
            h.store.add_product(1).await;
            h.store.add_product(2).await;
        }
        h.store.update_product_amount(1, 2).await;

        let mut ids: Vec<_> = h.store.cart().items().map(|i| i.product_id).collect();
        let total = ids.len();
        ids.dedup();
        assert_eq!(ids.len(), total);
        assert!(h.store.cart().items().all(|i| i.amount >= 1));
    }

    #[tokio::test]
    async fn test_clear_drops_cart_and_snapshot() {
        let mut h = harness(StaticInventory::new().with_product(sneaker(), 5));
        h.store.add_product(1).await;
        assert!(h.storage.load(DEFAULT_STORAGE_KEY).is_some());

        h.store.clear();

        assert!(h.store.cart().is_empty());
        assert!(h.storage.load(DEFAULT_STORAGE_KEY).is_none());
    }
}
