//! End-to-end tests of the CartStore against in-memory collaborators.
//!
//! The fakes stand in for every external seam: a table-backed inventory for
//! the stock/product services, `MemoryStorage` for the medium, and a
//! recording sink for notifications. No network, no disk.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use astra_cart::store::{
    ADD_FAILED_MESSAGE, OUT_OF_STOCK_MESSAGE, REMOVE_FAILED_MESSAGE, UPDATE_FAILED_MESSAGE,
};
use astra_cart::{
    ApiError, CartStorage, CartStore, MemoryStorage, NotificationSink, ProductService, Severity,
    StockService, CART_STORAGE_KEY,
};
use astra_core::{Product, StockLevel};

// =============================================================================
// Fakes
// =============================================================================

/// Table-backed inventory: fixed stock amounts and catalog entries.
/// Ids absent from a table answer 404 like the real service.
#[derive(Default)]
struct FixedInventory {
    stock: HashMap<u64, i64>,
    products: HashMap<u64, Product>,
}

impl FixedInventory {
    fn new() -> Self {
        FixedInventory::default()
    }

    fn with(mut self, id: u64, name: &str, price_cents: i64, stock: i64) -> Self {
        self.stock.insert(id, stock);
        self.products.insert(
            id,
            Product {
                id,
                name: name.to_string(),
                price_cents,
                image_url: format!("https://cdn.astra.shop/{}.jpg", id),
            },
        );
        self
    }

    /// Stock known, product missing from the catalog table.
    fn with_stock_only(mut self, id: u64, stock: i64) -> Self {
        self.stock.insert(id, stock);
        self
    }

    fn missing(id: u64, kind: &str) -> ApiError {
        ApiError::Status {
            endpoint: format!("{}/{}", kind, id),
            status: 404,
        }
    }
}

#[async_trait]
impl StockService for FixedInventory {
    async fn stock_level(&self, product_id: u64) -> Result<StockLevel, ApiError> {
        self.stock
            .get(&product_id)
            .map(|&amount| StockLevel { amount })
            .ok_or_else(|| FixedInventory::missing(product_id, "stock"))
    }
}

#[async_trait]
impl ProductService for FixedInventory {
    async fn product(&self, product_id: u64) -> Result<Product, ApiError> {
        self.products
            .get(&product_id)
            .cloned()
            .ok_or_else(|| FixedInventory::missing(product_id, "products"))
    }
}

/// Captures every alert the store emits.
#[derive(Default)]
struct RecordingSink {
    alerts: Mutex<Vec<(Severity, String)>>,
}

impl RecordingSink {
    fn new() -> Self {
        RecordingSink::default()
    }

    fn alerts(&self) -> Vec<(Severity, String)> {
        self.alerts.lock().unwrap().clone()
    }

    fn messages(&self) -> Vec<String> {
        self.alerts().into_iter().map(|(_, m)| m).collect()
    }
}

impl NotificationSink for RecordingSink {
    fn notify(&self, severity: Severity, message: &str) {
        self.alerts
            .lock()
            .unwrap()
            .push((severity, message.to_string()));
    }
}

// =============================================================================
// Harness
// =============================================================================

fn store_over(
    inventory: FixedInventory,
    storage: Arc<dyn CartStorage>,
) -> (CartStore, Arc<RecordingSink>) {
    let inventory = Arc::new(inventory);
    let sink = Arc::new(RecordingSink::new());
    let store = CartStore::new(
        inventory.clone(),
        inventory,
        storage,
        sink.clone(),
    );
    (store, sink)
}

fn store_with(inventory: FixedInventory) -> (CartStore, Arc<RecordingSink>) {
    store_over(inventory, Arc::new(MemoryStorage::new()))
}

fn cart_ids(store: &CartStore) -> Vec<u64> {
    store.cart().items().iter().map(|i| i.product_id).collect()
}

// =============================================================================
// add_item
// =============================================================================

#[tokio::test]
async fn adding_new_product_appends_single_item_with_catalog_attributes() {
    let (store, sink) = store_with(FixedInventory::new().with(42, "Shoe", 19999, 5));

    store.add_item(42).await;

    let cart = store.cart();
    assert_eq!(cart.item_count(), 1);
    let item = cart.find(42).unwrap();
    assert_eq!(item.amount, 1);
    assert_eq!(item.name, "Shoe");
    assert_eq!(item.price_cents, 19999);
    assert_eq!(item.image_url, "https://cdn.astra.shop/42.jpg");
    assert!(sink.alerts().is_empty());
}

#[tokio::test]
async fn adding_same_product_again_increments_its_amount() {
    let (store, sink) = store_with(FixedInventory::new().with(42, "Shoe", 19999, 5));

    store.add_item(42).await;
    store.add_item(42).await;

    let cart = store.cart();
    assert_eq!(cart.item_count(), 1);
    assert_eq!(cart.find(42).unwrap().amount, 2);
    assert!(sink.alerts().is_empty());
}

#[tokio::test]
async fn adding_with_zero_stock_leaves_cart_unchanged_and_notifies() {
    let (store, sink) = store_with(FixedInventory::new().with(42, "Shoe", 19999, 0));

    store.add_item(42).await;

    assert!(store.cart().is_empty());
    assert_eq!(
        sink.alerts(),
        vec![(Severity::Error, OUT_OF_STOCK_MESSAGE.to_string())]
    );
}

#[tokio::test]
async fn adding_past_the_stock_limit_is_rejected() {
    let (store, sink) = store_with(FixedInventory::new().with(42, "Shoe", 19999, 1));

    store.add_item(42).await;
    store.add_item(42).await;

    assert_eq!(store.cart().find(42).unwrap().amount, 1);
    assert_eq!(sink.messages(), vec![OUT_OF_STOCK_MESSAGE]);
}

#[tokio::test]
async fn adding_unknown_product_notifies_generic_add_failure() {
    let (store, sink) = store_with(FixedInventory::new());

    store.add_item(99).await;

    assert!(store.cart().is_empty());
    assert_eq!(sink.messages(), vec![ADD_FAILED_MESSAGE]);
}

#[tokio::test]
async fn product_fetch_failure_after_stock_check_commits_nothing() {
    let (store, sink) = store_with(FixedInventory::new().with_stock_only(7, 5));

    store.add_item(7).await;

    assert!(store.cart().is_empty());
    assert_eq!(sink.messages(), vec![ADD_FAILED_MESSAGE]);
}

// =============================================================================
// remove_item
// =============================================================================

#[tokio::test]
async fn removing_an_item_preserves_the_order_of_the_rest() {
    let inventory = FixedInventory::new()
        .with(1, "Sneaker", 10999, 5)
        .with(2, "Boot", 15999, 5)
        .with(3, "Sandal", 5999, 5);
    let (store, sink) = store_with(inventory);

    store.add_item(1).await;
    store.add_item(2).await;
    store.add_item(3).await;

    store.remove_item(2);

    assert_eq!(cart_ids(&store), vec![1, 3]);
    assert!(sink.alerts().is_empty());
}

#[tokio::test]
async fn removing_an_absent_item_leaves_cart_unchanged_and_notifies() {
    let (store, sink) = store_with(FixedInventory::new().with(1, "Sneaker", 10999, 5));
    store.add_item(1).await;
    let before = store.cart();

    store.remove_item(9);

    assert_eq!(store.cart(), before);
    assert_eq!(sink.messages(), vec![REMOVE_FAILED_MESSAGE]);
}

// =============================================================================
// set_quantity
// =============================================================================

#[tokio::test]
async fn setting_quantity_below_one_is_a_silent_noop() {
    let (store, sink) = store_with(FixedInventory::new().with(42, "Shoe", 19999, 5));
    store.add_item(42).await;

    store.set_quantity(42, 0).await;
    store.set_quantity(42, -3).await;

    assert_eq!(store.cart().find(42).unwrap().amount, 1);
    assert!(sink.alerts().is_empty());
}

#[tokio::test]
async fn setting_quantity_above_stock_leaves_cart_unchanged_and_notifies() {
    let (store, sink) = store_with(FixedInventory::new().with(42, "Shoe", 19999, 5));
    store.add_item(42).await;

    store.set_quantity(42, 6).await;

    assert_eq!(store.cart().find(42).unwrap().amount, 1);
    assert_eq!(sink.messages(), vec![OUT_OF_STOCK_MESSAGE]);
}

#[tokio::test]
async fn setting_quantity_within_stock_updates_only_that_item() {
    let inventory = FixedInventory::new()
        .with(1, "Sneaker", 10999, 5)
        .with(2, "Boot", 15999, 5);
    let (store, sink) = store_with(inventory);
    store.add_item(1).await;
    store.add_item(2).await;

    store.set_quantity(2, 4).await;

    let cart = store.cart();
    assert_eq!(cart.find(1).unwrap().amount, 1);
    assert_eq!(cart.find(2).unwrap().amount, 4);
    assert!(sink.alerts().is_empty());
}

#[tokio::test]
async fn setting_quantity_for_an_absent_item_notifies_update_failure() {
    // Stock exists for the id, but nothing in the cart references it.
    let (store, sink) = store_with(FixedInventory::new().with(5, "Loafer", 8999, 10));

    store.set_quantity(5, 3).await;

    assert!(store.cart().is_empty());
    assert_eq!(sink.messages(), vec![UPDATE_FAILED_MESSAGE]);
}

// =============================================================================
// Persistence
// =============================================================================

#[tokio::test]
async fn cart_round_trips_through_storage() {
    let storage: Arc<MemoryStorage> = Arc::new(MemoryStorage::new());
    let inventory = || {
        FixedInventory::new()
            .with(1, "Sneaker", 10999, 5)
            .with(2, "Boot", 15999, 5)
    };

    let (store, _) = store_over(inventory(), storage.clone());
    store.add_item(1).await;
    store.add_item(2).await;
    store.set_quantity(1, 3).await;
    let committed = store.cart();
    drop(store);

    // A brand-new store over the same medium restores the identical cart.
    let (restored, sink) = store_over(inventory(), storage);
    assert_eq!(restored.cart(), committed);
    assert_eq!(cart_ids(&restored), vec![1, 2]);
    assert!(sink.alerts().is_empty());
}

#[tokio::test]
async fn malformed_stored_state_starts_an_empty_working_cart() {
    let storage = Arc::new(MemoryStorage::with_entry(
        CART_STORAGE_KEY,
        "][ definitely not a cart",
    ));
    let (store, sink) = store_over(
        FixedInventory::new().with(42, "Shoe", 19999, 5),
        storage,
    );

    assert!(store.cart().is_empty());

    // The store is fully operational after recovery.
    store.add_item(42).await;
    assert_eq!(store.cart().find(42).unwrap().amount, 1);
    assert!(sink.alerts().is_empty());
}

// =============================================================================
// Properties & worked example
// =============================================================================

#[tokio::test]
async fn amounts_never_exceed_the_stock_observed_for_them() {
    let (store, sink) = store_with(FixedInventory::new().with(1, "Sneaker", 10999, 3));

    for _ in 0..5 {
        store.add_item(1).await;
    }

    let cart = store.cart();
    assert_eq!(cart.item_count(), 1);
    assert_eq!(cart.find(1).unwrap().amount, 3);
    assert_eq!(
        sink.messages(),
        vec![OUT_OF_STOCK_MESSAGE, OUT_OF_STOCK_MESSAGE]
    );
}

#[tokio::test]
async fn shoe_shopping_flow() {
    let (store, sink) = store_with(FixedInventory::new().with(42, "Shoe", 19999, 5));

    store.add_item(42).await;
    assert_eq!(store.cart().find(42).unwrap().amount, 1);
    assert_eq!(store.cart().find(42).unwrap().name, "Shoe");

    store.add_item(42).await;
    assert_eq!(store.cart().find(42).unwrap().amount, 2);

    store.set_quantity(42, 5).await;
    assert_eq!(store.cart().find(42).unwrap().amount, 5);

    store.set_quantity(42, 6).await;
    assert_eq!(store.cart().find(42).unwrap().amount, 5);
    assert_eq!(sink.messages(), vec![OUT_OF_STOCK_MESSAGE]);

    store.remove_item(42);
    assert!(store.cart().is_empty());

    assert_eq!(store.summary().total_quantity, 0);
}
