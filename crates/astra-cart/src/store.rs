//! # CartStore
//!
//! The public operation surface: stock-aware add, remove, and quantity
//! update over the state container.
//!
//! ## Operation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  UI Action            CartStore Handler          Commit                │
//! │  ─────────            ─────────────────          ──────                │
//! │                                                                         │
//! │  Click product ─────► add_item(id) ──► stock ok? ──► snapshot commit   │
//! │                                                                         │
//! │  Change quantity ───► set_quantity(id, n) ─► n ≤ stock? ──► commit     │
//! │                                                                         │
//! │  Click remove ──────► remove_item(id) ──► in cart? ──► commit          │
//! │                                                                         │
//! │  View cart ─────────► cart() / summary() ──► (read only)               │
//! │                                                                         │
//! │  Every guard failure skips the commit and lands in the notification    │
//! │  sink instead; handlers always return normally.                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Atomicity
//! Handlers work on a cloned snapshot and commit it whole through
//! [`CartHandle::replace`], so a failure at any step leaves the committed
//! cart byte-for-byte as it was. Overlapping operations on the same product
//! id are not serialized (see [`crate::state`]); callers must not race them.

use std::sync::Arc;

use tracing::{debug, error, warn};

use astra_core::{Cart, CartError, CartSummary};

use crate::api::{ProductService, StockService};
use crate::error::StoreError;
use crate::notify::{NotificationSink, Severity};
use crate::state::CartHandle;
use crate::storage::CartStorage;

// =============================================================================
// User-Facing Messages
// =============================================================================

/// Shown when the stock guard rejects an add or a quantity update.
pub const OUT_OF_STOCK_MESSAGE: &str = "Requested quantity is out of stock";

/// Shown for any other add failure.
pub const ADD_FAILED_MESSAGE: &str = "Failed to add product";

/// Shown for any removal failure.
pub const REMOVE_FAILED_MESSAGE: &str = "Failed to remove product";

/// Shown for any other quantity-update failure.
pub const UPDATE_FAILED_MESSAGE: &str = "Failed to update product quantity";

// =============================================================================
// Cart Store
// =============================================================================

/// Client-side cart state, synchronized to local storage, validated against
/// the remote inventory.
///
/// Constructed once by the composition root with injected collaborators and
/// shared by reference; there is no global instance.
pub struct CartStore {
    state: CartHandle,
    stock: Arc<dyn StockService>,
    products: Arc<dyn ProductService>,
    notifications: Arc<dyn NotificationSink>,
}

impl CartStore {
    /// Builds the store, restoring the cart from `storage`.
    ///
    /// Missing or malformed stored state starts an empty cart; construction
    /// itself cannot fail.
    pub fn new(
        stock: Arc<dyn StockService>,
        products: Arc<dyn ProductService>,
        storage: Arc<dyn CartStorage>,
        notifications: Arc<dyn NotificationSink>,
    ) -> Self {
        CartStore {
            state: CartHandle::load(storage),
            stock,
            products,
            notifications,
        }
    }

    /// Returns a snapshot of the current cart.
    pub fn cart(&self) -> Cart {
        self.state.current()
    }

    /// Returns the current cart totals for display.
    pub fn summary(&self) -> CartSummary {
        CartSummary::from(&self.state.current())
    }

    // =========================================================================
    // add_item
    // =========================================================================

    /// Adds one unit of a product to the cart.
    ///
    /// ## Behavior
    /// - Product already in cart: its amount grows by one, guarded by a
    ///   fresh stock query
    /// - Product not in cart: attributes are fetched from the catalog and a
    ///   new line item is appended with amount 1
    /// - Stock guard rejection or service failure: cart unchanged, user
    ///   notified
    pub async fn add_item(&self, product_id: u64) {
        debug!(product_id, "add_item");

        match self.try_add_item(product_id).await {
            Ok(()) => {}
            Err(err) if err.is_out_of_stock() => {
                warn!(product_id, error = %err, "add rejected by stock guard");
                self.notifications.notify(Severity::Error, OUT_OF_STOCK_MESSAGE);
            }
            Err(err) => {
                error!(product_id, error = %err, "add failed");
                self.notifications.notify(Severity::Error, ADD_FAILED_MESSAGE);
            }
        }
    }

    async fn try_add_item(&self, product_id: u64) -> Result<(), StoreError> {
        let mut cart = self.state.current();

        let stock = self.stock.stock_level(product_id).await?;
        if stock.amount < 1 {
            return Err(CartError::OutOfStock {
                product_id,
                available: stock.amount,
                requested: 1,
            }
            .into());
        }

        if cart.contains(product_id) {
            cart.increment_item(product_id, stock.amount)?;
        } else {
            // First add of this product: freeze its attributes into the item.
            let product = self.products.product(product_id).await?;
            cart.insert_item(product)?;
        }

        self.state.replace(cart);
        Ok(())
    }

    // =========================================================================
    // remove_item
    // =========================================================================

    /// Removes a product's line item from the cart.
    ///
    /// An id that is not in the cart leaves it unchanged and notifies the
    /// user. No network round-trip is involved.
    pub fn remove_item(&self, product_id: u64) {
        debug!(product_id, "remove_item");

        match self.try_remove_item(product_id) {
            Ok(()) => {}
            Err(err) => {
                warn!(product_id, error = %err, "remove failed");
                self.notifications.notify(Severity::Error, REMOVE_FAILED_MESSAGE);
            }
        }
    }

    fn try_remove_item(&self, product_id: u64) -> Result<(), StoreError> {
        let mut cart = self.state.current();
        cart.remove_item(product_id)?;
        self.state.replace(cart);
        Ok(())
    }

    // =========================================================================
    // set_quantity
    // =========================================================================

    /// Sets a product's amount to an absolute value.
    ///
    /// ## Behavior
    /// - `amount < 1`: silent no-op; decrement-to-zero is the caller's cue
    ///   to call [`CartStore::remove_item`] instead
    /// - `amount` above the freshly queried stock: cart unchanged, user
    ///   notified out-of-stock
    /// - id not in the cart: cart unchanged, user notified
    pub async fn set_quantity(&self, product_id: u64, amount: i64) {
        if amount < 1 {
            debug!(product_id, amount, "ignoring non-positive quantity");
            return;
        }
        debug!(product_id, amount, "set_quantity");

        match self.try_set_quantity(product_id, amount).await {
            Ok(()) => {}
            Err(err) if err.is_out_of_stock() => {
                warn!(product_id, amount, error = %err, "quantity rejected by stock guard");
                self.notifications.notify(Severity::Error, OUT_OF_STOCK_MESSAGE);
            }
            Err(err) => {
                error!(product_id, amount, error = %err, "quantity update failed");
                self.notifications.notify(Severity::Error, UPDATE_FAILED_MESSAGE);
            }
        }
    }

    async fn try_set_quantity(&self, product_id: u64, amount: i64) -> Result<(), StoreError> {
        let stock = self.stock.stock_level(product_id).await?;
        if amount > stock.amount {
            return Err(CartError::OutOfStock {
                product_id,
                available: stock.amount,
                requested: amount,
            }
            .into());
        }

        let mut cart = self.state.current();
        cart.set_item_amount(product_id, amount, stock.amount)?;
        self.state.replace(cart);
        Ok(())
    }
}
