//! # State Container
//!
//! Exclusively owns the authoritative cart and keeps the storage medium in
//! lockstep with it.
//!
//! ## Commit Protocol
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  handler ── current() ──► cloned snapshot                              │
//! │                               │                                         │
//! │                          (mutate clone, await network freely)          │
//! │                               │                                         │
//! │  handler ── replace(clone) ──► equal to committed value? ── yes ─► skip │
//! │                               │ no                                      │
//! │                               ├──► serialize + write through to the    │
//! │                               │    fixed storage key                    │
//! │                               └──► swap the owned cart                  │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! No validation happens here; the handlers own the rules. The container's
//! only contract is: what `current` returns was committed whole, and every
//! distinct commit reaches storage.
//!
//! ## Thread Safety
//! The cart sits behind a `Mutex`, but the lock is held only for the clone
//! and the swap, never across an await point. Overlapping handlers therefore
//! read independent snapshots and commit independently; the second commit
//! wins. Callers are expected not to issue concurrent operations against the
//! same product id.

use std::sync::{Arc, Mutex};

use tracing::{error, warn};

use astra_core::Cart;

use crate::storage::{CartStorage, CART_STORAGE_KEY};

/// Owns the authoritative cart and the write-through to storage.
#[derive(Clone)]
pub struct CartHandle {
    cart: Arc<Mutex<Cart>>,
    storage: Arc<dyn CartStorage>,
}

impl CartHandle {
    /// Initializes the container from the storage medium.
    ///
    /// ## Recovery
    /// A missing key starts an empty cart. So does malformed stored data or
    /// an unreadable medium, logged at warn level; startup never fails on
    /// bad storage.
    pub fn load(storage: Arc<dyn CartStorage>) -> Self {
        let initial = match storage.get(CART_STORAGE_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<Cart>(&raw) {
                Ok(cart) => cart,
                Err(err) => {
                    warn!(error = %err, "stored cart is malformed, starting empty");
                    Cart::new()
                }
            },
            Ok(None) => Cart::new(),
            Err(err) => {
                warn!(error = %err, "stored cart is unreadable, starting empty");
                Cart::new()
            }
        };

        CartHandle {
            cart: Arc::new(Mutex::new(initial)),
            storage,
        }
    }

    /// Returns a snapshot of the committed cart.
    pub fn current(&self) -> Cart {
        self.cart.lock().expect("cart mutex poisoned").clone()
    }

    /// Commits a new cart snapshot.
    ///
    /// A value equal to the committed one is a no-op, so redundant commits
    /// cause no redundant writes. Otherwise the full snapshot is serialized
    /// and written through to [`CART_STORAGE_KEY`] as one overwrite.
    ///
    /// A failed write is logged and the in-memory commit stands; the next
    /// distinct commit retries the medium with the then-current snapshot.
    pub fn replace(&self, new_cart: Cart) {
        let mut committed = self.cart.lock().expect("cart mutex poisoned");
        if *committed == new_cart {
            return;
        }

        match serde_json::to_string(&new_cart) {
            Ok(raw) => {
                if let Err(err) = self.storage.put(CART_STORAGE_KEY, &raw) {
                    error!(error = %err, "cart write-through failed");
                }
            }
            Err(err) => error!(error = %err, "cart serialization failed"),
        }

        *committed = new_cart;
    }
}
