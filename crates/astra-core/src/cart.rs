//! # Cart
//!
//! The cart itself: an ordered list of line items, unique by product id,
//! mutated only through stock-guarded transitions.
//!
//! ## Per-Product State Machine
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │             insert_item (stock ≥ 1)                                     │
//! │   Absent ─────────────────────────────► Present(amount = 1)            │
//! │     ▲                                        │        ▲                 │
//! │     │                                        │        │                 │
//! │     │ remove_item          increment_item    │        │ set_item_amount │
//! │     │                      (n+1 ≤ stock)     ▼        │ (1 ≤ m ≤ stock) │
//! │     └─────────────────────────────── Present(n) ──────┘                │
//! │                                                                         │
//! │   Any transition whose guard fails leaves the item exactly where it    │
//! │   was and returns the rejecting CartError instead.                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - No two line items share a product id
//! - Every amount is at least 1 and never exceeds the stock amount supplied
//!   to the transition that last touched the item
//! - Insertion order reflects add order and survives serialization

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CartError, CartResult};
use crate::money::Money;
use crate::types::Product;

// =============================================================================
// Line Item
// =============================================================================

/// One product entry in the cart.
///
/// ## Design Notes
/// - `product_id`: reference into the catalog
/// - name/price/image: frozen copy of the catalog data at time of adding.
///   The cart keeps displaying what the customer saw even if the catalog
///   changes afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    /// Product identity, unique within the cart.
    pub product_id: u64,

    /// Product name at time of adding (frozen).
    pub name: String,

    /// Price in cents at time of adding (frozen).
    pub price_cents: i64,

    /// Product image location at time of adding (frozen).
    pub image_url: String,

    /// Quantity in cart, at least 1.
    pub amount: i64,

    /// When this item was first added to the cart.
    #[ts(as = "String")]
    pub added_at: DateTime<Utc>,
}

impl LineItem {
    /// Creates a line item from a catalog product with an amount of 1.
    ///
    /// The product attributes are captured at this moment; later catalog
    /// updates do not reach items already in the cart.
    pub fn from_product(product: Product) -> Self {
        LineItem {
            product_id: product.id,
            name: product.name,
            price_cents: product.price_cents,
            image_url: product.image_url,
            amount: 1,
            added_at: Utc::now(),
        }
    }

    /// Calculates the line total (unit price × amount).
    pub fn line_total_cents(&self) -> i64 {
        self.price_cents * self.amount
    }

    /// Returns the line total as Money.
    #[inline]
    pub fn line_total(&self) -> Money {
        Money::from_cents(self.line_total_cents())
    }

    /// Returns the unit price as Money.
    #[inline]
    pub fn unit_price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }
}

// =============================================================================
// Cart
// =============================================================================

/// The shopping cart.
///
/// Mutation happens exclusively through the transition methods below; each
/// one validates its guard first and leaves the cart untouched on rejection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    /// Items in add order.
    pub items: Vec<LineItem>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart { items: Vec::new() }
    }

    /// Returns the items in add order.
    #[inline]
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Looks up a line item by product id.
    pub fn find(&self, product_id: u64) -> Option<&LineItem> {
        self.items.iter().find(|i| i.product_id == product_id)
    }

    /// Checks whether a product id is already in the cart.
    #[inline]
    pub fn contains(&self, product_id: u64) -> bool {
        self.find(product_id).is_some()
    }

    /// Appends a new line item for a product with an amount of 1.
    ///
    /// ## Guard
    /// The product id must not already be in the cart; additions to an
    /// existing item go through [`Cart::increment_item`]. This keeps the
    /// one-item-per-product invariant in the transition itself rather than
    /// trusting the caller.
    pub fn insert_item(&mut self, product: Product) -> CartResult<()> {
        if self.contains(product.id) {
            return Err(CartError::AlreadyInCart(product.id));
        }

        self.items.push(LineItem::from_product(product));
        Ok(())
    }

    /// Raises an existing item's amount by one, guarded by the given stock.
    ///
    /// ## Guard
    /// The candidate amount (current + 1) must not exceed `stock_amount`.
    pub fn increment_item(&mut self, product_id: u64, stock_amount: i64) -> CartResult<()> {
        let item = self
            .items
            .iter_mut()
            .find(|i| i.product_id == product_id)
            .ok_or(CartError::ItemNotFound(product_id))?;

        let candidate = item.amount + 1;
        if candidate > stock_amount {
            return Err(CartError::OutOfStock {
                product_id,
                available: stock_amount,
                requested: candidate,
            });
        }

        item.amount = candidate;
        Ok(())
    }

    /// Sets an existing item's amount, guarded by the given stock.
    ///
    /// `amount` must be at least 1; the store treats smaller requests as a
    /// no-op before they reach the cart. The stock guard is checked before
    /// the item lookup, so an over-stock request on an absent id reports
    /// `OutOfStock`, not `ItemNotFound`.
    pub fn set_item_amount(
        &mut self,
        product_id: u64,
        amount: i64,
        stock_amount: i64,
    ) -> CartResult<()> {
        if amount > stock_amount {
            return Err(CartError::OutOfStock {
                product_id,
                available: stock_amount,
                requested: amount,
            });
        }

        let item = self
            .items
            .iter_mut()
            .find(|i| i.product_id == product_id)
            .ok_or(CartError::ItemNotFound(product_id))?;

        item.amount = amount;
        Ok(())
    }

    /// Removes an item from the cart by product id.
    ///
    /// The relative order of the remaining items is preserved.
    pub fn remove_item(&mut self, product_id: u64) -> CartResult<()> {
        let initial_len = self.items.len();
        self.items.retain(|i| i.product_id != product_id);

        if self.items.len() == initial_len {
            Err(CartError::ItemNotFound(product_id))
        } else {
            Ok(())
        }
    }

    /// Returns the number of unique items in the cart.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Returns the total quantity of all items.
    pub fn total_quantity(&self) -> i64 {
        self.items.iter().map(|i| i.amount).sum()
    }

    /// Calculates the cart subtotal in cents.
    pub fn subtotal_cents(&self) -> i64 {
        self.items.iter().map(|i| i.line_total_cents()).sum()
    }

    /// Returns the subtotal as Money.
    #[inline]
    pub fn subtotal(&self) -> Money {
        Money::from_cents(self.subtotal_cents())
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

// =============================================================================
// Cart Summary
// =============================================================================

/// Cart totals snapshot for UI display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartSummary {
    pub item_count: usize,
    pub total_quantity: i64,
    pub subtotal_cents: i64,
}

impl From<&Cart> for CartSummary {
    fn from(cart: &Cart) -> Self {
        CartSummary {
            item_count: cart.item_count(),
            total_quantity: cart.total_quantity(),
            subtotal_cents: cart.subtotal_cents(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
