//! # Domain Types
//!
//! Types the remote inventory API hands us.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Inventory API Types                             │
//! │                                                                         │
//! │  ┌─────────────────────┐        ┌─────────────────────┐                │
//! │  │      Product        │        │     StockLevel      │                │
//! │  │  ─────────────────  │        │  ─────────────────  │                │
//! │  │  GET /products/{id} │        │  GET /stock/{id}    │                │
//! │  │  id (u64)           │        │  amount (i64)       │                │
//! │  │  name               │        └─────────────────────┘                │
//! │  │  price_cents        │                                               │
//! │  │  image_url          │        Stock is authoritative only at the     │
//! │  └─────────────────────┘        moment it is queried.                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Product
// =============================================================================

/// A product as described by the catalog service.
///
/// These attributes are copied into a [`crate::cart::LineItem`] on first add,
/// freezing the name, price, and image the customer saw at that moment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Product identity, unique across the catalog.
    pub id: u64,

    /// Display name shown in the cart and on the product page.
    pub name: String,

    /// Price in cents (smallest currency unit).
    pub price_cents: i64,

    /// Product image location for cart rendering.
    pub image_url: String,
}

impl Product {
    /// Returns the price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }
}

// =============================================================================
// Stock Level
// =============================================================================

/// Available quantity for a product id, as reported by the stock service.
///
/// The amount is authoritative at query time only; it is re-queried on every
/// stock-guarded operation rather than cached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct StockLevel {
    /// Units available for sale right now.
    pub amount: i64,
}
