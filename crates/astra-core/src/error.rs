//! # Error Types
//!
//! Domain-specific error types for astra-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  astra-core errors (this file)                                         │
//! │  └── CartError        - Cart transition guard failures                 │
//! │                                                                         │
//! │  astra-cart errors (separate crate)                                    │
//! │  ├── ApiError         - Inventory API request failures                 │
//! │  ├── StorageError     - Key-value storage failures                     │
//! │  └── StoreError       - Union surfaced by the operation handlers       │
//! │                                                                         │
//! │  Flow: CartError → StoreError → notification sink → user              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Cart transition errors.
///
/// Every failed guard leaves the cart exactly as it was; the error tells the
/// caller which rule rejected the transition.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CartError {
    /// Requested quantity exceeds the available stock.
    ///
    /// ## When This Occurs
    /// - Adding a product whose stock is zero
    /// - Incrementing an item past the available stock
    /// - Setting a quantity above the available stock
    #[error("insufficient stock for product {product_id}: available {available}, requested {requested}")]
    OutOfStock {
        product_id: u64,
        available: i64,
        requested: i64,
    },

    /// Operation targets a product id that is not in the cart.
    #[error("product {0} is not in the cart")]
    ItemNotFound(u64),

    /// Insert targets a product id that is already in the cart.
    ///
    /// The cart holds at most one line item per product id; additions to an
    /// existing item go through `increment_item` instead.
    #[error("product {0} is already in the cart")]
    AlreadyInCart(u64),
}

/// Convenience type alias for Results with CartError.
pub type CartResult<T> = Result<T, CartError>;
