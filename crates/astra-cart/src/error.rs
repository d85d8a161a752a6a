//! # Store Error Type
//!
//! The failure taxonomy inside the operation handlers.
//!
//! ## Recovery Policy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the CartStore                          │
//! │                                                                         │
//! │  CartError (astra-core)  ──┐                                           │
//! │                            ├──► StoreError ──► caught inside the       │
//! │  ApiError (api.rs)       ──┘                   handler, converted to a │
//! │                                                notification            │
//! │                                                                         │
//! │  Nothing propagates past a handler; callers always get a normal        │
//! │  return. Malformed stored state never reaches this type at all: it is  │
//! │  recovered silently at load with an empty cart.                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

use astra_core::CartError;

use crate::api::ApiError;

/// Failures an operation handler can hit before its commit.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A cart transition guard rejected the operation.
    #[error(transparent)]
    Cart(#[from] CartError),

    /// A stock or product query failed.
    #[error("inventory service failure: {0}")]
    Service(#[from] ApiError),
}

impl StoreError {
    /// Whether this failure is the stock guard specifically.
    ///
    /// Out-of-stock gets its own user-facing message; every other failure
    /// collapses into the operation's generic one.
    pub fn is_out_of_stock(&self) -> bool {
        matches!(self, StoreError::Cart(CartError::OutOfStock { .. }))
    }
}
