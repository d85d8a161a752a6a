//! # astra-core: Pure Cart Logic for Astra Shop
//!
//! This crate is the **heart** of the Astra Shop cart. It contains the cart
//! state-transition rules as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Astra Shop Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Storefront UI                                │   │
//! │  │    Product Grid ──► Cart Panel ──► Checkout                     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    astra-cart (CartStore)                       │   │
//! │  │    add_item, remove_item, set_quantity, persistence sync        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ astra-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐                  │   │
//! │  │   │   types   │  │   money   │  │   cart    │                  │   │
//! │  │   │  Product  │  │   Money   │  │   Cart    │                  │   │
//! │  │   │  Stock    │  │           │  │ LineItem  │                  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘                  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • PURE FUNCTIONS                          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, StockLevel)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`cart`] - Cart and LineItem with the state-transition operations
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every transition is deterministic, guarded against
//!    a caller-supplied stock amount
//! 2. **No I/O**: Network and file system access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in cents (i64)
//! 4. **Explicit Errors**: A failed guard leaves the cart untouched and
//!    returns a typed error, never a panic

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod error;
pub mod money;
pub mod types;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use astra_core::Cart` instead of
// `use astra_core::cart::Cart`

pub use cart::{Cart, CartSummary, LineItem};
pub use error::{CartError, CartResult};
pub use money::Money;
pub use types::{Product, StockLevel};
