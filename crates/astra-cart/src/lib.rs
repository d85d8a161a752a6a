//! # astra-cart: The CartStore
//!
//! Client-side cart state management for the Astra Shop storefront: an
//! in-memory cart synchronized to durable local storage, with stock-aware
//! operations backed by the remote inventory API.
//!
//! ## Component Layout
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                           CartStore                                     │
//! │                                                                         │
//! │  caller ──► operation handlers (store.rs)                              │
//! │                │                                                        │
//! │                │ query                ┌──────────────────────────────┐  │
//! │                ├─────────────────────►│ StockService / ProductService│  │
//! │                │                      │ (api.rs, HTTP via reqwest)   │  │
//! │                │                      └──────────────────────────────┘  │
//! │                ▼ commit                                                 │
//! │        state container (state.rs)                                      │
//! │                │ write-through on change                               │
//! │                ▼                                                        │
//! │        CartStorage (storage.rs)  ── "@astra-shop:cart" ──► disk        │
//! │                                                                         │
//! │  failures ──► NotificationSink (notify.rs), fire-and-forget            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`store`] - CartStore, the public operation surface
//! - [`state`] - state container owning the authoritative cart
//! - [`storage`] - opaque key-value string store behind the write-through
//! - [`api`] - inventory API traits and the reqwest client
//! - [`notify`] - user-alert sink
//! - [`error`] - failure taxonomy surfaced by the handlers
//!
//! ## Dependency Injection
//!
//! Nothing in this crate is a global. The composition root constructs a
//! [`CartStore`] with its four collaborators and hands it to consumers:
//!
//! ```rust
//! use std::sync::Arc;
//! use astra_cart::{CartStore, MemoryStorage, TracingSink};
//! # use astra_cart::{ApiError, StockService, ProductService};
//! # use astra_core::{Product, StockLevel};
//! # struct Fixed;
//! # #[async_trait::async_trait]
//! # impl StockService for Fixed {
//! #     async fn stock_level(&self, _: u64) -> Result<StockLevel, ApiError> {
//! #         Ok(StockLevel { amount: 1 })
//! #     }
//! # }
//! # #[async_trait::async_trait]
//! # impl ProductService for Fixed {
//! #     async fn product(&self, id: u64) -> Result<Product, ApiError> {
//! #         Ok(Product { id, name: "x".into(), price_cents: 1, image_url: "x".into() })
//! #     }
//! # }
//!
//! let inventory = Arc::new(Fixed);
//! let store = CartStore::new(
//!     inventory.clone(),
//!     inventory,
//!     Arc::new(MemoryStorage::new()),
//!     Arc::new(TracingSink),
//! );
//! assert!(store.cart().is_empty());
//! ```

pub mod api;
pub mod error;
pub mod notify;
pub mod state;
pub mod storage;
pub mod store;

pub use api::{ApiError, HttpInventoryClient, ProductService, StockService};
pub use error::StoreError;
pub use notify::{NotificationSink, Severity, TracingSink};
pub use state::CartHandle;
pub use storage::{CartStorage, FileStorage, MemoryStorage, StorageError, CART_STORAGE_KEY};
pub use store::CartStore;
