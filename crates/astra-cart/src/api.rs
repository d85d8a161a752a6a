//! # Inventory API Clients
//!
//! The remote side of the cart: stock and product lookups over HTTP.
//!
//! Both lookups are behind traits so the store sees only the seam, not the
//! transport. The production implementation is [`HttpInventoryClient`]; tests
//! inject table-backed fakes.
//!
//! ## Endpoints
//! - `GET {base}/stock/{id}`    → `{ "amount": 5 }`
//! - `GET {base}/products/{id}` → `{ "id": 42, "name": "...", "priceCents": 19999, "imageUrl": "..." }`

use async_trait::async_trait;
use thiserror::Error;
use tracing::debug;

use astra_core::{Product, StockLevel};

/// Inventory API request errors.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport-level failure: connect, timeout, or body decode.
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered with a non-success status.
    ///
    /// A 404 here covers the missing-product case; the store folds it into
    /// the same recovery path as any other service failure.
    #[error("unexpected status {status} from {endpoint}")]
    Status { endpoint: String, status: u16 },
}

/// Authoritative stock lookups.
#[async_trait]
pub trait StockService: Send + Sync {
    /// Queries the available quantity for a product id.
    async fn stock_level(&self, product_id: u64) -> Result<StockLevel, ApiError>;
}

/// Catalog lookups, used only on first add of a given product.
#[async_trait]
pub trait ProductService: Send + Sync {
    /// Fetches the product attributes for a product id.
    async fn product(&self, product_id: u64) -> Result<Product, ApiError>;
}

// =============================================================================
// HTTP Client
// =============================================================================

/// Inventory API client over HTTP.
///
/// One reqwest client serves both lookups; reqwest pools connections
/// internally, so the client is cheap to clone and share.
#[derive(Debug, Clone)]
pub struct HttpInventoryClient {
    client: reqwest::Client,
    base_url: String,
}

impl HttpInventoryClient {
    /// Creates a client against the given API base URL.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder().build()?;
        Ok(HttpInventoryClient {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let endpoint = self.endpoint(path);
        debug!(%endpoint, "inventory request");

        let response = self.client.get(&endpoint).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                endpoint,
                status: status.as_u16(),
            });
        }

        Ok(response.json::<T>().await?)
    }
}

#[async_trait]
impl StockService for HttpInventoryClient {
    async fn stock_level(&self, product_id: u64) -> Result<StockLevel, ApiError> {
        self.get_json(&format!("stock/{}", product_id)).await
    }
}

#[async_trait]
impl ProductService for HttpInventoryClient {
    async fn product(&self, product_id: u64) -> Result<Product, ApiError> {
        self.get_json(&format!("products/{}", product_id)).await
    }
}
