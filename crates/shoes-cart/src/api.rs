//! Storefront API port and its HTTP-backed client.

use crate::catalog::{Product, Stock};
use crate::ids::ProductId;
use shoes_data::{FetchClient, FetchError};

/// Read access to the remote storefront API.
///
/// The cart needs two lookups: available stock and the full catalog
/// record. Implementations suspend the caller until the response
/// arrives; no timeout or retry is applied at this layer.
pub trait StorefrontApi {
    /// Fetch the available stock for a product.
    fn stock(&self, id: ProductId) -> Result<Stock, FetchError>;

    /// Fetch the full catalog record for a product.
    fn product(&self, id: ProductId) -> Result<Product, FetchError>;
}

/// HTTP-backed storefront client.
///
/// Issues `GET stock/{id}` and `GET products/{id}` against the
/// configured base URL.
pub struct StorefrontClient {
    client: FetchClient,
}

impl StorefrontClient {
    /// Create a client for the given API base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: FetchClient::new()
                .with_base_url(base_url)
                .with_default_header("Accept", "application/json"),
        }
    }
}

impl StorefrontApi for StorefrontClient {
    fn stock(&self, id: ProductId) -> Result<Stock, FetchError> {
        self.client
            .get(format!("/stock/{}", id))
            .send()?
            .error_for_status()?
            .json()
    }

    fn product(&self, id: ProductId) -> Result<Product, FetchError> {
        self.client
            .get(format!("/products/{}", id))
            .send()?
            .error_for_status()?
            .json()
    }
}
