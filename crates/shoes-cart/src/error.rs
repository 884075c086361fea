//! Cart error types.

use crate::ids::ProductId;
use thiserror::Error;

/// Errors surfaced by cart operations.
///
/// Variants stay distinct so the UI layer can pick its messaging per
/// failure kind instead of collapsing everything into one notification.
/// Every variant is terminal for the triggering call: no retries, no
/// partial application.
#[derive(Error, Debug)]
pub enum CartError {
    /// The requested quantity exceeds what the stock endpoint reports.
    #[error("Insufficient stock for product {product_id}: requested {requested}, available {available}")]
    InsufficientStock {
        product_id: ProductId,
        requested: i64,
        available: i64,
    },

    /// The product is not in the cart.
    #[error("Product not in cart: {0}")]
    NotInCart(ProductId),

    /// The storefront API could not be reached or returned bad data.
    #[error("Storefront API error: {0}")]
    Api(String),

    /// The persistent store rejected a read or write.
    #[error("Storage error: {0}")]
    Storage(String),
}

impl From<shoes_data::FetchError> for CartError {
    fn from(e: shoes_data::FetchError) -> Self {
        CartError::Api(e.to_string())
    }
}

impl From<shoes_storage::StorageError> for CartError {
    fn from(e: shoes_storage::StorageError) -> Self {
        CartError::Storage(e.to_string())
    }
}
