//! Shopping cart state container for the RocketShoes storefront.
//!
//! Tracks which products a shopper has selected and their quantities,
//! validates quantities against the remote stock endpoint, and persists
//! the cart to the key-value store after every successful mutation.
//!
//! The [`CartStore`] is the single authoritative owner of the cart: every
//! mutation reads the current committed state, writes the recomputed cart
//! to storage, and only then replaces the in-memory state. Failures come
//! back as tagged [`CartError`] variants so the UI can pick its messaging
//! per failure kind.
//!
//! # Example
//!
//! ```rust,ignore
//! use shoes_cart::prelude::*;
//!
//! let api = StorefrontClient::new("http://localhost:3333");
//! let storage = KvCartStorage::open_default()?;
//!
//! let mut store = CartStore::open(api, storage)?;
//!
//! store.add_product(ProductId::new(1))?;
//! store.update_product_amount(ProductId::new(1), 3)?;
//!
//! for item in store.cart().iter() {
//!     println!("{} x{}", item.title, item.amount);
//! }
//! ```

pub mod api;
pub mod cart;
pub mod catalog;
pub mod error;
pub mod ids;
pub mod storage;
pub mod store;

pub use api::{StorefrontApi, StorefrontClient};
pub use cart::{Cart, CartItem};
pub use catalog::{Product, Stock};
pub use error::CartError;
pub use ids::ProductId;
pub use storage::{CartStorage, KvCartStorage, CART_STORAGE_KEY};
pub use store::CartStore;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::api::{StorefrontApi, StorefrontClient};
    pub use crate::cart::{Cart, CartItem};
    pub use crate::catalog::{Product, Stock};
    pub use crate::error::CartError;
    pub use crate::ids::ProductId;
    pub use crate::storage::{CartStorage, KvCartStorage};
    pub use crate::store::CartStore;
}
