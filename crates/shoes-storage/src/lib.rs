//! Type-safe key-value persistence for the RocketShoes storefront.
//!
//! Wraps Spin's Key-Value Store with automatic JSON serialization so any
//! `Serialize`/`DeserializeOwned` type can be stored under a string key.
//! On native targets the store falls back to an in-process map, which keeps
//! development builds and tests running without a Spin host.
//!
//! # Example
//!
//! ```rust,ignore
//! use shoes_storage::KvStore;
//! use serde::{Serialize, Deserialize};
//!
//! #[derive(Serialize, Deserialize)]
//! struct Cart {
//!     items: Vec<CartItem>,
//! }
//!
//! let store = KvStore::open_default()?;
//!
//! store.set("@RocketShoes:cart", &cart)?;
//! let cart: Option<Cart> = store.get("@RocketShoes:cart")?;
//! store.delete("@RocketShoes:cart")?;
//! ```

mod error;
mod kv;

pub use error::StorageError;
pub use kv::KvStore;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{KvStore, StorageError};
}
