//! Cart persistence port and its key-value adapter.

use crate::cart::Cart;
use shoes_storage::{KvStore, StorageError};

/// Key under which the serialized cart lives in the store.
///
/// Carried over from the storefront's historical persistence format so
/// existing carts keep loading.
pub const CART_STORAGE_KEY: &str = "@RocketShoes:cart";

/// Durable storage for the cart.
///
/// `load` returns `None` when no cart has ever been saved; a present but
/// undecodable value is an error. `save` overwrites the whole cart.
pub trait CartStorage {
    /// Read the last saved cart.
    fn load(&self) -> Result<Option<Cart>, StorageError>;

    /// Overwrite the saved cart.
    fn save(&self, cart: &Cart) -> Result<(), StorageError>;
}

/// Cart storage over the key-value store.
pub struct KvCartStorage {
    store: KvStore,
    key: String,
}

impl KvCartStorage {
    /// Storage bound to the default store under [`CART_STORAGE_KEY`].
    pub fn open_default() -> Result<Self, StorageError> {
        Ok(Self::new(KvStore::open_default()?))
    }

    /// Storage over an explicit store under [`CART_STORAGE_KEY`].
    pub fn new(store: KvStore) -> Self {
        Self {
            store,
            key: CART_STORAGE_KEY.to_string(),
        }
    }

    /// Override the storage key.
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }
}

impl CartStorage for KvCartStorage {
    fn load(&self) -> Result<Option<Cart>, StorageError> {
        self.store.get(&self.key)
    }

    fn save(&self, cart: &Cart) -> Result<(), StorageError> {
        self.store.set(&self.key, cart)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_before_any_save() {
        let storage = KvCartStorage::open_default().unwrap();
        assert!(storage.load().unwrap().is_none());
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let storage = KvCartStorage::open_default().unwrap();

        let cart: Cart = serde_json::from_str(
            r#"[{"id": 1, "title": "Tenis", "price": 139.9, "image": "x.jpg", "amount": 2}]"#,
        )
        .unwrap();

        storage.save(&cart).unwrap();
        let loaded = storage.load().unwrap();
        assert_eq!(loaded, Some(cart));
    }

    #[test]
    fn test_with_key_overrides_default() {
        let store = KvStore::open_default().unwrap();
        let cart: Cart =
            serde_json::from_str(r#"[{"id": 1, "title": "t", "price": 1.0, "image": "i"}]"#)
                .unwrap();
        store.set("cart:guest", &cart).unwrap();

        let storage = KvCartStorage::new(store).with_key("cart:guest");
        assert_eq!(storage.load().unwrap(), Some(cart));
    }
}
