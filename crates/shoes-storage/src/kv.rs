//! Key-value store wrapper with automatic serialization.

use crate::StorageError;
use serde::{de::DeserializeOwned, Serialize};

#[cfg(not(target_arch = "wasm32"))]
use std::collections::HashMap;
#[cfg(not(target_arch = "wasm32"))]
use std::sync::Mutex;

/// Typed persistent store backed by Spin's Key-Value Store.
///
/// Values are stored as JSON, so anything implementing `Serialize` and
/// `DeserializeOwned` round-trips through a plain string key. The native
/// (non-wasm) build keeps entries in an in-process map instead.
pub struct KvStore {
    #[cfg(target_arch = "wasm32")]
    store: spin_sdk::key_value::Store,
    #[cfg(not(target_arch = "wasm32"))]
    entries: Mutex<HashMap<String, Vec<u8>>>,
}

#[cfg(target_arch = "wasm32")]
impl KvStore {
    /// Open the default Key-Value store.
    pub fn open_default() -> Result<Self, StorageError> {
        let store = spin_sdk::key_value::Store::open_default()
            .map_err(|e| StorageError::OpenError(e.to_string()))?;
        Ok(Self { store })
    }

    /// Open a named Key-Value store.
    pub fn open(name: &str) -> Result<Self, StorageError> {
        let store = spin_sdk::key_value::Store::open(name)
            .map_err(|e| StorageError::OpenError(e.to_string()))?;
        Ok(Self { store })
    }

    /// Get a value by key.
    ///
    /// Returns `None` if the key doesn't exist. A present value that does
    /// not decode as `T` is an error, not `None`.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StorageError> {
        match self.store.get(key) {
            Ok(Some(bytes)) => {
                let value: T = serde_json::from_slice(&bytes)?;
                Ok(Some(value))
            }
            Ok(None) => Ok(None),
            Err(e) => Err(StorageError::StoreError(e.to_string())),
        }
    }

    /// Set a value, overwriting any previous value under the key.
    pub fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StorageError> {
        let bytes = serde_json::to_vec(value)?;
        self.store
            .set(key, &bytes)
            .map_err(|e| StorageError::StoreError(e.to_string()))
    }

    /// Delete a value by key.
    pub fn delete(&self, key: &str) -> Result<(), StorageError> {
        self.store
            .delete(key)
            .map_err(|e| StorageError::StoreError(e.to_string()))
    }

    /// Check whether a key exists.
    pub fn exists(&self, key: &str) -> Result<bool, StorageError> {
        self.store
            .exists(key)
            .map_err(|e| StorageError::StoreError(e.to_string()))
    }
}

// Native backend: an in-process map so development and tests run without
// a Spin host. Entries live as long as the KvStore value itself.
#[cfg(not(target_arch = "wasm32"))]
impl KvStore {
    /// Open the default store.
    pub fn open_default() -> Result<Self, StorageError> {
        Ok(Self {
            entries: Mutex::new(HashMap::new()),
        })
    }

    /// Open a named store.
    pub fn open(_name: &str) -> Result<Self, StorageError> {
        Self::open_default()
    }

    /// Get a value by key.
    ///
    /// Returns `None` if the key doesn't exist. A present value that does
    /// not decode as `T` is an error, not `None`.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StorageError> {
        let entries = self.lock()?;
        match entries.get(key) {
            Some(bytes) => {
                let value: T = serde_json::from_slice(bytes)?;
                Ok(Some(value))
            }
            None => Ok(None),
        }
    }

    /// Set a value, overwriting any previous value under the key.
    pub fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StorageError> {
        let bytes = serde_json::to_vec(value)?;
        let mut entries = self.lock()?;
        entries.insert(key.to_string(), bytes);
        Ok(())
    }

    /// Delete a value by key.
    pub fn delete(&self, key: &str) -> Result<(), StorageError> {
        let mut entries = self.lock()?;
        entries.remove(key);
        Ok(())
    }

    /// Check whether a key exists.
    pub fn exists(&self, key: &str) -> Result<bool, StorageError> {
        let entries = self.lock()?;
        Ok(entries.contains_key(key))
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, Vec<u8>>>, StorageError> {
        self.entries
            .lock()
            .map_err(|e| StorageError::StoreError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct Entry {
        name: String,
        count: i64,
    }

    #[test]
    fn test_get_missing_key() {
        let store = KvStore::open_default().unwrap();
        let value: Option<Entry> = store.get("missing").unwrap();
        assert!(value.is_none());
    }

    #[test]
    fn test_set_then_get() {
        let store = KvStore::open_default().unwrap();
        let entry = Entry {
            name: "boot".to_string(),
            count: 2,
        };

        store.set("entry:1", &entry).unwrap();
        let loaded: Option<Entry> = store.get("entry:1").unwrap();
        assert_eq!(loaded, Some(entry));
    }

    #[test]
    fn test_set_overwrites() {
        let store = KvStore::open_default().unwrap();
        store
            .set(
                "entry:1",
                &Entry {
                    name: "boot".to_string(),
                    count: 2,
                },
            )
            .unwrap();
        store
            .set(
                "entry:1",
                &Entry {
                    name: "boot".to_string(),
                    count: 5,
                },
            )
            .unwrap();

        let loaded: Option<Entry> = store.get("entry:1").unwrap();
        assert_eq!(loaded.unwrap().count, 5);
    }

    #[test]
    fn test_delete() {
        let store = KvStore::open_default().unwrap();
        store
            .set(
                "entry:1",
                &Entry {
                    name: "boot".to_string(),
                    count: 1,
                },
            )
            .unwrap();

        store.delete("entry:1").unwrap();
        let loaded: Option<Entry> = store.get("entry:1").unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn test_delete_missing_key_is_ok() {
        let store = KvStore::open_default().unwrap();
        assert!(store.delete("missing").is_ok());
    }

    #[test]
    fn test_exists() {
        let store = KvStore::open_default().unwrap();
        assert!(!store.exists("entry:1").unwrap());

        store
            .set(
                "entry:1",
                &Entry {
                    name: "boot".to_string(),
                    count: 1,
                },
            )
            .unwrap();
        assert!(store.exists("entry:1").unwrap());
    }

    #[test]
    fn test_undecodable_value_is_an_error() {
        let store = KvStore::open_default().unwrap();
        store.set("entry:1", &"not an entry").unwrap();

        let loaded: Result<Option<Entry>, _> = store.get("entry:1");
        assert!(matches!(loaded, Err(StorageError::SerializeError(_))));
    }
}
