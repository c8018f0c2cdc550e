//! Key-value store abstraction with a typed JSON wrapper.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use serde::{de::DeserializeOwned, Serialize};

use crate::PersistenceError;

/// A string-keyed, string-valued store.
///
/// Reads and writes are synchronous from the caller's point of view. There is
/// no atomicity across keys.
pub trait KeyValueStore {
    /// Read the raw value stored under `key`.
    fn get(&self, key: &str) -> Result<Option<String>, PersistenceError>;

    /// Overwrite the value stored under `key`.
    fn set(&self, key: &str, value: &str) -> Result<(), PersistenceError>;

    /// Remove `key`. Removing a missing key is not an error.
    fn delete(&self, key: &str) -> Result<(), PersistenceError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Arc<S> {
    fn get(&self, key: &str) -> Result<Option<String>, PersistenceError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PersistenceError> {
        (**self).set(key, value)
    }

    fn delete(&self, key: &str) -> Result<(), PersistenceError> {
        (**self).delete(key)
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get(&self, key: &str) -> Result<Option<String>, PersistenceError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PersistenceError> {
        (**self).set(key, value)
    }

    fn delete(&self, key: &str) -> Result<(), PersistenceError> {
        (**self).delete(key)
    }
}

/// In-process store, mostly useful for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.entries.lock().map(|e| e.len()).unwrap_or(0)
    }

    /// Check if the store holds no keys.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, PersistenceError> {
        let entries = self
            .entries
            .lock()
            .map_err(|e| PersistenceError::Unavailable(e.to_string()))?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PersistenceError> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|e| PersistenceError::Unavailable(e.to_string()))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<(), PersistenceError> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|e| PersistenceError::Unavailable(e.to_string()))?;
        entries.remove(key);
        Ok(())
    }
}

/// Type-safe cache over any [`KeyValueStore`].
///
/// Values are stored as JSON documents.
///
/// # Example
///
/// ```rust
/// use storefront_cache::{Cache, MemoryStore};
///
/// let cache = Cache::new(MemoryStore::new());
/// cache.set("wishlist", &vec![1_i64, 3]).unwrap();
/// let ids: Option<Vec<i64>> = cache.get("wishlist").unwrap();
/// assert_eq!(ids, Some(vec![1, 3]));
/// ```
#[derive(Debug, Clone)]
pub struct Cache<S> {
    store: S,
}

impl<S: KeyValueStore> Cache<S> {
    /// Wrap a store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Get and decode a value. Returns `None` if the key doesn't exist.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, PersistenceError> {
        match self.store.get(key)? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    /// Encode and store a value.
    pub fn set<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), PersistenceError> {
        let raw = serde_json::to_string(value)?;
        self.store.set(key, &raw)
    }

    /// Delete a value.
    pub fn delete(&self, key: &str) -> Result<(), PersistenceError> {
        self.store.delete(key)
    }

    /// Check if a key exists.
    pub fn exists(&self, key: &str) -> Result<bool, PersistenceError> {
        Ok(self.store.get(key)?.is_some())
    }

    /// Borrow the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_roundtrip() {
        let store = MemoryStore::new();
        assert_eq!(store.get("cart").unwrap(), None);

        store.set("cart", "[]").unwrap();
        assert_eq!(store.get("cart").unwrap().as_deref(), Some("[]"));
        assert_eq!(store.len(), 1);

        store.delete("cart").unwrap();
        assert!(store.is_empty());
        // Deleting twice is fine.
        store.delete("cart").unwrap();
    }

    #[test]
    fn test_cache_typed_values() {
        let cache = Cache::new(MemoryStore::new());
        cache.set("ids", &[4_i64, 2, 9]).unwrap();

        let ids: Vec<i64> = cache.get("ids").unwrap().unwrap();
        assert_eq!(ids, vec![4, 2, 9]);
        assert!(cache.exists("ids").unwrap());
        assert!(!cache.exists("other").unwrap());
    }

    #[test]
    fn test_cache_corrupt_value_is_an_error() {
        let store = MemoryStore::new();
        store.set("ids", "{not json").unwrap();
        let cache = Cache::new(&store);

        let result: Result<Option<Vec<i64>>, _> = cache.get("ids");
        assert!(matches!(result, Err(PersistenceError::Serialization(_))));
    }

    #[test]
    fn test_shared_store_through_arc() {
        let store = Arc::new(MemoryStore::new());
        let a = Cache::new(Arc::clone(&store));
        let b = Cache::new(Arc::clone(&store));

        a.set("k", &true).unwrap();
        assert_eq!(b.get::<bool>("k").unwrap(), Some(true));
    }
}
