//! Observable values persisted in a key-value store.

use std::fmt;

use serde::{de::DeserializeOwned, Serialize};
use tracing::warn;

use crate::{Cache, KeyValueStore, PersistenceError};

/// Handle returned by [`PersistentStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener<T> = Box<dyn Fn(&T) + Send + Sync>;

/// A value of `T` mirrored into a key-value store under a fixed key.
///
/// Every mutation made through [`update`](Self::update) is written back to
/// the store and then broadcast to subscribers. Persistence failures are
/// logged and otherwise ignored: the in-memory value stays authoritative.
///
/// # Example
///
/// ```rust
/// use std::sync::atomic::{AtomicUsize, Ordering};
/// use std::sync::Arc;
/// use storefront_cache::{MemoryStore, PersistentStore};
///
/// let mut ids: PersistentStore<Vec<i64>, _> = PersistentStore::open(MemoryStore::new(), "wishlist");
/// let seen = Arc::new(AtomicUsize::new(0));
/// let counter = Arc::clone(&seen);
/// ids.subscribe(move |v: &Vec<i64>| counter.store(v.len(), Ordering::SeqCst));
///
/// ids.update(|v| v.push(7));
/// assert_eq!(seen.load(Ordering::SeqCst), 1);
/// ```
pub struct PersistentStore<T, S> {
    cache: Cache<S>,
    key: String,
    value: T,
    listeners: Vec<(SubscriptionId, Listener<T>)>,
    next_id: u64,
}

impl<T, S> PersistentStore<T, S>
where
    T: Serialize + DeserializeOwned + Default,
    S: KeyValueStore,
{
    /// Open the store and rehydrate the value.
    ///
    /// A missing key starts from `T::default()`. So does a corrupt or
    /// unreadable one, which is logged at `warn`.
    pub fn open(store: S, key: impl Into<String>) -> Self {
        let key = key.into();
        let cache = Cache::new(store);
        let value = match cache.get::<T>(&key) {
            Ok(Some(value)) => value,
            Ok(None) => T::default(),
            Err(e) => {
                warn!(key = %key, error = %e, "discarding unreadable persisted value");
                T::default()
            }
        };

        Self {
            cache,
            key,
            value,
            listeners: Vec::new(),
            next_id: 0,
        }
    }

    /// The current value.
    pub fn get(&self) -> &T {
        &self.value
    }

    /// The storage key.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Register a listener invoked after every mutation.
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener. Returns false if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sid, _)| *sid != id);
        self.listeners.len() < before
    }

    /// Number of registered listeners.
    pub fn subscriber_count(&self) -> usize {
        self.listeners.len()
    }

    /// Mutate the value, persist it, and notify subscribers.
    pub fn update<R>(&mut self, f: impl FnOnce(&mut T) -> R) -> R {
        let result = f(&mut self.value);
        if let Err(e) = self.persist() {
            warn!(key = %self.key, error = %e, "failed to persist value");
        }
        self.notify();
        result
    }

    /// Like [`update`](Self::update), but for fallible mutations.
    ///
    /// The mutation runs on a copy. On `Err` the current value is left
    /// untouched and nothing is persisted or broadcast.
    pub fn try_update<R, E>(&mut self, f: impl FnOnce(&mut T) -> Result<R, E>) -> Result<R, E>
    where
        T: Clone,
    {
        let mut next = self.value.clone();
        let result = f(&mut next)?;
        self.replace(next);
        Ok(result)
    }

    /// Replace the value wholesale.
    pub fn replace(&mut self, value: T) {
        self.update(|current| *current = value);
    }

    /// Broadcast the current value to every subscriber.
    pub fn notify(&self) {
        for (_, listener) in &self.listeners {
            listener(&self.value);
        }
    }

    /// Write the current value to the backing store.
    pub fn persist(&self) -> Result<(), PersistenceError> {
        self.cache.set(&self.key, &self.value)
    }
}

impl<T: fmt::Debug, S> fmt::Debug for PersistentStore<T, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PersistentStore")
            .field("key", &self.key)
            .field("value", &self.value)
            .field("subscribers", &self.listeners.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStore;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    /// A store whose writes always fail.
    struct BrokenStore;

    impl KeyValueStore for BrokenStore {
        fn get(&self, _key: &str) -> Result<Option<String>, PersistenceError> {
            Err(PersistenceError::Unavailable("offline".to_string()))
        }

        fn set(&self, _key: &str, _value: &str) -> Result<(), PersistenceError> {
            Err(PersistenceError::Unavailable("offline".to_string()))
        }

        fn delete(&self, _key: &str) -> Result<(), PersistenceError> {
            Ok(())
        }
    }

    #[test]
    fn test_open_missing_key_uses_default() {
        let store: PersistentStore<Vec<i64>, _> = PersistentStore::open(MemoryStore::new(), "ids");
        assert!(store.get().is_empty());
        assert_eq!(store.key(), "ids");
    }

    #[test]
    fn test_open_rehydrates_existing_value() {
        let backing = MemoryStore::new();
        backing.set("ids", "[1,2,3]").unwrap();

        let store: PersistentStore<Vec<i64>, _> = PersistentStore::open(&backing, "ids");
        assert_eq!(store.get(), &vec![1, 2, 3]);
    }

    #[test]
    fn test_open_corrupt_value_starts_empty() {
        let backing = MemoryStore::new();
        backing.set("ids", "definitely not json").unwrap();

        let store: PersistentStore<Vec<i64>, _> = PersistentStore::open(&backing, "ids");
        assert!(store.get().is_empty());
    }

    #[test]
    fn test_update_persists_and_notifies() {
        let backing = MemoryStore::new();
        let mut store: PersistentStore<Vec<i64>, _> = PersistentStore::open(&backing, "ids");

        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        store.subscribe(move |v: &Vec<i64>| sink.lock().unwrap().push(v.clone()));

        let len = store.update(|v| {
            v.push(5);
            v.len()
        });

        assert_eq!(len, 1);
        assert_eq!(backing.get("ids").unwrap().as_deref(), Some("[5]"));
        assert_eq!(*seen.lock().unwrap(), vec![vec![5]]);
    }

    #[test]
    fn test_unsubscribe_stops_notifications() {
        let mut store: PersistentStore<Vec<i64>, _> = PersistentStore::open(MemoryStore::new(), "ids");
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let id = store.subscribe(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        store.update(|v| v.push(1));
        assert!(store.unsubscribe(id));
        assert!(!store.unsubscribe(id));
        store.update(|v| v.push(2));

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(store.subscriber_count(), 0);
    }

    #[test]
    fn test_unavailable_store_degrades_to_memory() {
        let mut store: PersistentStore<Vec<i64>, _> = PersistentStore::open(BrokenStore, "ids");
        assert!(store.get().is_empty());

        store.update(|v| v.push(9));
        assert_eq!(store.get(), &vec![9]);
        assert!(store.persist().is_err());
    }

    #[test]
    fn test_try_update_error_leaves_value_untouched() {
        let backing = MemoryStore::new();
        let mut store: PersistentStore<Vec<i64>, _> = PersistentStore::open(&backing, "ids");
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        store.subscribe(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        let failed: Result<(), &str> = store.try_update(|v| {
            v.push(1);
            Err("rejected")
        });
        assert_eq!(failed, Err("rejected"));
        assert!(store.get().is_empty());
        assert_eq!(backing.get("ids").unwrap(), None);
        assert_eq!(calls.load(Ordering::SeqCst), 0);

        let ok: Result<usize, &str> = store.try_update(|v| {
            v.push(2);
            Ok(v.len())
        });
        assert_eq!(ok, Ok(1));
        assert_eq!(backing.get("ids").unwrap().as_deref(), Some("[2]"));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_replace_value() {
        let backing = MemoryStore::new();
        let mut store: PersistentStore<Vec<i64>, _> = PersistentStore::open(&backing, "ids");
        store.replace(vec![8, 9]);

        let reopened: PersistentStore<Vec<i64>, _> = PersistentStore::open(&backing, "ids");
        assert_eq!(reopened.get(), &vec![8, 9]);
    }
}
