//! Key-value persistence layer for the storefront.
//!
//! Provides a small store abstraction with automatic JSON serialization and
//! an observable wrapper that keeps a value mirrored into the store.
//!
//! # Example
//!
//! ```rust
//! use storefront_cache::{FileStore, PersistentStore};
//!
//! let dir = tempfile::tempdir().unwrap();
//! let mut wishlist: PersistentStore<Vec<i64>, _> =
//!     PersistentStore::open(FileStore::new(dir.path()), "wishlist");
//!
//! wishlist.update(|ids| ids.push(3));
//!
//! // A second handle on the same directory sees the write.
//! let reopened: PersistentStore<Vec<i64>, _> =
//!     PersistentStore::open(FileStore::new(dir.path()), "wishlist");
//! assert_eq!(reopened.get(), &vec![3]);
//! ```

mod error;
mod file;
mod kv;
mod store;

pub use error::PersistenceError;
pub use file::FileStore;
pub use kv::{Cache, KeyValueStore, MemoryStore};
pub use store::{PersistentStore, SubscriptionId};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{
        Cache, FileStore, KeyValueStore, MemoryStore, PersistenceError, PersistentStore,
        SubscriptionId,
    };
}
