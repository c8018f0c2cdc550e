//! Wishlist: an ordered set of saved product ids.

use serde::{Deserialize, Serialize};
use storefront_cache::{KeyValueStore, PersistentStore, SubscriptionId};

use crate::catalog::Product;
use crate::ids::ProductId;

/// Storage key for the wishlist.
pub const WISHLIST_KEY: &str = "wishlist";

/// Saved products, in the order they were added. Never holds duplicates.
///
/// Serializes as a plain array of ids.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(transparent)]
pub struct Wishlist {
    ids: Vec<ProductId>,
}

impl Wishlist {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a product. Returns false if it was already saved.
    pub fn add(&mut self, id: ProductId) -> bool {
        if self.contains(id) {
            return false;
        }
        self.ids.push(id);
        true
    }

    /// Remove a product. Returns false if it was not saved.
    pub fn remove(&mut self, id: ProductId) -> bool {
        let before = self.ids.len();
        self.ids.retain(|saved| *saved != id);
        self.ids.len() < before
    }

    /// Add the product if absent, remove it if present. Returns whether it
    /// is saved afterwards.
    pub fn toggle(&mut self, id: ProductId) -> bool {
        if self.remove(id) {
            false
        } else {
            self.ids.push(id);
            true
        }
    }

    pub fn contains(&self, id: ProductId) -> bool {
        self.ids.contains(&id)
    }

    /// Remove everything. Returns false if it was already empty.
    pub fn clear(&mut self) -> bool {
        let changed = !self.ids.is_empty();
        self.ids.clear();
        changed
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Saved ids, in insertion order.
    pub fn ids(&self) -> &[ProductId] {
        &self.ids
    }

    /// Resolve saved ids against a catalog, in wishlist order. Ids missing
    /// from the catalog are skipped.
    pub fn products<'a>(&self, catalog: &'a [Product]) -> Vec<&'a Product> {
        self.ids
            .iter()
            .filter_map(|id| catalog.iter().find(|p| p.id == *id))
            .collect()
    }
}

/// A [`Wishlist`] mirrored into a key-value store.
#[derive(Debug)]
pub struct WishlistStore<S> {
    inner: PersistentStore<Wishlist, S>,
}

impl<S: KeyValueStore> WishlistStore<S> {
    /// Open the wishlist, rehydrating it from `store`.
    pub fn open(store: S) -> Self {
        Self {
            inner: PersistentStore::open(store, WISHLIST_KEY),
        }
    }

    pub fn wishlist(&self) -> &Wishlist {
        self.inner.get()
    }

    pub fn add(&mut self, id: ProductId) -> bool {
        self.inner.update(|w| w.add(id))
    }

    pub fn remove(&mut self, id: ProductId) -> bool {
        self.inner.update(|w| w.remove(id))
    }

    pub fn toggle(&mut self, id: ProductId) -> bool {
        self.inner.update(|w| w.toggle(id))
    }

    pub fn clear(&mut self) -> bool {
        self.inner.update(Wishlist::clear)
    }

    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: Fn(&Wishlist) + Send + Sync + 'static,
    {
        self.inner.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.inner.unsubscribe(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;
    use storefront_cache::MemoryStore;

    fn id(n: i64) -> ProductId {
        ProductId::new(n)
    }

    #[test]
    fn test_add_is_idempotent() {
        let mut w = Wishlist::new();
        assert!(w.add(id(3)));
        assert!(!w.add(id(3)));
        assert_eq!(w.len(), 1);
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut w = Wishlist::new();
        assert!(!w.remove(id(3)));
        w.add(id(3));
        assert!(w.remove(id(3)));
        assert!(w.is_empty());
    }

    #[test]
    fn test_toggle() {
        let mut w = Wishlist::new();
        assert!(w.toggle(id(1)));
        assert!(w.contains(id(1)));
        assert!(!w.toggle(id(1)));
        assert!(!w.contains(id(1)));
    }

    #[test]
    fn test_products_keep_wishlist_order() {
        let catalog = vec![
            Product::new(1, "A", Money::usd(100)),
            Product::new(2, "B", Money::usd(100)),
        ];
        let mut w = Wishlist::new();
        w.add(id(2));
        w.add(id(42));
        w.add(id(1));

        let names: Vec<_> = w.products(&catalog).iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["B", "A"]);
    }

    #[test]
    fn test_store_persists_as_id_array() {
        let backing = MemoryStore::new();
        let mut store = WishlistStore::open(&backing);
        store.add(id(5));
        store.add(id(2));
        assert_eq!(backing.get(WISHLIST_KEY).unwrap().as_deref(), Some("[5,2]"));

        let reopened = WishlistStore::open(&backing);
        assert_eq!(reopened.wishlist().ids(), &[id(5), id(2)]);
    }

    #[test]
    fn test_store_rehydrates_corrupt_as_empty() {
        let backing = MemoryStore::new();
        backing.set(WISHLIST_KEY, "[\"five\"]").unwrap();
        assert!(WishlistStore::open(&backing).wishlist().is_empty());
    }
}
