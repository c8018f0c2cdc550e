//! Persisted, observable cart.

use storefront_cache::{KeyValueStore, PersistentStore, SubscriptionId};
use tracing::warn;

use crate::cart::{Cart, CartKey};
use crate::catalog::Product;
use crate::error::CommerceError;
use crate::ids::{ProductId, VariantId};

/// Storage key for the cart.
pub const CART_KEY: &str = "cart";

/// A [`Cart`] mirrored into a key-value store.
///
/// Successful mutations are persisted and then broadcast to subscribers.
/// Rejected mutations change nothing.
#[derive(Debug)]
pub struct CartStore<S> {
    inner: PersistentStore<Cart, S>,
}

impl<S: KeyValueStore> CartStore<S> {
    /// Open the cart, rehydrating it from `store`.
    ///
    /// A stored cart with out-of-range quantities or repeated lines is
    /// treated like a corrupt one and replaced by an empty cart.
    pub fn open(store: S) -> Self {
        let mut inner: PersistentStore<Cart, S> = PersistentStore::open(store, CART_KEY);
        if !inner.get().is_well_formed() {
            warn!(key = CART_KEY, "discarding persisted cart with invalid lines");
            inner.replace(Cart::new());
        }
        Self { inner }
    }

    /// The current cart.
    pub fn cart(&self) -> &Cart {
        self.inner.get()
    }

    pub fn add_item(
        &mut self,
        product: &Product,
        quantity: i64,
        variant_id: Option<VariantId>,
    ) -> Result<CartKey, CommerceError> {
        self.inner
            .try_update(|cart| cart.add_item(product, quantity, variant_id))
    }

    pub fn remove_item(&mut self, product_id: ProductId, variant_id: Option<VariantId>) -> bool {
        self.inner
            .update(|cart| cart.remove_item(product_id, variant_id))
    }

    pub fn set_quantity(
        &mut self,
        product_id: ProductId,
        variant_id: Option<VariantId>,
        quantity: i64,
    ) -> Result<bool, CommerceError> {
        self.inner
            .try_update(|cart| cart.set_quantity(product_id, variant_id, quantity))
    }

    pub fn clear(&mut self) {
        self.inner.update(Cart::clear);
    }

    /// Register a listener called with the cart after every mutation.
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: Fn(&Cart) + Send + Sync + 'static,
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
    use crate::cart::{LineItem, MAX_QUANTITY_PER_ITEM};
    use crate::money::Money;
    use std::sync::{Arc, Mutex};
    use storefront_cache::MemoryStore;

    fn speaker() -> Product {
        Product::new(8, "Portable Speaker", Money::usd(7999)).with_stock(5)
    }

    #[test]
    fn test_cart_survives_reopen() {
        let backing = MemoryStore::new();
        {
            let mut store = CartStore::open(&backing);
            store.add_item(&speaker(), 2, None).unwrap();
        }

        let reopened = CartStore::open(&backing);
        assert_eq!(reopened.cart().item_count(), 2);
        assert_eq!(reopened.cart().items()[0].product.name, "Portable Speaker");
    }

    #[test]
    fn test_corrupt_cart_starts_empty() {
        let backing = MemoryStore::new();
        backing.set(CART_KEY, "{not a cart").unwrap();

        let store = CartStore::open(&backing);
        assert!(store.cart().is_empty());
    }

    #[test]
    fn test_cart_with_invalid_quantities_starts_empty() {
        let line = |quantity: i64| {
            serde_json::json!({
                "product": serde_json::to_value(speaker()).unwrap(),
                "quantity": quantity,
            })
        };
        for lines in [
            vec![line(i64::MAX), line(5)],
            vec![line(0)],
            vec![line(-2)],
            vec![line(MAX_QUANTITY_PER_ITEM + 1)],
            vec![line(1), line(2)],
        ] {
            let backing = MemoryStore::new();
            backing
                .set(CART_KEY, &serde_json::Value::Array(lines).to_string())
                .unwrap();

            let store = CartStore::open(&backing);
            assert!(store.cart().is_empty());
            assert_eq!(store.cart().item_count(), 0);
            assert_eq!(backing.get(CART_KEY).unwrap().as_deref(), Some("[]"));
        }

        let backing = MemoryStore::new();
        backing
            .set(CART_KEY, &serde_json::Value::Array(vec![line(3)]).to_string())
            .unwrap();
        assert_eq!(CartStore::open(&backing).cart().item_count(), 3);
    }

    #[test]
    fn test_item_count_saturates() {
        let lines = vec![
            LineItem {
                product: speaker(),
                variant: None,
                quantity: i64::MAX,
            },
            LineItem {
                product: Product::new(9, "Cable", Money::usd(999)),
                variant: None,
                quantity: 5,
            },
        ];
        let cart: Cart = serde_json::from_value(serde_json::to_value(lines).unwrap()).unwrap();
        assert_eq!(cart.item_count(), i64::MAX);
        assert!(!cart.is_well_formed());
    }

    #[test]
    fn test_subscribers_see_successful_mutations_only() {
        let mut store = CartStore::open(MemoryStore::new());
        let counts = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&counts);
        let id = store.subscribe(move |cart| sink.lock().unwrap().push(cart.item_count()));

        store.add_item(&speaker(), 1, None).unwrap();
        assert!(store.add_item(&speaker(), -1, None).is_err());
        store.set_quantity(ProductId::new(8), None, 5).unwrap();
        store.clear();

        assert_eq!(*counts.lock().unwrap(), vec![1, 5, 0]);
        assert!(store.unsubscribe(id));
    }
}
