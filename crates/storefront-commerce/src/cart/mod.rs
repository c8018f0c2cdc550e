//! Shopping cart module.
//!
//! Contains the cart aggregate, its line items, and the persisted store.

mod cart;
mod store;

pub use cart::{Cart, CartKey, LineItem, MAX_QUANTITY_PER_ITEM};
pub use store::{CartStore, CART_KEY};
