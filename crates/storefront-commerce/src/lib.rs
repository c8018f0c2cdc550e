//! Storefront domain types and logic.
//!
//! - **Catalog**: Products, variants, category taxonomy, brands
//! - **Search**: The catalog query engine, filter state, URL parameter codec, facets
//! - **Cart**: Shopping cart keyed by product and variant, persisted store
//! - **Wishlist**: Saved products, persisted store
//! - **Checkout**: Shipping methods and order summary
//!
//! # Example
//!
//! ```rust
//! use storefront_commerce::prelude::*;
//!
//! let catalog = vec![
//!     Product::new(1, "Wireless Headphones", Money::usd(29999))
//!         .with_brand("AudioTech")
//!         .with_category("Electronics", Some("Audio"))
//!         .with_stock(45),
//!     Product::new(2, "Coffee Maker", Money::usd(14999))
//!         .with_brand("BrewMaster")
//!         .with_category("Home", Some("Appliances")),
//! ];
//!
//! let query = params::from_query_string("category=Electronics&inStock=true&sortBy=price-asc");
//! let outcome = search(&catalog, &query);
//! assert_eq!(outcome.total, 1);
//! assert!(outcome.has_active_filters);
//!
//! let mut cart = Cart::new();
//! cart.add_item(&outcome.products[0], 2, None).unwrap();
//! let summary = OrderSummary::for_cart(&cart, &CheckoutRates::default()).unwrap();
//! println!("Total: {}", summary.total.display());
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod search;
pub mod wishlist;

pub use error::CommerceError;
pub use ids::*;
pub use money::{Currency, Money};

pub use catalog::{Brand, CategoryNode, Product, ProductVariant};
pub use cart::{Cart, CartKey, CartStore, LineItem};
pub use checkout::{CheckoutRates, OrderSummary, ShippingMethod};
pub use wishlist::{Wishlist, WishlistStore};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{Brand, CategoryNode, Product, ProductVariant};

    // Search
    pub use crate::search::{
        evaluate, has_active_filters, params, search, Facets, FilterState, SearchOutcome,
        SearchQuery, SortOption, ViewMode,
    };

    // Cart and wishlist
    pub use crate::cart::{Cart, CartKey, CartStore, LineItem};
    pub use crate::wishlist::{Wishlist, WishlistStore};

    // Checkout
    pub use crate::checkout::{CheckoutRates, OrderSummary, ShippingMethod};
}
