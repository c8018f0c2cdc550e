//! Product catalog module.
//!
//! Contains types for products, variants, the category taxonomy and brands.

mod category;
mod product;

pub use category::{find_category, parent_of, Brand, CategoryNode};
pub use product::{Product, ProductVariant};
