//! Row shapes of the `products`, `product_images` and `product_variants`
//! tables.
//!
//! Prices are plain decimals in the store. Columns not listed here
//! (timestamps) are ignored on read and left to store defaults on insert.

use serde::{Deserialize, Serialize};
use storefront_commerce::{Product, ProductId};

pub const PRODUCTS_TABLE: &str = "products";
pub const PRODUCT_IMAGES_TABLE: &str = "product_images";
pub const PRODUCT_VARIANTS_TABLE: &str = "product_variants";

/// A row of `products`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductRow {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    #[serde(default)]
    pub original_price: Option<f64>,
    pub category: String,
    #[serde(default)]
    pub subcategory: Option<String>,
    pub brand: String,
    pub sku: String,
    pub stock: i64,
    #[serde(default)]
    pub is_new: Option<bool>,
    #[serde(default)]
    pub is_featured: Option<bool>,
    #[serde(default)]
    pub on_sale: Option<bool>,
    #[serde(default)]
    pub sale_percentage: Option<i64>,
    pub rating: f64,
    pub review_count: i64,
}

/// A row of `product_images`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductImageRow {
    pub product_id: i64,
    pub image_url: String,
    #[serde(default)]
    pub display_order: Option<i32>,
}

/// A row of `product_variants`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductVariantRow {
    pub id: i64,
    pub product_id: i64,
    pub name: String,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub size: Option<String>,
    pub price: f64,
    pub stock: i64,
}

/// Insert form of [`ProductRow`]. The store assigns the id.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct NewProductRow {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub original_price: Option<f64>,
    pub category: String,
    pub subcategory: Option<String>,
    pub brand: String,
    pub sku: String,
    pub stock: i64,
    /// `None` rather than `Some(false)`, so unset flags are stored as null.
    pub is_new: Option<bool>,
    pub is_featured: Option<bool>,
    pub on_sale: Option<bool>,
    pub sale_percentage: Option<i64>,
    pub rating: f64,
    pub review_count: i64,
}

impl NewProductRow {
    pub fn from_product(product: &Product) -> Self {
        let flag = |b: bool| b.then_some(true);
        Self {
            name: product.name.clone(),
            description: product.description.clone(),
            price: product.price.to_decimal(),
            original_price: product.original_price.map(|m| m.to_decimal()),
            category: product.category.clone(),
            subcategory: product.subcategory.clone(),
            brand: product.brand.clone(),
            sku: product.sku.clone(),
            stock: i64::from(product.stock),
            is_new: flag(product.is_new),
            is_featured: flag(product.is_featured),
            on_sale: flag(product.on_sale),
            sale_percentage: product
                .sale_percentage
                .filter(|p| *p > 0)
                .map(i64::from),
            rating: product.rating,
            review_count: i64::from(product.review_count),
        }
    }
}

/// Insert form of [`ProductImageRow`].
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct NewProductImageRow {
    pub product_id: i64,
    pub image_url: String,
    pub display_order: i32,
}

impl NewProductImageRow {
    /// One row per image, numbered in the product's image order.
    pub fn for_product(product_id: ProductId, product: &Product) -> Vec<Self> {
        product
            .images
            .iter()
            .zip(0..)
            .map(|(url, display_order)| Self {
                product_id: product_id.get(),
                image_url: url.clone(),
                display_order,
            })
            .collect()
    }
}

/// Insert form of [`ProductVariantRow`]. The store assigns the id.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct NewProductVariantRow {
    pub product_id: i64,
    pub name: String,
    pub color: Option<String>,
    pub size: Option<String>,
    pub price: f64,
    pub stock: i64,
}

impl NewProductVariantRow {
    pub fn for_product(product_id: ProductId, product: &Product) -> Vec<Self> {
        product
            .variants
            .iter()
            .map(|v| Self {
                product_id: product_id.get(),
                name: v.name.clone(),
                color: v.color.clone(),
                size: v.size.clone(),
                price: v.price.to_decimal(),
                stock: i64::from(v.stock),
            })
            .collect()
    }
}
