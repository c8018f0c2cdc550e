//! Product and variant types.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::CommerceError;
use crate::ids::{ProductId, VariantId};
use crate::money::Money;

/// A purchasable variation of a product (color, size, storage...).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProductVariant {
    /// Identifier, unique within the parent product.
    pub id: VariantId,
    /// Display name (e.g., "Black / 256GB").
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    /// Price of this variant; overrides the product price when selected.
    pub price: Money,
    /// Units on hand for this variant.
    pub stock: u32,
    /// Variant-specific images, if any.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<String>,
}

impl ProductVariant {
    /// Create a variant with no color, size or images.
    pub fn new(id: impl Into<VariantId>, name: impl Into<String>, price: Money, stock: u32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            color: None,
            size: None,
            price,
            stock,
            images: Vec::new(),
        }
    }

    /// Check if the variant can be purchased.
    pub fn is_in_stock(&self) -> bool {
        self.stock > 0
    }
}

/// A product in the catalog.
///
/// Search and filtering operate on the base record: `price` and `stock`
/// here, never the variants'. Variant values only apply once a variant is
/// selected, see [`effective_price`](Self::effective_price).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Full description.
    pub description: String,
    /// Current selling price.
    pub price: Money,
    /// Pre-markdown price. Present only when the product is marked down.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_price: Option<Money>,
    /// Image URLs; the first is the canonical one.
    pub images: Vec<String>,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subcategory: Option<String>,
    pub brand: String,
    /// Average review score, 0.0 to 5.0.
    pub rating: f64,
    pub review_count: u32,
    /// Units on hand. Zero means unavailable.
    pub stock: u32,
    /// Stock keeping unit (unique).
    pub sku: String,
    /// Tags for search.
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub variants: Vec<ProductVariant>,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(default)]
    pub is_new: bool,
    #[serde(default)]
    pub on_sale: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sale_percentage: Option<u8>,
}

impl Product {
    /// Create a minimal product. Other fields start empty or false.
    pub fn new(id: impl Into<ProductId>, name: impl Into<String>, price: Money) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            price,
            original_price: None,
            images: Vec::new(),
            category: String::new(),
            subcategory: None,
            brand: String::new(),
            rating: 0.0,
            review_count: 0,
            stock: 0,
            sku: String::new(),
            tags: Vec::new(),
            variants: Vec::new(),
            is_featured: false,
            is_new: false,
            on_sale: false,
            sale_percentage: None,
        }
    }

    /// Set the brand.
    pub fn with_brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = brand.into();
        self
    }

    /// Set category and optional subcategory.
    pub fn with_category(mut self, category: impl Into<String>, subcategory: Option<&str>) -> Self {
        self.category = category.into();
        self.subcategory = subcategory.map(str::to_string);
        self
    }

    /// Set stock on hand.
    pub fn with_stock(mut self, stock: u32) -> Self {
        self.stock = stock;
        self
    }

    /// Set rating and review count.
    pub fn with_rating(mut self, rating: f64, review_count: u32) -> Self {
        self.rating = rating;
        self.review_count = review_count;
        self
    }

    /// Append a variant.
    pub fn with_variant(mut self, variant: ProductVariant) -> Self {
        self.variants.push(variant);
        self
    }

    /// Look up a variant by id.
    pub fn find_variant(&self, variant_id: VariantId) -> Option<&ProductVariant> {
        self.variants.iter().find(|v| v.id == variant_id)
    }

    /// Check if the product has selectable variants.
    pub fn has_variants(&self) -> bool {
        !self.variants.is_empty()
    }

    /// Price of the given selection: the variant's when one is selected and
    /// exists, the product's otherwise.
    pub fn effective_price(&self, variant_id: Option<VariantId>) -> Money {
        variant_id
            .and_then(|id| self.find_variant(id))
            .map_or(self.price, |v| v.price)
    }

    /// Stock of the given selection, resolved like [`effective_price`](Self::effective_price).
    pub fn effective_stock(&self, variant_id: Option<VariantId>) -> u32 {
        variant_id
            .and_then(|id| self.find_variant(id))
            .map_or(self.stock, |v| v.stock)
    }

    /// Check if the base product can be purchased.
    pub fn is_in_stock(&self) -> bool {
        self.stock > 0
    }

    /// The canonical image.
    pub fn primary_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }

    /// Check if the product is marked down.
    pub fn is_discounted(&self) -> bool {
        self.original_price
            .is_some_and(|original| original.amount_cents > self.price.amount_cents)
    }

    /// Markdown as a whole percentage of the original price.
    ///
    /// Prefers the stored sale percentage and derives one from the prices
    /// otherwise.
    pub fn discount_percentage(&self) -> Option<u8> {
        if let Some(pct) = self.sale_percentage {
            return Some(pct);
        }
        let original = self.original_price?;
        if original.amount_cents <= self.price.amount_cents || original.amount_cents == 0 {
            return None;
        }
        let saved = (original.amount_cents - self.price.amount_cents) as f64;
        Some((saved * 100.0 / original.amount_cents as f64).round() as u8)
    }

    /// Case-insensitive substring match against name, description, brand
    /// and tags. `needle` must already be lower-cased.
    pub(crate) fn matches_text(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
            || self.brand.to_lowercase().contains(needle)
            || self.tags.iter().any(|t| t.to_lowercase().contains(needle))
    }

    /// Check the catalog invariants, reporting the first violation.
    pub fn validate(&self) -> Result<(), CommerceError> {
        let fail = |msg: String| Err(CommerceError::Validation(format!("product {}: {}", self.id, msg)));

        if self.name.trim().is_empty() {
            return fail("name is empty".into());
        }
        if self.sku.trim().is_empty() {
            return fail("sku is empty".into());
        }
        if !self.price.is_positive() {
            return fail(format!("price must be positive, got {}", self.price));
        }
        if let Some(original) = self.original_price {
            if original.currency != self.price.currency {
                return Err(CommerceError::CurrencyMismatch {
                    expected: self.price.currency.to_string(),
                    got: original.currency.to_string(),
                });
            }
            if original.amount_cents < self.price.amount_cents {
                return fail(format!(
                    "original price {} is below price {}",
                    original, self.price
                ));
            }
        }
        if let Some(pct) = self.sale_percentage {
            if pct > 100 {
                return fail(format!("sale percentage {} is above 100", pct));
            }
        }
        if !(0.0..=5.0).contains(&self.rating) {
            return fail(format!("rating {} is outside 0-5", self.rating));
        }
        if self.images.is_empty() {
            return fail("no images".into());
        }

        let mut seen = HashSet::new();
        for variant in &self.variants {
            if !seen.insert(variant.id) {
                return fail(format!("duplicate variant id {}", variant.id));
            }
            if !variant.price.is_positive() {
                return fail(format!("variant {} price must be positive", variant.id));
            }
        }
        Ok(())
    }
}
