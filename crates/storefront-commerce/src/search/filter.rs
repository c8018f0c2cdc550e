//! Structured catalog filters.

use serde::{Deserialize, Serialize};

use crate::catalog::Product;
use crate::money::Money;
use crate::search::{SortOption, ViewMode};

/// The structured part of a catalog query.
///
/// Every field is a no-op when unset. A product must satisfy all set
/// fields to match.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FilterState {
    /// Category, compared case-insensitively.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Subcategory, compared case-insensitively.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subcategory: Option<String>,
    /// Inclusive lower price bound.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_price: Option<Money>,
    /// Inclusive upper price bound.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_price: Option<Money>,
    /// Accepted brands (any of). Empty accepts every brand.
    #[serde(default)]
    pub brands: Vec<String>,
    /// Only products with stock on hand.
    #[serde(default)]
    pub in_stock: bool,
    /// Inclusive minimum rating.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_rating: Option<f64>,
    #[serde(default)]
    pub sort_by: SortOption,
    #[serde(default)]
    pub view: ViewMode,
}

impl FilterState {
    /// Create a filter state that matches everything.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the category. An empty name clears it.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = non_empty(category.into());
        self
    }

    /// Set the subcategory. An empty name clears it.
    pub fn with_subcategory(mut self, subcategory: impl Into<String>) -> Self {
        self.subcategory = non_empty(subcategory.into());
        self
    }

    /// Set both price bounds at once.
    pub fn with_price_range(mut self, min: Option<Money>, max: Option<Money>) -> Self {
        self.min_price = min;
        self.max_price = max;
        self
    }

    pub fn with_brands<I, S>(mut self, brands: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.brands = brands
            .into_iter()
            .map(Into::into)
            .filter(|b: &String| !b.is_empty())
            .collect();
        self
    }

    pub fn in_stock_only(mut self) -> Self {
        self.in_stock = true;
        self
    }

    pub fn with_min_rating(mut self, rating: f64) -> Self {
        self.min_rating = Some(rating);
        self
    }

    pub fn with_sort(mut self, sort: SortOption) -> Self {
        self.sort_by = sort;
        self
    }

    pub fn with_view(mut self, view: ViewMode) -> Self {
        self.view = view;
        self
    }

    /// The category filter, if set to a non-empty name.
    pub fn category(&self) -> Option<&str> {
        self.category.as_deref().filter(|c| !c.is_empty())
    }

    /// The subcategory filter, if set to a non-empty name.
    pub fn subcategory(&self) -> Option<&str> {
        self.subcategory.as_deref().filter(|s| !s.is_empty())
    }

    /// Add the brand if absent, remove it if present.
    pub fn toggle_brand(&mut self, brand: &str) {
        if brand.is_empty() {
            return;
        }
        if let Some(pos) = self.brands.iter().position(|b| b == brand) {
            self.brands.remove(pos);
        } else {
            self.brands.push(brand.to_string());
        }
    }

    /// Clear every filter. Sort order and view mode are kept.
    pub fn reset(&mut self) {
        *self = Self {
            sort_by: self.sort_by,
            view: self.view,
            ..Self::default()
        };
    }

    /// Check if any structured filter is set. Sort and view do not count.
    /// An empty category or subcategory counts as unset.
    pub fn is_active(&self) -> bool {
        self.category().is_some()
            || self.subcategory().is_some()
            || self.min_price.is_some()
            || self.max_price.is_some()
            || self.brands.iter().any(|b| !b.is_empty())
            || self.in_stock
            || self.min_rating.is_some()
    }

    /// Check a product against every set filter, using its base price and
    /// stock.
    pub fn matches(&self, product: &Product) -> bool {
        if let Some(category) = self.category() {
            if !eq_ignore_case(&product.category, category) {
                return false;
            }
        }

        if let Some(subcategory) = self.subcategory() {
            match &product.subcategory {
                Some(s) if eq_ignore_case(s, subcategory) => {}
                _ => return false,
            }
        }

        if let Some(min) = self.min_price {
            if product.price.amount_cents < min.amount_cents {
                return false;
            }
        }

        if let Some(max) = self.max_price {
            if product.price.amount_cents > max.amount_cents {
                return false;
            }
        }

        if self.brands.iter().any(|b| !b.is_empty())
            && !self.brands.iter().any(|b| *b == product.brand)
        {
            return false;
        }

        if self.in_stock && !product.is_in_stock() {
            return false;
        }

        if let Some(rating) = self.min_rating {
            if product.rating < rating {
                return false;
            }
        }

        true
    }
}

fn non_empty(value: String) -> Option<String> {
    (!value.is_empty()).then_some(value)
}

/// Case-insensitive equality used by category filters and facets.
pub(crate) fn eq_ignore_case(a: &str, b: &str) -> bool {
    a == b || a.to_lowercase() == b.to_lowercase()
}
