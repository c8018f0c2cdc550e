//! Facet counts over a result set.

use serde::{Deserialize, Serialize};

use crate::catalog::Product;
use crate::search::filter::eq_ignore_case;
use crate::search::FilterState;

/// Rating thresholds offered by the rating facet.
pub const RATING_THRESHOLDS: [u8; 4] = [4, 3, 2, 1];

/// A facet for filtering.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Facet {
    /// Facet name (e.g., "Category", "Brand").
    pub name: String,
    /// Query parameter this facet filters on.
    pub field: String,
    /// Type of facet.
    pub facet_type: FacetType,
    /// Facet values.
    pub values: Vec<FacetValue>,
}

impl Facet {
    /// Create a new terms facet.
    pub fn terms(name: impl Into<String>, field: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            field: field.into(),
            facet_type: FacetType::Terms,
            values: Vec::new(),
        }
    }

    /// Create a new threshold facet.
    pub fn range(name: impl Into<String>, field: impl Into<String>) -> Self {
        Self {
            facet_type: FacetType::Range,
            ..Self::terms(name, field)
        }
    }

    /// Add a value to the facet.
    pub fn add_value(&mut self, value: impl Into<String>, count: usize, selected: bool) {
        self.values.push(FacetValue {
            value: value.into(),
            count,
            selected,
        });
    }

    /// Count a term, adding it on first sight. Values keep first-seen order.
    fn bump(&mut self, value: &str, selected: bool) {
        match self.values.iter_mut().find(|v| v.value == value) {
            Some(existing) => existing.count += 1,
            None => self.add_value(value, 1, selected),
        }
    }
}

/// Type of facet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FacetType {
    /// Discrete values (e.g., categories, brands).
    Terms,
    /// Minimum thresholds (e.g., "4 stars & up").
    Range,
}

/// A single facet value.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FacetValue {
    /// The value.
    pub value: String,
    /// Number of items with this value.
    pub count: usize,
    /// Whether currently selected.
    pub selected: bool,
}

/// Category, brand and rating facets for a listing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Facets {
    pub category: Facet,
    pub brand: Facet,
    pub rating: Facet,
}

impl Facets {
    /// Count facet values over `products`, marking those selected in
    /// `filters`.
    pub fn from_products<'a, I>(products: I, filters: &FilterState) -> Self
    where
        I: IntoIterator<Item = &'a Product>,
    {
        let mut category = Facet::terms("Category", "category");
        let mut brand = Facet::terms("Brand", "brands");
        let mut ratings = [0usize; RATING_THRESHOLDS.len()];

        for product in products {
            let category_selected = filters
                .category()
                .is_some_and(|c| eq_ignore_case(c, &product.category));
            category.bump(&product.category, category_selected);
            brand.bump(&product.brand, filters.brands.contains(&product.brand));

            for (count, threshold) in ratings.iter_mut().zip(RATING_THRESHOLDS) {
                if product.rating >= f64::from(threshold) {
                    *count += 1;
                }
            }
        }

        let mut rating = Facet::range("Rating", "minRating");
        for (count, threshold) in ratings.into_iter().zip(RATING_THRESHOLDS) {
            let selected = filters.min_rating == Some(f64::from(threshold));
            rating.add_value(threshold.to_string(), count, selected);
        }

        Self {
            category,
            brand,
            rating,
        }
    }

    /// All facets, in display order.
    pub fn iter(&self) -> impl Iterator<Item = &Facet> {
        [&self.category, &self.brand, &self.rating].into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;

    fn catalog() -> Vec<Product> {
        vec![
            Product::new(1, "Headphones", Money::usd(100))
                .with_brand("AudioTech")
                .with_category("Electronics", Some("Audio"))
                .with_rating(4.8, 10),
            Product::new(2, "Coffee Maker", Money::usd(100))
                .with_brand("BrewMaster")
                .with_category("Home", Some("Appliances"))
                .with_rating(3.5, 10),
            Product::new(3, "Earbuds", Money::usd(100))
                .with_brand("AudioTech")
                .with_category("Electronics", Some("Audio"))
                .with_rating(4.1, 10),
        ]
    }

    #[test]
    fn test_term_counts_keep_first_seen_order() {
        let products = catalog();
        let facets = Facets::from_products(&products, &FilterState::new());

        let brands: Vec<_> = facets
            .brand
            .values
            .iter()
            .map(|v| (v.value.as_str(), v.count))
            .collect();
        assert_eq!(brands, vec![("AudioTech", 2), ("BrewMaster", 1)]);
        assert_eq!(facets.category.values[0].count, 2);
    }

    #[test]
    fn test_rating_thresholds_are_cumulative() {
        let products = catalog();
        let facets = Facets::from_products(&products, &FilterState::new().with_min_rating(4.0));

        let counts: Vec<_> = facets.rating.values.iter().map(|v| v.count).collect();
        assert_eq!(counts, vec![2, 3, 3, 3]);
        assert!(facets.rating.values[0].selected);
        assert_eq!(facets.rating.facet_type, FacetType::Range);
    }

    #[test]
    fn test_selected_category_ignores_case_beyond_ascii() {
        let products = vec![Product::new(1, "Stand Mixer", Money::usd(100))
            .with_category("Électroménager", None)];
        let filters = FilterState::new().with_category("ÉLECTROMÉNAGER");
        assert!(filters.matches(&products[0]));

        let facets = Facets::from_products(&products, &filters);
        assert!(facets.category.values[0].selected);
    }

    #[test]
    fn test_selected_brands_are_marked() {
        let products = catalog();
        let filters = FilterState::new().with_brands(["BrewMaster"]);
        let facets = Facets::from_products(&products, &filters);
        let selected: Vec<_> = facets
            .brand
            .values
            .iter()
            .filter(|v| v.selected)
            .map(|v| v.value.as_str())
            .collect();
        assert_eq!(selected, vec!["BrewMaster"]);
        assert_eq!(facets.iter().count(), 3);
    }
}
