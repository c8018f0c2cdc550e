//! Search query, sort orders and view modes.

use serde::{Deserialize, Serialize};

use crate::search::FilterState;

/// Sort options for search results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SortOption {
    /// Catalog order, no reordering.
    #[default]
    Relevance,
    /// Sort by price, low to high.
    PriceAsc,
    /// Sort by price, high to low.
    PriceDesc,
    /// Sort by highest rated.
    Rating,
    /// New arrivals first, catalog order otherwise.
    Newest,
    /// Sort by review count, most reviewed first.
    BestSelling,
}

impl SortOption {
    /// Every option, in menu order.
    pub const ALL: [SortOption; 6] = [
        SortOption::Relevance,
        SortOption::PriceAsc,
        SortOption::PriceDesc,
        SortOption::Rating,
        SortOption::Newest,
        SortOption::BestSelling,
    ];

    /// Wire name used in query parameters.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOption::Relevance => "relevance",
            SortOption::PriceAsc => "price-asc",
            SortOption::PriceDesc => "price-desc",
            SortOption::Rating => "rating",
            SortOption::Newest => "newest",
            SortOption::BestSelling => "best-selling",
        }
    }

    /// Parse a wire name. Unknown names yield `None`.
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|o| o.as_str() == s)
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SortOption::Relevance => "Relevance",
            SortOption::PriceAsc => "Price: Low to High",
            SortOption::PriceDesc => "Price: High to Low",
            SortOption::Rating => "Highest Rated",
            SortOption::Newest => "Newest",
            SortOption::BestSelling => "Best Selling",
        }
    }
}

/// Result layout preference. Carried with the filters but never affects
/// which products match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Grid,
    List,
}

impl ViewMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewMode::Grid => "grid",
            ViewMode::List => "list",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "grid" => Some(ViewMode::Grid),
            "list" => Some(ViewMode::List),
            _ => None,
        }
    }
}

/// A search query: free text plus structured filters.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SearchQuery {
    /// Free text, matched as a case-insensitive substring.
    pub search_text: String,
    /// Structured filters and sort order.
    pub filters: FilterState,
}

impl SearchQuery {
    /// Create an empty query.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the text query.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.search_text = text.into();
        self
    }

    /// Replace the filters.
    pub fn with_filters(mut self, filters: FilterState) -> Self {
        self.filters = filters;
        self
    }

    /// Set sort option.
    pub fn with_sort(mut self, sort: SortOption) -> Self {
        self.filters.sort_by = sort;
        self
    }

    /// Clear the search text and every filter, keeping sort and view.
    pub fn reset(&mut self) {
        self.search_text.clear();
        self.filters.reset();
    }

    /// The trimmed, lower-cased search text, or `None` when blank.
    pub fn normalized_text(&self) -> Option<String> {
        let text = self.search_text.trim();
        (!text.is_empty()).then(|| text.to_lowercase())
    }
}
