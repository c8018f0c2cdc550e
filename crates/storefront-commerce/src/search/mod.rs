//! Search module.
//!
//! Contains the catalog query engine, filter state, the query parameter
//! codec and facets.

mod engine;
mod filter;
pub mod params;
mod query;
mod results;

pub use engine::{
    evaluate, evaluate_refs, featured, has_active_filters, new_arrivals, on_sale,
    quick_search, related_products, search, sort_products, SearchOutcome,
};
pub use filter::FilterState;
pub use query::{SearchQuery, SortOption, ViewMode};
pub use results::{Facet, FacetType, FacetValue, Facets, RATING_THRESHOLDS};
