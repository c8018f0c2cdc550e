//! Catalog query engine.
//!
//! Evaluation runs in three stages over an in-memory catalog:
//!
//! 1. text search: case-insensitive substring over name, description,
//!    brand and tags;
//! 2. structured filters from [`FilterState`](crate::search::FilterState);
//! 3. a stable sort by [`SortOption`].
//!
//! Everything here is pure: the same catalog and query always produce the
//! same ordered output, and the output is always a subset of the input.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::Product;
use crate::search::{SearchQuery, SortOption};

/// Products matching a query, with the derived flags the listing page shows.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SearchOutcome {
    pub products: Vec<Product>,
    /// Whether any filter or search text narrowed the catalog.
    pub has_active_filters: bool,
    /// Number of matching products.
    pub total: usize,
}

/// Run a query and package the result.
pub fn search(catalog: &[Product], query: &SearchQuery) -> SearchOutcome {
    let products = evaluate(catalog, query);
    SearchOutcome {
        total: products.len(),
        has_active_filters: has_active_filters(query),
        products,
    }
}

/// Evaluate a query, returning owned copies of the matching products.
pub fn evaluate(catalog: &[Product], query: &SearchQuery) -> Vec<Product> {
    evaluate_refs(catalog, query).into_iter().cloned().collect()
}

/// Evaluate a query, borrowing the matching products from the catalog.
pub fn evaluate_refs<'a>(catalog: &'a [Product], query: &SearchQuery) -> Vec<&'a Product> {
    let needle = query.normalized_text();
    let filters = &query.filters;

    let mut matched: Vec<&Product> = catalog
        .iter()
        .filter(|p| needle.as_deref().map_or(true, |n| p.matches_text(n)))
        .filter(|p| filters.matches(p))
        .collect();

    sort_products(&mut matched, filters.sort_by);

    debug!(
        catalog = catalog.len(),
        matched = matched.len(),
        sort = filters.sort_by.as_str(),
        "evaluated catalog query"
    );
    matched
}

/// Reorder products in place. Ties keep their relative order.
pub fn sort_products(products: &mut [&Product], sort: SortOption) {
    match sort {
        SortOption::Relevance => {}
        SortOption::PriceAsc => products.sort_by_key(|p| p.price.amount_cents),
        SortOption::PriceDesc => {
            products.sort_by(|a, b| b.price.amount_cents.cmp(&a.price.amount_cents))
        }
        SortOption::Rating => products.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
        // Partition, not a recency sort: new arrivals first, catalog order
        // within each group.
        SortOption::Newest => products.sort_by_key(|p| !p.is_new),
        SortOption::BestSelling => products.sort_by(|a, b| b.review_count.cmp(&a.review_count)),
    }
}

/// Check if the query narrows the catalog at all.
pub fn has_active_filters(query: &SearchQuery) -> bool {
    query.filters.is_active() || !query.search_text.is_empty()
}

/// Text-only search for the search-bar dropdown, truncated to `limit`.
pub fn quick_search<'a>(catalog: &'a [Product], text: &str, limit: usize) -> Vec<&'a Product> {
    let needle = text.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }
    catalog
        .iter()
        .filter(|p| p.matches_text(&needle))
        .take(limit)
        .collect()
}

/// Other products sharing the category or the subcategory, in catalog order.
pub fn related_products<'a>(
    catalog: &'a [Product],
    product: &Product,
    limit: usize,
) -> Vec<&'a Product> {
    catalog
        .iter()
        .filter(|p| p.id != product.id)
        .filter(|p| {
            p.category == product.category
                || (product.subcategory.is_some() && p.subcategory == product.subcategory)
        })
        .take(limit)
        .collect()
}

/// Featured products for the home page.
pub fn featured(catalog: &[Product], limit: usize) -> Vec<&Product> {
    collect_where(catalog, limit, |p| p.is_featured)
}

/// New arrivals for the home page.
pub fn new_arrivals(catalog: &[Product], limit: usize) -> Vec<&Product> {
    collect_where(catalog, limit, |p| p.is_new)
}

/// Marked-down products for the home page.
pub fn on_sale(catalog: &[Product], limit: usize) -> Vec<&Product> {
    collect_where(catalog, limit, |p| p.on_sale)
}

fn collect_where(catalog: &[Product], limit: usize, pred: impl Fn(&Product) -> bool) -> Vec<&Product> {
    catalog.iter().filter(|p| pred(p)).take(limit).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;
    use crate::search::FilterState;

    fn product(id: i64, name: &str, cents: i64) -> Product {
        Product::new(id, name, Money::usd(cents))
            .with_brand("Acme")
            .with_category("Electronics", Some("Audio"))
            .with_stock(1)
    }

    fn ids(products: &[&Product]) -> Vec<i64> {
        products.iter().map(|p| p.id.get()).collect()
    }

    #[test]
    fn test_blank_text_excludes_nothing() {
        let catalog = vec![product(1, "A", 100), product(2, "B", 200)];
        let query = SearchQuery::new().with_text("   ");
        assert_eq!(evaluate_refs(&catalog, &query).len(), 2);
    }

    #[test]
    fn test_text_matches_tags() {
        let mut tagged = product(2, "B", 200);
        tagged.tags = vec!["Wireless".into()];
        let catalog = vec![product(1, "A", 100), tagged];

        let query = SearchQuery::new().with_text("WIRE");
        assert_eq!(ids(&evaluate_refs(&catalog, &query)), vec![2]);
    }

    #[test]
    fn test_sorts_are_stable() {
        let catalog = vec![
            product(1, "A", 500).with_rating(4.0, 10),
            product(2, "B", 100).with_rating(4.5, 10),
            product(3, "C", 500).with_rating(4.0, 30),
        ];
        let run = |sort| ids(&evaluate_refs(&catalog, &SearchQuery::new().with_sort(sort)));

        assert_eq!(run(SortOption::Relevance), vec![1, 2, 3]);
        assert_eq!(run(SortOption::PriceAsc), vec![2, 1, 3]);
        assert_eq!(run(SortOption::PriceDesc), vec![1, 3, 2]);
        assert_eq!(run(SortOption::Rating), vec![2, 1, 3]);
        assert_eq!(run(SortOption::BestSelling), vec![3, 1, 2]);
    }

    #[test]
    fn test_has_active_filters_counts_raw_text() {
        assert!(!has_active_filters(&SearchQuery::new()));
        assert!(has_active_filters(&SearchQuery::new().with_text("x")));
        let sorted_only = SearchQuery::new().with_sort(SortOption::Rating);
        assert!(!has_active_filters(&sorted_only));
        let filtered = SearchQuery::new().with_filters(FilterState::new().in_stock_only());
        assert!(has_active_filters(&filtered));
    }

    #[test]
    fn test_search_outcome() {
        let catalog = vec![product(1, "Speaker", 100), product(2, "Camera", 200)];
        let outcome = search(&catalog, &SearchQuery::new().with_text("speaker"));
        assert_eq!(outcome.total, 1);
        assert!(outcome.has_active_filters);
        assert_eq!(outcome.products[0].id.get(), 1);
    }

    #[test]
    fn test_quick_search_limit() {
        let catalog: Vec<Product> = (1..=8).map(|i| product(i, "Earbuds", 100)).collect();
        assert_eq!(quick_search(&catalog, "ear", 5).len(), 5);
        assert!(quick_search(&catalog, "  ", 5).is_empty());
    }

    #[test]
    fn test_related_products() {
        let target = product(1, "Headphones", 100);
        let catalog = vec![
            target.clone(),
            product(2, "Earbuds", 100),
            product(3, "Blender", 100).with_category("Home", Some("Appliances")),
            product(4, "Soundbar", 100).with_category("Home", Some("Audio")),
        ];
        assert_eq!(ids(&related_products(&catalog, &target, 4)), vec![2, 4]);
        assert_eq!(ids(&related_products(&catalog, &target, 1)), vec![2]);
    }

    #[test]
    fn test_related_products_ignores_shared_missing_subcategory() {
        let target = product(1, "Lamp", 100).with_category("Home", None);
        let catalog = vec![
            target.clone(),
            product(2, "Watch", 100).with_category("Fashion", None),
        ];
        assert!(related_products(&catalog, &target, 4).is_empty());
    }

    #[test]
    fn test_home_collections() {
        let mut a = product(1, "A", 100);
        a.is_featured = true;
        let mut b = product(2, "B", 100);
        b.is_new = true;
        b.on_sale = true;
        let catalog = vec![a, b];

        assert_eq!(ids(&featured(&catalog, 4)), vec![1]);
        assert_eq!(ids(&new_arrivals(&catalog, 4)), vec![2]);
        assert_eq!(ids(&on_sale(&catalog, 4)), vec![2]);
    }
}
