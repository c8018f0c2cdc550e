//! Flat string-keyed parameter codec for search state.
//!
//! Mirrors the listing page's URL: `search`, `category`, `subcategory`,
//! `minPrice`, `maxPrice`, `brands` (comma-joined), `inStock`, `minRating`,
//! `sortBy` and `view`. Unset fields and default values are omitted on
//! encode. Decoding never fails: unknown keys are ignored and malformed
//! values fall back to their defaults.

use std::borrow::Cow;

use crate::money::{Currency, Money};
use crate::search::{SearchQuery, SortOption, ViewMode};

pub const SEARCH: &str = "search";
pub const CATEGORY: &str = "category";
pub const SUBCATEGORY: &str = "subcategory";
pub const MIN_PRICE: &str = "minPrice";
pub const MAX_PRICE: &str = "maxPrice";
pub const BRANDS: &str = "brands";
pub const IN_STOCK: &str = "inStock";
pub const MIN_RATING: &str = "minRating";
pub const SORT_BY: &str = "sortBy";
pub const VIEW: &str = "view";

/// Encode a query as ordered key/value pairs.
pub fn encode(query: &SearchQuery) -> Vec<(&'static str, String)> {
    let f = &query.filters;
    let mut params = Vec::new();

    if !query.search_text.is_empty() {
        params.push((SEARCH, query.search_text.clone()));
    }
    if let Some(category) = f.category() {
        params.push((CATEGORY, category.to_string()));
    }
    if let Some(subcategory) = f.subcategory() {
        params.push((SUBCATEGORY, subcategory.to_string()));
    }
    if let Some(min) = f.min_price {
        params.push((MIN_PRICE, min.to_param()));
    }
    if let Some(max) = f.max_price {
        params.push((MAX_PRICE, max.to_param()));
    }
    let brands: Vec<String> = f
        .brands
        .iter()
        .filter(|b| !b.is_empty())
        .map(|b| escape_brand(b))
        .collect();
    if !brands.is_empty() {
        params.push((BRANDS, brands.join(",")));
    }
    if f.in_stock {
        params.push((IN_STOCK, "true".to_string()));
    }
    if let Some(rating) = f.min_rating {
        params.push((MIN_RATING, rating.to_string()));
    }
    if f.sort_by != SortOption::default() {
        params.push((SORT_BY, f.sort_by.as_str().to_string()));
    }
    if f.view != ViewMode::default() {
        params.push((VIEW, f.view.as_str().to_string()));
    }
    params
}

/// Decode key/value pairs into a query. The first occurrence of a key wins.
pub fn decode<I, K, V>(pairs: I) -> SearchQuery
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut seen: Vec<String> = Vec::new();
    let mut query = SearchQuery::new();
    let f = &mut query.filters;

    for (key, value) in pairs {
        let (key, value) = (key.as_ref(), value.as_ref());
        if seen.iter().any(|k| k == key) {
            continue;
        }
        seen.push(key.to_string());

        match key {
            SEARCH => query.search_text = value.to_string(),
            CATEGORY => f.category = non_empty(value),
            SUBCATEGORY => f.subcategory = non_empty(value),
            // Sub-cent bounds round inward so the inclusive comparison holds.
            MIN_PRICE => {
                f.min_price =
                    Money::parse_decimal_with(value, Currency::default(), Money::from_decimal_ceil)
            }
            MAX_PRICE => {
                f.max_price =
                    Money::parse_decimal_with(value, Currency::default(), Money::from_decimal_floor)
            }
            BRANDS => {
                f.brands = value
                    .split(',')
                    .filter(|b| !b.is_empty())
                    .map(unescape_brand)
                    .collect()
            }
            IN_STOCK => f.in_stock = value == "true",
            MIN_RATING => {
                f.min_rating = value.trim().parse::<f64>().ok().filter(|r| r.is_finite())
            }
            SORT_BY => f.sort_by = SortOption::parse(value).unwrap_or_default(),
            VIEW => f.view = ViewMode::parse(value).unwrap_or_default(),
            _ => {}
        }
    }
    query
}

/// Encode as a percent-encoded query string without the leading `?`.
pub fn to_query_string(query: &SearchQuery) -> String {
    encode(query)
        .iter()
        .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&")
}

/// Decode a query string, with or without the leading `?`.
pub fn from_query_string(input: &str) -> SearchQuery {
    let input = input.strip_prefix('?').unwrap_or(input);
    let pairs = input
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let (k, v) = pair.split_once('=').unwrap_or((pair, ""));
            (unescape(k), unescape(v))
        });
    decode(pairs)
}

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

/// Brands are comma-joined, so a comma inside a name (and the escape
/// character itself) is percent-escaped first.
fn escape_brand(brand: &str) -> String {
    brand.replace('%', "%25").replace(',', "%2C")
}

fn unescape_brand(segment: &str) -> String {
    if !segment.contains('%') {
        return segment.to_string();
    }
    match urlencoding::decode(segment) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => segment.to_string(),
    }
}

fn unescape(raw: &str) -> String {
    let spaced: Cow<'_, str> = if raw.contains('+') {
        Cow::Owned(raw.replace('+', " "))
    } else {
        Cow::Borrowed(raw)
    };
    match urlencoding::decode(&spaced) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => spaced.into_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::FilterState;

    #[test]
    fn test_default_query_encodes_to_nothing() {
        assert!(encode(&SearchQuery::new()).is_empty());
        assert_eq!(to_query_string(&SearchQuery::new()), "");
    }

    #[test]
    fn test_encode_omits_defaults_and_formats_prices() {
        let query = SearchQuery::new().with_filters(
            FilterState::new()
                .with_price_range(Some(Money::usd(10000)), Some(Money::usd(9950)))
                .with_sort(SortOption::Relevance),
        );
        let params = encode(&query);
        assert_eq!(
            params,
            vec![(MIN_PRICE, "100".to_string()), (MAX_PRICE, "99.50".to_string())]
        );
    }

    #[test]
    fn test_decode_is_tolerant() {
        let query = decode([
            ("minPrice", "abc"),
            ("minRating", "four"),
            ("sortBy", "cheapest"),
            ("view", "table"),
            ("brands", ",AudioTech,,TechGiant,"),
            ("utm_source", "mail"),
            ("inStock", "yes"),
        ]);
        let f = &query.filters;
        assert_eq!(f.min_price, None);
        assert_eq!(f.min_rating, None);
        assert_eq!(f.sort_by, SortOption::Relevance);
        assert_eq!(f.view, ViewMode::Grid);
        assert_eq!(f.brands, vec!["AudioTech".to_string(), "TechGiant".to_string()]);
        assert!(!f.in_stock);
    }

    #[test]
    fn test_sub_cent_price_bounds_round_inward() {
        let query = from_query_string("minPrice=49.991&maxPrice=99.996");
        assert_eq!(query.filters.min_price, Some(Money::usd(5000)));
        assert_eq!(query.filters.max_price, Some(Money::usd(9999)));

        let tv = crate::catalog::Product::new(2, "4K Smart TV", Money::usd(10000));
        assert!(!query.filters.matches(&tv));
        let exact = from_query_string("maxPrice=100");
        assert!(exact.filters.matches(&tv));
    }

    #[test]
    fn test_empty_values_round_trip() {
        let query = SearchQuery::new().with_filters(
            FilterState::new()
                .with_category("")
                .with_subcategory("")
                .with_brands(["", "AudioTech"]),
        );
        let back = from_query_string(&to_query_string(&query));
        assert_eq!(back, query);
        assert_eq!(back.filters.category, None);
        assert_eq!(back.filters.brands, vec!["AudioTech".to_string()]);

        // An empty category set directly is neither encoded nor active.
        let mut raw = SearchQuery::new();
        raw.filters.category = Some(String::new());
        assert_eq!(to_query_string(&raw), "");
        assert!(!crate::search::has_active_filters(&raw));
    }

    #[test]
    fn test_brand_with_comma_round_trips() {
        let query = SearchQuery::new().with_filters(FilterState::new().with_brands([
            "Smith, Sons & Co",
            "100% Audio",
            "TechGiant",
        ]));
        let back = from_query_string(&to_query_string(&query));
        assert_eq!(back, query);
        assert_eq!(back.filters.brands.len(), 3);
    }

    #[test]
    fn test_first_occurrence_wins() {
        let query = decode([("category", "Home"), ("category", "Electronics")]);
        assert_eq!(query.filters.category.as_deref(), Some("Home"));
    }

    #[test]
    fn test_query_string_percent_encoding() {
        let query = SearchQuery::new()
            .with_text("4k tv & sound")
            .with_filters(FilterState::new().with_subcategory("Smart Home"));
        let qs = to_query_string(&query);
        assert_eq!(qs, "search=4k%20tv%20%26%20sound&subcategory=Smart%20Home");
        assert_eq!(from_query_string(&format!("?{}", qs)), query);
    }

    #[test]
    fn test_from_query_string_plus_is_space() {
        let query = from_query_string("search=wireless+headphones&sortBy=price-desc");
        assert_eq!(query.search_text, "wireless headphones");
        assert_eq!(query.filters.sort_by, SortOption::PriceDesc);
    }

    #[test]
    fn test_reset_keeps_sort_and_view_only() {
        let mut query = from_query_string("search=tv&category=Electronics&sortBy=rating&view=list");
        query.reset();
        assert_eq!(to_query_string(&query), "sortBy=rating&view=list");
    }
}
