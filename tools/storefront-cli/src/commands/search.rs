//! Search and filter the catalog.

use anyhow::{anyhow, Result};
use serde::Serialize;
use storefront_commerce::search::{params, search, Facets, SearchOutcome, SearchQuery, SortOption, ViewMode};
use storefront_commerce::{Currency, Money, Product};

use super::SearchArgs;
use crate::context::Context;
use crate::output::{price_label, stars};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SearchReport<'a> {
    query: String,
    #[serde(flatten)]
    outcome: &'a SearchOutcome,
    #[serde(skip_serializing_if = "Option::is_none")]
    facets: Option<Facets>,
}

/// Run the search command.
pub async fn run(args: SearchArgs, ctx: &Context) -> Result<()> {
    let query = build_query(&args)?;
    let catalog = ctx.load_catalog().await?;
    let mut outcome = search(&catalog, &query);
    let facets = args
        .facets
        .then(|| Facets::from_products(outcome.products.iter(), &query.filters));
    if let Some(limit) = args.limit {
        outcome.products.truncate(limit);
    }

    if ctx.output.is_json() {
        ctx.output.json(&SearchReport {
            query: params::to_query_string(&query),
            outcome: &outcome,
            facets,
        });
        return Ok(());
    }

    let title = match query.normalized_text() {
        Some(_) => format!("Results for \"{}\"", query.search_text.trim()),
        None => "All Products".to_string(),
    };
    ctx.output.header(&title);
    ctx.output.kv("Matches", &outcome.total.to_string());
    ctx.output.kv("Sort", query.filters.sort_by.display_name());
    if outcome.has_active_filters {
        ctx.output.kv("Query", &format!("?{}", params::to_query_string(&query)));
    }

    if outcome.products.is_empty() {
        ctx.output.info("");
        ctx.output.info("No products match these filters. Try removing some of them.");
        return Ok(());
    }

    ctx.output.info("");
    match query.filters.view {
        ViewMode::Grid => {
            for product in &outcome.products {
                ctx.output.product_row(product);
            }
        }
        ViewMode::List => {
            for product in &outcome.products {
                print_list_entry(ctx, product);
            }
        }
    }

    if outcome.products.len() < outcome.total {
        ctx.output.info(&format!(
            "Showing {} of {} products",
            outcome.products.len(),
            outcome.total
        ));
    }

    if let Some(facets) = facets {
        for facet in facets.iter() {
            ctx.output.header(&facet.name);
            for value in &facet.values {
                let marker = if value.selected { "*" } else { " " };
                let label = if facet.field == params::MIN_RATING {
                    format!("{}+ stars", value.value)
                } else {
                    value.value.clone()
                };
                ctx.output.list_item(&format!("{}{} ({})", marker, label, value.count));
            }
        }
    }

    Ok(())
}

fn print_list_entry(ctx: &Context, product: &Product) {
    ctx.output.info(&format!("#{} {}", product.id, product.name));
    ctx.output.kv("Price", &price_label(product));
    ctx.output.kv(
        "Rating",
        &format!("{} ({} reviews)", stars(product.rating), product.review_count),
    );
    ctx.output.kv("Brand", &product.brand);
    if !product.description.is_empty() {
        ctx.output.kv("About", &product.description);
    }
}

/// Combine the positional query string with flag overrides.
fn build_query(args: &SearchArgs) -> Result<SearchQuery> {
    let mut query = args
        .query
        .as_deref()
        .map(params::from_query_string)
        .unwrap_or_default();
    if let Some(text) = &args.text {
        query.search_text = text.clone();
    }

    let filters = &mut query.filters;
    if let Some(category) = &args.category {
        filters.category = Some(category.clone()).filter(|c| !c.is_empty());
    }
    if let Some(subcategory) = &args.subcategory {
        filters.subcategory = Some(subcategory.clone()).filter(|s| !s.is_empty());
    }
    // Bounds round inward to the cent.
    if let Some(min) = args.min_price {
        filters.min_price = Some(Money::from_decimal_ceil(min, Currency::USD));
    }
    if let Some(max) = args.max_price {
        filters.max_price = Some(Money::from_decimal_floor(max, Currency::USD));
    }
    if !args.brands.is_empty() {
        filters.brands = args.brands.iter().filter(|b| !b.is_empty()).cloned().collect();
    }
    if args.in_stock {
        filters.in_stock = true;
    }
    if let Some(rating) = args.min_rating {
        filters.min_rating = Some(rating);
    }
    if let Some(sort) = &args.sort {
        filters.sort_by = SortOption::parse(sort).ok_or_else(|| {
            let options: Vec<&str> = SortOption::ALL.iter().map(|s| s.as_str()).collect();
            anyhow!("Unknown sort '{}'. Available: {}", sort, options.join(", "))
        })?;
    }
    if let Some(view) = &args.view {
        filters.view =
            ViewMode::parse(view).ok_or_else(|| anyhow!("Unknown view '{}'. Available: grid, list", view))?;
    }

    Ok(query)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(query: Option<&str>) -> SearchArgs {
        SearchArgs {
            query: query.map(str::to_string),
            text: None,
            category: None,
            subcategory: None,
            min_price: None,
            max_price: None,
            brands: Vec::new(),
            in_stock: false,
            min_rating: None,
            sort: None,
            view: None,
            limit: None,
            facets: false,
        }
    }

    #[test]
    fn test_flags_override_query_string() {
        let mut a = args(Some("?category=Home&brands=BrewMaster&sortBy=rating"));
        a.category = Some("Electronics".into());
        a.min_price = Some(99.5);

        let query = build_query(&a).unwrap();
        assert_eq!(query.filters.category.as_deref(), Some("Electronics"));
        assert_eq!(query.filters.brands, vec!["BrewMaster"]);
        assert_eq!(query.filters.sort_by, SortOption::Rating);
        assert_eq!(query.filters.min_price, Some(Money::usd(9950)));
    }

    #[test]
    fn test_price_flags_round_inward_and_empty_names_clear() {
        let mut a = args(Some("category=Home"));
        a.category = Some(String::new());
        a.min_price = Some(10.001);
        a.max_price = Some(99.996);

        let query = build_query(&a).unwrap();
        assert_eq!(query.filters.category, None);
        assert_eq!(query.filters.min_price, Some(Money::usd(1001)));
        assert_eq!(query.filters.max_price, Some(Money::usd(9999)));
    }

    #[test]
    fn test_unknown_sort_flag_is_an_error() {
        let mut a = args(None);
        a.sort = Some("cheapest".into());
        assert!(build_query(&a).is_err());
    }

    #[test]
    fn test_no_arguments_is_empty_query() {
        assert_eq!(build_query(&args(None)).unwrap(), SearchQuery::new());
    }
}
