//! Home page collections.

use anyhow::Result;
use serde::Serialize;
use storefront_commerce::search::{featured, new_arrivals, on_sale};
use storefront_commerce::{Brand, CategoryNode, Product};
use storefront_data::catalog;

use super::HomeArgs;
use crate::context::Context;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct HomeReport<'a> {
    featured: Vec<&'a Product>,
    new_arrivals: Vec<&'a Product>,
    on_sale: Vec<&'a Product>,
    categories: Vec<CategoryNode>,
    brands: Vec<Brand>,
    popular_searches: &'static [&'static str],
}

/// Run the home command.
pub async fn run(args: HomeArgs, ctx: &Context) -> Result<()> {
    let products = ctx.load_catalog().await?;
    let report = HomeReport {
        featured: featured(&products, args.limit),
        new_arrivals: new_arrivals(&products, args.limit),
        on_sale: on_sale(&products, args.limit),
        categories: catalog::categories(),
        brands: catalog::brands(),
        popular_searches: &catalog::POPULAR_SEARCHES,
    };

    if ctx.output.is_json() {
        ctx.output.json(&report);
        return Ok(());
    }

    for (title, items) in [
        ("Featured Products", &report.featured),
        ("New Arrivals", &report.new_arrivals),
        ("On Sale", &report.on_sale),
    ] {
        ctx.output.header(title);
        for product in items {
            ctx.output.product_row(product);
        }
    }

    ctx.output.header("Shop by Category");
    for category in &report.categories {
        ctx.output.list_item(&format!(
            "{}: {}",
            category.name,
            category.subcategories.join(", ")
        ));
    }

    ctx.output.header("Featured Brands");
    let names: Vec<&str> = report.brands.iter().map(|b| b.name.as_str()).collect();
    ctx.output.info(&names.join(", "));

    ctx.output.header("Popular Searches");
    ctx.output.info(&report.popular_searches.join(", "));

    Ok(())
}
