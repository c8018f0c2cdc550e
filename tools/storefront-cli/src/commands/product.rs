//! Show a single product.

use anyhow::{Context as _, Result};
use serde::Serialize;
use storefront_commerce::search::related_products;
use storefront_commerce::{CommerceError, Product, ProductId};

use super::ProductArgs;
use crate::context::Context;
use crate::output::{price_label, stars};

#[derive(Serialize)]
struct ProductReport<'a> {
    product: &'a Product,
    related: Vec<&'a Product>,
}

/// Find a product in a loaded catalog.
pub fn find_product(catalog: &[Product], id: ProductId) -> Result<&Product> {
    catalog
        .iter()
        .find(|p| p.id == id)
        .ok_or(CommerceError::ProductNotFound(id))
        .context("Check the id with `storefront search`")
}

/// Run the product command.
pub async fn run(args: ProductArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.load_catalog().await?;
    let product = find_product(&catalog, ProductId::new(args.id))?;
    let related = related_products(&catalog, product, args.related);

    if ctx.output.is_json() {
        ctx.output.json(&ProductReport { product, related });
        return Ok(());
    }

    ctx.output.header(&product.name);
    ctx.output.kv("Price", &price_label(product));
    if let Some(pct) = product.sale_percentage.filter(|_| product.on_sale) {
        ctx.output.kv("Sale", &format!("{}% off", pct));
    }
    ctx.output.kv(
        "Rating",
        &format!("{} ({} reviews)", stars(product.rating), product.review_count),
    );
    ctx.output.kv("Brand", &product.brand);
    let category = match &product.subcategory {
        Some(sub) => format!("{} / {}", product.category, sub),
        None => product.category.clone(),
    };
    ctx.output.kv("Category", &category);
    ctx.output.kv("SKU", &product.sku);
    let availability = if product.is_in_stock() {
        format!("In stock ({})", product.stock)
    } else {
        "Out of stock".to_string()
    };
    ctx.output.kv("Availability", &availability);
    if !product.tags.is_empty() {
        ctx.output.kv("Tags", &product.tags.join(", "));
    }
    if !product.description.is_empty() {
        ctx.output.info("");
        ctx.output.info(&product.description);
    }

    if product.has_variants() {
        ctx.output.header("Options");
        for variant in &product.variants {
            let stock = if variant.is_in_stock() {
                format!("{} in stock", variant.stock)
            } else {
                "out of stock".to_string()
            };
            ctx.output.list_item(&format!(
                "{} [{}] {} ({})",
                variant.name,
                variant.id,
                variant.price.display(),
                stock
            ));
        }
    }

    if let Some(image) = product.primary_image() {
        ctx.output.debug(&format!("Image: {}", image));
    }

    if !related.is_empty() {
        ctx.output.header("You may also like");
        for p in related {
            ctx.output.product_row(p);
        }
    }

    Ok(())
}
