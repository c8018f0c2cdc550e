//! Manage the persisted cart.

use anyhow::{Context as _, Result};
use dialoguer::Confirm;
use serde::Serialize;
use storefront_cache::FileStore;
use storefront_commerce::{Cart, CartStore, OrderSummary, ProductId, VariantId};

use super::product::find_product;
use super::{CartArgs, CartCommand};
use crate::context::Context;

#[derive(Serialize)]
struct CartReport<'a> {
    items: &'a Cart,
    summary: OrderSummary,
}

/// Run the cart command.
pub async fn run(args: CartArgs, ctx: &Context) -> Result<()> {
    let mut store = CartStore::open(ctx.file_store());

    match args.command.unwrap_or(CartCommand::Show { express: false }) {
        CartCommand::Show { express } => show_cart(store.cart(), express, ctx),
        CartCommand::Add {
            product,
            variant,
            quantity,
        } => add_item(&mut store, product, variant, quantity, ctx).await,
        CartCommand::Set {
            product,
            quantity,
            variant,
        } => {
            let found = store
                .set_quantity(ProductId::new(product), variant.map(VariantId::new), quantity)
                .context("Failed to update quantity")?;
            if !found {
                ctx.output.warn(&format!("Product {} is not in the cart", product));
            } else if quantity <= 0 {
                ctx.output.success("Removed from cart");
            } else {
                ctx.output.success(&format!("Quantity set to {}", quantity));
            }
            show_cart(store.cart(), false, ctx)
        }
        CartCommand::Remove { product, variant } => {
            if store.remove_item(ProductId::new(product), variant.map(VariantId::new)) {
                ctx.output.success("Removed from cart");
            } else {
                ctx.output.warn(&format!("Product {} is not in the cart", product));
            }
            show_cart(store.cart(), false, ctx)
        }
        CartCommand::Clear { yes } => {
            if store.cart().is_empty() {
                ctx.output.info("Your cart is already empty");
                return Ok(());
            }
            if !yes && !ctx.output.is_json() {
                let confirmed = Confirm::new()
                    .with_prompt("Remove every item from the cart?")
                    .default(false)
                    .interact()?;
                if !confirmed {
                    ctx.output.warn("Cart left unchanged");
                    return Ok(());
                }
            }
            store.clear();
            ctx.output.success("Cart cleared");
            Ok(())
        }
    }
}

async fn add_item(
    store: &mut CartStore<FileStore>,
    product_id: i64,
    variant: Option<i64>,
    quantity: i64,
    ctx: &Context,
) -> Result<()> {
    let catalog = ctx.load_catalog().await?;
    let product = find_product(&catalog, ProductId::new(product_id))?;
    let key = store
        .add_item(product, quantity, variant.map(VariantId::new))
        .with_context(|| format!("Could not add {} to the cart", product.name))?;

    let line = store.cart().get(key);
    let name = line.map(|l| l.display_name()).unwrap_or_else(|| product.name.clone());
    ctx.output.success(&format!("Added {} x {} to cart", quantity, name));
    if let Some(line) = line {
        ctx.output.kv("Now in cart", &line.quantity.to_string());
    }
    show_cart(store.cart(), false, ctx)
}

fn show_cart(cart: &Cart, express: bool, ctx: &Context) -> Result<()> {
    let rates = ctx.config.checkout.rates(express);
    let summary = OrderSummary::for_cart(cart, &rates).context("Failed to price the cart")?;

    if ctx.output.is_json() {
        ctx.output.json(&CartReport {
            items: cart,
            summary,
        });
        return Ok(());
    }

    ctx.output.header("Shopping Cart");
    if cart.is_empty() {
        ctx.output.info("Your cart is empty");
        return Ok(());
    }

    for item in cart.items() {
        let total = item
            .line_total()
            .map(|m| m.display())
            .unwrap_or_else(|_| "-".to_string());
        ctx.output.table_row(
            &[
                &item.product.id.to_string(),
                &item.display_name(),
                &format!("{} x {}", item.quantity, item.unit_price().display()),
                &total,
            ],
            &[4, 40, 18, 12],
        );
    }

    ctx.output.header("Order Summary");
    ctx.output.kv(
        &format!("Subtotal ({} items)", summary.item_count),
        &summary.subtotal.display(),
    );
    let delivery = rates
        .shipping
        .delivery_estimate()
        .map(|d| format!(", {}", d))
        .unwrap_or_default();
    ctx.output.kv(
        "Shipping",
        &format!("{} ({}{})", summary.shipping.display(), rates.shipping.name, delivery),
    );
    ctx.output.kv("Tax", &summary.tax.display());
    ctx.output.kv("Total", &summary.total.display());

    Ok(())
}
