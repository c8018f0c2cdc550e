//! Manage the persisted wishlist.

use anyhow::Result;
use storefront_commerce::{ProductId, WishlistStore};

use super::product::find_product;
use super::{WishlistArgs, WishlistCommand};
use crate::context::Context;

/// Run the wishlist command.
pub async fn run(args: WishlistArgs, ctx: &Context) -> Result<()> {
    let mut store = WishlistStore::open(ctx.file_store());
    let catalog = ctx.load_catalog().await?;

    match args.command.unwrap_or(WishlistCommand::Show) {
        WishlistCommand::Show => {}
        WishlistCommand::Add { product } => {
            let product = find_product(&catalog, ProductId::new(product))?;
            if store.add(product.id) {
                ctx.output.success(&format!("Saved {}", product.name));
            } else {
                ctx.output.info(&format!("{} is already saved", product.name));
            }
        }
        WishlistCommand::Remove { product } => {
            if store.remove(ProductId::new(product)) {
                ctx.output.success("Removed from wishlist");
            } else {
                ctx.output.warn(&format!("Product {} is not in the wishlist", product));
            }
        }
        WishlistCommand::Toggle { product } => {
            let product = find_product(&catalog, ProductId::new(product))?;
            if store.toggle(product.id) {
                ctx.output.success(&format!("Saved {}", product.name));
            } else {
                ctx.output.success(&format!("Removed {}", product.name));
            }
        }
        WishlistCommand::Clear => {
            if store.clear() {
                ctx.output.success("Wishlist cleared");
            } else {
                ctx.output.info("Your wishlist is already empty");
            }
        }
    }

    let saved = store.wishlist().products(&catalog);
    if ctx.output.is_json() {
        ctx.output.json(&saved);
        return Ok(());
    }

    ctx.output.header(&format!("Wishlist ({})", saved.len()));
    if saved.is_empty() {
        ctx.output.info("Nothing saved yet");
    }
    for product in &saved {
        ctx.output.product_row(product);
    }
    let missing = store.wishlist().len() - saved.len();
    if missing > 0 {
        ctx.output.debug(&format!("{} saved products are no longer in the catalog", missing));
    }

    Ok(())
}
