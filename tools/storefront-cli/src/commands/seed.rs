//! Seed the hosted product store with the built-in catalog.

use anyhow::{bail, Result};
use dialoguer::Confirm;
use storefront_data::{catalog, products_exist, seed_products_with_progress};

use super::SeedArgs;
use crate::config::{ENV_REPOSITORY_ANON_KEY, ENV_REPOSITORY_URL};
use crate::context::Context;

/// Run the seed command.
pub async fn run(args: SeedArgs, ctx: &Context) -> Result<()> {
    let Some(repo) = ctx.rest_repository()? else {
        bail!(
            "No product store configured. Set repository.url and repository.anon_key, or {} and {}.",
            ENV_REPOSITORY_URL,
            ENV_REPOSITORY_ANON_KEY
        );
    };
    let products = catalog::products();

    ctx.output.header("Seeding product store");
    ctx.output.kv("Store", &ctx.config.repository.url);
    ctx.output.kv("Products", &products.len().to_string());

    let spinner = ctx.output.spinner("Checking for existing products...");
    let exists = products_exist(&repo).await;
    spinner.finish_and_clear();

    if exists && !args.force {
        ctx.output.info("Store already holds products, nothing to do (use --force to seed anyway)");
        return Ok(());
    }

    if args.dry_run {
        let images: usize = products.iter().map(|p| p.images.len()).sum();
        let variants: usize = products.iter().map(|p| p.variants.len()).sum();
        ctx.output.kv("Images", &images.to_string());
        ctx.output.kv("Variants", &variants.to_string());
        ctx.output.success("Dry run completed, nothing was written");
        return Ok(());
    }

    if !args.yes && !ctx.output.is_json() {
        let prompt = if exists {
            "The store already holds products. Insert the catalog again?"
        } else {
            "Insert the built-in catalog?"
        };
        let confirmed = Confirm::new().with_prompt(prompt).default(!exists).interact()?;
        if !confirmed {
            ctx.output.warn("Seeding cancelled");
            return Ok(());
        }
    }

    let pb = ctx.output.progress(products.len() as u64, "Inserting products");
    let report = seed_products_with_progress(&repo, &products, |done, product| {
        pb.set_position(done as u64);
        pb.set_message(product.name.clone());
    })
    .await;
    pb.finish_and_clear();

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({
            "productsInserted": report.products_inserted,
            "productsFailed": report.products_failed,
            "imagesInserted": report.images_inserted,
            "variantsInserted": report.variants_inserted,
            "childRowsFailed": report.child_rows_failed,
        }));
    } else {
        ctx.output.kv("Inserted", &report.products_inserted.to_string());
        ctx.output.kv("Images", &report.images_inserted.to_string());
        ctx.output.kv("Variants", &report.variants_inserted.to_string());
    }

    if report.is_clean() {
        ctx.output.success("Products seeded successfully");
        Ok(())
    } else {
        bail!(
            "{} product(s) and {} image/variant row(s) were rejected, see the log for details",
            report.products_failed,
            report.child_rows_failed
        )
    }
}
