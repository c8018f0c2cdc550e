//! Configuration management commands.

use std::fs;

use anyhow::{bail, Result};
use storefront_data::credentials::{PLACEHOLDER_ANON_KEY, PLACEHOLDER_URL};

use super::{ConfigArgs, ConfigCommand};
use crate::config::generate_default_config;
use crate::context::Context;

/// Run the config command.
pub async fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx),
        ConfigCommand::Init { force } => init_config(force, ctx),
        ConfigCommand::Validate => validate_config(ctx),
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        let mut config = ctx.config.clone();
        config.repository.anon_key = mask(&config.repository.anon_key);
        ctx.output.json(&config);
        return Ok(());
    }

    ctx.output.header("Current Configuration");
    match &ctx.config_path {
        Some(path) => ctx.output.kv("file", &path.display().to_string()),
        None => ctx.output.kv("file", "(defaults)"),
    }

    let repo = &ctx.config.repository;
    ctx.output.info("");
    ctx.output.info("[repository]");
    ctx.output.kv("url", if repo.url.is_empty() { "(unset)" } else { repo.url.as_str() });
    ctx.output.kv("anon_key", &mask(&repo.anon_key));
    ctx.output.kv("timeout_ms", &repo.timeout_ms.to_string());
    ctx.output.kv("max_retries", &repo.max_retries.to_string());
    let source = if repo.is_configured() {
        "hosted store"
    } else {
        "built-in catalog"
    };
    ctx.output.kv("catalog source", source);

    ctx.output.info("");
    ctx.output.info("[storage]");
    ctx.output.kv("dir", &ctx.resolve_path(&ctx.config.storage.dir).display().to_string());

    ctx.output.info("");
    ctx.output.info("[checkout]");
    ctx.output.kv("shipping", &ctx.config.checkout.shipping.to_string());
    ctx.output.kv("tax_rate", &ctx.config.checkout.tax_rate.to_string());

    Ok(())
}

fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let config_path = ctx.cwd.join("storefront.toml");

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    fs::write(&config_path, generate_default_config())?;
    ctx.output.success(&format!("Created: {}", config_path.display()));

    Ok(())
}

fn validate_config(ctx: &Context) -> Result<()> {
    ctx.output.header("Validating configuration");

    let mut errors: Vec<String> = Vec::new();
    let mut warnings: Vec<String> = Vec::new();
    let repo = &ctx.config.repository;

    if repo.url.is_empty() != repo.anon_key.is_empty() {
        warnings.push("repository.url and repository.anon_key must both be set to use the hosted store".to_string());
    }
    if repo.url == PLACEHOLDER_URL || repo.anon_key == PLACEHOLDER_ANON_KEY {
        warnings.push("repository credentials are still the sample placeholders".to_string());
    }
    if !repo.url.is_empty() && !repo.url.starts_with("http://") && !repo.url.starts_with("https://") {
        errors.push(format!("repository.url '{}' must be an http(s) URL", repo.url));
    }
    if repo.timeout_ms == 0 {
        errors.push("repository.timeout_ms must be positive".to_string());
    }

    let checkout = &ctx.config.checkout;
    if !(0.0..1.0).contains(&checkout.tax_rate) {
        errors.push(format!(
            "checkout.tax_rate {} must be a fraction in [0, 1)",
            checkout.tax_rate
        ));
    }
    if checkout.shipping < 0.0 {
        errors.push("checkout.shipping must not be negative".to_string());
    }

    if errors.is_empty() && warnings.is_empty() {
        ctx.output.success("Configuration is valid");
        return Ok(());
    }

    for error in &errors {
        ctx.output.error(&format!("Error: {}", error));
    }

    for warning in &warnings {
        ctx.output.warn(&format!("Warning: {}", warning));
    }

    if !errors.is_empty() {
        bail!("Configuration has {} error(s)", errors.len());
    }

    ctx.output.success("Configuration is valid (with warnings)");

    Ok(())
}

/// Keep the first few characters of a secret.
fn mask(secret: &str) -> String {
    if secret.is_empty() {
        return "(unset)".to_string();
    }
    let shown: String = secret.chars().take(4).collect();
    format!("{}…", shown)
}
