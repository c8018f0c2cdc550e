//! CLI command implementations.

pub mod cart;
pub mod config;
pub mod home;
pub mod product;
pub mod search;
pub mod seed;
pub mod wishlist;

use clap::{Args, Subcommand};

/// Arguments for the search command.
#[derive(Args)]
pub struct SearchArgs {
    /// Listing URL query, e.g. "category=Electronics&brands=AudioTech&sortBy=price-asc".
    /// Flags below override its values.
    pub query: Option<String>,

    /// Free-text search.
    #[arg(short, long)]
    pub text: Option<String>,

    /// Category name.
    #[arg(short, long)]
    pub category: Option<String>,

    /// Subcategory name.
    #[arg(long)]
    pub subcategory: Option<String>,

    /// Minimum price in dollars.
    #[arg(long)]
    pub min_price: Option<f64>,

    /// Maximum price in dollars.
    #[arg(long)]
    pub max_price: Option<f64>,

    /// Brand to include (repeatable).
    #[arg(short, long = "brand")]
    pub brands: Vec<String>,

    /// Only products in stock.
    #[arg(long)]
    pub in_stock: bool,

    /// Minimum rating.
    #[arg(long)]
    pub min_rating: Option<f64>,

    /// Sort order: relevance, price-asc, price-desc, rating, newest, best-selling.
    #[arg(short, long)]
    pub sort: Option<String>,

    /// Listing layout: grid or list.
    #[arg(long)]
    pub view: Option<String>,

    /// Show at most N products.
    #[arg(short, long)]
    pub limit: Option<usize>,

    /// Show category, brand and rating facets.
    #[arg(long)]
    pub facets: bool,
}

/// Arguments for the product command.
#[derive(Args)]
pub struct ProductArgs {
    /// Product ID.
    pub id: i64,

    /// Number of related products to show.
    #[arg(long, default_value = "4")]
    pub related: usize,
}

/// Arguments for the home command.
#[derive(Args)]
pub struct HomeArgs {
    /// Products per collection.
    #[arg(short, long, default_value = "4")]
    pub limit: usize,
}

/// Arguments for the cart command.
#[derive(Args)]
pub struct CartArgs {
    #[command(subcommand)]
    pub command: Option<CartCommand>,
}

#[derive(Subcommand)]
pub enum CartCommand {
    /// Show the cart with an order summary.
    Show {
        /// Price with express shipping.
        #[arg(long)]
        express: bool,
    },
    /// Add a product.
    Add {
        /// Product ID.
        product: i64,
        /// Variant ID.
        #[arg(short, long)]
        variant: Option<i64>,
        /// Quantity to add.
        #[arg(short, long, default_value = "1")]
        quantity: i64,
    },
    /// Set a line's quantity (0 removes it).
    Set {
        /// Product ID.
        product: i64,
        /// New quantity.
        quantity: i64,
        /// Variant ID.
        #[arg(short, long)]
        variant: Option<i64>,
    },
    /// Remove a line.
    Remove {
        /// Product ID.
        product: i64,
        /// Variant ID.
        #[arg(short, long)]
        variant: Option<i64>,
    },
    /// Empty the cart.
    Clear {
        /// Skip confirmation.
        #[arg(short, long)]
        yes: bool,
    },
}

/// Arguments for the wishlist command.
#[derive(Args)]
pub struct WishlistArgs {
    #[command(subcommand)]
    pub command: Option<WishlistCommand>,
}

#[derive(Subcommand)]
pub enum WishlistCommand {
    /// List saved products.
    Show,
    /// Save a product.
    Add {
        /// Product ID.
        product: i64,
    },
    /// Remove a saved product.
    Remove {
        /// Product ID.
        product: i64,
    },
    /// Save a product, or remove it if already saved.
    Toggle {
        /// Product ID.
        product: i64,
    },
    /// Remove every saved product.
    Clear,
}

/// Arguments for the seed command.
#[derive(Args)]
pub struct SeedArgs {
    /// Seed even if the store already holds products.
    #[arg(short, long)]
    pub force: bool,

    /// Skip confirmation prompt.
    #[arg(short, long)]
    pub yes: bool,

    /// Dry run (report what would be inserted).
    #[arg(long)]
    pub dry_run: bool,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
    /// Validate the configuration.
    Validate,
}
