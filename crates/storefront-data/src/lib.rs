//! Product data access for the storefront.
//!
//! This crate provides:
//! - `ProductRepository` / `CatalogWriter` - Read and seed access to the product store
//! - `RestRepository` - Hosted PostgREST-style store over HTTP
//! - `StaticRepository` - In-memory store over the baked-in catalog
//! - `CatalogLoader` - Timeout, retry and fallback around catalog retrieval
//! - `seed` - Populating an empty store
//! - `TimeoutConfig` / `RetryPolicy` - Fetch policies

pub mod catalog;
pub mod credentials;
mod error;
mod loader;
mod repository;
mod rest;
mod retry;
pub mod rows;
pub mod seed;
mod static_repo;
mod timeout;
pub mod transform;

pub use credentials::has_valid_credentials;
pub use error::RepositoryError;
pub use loader::*;
pub use repository::*;
pub use rest::*;
pub use retry::*;
pub use seed::{products_exist, seed_products, seed_products_with_progress, SeedReport};
pub use static_repo::StaticRepository;
pub use timeout::*;
