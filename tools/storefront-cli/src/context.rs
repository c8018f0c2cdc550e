//! CLI execution context.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context as _, Result};
use storefront_cache::FileStore;
use storefront_commerce::Product;
use storefront_data::{CatalogLoader, CatalogSource, LoadedCatalog, RestRepository};

use crate::config::{CliConfig, CONFIG_FILE_NAMES};
use crate::output::Output;

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration, with environment overrides applied.
    pub config: CliConfig,
    /// File the configuration was read from, if any.
    pub config_path: Option<PathBuf>,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (config, config_path) = if let Some(path) = config_path {
            (CliConfig::load(path)?, Some(PathBuf::from(path)))
        } else {
            // Try to find config in current directory or parent directories
            match Self::find_config(&cwd) {
                Some((config, path)) => (config, Some(path)),
                None => (CliConfig::default(), None),
            }
        };

        tracing::debug!(path = ?config_path, "configuration loaded");

        Ok(Self {
            config: config.with_env_overrides(),
            config_path,
            output,
            cwd,
        })
    }

    /// Find config file in directory tree.
    fn find_config(start: &Path) -> Option<(CliConfig, PathBuf)> {
        let mut current = start.to_path_buf();
        loop {
            for name in &CONFIG_FILE_NAMES {
                let config_path = current.join(name);
                if config_path.exists() {
                    if let Ok(config) = CliConfig::load(config_path.to_str()?) {
                        return Some((config, config_path));
                    }
                }
            }

            if !current.pop() {
                break;
            }
        }

        None
    }

    /// Resolve a path relative to the working directory.
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        if Path::new(path).is_absolute() {
            PathBuf::from(path)
        } else {
            self.cwd.join(path)
        }
    }

    /// Store holding the persisted cart and wishlist.
    pub fn file_store(&self) -> FileStore {
        FileStore::new(self.resolve_path(&self.config.storage.dir))
    }

    /// HTTP repository, or `None` when credentials are missing or
    /// placeholders.
    pub fn rest_repository(&self) -> Result<Option<RestRepository>> {
        let repo = &self.config.repository;
        if !repo.is_configured() {
            return Ok(None);
        }
        let rest = RestRepository::new(&repo.url, &repo.anon_key, &repo.timeouts())
            .context("Failed to create repository client")?;
        Ok(Some(rest))
    }

    /// Catalog loader over the configured repository.
    pub fn loader(&self) -> Result<CatalogLoader> {
        let loader = match self.rest_repository()? {
            Some(rest) => CatalogLoader::new(Arc::new(rest)),
            None => CatalogLoader::offline(),
        };
        Ok(loader
            .with_timeout(self.config.repository.timeouts())
            .with_retry(self.config.repository.retry_policy()))
    }

    /// Load the catalog, reporting a fallback without failing.
    pub async fn load_catalog(&self) -> Result<Vec<Product>> {
        let loader = self.loader()?;
        let spinner = self.output.spinner("Loading catalog...");
        let LoadedCatalog { products, source } = loader.load().await;
        spinner.finish_and_clear();

        match source {
            CatalogSource::Remote => {
                self.output.debug(&format!("Loaded {} products from the store", products.len()))
            }
            CatalogSource::Offline => self.output.debug("Repository not configured, using built-in catalog"),
            CatalogSource::Fallback { reason } => self.output.warn(&format!(
                "Could not reach the product store ({}). Showing the built-in catalog.",
                reason
            )),
        }
        Ok(products)
    }
}
