//! Catalog loading with timeout, retry and fallback.

use std::sync::Arc;

use storefront_commerce::Product;
use tracing::{debug, warn};

use crate::catalog;
use crate::repository::ProductRepository;
use crate::retry::RetryPolicy;
use crate::timeout::TimeoutConfig;
use crate::RepositoryError;

/// Where a loaded catalog came from.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogSource {
    /// The primary repository answered. An empty answer still counts.
    Remote,
    /// No primary repository is configured.
    Offline,
    /// The primary repository failed and the fallback catalog was served.
    Fallback {
        /// Last error seen, for a non-blocking notice.
        reason: String,
    },
}

impl CatalogSource {
    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback { .. })
    }
}

/// A catalog together with its source.
#[derive(Debug, Clone)]
pub struct LoadedCatalog {
    pub products: Vec<Product>,
    pub source: CatalogSource,
}

/// Loads the full catalog from a primary repository, falling back to a
/// static catalog when every attempt fails.
pub struct CatalogLoader {
    primary: Option<Arc<dyn ProductRepository>>,
    fallback: Vec<Product>,
    timeout: TimeoutConfig,
    retry: RetryPolicy,
}

impl CatalogLoader {
    /// Loader over `primary` with the baked-in catalog as fallback.
    pub fn new(primary: Arc<dyn ProductRepository>) -> Self {
        Self {
            primary: Some(primary),
            fallback: catalog::products(),
            timeout: TimeoutConfig::default(),
            retry: RetryPolicy::default(),
        }
    }

    /// Loader that always serves the fallback catalog.
    pub fn offline() -> Self {
        Self {
            primary: None,
            fallback: catalog::products(),
            timeout: TimeoutConfig::default(),
            retry: RetryPolicy::default(),
        }
    }

    pub fn with_timeout(mut self, timeout: TimeoutConfig) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    pub fn with_fallback(mut self, products: Vec<Product>) -> Self {
        self.fallback = products;
        self
    }

    /// Load the catalog. Never fails.
    pub async fn load(&self) -> LoadedCatalog {
        let Some(primary) = &self.primary else {
            return LoadedCatalog {
                products: self.fallback.clone(),
                source: CatalogSource::Offline,
            };
        };

        match self.fetch(primary.as_ref()).await {
            Ok(products) => {
                debug!(products = products.len(), "catalog loaded from repository");
                LoadedCatalog {
                    products,
                    source: CatalogSource::Remote,
                }
            }
            Err(e) => {
                warn!(error = %e, fallback = self.fallback.len(), "catalog fetch failed, serving fallback catalog");
                LoadedCatalog {
                    products: self.fallback.clone(),
                    source: CatalogSource::Fallback {
                        reason: e.to_string(),
                    },
                }
            }
        }
    }

    async fn fetch(&self, repo: &dyn ProductRepository) -> Result<Vec<Product>, RepositoryError> {
        let mut attempt = 0;
        loop {
            let result = match tokio::time::timeout(self.timeout.attempt, repo.list_all()).await {
                Ok(result) => result,
                Err(_) => Err(RepositoryError::Timeout(self.timeout.attempt)),
            };

            match result {
                Ok(products) => return Ok(products),
                Err(e) if self.retry.should_retry(&e, attempt) => {
                    let delay = self.retry.backoff.delay_for_attempt(attempt);
                    debug!(attempt, error = %e, ?delay, "retrying catalog fetch");
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                Err(e) => return Err(e),
            }
        }
    }
}
