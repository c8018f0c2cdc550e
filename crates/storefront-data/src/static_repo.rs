//! In-memory repository over a fixed catalog.

use std::sync::Arc;

use async_trait::async_trait;
use storefront_commerce::{Product, ProductId};

use crate::catalog;
use crate::repository::{Predicate, ProductRepository};
use crate::RepositoryError;

/// Serves a fixed product list. Never fails except for unknown ids.
#[derive(Debug, Clone)]
pub struct StaticRepository {
    products: Arc<Vec<Product>>,
}

impl StaticRepository {
    pub fn new(products: Vec<Product>) -> Self {
        Self {
            products: Arc::new(products),
        }
    }

    /// Repository over the catalog shipped with the crate.
    pub fn baked_in() -> Self {
        Self::new(catalog::products())
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }
}

#[async_trait]
impl ProductRepository for StaticRepository {
    async fn list_all(&self) -> Result<Vec<Product>, RepositoryError> {
        Ok(self.products.to_vec())
    }

    async fn list_by_predicate(
        &self,
        predicate: &Predicate,
    ) -> Result<Vec<Product>, RepositoryError> {
        Ok(self
            .products
            .iter()
            .filter(|p| predicate.matches(p))
            .cloned()
            .collect())
    }

    async fn get_by_id(&self, id: ProductId) -> Result<Product, RepositoryError> {
        self.products
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(|| RepositoryError::NotFound(format!("product {}", id)))
    }
}
