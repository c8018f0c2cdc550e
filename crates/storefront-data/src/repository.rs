//! Repository traits over the product store.

use async_trait::async_trait;
use storefront_commerce::{Product, ProductId};

use crate::rows::{NewProductImageRow, NewProductRow, NewProductVariantRow};
use crate::RepositoryError;

/// Server-side equality filters a repository can apply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Predicate {
    IsFeatured,
    IsNew,
    OnSale,
    Category(String),
    Brand(String),
}

impl Predicate {
    /// Column the predicate compares.
    pub fn column(&self) -> &'static str {
        match self {
            Predicate::IsFeatured => "is_featured",
            Predicate::IsNew => "is_new",
            Predicate::OnSale => "on_sale",
            Predicate::Category(_) => "category",
            Predicate::Brand(_) => "brand",
        }
    }

    /// Value compared against, as the store spells it.
    pub fn value(&self) -> &str {
        match self {
            Predicate::IsFeatured | Predicate::IsNew | Predicate::OnSale => "true",
            Predicate::Category(v) | Predicate::Brand(v) => v,
        }
    }

    /// Evaluate against an in-memory product.
    pub fn matches(&self, product: &Product) -> bool {
        match self {
            Predicate::IsFeatured => product.is_featured,
            Predicate::IsNew => product.is_new,
            Predicate::OnSale => product.on_sale,
            Predicate::Category(c) => product.category == *c,
            Predicate::Brand(b) => product.brand == *b,
        }
    }
}

/// Read access to the product collection.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Every product, in store order.
    async fn list_all(&self) -> Result<Vec<Product>, RepositoryError>;

    /// Products matching a predicate, in store order.
    async fn list_by_predicate(&self, predicate: &Predicate)
        -> Result<Vec<Product>, RepositoryError>;

    /// A single product. Missing ids yield [`RepositoryError::NotFound`].
    async fn get_by_id(&self, id: ProductId) -> Result<Product, RepositoryError>;
}

/// Write access used to seed an empty store.
#[async_trait]
pub trait CatalogWriter: Send + Sync {
    /// Exact number of product rows.
    async fn count_products(&self) -> Result<u64, RepositoryError>;

    /// Insert a product row, returning the id the store assigned.
    async fn insert_product(&self, row: &NewProductRow) -> Result<ProductId, RepositoryError>;

    async fn insert_image(&self, row: &NewProductImageRow) -> Result<(), RepositoryError>;

    async fn insert_variant(&self, row: &NewProductVariantRow) -> Result<(), RepositoryError>;
}
