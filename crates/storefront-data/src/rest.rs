//! Repository over a PostgREST-style HTTP endpoint.
//!
//! Tables live at `{base_url}/rest/v1/{table}`. Every request carries the
//! anonymous key both as `apikey` and as a bearer token.

use std::collections::HashMap;

use async_trait::async_trait;
use reqwest::{header, Client, Method, RequestBuilder};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use storefront_commerce::{Product, ProductId};
use tracing::debug;

use crate::repository::{CatalogWriter, Predicate, ProductRepository};
use crate::rows::{
    NewProductImageRow, NewProductRow, NewProductVariantRow, ProductImageRow, ProductRow,
    ProductVariantRow, PRODUCTS_TABLE, PRODUCT_IMAGES_TABLE, PRODUCT_VARIANTS_TABLE,
};
use crate::timeout::TimeoutConfig;
use crate::transform::product_from_rows;
use crate::RepositoryError;

/// HTTP repository for the hosted tabular store.
#[derive(Debug, Clone)]
pub struct RestRepository {
    http: Client,
    base_url: String,
    anon_key: String,
}

impl RestRepository {
    /// Create a repository for `base_url` (without the `/rest/v1` suffix).
    pub fn new(
        base_url: impl Into<String>,
        anon_key: impl Into<String>,
        timeouts: &TimeoutConfig,
    ) -> Result<Self, RepositoryError> {
        let http = Client::builder()
            .connect_timeout(timeouts.connect)
            .timeout(timeouts.attempt)
            .build()?;
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            anon_key: anon_key.into(),
        })
    }

    /// Endpoint of a table.
    pub fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.base_url, table)
    }

    fn request(&self, method: Method, table: &str) -> RequestBuilder {
        self.http
            .request(method, self.table_url(table))
            .header("apikey", &self.anon_key)
            .header(header::AUTHORIZATION, format!("Bearer {}", self.anon_key))
    }

    async fn select<T: DeserializeOwned>(
        &self,
        table: &str,
        query: &[(&str, String)],
    ) -> Result<Vec<T>, RepositoryError> {
        let resp = self
            .request(Method::GET, table)
            .query(&[("select", "*")])
            .query(query)
            .send()
            .await?
            .error_for_status()?;
        let rows: Vec<T> = resp.json().await?;
        debug!(table, rows = rows.len(), "selected rows");
        Ok(rows)
    }

    /// Fetch images and variants for a batch of product rows and assemble
    /// domain products, keeping the order of `rows`.
    async fn hydrate(&self, rows: Vec<ProductRow>) -> Result<Vec<Product>, RepositoryError> {
        if rows.is_empty() {
            return Ok(Vec::new());
        }

        let ids = rows
            .iter()
            .map(|r| r.id.to_string())
            .collect::<Vec<_>>()
            .join(",");
        let in_ids = format!("in.({})", ids);

        let images_query = [
            ("product_id", in_ids.clone()),
            ("order", "display_order".to_string()),
        ];
        let variants_query = [("product_id", in_ids)];
        let (images, variants) = futures::try_join!(
            self.select::<ProductImageRow>(PRODUCT_IMAGES_TABLE, &images_query),
            self.select::<ProductVariantRow>(PRODUCT_VARIANTS_TABLE, &variants_query),
        )?;

        let mut images_by_product: HashMap<i64, Vec<ProductImageRow>> = HashMap::new();
        for image in images {
            images_by_product.entry(image.product_id).or_default().push(image);
        }
        let mut variants_by_product: HashMap<i64, Vec<ProductVariantRow>> = HashMap::new();
        for variant in variants {
            variants_by_product
                .entry(variant.product_id)
                .or_default()
                .push(variant);
        }

        rows.into_iter()
            .map(|row| {
                let images = images_by_product.remove(&row.id).unwrap_or_default();
                let variants = variants_by_product.remove(&row.id).unwrap_or_default();
                product_from_rows(row, images, variants)
            })
            .collect()
    }

    async fn insert<T: Serialize + Sync>(
        &self,
        table: &str,
        row: &T,
        prefer: &str,
    ) -> Result<reqwest::Response, RepositoryError> {
        let resp = self
            .request(Method::POST, table)
            .header("Prefer", prefer)
            .json(row)
            .send()
            .await?
            .error_for_status()?;
        Ok(resp)
    }
}

#[async_trait]
impl ProductRepository for RestRepository {
    async fn list_all(&self) -> Result<Vec<Product>, RepositoryError> {
        let rows = self.select::<ProductRow>(PRODUCTS_TABLE, &[]).await?;
        self.hydrate(rows).await
    }

    async fn list_by_predicate(
        &self,
        predicate: &Predicate,
    ) -> Result<Vec<Product>, RepositoryError> {
        let filter = [(predicate.column(), format!("eq.{}", predicate.value()))];
        let rows = self.select::<ProductRow>(PRODUCTS_TABLE, &filter).await?;
        self.hydrate(rows).await
    }

    async fn get_by_id(&self, id: ProductId) -> Result<Product, RepositoryError> {
        let filter = [("id", format!("eq.{}", id))];
        let rows = self.select::<ProductRow>(PRODUCTS_TABLE, &filter).await?;
        self.hydrate(rows)
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| RepositoryError::NotFound(format!("product {}", id)))
    }
}

#[derive(Debug, Deserialize)]
struct InsertedId {
    id: i64,
}

#[async_trait]
impl CatalogWriter for RestRepository {
    async fn count_products(&self) -> Result<u64, RepositoryError> {
        let resp = self
            .request(Method::HEAD, PRODUCTS_TABLE)
            .query(&[("select", "*")])
            .header("Prefer", "count=exact")
            .send()
            .await?
            .error_for_status()?;

        let range = resp
            .headers()
            .get(header::CONTENT_RANGE)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| RepositoryError::Schema("missing Content-Range header".into()))?;
        parse_content_range_total(range)
            .ok_or_else(|| RepositoryError::Schema(format!("unreadable Content-Range: {}", range)))
    }

    async fn insert_product(&self, row: &NewProductRow) -> Result<ProductId, RepositoryError> {
        let resp = self
            .insert(PRODUCTS_TABLE, row, "return=representation")
            .await?;
        let inserted: Vec<InsertedId> = resp.json().await?;
        inserted
            .first()
            .map(|r| ProductId::new(r.id))
            .ok_or_else(|| RepositoryError::Schema("insert returned no row".into()))
    }

    async fn insert_image(&self, row: &NewProductImageRow) -> Result<(), RepositoryError> {
        self.insert(PRODUCT_IMAGES_TABLE, row, "return=minimal").await?;
        Ok(())
    }

    async fn insert_variant(&self, row: &NewProductVariantRow) -> Result<(), RepositoryError> {
        self.insert(PRODUCT_VARIANTS_TABLE, row, "return=minimal").await?;
        Ok(())
    }
}

/// Total from a `Content-Range` value such as `0-11/12` or `*/0`.
pub fn parse_content_range_total(value: &str) -> Option<u64> {
    let (_, total) = value.rsplit_once('/')?;
    total.trim().parse().ok()
}
