//! Seeding an empty store with a catalog.

use storefront_commerce::Product;
use tracing::{info, warn};

use crate::repository::CatalogWriter;
use crate::rows::{NewProductImageRow, NewProductRow, NewProductVariantRow};

/// Counters from a seeding run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub products_inserted: usize,
    pub products_failed: usize,
    pub images_inserted: usize,
    pub variants_inserted: usize,
    /// Image and variant rows the store rejected.
    pub child_rows_failed: usize,
}

impl SeedReport {
    pub fn is_clean(&self) -> bool {
        self.products_failed == 0 && self.child_rows_failed == 0
    }
}

/// Whether the store already holds products. Errors read as "no".
pub async fn products_exist(writer: &dyn CatalogWriter) -> bool {
    match writer.count_products().await {
        Ok(count) => count > 0,
        Err(e) => {
            warn!(error = %e, "could not count products");
            false
        }
    }
}

/// Insert every product of `catalog`, then its images and variants.
///
/// A rejected product skips its child rows; a rejected child row is counted
/// and skipped. Neither stops the run.
pub async fn seed_products(writer: &dyn CatalogWriter, catalog: &[Product]) -> SeedReport {
    seed_products_with_progress(writer, catalog, |_, _| {}).await
}

/// [`seed_products`] calling `on_product(done, product)` after each product.
pub async fn seed_products_with_progress<F>(
    writer: &dyn CatalogWriter,
    catalog: &[Product],
    mut on_product: F,
) -> SeedReport
where
    F: FnMut(usize, &Product),
{
    info!(products = catalog.len(), "starting to seed products");
    let mut report = SeedReport::default();

    for (done, product) in catalog.iter().enumerate() {
        seed_one(writer, product, &mut report).await;
        on_product(done + 1, product);
    }

    info!(
        inserted = report.products_inserted,
        failed = report.products_failed,
        images = report.images_inserted,
        variants = report.variants_inserted,
        "seeding finished"
    );
    report
}

async fn seed_one(writer: &dyn CatalogWriter, product: &Product, report: &mut SeedReport) {
    let id = match writer.insert_product(&NewProductRow::from_product(product)).await {
        Ok(id) => id,
        Err(e) => {
            warn!(product = %product.name, error = %e, "failed to insert product");
            report.products_failed += 1;
            return;
        }
    };
    report.products_inserted += 1;

    for row in NewProductImageRow::for_product(id, product) {
        match writer.insert_image(&row).await {
            Ok(()) => report.images_inserted += 1,
            Err(e) => {
                warn!(product = %product.name, url = %row.image_url, error = %e, "failed to insert image");
                report.child_rows_failed += 1;
            }
        }
    }

    for row in NewProductVariantRow::for_product(id, product) {
        match writer.insert_variant(&row).await {
            Ok(()) => report.variants_inserted += 1,
            Err(e) => {
                warn!(product = %product.name, variant = %row.name, error = %e, "failed to insert variant");
                report.child_rows_failed += 1;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    use async_trait::async_trait;
    use storefront_commerce::ProductId;

    use crate::catalog;
    use crate::RepositoryError;

    #[derive(Default)]
    struct RecordingWriter {
        count: Option<u64>,
        reject_sku: Option<&'static str>,
        products: Mutex<Vec<NewProductRow>>,
        images: Mutex<Vec<NewProductImageRow>>,
        variants: Mutex<Vec<NewProductVariantRow>>,
    }

    #[async_trait]
    impl CatalogWriter for RecordingWriter {
        async fn count_products(&self) -> Result<u64, RepositoryError> {
            self.count
                .ok_or_else(|| RepositoryError::Transport("unreachable".into()))
        }

        async fn insert_product(&self, row: &NewProductRow) -> Result<ProductId, RepositoryError> {
            if self.reject_sku == Some(row.sku.as_str()) {
                return Err(RepositoryError::Transport("409 Conflict".into()));
            }
            let mut products = self.products.lock().unwrap();
            products.push(row.clone());
            Ok(ProductId::new(1000 + products.len() as i64))
        }

        async fn insert_image(&self, row: &NewProductImageRow) -> Result<(), RepositoryError> {
            self.images.lock().unwrap().push(row.clone());
            Ok(())
        }

        async fn insert_variant(&self, row: &NewProductVariantRow) -> Result<(), RepositoryError> {
            self.variants.lock().unwrap().push(row.clone());
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_products_exist() {
        let empty = RecordingWriter {
            count: Some(0),
            ..Default::default()
        };
        let seeded = RecordingWriter {
            count: Some(12),
            ..Default::default()
        };
        let broken = RecordingWriter::default();
        assert!(!products_exist(&empty).await);
        assert!(products_exist(&seeded).await);
        assert!(!products_exist(&broken).await);
    }

    #[tokio::test]
    async fn test_seed_inserts_children_under_assigned_id() {
        let writer = RecordingWriter::default();
        let catalog = catalog::products();
        let report = seed_products(&writer, &catalog[..1]).await;

        assert!(report.is_clean());
        assert_eq!(report.products_inserted, 1);
        assert_eq!(report.images_inserted, 3);
        assert_eq!(report.variants_inserted, 3);

        let images = writer.images.lock().unwrap();
        let orders: Vec<_> = images.iter().map(|r| (r.product_id, r.display_order)).collect();
        assert_eq!(orders, vec![(1001, 0), (1001, 1), (1001, 2)]);
    }

    #[tokio::test]
    async fn test_failed_product_is_skipped() {
        let writer = RecordingWriter {
            reject_sku: Some("AT-WNC-001"),
            ..Default::default()
        };
        let catalog = catalog::products();
        let mut seen = Vec::new();
        let report =
            seed_products_with_progress(&writer, &catalog, |done, p| seen.push((done, p.id.get())))
                .await;

        assert_eq!(report.products_failed, 1);
        assert_eq!(report.products_inserted, 11);
        assert!(!report.is_clean());
        assert_eq!(seen.len(), 12);
        assert_eq!(seen[0], (1, 1));
        assert!(writer
            .products
            .lock()
            .unwrap()
            .iter()
            .all(|p| p.sku != "AT-WNC-001"));
    }
}
