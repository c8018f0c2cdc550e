//! Row to domain mapping.

use storefront_commerce::{Currency, Money, Product, ProductId, ProductVariant, VariantId};

use crate::rows::{ProductImageRow, ProductRow, ProductVariantRow};
use crate::RepositoryError;

/// Build a domain product from its row and child rows.
///
/// Images are ordered by `display_order` (rows without one go last).
/// Null flags read as false, zero markdowns as absent. The store holds no
/// tags, so `tags` is always empty.
pub fn product_from_rows(
    row: ProductRow,
    mut images: Vec<ProductImageRow>,
    variants: Vec<ProductVariantRow>,
) -> Result<Product, RepositoryError> {
    images.sort_by_key(|img| img.display_order.unwrap_or(i32::MAX));

    let variants = variants
        .into_iter()
        .map(|v| {
            Ok(ProductVariant {
                id: VariantId::new(v.id),
                stock: count(v.stock, "product_variants.stock", v.id)?,
                name: v.name,
                color: v.color.filter(|c| !c.is_empty()),
                size: v.size.filter(|s| !s.is_empty()),
                price: price(v.price),
                images: Vec::new(),
            })
        })
        .collect::<Result<Vec<_>, RepositoryError>>()?;

    let sale_percentage = match row.sale_percentage {
        None | Some(0) => None,
        Some(p) => Some(u8::try_from(p).ok().filter(|p| *p <= 100).ok_or_else(|| {
            RepositoryError::Schema(format!("products.sale_percentage out of range for {}: {}", row.id, p))
        })?),
    };

    Ok(Product {
        id: ProductId::new(row.id),
        stock: count(row.stock, "products.stock", row.id)?,
        review_count: count(row.review_count, "products.review_count", row.id)?,
        name: row.name,
        description: row.description,
        price: price(row.price),
        original_price: row.original_price.filter(|p| *p > 0.0).map(price),
        images: images.into_iter().map(|img| img.image_url).collect(),
        category: row.category,
        subcategory: row.subcategory.filter(|s| !s.is_empty()),
        brand: row.brand,
        rating: row.rating,
        sku: row.sku,
        tags: Vec::new(),
        variants,
        is_featured: row.is_featured.unwrap_or(false),
        is_new: row.is_new.unwrap_or(false),
        on_sale: row.on_sale.unwrap_or(false),
        sale_percentage,
    })
}

fn price(value: f64) -> Money {
    Money::from_decimal(value, Currency::USD)
}

fn count(value: i64, column: &str, id: i64) -> Result<u32, RepositoryError> {
    u32::try_from(value)
        .map_err(|_| RepositoryError::Schema(format!("{} out of range for {}: {}", column, id, value)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row() -> ProductRow {
        ProductRow {
            id: 1,
            name: "Wireless Noise-Cancelling Headphones".into(),
            description: "Premium wireless headphones".into(),
            price: 299.99,
            original_price: Some(399.99),
            category: "Electronics".into(),
            subcategory: Some("Audio".into()),
            brand: "AudioTech".into(),
            sku: "AT-WNC-001".into(),
            stock: 50,
            is_new: None,
            is_featured: Some(true),
            on_sale: Some(true),
            sale_percentage: Some(25),
            rating: 4.8,
            review_count: 256,
        }
    }

    fn image(url: &str, order: Option<i32>) -> ProductImageRow {
        ProductImageRow {
            product_id: 1,
            image_url: url.into(),
            display_order: order,
        }
    }

    #[test]
    fn test_maps_row_fields() {
        let variants = vec![ProductVariantRow {
            id: 103,
            product_id: 1,
            name: "Blue".into(),
            color: Some("#0047AB".into()),
            size: None,
            price: 319.99,
            stock: 10,
        }];
        let p = product_from_rows(row(), vec![image("a.jpg", Some(0))], variants).unwrap();

        assert_eq!(p.id, ProductId::new(1));
        assert_eq!(p.price, Money::usd(29999));
        assert_eq!(p.original_price, Some(Money::usd(39999)));
        assert!(p.is_featured);
        assert!(!p.is_new);
        assert!(p.tags.is_empty());
        assert_eq!(p.variants[0].price, Money::usd(31999));
        assert_eq!(p.variants[0].color.as_deref(), Some("#0047AB"));
    }

    #[test]
    fn test_orders_images_by_display_order() {
        let images = vec![image("c.jpg", None), image("b.jpg", Some(1)), image("a.jpg", Some(0))];
        let p = product_from_rows(row(), images, Vec::new()).unwrap();
        assert_eq!(p.images, vec!["a.jpg", "b.jpg", "c.jpg"]);
    }

    #[test]
    fn test_zero_markdown_reads_as_absent() {
        let mut r = row();
        r.original_price = Some(0.0);
        r.sale_percentage = Some(0);
        let p = product_from_rows(r, Vec::new(), Vec::new()).unwrap();
        assert_eq!(p.original_price, None);
        assert_eq!(p.sale_percentage, None);
    }

    #[test]
    fn test_negative_stock_is_schema_error() {
        let mut r = row();
        r.stock = -1;
        assert!(matches!(
            product_from_rows(r, Vec::new(), Vec::new()),
            Err(RepositoryError::Schema(_))
        ));
    }
}
