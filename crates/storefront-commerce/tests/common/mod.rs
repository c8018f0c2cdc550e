//! Catalog fixture shaped like the shipped storefront data.

use storefront_commerce::prelude::*;

#[allow(clippy::too_many_arguments)]
fn product(
    id: i64,
    name: &str,
    cents: i64,
    category: &str,
    subcategory: &str,
    brand: &str,
    stock: u32,
    rating: f64,
    reviews: u32,
) -> Product {
    Product::new(id, name, Money::usd(cents))
        .with_category(category, Some(subcategory))
        .with_brand(brand)
        .with_stock(stock)
        .with_rating(rating, reviews)
}

pub fn catalog() -> Vec<Product> {
    let mut headphones = product(
        1,
        "Wireless Noise-Cancelling Headphones",
        29999,
        "Electronics",
        "Audio",
        "AudioTech",
        50,
        4.8,
        256,
    )
    .with_variant(ProductVariant::new(101, "Black", Money::usd(29999), 25))
    .with_variant(ProductVariant::new(103, "Blue", Money::usd(31999), 10));
    headphones.description = "Premium wireless headphones with active noise cancellation.".into();
    headphones.tags = vec!["wireless".into(), "bluetooth".into()];
    headphones.is_featured = true;
    headphones.on_sale = true;

    let mut tv = product(2, "Ultra HD 4K Smart TV 55\"", 79999, "Electronics", "TVs", "VisionTech", 35, 4.6, 189);
    tv.is_featured = true;

    let mut camera = product(3, "Professional Camera DSLR Kit", 129999, "Electronics", "Cameras", "ProCapture", 0, 4.9, 120);
    camera.is_new = true;

    let mut phone = product(4, "Smartphone Pro Max", 109999, "Electronics", "Smartphones", "TechGiant", 65, 4.7, 342);
    phone.is_new = true;
    phone.tags = vec!["5G".into(), "flagship".into()];

    let mut speaker = product(8, "Portable Bluetooth Speaker", 7999, "Electronics", "Audio", "AudioTech", 70, 4.4, 231);
    speaker.description = "Compact waterproof speaker.".into();
    speaker.on_sale = true;

    let mut earbuds = product(10, "Wireless Earbuds", 12999, "Electronics", "Audio", "AudioTech", 75, 4.5, 278);
    earbuds.tags = vec!["wireless".into(), "bluetooth".into()];

    let coffee = product(11, "Premium Coffee Maker", 19999, "Home", "Appliances", "BrewMaster", 28, 4.7, 123);

    let mut vacuum = product(12, "Robot Vacuum Cleaner", 34999, "Home", "Appliances", "CleanTech", 32, 4.6, 187);
    vacuum.tags = vec!["smart home".into()];

    vec![headphones, tv, camera, phone, speaker, earbuds, coffee, vacuum]
}

#[allow(dead_code)]
pub fn ids(products: &[Product]) -> Vec<i64> {
    products.iter().map(|p| p.id.get()).collect()
}
