//! Catalog shipped with the crate.
//!
//! Served when the hosted store is unconfigured or unreachable, and used to
//! seed an empty store.

use storefront_commerce::{Brand, CategoryNode, Currency, Money, Product, ProductVariant};

struct Entry {
    id: i64,
    name: &'static str,
    description: &'static str,
    price: f64,
    original_price: Option<f64>,
    category: &'static str,
    subcategory: &'static str,
    images: &'static [&'static str],
    /// (id, name, color, stock, price)
    variants: &'static [(i64, &'static str, &'static str, u32, f64)],
    tags: &'static [&'static str],
    rating: f64,
    review_count: u32,
    stock: u32,
    is_new: bool,
    is_featured: bool,
    on_sale: bool,
    sale_percentage: Option<u8>,
    brand: &'static str,
    sku: &'static str,
}

const UNSPLASH: &str = "https://images.unsplash.com/photo-";

const ENTRIES: &[Entry] = &[
    Entry {
        id: 1,
        name: "Wireless Noise-Cancelling Headphones",
        description: "Premium wireless headphones with active noise cancellation, providing an immersive audio experience. Features 30-hour battery life and comfortable over-ear design.",
        price: 299.99,
        original_price: Some(399.99),
        category: "Electronics",
        subcategory: "Audio",
        images: &[
            "1505740420928-5e560c06d30e?q=80&w=2070&auto=format&fit=crop",
            "1578319439584-104c94d37305?q=80&w=2070&auto=format&fit=crop",
            "1583394838336-acd977736f90?q=80&w=2068&auto=format&fit=crop",
        ],
        variants: &[
            (101, "Black", "#000000", 25, 299.99),
            (102, "White", "#FFFFFF", 15, 299.99),
            (103, "Blue", "#0047AB", 10, 319.99),
        ],
        tags: &["wireless", "noise-cancelling", "premium", "bluetooth"],
        rating: 4.8,
        review_count: 256,
        stock: 50,
        is_new: false,
        is_featured: true,
        on_sale: true,
        sale_percentage: Some(25),
        brand: "AudioTech",
        sku: "AT-WNC-001",
    },
    Entry {
        id: 2,
        name: "Ultra HD 4K Smart TV 55\"",
        description: "Stunning 55-inch 4K Ultra HD display with smart functionality, HDR support, and built-in streaming apps for an enhanced viewing experience.",
        price: 799.99,
        original_price: Some(999.99),
        category: "Electronics",
        subcategory: "TVs",
        images: &[
            "1593784991095-a205069470b6?q=80&w=2070&auto=format&fit=crop",
            "1601944179066-29786cb9d32a?q=80&w=2070&auto=format&fit=crop",
        ],
        variants: &[],
        tags: &["4k", "smart tv", "ultra hd", "hdr"],
        rating: 4.6,
        review_count: 189,
        stock: 35,
        is_new: false,
        is_featured: true,
        on_sale: true,
        sale_percentage: Some(20),
        brand: "VisionTech",
        sku: "VT-TV-4K55",
    },
    Entry {
        id: 3,
        name: "Professional Camera DSLR Kit",
        description: "High-performance DSLR camera with 24.1MP sensor, 4K video capability, 3-inch LCD screen, and includes 18-55mm lens kit.",
        price: 1299.99,
        original_price: None,
        category: "Electronics",
        subcategory: "Cameras",
        images: &[
            "1516035069371-29a1b244cc32?q=80&w=1964&auto=format&fit=crop",
            "1502920917128-1aa500764cbd?q=80&w=1770&auto=format&fit=crop",
        ],
        variants: &[],
        tags: &["camera", "dslr", "professional", "4k video"],
        rating: 4.9,
        review_count: 120,
        stock: 15,
        is_new: true,
        is_featured: false,
        on_sale: false,
        sale_percentage: None,
        brand: "ProCapture",
        sku: "PC-DSLR-PRO",
    },
    Entry {
        id: 4,
        name: "Smartphone Pro Max",
        description: "Latest flagship smartphone with 6.7-inch Super Retina display, triple-camera system, 5G connectivity, and all-day battery life.",
        price: 1099.99,
        original_price: None,
        category: "Electronics",
        subcategory: "Smartphones",
        images: &[
            "1592899677977-9c10ca588bbd?q=80&w=1829&auto=format&fit=crop",
            "1605236453806-6ff36851218e?q=80&w=2044&auto=format&fit=crop",
        ],
        variants: &[
            (401, "Black 128GB", "#000000", 20, 1099.99),
            (402, "Black 256GB", "#000000", 15, 1199.99),
            (403, "Silver 128GB", "#C0C0C0", 18, 1099.99),
            (404, "Silver 256GB", "#C0C0C0", 12, 1199.99),
        ],
        tags: &["smartphone", "5G", "pro", "flagship"],
        rating: 4.7,
        review_count: 342,
        stock: 65,
        is_new: true,
        is_featured: true,
        on_sale: false,
        sale_percentage: None,
        brand: "TechGiant",
        sku: "TG-SPM-5G",
    },
    Entry {
        id: 5,
        name: "Ultra-thin Laptop Pro",
        description: "Powerful and sleek laptop with 14-inch 4K display, 16GB RAM, 1TB SSD, and the latest processor for ultimate performance.",
        price: 1499.99,
        original_price: Some(1699.99),
        category: "Electronics",
        subcategory: "Laptops",
        images: &[
            "1611186871348-b1ce696e52c9?q=80&w=2070&auto=format&fit=crop",
            "1498050108023-c5249f4df085?q=80&w=2072&auto=format&fit=crop",
        ],
        variants: &[
            (501, "Silver 16GB/1TB", "#C0C0C0", 10, 1499.99),
            (502, "Silver 32GB/1TB", "#C0C0C0", 5, 1799.99),
            (503, "Space Gray 16GB/1TB", "#8A8D8F", 8, 1499.99),
        ],
        tags: &["laptop", "ultrabook", "premium", "high-performance"],
        rating: 4.8,
        review_count: 178,
        stock: 23,
        is_new: false,
        is_featured: false,
        on_sale: true,
        sale_percentage: Some(12),
        brand: "ComputeTech",
        sku: "CT-ULP-16G",
    },
    Entry {
        id: 6,
        name: "Smart Home Speaker",
        description: "Voice-controlled smart speaker with premium sound, virtual assistant capabilities, and smart home control features.",
        price: 149.99,
        original_price: Some(199.99),
        category: "Electronics",
        subcategory: "Smart Home",
        images: &[
            "1589492477829-5e65395b66cc?q=80&w=2070&auto=format&fit=crop",
            "1558089687-f282ffcbc0d4?q=80&w=1782&auto=format&fit=crop",
        ],
        variants: &[
            (601, "Charcoal", "#36454F", 30, 149.99),
            (602, "Sandstone", "#F5DEB3", 25, 149.99),
        ],
        tags: &["smart speaker", "voice assistant", "smart home", "wifi"],
        rating: 4.5,
        review_count: 215,
        stock: 55,
        is_new: false,
        is_featured: false,
        on_sale: true,
        sale_percentage: Some(25),
        brand: "SmartLife",
        sku: "SL-HSP-01",
    },
    Entry {
        id: 7,
        name: "Fitness Smartwatch",
        description: "Advanced fitness tracker with heart rate monitoring, GPS, water resistance, and a battery life of up to 7 days.",
        price: 249.99,
        original_price: None,
        category: "Electronics",
        subcategory: "Wearables",
        images: &[
            "1617043786394-f977fa12eddf?q=80&w=2070&auto=format&fit=crop",
            "1508685096489-7aacd43bd3b1?q=80&w=2027&auto=format&fit=crop",
        ],
        variants: &[
            (701, "Black", "#000000", 20, 249.99),
            (702, "Silver", "#C0C0C0", 15, 249.99),
            (703, "Rose Gold", "#B76E79", 12, 269.99),
        ],
        tags: &["smartwatch", "fitness tracker", "heart rate", "gps"],
        rating: 4.6,
        review_count: 167,
        stock: 47,
        is_new: true,
        is_featured: false,
        on_sale: false,
        sale_percentage: None,
        brand: "FitTech",
        sku: "FT-FSW-HR",
    },
    Entry {
        id: 8,
        name: "Portable Bluetooth Speaker",
        description: "Compact waterproof Bluetooth speaker with 20-hour battery life, 360\u{b0} sound, and built-in microphone for calls.",
        price: 79.99,
        original_price: Some(99.99),
        category: "Electronics",
        subcategory: "Audio",
        images: &[
            "1608043152269-423dbba4e7e1?q=80&w=2069&auto=format&fit=crop",
            "1564424224827-cd24b8915874?q=80&w=1936&auto=format&fit=crop",
        ],
        variants: &[
            (801, "Black", "#000000", 35, 79.99),
            (802, "Blue", "#0000FF", 20, 79.99),
            (803, "Red", "#FF0000", 15, 79.99),
        ],
        tags: &["bluetooth speaker", "portable", "waterproof", "wireless"],
        rating: 4.4,
        review_count: 231,
        stock: 70,
        is_new: false,
        is_featured: false,
        on_sale: true,
        sale_percentage: Some(20),
        brand: "AudioTech",
        sku: "AT-BTS-WP",
    },
    Entry {
        id: 9,
        name: "Gaming Console Pro",
        description: "Next-generation gaming console with 4K gaming, ray tracing, super-fast loading times, and a vast game library.",
        price: 499.99,
        original_price: None,
        category: "Electronics",
        subcategory: "Gaming",
        images: &[
            "1621259182978-fbf93132d53d?q=80&w=1932&auto=format&fit=crop",
            "1486572788966-cfd3df1f5b42?q=80&w=2072&auto=format&fit=crop",
        ],
        variants: &[],
        tags: &["gaming", "console", "4k", "entertainment"],
        rating: 4.9,
        review_count: 305,
        stock: 10,
        is_new: true,
        is_featured: true,
        on_sale: false,
        sale_percentage: None,
        brand: "GameSphere",
        sku: "GS-CNSL-PRO",
    },
    Entry {
        id: 10,
        name: "Wireless Earbuds",
        description: "True wireless earbuds with noise isolation, touch controls, and up to 24 hours of battery life with the charging case.",
        price: 129.99,
        original_price: Some(159.99),
        category: "Electronics",
        subcategory: "Audio",
        images: &[
            "1590658268037-6bf12165a8df?q=80&w=1932&auto=format&fit=crop",
            "1606400082777-ef05f3c5cde2?q=80&w=1936&auto=format&fit=crop",
        ],
        variants: &[
            (1001, "Black", "#000000", 40, 129.99),
            (1002, "White", "#FFFFFF", 35, 129.99),
        ],
        tags: &["earbuds", "wireless", "bluetooth", "noise isolation"],
        rating: 4.5,
        review_count: 278,
        stock: 75,
        is_new: false,
        is_featured: false,
        on_sale: true,
        sale_percentage: Some(19),
        brand: "AudioTech",
        sku: "AT-TWE-24",
    },
    Entry {
        id: 11,
        name: "Premium Coffee Maker",
        description: "Programmable coffee maker with thermal carafe, brew strength control, and built-in grinder for the freshest coffee.",
        price: 199.99,
        original_price: None,
        category: "Home",
        subcategory: "Appliances",
        images: &[
            "1576298907093-1965c89b785c?q=80&w=1974&auto=format&fit=crop",
            "1497935586351-b67a49e012bf?q=80&w=2071&auto=format&fit=crop",
        ],
        variants: &[],
        tags: &["coffee maker", "kitchen appliance", "programmable", "grinder"],
        rating: 4.7,
        review_count: 123,
        stock: 28,
        is_new: false,
        is_featured: false,
        on_sale: false,
        sale_percentage: None,
        brand: "BrewMaster",
        sku: "BM-PCM-GR",
    },
    Entry {
        id: 12,
        name: "Robot Vacuum Cleaner",
        description: "Smart robot vacuum with mapping technology, powerful suction, app control, and automatic recharging.",
        price: 349.99,
        original_price: Some(399.99),
        category: "Home",
        subcategory: "Appliances",
        images: &[
            "1620910430596-4f7f79067e28?q=80&w=1974&auto=format&fit=crop",
            "1605292356936-160339f35ab5?q=80&w=2070&auto=format&fit=crop",
        ],
        variants: &[],
        tags: &["robot vacuum", "smart home", "cleaning", "automated"],
        rating: 4.6,
        review_count: 187,
        stock: 32,
        is_new: false,
        is_featured: false,
        on_sale: true,
        sale_percentage: Some(13),
        brand: "CleanTech",
        sku: "CT-RVC-MAP",
    },
];

fn usd(amount: f64) -> Money {
    Money::from_decimal(amount, Currency::USD)
}

impl Entry {
    fn to_product(&self) -> Product {
        Product {
            id: self.id.into(),
            name: self.name.to_string(),
            description: self.description.to_string(),
            price: usd(self.price),
            original_price: self.original_price.map(usd),
            images: self
                .images
                .iter()
                .map(|path| format!("{}{}", UNSPLASH, path))
                .collect(),
            category: self.category.to_string(),
            subcategory: Some(self.subcategory.to_string()),
            brand: self.brand.to_string(),
            rating: self.rating,
            review_count: self.review_count,
            stock: self.stock,
            sku: self.sku.to_string(),
            tags: self.tags.iter().map(|t| t.to_string()).collect(),
            variants: self
                .variants
                .iter()
                .map(|&(id, name, color, stock, price)| {
                    let mut variant = ProductVariant::new(id, name, usd(price), stock);
                    variant.color = Some(color.to_string());
                    variant
                })
                .collect(),
            is_featured: self.is_featured,
            is_new: self.is_new,
            on_sale: self.on_sale,
            sale_percentage: self.sale_percentage,
        }
    }
}

/// The shipped products, in catalog order.
pub fn products() -> Vec<Product> {
    ENTRIES.iter().map(Entry::to_product).collect()
}

/// Category taxonomy.
pub fn categories() -> Vec<CategoryNode> {
    vec![
        CategoryNode::new(
            "Electronics",
            [
                "Audio",
                "TVs",
                "Cameras",
                "Smartphones",
                "Laptops",
                "Smart Home",
                "Wearables",
                "Gaming",
            ],
        ),
        CategoryNode::new("Home", ["Appliances", "Furniture", "Decor", "Bedding", "Bath"]),
        CategoryNode::new(
            "Fashion",
            ["Men's Clothing", "Women's Clothing", "Shoes", "Accessories", "Jewelry"],
        ),
        CategoryNode::new(
            "Sports",
            ["Fitness Equipment", "Outdoor Gear", "Team Sports", "Water Sports"],
        ),
        CategoryNode::new("Beauty", ["Skincare", "Makeup", "Hair Care", "Fragrance"]),
    ]
}

/// Featured brands with placeholder logos.
pub fn brands() -> Vec<Brand> {
    [
        "AudioTech",
        "VisionTech",
        "ProCapture",
        "TechGiant",
        "ComputeTech",
        "SmartLife",
        "FitTech",
        "GameSphere",
        "BrewMaster",
        "CleanTech",
    ]
    .into_iter()
    .map(|name| Brand::new(name, format!("https://placehold.co/200x80?text={}", name)))
    .collect()
}

/// Suggestions shown under an empty search box.
pub const POPULAR_SEARCHES: [&str; 10] = [
    "wireless headphones",
    "smartphone",
    "laptop",
    "smartwatch",
    "4k tv",
    "bluetooth speaker",
    "gaming console",
    "coffee maker",
    "robot vacuum",
    "fitness tracker",
];
