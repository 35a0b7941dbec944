//! The Closet reference catalog.
//!
//! Fixed product list supplied at process start. Prices are whole rands,
//! VAT-inclusive.

use closet_core::{Money, ProductId};

use crate::product::{Color, Product};

fn product(
    id: &str,
    name: &str,
    category: &str,
    price_rands: u64,
    sizes: &[&str],
    colors: &[Color],
    image: &str,
    description: &str,
) -> Product {
    Product {
        id: ProductId::new(id),
        name: name.to_string(),
        category: category.to_string(),
        price: Money::from_rands(price_rands),
        sizes: sizes.iter().map(|s| s.to_string()).collect(),
        colors: colors.to_vec(),
        image: image.to_string(),
        description: description.to_string(),
    }
}

/// Build the full reference catalog, in display order.
///
/// Returned by value so callers own their copy; there is deliberately no
/// global static instance.
pub fn reference_catalog() -> Vec<Product> {
    vec![
        product(
            "structured-blazer",
            "The Structured Blazer",
            "Jackets",
            1899,
            &["S", "M", "L", "XL"],
            &[Color::Black, Color::Gray],
            "/assets/products/blazer.jpg",
            "Impeccably tailored with a structured shoulder and slim silhouette. \
             Crafted from premium Italian wool blend for the modern professional.",
        ),
        product(
            "premium-oxford-shirt",
            "The Premium Oxford Shirt",
            "Shirts",
            899,
            &["XS", "S", "M", "L", "XL", "XXL"],
            &[Color::White, Color::Black],
            "/assets/products/oxford-shirt.jpg",
            "A wardrobe essential. Made from Egyptian cotton with a soft hand feel \
             and refined button-down collar.",
        ),
        product(
            "relaxed-jersey",
            "The Relaxed Jersey",
            "Jerseys",
            649,
            &["S", "M", "L", "XL"],
            &[Color::Gray, Color::Navy],
            "/assets/products/jersey.jpg",
            "Elevated casual wear. Heavyweight cotton jersey with ribbed cuffs and \
             a relaxed fit that drapes beautifully.",
        ),
        product(
            "tailored-trouser",
            "The Tailored Trouser",
            "Pants",
            1299,
            &["28", "30", "32", "34", "36"],
            &[Color::Black, Color::Gray],
            "/assets/products/trousers.jpg",
            "Precision-cut with a tapered leg and hidden stretch for all-day \
             comfort. The foundation of any sharp outfit.",
        ),
        product(
            "essential-hoodie",
            "The Essential Hoodie",
            "Hoodies",
            799,
            &["S", "M", "L", "XL"],
            &[Color::Black, Color::Gray, Color::White],
            "/assets/products/hoodie.jpg",
            "Premium brushed fleece interior. Minimalist design with a structured \
             hood and metal-tipped drawstrings.",
        ),
        product(
            "cuffed-beanie",
            "The Cuffed Beanie",
            "Hats",
            399,
            &["One Size"],
            &[Color::Black, Color::Gray],
            "/assets/products/beanie.jpg",
            "Ribbed knit beanie in a soft merino blend. A refined finishing touch \
             for any cold-weather look.",
        ),
    ]
}

/// Categories offered by the filter UI, in display order.
pub fn category_options() -> Vec<&'static str> {
    vec!["Tops", "Shirts", "Pants", "Jackets", "Hoodies", "Jerseys", "Hats"]
}

/// Size labels offered by the filter UI, in display order.
pub fn size_options() -> Vec<&'static str> {
    vec![
        "XS", "S", "M", "L", "XL", "XXL", "28", "30", "32", "34", "36", "One Size",
    ]
}

/// Colors offered by the filter UI.
///
/// Gold Accent is a brand accent, not a filterable garment color.
pub fn color_options() -> Vec<Color> {
    vec![Color::Black, Color::White, Color::Gray, Color::Navy]
}
