//! Built-in paint product data.

use crate::catalog::Product;

const PAINTS: [(u64, &str, &str, &str); 12] = [
    (1, "Acrylic Paint Set", "Interior Wall", "3498db/ffffff?text=Acrylic+Paint"),
    (2, "Classic Interior Wall Paint", "Interior Wall", "2c3e50/ffffff?text=Interior+Wall"),
    (3, "Rock Master Coating", "Rock Master", "e67e22/ffffff?text=Rock+Master"),
    (4, "Premium Rock Master Finish", "Rock Master", "f39c12/ffffff?text=Rock+Finish"),
    (5, "High-Gloss Undercoat", "Undercoat", "27ae60/ffffff?text=Undercoat+1"),
    (6, "Smooth Undercoat Primer", "Undercoat", "2ecc71/ffffff?text=Primer"),
    (7, "Natural Stone Seal", "Stone Seal", "9b59b6/ffffff?text=Stone+Seal"),
    (8, "Eco-Friendly Stone Seal", "Stone Seal", "8e44ad/ffffff?text=Eco+Seal"),
    (9, "Classic Emulsion", "Emulsion", "16a085/ffffff?text=Emulsion+1"),
    (10, "Luxury Emulsion Finish", "Emulsion", "27ae60/ffffff?text=Emulsion+2"),
    (11, "Advanced Weathershield", "Weathershield", "c0392b/ffffff?text=Weather+Shield"),
    (12, "Extreme Weather Protection", "Weathershield", "e74c3c/ffffff?text=Extreme+Shield"),
];

const IMAGE_HOST: &str = "https://placehold.co/300x200/";

/// The paint products, unpriced, in display order.
pub(crate) fn products() -> Vec<Product> {
    PAINTS
        .iter()
        .map(|&(id, name, category, image)| {
            Product::new(id, name, category).with_image(format!("{}{}", IMAGE_HOST, image))
        })
        .collect()
}
