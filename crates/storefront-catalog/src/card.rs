//! Listing card view model.

use serde::Serialize;

use crate::ids::ProductId;
use crate::pricing::DisplayPrice;
use crate::product::Product;
use crate::rating::filled_stars;

/// Default image for products without a thumbnail or gallery.
pub const DEFAULT_PLACEHOLDER_IMAGE: &str = "/img/eat.png";

/// A product as shown in listings, carousels and promotions.
///
/// Cards show the catalog rating; reviews are only aggregated on the detail page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductCard {
    pub id: ProductId,
    pub title: String,
    pub image: String,
    pub price: DisplayPrice,
    pub stars: u8,
}

impl ProductCard {
    /// Build a card, using `placeholder` when the product has no image.
    pub fn from_product(product: &Product, placeholder: &str) -> Self {
        Self {
            id: product.id,
            title: product.title.clone(),
            image: product.card_image().unwrap_or(placeholder).to_string(),
            price: DisplayPrice::of(product),
            stars: filled_stars(product.rating.unwrap_or(0.0)),
        }
    }
}

/// Build cards for a list of products.
pub fn cards(products: &[Product], placeholder: &str) -> Vec<ProductCard> {
    products
        .iter()
        .map(|p| ProductCard::from_product(p, placeholder))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product::Review;

    #[test]
    fn test_card_uses_catalog_rating() {
        let product = Product::new(5, "Lamp", 250.0)
            .with_discount(10.0)
            .with_rating(3.6)
            .with_review(Review::rated(1.0));
        let card = ProductCard::from_product(&product, DEFAULT_PLACEHOLDER_IMAGE);
        assert_eq!(card.stars, 4);
        assert_eq!(card.price.discounted, 225.0);
        assert_eq!(card.image, DEFAULT_PLACEHOLDER_IMAGE);
    }

    #[test]
    fn test_cards_preserve_order() {
        let products = vec![Product::new(2, "B", 1.0), Product::new(1, "A", 1.0)];
        let ids: Vec<u64> = cards(&products, "x").iter().map(|c| c.id.get()).collect();
        assert_eq!(ids, vec![2, 1]);
    }
}
