//! Product selections shown on the detail page.

use crate::ids::ProductId;
use crate::product::Product;

/// Listing size scanned for promoted products.
pub const PROMOTIONS_SCAN_LIMIT: u32 = 50;

/// Number of promoted products shown.
pub const PROMOTIONS_COUNT: usize = 4;

/// Products from the same category, excluding the one being viewed.
pub fn related_products(category_products: Vec<Product>, current: ProductId) -> Vec<Product> {
    category_products
        .into_iter()
        .filter(|p| p.id != current)
        .collect()
}

/// First `limit` discounted products other than the one being viewed, in
/// listing order.
pub fn promotions(listing: Vec<Product>, current: ProductId, limit: usize) -> Vec<Product> {
    listing
        .into_iter()
        .filter(|p| p.id != current && p.is_discounted())
        .take(limit)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_related_excludes_current() {
        let products = vec![
            Product::new(1, "A", 1.0),
            Product::new(2, "B", 1.0),
            Product::new(3, "C", 1.0),
        ];
        let related = related_products(products, ProductId::new(2));
        let ids: Vec<u64> = related.iter().map(|p| p.id.get()).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_promotions_filter_and_limit() {
        let listing: Vec<Product> = (1..=10)
            .map(|i| {
                let p = Product::new(i, format!("P{}", i), 10.0);
                if i % 2 == 0 { p } else { p.with_discount(5.0) }
            })
            .collect();

        let promoted = promotions(listing, ProductId::new(3), PROMOTIONS_COUNT);
        let ids: Vec<u64> = promoted.iter().map(|p| p.id.get()).collect();
        assert_eq!(ids, vec![1, 5, 7, 9]);
    }

    #[test]
    fn test_promotions_skip_zero_discount() {
        let listing = vec![Product::new(1, "A", 1.0).with_discount(0.0)];
        assert!(promotions(listing, ProductId::new(9), PROMOTIONS_COUNT).is_empty());
    }
}
