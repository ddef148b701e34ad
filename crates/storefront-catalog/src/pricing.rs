//! Display price computation.

use crate::money::Currency;
use crate::product::Product;
use serde::{Deserialize, Serialize};

/// The base and discounted ("with card") price of a product.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DisplayPrice {
    /// Regular price, unchanged from the catalog.
    pub base: f64,
    /// Price after discount, rounded to whole units when a discount applies.
    pub discounted: f64,
}

impl DisplayPrice {
    /// Compute the display prices for a product.
    pub fn of(product: &Product) -> Self {
        Self {
            base: product.price,
            discounted: discounted_price(product.price, product.active_discount()),
        }
    }

    /// Check if the discounted price differs from the base price.
    pub fn has_discount(&self) -> bool {
        self.discounted != self.base
    }

    /// Amount saved with the discount.
    pub fn savings(&self) -> f64 {
        self.base - self.discounted
    }

    /// Format both prices as `(discounted, base)` strings.
    pub fn format(&self, currency: Currency) -> (String, String) {
        (currency.format(self.discounted), currency.format(self.base))
    }
}

/// Apply a percentage discount to a price.
///
/// `round(price * (1 - discount / 100))` when the discount is present and
/// non-zero, otherwise the price unchanged. Rounding is half away from zero,
/// which for non-negative prices is the usual half-up.
pub fn discounted_price(price: f64, discount_percentage: Option<f64>) -> f64 {
    match discount_percentage.filter(|d| *d != 0.0) {
        Some(discount) => (price * (1.0 - discount / 100.0)).round(),
        None => price,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_twenty_percent_off_hundred() {
        let product = Product::new(1, "A", 100.0).with_discount(20.0);
        let price = DisplayPrice::of(&product);
        assert_eq!(price.base, 100.0);
        assert_eq!(price.discounted, 80.0);
        assert!(price.has_discount());
        assert_eq!(price.savings(), 20.0);
    }

    #[test]
    fn test_no_discount_keeps_fractional_price() {
        let absent = Product::new(1, "A", 9.99);
        let zero = Product::new(2, "B", 9.99).with_discount(0.0);
        assert_eq!(DisplayPrice::of(&absent).discounted, 9.99);
        assert_eq!(DisplayPrice::of(&zero).discounted, 9.99);
        assert!(!DisplayPrice::of(&zero).has_discount());
    }

    #[test]
    fn test_rounds_half_up() {
        // 25 * 0.9 = 22.5
        assert_eq!(discounted_price(25.0, Some(10.0)), 23.0);
        // 9.99 * (1 - 0.0717) = 9.27...
        assert_eq!(discounted_price(9.99, Some(7.17)), 9.0);
    }

    #[test]
    fn test_full_discount_is_free() {
        assert_eq!(discounted_price(1549.0, Some(100.0)), 0.0);
    }

    #[test]
    fn test_format_pair() {
        let product = Product::new(1, "A", 100.0).with_discount(20.0);
        let (discounted, base) = DisplayPrice::of(&product).format(Currency::USD);
        assert_eq!(discounted, "$80");
        assert_eq!(base, "$100");
    }

    proptest! {
        #[test]
        fn prop_matches_rounded_formula(p in 0.0f64..1_000_000.0, d in 0.0f64..=100.0) {
            let expected = if d == 0.0 { p } else { (p * (1.0 - d / 100.0)).round() };
            prop_assert_eq!(discounted_price(p, Some(d)), expected);
        }

        #[test]
        fn prop_zero_discount_is_identity(p in 0.0f64..1_000_000.0) {
            prop_assert_eq!(discounted_price(p, Some(0.0)), p);
            prop_assert_eq!(discounted_price(p, None), p);
        }

        #[test]
        fn prop_discount_never_negative(p in 0.0f64..1_000_000.0, d in 0.0f64..=100.0) {
            prop_assert!(discounted_price(p, Some(d)) >= 0.0);
        }
    }
}
