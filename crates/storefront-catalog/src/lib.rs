//! Catalog domain types and derived values for the storefront.
//!
//! - **Product**: product and review records in the remote catalog's shape
//! - **Pricing**: base and discounted display prices
//! - **Rating**: average rating and per-star histogram over reviews
//! - **Review**: review display with fallbacks
//! - **Selection**: related products and promotions for the detail page
//!
//! # Example
//!
//! ```rust
//! use storefront_catalog::prelude::*;
//!
//! let product = Product::new(1, "Mascara", 100.0).with_discount(20.0);
//! let price = DisplayPrice::of(&product);
//! assert_eq!(price.discounted, 80.0);
//! ```

pub mod card;
pub mod ids;
pub mod money;
pub mod pricing;
pub mod product;
pub mod rating;
pub mod review;
pub mod selection;

pub use card::{cards, ProductCard, DEFAULT_PLACEHOLDER_IMAGE};
pub use ids::ProductId;
pub use money::Currency;
pub use pricing::{discounted_price, DisplayPrice};
pub use product::{category_display_name, null_as_default, Product, Review};
pub use rating::{average_rating, filled_stars, RatingHistogram, RatingSummary};
pub use review::{render_reviews, ReviewDisplay};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::card::{ProductCard, DEFAULT_PLACEHOLDER_IMAGE};
    pub use crate::ids::ProductId;
    pub use crate::money::Currency;
    pub use crate::pricing::DisplayPrice;
    pub use crate::product::{Product, Review};
    pub use crate::rating::{RatingHistogram, RatingSummary};
    pub use crate::review::ReviewDisplay;
    pub use crate::selection::{promotions, related_products};
}
