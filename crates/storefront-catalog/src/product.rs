//! Product and review records as served by the remote catalog.

use crate::ids::ProductId;
use serde::{Deserialize, Deserializer, Serialize};

/// Fallback label for a missing brand or category.
pub const NOT_SPECIFIED: &str = "not specified";

/// Maximum number of gallery thumbnails shown beside the main image.
pub const GALLERY_THUMBNAIL_LIMIT: usize = 5;

/// A product in the catalog.
///
/// Every field but `id` may be missing or null in the remote payload and
/// reads as its default.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product title.
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    /// Full description.
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    /// Price in base currency units.
    #[serde(default, deserialize_with = "null_as_default")]
    pub price: f64,
    /// Discount in percent (0-100). Absent and zero both mean no discount.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount_percentage: Option<f64>,
    /// Catalog rating (0-5), used when the product has no reviews.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    /// Single listing image.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    /// Ordered gallery images.
    #[serde(default, deserialize_with = "null_as_default")]
    pub images: Vec<String>,
    /// Category identifier (e.g. "mens-shirts").
    #[serde(default, deserialize_with = "null_as_default")]
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stock: Option<u32>,
    /// Reviews, in remote order.
    #[serde(default, deserialize_with = "null_as_default")]
    pub reviews: Vec<Review>,
}

impl Product {
    /// Create a product with the given id, title and price.
    pub fn new(id: u64, title: impl Into<String>, price: f64) -> Self {
        Self {
            id: ProductId::new(id),
            title: title.into(),
            description: String::new(),
            price,
            discount_percentage: None,
            rating: None,
            thumbnail: None,
            images: Vec::new(),
            category: String::new(),
            brand: None,
            stock: None,
            reviews: Vec::new(),
        }
    }

    /// Set the category.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Set the discount percentage.
    pub fn with_discount(mut self, percent: f64) -> Self {
        self.discount_percentage = Some(percent);
        self
    }

    /// Set the catalog rating.
    pub fn with_rating(mut self, rating: f64) -> Self {
        self.rating = Some(rating);
        self
    }

    /// Append a review.
    pub fn with_review(mut self, review: Review) -> Self {
        self.reviews.push(review);
        self
    }

    /// Discount in effect, if any. Zero counts as no discount.
    pub fn active_discount(&self) -> Option<f64> {
        self.discount_percentage.filter(|d| *d != 0.0)
    }

    /// Check if the product carries a positive discount.
    pub fn is_discounted(&self) -> bool {
        self.discount_percentage.map(|d| d > 0.0).unwrap_or(false)
    }

    /// Gallery images: `images` when non-empty, else the thumbnail, else none.
    pub fn gallery(&self) -> Vec<&str> {
        if !self.images.is_empty() {
            self.images.iter().map(String::as_str).collect()
        } else {
            self.thumbnail.as_deref().into_iter().collect()
        }
    }

    /// Thumbnails shown beside the main image. Empty for single-image galleries.
    pub fn gallery_thumbnails(&self) -> Vec<&str> {
        let gallery = self.gallery();
        if gallery.len() > 1 {
            gallery.into_iter().take(GALLERY_THUMBNAIL_LIMIT).collect()
        } else {
            Vec::new()
        }
    }

    /// Listing card image: thumbnail, else the first image.
    pub fn card_image(&self) -> Option<&str> {
        self.thumbnail
            .as_deref()
            .filter(|t| !t.is_empty())
            .or_else(|| self.images.first().map(String::as_str))
    }

    /// Brand for display.
    pub fn brand_label(&self) -> &str {
        self.brand
            .as_deref()
            .filter(|b| !b.is_empty())
            .unwrap_or(NOT_SPECIFIED)
    }

    /// Category identifier for display.
    pub fn category_label(&self) -> &str {
        if self.category.is_empty() {
            NOT_SPECIFIED
        } else {
            &self.category
        }
    }

    /// Stock count, shown only when present and non-zero.
    pub fn visible_stock(&self) -> Option<u32> {
        self.stock.filter(|s| *s > 0)
    }
}

/// A single customer review.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reviewer_name: Option<String>,
    /// Star rating (0-5).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    /// Legacy review text, read when `comment` is missing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub review: Option<String>,
    /// ISO-8601 timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

impl Review {
    /// Create a review with just a rating.
    pub fn rated(rating: f64) -> Self {
        Self {
            rating: Some(rating),
            ..Default::default()
        }
    }
}

/// Human-readable category label: dashes become spaces and every word starts
/// upper-case.
///
/// ```
/// use storefront_catalog::category_display_name;
/// assert_eq!(category_display_name("mens-shirts"), "Mens Shirts");
/// ```
pub fn category_display_name(category: &str) -> String {
    category
        .split('-')
        .flat_map(|part| part.split(' '))
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Deserialize a missing-or-null value as `T::default()`.
///
/// Pair with `#[serde(default)]` so absent keys are covered too.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_json() -> &'static str {
        r#"{
            "id": 1,
            "title": "Essence Mascara",
            "description": "Popular mascara",
            "price": 9.99,
            "discountPercentage": 7.17,
            "rating": 4.94,
            "stock": 5,
            "brand": "Essence",
            "category": "beauty",
            "thumbnail": "https://cdn.example/1/thumb.png",
            "images": ["https://cdn.example/1/1.png"],
            "reviews": [
                {"rating": 2, "comment": "Very unhappy", "date": "2024-05-23T08:56:21.618Z", "reviewerName": "John Doe"}
            ],
            "sku": "RCH45Q1A"
        }"#
    }

    #[test]
    fn test_deserialize_remote_shape() {
        let product: Product = serde_json::from_str(sample_json()).unwrap();
        assert_eq!(product.id, ProductId::new(1));
        assert_eq!(product.discount_percentage, Some(7.17));
        assert_eq!(product.reviews.len(), 1);
        assert_eq!(product.reviews[0].reviewer_name.as_deref(), Some("John Doe"));
    }

    #[test]
    fn test_deserialize_sparse_product() {
        let product: Product = serde_json::from_str(r#"{"id": 3}"#).unwrap();
        assert_eq!(product.price, 0.0);
        assert!(product.images.is_empty());
        assert!(product.reviews.is_empty());
        assert_eq!(product.brand_label(), NOT_SPECIFIED);
        assert_eq!(product.category_label(), NOT_SPECIFIED);
    }

    #[test]
    fn test_deserialize_null_fields() {
        let product: Product = serde_json::from_str(
            r#"{"id": 4, "title": null, "description": null, "price": null,
                "images": null, "category": null, "reviews": null, "brand": null}"#,
        )
        .unwrap();
        assert_eq!(product.title, "");
        assert_eq!(product.price, 0.0);
        assert!(product.gallery().is_empty());
        assert!(product.reviews.is_empty());
        assert_eq!(product.category_label(), NOT_SPECIFIED);
        assert_eq!(product.brand_label(), NOT_SPECIFIED);
    }

    #[test]
    fn test_gallery_precedence() {
        let mut product = Product::new(1, "A", 1.0);
        assert!(product.gallery().is_empty());

        product.thumbnail = Some("thumb".to_string());
        assert_eq!(product.gallery(), vec!["thumb"]);
        assert!(product.gallery_thumbnails().is_empty());

        product.images = (0..7).map(|i| format!("img{}", i)).collect();
        assert_eq!(product.gallery().len(), 7);
        assert_eq!(product.gallery_thumbnails().len(), GALLERY_THUMBNAIL_LIMIT);
    }

    #[test]
    fn test_card_image_precedence() {
        let mut product = Product::new(1, "A", 1.0);
        assert_eq!(product.card_image(), None);

        product.images = vec!["first".to_string()];
        assert_eq!(product.card_image(), Some("first"));

        product.thumbnail = Some("thumb".to_string());
        assert_eq!(product.card_image(), Some("thumb"));
    }

    #[test]
    fn test_active_discount_ignores_zero() {
        let product = Product::new(1, "A", 10.0).with_discount(0.0);
        assert_eq!(product.active_discount(), None);
        assert!(!product.is_discounted());
    }

    #[test]
    fn test_visible_stock() {
        let mut product = Product::new(1, "A", 1.0);
        product.stock = Some(0);
        assert_eq!(product.visible_stock(), None);
        product.stock = Some(12);
        assert_eq!(product.visible_stock(), Some(12));
    }

    #[test]
    fn test_category_display_name() {
        assert_eq!(category_display_name("mens-shirts"), "Mens Shirts");
        assert_eq!(category_display_name("home-decoration"), "Home Decoration");
        assert_eq!(category_display_name("beauty"), "Beauty");
        assert_eq!(category_display_name("womens-bags-and-shoes"), "Womens Bags And Shoes");
        assert_eq!(category_display_name(""), "");
    }
}
