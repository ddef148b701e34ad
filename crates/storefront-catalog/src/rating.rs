//! Rating aggregation over product reviews.

use crate::product::{Product, Review};
use serde::{Deserialize, Serialize};

/// Highest star value.
pub const MAX_STARS: u8 = 5;

/// Mean review rating, or the catalog rating when there are no reviews.
///
/// Reviews without a rating count as 0; a product without reviews or a
/// catalog rating rates 0.
pub fn average_rating(product: &Product) -> f64 {
    if product.reviews.is_empty() {
        return product.rating.unwrap_or(0.0);
    }
    let sum: f64 = product
        .reviews
        .iter()
        .map(|r| r.rating.unwrap_or(0.0))
        .sum();
    sum / product.reviews.len() as f64
}

/// Number of filled stars for a rating value, rounded to the nearest star.
pub fn filled_stars(value: f64) -> u8 {
    if !value.is_finite() {
        return 0;
    }
    value.round().clamp(0.0, MAX_STARS as f64) as u8
}

/// Per-star review counts.
///
/// Index 0 collects unrated reviews and ratings that round below one star.
/// It is never displayed but keeps the counts summing to the review total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RatingHistogram {
    counts: [u32; MAX_STARS as usize + 1],
}

impl RatingHistogram {
    /// Build a histogram from reviews.
    pub fn from_reviews(reviews: &[Review]) -> Self {
        let mut histogram = Self::default();
        for review in reviews {
            let bucket = review.rating.map(filled_stars).unwrap_or(0);
            histogram.counts[bucket as usize] += 1;
        }
        debug_assert_eq!(histogram.total() as usize, reviews.len());
        histogram
    }

    /// Count of reviews in a star bucket (0-5). Out-of-range buckets are empty.
    pub fn count(&self, stars: u8) -> u32 {
        self.counts.get(stars as usize).copied().unwrap_or(0)
    }

    /// Reviews that land in no displayed bucket.
    pub fn unrated(&self) -> u32 {
        self.counts[0]
    }

    /// Total reviews counted, including the unrated bucket.
    pub fn total(&self) -> u32 {
        self.counts.iter().sum()
    }

    /// Displayed rows, highest star first: `(stars, count)`.
    pub fn rows(&self) -> impl Iterator<Item = (u8, u32)> + '_ {
        (1..=MAX_STARS).rev().map(move |stars| (stars, self.count(stars)))
    }

    /// Share of all reviews in a star bucket, as a percentage.
    pub fn percentage(&self, stars: u8) -> f32 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        (self.count(stars) as f32 / total as f32) * 100.0
    }
}

/// Aggregated rating figures for a product.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RatingSummary {
    pub average: f64,
    pub filled_stars: u8,
    pub review_count: usize,
    pub histogram: RatingHistogram,
}

impl RatingSummary {
    /// Aggregate a product's reviews.
    pub fn of(product: &Product) -> Self {
        let average = average_rating(product);
        Self {
            average,
            filled_stars: filled_stars(average),
            review_count: product.reviews.len(),
            histogram: RatingHistogram::from_reviews(&product.reviews),
        }
    }

    /// "1 review", "3 reviews", "0 reviews".
    pub fn review_count_label(&self) -> String {
        if self.review_count == 1 {
            "1 review".to_string()
        } else {
            format!("{} reviews", self.review_count)
        }
    }

    /// Average formatted to one decimal, e.g. "4.0 of 5".
    pub fn average_label(&self) -> String {
        format!("{:.1} of {}", self.average, MAX_STARS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reviewed(ratings: &[Option<f64>]) -> Product {
        let mut product = Product::new(1, "A", 1.0);
        product.reviews = ratings
            .iter()
            .map(|r| Review {
                rating: *r,
                ..Default::default()
            })
            .collect();
        product
    }

    #[test]
    fn test_average_and_histogram() {
        let product = reviewed(&[Some(4.0), Some(5.0), Some(3.0)]);
        assert_eq!(average_rating(&product), 4.0);

        let histogram = RatingHistogram::from_reviews(&product.reviews);
        let rows: Vec<_> = histogram.rows().collect();
        assert_eq!(rows, vec![(5, 1), (4, 1), (3, 1), (2, 0), (1, 0)]);
    }

    #[test]
    fn test_fallback_to_catalog_rating() {
        let product = Product::new(1, "A", 1.0).with_rating(4.56);
        assert_eq!(average_rating(&product), 4.56);
        assert_eq!(average_rating(&Product::new(2, "B", 1.0)), 0.0);
    }

    #[test]
    fn test_missing_rating_counts_as_zero() {
        let product = reviewed(&[Some(5.0), None]);
        assert_eq!(average_rating(&product), 2.5);

        let histogram = RatingHistogram::from_reviews(&product.reviews);
        assert_eq!(histogram.unrated(), 1);
        assert_eq!(histogram.count(5), 1);
        assert_eq!(histogram.total(), 2);
    }

    #[test]
    fn test_histogram_rounds_and_clamps() {
        let product = reviewed(&[Some(4.5), Some(1.4), Some(7.0), Some(0.2)]);
        let histogram = RatingHistogram::from_reviews(&product.reviews);
        assert_eq!(histogram.count(5), 2);
        assert_eq!(histogram.count(1), 1);
        assert_eq!(histogram.unrated(), 1);
        assert_eq!(histogram.total() as usize, product.reviews.len());
    }

    #[test]
    fn test_filled_stars() {
        assert_eq!(filled_stars(4.49), 4);
        assert_eq!(filled_stars(4.5), 5);
        assert_eq!(filled_stars(-1.0), 0);
        assert_eq!(filled_stars(f64::NAN), 0);
    }

    #[test]
    fn test_summary_labels() {
        let summary = RatingSummary::of(&reviewed(&[Some(4.0)]));
        assert_eq!(summary.review_count_label(), "1 review");
        assert_eq!(summary.average_label(), "4.0 of 5");
        assert_eq!(summary.histogram.percentage(4), 100.0);

        let empty = RatingSummary::of(&Product::new(1, "A", 1.0));
        assert_eq!(empty.review_count_label(), "0 reviews");
        assert_eq!(empty.histogram.percentage(5), 0.0);
    }
}
