//! Review presentation with display fallbacks.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

use crate::product::Review;
use crate::rating::filled_stars;

/// Author shown when a review has no reviewer name.
pub const ANONYMOUS_REVIEWER: &str = "anonymous";

/// Text shown when a review has neither a comment nor legacy review text.
pub const NO_COMMENT: &str = "no comment";

/// Review date format (day.month.year).
pub const REVIEW_DATE_FORMAT: &str = "%d.%m.%Y";

/// A review ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReviewDisplay {
    pub author: String,
    pub text: String,
    pub stars: u8,
    pub date: String,
}

impl ReviewDisplay {
    /// Render a review. `rendered_on` stands in for a missing or unreadable date.
    pub fn render(review: &Review, rendered_on: NaiveDate) -> Self {
        let author = non_blank(review.reviewer_name.as_deref())
            .unwrap_or(ANONYMOUS_REVIEWER)
            .to_string();
        let text = non_blank(review.comment.as_deref())
            .or_else(|| non_blank(review.review.as_deref()))
            .unwrap_or(NO_COMMENT)
            .to_string();
        let date = review
            .date
            .as_deref()
            .and_then(parse_review_date)
            .unwrap_or(rendered_on)
            .format(REVIEW_DATE_FORMAT)
            .to_string();

        Self {
            author,
            text,
            stars: filled_stars(review.rating.unwrap_or(0.0)),
            date,
        }
    }
}

/// Render all reviews with one shared fallback date.
pub fn render_reviews(reviews: &[Review], rendered_on: NaiveDate) -> Vec<ReviewDisplay> {
    reviews
        .iter()
        .map(|r| ReviewDisplay::render(r, rendered_on))
        .collect()
}

/// Parse an RFC 3339 timestamp or a bare `YYYY-MM-DD` date. Timestamps are
/// read in UTC.
fn parse_review_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc).date_naive())
        .ok()
        .or_else(|| NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok())
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}
