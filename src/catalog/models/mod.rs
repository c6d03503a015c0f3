//! Data models for the storefront catalogue.
//!
//! Types prefixed with `Api` are internal deserialisation targets matching
//! the remote JSON payloads; they convert into the public domain types.
//! Every optional field degrades to `None` instead of failing the whole
//! payload, so a single malformed review never hides the rest of the feed.

use std::collections::HashSet;
use std::fmt;
use std::sync::OnceLock;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::Deserialize;

use super::error::FetchError;
use super::markup;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

/// Marker rendered in place of missing numeric fields.
pub const NOT_AVAILABLE: &str = "n/a";

/// Highest star rating a review can carry.
pub const MAX_RATING: u8 = 5;

/// A product card from the catalogue listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Product {
    /// Product number.
    pub id: u64,
    /// Display name.
    pub name: Option<String>,
    /// Price in hundredths of the currency unit, when known.
    pub price_minor: Option<u64>,
    /// Detail image URL.
    pub image_url: Option<String>,
    /// Short marketing summary.
    pub summary: Option<String>,
}

impl Product {
    /// Returns the display name, or a placeholder for unnamed products.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("untitled product")
    }

    /// Formats the price as won with thousands separators.
    ///
    /// # Examples
    ///
    /// ```
    /// use storefront::catalog::Product;
    ///
    /// let product = Product { id: 1, price_minor: Some(1_500_000), ..Default::default() };
    /// assert_eq!(product.display_price(), "₩15,000");
    /// assert_eq!(Product::default().display_price(), "n/a");
    /// ```
    #[must_use]
    pub fn display_price(&self) -> String {
        self.price_minor
            .map_or_else(|| NOT_AVAILABLE.to_owned(), format_won)
    }
}

/// Result of the products operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductListing {
    /// Products in the order returned by the endpoint.
    pub products: Vec<Product>,
}

impl ProductListing {
    /// Returns the first product's image, used as the review thumbnail
    /// fallback.
    #[must_use]
    pub fn lead_image(&self) -> Option<&str> {
        self.products
            .first()
            .and_then(|product| product.image_url.as_deref())
    }
}

/// A single user review.
///
/// The first embedded image is extracted lazily from `body_html` and cached
/// after the first call to [`Review::first_image`].
#[derive(Debug, Clone, Default)]
pub struct Review {
    /// Article number, unique within the feed.
    pub id: u64,
    /// Review title.
    pub title: Option<String>,
    /// Author display name (unmasked).
    pub author: Option<String>,
    /// Star rating, 0 to 5.
    pub rating: Option<u8>,
    /// Number of times the review was viewed.
    pub view_count: Option<u64>,
    /// Creation timestamp.
    pub created_at: Option<DateTime<Utc>>,
    /// Rich-text body.
    pub body_html: Option<String>,
    thumbnail: OnceLock<Option<String>>,
}

impl PartialEq for Review {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
            && self.title == other.title
            && self.author == other.author
            && self.rating == other.rating
            && self.view_count == other.view_count
            && self.created_at == other.created_at
            && self.body_html == other.body_html
    }
}

impl Eq for Review {}

impl Review {
    /// Creates a review with only an id; other fields are set with the
    /// `with_*` builders.
    #[must_use]
    pub fn new(id: u64) -> Self {
        Self {
            id,
            ..Self::default()
        }
    }

    /// Sets the title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the author.
    #[must_use]
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    /// Sets the star rating, clamped to [`MAX_RATING`].
    #[must_use]
    pub fn with_rating(mut self, rating: u8) -> Self {
        self.rating = Some(rating.min(MAX_RATING));
        self
    }

    /// Sets the view count.
    #[must_use]
    pub fn with_view_count(mut self, view_count: u64) -> Self {
        self.view_count = Some(view_count);
        self
    }

    /// Sets the creation timestamp.
    #[must_use]
    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }

    /// Sets the rich-text body, discarding any cached thumbnail.
    #[must_use]
    pub fn with_body_html(mut self, body_html: impl Into<String>) -> Self {
        self.body_html = Some(body_html.into());
        self.thumbnail = OnceLock::new();
        self
    }

    /// Returns the first image embedded in the body, computing it once.
    #[must_use]
    pub fn first_image(&self) -> Option<&str> {
        self.thumbnail
            .get_or_init(|| self.body_html.as_deref().and_then(markup::first_image))
            .as_deref()
    }

    /// Returns the author truncated to two characters followed by a mask.
    ///
    /// # Examples
    ///
    /// ```
    /// use storefront::catalog::Review;
    ///
    /// assert_eq!(Review::new(1).with_author("홍길동").masked_author(), "홍길****");
    /// assert_eq!(Review::new(2).masked_author(), "****");
    /// ```
    #[must_use]
    pub fn masked_author(&self) -> String {
        let visible: String = self
            .author
            .as_deref()
            .unwrap_or_default()
            .chars()
            .take(2)
            .collect();
        format!("{visible}****")
    }

    /// Renders the rating as five stars, or the not-available marker.
    #[must_use]
    pub fn star_line(&self) -> String {
        self.rating.map_or_else(
            || NOT_AVAILABLE.to_owned(),
            |rating| {
                (1..=MAX_RATING)
                    .map(|star| if star <= rating { '★' } else { '☆' })
                    .collect()
            },
        )
    }

    /// Returns the view count for display.
    #[must_use]
    pub fn display_views(&self) -> String {
        self.view_count
            .map_or_else(|| NOT_AVAILABLE.to_owned(), |views| views.to_string())
    }

    /// Returns the creation date for display (`YYYY-MM-DD`).
    #[must_use]
    pub fn display_date(&self) -> String {
        self.created_at.map_or_else(
            || NOT_AVAILABLE.to_owned(),
            |created| created.format("%Y-%m-%d").to_string(),
        )
    }

    /// Returns the body as a single line of plain text.
    #[must_use]
    pub fn body_text(&self) -> String {
        self.body_html
            .as_deref()
            .map(markup::plain_text)
            .unwrap_or_default()
    }
}

/// Result of the reviews operation, in fetch order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReviewFeed {
    /// Reviews in the order the endpoint returned them.
    pub articles: Vec<Review>,
}

/// Opaque sales report payload.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SalesReport(pub serde_json::Value);

impl SalesReport {
    /// Pretty-prints the report as JSON.
    #[must_use]
    pub fn to_pretty_json(&self) -> String {
        serde_json::to_string_pretty(&self.0).unwrap_or_else(|_| self.0.to_string())
    }
}

/// Inclusive calendar date range for the sales report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// Creates a range, rejecting inverted bounds.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::InvalidDateRange`] when `start` is after `end`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, FetchError> {
        if start > end {
            return Err(FetchError::InvalidDateRange {
                message: format!("start date {start} is after end date {end}"),
            });
        }
        Ok(Self { start, end })
    }

    /// Parses a range from two `YYYY-MM-DD` strings.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::InvalidDateRange`] when either date is malformed
    /// or the bounds are inverted.
    pub fn parse(start: &str, end: &str) -> Result<Self, FetchError> {
        Self::new(Self::parse_day(start)?, Self::parse_day(end)?)
    }

    /// Parses one `YYYY-MM-DD` date.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::InvalidDateRange`] when the date is malformed.
    pub fn parse_day(value: &str) -> Result<NaiveDate, FetchError> {
        NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|error| {
            FetchError::InvalidDateRange {
                message: format!("'{value}' is not a YYYY-MM-DD date: {error}"),
            }
        })
    }

    /// Returns the `days`-long range ending on `end`.
    #[must_use]
    pub fn ending_on(end: NaiveDate, days: u32) -> Self {
        let start = end
            .checked_sub_days(chrono::Days::new(u64::from(days.saturating_sub(1))))
            .unwrap_or(end);
        Self { start, end }
    }

    /// First day of the range.
    #[must_use]
    pub const fn start(&self) -> NaiveDate {
        self.start
    }

    /// Last day of the range.
    #[must_use]
    pub const fn end(&self) -> NaiveDate {
        self.end
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// Formats an amount in hundredths as won with thousands separators.
fn format_won(minor: u64) -> String {
    let whole = minor.div_euclid(100);
    let fraction = minor.rem_euclid(100);
    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len().saturating_add(digits.len().div_euclid(3)));
    for (position, digit) in digits.chars().enumerate() {
        let remaining = digits.len().saturating_sub(position);
        if position > 0 && remaining.rem_euclid(3) == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    if fraction == 0 {
        format!("₩{grouped}")
    } else {
        format!("₩{grouped}.{fraction:02}")
    }
}

/// Parses a price given either as a JSON number or a decimal string.
fn parse_price_minor(value: &serde_json::Value) -> Option<u64> {
    match value {
        serde_json::Value::Number(number) => number
            .as_u64()
            .and_then(|whole| whole.checked_mul(100))
            .or_else(|| number.as_f64().and_then(|float| parse_decimal(&float.to_string()))),
        serde_json::Value::String(text) => parse_decimal(text),
        _ => None,
    }
}

fn parse_decimal(text: &str) -> Option<u64> {
    let cleaned: String = text.trim().chars().filter(|ch| *ch != ',').collect();
    if cleaned.is_empty() {
        return None;
    }
    let (whole, fraction) = cleaned.split_once('.').unwrap_or((cleaned.as_str(), ""));
    let whole_value: u64 = if whole.is_empty() { 0 } else { whole.parse().ok()? };
    let fraction_digits: String = fraction.chars().chain("00".chars()).take(2).collect();
    let fraction_value: u64 = fraction_digits.parse().ok()?;
    whole_value.checked_mul(100)?.checked_add(fraction_value)
}

/// Parses the review timestamp formats seen on the wire.
fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    let trimmed = value.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(parsed.with_timezone(&Utc));
    }
    if let Ok(parsed) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%d %H:%M:%S") {
        return Some(parsed.and_utc());
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Accepts ids sent either as numbers or numeric strings.
fn parse_id(value: &serde_json::Value) -> Option<u64> {
    match value {
        serde_json::Value::Number(number) => number.as_u64(),
        serde_json::Value::String(text) => text.trim().parse().ok(),
        _ => None,
    }
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiProductListing {
    #[serde(default)]
    pub(crate) products: Vec<ApiProduct>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiProduct {
    #[serde(default)]
    pub(crate) product_no: serde_json::Value,
    pub(crate) product_name: Option<String>,
    #[serde(default)]
    pub(crate) price: serde_json::Value,
    pub(crate) detail_image: Option<String>,
    pub(crate) summary_description: Option<String>,
    pub(crate) simple_description: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiReviewFeed {
    #[serde(default)]
    pub(crate) articles: Vec<ApiReview>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiReview {
    #[serde(default)]
    pub(crate) article_no: serde_json::Value,
    pub(crate) title: Option<String>,
    pub(crate) writer: Option<String>,
    #[serde(default)]
    pub(crate) rating: serde_json::Value,
    #[serde(default)]
    pub(crate) hit: serde_json::Value,
    pub(crate) created_date: Option<String>,
    pub(crate) content: Option<String>,
}

impl From<ApiProduct> for Product {
    fn from(value: ApiProduct) -> Self {
        Self {
            id: parse_id(&value.product_no).unwrap_or_default(),
            name: value.product_name,
            price_minor: parse_price_minor(&value.price),
            image_url: value.detail_image.filter(|url| !url.trim().is_empty()),
            summary: value
                .summary_description
                .filter(|text| !text.trim().is_empty())
                .or(value.simple_description),
        }
    }
}

impl From<ApiProductListing> for ProductListing {
    fn from(value: ApiProductListing) -> Self {
        Self {
            products: value.products.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<ApiReview> for Review {
    fn from(value: ApiReview) -> Self {
        Self {
            id: parse_id(&value.article_no).unwrap_or_default(),
            title: value.title,
            author: value.writer,
            rating: parse_id(&value.rating)
                .and_then(|rating| u8::try_from(rating).ok())
                .map(|rating| rating.min(MAX_RATING)),
            view_count: parse_id(&value.hit),
            created_at: value.created_date.as_deref().and_then(parse_timestamp),
            body_html: value.content,
            thumbnail: OnceLock::new(),
        }
    }
}

/// Detail navigation finds reviews by id, so articles without a usable
/// number, or repeating an earlier one, are dropped.
impl From<ApiReviewFeed> for ReviewFeed {
    fn from(value: ApiReviewFeed) -> Self {
        let mut seen = HashSet::new();
        let articles = value
            .articles
            .into_iter()
            .filter(|article| match parse_id(&article.article_no) {
                Some(id) if seen.insert(id) => true,
                Some(id) => {
                    tracing::warn!(id, "dropping review with a duplicate article number");
                    false
                }
                None => {
                    tracing::warn!(
                        title = article.title.as_deref().unwrap_or_default(),
                        "dropping review without an article number"
                    );
                    false
                }
            })
            .map(Into::into)
            .collect();
        Self { articles }
    }
}
