//! Test helpers for constructing catalogue fixtures.
//!
//! # Examples
//!
//! ```
//! use storefront::catalog::models::test_support::{product, review_at, review_feed};
//!
//! let feed = review_feed(vec![review_at(1, "2024-01-01", 5)]);
//! assert_eq!(feed.articles.len(), 1);
//!
//! let card = product(7, "Canvas tote", 2_900_000);
//! assert_eq!(card.display_price(), "₩29,000");
//! ```

use chrono::NaiveDate;

use super::{Product, ProductListing, Review, ReviewFeed};

/// Creates a review created at midnight UTC on `date` with `views` hits.
///
/// `date` must be formatted `YYYY-MM-DD`; an unparsable date leaves the
/// timestamp unset.
///
/// # Examples
///
/// ```
/// use storefront::catalog::models::test_support::review_at;
///
/// let review = review_at(3, "2024-01-02", 9);
/// assert_eq!(review.display_date(), "2024-01-02");
/// assert_eq!(review.view_count, Some(9));
/// ```
#[must_use]
pub fn review_at(id: u64, date: &str, views: u64) -> Review {
    let mut review = Review::new(id)
        .with_title(format!("Review {id}"))
        .with_author("shopper")
        .with_rating(4)
        .with_view_count(views)
        .with_body_html(format!("<p>Review body {id}</p>"));
    review.created_at = NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .ok()
        .and_then(|day| day.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc());
    review
}

/// Creates `count` reviews with ids starting at 1, newest last.
///
/// # Examples
///
/// ```
/// use storefront::catalog::models::test_support::create_reviews;
///
/// let reviews = create_reviews(3);
/// assert_eq!(reviews.iter().map(|review| review.id).collect::<Vec<_>>(), vec![1, 2, 3]);
/// ```
#[must_use]
pub fn create_reviews(count: u64) -> Vec<Review> {
    (1..=count)
        .map(|id| {
            let day = id.rem_euclid(28).saturating_add(1);
            review_at(id, &format!("2024-01-{day:02}"), id.saturating_mul(10))
        })
        .collect()
}

/// Wraps reviews into a feed.
#[must_use]
pub const fn review_feed(articles: Vec<Review>) -> ReviewFeed {
    ReviewFeed { articles }
}

/// Creates a product with a name, price in hundredths, and an image URL
/// derived from its id.
#[must_use]
pub fn product(id: u64, name: &str, price_minor: u64) -> Product {
    Product {
        id,
        name: Some(name.to_owned()),
        price_minor: Some(price_minor),
        image_url: Some(format!("https://cdn.example/product-{id}.jpg")),
        summary: None,
    }
}

/// Wraps products into a listing.
#[must_use]
pub const fn listing(products: Vec<Product>) -> ProductListing {
    ProductListing { products }
}
