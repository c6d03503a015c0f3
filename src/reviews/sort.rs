//! Display ordering for the review collection.
//!
//! Both orderings are descending and stable: reviews with equal keys keep
//! their fetch order, and reviews missing the key sort after every review
//! that has one.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::catalog::Review;

/// User-selectable ranking of the review list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SortOrder {
    /// Newest first, by creation timestamp.
    #[default]
    Latest,
    /// Most viewed first.
    Views,
}

impl SortOrder {
    /// Returns the other ordering.
    #[must_use]
    pub const fn toggle(self) -> Self {
        match self {
            Self::Latest => Self::Views,
            Self::Views => Self::Latest,
        }
    }

    /// Returns a label for display in the UI.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Latest => "Latest",
            Self::Views => "Most viewed",
        }
    }

    /// Returns the configuration keyword for this ordering.
    #[must_use]
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Latest => "latest",
            Self::Views => "views",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// Error returned when a sort keyword is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown sort order '{0}' (expected 'latest' or 'views')")]
pub struct UnknownSortOrder(pub String);

impl FromStr for SortOrder {
    type Err = UnknownSortOrder;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "latest" => Ok(Self::Latest),
            "views" => Ok(Self::Views),
            _ => Err(UnknownSortOrder(value.to_owned())),
        }
    }
}

/// Returns references to `reviews` in display order.
///
/// The input is never reordered; an empty input yields an empty vector.
///
/// # Examples
///
/// ```
/// use storefront::catalog::Review;
/// use storefront::reviews::{SortOrder, sort_reviews};
///
/// let reviews = vec![
///     Review::new(1).with_view_count(3),
///     Review::new(2).with_view_count(10),
///     Review::new(3),
/// ];
/// let ids: Vec<u64> = sort_reviews(&reviews, SortOrder::Views)
///     .iter()
///     .map(|review| review.id)
///     .collect();
/// assert_eq!(ids, vec![2, 1, 3]);
/// ```
#[must_use]
pub fn sort_reviews<'a, I>(reviews: I, order: SortOrder) -> Vec<&'a Review>
where
    I: IntoIterator<Item = &'a Review>,
{
    let mut sorted: Vec<&Review> = reviews.into_iter().collect();
    match order {
        SortOrder::Latest => {
            sorted.sort_by(|a, b| {
                descending_present_first(a.created_at.as_ref(), b.created_at.as_ref())
            });
        }
        SortOrder::Views => {
            sorted.sort_by(|a, b| {
                descending_present_first(a.view_count.as_ref(), b.view_count.as_ref())
            });
        }
    }
    sorted
}

/// Orders larger values first and `None` after every `Some`.
fn descending_present_first<T: Ord>(a: Option<&T>, b: Option<&T>) -> Ordering {
    match (a, b) {
        (Some(a_val), Some(b_val)) => b_val.cmp(a_val),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use rstest::{fixture, rstest};

    use super::*;

    fn review(id: u64, day: u32, views: u64) -> Review {
        let created = Utc
            .with_ymd_and_hms(2024, 1, day, 0, 0, 0)
            .single()
            .expect("valid timestamp");
        Review::new(id).with_created_at(created).with_view_count(views)
    }

    /// A(2024-01-01, 5 views), B(2024-01-03, 1 view), C(2024-01-02, 9 views).
    #[fixture]
    fn abc() -> Vec<Review> {
        vec![review(1, 1, 5), review(2, 3, 1), review(3, 2, 9)]
    }

    fn ids(sorted: &[&Review]) -> Vec<u64> {
        sorted.iter().map(|review| review.id).collect()
    }

    #[rstest]
    #[case::latest(SortOrder::Latest, vec![2, 3, 1])]
    #[case::views(SortOrder::Views, vec![3, 1, 2])]
    fn orders_reviews_descending(
        abc: Vec<Review>,
        #[case] order: SortOrder,
        #[case] expected: Vec<u64>,
    ) {
        assert_eq!(ids(&sort_reviews(&abc, order)), expected);
    }

    #[rstest]
    fn input_order_is_untouched(abc: Vec<Review>) {
        let _sorted = sort_reviews(&abc, SortOrder::Views);
        let fetch_order: Vec<u64> = abc.iter().map(|review| review.id).collect();
        assert_eq!(fetch_order, vec![1, 2, 3]);
    }

    #[rstest]
    #[case::latest(SortOrder::Latest)]
    #[case::views(SortOrder::Views)]
    fn sorting_is_idempotent(abc: Vec<Review>, #[case] order: SortOrder) {
        let once = sort_reviews(&abc, order);
        let twice = sort_reviews(once.iter().copied(), order);
        assert_eq!(ids(&once), ids(&twice));
    }

    #[rstest]
    fn equal_keys_keep_fetch_order() {
        let reviews = vec![review(7, 1, 4), review(3, 2, 4), review(9, 3, 4)];
        assert_eq!(ids(&sort_reviews(&reviews, SortOrder::Views)), vec![7, 3, 9]);
    }

    #[rstest]
    fn missing_keys_sort_last_in_fetch_order() {
        let reviews = vec![
            Review::new(1),
            review(2, 1, 1),
            Review::new(3),
            review(4, 2, 2),
        ];
        assert_eq!(ids(&sort_reviews(&reviews, SortOrder::Latest)), vec![4, 2, 1, 3]);
        assert_eq!(ids(&sort_reviews(&reviews, SortOrder::Views)), vec![4, 2, 1, 3]);
    }

    #[rstest]
    fn empty_input_yields_empty_output() {
        assert!(sort_reviews(&Vec::<Review>::new(), SortOrder::Latest).is_empty());
    }

    #[rstest]
    #[case::lowercase("latest", Ok(SortOrder::Latest))]
    #[case::mixed_case(" Views ", Ok(SortOrder::Views))]
    #[case::unknown("rating", Err(UnknownSortOrder("rating".to_owned())))]
    fn parses_keywords(#[case] raw: &str, #[case] expected: Result<SortOrder, UnknownSortOrder>) {
        assert_eq!(raw.parse::<SortOrder>(), expected);
    }

    #[rstest]
    fn toggle_flips_between_orders() {
        assert_eq!(SortOrder::Latest.toggle(), SortOrder::Views);
        assert_eq!(SortOrder::Latest.toggle().toggle(), SortOrder::Latest);
    }
}
