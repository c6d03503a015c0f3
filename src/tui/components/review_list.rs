//! Sorted review list shown after "view all".
//!
//! Renders a scrollable list of reviews in the active sort order with cursor
//! highlighting.

use crate::catalog::Review;
use crate::reviews::SortOrder;

use super::text_truncate::fit_width;

/// Context for rendering the review list view.
#[derive(Debug, Clone)]
pub struct ReviewListViewContext<'a> {
    /// Reviews in display order.
    pub sorted: &'a [&'a Review],
    /// Active sort order, shown in the list header.
    pub sort_order: SortOrder,
    /// Current cursor position (0-indexed).
    pub cursor_position: usize,
    /// Number of rows scrolled from top.
    pub scroll_offset: usize,
    /// Maximum visible rows.
    pub visible_height: usize,
    /// Maximum columns available.
    pub max_width: usize,
}

/// Component for displaying the sorted reviews.
#[derive(Debug, Clone, Default)]
pub struct ReviewListComponent;

impl ReviewListComponent {
    /// Creates a new review list component.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Renders the sort header and the reviews inside the visible window.
    #[must_use]
    pub fn view(&self, ctx: &ReviewListViewContext<'_>) -> String {
        let mut output = format!(
            "Sort: {} ({} reviews)\n",
            ctx.sort_order.label(),
            ctx.sorted.len()
        );
        if ctx.sorted.is_empty() {
            output.push_str("  No reviews yet.\n");
            return output;
        }

        let rows = ctx.visible_height.saturating_sub(1).max(1);
        for (index, review) in ctx
            .sorted
            .iter()
            .enumerate()
            .skip(ctx.scroll_offset)
            .take(rows)
        {
            let prefix = if index == ctx.cursor_position { ">" } else { " " };
            let line = format_review_line(review, prefix);
            output.push_str(&fit_width(&line, ctx.max_width));
            output.push('\n');
        }
        output
    }
}

/// Formats a single review row.
fn format_review_line(review: &Review, prefix: &str) -> String {
    let title = review.title.as_deref().unwrap_or("(untitled)");
    format!(
        "{prefix} {date}  {views:>5} views  {stars}  {title}",
        date = review.display_date(),
        views = review.display_views(),
        stars = review.star_line()
    )
}

#[cfg(test)]
mod tests {
    use rstest::{fixture, rstest};

    use super::*;
    use crate::catalog::models::test_support::review_at;
    use crate::reviews::sort_reviews;

    #[fixture]
    fn reviews() -> Vec<Review> {
        vec![
            review_at(1, "2024-01-01", 5),
            review_at(2, "2024-01-03", 1),
            review_at(3, "2024-01-02", 9),
        ]
    }

    fn render(sorted: &[&Review], order: SortOrder, cursor: usize) -> String {
        ReviewListComponent::new().view(&ReviewListViewContext {
            sorted,
            sort_order: order,
            cursor_position: cursor,
            scroll_offset: 0,
            visible_height: 10,
            max_width: 100,
        })
    }

    #[rstest]
    fn renders_in_sorted_order(reviews: Vec<Review>) {
        let sorted = sort_reviews(&reviews, SortOrder::Views);
        let output = render(&sorted, SortOrder::Views, 0);
        let titles: Vec<&str> = output
            .lines()
            .skip(1)
            .filter_map(|line| line.rsplit("  ").next())
            .collect();

        assert!(output.starts_with("Sort: Most viewed (3 reviews)"));
        assert_eq!(titles, vec!["Review 3", "Review 1", "Review 2"]);
    }

    #[rstest]
    fn highlights_cursor_row(reviews: Vec<Review>) {
        let sorted = sort_reviews(&reviews, SortOrder::Latest);
        let output = render(&sorted, SortOrder::Latest, 1);

        let selected: Vec<&str> = output.lines().filter(|line| line.starts_with('>')).collect();
        assert_eq!(selected.len(), 1);
        assert!(selected.first().is_some_and(|line| line.ends_with("Review 3")));
    }

    #[rstest]
    fn missing_fields_render_not_available() {
        let bare = Review::new(4);
        let sorted = vec![&bare];
        let output = render(&sorted, SortOrder::Latest, 0);

        assert!(output.contains("> n/a    n/a views  n/a  (untitled)"));
    }

    #[rstest]
    fn empty_list_shows_hint() {
        assert!(render(&[], SortOrder::Latest, 0).contains("No reviews yet."));
    }
}
