//! Review detail pane with previous/next position.

use crate::catalog::{ImageFallback, Review};

use super::text_truncate::{clip_lines, fit_width};
use super::text_wrap::wrap_words;

/// Context for rendering the review detail view.
#[derive(Debug, Clone)]
pub struct ReviewDetailViewContext<'a> {
    /// Selected review, if it is still in the collection.
    pub review: Option<&'a Review>,
    /// Position of the review in the sorted collection.
    pub position: Option<usize>,
    /// Number of reviews in the sorted collection.
    pub total: usize,
    /// Thumbnail fallback chain.
    pub fallback: &'a ImageFallback,
    /// Maximum columns available.
    pub max_width: usize,
    /// Maximum rows available (0 = unlimited).
    pub max_height: usize,
}

/// Component rendering a single review.
#[derive(Debug, Clone, Default)]
pub struct ReviewDetailComponent;

impl ReviewDetailComponent {
    /// Creates a new review detail component.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Renders the review with its metadata, image, body, and pager line.
    #[must_use]
    pub fn view(&self, ctx: &ReviewDetailViewContext<'_>) -> String {
        let Some(review) = ctx.review else {
            return "  Review not found.\n".to_owned();
        };

        let mut output = String::new();
        let title = review.title.as_deref().unwrap_or("(untitled)");
        push_line(&mut output, &format!("  {title}"), ctx.max_width);
        push_line(
            &mut output,
            &format!(
                "  {stars}  by {author}  on {date}  {views} views",
                stars = review.star_line(),
                author = review.masked_author(),
                date = review.display_date(),
                views = review.display_views()
            ),
            ctx.max_width,
        );
        push_line(
            &mut output,
            &format!("  Image: {}", ctx.fallback.resolve(review.first_image())),
            ctx.max_width,
        );
        output.push('\n');

        for line in wrap_words(&review.body_text(), ctx.max_width, "  ") {
            output.push_str(&line);
            output.push('\n');
        }
        output.push('\n');
        push_line(&mut output, &pager_line(ctx.position, ctx.total), ctx.max_width);

        clip_lines(&output, ctx.max_height)
    }
}

fn push_line(output: &mut String, line: &str, max_width: usize) {
    output.push_str(&fit_width(line, max_width));
    output.push('\n');
}

/// Renders "‹ 2/5 ›" with arrows hidden at the boundaries.
fn pager_line(position: Option<usize>, total: usize) -> String {
    let Some(index) = position else {
        return format!("  -/{total}");
    };
    let previous = if index == 0 { " " } else { "‹" };
    let next = if index.saturating_add(1) >= total {
        " "
    } else {
        "›"
    };
    format!("  {previous} {}/{total} {next}", index.saturating_add(1))
}
