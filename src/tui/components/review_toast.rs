//! Toast feed rendering the staged review reveal.
//!
//! Shows the visible window of revealed reviews (at most three, ending at
//! the reveal cursor), the loading pulse, and the "view all" prompt once the
//! sequence completes.

use crate::catalog::{ImageFallback, Review, ReviewFeed};
use crate::reviews::RevealState;
use crate::tui::state::LoadState;

use super::text_truncate::fit_width;

/// Context for rendering the toast feed.
#[derive(Debug, Clone)]
pub struct ReviewToastViewContext<'a> {
    /// Reviews load state, in fetch order.
    pub reviews: &'a LoadState<ReviewFeed>,
    /// Current reveal snapshot.
    pub reveal: &'a RevealState,
    /// Thumbnail fallback chain.
    pub fallback: &'a ImageFallback,
    /// Maximum columns available.
    pub max_width: usize,
}

/// Renders the toast feed.
#[derive(Debug, Clone, Default)]
pub struct ReviewToastComponent;

impl ReviewToastComponent {
    /// Creates a new toast component.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Renders the revealed toasts, loader, and "view all" prompt.
    #[must_use]
    pub fn view(&self, ctx: &ReviewToastViewContext<'_>) -> String {
        let feed = match ctx.reviews {
            LoadState::Loading => return "  Loading reviews...\n".to_owned(),
            LoadState::Failed(error) => return format!("  Reviews unavailable: {error}\n"),
            LoadState::Ready(feed) => feed,
        };

        let mut output = String::new();
        for review in ctx.reveal.visible(&feed.articles) {
            let line = format_toast(review, ctx.fallback);
            output.push_str(&fit_width(&line, ctx.max_width));
            output.push('\n');
        }
        if ctx.reveal.is_pulsing {
            output.push_str("  ···\n");
        }
        if ctx.reveal.all_revealed {
            output.push_str("  View all reviews (v)\n");
        }
        output
    }
}

/// Formats one toast line: thumbnail, title, stars, and masked author.
pub(crate) fn format_toast(review: &Review, fallback: &ImageFallback) -> String {
    let title = review.title.as_deref().unwrap_or("(untitled)");
    format!(
        "  [{thumb}] {title} {stars} {author}",
        thumb = fallback.resolve(review.first_image()),
        stars = review.star_line(),
        author = review.masked_author()
    )
}
