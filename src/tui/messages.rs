//! Message types for the TUI update loop.
//!
//! Messages represent user actions, async fetch results, reveal timer
//! callbacks, and system events.

use crate::catalog::{FetchError, ProductListing, ReviewFeed, SalesReport};
use crate::reviews::TimerTicket;

/// Messages for the storefront TUI application.
#[derive(Debug, Clone)]
pub enum AppMsg {
    // Navigation
    /// Move cursor up one item.
    CursorUp,
    /// Move cursor down one item.
    CursorDown,
    /// Open the item under the cursor.
    Select,
    /// Open the most recently revealed toast review.
    OpenLatestToast,
    /// Show the full sorted review list.
    ShowAllReviews,
    /// Leave the current view.
    EscapePressed,
    /// Step to the next review in the detail view.
    NextDetail,
    /// Step to the previous review in the detail view.
    PreviousDetail,

    // Review ordering
    /// Switch between latest-first and most-viewed ordering.
    ToggleSort,

    // Swipe gestures
    /// A swipe started at the given horizontal position.
    SwipeBegin(i64),
    /// A swipe moved to the given horizontal position.
    SwipeMove(i64),
    /// The swipe was released.
    SwipeEnd,

    // Data loading
    /// Startup tick that launches the initial fetches.
    Initialized,
    /// Products fetch resolved.
    ProductsLoaded(Result<ProductListing, FetchError>),
    /// Reviews fetch resolved.
    ReviewsLoaded(Result<ReviewFeed, FetchError>),
    /// Sales report fetch for a product resolved.
    SalesReportLoaded {
        /// Product the report was requested for.
        product_id: u64,
        /// Fetch outcome.
        result: Result<SalesReport, FetchError>,
    },
    /// Fetch the reviews again and restart the reveal.
    RefreshReviews,

    // Reveal
    /// A reveal timer elapsed.
    RevealTimerFired(TimerTicket),

    // Application lifecycle
    /// Quit the application.
    Quit,
    /// Toggle help overlay.
    ToggleHelp,

    // Window events
    /// Terminal window was resized.
    WindowResized {
        /// New width in columns.
        width: u16,
        /// New height in rows.
        height: u16,
    },
}

impl AppMsg {
    /// Returns true for cursor and view navigation messages.
    #[must_use]
    pub const fn is_navigation(&self) -> bool {
        matches!(
            self,
            Self::CursorUp
                | Self::CursorDown
                | Self::Select
                | Self::OpenLatestToast
                | Self::ShowAllReviews
                | Self::EscapePressed
                | Self::NextDetail
                | Self::PreviousDetail
                | Self::ToggleSort
        )
    }

    /// Returns true for swipe gesture messages.
    #[must_use]
    pub const fn is_swipe(&self) -> bool {
        matches!(
            self,
            Self::SwipeBegin(_) | Self::SwipeMove(_) | Self::SwipeEnd
        )
    }

    /// Returns true for fetch lifecycle messages.
    #[must_use]
    pub const fn is_data(&self) -> bool {
        matches!(
            self,
            Self::Initialized
                | Self::ProductsLoaded(_)
                | Self::ReviewsLoaded(_)
                | Self::SalesReportLoaded { .. }
                | Self::RefreshReviews
        )
    }

    /// Returns true for reveal timer messages.
    #[must_use]
    pub const fn is_reveal(&self) -> bool {
        matches!(self, Self::RevealTimerFired(_))
    }
}
