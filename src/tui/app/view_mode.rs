//! Active view and layout constants for the storefront TUI.

/// Layout rows reserved for the header and status bar.
pub(crate) const CHROME_HEIGHT: usize = 2;
/// Rows reserved below the product grid for the toast feed: a blank line,
/// the section heading, three toasts, the loader, and the "view all" prompt.
pub(crate) const TOAST_PANE_HEIGHT: usize = 7;
/// Minimum rows for a list, ensuring at least one row is visible even when
/// the terminal height is very small.
pub(crate) const MIN_LIST_HEIGHT: usize = 1;

/// Tracks which view is currently active in the TUI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ViewMode {
    /// Product grid with the toast feed below it.
    Storefront,
    /// Product modal with its sales report.
    ProductDetail,
    /// Full sorted review list.
    ReviewList,
    /// Single review with previous/next stepping.
    ReviewDetail,
}

impl ViewMode {
    /// Title shown in the header.
    pub(crate) const fn title(self) -> &'static str {
        match self {
            Self::Storefront => "Products",
            Self::ProductDetail => "Product",
            Self::ReviewList => "All reviews",
            Self::ReviewDetail => "Review",
        }
    }
}
