//! Main TUI application model implementing the MVU pattern.
//!
//! This module provides the storefront state and update logic. It owns the
//! three independent load states, the reveal scheduler, the detail
//! navigator, and the list cursors, and routes messages to focused handlers.
//!
//! # Module Structure
//!
//! - `data_handlers`: fetch commands and their results
//! - `model_impl`: `bubbletea_rs::Model` implementation and viewport sizing
//! - `navigation`: cursor, view, sort, and swipe handling
//! - `rendering`: view rendering methods
//! - `reveal_handlers`: reveal timer commands
//! - `view_mode`: active view and layout constants

use std::fmt;
use std::sync::Arc;

use bubbletea_rs::Cmd;

use crate::catalog::{
    DataProvider, ImageFallback, ProductListing, Review, ReviewFeed, SalesReport,
};
use crate::reviews::reveal::RevealState;
use crate::reviews::{DetailItem, DetailNavigator, RevealScheduler, SortOrder, sort_reviews};
use crate::telemetry::{NoopTelemetrySink, TelemetrySink};

use super::messages::AppMsg;
use super::state::{ListCursor, LoadState};
use super::storage::AppSettings;

mod data_handlers;
mod model_impl;
mod navigation;
mod rendering;
mod reveal_handlers;
mod view_mode;

pub(crate) use view_mode::ViewMode;

/// Main application model for the storefront TUI.
pub struct StorefrontApp {
    /// Source of the three data operations.
    provider: Option<Arc<dyn DataProvider>>,
    /// Sink for fetch and reveal telemetry.
    telemetry: Arc<dyn TelemetrySink>,
    /// Settings resolved from configuration.
    settings: AppSettings,
    /// Products load state.
    pub(crate) products: LoadState<ProductListing>,
    /// Reviews load state, in fetch order.
    pub(crate) reviews: LoadState<ReviewFeed>,
    /// Sales report for the product shown in the modal.
    pub(crate) sales_report: LoadState<SalesReport>,
    /// Active review ordering.
    sort_order: SortOrder,
    /// Staged toast reveal.
    scheduler: RevealScheduler,
    /// Detail selection and swipe tracking.
    navigator: DetailNavigator,
    /// Thumbnail fallback chain.
    fallback: ImageFallback,
    /// Active view.
    pub(crate) view_mode: ViewMode,
    /// View restored when the review detail closes.
    detail_origin: ViewMode,
    /// Cursor over the product cards.
    product_cursor: ListCursor,
    /// Cursor over the sorted review list.
    review_cursor: ListCursor,
    /// Whether help overlay is visible.
    pub(crate) show_help: bool,
    /// Terminal dimensions.
    width: u16,
    height: u16,
}

impl fmt::Debug for StorefrontApp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StorefrontApp")
            .field("has_provider", &self.provider.is_some())
            .field("products", &self.products)
            .field("reviews", &self.reviews)
            .field("sort_order", &self.sort_order)
            .field("view_mode", &self.view_mode)
            .field("selection", &self.navigator.selection())
            .finish_non_exhaustive()
    }
}

impl StorefrontApp {
    /// Creates an app with the given settings and no data provider.
    ///
    /// All three resources start in the loading state; the fetches are
    /// launched when `AppMsg::Initialized` is handled.
    #[must_use]
    pub fn new(settings: AppSettings) -> Self {
        let (width, height) = super::storage::get_initial_terminal_size();
        Self {
            provider: None,
            telemetry: Arc::new(NoopTelemetrySink),
            sort_order: settings.sort_order,
            scheduler: RevealScheduler::new(settings.timings),
            navigator: DetailNavigator::with_swipe_threshold(settings.swipe_threshold),
            fallback: ImageFallback::new(settings.placeholder_image.clone()),
            settings,
            products: LoadState::Loading,
            reviews: LoadState::Loading,
            sales_report: LoadState::Loading,
            view_mode: ViewMode::Storefront,
            detail_origin: ViewMode::Storefront,
            product_cursor: ListCursor::default(),
            review_cursor: ListCursor::default(),
            show_help: false,
            width,
            height,
        }
    }

    /// Sets the data provider used by the fetch commands.
    #[must_use]
    pub fn with_provider(mut self, provider: Arc<dyn DataProvider>) -> Self {
        self.provider = Some(provider);
        self
    }

    /// Sets the telemetry sink.
    #[must_use]
    pub fn with_telemetry_sink(mut self, sink: Arc<dyn TelemetrySink>) -> Self {
        self.telemetry = sink;
        self
    }

    /// Returns the active review ordering.
    #[must_use]
    pub const fn sort_order(&self) -> SortOrder {
        self.sort_order
    }

    /// Returns a snapshot of the toast reveal.
    #[must_use]
    pub fn reveal_state(&self) -> RevealState {
        self.scheduler.state()
    }

    /// Returns the item shown in the detail view, if any.
    #[must_use]
    pub const fn selection(&self) -> Option<DetailItem> {
        self.navigator.selection()
    }

    /// Returns the reviews in the active sort order.
    #[must_use]
    pub fn sorted_reviews(&self) -> Vec<&Review> {
        sorted_view(&self.reviews, self.sort_order)
    }

    /// Returns the position of the open review in the sorted collection.
    #[must_use]
    pub fn current_index(&self) -> Option<usize> {
        self.navigator.current_index(&self.sorted_reviews())
    }

    /// Returns the review cursor position in the list view.
    #[must_use]
    pub const fn review_cursor_position(&self) -> usize {
        self.review_cursor.position
    }

    /// Returns the product cursor position in the storefront view.
    #[must_use]
    pub const fn product_cursor_position(&self) -> usize {
        self.product_cursor.position
    }

    /// Handles a message and updates state accordingly.
    ///
    /// Delegates to specialised handlers for each message category to keep
    /// cyclomatic complexity low.
    pub fn handle_message(&mut self, msg: &AppMsg) -> Option<Cmd> {
        if msg.is_navigation() {
            return self.handle_navigation_msg(msg);
        }
        if msg.is_swipe() {
            return self.handle_swipe_msg(msg);
        }
        if msg.is_data() {
            return self.handle_data_msg(msg);
        }
        if msg.is_reveal() {
            return self.handle_reveal_msg(msg);
        }
        self.handle_lifecycle_msg(msg)
    }

    /// Dispatches navigation messages to their handlers.
    fn handle_navigation_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::CursorUp => self.handle_cursor_up(),
            AppMsg::CursorDown => self.handle_cursor_down(),
            AppMsg::Select => self.handle_select(),
            AppMsg::OpenLatestToast => self.handle_open_latest_toast(),
            AppMsg::ShowAllReviews => self.handle_show_all_reviews(),
            AppMsg::EscapePressed => self.handle_escape(),
            AppMsg::NextDetail => self.handle_step_detail(true),
            AppMsg::PreviousDetail => self.handle_step_detail(false),
            AppMsg::ToggleSort => self.handle_toggle_sort(),
            _ => {
                debug_assert!(
                    false,
                    "non-navigation message routed to handle_navigation_msg"
                );
                None
            }
        }
    }

    /// Dispatches swipe gesture messages to their handlers.
    fn handle_swipe_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::SwipeBegin(x) => self.handle_swipe_begin(*x),
            AppMsg::SwipeMove(x) => self.handle_swipe_move(*x),
            AppMsg::SwipeEnd => self.handle_swipe_end(),
            _ => {
                debug_assert!(false, "non-swipe message routed to handle_swipe_msg");
                None
            }
        }
    }

    /// Dispatches fetch lifecycle messages to their handlers.
    fn handle_data_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::Initialized => Some(self.handle_initialized()),
            AppMsg::ProductsLoaded(result) => self.handle_products_loaded(result),
            AppMsg::ReviewsLoaded(result) => self.handle_reviews_loaded(result),
            AppMsg::SalesReportLoaded { product_id, result } => {
                self.handle_sales_report_loaded(*product_id, result)
            }
            AppMsg::RefreshReviews => self.handle_refresh_reviews(),
            _ => {
                debug_assert!(false, "non-data message routed to handle_data_msg");
                None
            }
        }
    }

    /// Dispatches reveal timer messages to their handlers.
    fn handle_reveal_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::RevealTimerFired(ticket) => self.handle_reveal_timer(*ticket),
            _ => {
                debug_assert!(false, "non-reveal message routed to handle_reveal_msg");
                None
            }
        }
    }

    /// Dispatches lifecycle and window messages to their handlers.
    fn handle_lifecycle_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::Quit => {
                self.scheduler.stop();
                Some(bubbletea_rs::quit())
            }
            AppMsg::ToggleHelp => {
                self.show_help = !self.show_help;
                None
            }
            AppMsg::WindowResized { width, height } => {
                self.width = *width;
                self.height = *height;
                self.ensure_cursors_visible();
                None
            }
            _ => {
                debug_assert!(
                    false,
                    "non-lifecycle message routed to handle_lifecycle_msg"
                );
                None
            }
        }
    }
}

/// Orders the loaded reviews; an unresolved feed has no reviews.
fn sorted_view(reviews: &LoadState<ReviewFeed>, order: SortOrder) -> Vec<&Review> {
    reviews
        .ready()
        .map(|feed| sort_reviews(&feed.articles, order))
        .unwrap_or_default()
}

#[cfg(test)]
#[path = "tests.rs"]
mod tests;
