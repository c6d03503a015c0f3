//! Navigation handlers for cursors, views, sorting, and swipes.
//!
//! The detail view never stores an index: every step and swipe recomputes
//! the selection's position against the reviews in the current sort order.

use bubbletea_rs::Cmd;

use super::view_mode::ViewMode;
use super::{StorefrontApp, sorted_view};
use crate::reviews::DetailItem;
use crate::tui::state::{ListCursor, LoadState};

impl StorefrontApp {
    fn product_count(&self) -> usize {
        self.products
            .ready()
            .map_or(0, |listing| listing.products.len())
    }

    fn review_count(&self) -> usize {
        self.reviews.ready().map_or(0, |feed| feed.articles.len())
    }

    /// Keeps both list cursors inside their viewports.
    pub(super) fn ensure_cursors_visible(&mut self) {
        let product_rows = self.product_grid_height();
        let review_rows = self.review_list_rows();
        self.product_cursor.ensure_visible(product_rows);
        self.review_cursor.ensure_visible(review_rows);
    }

    /// Handles cursor up navigation.
    pub(super) fn handle_cursor_up(&mut self) -> Option<Cmd> {
        match self.view_mode {
            ViewMode::Storefront => self.product_cursor.up(),
            ViewMode::ReviewList => self.review_cursor.up(),
            ViewMode::ProductDetail | ViewMode::ReviewDetail => return None,
        }
        self.ensure_cursors_visible();
        None
    }

    /// Handles cursor down navigation.
    pub(super) fn handle_cursor_down(&mut self) -> Option<Cmd> {
        match self.view_mode {
            ViewMode::Storefront => self.product_cursor.down(self.product_count()),
            ViewMode::ReviewList => self.review_cursor.down(self.review_count()),
            ViewMode::ProductDetail | ViewMode::ReviewDetail => return None,
        }
        self.ensure_cursors_visible();
        None
    }

    /// Opens the product or review under the cursor.
    pub(super) fn handle_select(&mut self) -> Option<Cmd> {
        match self.view_mode {
            ViewMode::Storefront => self.open_product_at_cursor(),
            ViewMode::ReviewList => {
                self.open_review_at_cursor();
                None
            }
            ViewMode::ProductDetail | ViewMode::ReviewDetail => None,
        }
    }

    fn open_product_at_cursor(&mut self) -> Option<Cmd> {
        let product_id = self
            .products
            .ready()?
            .products
            .get(self.product_cursor.position)?
            .id;

        self.navigator.select(DetailItem::Product(product_id));
        self.sales_report = LoadState::Loading;
        self.view_mode = ViewMode::ProductDetail;
        Some(self.fetch_sales_report_cmd(product_id))
    }

    fn open_review_at_cursor(&mut self) {
        let review_id = self
            .sorted_reviews()
            .get(self.review_cursor.position)
            .map(|review| review.id);
        if let Some(id) = review_id {
            self.open_review(id, ViewMode::ReviewList);
        }
    }

    fn open_review(&mut self, review_id: u64, origin: ViewMode) {
        self.navigator.select(DetailItem::Review(review_id));
        self.detail_origin = origin;
        self.view_mode = ViewMode::ReviewDetail;
    }

    /// Opens the most recently revealed toast in the detail view.
    pub(super) fn handle_open_latest_toast(&mut self) -> Option<Cmd> {
        if self.view_mode != ViewMode::Storefront {
            return None;
        }
        let review_id = self.scheduler.state().cursor.and_then(|index| {
            self.reviews
                .ready()
                .and_then(|feed| feed.articles.get(index))
                .map(|review| review.id)
        });
        if let Some(id) = review_id {
            self.open_review(id, ViewMode::Storefront);
        }
        None
    }

    /// Switches to the full sorted review list.
    pub(super) fn handle_show_all_reviews(&mut self) -> Option<Cmd> {
        if self.reviews.ready().is_none() || self.view_mode == ViewMode::ReviewList {
            return None;
        }
        self.navigator.clear();
        self.view_mode = ViewMode::ReviewList;
        self.review_cursor = ListCursor::default();
        None
    }

    /// Leaves the current view.
    pub(super) fn handle_escape(&mut self) -> Option<Cmd> {
        match self.view_mode {
            ViewMode::ReviewDetail => self.close_review_detail(),
            ViewMode::ProductDetail => {
                self.navigator.clear();
                self.sales_report = LoadState::Loading;
                self.view_mode = ViewMode::Storefront;
            }
            ViewMode::ReviewList => self.view_mode = ViewMode::Storefront,
            ViewMode::Storefront => {}
        }
        None
    }

    fn close_review_detail(&mut self) {
        let origin = self.detail_origin;
        if let Some(index) = self
            .current_index()
            .filter(|_| origin == ViewMode::ReviewList)
        {
            self.review_cursor.set(index);
        }
        self.navigator.clear();
        self.view_mode = self.detail_origin;
        self.ensure_cursors_visible();
    }

    /// Steps the review detail forward or backward in the current order.
    pub(super) fn handle_step_detail(&mut self, forward: bool) -> Option<Cmd> {
        if self.view_mode != ViewMode::ReviewDetail {
            return None;
        }
        let sorted = sorted_view(&self.reviews, self.sort_order);
        let moved = if forward {
            self.navigator.next(&sorted)
        } else {
            self.navigator.previous(&sorted)
        };
        if !moved {
            tracing::debug!(forward, "detail navigation stopped at boundary");
        }
        None
    }

    /// Toggles the sort order, keeping the list cursor on the same review.
    pub(super) fn handle_toggle_sort(&mut self) -> Option<Cmd> {
        let focused = self
            .sorted_reviews()
            .get(self.review_cursor.position)
            .map(|review| review.id);

        self.sort_order = self.sort_order.toggle();

        let position = focused.and_then(|id| {
            self.sorted_reviews()
                .iter()
                .position(|review| review.id == id)
        });
        if let Some(index) = position {
            self.review_cursor.set(index);
        }
        self.ensure_cursors_visible();
        None
    }

    /// Starts a swipe in the review detail view.
    pub(super) fn handle_swipe_begin(&mut self, x: i64) -> Option<Cmd> {
        if self.view_mode == ViewMode::ReviewDetail {
            self.navigator.begin_swipe(x);
        }
        None
    }

    /// Tracks the swipe position.
    pub(super) fn handle_swipe_move(&mut self, x: i64) -> Option<Cmd> {
        if self.navigator.is_swiping() {
            self.navigator.update_swipe(x);
        }
        None
    }

    /// Ends the swipe, navigating when it passed the threshold.
    pub(super) fn handle_swipe_end(&mut self) -> Option<Cmd> {
        let sorted = if self.view_mode == ViewMode::ReviewDetail {
            sorted_view(&self.reviews, self.sort_order)
        } else {
            Vec::new()
        };
        if self.navigator.end_swipe(&sorted) {
            tracing::debug!(selection = ?self.navigator.selection(), "swipe navigated");
        }
        None
    }
}
