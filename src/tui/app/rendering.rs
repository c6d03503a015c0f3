//! Rendering logic for the storefront TUI application.
//!
//! These are pure query methods that read state without modification.

use super::StorefrontApp;
use super::view_mode::{CHROME_HEIGHT, MIN_LIST_HEIGHT, TOAST_PANE_HEIGHT, ViewMode};
use crate::reviews::DetailItem;
use crate::tui::components::{
    ProductDetailComponent, ProductDetailViewContext, ProductGridComponent,
    ProductGridViewContext, ReviewDetailComponent, ReviewDetailViewContext, ReviewListComponent,
    ReviewListViewContext, ReviewToastComponent, ReviewToastViewContext,
};

impl StorefrontApp {
    /// Rows available between the header and the status bar.
    fn body_height(&self) -> usize {
        usize::from(self.height).saturating_sub(CHROME_HEIGHT)
    }

    /// Columns available to components.
    fn body_width(&self) -> usize {
        usize::from(self.width).max(1)
    }

    /// Rows available to the product grid on the storefront view.
    pub(super) fn product_grid_height(&self) -> usize {
        self.body_height()
            .saturating_sub(TOAST_PANE_HEIGHT)
            .max(MIN_LIST_HEIGHT)
    }

    /// Rows available to review entries below the list's sort header.
    pub(super) fn review_list_rows(&self) -> usize {
        self.body_height().saturating_sub(1).max(MIN_LIST_HEIGHT)
    }

    /// Renders the header bar.
    pub(super) fn render_header(&self) -> String {
        let loading = self.products.is_loading() || self.reviews.is_loading();
        let loading_indicator = if loading { " [Loading...]" } else { "" };
        format!(
            "Storefront - {}{loading_indicator}\n",
            self.view_mode.title()
        )
    }

    /// Renders the status bar with help hints.
    pub(super) fn render_status_bar(&self) -> String {
        let hints = match self.view_mode {
            ViewMode::Storefront => "j/k:move  Enter:open  t:latest toast  v:all reviews  r:refresh  ?:help  q:quit",
            ViewMode::ProductDetail => "Esc:back  ?:help  q:quit",
            ViewMode::ReviewList => "j/k:move  Enter:open  s:sort  Esc:back  ?:help  q:quit",
            ViewMode::ReviewDetail => "h/l:prev/next  s:sort  Esc:back  ?:help  q:quit",
        };
        format!("{hints}\n")
    }

    /// Renders the help overlay if visible.
    pub(super) fn render_help_overlay(&self) -> String {
        if !self.show_help {
            return String::new();
        }

        let help_text = r"
=== Keyboard Shortcuts ===

Storefront:
  j, Down    Move cursor down
  k, Up      Move cursor up
  Enter      Open product (with sales report)
  t          Open the latest revealed review
  v          View all reviews
  r          Refresh reviews and restart the feed

Reviews:
  Enter      Open review
  s          Toggle sort (Latest / Most viewed)
  h, Left    Previous review
  l, Right   Next review
  Esc        Back

Other:
  ?          Toggle this help
  q          Quit

Press any key to close this help.
";
        help_text.to_owned()
    }

    /// Renders the body of the active view.
    pub(super) fn render_body(&self) -> String {
        match self.view_mode {
            ViewMode::Storefront => self.render_storefront(),
            ViewMode::ProductDetail => self.render_product_detail(),
            ViewMode::ReviewList => self.render_review_list(),
            ViewMode::ReviewDetail => self.render_review_detail(),
        }
    }

    fn render_storefront(&self) -> String {
        let grid_height = self.product_grid_height();
        let grid_ctx = ProductGridViewContext {
            products: &self.products,
            cursor_position: self.product_cursor.position,
            scroll_offset: self.product_cursor.scroll_offset,
            visible_height: grid_height,
            max_width: self.body_width(),
        };
        let grid = ProductGridComponent::new().view(&grid_ctx);
        let grid_lines = grid.lines().count();

        let mut output = grid;
        let padding = grid_height.saturating_sub(grid_lines);
        output.push_str(&"\n".repeat(padding));
        output.push('\n');
        output.push_str(&format!("Reviews ({})\n", self.sort_order.label()));

        let reveal = self.scheduler.state();
        let toast_ctx = ReviewToastViewContext {
            reviews: &self.reviews,
            reveal: &reveal,
            fallback: &self.fallback,
            max_width: self.body_width(),
        };
        output.push_str(&ReviewToastComponent::new().view(&toast_ctx));
        output
    }

    fn render_product_detail(&self) -> String {
        let product = match self.navigator.selection() {
            Some(DetailItem::Product(id)) => self
                .products
                .ready()
                .and_then(|listing| listing.products.iter().find(|product| product.id == id)),
            _ => None,
        };
        let ctx = ProductDetailViewContext {
            product,
            sales_report: &self.sales_report,
            sales_range: &self.settings.sales_range,
            max_width: self.body_width(),
            max_height: self.body_height(),
        };
        ProductDetailComponent::new().view(&ctx)
    }

    fn render_review_list(&self) -> String {
        let sorted = self.sorted_reviews();
        let ctx = ReviewListViewContext {
            sorted: &sorted,
            sort_order: self.sort_order,
            cursor_position: self.review_cursor.position,
            scroll_offset: self.review_cursor.scroll_offset,
            visible_height: self.body_height(),
            max_width: self.body_width(),
        };
        ReviewListComponent::new().view(&ctx)
    }

    fn render_review_detail(&self) -> String {
        let sorted = self.sorted_reviews();
        let position = self.navigator.current_index(&sorted);
        let ctx = ReviewDetailViewContext {
            review: position.and_then(|index| sorted.get(index).copied()),
            position,
            total: sorted.len(),
            fallback: &self.fallback,
            max_width: self.body_width(),
            max_height: self.body_height(),
        };
        ReviewDetailComponent::new().view(&ctx)
    }
}
