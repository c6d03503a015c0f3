//! Product card list shown on the storefront view.

use crate::catalog::{Product, ProductListing};
use crate::tui::state::LoadState;

use super::text_truncate::fit_width;

/// Context for rendering the product grid.
#[derive(Debug, Clone)]
pub struct ProductGridViewContext<'a> {
    /// Products load state.
    pub products: &'a LoadState<ProductListing>,
    /// Cursor position within the products.
    pub cursor_position: usize,
    /// First visible product.
    pub scroll_offset: usize,
    /// Maximum rows available.
    pub visible_height: usize,
    /// Maximum columns available.
    pub max_width: usize,
}

/// Renders one line per product card.
#[derive(Debug, Clone, Default)]
pub struct ProductGridComponent;

impl ProductGridComponent {
    /// Creates a new product grid component.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Renders the product cards inside the visible window.
    #[must_use]
    pub fn view(&self, ctx: &ProductGridViewContext<'_>) -> String {
        let listing = match ctx.products {
            LoadState::Loading => return "  Loading products...\n".to_owned(),
            LoadState::Failed(error) => return format!("  Products unavailable: {error}\n"),
            LoadState::Ready(listing) => listing,
        };
        if listing.products.is_empty() {
            return "  No products.\n".to_owned();
        }

        listing
            .products
            .iter()
            .enumerate()
            .skip(ctx.scroll_offset)
            .take(ctx.visible_height.max(1))
            .map(|(index, product)| {
                let prefix = if index == ctx.cursor_position { ">" } else { " " };
                let line = format_card(product, prefix);
                format!("{}\n", fit_width(&line, ctx.max_width))
            })
            .collect()
    }
}

/// Formats a single product card line.
pub(crate) fn format_card(product: &Product, prefix: &str) -> String {
    format!(
        "{prefix} #{id} {name}  {price}",
        id = product.id,
        name = product.display_name(),
        price = product.display_price()
    )
}
