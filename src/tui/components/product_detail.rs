//! Product modal with the product's sales report.

use crate::catalog::models::DateRange;
use crate::catalog::{Product, SalesReport};
use crate::tui::state::LoadState;

use super::text_truncate::{clip_lines, fit_width};
use super::text_wrap::wrap_words;

/// Context for rendering the product modal.
#[derive(Debug, Clone)]
pub struct ProductDetailViewContext<'a> {
    /// Selected product, if it is still listed.
    pub product: Option<&'a Product>,
    /// Sales report load state for the selected product.
    pub sales_report: &'a LoadState<SalesReport>,
    /// Range the sales report covers.
    pub sales_range: &'a DateRange,
    /// Maximum columns available.
    pub max_width: usize,
    /// Maximum rows available (0 = unlimited).
    pub max_height: usize,
}

/// Component rendering the product modal.
#[derive(Debug, Clone, Default)]
pub struct ProductDetailComponent;

impl ProductDetailComponent {
    /// Creates a new product detail component.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Renders product fields followed by the sales report.
    #[must_use]
    pub fn view(&self, ctx: &ProductDetailViewContext<'_>) -> String {
        let Some(product) = ctx.product else {
            return "  Product not found.\n".to_owned();
        };

        let mut lines = vec![
            format!("  #{} {}", product.id, product.display_name()),
            format!("  Price: {}", product.display_price()),
            format!(
                "  Image: {}",
                product.image_url.as_deref().unwrap_or("n/a")
            ),
        ];
        if let Some(summary) = product.summary.as_deref() {
            lines.extend(wrap_words(summary, ctx.max_width, "  "));
        }
        lines.push(String::new());
        lines.push(format!("  Sales report {}", ctx.sales_range));
        lines.extend(sales_lines(ctx.sales_report));

        let output: String = lines
            .iter()
            .map(|line| format!("{}\n", fit_width(line, ctx.max_width)))
            .collect();
        clip_lines(&output, ctx.max_height)
    }
}

fn sales_lines(report: &LoadState<SalesReport>) -> Vec<String> {
    match report {
        LoadState::Loading => vec!["    Loading sales report...".to_owned()],
        LoadState::Failed(error) => vec![format!("    Sales report unavailable: {error}")],
        LoadState::Ready(report) => report
            .to_pretty_json()
            .lines()
            .map(|line| format!("    {line}"))
            .collect(),
    }
}
