//! Output formatting utilities for CLI operations.

use std::io::{self, Write};

use storefront::catalog::{ImageFallback, ProductListing, Review, SalesReport};
use storefront::FetchError;

/// Writes one summary line per product card to the given writer.
pub fn write_catalog<W: Write>(writer: &mut W, listing: &ProductListing) -> Result<(), FetchError> {
    if listing.products.is_empty() {
        writeln!(writer, "No products.").map_err(|e| io_error(&e))?;
        return Ok(());
    }

    for product in &listing.products {
        writeln!(
            writer,
            "#{} {}  {}",
            product.id,
            product.display_name(),
            product.display_price()
        )
        .map_err(|e| io_error(&e))?;
    }
    Ok(())
}

/// Writes a revealed review as a single toast line.
pub fn write_toast<W: Write>(
    writer: &mut W,
    review: &Review,
    fallback: &ImageFallback,
) -> Result<(), FetchError> {
    let title = review.title.as_deref().unwrap_or("(untitled)");
    writeln!(
        writer,
        "{} {title} {} [{}]",
        review.star_line(),
        review.masked_author(),
        fallback.resolve(review.first_image())
    )
    .map_err(|e| io_error(&e))
}

/// Writes the "view all" affordance shown once the reveal completes.
pub fn write_view_all<W: Write>(writer: &mut W, total: usize) -> Result<(), FetchError> {
    writeln!(writer, "View all {total} reviews (storefront --tui)").map_err(|e| io_error(&e))
}

/// Writes a sales report as pretty-printed JSON.
pub fn write_sales_report<W: Write>(writer: &mut W, report: &SalesReport) -> Result<(), FetchError> {
    let rendered = serde_json::to_string_pretty(&report.0).map_err(|error| FetchError::Io {
        message: error.to_string(),
    })?;
    writeln!(writer, "{rendered}").map_err(|e| io_error(&e))
}

/// Converts an I/O error into a [`FetchError`].
pub fn io_error(error: &io::Error) -> FetchError {
    FetchError::Io {
        message: error.to_string(),
    }
}
