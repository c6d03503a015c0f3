//! Catalogue listing operation.

use std::io;
use std::time::Instant;

use storefront::telemetry::{TelemetryEvent, TelemetrySink, elapsed_millis};
use storefront::{DataProvider, FetchError};

use super::output::write_catalog;

/// Fetches the product listing and prints one line per product.
///
/// # Errors
///
/// Returns the provider's [`FetchError`] or [`FetchError::Io`] when stdout
/// cannot be written.
pub async fn run(provider: &dyn DataProvider, telemetry: &dyn TelemetrySink) -> Result<(), FetchError> {
    let started = Instant::now();
    let result = provider.products().await;
    telemetry.record(TelemetryEvent::FetchCompleted {
        resource: "products".to_owned(),
        latency_ms: elapsed_millis(started.elapsed()),
        success: result.is_ok(),
    });

    let listing = result?;
    tracing::debug!(count = listing.products.len(), "products loaded");
    write_catalog(&mut io::stdout().lock(), &listing)
}
