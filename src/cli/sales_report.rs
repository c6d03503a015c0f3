//! Sales report operation.

use std::io;
use std::time::Instant;

use chrono::Utc;
use storefront::telemetry::{TelemetryEvent, TelemetrySink, elapsed_millis};
use storefront::{DataProvider, FetchError, StorefrontConfig};

use super::output::write_sales_report;

/// Prints the sales report for the configured product and date range.
///
/// # Errors
///
/// Returns [`FetchError::MissingProductNumber`] without a product number,
/// [`FetchError::InvalidDateRange`] for bad dates, or the provider's error.
pub async fn run(
    config: &StorefrontConfig,
    provider: &dyn DataProvider,
    telemetry: &dyn TelemetrySink,
) -> Result<(), FetchError> {
    let product_no = config.require_product_no()?;
    let range = config.date_range(Utc::now().date_naive())?;
    tracing::debug!(product_no, %range, "requesting sales report");

    let started = Instant::now();
    let result = provider.sales_report(product_no, &range).await;
    telemetry.record(TelemetryEvent::FetchCompleted {
        resource: "sales_report".to_owned(),
        latency_ms: elapsed_millis(started.elapsed()),
        success: result.is_ok(),
    });

    write_sales_report(&mut io::stdout().lock(), &result?)
}
