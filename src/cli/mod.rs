//! CLI operation mode handlers.
//!
//! This module contains the implementations for the operation modes:
//! - [`catalog`]: Print one line per product card
//! - [`review_feed`]: Run the staged review reveal on the terminal
//! - [`sales_report`]: Print one product's sales report
//! - [`storefront_tui`]: Interactive storefront TUI
//!
//! Output formatting utilities are in [`output`].

use std::sync::Arc;

use storefront::telemetry::{NoopTelemetrySink, StderrJsonlTelemetrySink, TelemetrySink};
use storefront::{DataProvider, FetchError, HttpDataProvider, StorefrontConfig};

pub mod catalog;
pub mod output;
pub mod review_feed;
pub mod sales_report;
pub mod storefront_tui;

/// Builds the HTTP data provider from the configured endpoints and timeout.
///
/// # Errors
///
/// Returns [`FetchError::InvalidUrl`] for a malformed endpoint or
/// [`FetchError::Configuration`] when the HTTP client cannot be built.
pub fn build_provider(config: &StorefrontConfig) -> Result<Arc<dyn DataProvider>, FetchError> {
    let provider = HttpDataProvider::new(config.endpoints()?, config.request_timeout())?;
    Ok(Arc::new(provider))
}

/// Selects the telemetry sink requested by configuration.
pub fn build_telemetry(config: &StorefrontConfig) -> Arc<dyn TelemetrySink> {
    if config.telemetry {
        Arc::new(StderrJsonlTelemetrySink)
    } else {
        Arc::new(NoopTelemetrySink)
    }
}
