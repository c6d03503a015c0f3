//! Interactive storefront TUI mode.
//!
//! This module provides the entry point for the terminal interface that
//! shows the product grid, the staged review feed, and the review pages.

use std::io::{self, Write};
use std::sync::Arc;

use bubbletea_rs::{MouseMotion, Program};
use chrono::Utc;

use storefront::telemetry::TelemetrySink;
use storefront::tui::{
    AppSettings, StorefrontApp, set_app_settings, set_data_provider, set_initial_terminal_size,
    set_telemetry_sink,
};
use storefront::{DataProvider, FetchError, StorefrontConfig};

/// Runs the storefront TUI until the user quits.
///
/// # Errors
///
/// Returns an error if:
/// - The sort keyword or date range is invalid
/// - The TUI fails to initialise
pub async fn run(
    config: &StorefrontConfig,
    provider: Arc<dyn DataProvider>,
    telemetry: Arc<dyn TelemetrySink>,
) -> Result<(), FetchError> {
    let settings = build_settings(config)?;

    // Store state in module-level storage for Model::init() to retrieve.
    // If already set, this is a no-op and the existing values remain.
    let _ = set_app_settings(settings);
    let _ = set_data_provider(provider);
    let _ = set_telemetry_sink(telemetry);
    if let Ok((width, height)) = crossterm::terminal::size() {
        let _ = set_initial_terminal_size(width, height);
    }

    run_tui().await.map_err(|error| FetchError::Configuration {
        message: format!("TUI error: {error}"),
    })
}

/// Resolves the TUI settings from configuration.
///
/// # Errors
///
/// Returns [`FetchError::Configuration`] for an unknown sort keyword or
/// [`FetchError::InvalidDateRange`] for bad report dates.
pub fn build_settings(config: &StorefrontConfig) -> Result<AppSettings, FetchError> {
    Ok(AppSettings {
        sort_order: config.sort_order()?,
        swipe_threshold: config.swipe_threshold,
        placeholder_image: config.fallback_image().to_owned(),
        sales_range: config.date_range(Utc::now().date_naive())?,
        ..AppSettings::default()
    })
}

/// Runs the bubbletea-rs program with the `StorefrontApp` model.
async fn run_tui() -> Result<(), bubbletea_rs::Error> {
    // StorefrontApp::init() will retrieve its state from module-level storage.
    // Cell motion reporting delivers the drags that drive swipe navigation.
    let program = Program::<StorefrontApp>::builder()
        .alt_screen(true)
        .mouse_motion(MouseMotion::Cell)
        .build()?;

    program.run().await?;

    io::stdout().flush().ok();

    Ok(())
}
