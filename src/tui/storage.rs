//! Module-level storage for initial TUI state.
//!
//! bubbletea-rs constructs the model through the static `Model::init`, so the
//! data provider, settings, and telemetry sink are stored here before the
//! program starts and read back by `StorefrontApp::init()`.

use std::sync::{Arc, OnceLock};

use chrono::Utc;
use crossterm::terminal;

use crate::catalog::DataProvider;
use crate::catalog::markup::DEFAULT_PLACEHOLDER_IMAGE;
use crate::catalog::models::DateRange;
use crate::config::DEFAULT_REPORT_DAYS;
use crate::reviews::{DEFAULT_SWIPE_THRESHOLD, RevealTimings, SortOrder};
use crate::telemetry::{NoopTelemetrySink, TelemetrySink};

/// Data provider used by the TUI fetch commands.
static DATA_PROVIDER: OnceLock<Arc<dyn DataProvider>> = OnceLock::new();

/// Settings resolved from configuration.
static APP_SETTINGS: OnceLock<AppSettings> = OnceLock::new();

/// Telemetry sink for fetch and reveal events.
static TELEMETRY_SINK: OnceLock<Arc<dyn TelemetrySink>> = OnceLock::new();

/// Static fallback telemetry sink used when none has been configured.
static DEFAULT_TELEMETRY_SINK: OnceLock<Arc<dyn TelemetrySink>> = OnceLock::new();

/// Initial terminal dimensions captured at startup.
static INITIAL_TERMINAL_SIZE: OnceLock<(u16, u16)> = OnceLock::new();

/// Settings the storefront app reads at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppSettings {
    /// Initial review ordering.
    pub sort_order: SortOrder,
    /// Reveal timer durations.
    pub timings: RevealTimings,
    /// Swipe distance in pixels that must be exceeded to navigate.
    pub swipe_threshold: u32,
    /// Image shown when neither the review nor the catalogue has one.
    pub placeholder_image: String,
    /// Date range used when fetching a product's sales report.
    pub sales_range: DateRange,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            sort_order: SortOrder::default(),
            timings: RevealTimings::default(),
            swipe_threshold: DEFAULT_SWIPE_THRESHOLD,
            placeholder_image: DEFAULT_PLACEHOLDER_IMAGE.to_owned(),
            sales_range: DateRange::ending_on(Utc::now().date_naive(), DEFAULT_REPORT_DAYS),
        }
    }
}

/// Sets the data provider used by the TUI.
///
/// Must be called before starting the bubbletea-rs program; without a
/// provider every fetch fails with a configuration error.
///
/// # Returns
///
/// `true` if the provider was set, `false` if it was already set.
pub fn set_data_provider(provider: Arc<dyn DataProvider>) -> bool {
    DATA_PROVIDER.set(provider).is_ok()
}

/// Sets the app settings resolved from configuration.
///
/// # Returns
///
/// `true` if the settings were set, `false` if they were already set.
pub fn set_app_settings(settings: AppSettings) -> bool {
    APP_SETTINGS.set(settings).is_ok()
}

/// Sets the telemetry sink for fetch and reveal events.
///
/// Without this, a no-op sink is used.
///
/// # Returns
///
/// `true` if the sink was set, `false` if it was already set.
pub fn set_telemetry_sink(sink: Arc<dyn TelemetrySink>) -> bool {
    TELEMETRY_SINK.set(sink).is_ok()
}

/// Stores the initial terminal size reported at startup.
///
/// # Returns
///
/// `true` if the size was set, `false` if it was already set.
pub fn set_initial_terminal_size(width: u16, height: u16) -> bool {
    INITIAL_TERMINAL_SIZE.set((width, height)).is_ok()
}

/// Gets the configured data provider, if any.
pub(crate) fn get_data_provider() -> Option<Arc<dyn DataProvider>> {
    DATA_PROVIDER.get().cloned()
}

/// Gets the configured settings, or defaults when none were stored.
pub(crate) fn get_app_settings() -> AppSettings {
    APP_SETTINGS.get().cloned().unwrap_or_default()
}

/// Gets the telemetry sink, returning a no-op sink if not configured.
///
/// Uses a static fallback sink to avoid allocating a new `Arc` on each call
/// when no sink has been configured.
pub(crate) fn get_telemetry_sink() -> Arc<dyn TelemetrySink> {
    TELEMETRY_SINK.get().cloned().unwrap_or_else(|| {
        Arc::clone(DEFAULT_TELEMETRY_SINK.get_or_init(|| Arc::new(NoopTelemetrySink)))
    })
}

/// Gets the initial terminal dimensions from storage.
///
/// Falls back to the live terminal size, then to 80x24.
pub(crate) fn get_initial_terminal_size() -> (u16, u16) {
    const DEFAULT_WIDTH: u16 = 80;
    const DEFAULT_HEIGHT: u16 = 24;

    INITIAL_TERMINAL_SIZE
        .get()
        .copied()
        .filter(|(width, height)| *width > 0 && *height > 0)
        .or_else(|| {
            terminal::size()
                .ok()
                .filter(|(width, height)| *width > 0 && *height > 0)
        })
        .unwrap_or((DEFAULT_WIDTH, DEFAULT_HEIGHT))
}
