//! Application configuration loaded from CLI, environment, and files.
//!
//! Values are merged with ortho-config's layered approach, lowest to
//! highest precedence:
//!
//! 1. **Defaults** – built-in endpoints and timings
//! 2. **Configuration file** – `.storefront.toml` in the current directory,
//!    home directory, or XDG config directory
//! 3. **Environment variables** – `STOREFRONT_*` (e.g.
//!    `STOREFRONT_REVIEWS_URL`)
//! 4. **Command-line arguments** – e.g. `--reviews-url`, `--product-no`/`-p`
//!
//! # Configuration File
//!
//! ```toml
//! reviews_url = "https://reviews.example/getReviews"
//! product_no = 42
//! start_date = "2025-11-01"
//! end_date = "2025-11-06"
//! sort = "views"
//! request_timeout_seconds = 10
//! ```

use std::time::Duration;

use chrono::NaiveDate;
use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};

use crate::catalog::markup::DEFAULT_PLACEHOLDER_IMAGE;
use crate::catalog::provider::{
    DEFAULT_PRODUCTS_URL, DEFAULT_REQUEST_TIMEOUT, DEFAULT_SALES_REPORT_URL,
};
use crate::catalog::{DateRange, Endpoints, FetchError};
use crate::reviews::{DEFAULT_SWIPE_THRESHOLD, SortOrder, UnknownSortOrder};

/// Length of the sales report window used when no dates are configured.
pub const DEFAULT_REPORT_DAYS: u32 = 7;

/// Operation mode determined by CLI arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationMode {
    /// Print the product cards.
    Catalog,
    /// Run the staged review reveal on the terminal.
    ReviewFeed,
    /// Print the sales report for one product.
    SalesReport,
    /// Interactive storefront TUI.
    Tui,
}

/// Application configuration supporting CLI, environment, and file sources.
///
/// # Example
///
/// ```no_run
/// use ortho_config::OrthoConfig;
/// use storefront::StorefrontConfig;
///
/// let config = StorefrontConfig::load().expect("failed to load configuration");
/// let endpoints = config.endpoints().expect("endpoints should be valid");
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, OrthoConfig)]
#[serde(default)]
#[ortho_config(
    prefix = "STOREFRONT",
    discovery(
        dotfile_name = ".storefront.toml",
        config_file_name = "storefront.toml",
        app_name = "storefront"
    )
)]
pub struct StorefrontConfig {
    /// Products endpoint URL.
    ///
    /// Can be provided via:
    /// - CLI: `--products-url <URL>`
    /// - Environment: `STOREFRONT_PRODUCTS_URL`
    /// - Config file: `products_url = "..."`
    #[ortho_config()]
    pub products_url: Option<String>,

    /// Reviews endpoint URL. There is no default; review features fail with
    /// a missing-endpoint error until it is set.
    ///
    /// Can be provided via:
    /// - CLI: `--reviews-url <URL>`
    /// - Environment: `STOREFRONT_REVIEWS_URL`
    /// - Config file: `reviews_url = "..."`
    #[ortho_config()]
    pub reviews_url: Option<String>,

    /// Sales report endpoint URL.
    #[ortho_config()]
    pub sales_report_url: Option<String>,

    /// Product number for the sales report.
    ///
    /// Can be provided via:
    /// - CLI: `--product-no <N>` or `-n <N>`
    /// - Environment: `STOREFRONT_PRODUCT_NO`
    /// - Config file: `product_no = 42`
    #[ortho_config(cli_short = 'n')]
    pub product_no: Option<u64>,

    /// First day of the sales report range (`YYYY-MM-DD`).
    #[ortho_config()]
    pub start_date: Option<String>,

    /// Last day of the sales report range (`YYYY-MM-DD`).
    #[ortho_config()]
    pub end_date: Option<String>,

    /// Initial review ordering: `latest` or `views`.
    ///
    /// Can be provided via:
    /// - CLI: `--sort <ORDER>` or `-o <ORDER>`
    /// - Environment: `STOREFRONT_SORT`
    /// - Config file: `sort = "views"`
    #[ortho_config(cli_short = 'o')]
    pub sort: Option<String>,

    /// Image shown when neither a review nor the catalogue has one.
    #[ortho_config()]
    pub fallback_image_url: Option<String>,

    /// Per-request HTTP timeout, in seconds. Zero selects the default.
    #[ortho_config()]
    pub request_timeout_seconds: u64,

    /// Minimum horizontal swipe, in pixels, that navigates the detail view.
    #[ortho_config()]
    pub swipe_threshold: u32,

    /// Launches the interactive storefront TUI.
    ///
    /// Can be provided via:
    /// - CLI: `--tui` / `-T`
    /// - Config file: `tui = true`
    #[ortho_config(cli_short = 'T')]
    pub tui: bool,

    /// Runs the staged review reveal and prints each review as it appears.
    ///
    /// Can be provided via:
    /// - CLI: `--feed` / `-F`
    /// - Config file: `feed = true`
    #[ortho_config(cli_short = 'F')]
    pub feed: bool,

    /// Prints the sales report for `product_no`.
    ///
    /// Can be provided via:
    /// - CLI: `--sales-report` / `-Q`
    /// - Config file: `sales_report = true`
    ///
    /// Note: boolean flags are not read from the environment.
    #[ortho_config(cli_short = 'Q')]
    pub sales_report: bool,

    /// Writes fetch and reveal telemetry to stderr as JSON lines.
    ///
    /// Can be provided via:
    /// - CLI: `--telemetry`
    /// - Config file: `telemetry = true`
    #[ortho_config()]
    pub telemetry: bool,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            products_url: None,
            reviews_url: None,
            sales_report_url: None,
            product_no: None,
            start_date: None,
            end_date: None,
            sort: None,
            fallback_image_url: None,
            request_timeout_seconds: DEFAULT_REQUEST_TIMEOUT.as_secs(),
            swipe_threshold: DEFAULT_SWIPE_THRESHOLD,
            tui: false,
            feed: false,
            sales_report: false,
            telemetry: false,
        }
    }
}

impl StorefrontConfig {
    /// Determines the operation mode from the mode flags.
    ///
    /// `tui` wins over `sales_report`, which wins over `feed`; with no flag
    /// set the catalogue is printed.
    #[must_use]
    pub const fn operation_mode(&self) -> OperationMode {
        if self.tui {
            OperationMode::Tui
        } else if self.sales_report {
            OperationMode::SalesReport
        } else if self.feed {
            OperationMode::ReviewFeed
        } else {
            OperationMode::Catalog
        }
    }

    /// Returns the configured review ordering, defaulting to latest first.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Configuration`] for an unknown keyword.
    pub fn sort_order(&self) -> Result<SortOrder, FetchError> {
        self.sort.as_deref().map_or(Ok(SortOrder::default()), |raw| {
            raw.parse().map_err(|error: UnknownSortOrder| {
                FetchError::Configuration {
                    message: error.to_string(),
                }
            })
        })
    }

    /// Returns the sales report range relative to `today`.
    ///
    /// With both dates configured they are used as given. With only an end
    /// date, the range is the [`DEFAULT_REPORT_DAYS`] ending on it; with only
    /// a start date it runs to `today`; with neither it is the
    /// [`DEFAULT_REPORT_DAYS`] ending on `today`.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::InvalidDateRange`] for malformed or inverted
    /// dates.
    pub fn date_range(&self, today: NaiveDate) -> Result<DateRange, FetchError> {
        match (self.start_date.as_deref(), self.end_date.as_deref()) {
            (Some(start), Some(end)) => DateRange::parse(start, end),
            (Some(start), None) => DateRange::new(DateRange::parse_day(start)?, today),
            (None, Some(end)) => Ok(DateRange::ending_on(
                DateRange::parse_day(end)?,
                DEFAULT_REPORT_DAYS,
            )),
            (None, None) => Ok(DateRange::ending_on(today, DEFAULT_REPORT_DAYS)),
        }
    }

    /// Returns the product number or an error if missing.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::MissingProductNumber`] when none is configured.
    pub const fn require_product_no(&self) -> Result<u64, FetchError> {
        match self.product_no {
            Some(product_no) => Ok(product_no),
            None => Err(FetchError::MissingProductNumber),
        }
    }

    /// Builds the validated endpoint set, filling in public defaults.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::InvalidUrl`] when a configured URL is invalid.
    pub fn endpoints(&self) -> Result<Endpoints, FetchError> {
        Endpoints::parse(
            self.products_url.as_deref().unwrap_or(DEFAULT_PRODUCTS_URL),
            self.reviews_url.as_deref(),
            self.sales_report_url
                .as_deref()
                .unwrap_or(DEFAULT_SALES_REPORT_URL),
        )
    }

    /// Returns the per-request timeout.
    #[must_use]
    pub const fn request_timeout(&self) -> Duration {
        if self.request_timeout_seconds == 0 {
            DEFAULT_REQUEST_TIMEOUT
        } else {
            Duration::from_secs(self.request_timeout_seconds)
        }
    }

    /// Returns the placeholder image URL.
    #[must_use]
    pub fn fallback_image(&self) -> &str {
        self.fallback_image_url
            .as_deref()
            .filter(|url| !url.trim().is_empty())
            .unwrap_or(DEFAULT_PLACEHOLDER_IMAGE)
    }

    /// Checks the settings every mode depends on.
    ///
    /// # Errors
    ///
    /// Returns the first invalid setting: an unknown sort keyword or an
    /// unparsable endpoint URL.
    pub fn validate(&self) -> Result<(), FetchError> {
        self.sort_order()?;
        self.endpoints()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests;
