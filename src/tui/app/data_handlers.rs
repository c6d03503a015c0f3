//! Fetch commands and result handlers.
//!
//! Products and reviews are fetched together at startup and resolve
//! independently. Each result lands in its own load state; a failure in one
//! never blocks the others and nothing is retried automatically.

use std::any::Any;
use std::sync::Arc;
use std::time::Instant;

use bubbletea_rs::Cmd;

use super::StorefrontApp;
use crate::catalog::{FetchError, ProductListing, ReviewFeed, SalesReport};
use crate::reviews::DetailItem;
use crate::telemetry::{TelemetryEvent, TelemetrySink, elapsed_millis};
use crate::tui::messages::AppMsg;
use crate::tui::state::LoadState;

impl StorefrontApp {
    /// Launches the products and reviews fetches side by side.
    pub(super) fn handle_initialized(&mut self) -> Cmd {
        self.products = LoadState::Loading;
        self.reviews = LoadState::Loading;
        bubbletea_rs::batch(vec![self.fetch_products_cmd(), self.fetch_reviews_cmd()])
    }

    /// Stores the product listing and refreshes the thumbnail fallback.
    pub(super) fn handle_products_loaded(
        &mut self,
        result: &Result<ProductListing, FetchError>,
    ) -> Option<Cmd> {
        self.products = LoadState::from_result(result.clone());
        let lead_image = self
            .products
            .ready()
            .and_then(ProductListing::lead_image)
            .map(ToOwned::to_owned);
        self.fallback.set_catalogue_image(lead_image);

        let count = self
            .products
            .ready()
            .map_or(0, |listing| listing.products.len());
        self.product_cursor.clamp(count);
        self.ensure_cursors_visible();
        None
    }

    /// Stores the review feed and restarts the reveal for it.
    ///
    /// A new feed always restarts the sequence from the initial delay; a
    /// failed feed leaves the reveal idle.
    pub(super) fn handle_reviews_loaded(
        &mut self,
        result: &Result<ReviewFeed, FetchError>,
    ) -> Option<Cmd> {
        self.reviews = LoadState::from_result(result.clone());
        let count = self.reviews.ready().map_or(0, |feed| feed.articles.len());
        self.review_cursor.clamp(count);
        self.ensure_cursors_visible();

        let timer = self.scheduler.load(count);
        timer.map(Self::arm_reveal_timer)
    }

    /// Applies a sales report if it belongs to the open product.
    pub(super) fn handle_sales_report_loaded(
        &mut self,
        product_id: u64,
        result: &Result<SalesReport, FetchError>,
    ) -> Option<Cmd> {
        if self.navigator.selection() != Some(DetailItem::Product(product_id)) {
            tracing::debug!(product_id, "ignoring sales report for a closed product");
            return None;
        }
        self.sales_report = LoadState::from_result(result.clone());
        None
    }

    /// Fetches the reviews again; the reveal restarts when they arrive.
    pub(super) fn handle_refresh_reviews(&mut self) -> Option<Cmd> {
        if self.reviews.is_loading() {
            return None;
        }
        self.scheduler.stop();
        self.reviews = LoadState::Loading;
        Some(self.fetch_reviews_cmd())
    }

    /// Creates a command fetching the product listing.
    pub(super) fn fetch_products_cmd(&self) -> Cmd {
        let provider = self.provider.clone();
        let telemetry = Arc::clone(&self.telemetry);
        Box::pin(async move {
            let started = Instant::now();
            let Some(provider) = provider else {
                return Some(fetched(
                    &*telemetry,
                    "products",
                    started,
                    Err(missing_provider()),
                    AppMsg::ProductsLoaded,
                ));
            };
            let result = provider.products().await;
            Some(fetched(
                &*telemetry,
                "products",
                started,
                result,
                AppMsg::ProductsLoaded,
            ))
        })
    }

    /// Creates a command fetching the review feed.
    pub(super) fn fetch_reviews_cmd(&self) -> Cmd {
        let provider = self.provider.clone();
        let telemetry = Arc::clone(&self.telemetry);
        Box::pin(async move {
            let started = Instant::now();
            let Some(provider) = provider else {
                return Some(fetched(
                    &*telemetry,
                    "reviews",
                    started,
                    Err(missing_provider()),
                    AppMsg::ReviewsLoaded,
                ));
            };
            let result = provider.reviews().await;
            Some(fetched(
                &*telemetry,
                "reviews",
                started,
                result,
                AppMsg::ReviewsLoaded,
            ))
        })
    }

    /// Creates a command fetching one product's sales report.
    pub(super) fn fetch_sales_report_cmd(&self, product_id: u64) -> Cmd {
        let provider = self.provider.clone();
        let telemetry = Arc::clone(&self.telemetry);
        let range = self.settings.sales_range;
        Box::pin(async move {
            let started = Instant::now();
            let into_msg = |result: Result<SalesReport, FetchError>| AppMsg::SalesReportLoaded {
                product_id,
                result,
            };
            let Some(provider) = provider else {
                return Some(fetched(
                    &*telemetry,
                    "sales_report",
                    started,
                    Err(missing_provider()),
                    into_msg,
                ));
            };
            let result = provider.sales_report(product_id, &range).await;
            Some(fetched(
                &*telemetry,
                "sales_report",
                started,
                result,
                into_msg,
            ))
        })
    }
}

fn missing_provider() -> FetchError {
    FetchError::Configuration {
        message: "no data provider configured".to_owned(),
    }
}

/// Logs and records the outcome of a fetch, then wraps it in a message.
fn fetched<T>(
    telemetry: &dyn TelemetrySink,
    resource: &str,
    started: Instant,
    result: Result<T, FetchError>,
    into_msg: impl FnOnce(Result<T, FetchError>) -> AppMsg,
) -> Box<dyn Any + Send> {
    if let Err(error) = &result {
        tracing::warn!(resource, %error, "fetch failed");
    }
    telemetry.record(TelemetryEvent::FetchCompleted {
        resource: resource.to_owned(),
        latency_ms: elapsed_millis(started.elapsed()),
        success: result.is_ok(),
    });
    Box::new(into_msg(result))
}
