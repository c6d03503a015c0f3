//! Staged review feed on the terminal.
//!
//! Runs the reveal on a [`RevealTask`] and prints each review once it
//! settles, followed by the "view all" line.

use std::future::Future;
use std::io::{self, Write};

use storefront::catalog::{ImageFallback, ProductListing, ReviewFeed};
use storefront::reviews::reveal::RevealPhase;
use storefront::reviews::{RevealTask, RevealTimings};
use storefront::telemetry::{TelemetryEvent, TelemetrySink, elapsed_millis};
use storefront::{DataProvider, FetchError, StorefrontConfig};

use super::output::{io_error, write_toast, write_view_all};

/// Fetches the reviews and prints them as the reveal discloses them.
///
/// The product listing is fetched alongside to supply the thumbnail
/// fallback; a failure there only costs the fallback image.
///
/// # Errors
///
/// Returns the provider's [`FetchError`] for the review feed or
/// [`FetchError::Io`] when stdout cannot be written.
pub async fn run(
    config: &StorefrontConfig,
    provider: &dyn DataProvider,
    telemetry: &dyn TelemetrySink,
) -> Result<(), FetchError> {
    let (reviews, products) = fetch_feed_inputs(provider, telemetry).await;

    let mut fallback = ImageFallback::new(config.fallback_image());
    match products {
        Ok(listing) => fallback.set_catalogue_image(listing.lead_image().map(ToOwned::to_owned)),
        Err(error) => tracing::warn!(%error, "products unavailable; using placeholder thumbnails"),
    }

    let feed = reviews?;
    let mut stdout = io::stdout().lock();
    reveal(&mut stdout, &feed, &fallback, RevealTimings::default(), telemetry).await
}

/// Fetches reviews and products together, recording each fetch's own latency.
async fn fetch_feed_inputs(
    provider: &dyn DataProvider,
    telemetry: &dyn TelemetrySink,
) -> (
    Result<ReviewFeed, FetchError>,
    Result<ProductListing, FetchError>,
) {
    tokio::join!(
        timed(telemetry, "reviews", provider.reviews()),
        timed(telemetry, "products", provider.products()),
    )
}

async fn timed<T>(
    telemetry: &dyn TelemetrySink,
    resource: &str,
    fetch: impl Future<Output = Result<T, FetchError>>,
) -> Result<T, FetchError> {
    let started = tokio::time::Instant::now();
    let result = fetch.await;
    telemetry.record(TelemetryEvent::FetchCompleted {
        resource: resource.to_owned(),
        latency_ms: elapsed_millis(started.elapsed()),
        success: result.is_ok(),
    });
    result
}

/// Drives the reveal for `feed`, writing each settled review to `writer`.
///
/// # Errors
///
/// Returns [`FetchError::Io`] when `writer` fails.
pub async fn reveal<W: Write>(
    writer: &mut W,
    feed: &ReviewFeed,
    fallback: &ImageFallback,
    timings: RevealTimings,
    telemetry: &dyn TelemetrySink,
) -> Result<(), FetchError> {
    let task = RevealTask::spawn(timings, feed.articles.len());
    let mut updates = task.subscribe();
    let mut printed = 0_usize;

    loop {
        let state = updates.borrow_and_update().clone();
        if state.phase == RevealPhase::Idle {
            writeln!(writer, "No reviews yet.").map_err(|e| io_error(&e))?;
            return Ok(());
        }

        let settled = state.cursor.map_or(0, |cursor| cursor.saturating_add(1));
        for review in feed.articles.iter().take(settled).skip(printed) {
            write_toast(writer, review, fallback)?;
        }
        printed = printed.max(settled);

        if state.all_revealed {
            write_view_all(writer, feed.articles.len())?;
            tracing::info!(revealed = printed, "review reveal complete");
            telemetry.record(TelemetryEvent::RevealCompleted { revealed: printed });
            return Ok(());
        }

        if updates.changed().await.is_err() {
            return Ok(());
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use async_trait::async_trait;
    use rstest::rstest;
    use storefront::catalog::models::test_support::{create_reviews, listing, review_feed};
    use storefront::telemetry::test_support::RecordingTelemetrySink;
    use storefront::{DateRange, SalesReport};

    use super::*;

    /// Provider whose reviews and products resolve after fixed delays.
    struct DelayedProvider {
        reviews_delay: Duration,
        products_delay: Duration,
    }

    #[async_trait]
    impl DataProvider for DelayedProvider {
        async fn products(&self) -> Result<ProductListing, FetchError> {
            tokio::time::sleep(self.products_delay).await;
            Ok(listing(Vec::new()))
        }

        async fn sales_report(
            &self,
            _product_id: u64,
            _range: &DateRange,
        ) -> Result<SalesReport, FetchError> {
            Err(FetchError::MissingProductNumber)
        }

        async fn reviews(&self) -> Result<ReviewFeed, FetchError> {
            tokio::time::sleep(self.reviews_delay).await;
            Err(FetchError::MissingEndpoint {
                resource: "reviews".to_owned(),
            })
        }
    }

    #[rstest]
    #[tokio::test(start_paused = true)]
    async fn each_fetch_records_its_own_latency() {
        let sink = RecordingTelemetrySink::default();
        let provider = DelayedProvider {
            reviews_delay: Duration::from_millis(120),
            products_delay: Duration::from_millis(450),
        };

        let (reviews, products) = fetch_feed_inputs(&provider, &sink).await;

        assert!(reviews.is_err());
        assert!(products.is_ok());
        assert_eq!(
            sink.take(),
            vec![
                TelemetryEvent::FetchCompleted {
                    resource: "reviews".to_owned(),
                    latency_ms: 120,
                    success: false,
                },
                TelemetryEvent::FetchCompleted {
                    resource: "products".to_owned(),
                    latency_ms: 450,
                    success: true,
                },
            ]
        );
    }

    async fn run_reveal(feed: &ReviewFeed, sink: &RecordingTelemetrySink) -> String {
        let mut buffer = Vec::new();
        reveal(
            &mut buffer,
            feed,
            &ImageFallback::default(),
            RevealTimings::default(),
            sink,
        )
        .await
        .expect("reveal should write");
        String::from_utf8(buffer).expect("output should be UTF-8")
    }

    #[rstest]
    #[tokio::test(start_paused = true)]
    async fn prints_at_most_five_reviews_then_view_all() {
        let sink = RecordingTelemetrySink::default();
        let feed = review_feed(create_reviews(7));
        let started = tokio::time::Instant::now();

        let output = run_reveal(&feed, &sink).await;

        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 6);
        assert!(lines.first().is_some_and(|line| line.contains("Review 1")));
        assert!(lines.get(4).is_some_and(|line| line.contains("Review 5")));
        assert_eq!(lines.last().copied(), Some("View all 7 reviews (storefront --tui)"));
        // 2000 + 4 * (2700 + 800) + 1000
        assert_eq!(started.elapsed(), Duration::from_millis(17_000));
        assert_eq!(
            sink.take(),
            vec![TelemetryEvent::RevealCompleted { revealed: 5 }]
        );
    }

    #[rstest]
    #[tokio::test(start_paused = true)]
    async fn empty_feed_prints_placeholder() {
        let sink = RecordingTelemetrySink::default();

        let output = run_reveal(&ReviewFeed::default(), &sink).await;

        assert_eq!(output, "No reviews yet.\n");
        assert!(sink.take().is_empty());
    }
}
