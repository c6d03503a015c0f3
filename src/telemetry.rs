//! Application telemetry events and sinks.
//!
//! Telemetry is local only: events are either dropped or written to stderr
//! as JSON lines for debugging fetch latency and reveal completion.

use std::io;

use serde::{Deserialize, Serialize};

/// A structured telemetry event emitted by the storefront.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TelemetryEvent {
    /// A data fetch resolved or failed.
    FetchCompleted {
        /// Resource fetched (`products`, `reviews`, or `sales_report`).
        resource: String,
        /// Wall-clock duration of the fetch in milliseconds.
        latency_ms: u64,
        /// Whether the fetch succeeded.
        success: bool,
    },
    /// The staged review reveal raised "view all".
    RevealCompleted {
        /// Number of reviews revealed.
        revealed: usize,
    },
}

/// A sink that can record telemetry events.
pub trait TelemetrySink: Send + Sync {
    /// Records a telemetry event.
    fn record(&self, event: TelemetryEvent);
}

/// Telemetry sink that drops all events.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopTelemetrySink;

impl TelemetrySink for NoopTelemetrySink {
    fn record(&self, _event: TelemetryEvent) {}
}

/// Records telemetry events to stderr as JSON lines (JSONL).
#[derive(Debug, Default)]
pub struct StderrJsonlTelemetrySink;

impl TelemetrySink for StderrJsonlTelemetrySink {
    fn record(&self, event: TelemetryEvent) {
        let Ok(serialised) = serde_json::to_string(&event) else {
            return;
        };

        let _ignored = writeln_stderr(&serialised);
    }
}

fn writeln_stderr(message: &str) -> io::Result<()> {
    use io::Write;

    let mut stderr = io::stderr().lock();
    writeln!(stderr, "{message}")
}

/// Converts an elapsed duration into whole milliseconds, saturating.
#[must_use]
pub fn elapsed_millis(elapsed: std::time::Duration) -> u64 {
    u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX)
}

/// Telemetry helpers for tests.
#[cfg(any(test, feature = "test-support"))]
pub mod test_support {
    use std::sync::Mutex;

    use super::{TelemetryEvent, TelemetrySink};

    /// Sink that keeps every recorded event in memory.
    #[derive(Debug, Default)]
    pub struct RecordingTelemetrySink {
        events: Mutex<Vec<TelemetryEvent>>,
    }

    impl RecordingTelemetrySink {
        /// Removes and returns the recorded events.
        #[must_use]
        pub fn take(&self) -> Vec<TelemetryEvent> {
            self.events
                .lock()
                .map(|mut events| events.drain(..).collect())
                .unwrap_or_default()
        }
    }

    impl TelemetrySink for RecordingTelemetrySink {
        fn record(&self, event: TelemetryEvent) {
            if let Ok(mut events) = self.events.lock() {
                events.push(event);
            }
        }
    }
}
