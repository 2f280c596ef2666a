//! Application telemetry events and sinks.
//!
//! Marquee talks to a single remote catalogue, so the useful operational
//! signals are fetch outcomes, latency, retry scheduling, and review
//! submissions. Events are structured so they can be written as JSON lines.

use std::io;

use serde::{Deserialize, Serialize};

/// Catalogue collection an event refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CatalogueResource {
    /// `GET /movies`.
    Movies,
    /// `GET /movieCompanies`.
    MovieCompanies,
}

/// A structured telemetry event emitted by Marquee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TelemetryEvent {
    /// A catalogue collection was fetched and applied.
    FetchCompleted {
        /// Collection that was fetched.
        resource: CatalogueResource,
        /// Number of records received.
        item_count: usize,
        /// Request latency in milliseconds.
        latency_ms: u64,
    },
    /// A catalogue fetch failed.
    FetchFailed {
        /// Collection that failed.
        resource: CatalogueResource,
    },
    /// A retry was scheduled after a failed fetch.
    RetryScheduled {
        /// Collection being retried.
        resource: CatalogueResource,
        /// One-based retry attempt number.
        attempt: u32,
        /// Delay before the retry fires, in milliseconds.
        delay_ms: u64,
    },
    /// A review submission was confirmed.
    ReviewSubmitted {
        /// Movie the review was written for.
        movie_id: String,
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
///
/// This is intended for local debugging and is not transmitted anywhere.
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

/// Forwards telemetry events to `tracing` at debug level.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingTelemetrySink;

impl TelemetrySink for TracingTelemetrySink {
    fn record(&self, event: TelemetryEvent) {
        let Ok(serialised) = serde_json::to_string(&event) else {
            return;
        };

        tracing::debug!(target: "marquee::telemetry", "{serialised}");
    }
}

fn writeln_stderr(message: &str) -> io::Result<()> {
    use io::Write;

    let mut stderr = io::stderr().lock();
    writeln!(stderr, "{message}")
}

#[cfg(any(test, feature = "test-support"))]
pub mod test_support {
    //! Telemetry sinks for tests.

    use std::sync::Mutex;

    use super::{TelemetryEvent, TelemetrySink};

    /// Sink that keeps every recorded event in memory.
    #[derive(Debug, Default)]
    pub struct RecordingTelemetrySink {
        events: Mutex<Vec<TelemetryEvent>>,
    }

    impl RecordingTelemetrySink {
        /// Returns a copy of the recorded events.
        #[must_use]
        pub fn events(&self) -> Vec<TelemetryEvent> {
            self.events
                .lock()
                .map(|events| events.clone())
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
