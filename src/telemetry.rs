//! Structured events describing what the calendar list did.
//!
//! Hosts can forward these to their own observability pipeline; the CLI
//! writes them to stderr as JSON lines for local debugging.

use std::io;

use serde::Serialize;

/// A structured telemetry event emitted while driving a calendar list.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TelemetryEvent {
    /// The initial window was built.
    WindowBuilt {
        /// Anchor date (`YYYY-MM-DD`).
        anchor: String,
        /// Number of rows in the window.
        length: usize,
        /// Number of rows materialized up front.
        materialized: usize,
    },
    /// The set of exactly visible months changed.
    VisibleMonthsChanged {
        /// Visible months as `YYYY-MM-DD` strings, in row order.
        months: Vec<String>,
    },
    /// A scroll command was issued to the host list.
    ScrollRequested {
        /// Target offset in pixels.
        offset: f64,
        /// Whether the jump is animated.
        animated: bool,
    },
    /// The host's current date moved.
    AnchorChanged {
        /// Previous current date (`YYYY-MM-DD`).
        from: String,
        /// New current date (`YYYY-MM-DD`).
        to: String,
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

/// Telemetry helpers for tests.
#[cfg(any(test, feature = "test-support"))]
pub mod test_support {
    use std::sync::Mutex;

    use super::{TelemetryEvent, TelemetrySink};

    /// Sink that keeps every event in memory.
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
