//! Collaborator implementations that report to a telemetry sink.
//!
//! These adapt the engine's scroll and visibility seams to hosts without a
//! real list widget, such as the command-line driver.

use std::sync::Arc;

use crate::dates::DateData;
use crate::list::VisibleMonthsListener;
use crate::navigation::{ScrollHandle, ScrollRequest};
use crate::telemetry::{TelemetryEvent, TelemetrySink};

/// Scroll handle that tracks the last requested position.
pub struct TelemetryScrollHandle {
    sink: Arc<dyn TelemetrySink>,
    position: Option<ScrollRequest>,
}

impl std::fmt::Debug for TelemetryScrollHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TelemetryScrollHandle")
            .field("position", &self.position)
            .finish_non_exhaustive()
    }
}

impl TelemetryScrollHandle {
    /// Creates a handle that has not scrolled yet.
    #[must_use]
    pub fn new(sink: Arc<dyn TelemetrySink>) -> Self {
        Self {
            sink,
            position: None,
        }
    }

    /// Returns the most recent scroll request, if any.
    #[must_use]
    pub const fn position(&self) -> Option<ScrollRequest> {
        self.position
    }
}

impl ScrollHandle for TelemetryScrollHandle {
    fn scroll_to_offset(&mut self, request: ScrollRequest) {
        self.sink.record(TelemetryEvent::ScrollRequested {
            offset: request.offset,
            animated: request.animated,
        });
        self.position = Some(request);
    }
}

/// Visibility listener that records each change as a telemetry event.
pub struct TelemetryVisibilityListener {
    sink: Arc<dyn TelemetrySink>,
}

impl std::fmt::Debug for TelemetryVisibilityListener {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TelemetryVisibilityListener")
            .finish_non_exhaustive()
    }
}

impl TelemetryVisibilityListener {
    /// Creates a listener reporting to `sink`.
    #[must_use]
    pub fn new(sink: Arc<dyn TelemetrySink>) -> Self {
        Self { sink }
    }
}

impl VisibleMonthsListener for TelemetryVisibilityListener {
    fn visible_months_changed(&mut self, months: &[DateData]) {
        self.sink.record(TelemetryEvent::VisibleMonthsChanged {
            months: months
                .iter()
                .map(|month| month.date_string.clone())
                .collect(),
        });
    }
}
