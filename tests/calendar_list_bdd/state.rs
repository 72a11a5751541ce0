//! Scenario state for calendar list BDD tests.

use std::sync::Arc;

use almanac::CalendarList;
use almanac::telemetry::test_support::RecordingTelemetrySink;
use almanac::test_support::{RecordingListener, RecordingScrollHandle};
use chrono::NaiveDate;
use rstest_bdd::Slot;
use rstest_bdd_macros::ScenarioState;

/// State shared across steps in a calendar list scenario.
#[derive(ScenarioState, Default)]
pub(crate) struct ListState {
    /// The list under test.
    pub(crate) list: Slot<CalendarList>,
    /// Scroll handle receiving navigation requests.
    pub(crate) handle: Slot<RecordingScrollHandle>,
    /// Listener sharing visibility notifications with the steps.
    pub(crate) listener: Slot<RecordingListener>,
    /// Recording telemetry sink for capturing events.
    pub(crate) telemetry_sink: Slot<Arc<RecordingTelemetrySink>>,
}

/// Parses a `YYYY-MM-DD` step argument.
#[expect(clippy::expect_used, reason = "BDD test helper; panics are acceptable")]
pub(crate) fn step_date(raw: &str) -> NaiveDate {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").expect("step date should be YYYY-MM-DD")
}

/// Parses a comma-separated list of row indices.
#[expect(clippy::expect_used, reason = "BDD test helper; panics are acceptable")]
pub(crate) fn step_indices(raw: &str) -> Vec<usize> {
    raw.split(',')
        .map(|entry| entry.trim().parse().expect("row index should be numeric"))
        .collect()
}
