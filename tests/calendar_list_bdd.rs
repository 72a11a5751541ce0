//! Behavioural tests for the virtualized calendar list.

#[path = "calendar_list_bdd/mod.rs"]
mod calendar_list_bdd_support;

use std::sync::Arc;

use almanac::host::TelemetryVisibilityListener;
use almanac::telemetry::test_support::RecordingTelemetrySink;
use almanac::telemetry::{TelemetryEvent, TelemetrySink};
use almanac::test_support::{RecordingListener, RecordingScrollHandle};
use almanac::{CalendarList, CalendarListOptions, Row, ViewableItem};
use calendar_list_bdd_support::ListState;
use calendar_list_bdd_support::state::{step_date, step_indices};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};

#[fixture]
fn list_state() -> ListState {
    ListState::default()
}

// Given steps

#[given("a calendar list with {past:usize} past and {future:usize} future months around {date}")]
fn given_calendar_list(list_state: &ListState, past: usize, future: usize, date: String) {
    let listener = RecordingListener::default();
    let list = CalendarList::new(CalendarListOptions {
        past_scroll_range: past,
        future_scroll_range: future,
        current: Some(step_date(&date)),
        ..CalendarListOptions::default()
    })
    .with_listener(Box::new(listener.clone()));

    list_state.list.set(list);
    list_state.listener.set(listener);
    list_state.handle.set(RecordingScrollHandle::default());
}

#[given("a recording telemetry sink")]
fn given_recording_telemetry_sink(list_state: &ListState) {
    list_state
        .telemetry_sink
        .set(Arc::new(RecordingTelemetrySink::default()));
}

#[given("a telemetry-reporting calendar list around {date}")]
#[expect(clippy::expect_used, reason = "BDD test step; panics are acceptable")]
fn given_telemetry_list(list_state: &ListState, date: String) {
    let recording = list_state
        .telemetry_sink
        .with_ref(Arc::clone)
        .expect("telemetry sink not initialised");
    let sink: Arc<dyn TelemetrySink> = recording;
    let list = CalendarList::new(CalendarListOptions {
        current: Some(step_date(&date)),
        ..CalendarListOptions::default()
    })
    .with_listener(Box::new(TelemetryVisibilityListener::new(sink)));

    list_state.list.set(list);
    list_state.handle.set(RecordingScrollHandle::default());
}

// When steps

#[when("the rows {indices} become viewable")]
#[expect(clippy::expect_used, reason = "BDD test step; panics are acceptable")]
fn when_rows_become_viewable(list_state: &ListState, indices: String) {
    let items: Vec<ViewableItem> = step_indices(&indices)
        .into_iter()
        .map(|index| ViewableItem { index })
        .collect();

    list_state
        .list
        .with_mut(|list| list.on_viewable_items_changed(&items))
        .expect("list not initialised");
}

#[when("the list scrolls to month {date}")]
#[expect(clippy::expect_used, reason = "BDD test step; panics are acceptable")]
fn when_list_scrolls_to_month(list_state: &ListState, date: String) {
    let month = step_date(&date);
    list_state
        .handle
        .with_mut(|handle| {
            list_state
                .list
                .with_ref(|list| list.scroll_to_month(handle, month))
        })
        .flatten()
        .expect("list and handle not initialised");
}

#[when("the current date changes to {date}")]
#[expect(clippy::expect_used, reason = "BDD test step; panics are acceptable")]
fn when_current_date_changes(list_state: &ListState, date: String) {
    let next = step_date(&date);
    list_state
        .handle
        .with_mut(|handle| {
            list_state
                .list
                .with_mut(|list| list.set_current(handle, next))
        })
        .flatten()
        .expect("list and handle not initialised");
}

// Then steps

#[then("the window has {count:usize} rows")]
#[expect(clippy::expect_used, reason = "BDD test step; panics are acceptable")]
fn then_window_has_rows(list_state: &ListState, count: usize) {
    let actual = list_state
        .list
        .with_ref(|list| list.rows().len())
        .expect("list not initialised");

    assert_eq!(actual, count, "window length mismatch");
}

#[then("the materialized rows are {indices}")]
#[expect(clippy::expect_used, reason = "BDD test step; panics are acceptable")]
fn then_materialized_rows(list_state: &ListState, indices: String) {
    let actual: Vec<usize> = list_state
        .list
        .with_ref(|list| {
            list.rows()
                .iter()
                .enumerate()
                .filter_map(|(index, row)| row.is_materialized().then_some(index))
                .collect()
        })
        .expect("list not initialised");

    assert_eq!(actual, step_indices(&indices), "materialized rows mismatch");
}

#[then("the visible months are {months}")]
#[expect(clippy::expect_used, reason = "BDD test step; panics are acceptable")]
fn then_visible_months(list_state: &ListState, months: String) {
    let actual = list_state
        .listener
        .with_ref(RecordingListener::last_date_strings)
        .expect("listener not initialised");

    assert_eq!(actual.join(","), months, "visible months mismatch");
}

#[then("the listener received {count:usize} notifications")]
#[expect(clippy::expect_used, reason = "BDD test step; panics are acceptable")]
fn then_listener_notifications(list_state: &ListState, count: usize) {
    let actual = list_state
        .listener
        .with_ref(|listener| listener.notifications().len())
        .expect("listener not initialised");

    assert_eq!(actual, count, "notification count mismatch");
}

#[then("the last scroll offset is {offset:f64}")]
#[expect(clippy::expect_used, reason = "BDD test step; panics are acceptable")]
fn then_last_scroll_offset(list_state: &ListState, offset: f64) {
    let last = list_state
        .handle
        .with_ref(RecordingScrollHandle::last)
        .expect("handle not initialised")
        .expect("no scroll request was issued");

    assert!(
        (last.offset - offset).abs() < f64::EPSILON,
        "expected offset {offset}, got {}",
        last.offset
    );
    assert!(!last.animated, "month jumps should not animate");
}

#[then("no scroll request was issued")]
#[expect(clippy::expect_used, reason = "BDD test step; panics are acceptable")]
fn then_no_scroll_request(list_state: &ListState) {
    let count = list_state
        .handle
        .with_ref(|handle| handle.requests().len())
        .expect("handle not initialised");

    assert_eq!(count, 0, "unexpected scroll requests");
}

#[then("every materialized row has revision {revision:u32}")]
#[expect(clippy::expect_used, reason = "BDD test step; panics are acceptable")]
fn then_every_revision(list_state: &ListState, revision: u32) {
    let revisions: Vec<u32> = list_state
        .list
        .with_ref(|list| list.rows().iter().filter_map(Row::revision).collect())
        .expect("list not initialised");

    assert!(!revisions.is_empty(), "expected materialized rows");
    assert!(
        revisions.iter().all(|actual| *actual == revision),
        "revisions mismatch: {revisions:?}"
    );
}

#[then("a visible months event lists {months}")]
#[expect(clippy::expect_used, reason = "BDD test step; panics are acceptable")]
fn then_visible_months_event(list_state: &ListState, months: String) {
    let events = list_state
        .telemetry_sink
        .with_ref(|sink| sink.events())
        .expect("telemetry sink not initialised");

    let listed = events.iter().find_map(|event| {
        if let TelemetryEvent::VisibleMonthsChanged { months: listed } = event {
            Some(listed.join(","))
        } else {
            None
        }
    });

    assert_eq!(listed, Some(months), "visible months event mismatch");
}

// Scenario bindings

#[scenario(path = "tests/features/calendar_list.feature", index = 0)]
fn builds_window_around_current_date(list_state: ListState) {
    let _ = list_state;
}

#[scenario(path = "tests/features/calendar_list.feature", index = 1)]
fn viewable_rows_materialize_neighbourhood(list_state: ListState) {
    let _ = list_state;
}

#[scenario(path = "tests/features/calendar_list.feature", index = 2)]
fn month_jumps_before_anchor_round_up(list_state: ListState) {
    let _ = list_state;
}

#[scenario(path = "tests/features/calendar_list.feature", index = 3)]
fn month_jumps_after_anchor_round_down(list_state: ListState) {
    let _ = list_state;
}

#[scenario(path = "tests/features/calendar_list.feature", index = 4)]
fn current_date_change_bumps_revisions(list_state: ListState) {
    let _ = list_state;
}

#[scenario(path = "tests/features/calendar_list.feature", index = 5)]
fn unchanged_current_date_is_ignored(list_state: ListState) {
    let _ = list_state;
}

#[scenario(path = "tests/features/calendar_list.feature", index = 6)]
fn visibility_changes_reach_telemetry(list_state: ListState) {
    let _ = list_state;
}
