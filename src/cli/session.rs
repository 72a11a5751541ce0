//! Replays configured host events against a calendar list.

use std::sync::Arc;

use almanac::dates::parse_date_or_today;
use almanac::host::{TelemetryScrollHandle, TelemetryVisibilityListener};
use almanac::telemetry::{TelemetryEvent, TelemetrySink};
use almanac::{AlmanacConfig, AlmanacError, CalendarList, ScrollRequest, ViewableItem};

/// Final state of a CLI session.
#[derive(Debug)]
pub struct SessionReport {
    /// The list after every configured event was applied.
    pub list: CalendarList,
    /// Where the last scroll command left the list, if any was issued.
    pub position: Option<ScrollRequest>,
}

/// Builds the list and applies, in order: the viewport change, the current
/// date transition, month navigation, and day navigation.
///
/// # Errors
///
/// Returns [`AlmanacError::Configuration`] for invalid geometry or first
/// day, and [`AlmanacError::InvalidViewableIndex`] for malformed viewable
/// indices.
pub fn run(
    config: &AlmanacConfig,
    sink: &Arc<dyn TelemetrySink>,
) -> Result<SessionReport, AlmanacError> {
    let options = config.list_options()?;
    let viewable = config.viewable_indices()?;

    let listener = TelemetryVisibilityListener::new(Arc::clone(sink));
    let mut list = CalendarList::new(options).with_listener(Box::new(listener));
    sink.record(TelemetryEvent::WindowBuilt {
        anchor: list.anchor().to_date_data().date_string,
        length: list.rows().len(),
        materialized: list.window().materialized_count(),
    });

    let initial = usize::try_from(list.initial_scroll_index()).unwrap_or_default();
    let indices = viewable.unwrap_or_else(|| vec![initial]);
    let items: Vec<ViewableItem> = indices
        .into_iter()
        .map(|index| ViewableItem { index })
        .collect();
    list.on_viewable_items_changed(&items);

    let mut handle = TelemetryScrollHandle::new(Arc::clone(sink));
    if let Some(next) = config.next_current.as_deref() {
        let previous = list.current();
        if list.set_current(&mut handle, parse_date_or_today(next)) {
            sink.record(TelemetryEvent::AnchorChanged {
                from: previous.to_date_data().date_string,
                to: list.current().to_date_data().date_string,
            });
        }
    }

    if let Some(month) = config.scroll_to_month.as_deref() {
        list.scroll_to_month(&mut handle, parse_date_or_today(month));
    }

    if let Some(day) = config.scroll_to_day.as_deref() {
        list.scroll_to_day(
            &mut handle,
            parse_date_or_today(day),
            config.day_offset,
            config.animated,
        );
    }

    Ok(SessionReport {
        list,
        position: handle.position(),
    })
}
