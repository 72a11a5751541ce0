//! Host-facing calendar list component.
//!
//! `CalendarList` owns the month window, the navigator derived from it, and
//! the host's current date. Hosts feed it viewport and date changes from
//! their event loop and hand it a [`ScrollHandle`] whenever a change needs
//! to move the list. Handlers are split by concern:
//!
//! - `viewport_handlers`: viewable item notifications
//! - `transition`: current date changes and forced refreshes
//! - `render`: row descriptors and layout queries for the list primitive

mod render;
mod transition;
mod viewport_handlers;

use std::fmt;

use chrono::{Local, NaiveDate, Weekday};

pub use render::RowView;

use crate::dates::{DateData, MonthDate};
use crate::navigation::{DEFAULT_WEEK_ROW_HEIGHT, Navigator, ScrollHandle};
use crate::window::{DEFAULT_PROXIMITY_DISTANCE, MonthWindow, Row};

/// Default number of months reachable before the anchor.
pub const DEFAULT_PAST_SCROLL_RANGE: usize = 50;

/// Default number of months reachable after the anchor.
pub const DEFAULT_FUTURE_SCROLL_RANGE: usize = 50;

/// Default height, in pixels, of a month row.
pub const DEFAULT_CALENDAR_HEIGHT: f64 = 360.0;

/// Construction options supplied by the host.
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarListOptions {
    /// Months reachable before the anchor.
    pub past_scroll_range: usize,
    /// Months reachable after the anchor.
    pub future_scroll_range: usize,
    /// Whether the host list accepts user scrolling.
    pub scroll_enabled: bool,
    /// Height of every month row in pixels.
    pub calendar_height: f64,
    /// Initial current date; today when absent.
    pub current: Option<NaiveDate>,
    /// Radius, in rows, materialized around viewable rows.
    pub proximity_distance: usize,
    /// Height of a week row inside a month grid.
    pub week_row_height: f64,
    /// First day of the week for month pages.
    pub first_day: Weekday,
}

impl Default for CalendarListOptions {
    fn default() -> Self {
        Self {
            past_scroll_range: DEFAULT_PAST_SCROLL_RANGE,
            future_scroll_range: DEFAULT_FUTURE_SCROLL_RANGE,
            scroll_enabled: true,
            calendar_height: DEFAULT_CALENDAR_HEIGHT,
            current: None,
            proximity_distance: DEFAULT_PROXIMITY_DISTANCE,
            week_row_height: DEFAULT_WEEK_ROW_HEIGHT,
            first_day: Weekday::Sun,
        }
    }
}

/// Row index reported by the host list as currently on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewableItem {
    /// Index of the viewable row.
    pub index: usize,
}

/// Receives the months that became exactly visible after a viewport change.
#[cfg_attr(test, mockall::automock)]
pub trait VisibleMonthsListener {
    /// Called once per viewport change with months in row order.
    fn visible_months_changed(&mut self, months: &[DateData]);
}

/// Virtualized, scrollable list of calendar months.
pub struct CalendarList {
    options: CalendarListOptions,
    window: MonthWindow,
    navigator: Navigator,
    current: MonthDate,
    visible_months: Vec<DateData>,
    listener: Option<Box<dyn VisibleMonthsListener>>,
}

impl fmt::Debug for CalendarList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CalendarList")
            .field("options", &self.options)
            .field("window", &self.window)
            .field("current", &self.current)
            .field("visible_months", &self.visible_months)
            .field("has_listener", &self.listener.is_some())
            .finish_non_exhaustive()
    }
}

impl CalendarList {
    /// Builds the list and its initial window.
    #[must_use]
    pub fn new(options: CalendarListOptions) -> Self {
        let anchor = MonthDate::new(options.current.unwrap_or_else(|| Local::now().date_naive()));
        let window = MonthWindow::build(
            anchor,
            options.past_scroll_range,
            options.future_scroll_range,
        );
        let navigator = Navigator::new(anchor, options.past_scroll_range, options.calendar_height)
            .with_week_row_height(options.week_row_height)
            .with_first_day(options.first_day);
        tracing::debug!(
            "built month window of {} rows around {}",
            window.len(),
            anchor.date()
        );

        Self {
            options,
            window,
            navigator,
            current: anchor,
            visible_months: Vec::new(),
            listener: None,
        }
    }

    /// Registers the visibility listener.
    #[must_use]
    pub fn with_listener(mut self, listener: Box<dyn VisibleMonthsListener>) -> Self {
        self.listener = Some(listener);
        self
    }

    /// Returns the options the list was built with.
    #[must_use]
    pub const fn options(&self) -> &CalendarListOptions {
        &self.options
    }

    /// Returns the current window.
    #[must_use]
    pub const fn window(&self) -> &MonthWindow {
        &self.window
    }

    /// Returns the rows the host list renders.
    #[must_use]
    pub fn rows(&self) -> &[Row] {
        self.window.rows()
    }

    /// Returns the navigator for this list's anchor and row height.
    #[must_use]
    pub const fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    /// Returns the month the window is anchored at.
    #[must_use]
    pub const fn anchor(&self) -> MonthDate {
        self.window.anchor()
    }

    /// Returns the host's current date.
    #[must_use]
    pub const fn current(&self) -> MonthDate {
        self.current
    }

    /// Returns whether the host list accepts user scrolling.
    #[must_use]
    pub const fn scroll_enabled(&self) -> bool {
        self.options.scroll_enabled
    }

    /// Returns the months reported by the most recent viewport change.
    #[must_use]
    pub fn visible_months(&self) -> &[DateData] {
        &self.visible_months
    }

    /// Scrolls to the week containing `day`, plus `pixel_offset`.
    pub fn scroll_to_day(
        &self,
        handle: &mut dyn ScrollHandle,
        day: NaiveDate,
        pixel_offset: Option<f64>,
        animated: bool,
    ) {
        self.navigator
            .scroll_to_day(handle, day, pixel_offset, animated);
    }

    /// Jumps to the row for `month` without animation.
    pub fn scroll_to_month(&self, handle: &mut dyn ScrollHandle, month: NaiveDate) {
        self.navigator
            .scroll_to_month(handle, MonthDate::new(month));
    }
}
