//! Scroll offset and row index arithmetic for fixed-height month rows.
//!
//! Every row in the list has the same height, so layout is a pure function
//! of the index and jumps to any month need no measurement. Offsets are not
//! clamped to the window; the list primitive decides what to do with targets
//! beyond its content.

use chrono::{NaiveDate, Weekday};
use serde::Serialize;

use crate::dates::{MonthDate, month_page, week_index};

/// Height, in pixels, of a single week row inside a month grid.
pub const DEFAULT_WEEK_ROW_HEIGHT: f64 = 46.0;

/// Imperative scroll command accepted by the host list.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScrollRequest {
    /// Absolute content offset in pixels.
    pub offset: f64,
    /// Whether the host should animate the jump.
    pub animated: bool,
}

/// Layout entry reported for a row.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ItemLayout {
    /// Row height in pixels.
    pub length: f64,
    /// Offset of the row's top edge in pixels.
    pub offset: f64,
    /// Row index.
    pub index: usize,
}

/// Handle onto the host list's scroll position.
///
/// Scroll requests are fire-and-forget: a later request supersedes an
/// earlier one and nothing is acknowledged.
#[cfg_attr(test, mockall::automock)]
pub trait ScrollHandle {
    /// Jumps the list to `request.offset`.
    fn scroll_to_offset(&mut self, request: ScrollRequest);
}

/// Converts dates into offsets and indices relative to a window's anchor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Navigator {
    anchor: MonthDate,
    past_range: usize,
    row_height: f64,
    week_row_height: f64,
    first_day: Weekday,
}

impl Navigator {
    /// Creates a navigator for a window anchored at `anchor`.
    #[must_use]
    pub const fn new(anchor: MonthDate, past_range: usize, row_height: f64) -> Self {
        Self {
            anchor,
            past_range,
            row_height,
            week_row_height: DEFAULT_WEEK_ROW_HEIGHT,
            first_day: Weekday::Sun,
        }
    }

    /// Overrides the week row height used by day navigation.
    #[must_use]
    pub const fn with_week_row_height(mut self, week_row_height: f64) -> Self {
        self.week_row_height = week_row_height;
        self
    }

    /// Overrides the first day of the week used to lay out month pages.
    #[must_use]
    pub const fn with_first_day(mut self, first_day: Weekday) -> Self {
        self.first_day = first_day;
        self
    }

    /// Returns the fixed row height in pixels.
    #[must_use]
    pub const fn row_height(&self) -> f64 {
        self.row_height
    }

    /// Returns the offset that brings the week containing `target` into view.
    ///
    /// The month distance is rounded to the nearest integer; `pixel_offset`
    /// is added before the week row adjustment.
    #[must_use]
    pub fn day_offset(&self, target: NaiveDate, pixel_offset: Option<f64>) -> f64 {
        let target_month = MonthDate::new(target);
        let diff_months = self
            .anchor
            .start_of_month()
            .months_between(target_month.start_of_month())
            .round();
        let base =
            self.anchor_offset() + diff_months * self.row_height + pixel_offset.unwrap_or(0.0);

        let page = month_page(target, self.first_day);
        let week = week_index(&page, target);
        base + count_to_f64(week) * self.week_row_height
    }

    /// Scrolls to the week containing `target`.
    pub fn scroll_to_day(
        &self,
        handle: &mut dyn ScrollHandle,
        target: NaiveDate,
        pixel_offset: Option<f64>,
        animated: bool,
    ) {
        let offset = self.day_offset(target, pixel_offset);
        tracing::debug!("scroll_to_day {target} -> offset {offset} (animated: {animated})");
        handle.scroll_to_offset(ScrollRequest { offset, animated });
    }

    /// Returns the offset of the row for `target`'s month.
    ///
    /// Negative fractional distances round up and non-negative ones round
    /// down.
    #[must_use]
    pub fn month_offset(&self, target: MonthDate) -> f64 {
        self.offset_for_month_diff(self.anchor.months_between(target))
    }

    /// Returns the row offset for a fractional month distance from the anchor.
    #[must_use]
    pub fn offset_for_month_diff(&self, diff_months: f64) -> f64 {
        let rounded = if diff_months < 0.0 {
            diff_months.ceil()
        } else {
            diff_months.floor()
        };
        self.anchor_offset() + rounded * self.row_height
    }

    /// Jumps, without animation, to the row for `target`'s month.
    pub fn scroll_to_month(&self, handle: &mut dyn ScrollHandle, target: MonthDate) {
        let offset = self.month_offset(target);
        tracing::debug!("scroll_to_month {} -> offset {offset}", target.date());
        handle.scroll_to_offset(ScrollRequest {
            offset,
            animated: false,
        });
    }

    /// Returns the layout entry of the row at `index`.
    #[must_use]
    pub fn item_layout(&self, index: usize) -> ItemLayout {
        ItemLayout {
            length: self.row_height,
            offset: self.row_height * count_to_f64(index),
            index,
        }
    }

    /// Returns the row index for `month`, truncating fractional distances.
    ///
    /// Months outside the window yield indices below zero or past its end.
    #[must_use]
    pub fn month_index(&self, month: MonthDate) -> i64 {
        let diff = self.anchor.months_between(month).trunc();
        truncate_to_i64(diff)
            .saturating_add(i64::try_from(self.past_range).unwrap_or(i64::MAX))
    }

    fn anchor_offset(&self) -> f64 {
        self.row_height * count_to_f64(self.past_range)
    }
}

#[expect(
    clippy::cast_precision_loss,
    reason = "row counts stay far below 2^52"
)]
const fn count_to_f64(value: usize) -> f64 {
    value as f64
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "input is already an integral month count"
)]
const fn truncate_to_i64(value: f64) -> i64 {
    value as i64
}
