//! Row descriptors and layout queries for the host list.

use std::sync::Arc;

use chrono::Weekday;

use super::CalendarList;
use crate::dates::MonthDate;
use crate::navigation::ItemLayout;
use crate::window::Row;

/// What the host should draw for a row.
#[derive(Debug, Clone, PartialEq)]
pub enum RowView {
    /// Full month grid, drawn by the month cell renderer.
    Month {
        /// Month to draw.
        date: MonthDate,
        /// Revision the cell should compare alongside `date`.
        revision: u32,
        /// Row height in pixels.
        height: f64,
        /// First day of the week for the grid.
        first_day: Weekday,
    },
    /// Text-only stand-in for a month outside the render radius.
    Placeholder {
        /// Month label.
        label: Arc<str>,
        /// Row height in pixels.
        height: f64,
    },
}

impl CalendarList {
    /// Returns the descriptor for the row at `index`.
    #[must_use]
    pub fn render_item(&self, index: usize) -> Option<RowView> {
        let height = self.options.calendar_height;
        self.window.row(index).map(|row| match row {
            Row::Materialized { date, revision } => RowView::Month {
                date: *date,
                revision: *revision,
                height,
                first_day: self.options.first_day,
            },
            Row::Placeholder { label } => RowView::Placeholder {
                label: Arc::clone(label),
                height,
            },
        })
    }

    /// Returns the fixed layout entry for the row at `index`.
    #[must_use]
    pub fn item_layout(&self, index: usize) -> ItemLayout {
        self.navigator.item_layout(index)
    }

    /// Returns the stable key of the row at `index`.
    #[must_use]
    pub fn key(index: usize) -> String {
        index.to_string()
    }

    /// Returns the row the host list should initially scroll to.
    #[must_use]
    pub fn initial_scroll_index(&self) -> i64 {
        self.navigator.month_index(self.anchor())
    }
}
