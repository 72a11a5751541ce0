//! Fixed-length, virtualized window of month rows.
//!
//! A window spans `past_range` months before the anchor, the anchor itself,
//! and `future_range` months after it. Only a small neighborhood of rows is
//! materialized at any time; every other slot is a placeholder that reuses
//! the label computed when the window was built.

mod row;
mod viewport;

use std::sync::Arc;

pub use row::Row;
pub use viewport::{DEFAULT_PROXIMITY_DISTANCE, ViewportUpdate, update};

use crate::dates::MonthDate;

/// Ordered, fixed-length sequence of month rows around an anchor month.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthWindow {
    anchor: MonthDate,
    past_range: usize,
    labels: Arc<[Arc<str>]>,
    rows: Vec<Row>,
}

impl MonthWindow {
    /// Builds the initial window anchored at `anchor`.
    ///
    /// The anchor and the month after it are materialized up front, together
    /// with the month before the anchor (or, without a past buffer, the
    /// second month after it) so the first render has real content before
    /// any viewport callback arrives. Seeds that fall outside the window are
    /// skipped.
    #[must_use]
    pub fn build(anchor: MonthDate, past_range: usize, future_range: usize) -> Self {
        let len = past_range.saturating_add(future_range).saturating_add(1);
        let labels: Arc<[Arc<str>]> = (0..len)
            .map(|index| {
                Arc::<str>::from(anchor.add_months(month_delta(index, past_range)).label())
            })
            .collect();
        let rows = labels.iter().cloned().map(Row::placeholder).collect();

        let mut window = Self {
            anchor,
            past_range,
            labels,
            rows,
        };

        let trailing_seed = if past_range > 0 {
            past_range.checked_sub(1)
        } else {
            past_range.checked_add(2)
        };
        for seed in [Some(past_range), past_range.checked_add(1), trailing_seed]
            .into_iter()
            .flatten()
        {
            let date = window.month_at(seed);
            if let Some(slot) = window.rows.get_mut(seed) {
                *slot = Row::materialized(date);
            }
        }

        window
    }

    /// Returns the anchor month the window was built around.
    #[must_use]
    pub const fn anchor(&self) -> MonthDate {
        self.anchor
    }

    /// Returns the number of months before the anchor.
    #[must_use]
    pub const fn past_range(&self) -> usize {
        self.past_range
    }

    /// Returns the number of months after the anchor.
    #[must_use]
    pub const fn future_range(&self) -> usize {
        self.rows
            .len()
            .saturating_sub(self.past_range)
            .saturating_sub(1)
    }

    /// Returns the window length.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true when the window has no rows.
    ///
    /// Built windows always hold at least the anchor row.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns all rows in index order.
    #[must_use]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Returns the row at `index`.
    #[must_use]
    pub fn row(&self, index: usize) -> Option<&Row> {
        self.rows.get(index)
    }

    /// Returns the month a row at `index` denotes, materialized or not.
    #[must_use]
    pub fn month_at(&self, index: usize) -> MonthDate {
        self.anchor.add_months(month_delta(index, self.past_range))
    }

    /// Returns the label precomputed for `index` at build time.
    #[must_use]
    pub fn label_at(&self, index: usize) -> Option<&Arc<str>> {
        self.labels.get(index)
    }

    /// Returns the number of materialized rows.
    #[must_use]
    pub fn materialized_count(&self) -> usize {
        self.rows.iter().filter(|row| row.is_materialized()).count()
    }

    /// Increments the revision of every materialized row.
    pub fn bump_revisions(&mut self) {
        self.rows.iter_mut().for_each(Row::bump_revision);
    }

    /// Creates a sibling window sharing this window's anchor and labels.
    fn with_rows(&self, rows: Vec<Row>) -> Self {
        Self {
            anchor: self.anchor,
            past_range: self.past_range,
            labels: Arc::clone(&self.labels),
            rows,
        }
    }
}

/// Signed month distance of `index` from the anchor slot.
fn month_delta(index: usize, past_range: usize) -> i64 {
    signed(index).saturating_sub(signed(past_range))
}

fn signed(value: usize) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}
