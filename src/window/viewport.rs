//! Promotion and demotion of rows as the viewport moves.
//!
//! Called at scroll-event cadence, so the update stays linear in the window
//! length: a single proximity mask is filled from the viewable indices and
//! then zipped against the current rows.

use super::{MonthWindow, Row};
use crate::dates::DateData;

/// Radius, in rows, around each viewable index that stays materialized.
pub const DEFAULT_PROXIMITY_DISTANCE: usize = 1;

/// How close a row sits to the nearest viewable index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Proximity {
    Far,
    Near,
    Visible,
}

/// Result of applying a viewport change to a window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewportUpdate {
    /// Replacement window.
    pub window: MonthWindow,
    /// Months at exactly viewable indices, in index order.
    pub visible_months: Vec<DateData>,
    /// Rows turned from placeholders into months.
    pub promoted: usize,
    /// Rows turned from months back into placeholders.
    pub demoted: usize,
}

/// Recomputes which rows are materialized for the given viewable indices.
///
/// Rows within `proximity_distance` of any viewable index are materialized
/// (keeping their revision if already materialized); all other rows become
/// placeholders carrying the label computed at build time. Viewable indices
/// outside the window still widen the neighborhood of in-range rows.
#[must_use]
pub fn update(
    window: &MonthWindow,
    viewable_indices: &[usize],
    proximity_distance: usize,
) -> ViewportUpdate {
    let mask = proximity_mask(window.len(), viewable_indices, proximity_distance);

    let mut promoted = 0;
    let mut demoted = 0;
    let mut visible_months = Vec::new();
    let rows = window
        .rows()
        .iter()
        .zip(mask)
        .enumerate()
        .map(|(index, (row, proximity))| {
            let next = match (row, proximity) {
                (Row::Placeholder { .. }, Proximity::Near | Proximity::Visible) => {
                    promoted += 1;
                    Row::materialized(window.month_at(index))
                }
                (Row::Materialized { .. }, Proximity::Far) => {
                    demoted += 1;
                    window
                        .label_at(index)
                        .cloned()
                        .map_or_else(|| row.clone(), Row::placeholder)
                }
                (current, _) => current.clone(),
            };
            if proximity == Proximity::Visible
                && let Some(date) = next.date()
            {
                visible_months.push(date.to_date_data());
            }
            next
        })
        .collect();

    ViewportUpdate {
        window: window.with_rows(rows),
        visible_months,
        promoted,
        demoted,
    }
}

fn proximity_mask(len: usize, viewable_indices: &[usize], distance: usize) -> Vec<Proximity> {
    let mut mask = vec![Proximity::Far; len];

    for &viewable in viewable_indices {
        let start = viewable.saturating_sub(distance);
        let end = viewable.saturating_add(distance);
        for (index, slot) in mask
            .iter_mut()
            .enumerate()
            .take(end.saturating_add(1))
            .skip(start)
        {
            if index == viewable {
                *slot = Proximity::Visible;
            } else if *slot == Proximity::Far {
                *slot = Proximity::Near;
            }
        }
    }

    mask
}
