//! Row slots held by a month window.

use std::sync::Arc;

use crate::dates::MonthDate;

/// A single month slot in the scrollable window.
///
/// Placeholders carry only the precomputed label shown while the month is
/// far from the viewport. Materialized rows are bound to a concrete month and
/// carry a revision that month cells compare alongside the date to decide
/// whether to re-render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Row {
    /// Lightweight label standing in for a month outside the render radius.
    Placeholder {
        /// Month label, e.g. `Mar 2024`.
        label: Arc<str>,
    },
    /// Month ready for full grid rendering.
    Materialized {
        /// Month the row is bound to.
        date: MonthDate,
        /// Monotonic re-render counter.
        revision: u32,
    },
}

impl Row {
    /// Creates a placeholder row sharing `label`.
    #[must_use]
    pub const fn placeholder(label: Arc<str>) -> Self {
        Self::Placeholder { label }
    }

    /// Creates a freshly materialized row at revision zero.
    #[must_use]
    pub const fn materialized(date: MonthDate) -> Self {
        Self::Materialized { date, revision: 0 }
    }

    /// Returns true when the row is bound to a month.
    #[must_use]
    pub const fn is_materialized(&self) -> bool {
        matches!(self, Self::Materialized { .. })
    }

    /// Returns the bound month, if materialized.
    #[must_use]
    pub const fn date(&self) -> Option<MonthDate> {
        match self {
            Self::Materialized { date, .. } => Some(*date),
            Self::Placeholder { .. } => None,
        }
    }

    /// Returns the revision counter, if materialized.
    #[must_use]
    pub const fn revision(&self) -> Option<u32> {
        match self {
            Self::Materialized { revision, .. } => Some(*revision),
            Self::Placeholder { .. } => None,
        }
    }

    /// Returns the placeholder label, if the row is a placeholder.
    #[must_use]
    pub fn label(&self) -> Option<&str> {
        match self {
            Self::Placeholder { label } => Some(label),
            Self::Materialized { .. } => None,
        }
    }

    /// Increments the revision of a materialized row.
    ///
    /// Placeholders are left untouched.
    pub const fn bump_revision(&mut self) {
        if let Self::Materialized { revision, .. } = self {
            *revision = revision.saturating_add(1);
        }
    }
}
