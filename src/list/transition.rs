//! Reactions to host-driven changes of the current date.

use chrono::NaiveDate;

use super::CalendarList;
use crate::dates::MonthDate;
use crate::navigation::ScrollHandle;

impl CalendarList {
    /// Follows a new current date reported by the host.
    ///
    /// When `next` differs from the current date the list jumps to its month
    /// and bumps the revision of every materialized row so month cells
    /// re-render even though their dates are unchanged. The window itself is
    /// neither rebuilt nor resized. Returns whether a transition happened.
    pub fn set_current(&mut self, handle: &mut dyn ScrollHandle, next: NaiveDate) -> bool {
        let next_month = MonthDate::new(next);
        if next_month == self.current {
            return false;
        }

        tracing::debug!(
            "current date changed from {} to {next}",
            self.current.date()
        );
        self.navigator.scroll_to_month(handle, next_month);
        self.window.bump_revisions();
        self.current = next_month;
        true
    }

    /// Forces materialized rows to re-render without navigating.
    ///
    /// Hosts call this when pass-through rendering inputs such as marked or
    /// selected dates change while the current date stays the same.
    pub fn refresh(&mut self) {
        self.window.bump_revisions();
    }
}
