//! Viewport change handling.

use super::{CalendarList, ViewableItem};
use crate::window;

impl CalendarList {
    /// Applies a viewable items notification from the host list.
    ///
    /// The window is replaced wholesale and the listener receives the months
    /// at exactly viewable rows.
    pub fn on_viewable_items_changed(&mut self, viewable_items: &[ViewableItem]) {
        let indices: Vec<usize> = viewable_items.iter().map(|item| item.index).collect();
        let update = window::update(&self.window, &indices, self.options.proximity_distance);
        tracing::trace!(
            "viewport {indices:?}: promoted {}, demoted {}",
            update.promoted,
            update.demoted
        );

        self.window = update.window;
        self.visible_months = update.visible_months;
        if let Some(listener) = self.listener.as_mut() {
            listener.visible_months_changed(&self.visible_months);
        }
    }
}
