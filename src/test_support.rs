//! Recording collaborators for tests.

use std::cell::RefCell;
use std::rc::Rc;

use crate::dates::DateData;
use crate::list::VisibleMonthsListener;
use crate::navigation::{ScrollHandle, ScrollRequest};

/// Scroll handle that keeps every request it receives.
#[derive(Debug, Default, Clone)]
pub struct RecordingScrollHandle {
    requests: Vec<ScrollRequest>,
}

impl RecordingScrollHandle {
    /// Returns all recorded requests, oldest first.
    #[must_use]
    pub fn requests(&self) -> &[ScrollRequest] {
        &self.requests
    }

    /// Returns the most recent request, which defines the scroll position.
    #[must_use]
    pub fn last(&self) -> Option<ScrollRequest> {
        self.requests.last().copied()
    }
}

impl ScrollHandle for RecordingScrollHandle {
    fn scroll_to_offset(&mut self, request: ScrollRequest) {
        self.requests.push(request);
    }
}

/// Visibility listener that shares its notifications with the test.
#[derive(Debug, Default, Clone)]
pub struct RecordingListener {
    notifications: Rc<RefCell<Vec<Vec<DateData>>>>,
}

impl RecordingListener {
    /// Returns a copy of every notification received so far.
    #[must_use]
    pub fn notifications(&self) -> Vec<Vec<DateData>> {
        self.notifications.borrow().clone()
    }

    /// Returns the date strings of the latest notification.
    #[must_use]
    pub fn last_date_strings(&self) -> Vec<String> {
        self.notifications
            .borrow()
            .last()
            .map(|months| {
                months
                    .iter()
                    .map(|month| month.date_string.clone())
                    .collect()
            })
            .unwrap_or_default()
    }
}

impl VisibleMonthsListener for RecordingListener {
    fn visible_months_changed(&mut self, months: &[DateData]) {
        self.notifications.borrow_mut().push(months.to_vec());
    }
}
