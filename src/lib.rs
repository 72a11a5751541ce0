//! Almanac library crate providing a virtualized window of calendar months.
//!
//! A host list renders an effectively endless scroll of months while the
//! engine keeps only a small neighborhood of rows around the viewport
//! materialized. The crate builds the row window, promotes and demotes rows
//! as the viewport moves, and converts dates into fixed-height scroll
//! offsets and row indices. Day grids, styling, and the list widget itself
//! belong to the host.

pub mod config;
pub mod dates;
pub mod error;
pub mod host;
pub mod list;
pub mod navigation;
pub mod telemetry;
pub mod window;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use config::AlmanacConfig;
pub use dates::{DateData, MonthDate};
pub use error::AlmanacError;
pub use list::{CalendarList, CalendarListOptions, RowView, ViewableItem, VisibleMonthsListener};
pub use navigation::{ItemLayout, Navigator, ScrollHandle, ScrollRequest};
pub use window::{MonthWindow, Row, ViewportUpdate};
