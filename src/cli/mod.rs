//! CLI session handling.
//!
//! - [`session`]: Builds a calendar list from configuration and replays the
//!   requested viewport, date, and scroll changes against it
//! - [`output`]: Formats the resulting window for the terminal

pub mod output;
pub mod session;
