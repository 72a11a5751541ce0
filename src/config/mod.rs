//! Application configuration loaded from CLI, environment, and files.
//!
//! This module provides a unified configuration struct that merges values
//! from command-line arguments, environment variables, and configuration
//! files using ortho-config's layered approach.
//!
//! # Precedence
//!
//! Configuration values are loaded with the following precedence (lowest to
//! highest):
//!
//! 1. **Defaults** – Built-in application defaults
//! 2. **Configuration file** – `.almanac.toml` in current directory, home
//!    directory, or XDG config directory
//! 3. **Environment variables** – `ALMANAC_CURRENT`,
//!    `ALMANAC_PAST_SCROLL_RANGE`, and so on
//! 4. **Command-line arguments** – `--current`/`-c`, `--viewable`/`-v`, ...
//!
//! # Configuration File
//!
//! ```toml
//! current = "2024-03-15"
//! past_scroll_range = 24
//! future_scroll_range = 24
//! calendar_height = 320.0
//! first_day = 1
//! ```

use chrono::Weekday;
use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};

use crate::dates::parse_date_or_today;
use crate::error::AlmanacError;
use crate::list::{
    CalendarListOptions, DEFAULT_CALENDAR_HEIGHT, DEFAULT_FUTURE_SCROLL_RANGE,
    DEFAULT_PAST_SCROLL_RANGE,
};
use crate::navigation::DEFAULT_WEEK_ROW_HEIGHT;
use crate::window::DEFAULT_PROXIMITY_DISTANCE;

/// Application configuration supporting CLI, environment, and file sources.
///
/// # Example
///
/// ```no_run
/// use almanac::AlmanacConfig;
/// use ortho_config::OrthoConfig;
///
/// let config = AlmanacConfig::load().expect("failed to load configuration");
/// let options = config.list_options().expect("valid list options");
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, OrthoConfig)]
#[serde(default)]
#[ortho_config(
    prefix = "ALMANAC",
    discovery(
        dotfile_name = ".almanac.toml",
        config_file_name = "almanac.toml",
        app_name = "almanac"
    )
)]
pub struct AlmanacConfig {
    /// Current date the list opens at (`YYYY-MM-DD`); today when absent or
    /// unparseable.
    ///
    /// Can be provided via:
    /// - CLI: `--current <DATE>` or `-c <DATE>`
    /// - Environment: `ALMANAC_CURRENT`
    /// - Config file: `current = "..."`
    #[ortho_config(cli_short = 'c')]
    pub current: Option<String>,

    /// Months reachable before the current month. Defaults to 50.
    #[ortho_config()]
    pub past_scroll_range: usize,

    /// Months reachable after the current month. Defaults to 50.
    #[ortho_config()]
    pub future_scroll_range: usize,

    /// Stops the host list from accepting user scrolling.
    ///
    /// Can be provided via:
    /// - CLI: `--no-scroll`
    /// - Config file: `no_scroll = true`
    #[ortho_config(cli_short = 'S')]
    pub no_scroll: bool,

    /// Height of a month row in pixels. Defaults to 360.
    #[ortho_config()]
    pub calendar_height: f64,

    /// Rows materialized on either side of each viewable row. Defaults to 1.
    #[ortho_config()]
    pub proximity_distance: usize,

    /// Height of a week row inside a month grid in pixels. Defaults to 46.
    #[ortho_config()]
    pub week_row_height: f64,

    /// First day of the week, 0 (Sunday) through 6 (Saturday).
    #[ortho_config()]
    pub first_day: u8,

    /// Comma-separated row indices reported as viewable, e.g. `49,50`.
    ///
    /// Defaults to the initial scroll index.
    #[ortho_config(cli_short = 'v')]
    pub viewable: Option<String>,

    /// New current date to transition to after the viewport update.
    #[ortho_config(cli_short = 'n')]
    pub next_current: Option<String>,

    /// Month to jump to, without animation.
    #[ortho_config(cli_short = 'm')]
    pub scroll_to_month: Option<String>,

    /// Day whose week to scroll to.
    #[ortho_config(cli_short = 'd')]
    pub scroll_to_day: Option<String>,

    /// Extra pixels added to `scroll_to_day` offsets.
    #[ortho_config()]
    pub day_offset: Option<f64>,

    /// Animates `scroll_to_day` jumps.
    #[ortho_config(cli_short = 'a')]
    pub animated: bool,

    /// Writes telemetry events to stderr as JSON lines.
    #[ortho_config(cli_short = 'T')]
    pub telemetry: bool,
}

impl Default for AlmanacConfig {
    fn default() -> Self {
        Self {
            current: None,
            past_scroll_range: DEFAULT_PAST_SCROLL_RANGE,
            future_scroll_range: DEFAULT_FUTURE_SCROLL_RANGE,
            no_scroll: false,
            calendar_height: DEFAULT_CALENDAR_HEIGHT,
            proximity_distance: DEFAULT_PROXIMITY_DISTANCE,
            week_row_height: DEFAULT_WEEK_ROW_HEIGHT,
            first_day: 0,
            viewable: None,
            next_current: None,
            scroll_to_month: None,
            scroll_to_day: None,
            day_offset: None,
            animated: false,
            telemetry: false,
        }
    }
}

impl AlmanacConfig {
    /// Validates the configuration and converts it into list options.
    ///
    /// # Errors
    ///
    /// Returns [`AlmanacError::Configuration`] when a height is not a
    /// positive finite number or `first_day` is outside `0..=6`.
    pub fn list_options(&self) -> Result<CalendarListOptions, AlmanacError> {
        if !self.calendar_height.is_finite() || self.calendar_height <= 0.0 {
            return Err(AlmanacError::Configuration {
                message: format!(
                    "calendar height must be a positive number, got {}",
                    self.calendar_height
                ),
            });
        }
        if !self.week_row_height.is_finite() || self.week_row_height < 0.0 {
            return Err(AlmanacError::Configuration {
                message: format!(
                    "week row height must be a non-negative number, got {}",
                    self.week_row_height
                ),
            });
        }

        Ok(CalendarListOptions {
            past_scroll_range: self.past_scroll_range,
            future_scroll_range: self.future_scroll_range,
            scroll_enabled: !self.no_scroll,
            calendar_height: self.calendar_height,
            current: self.current.as_deref().map(parse_date_or_today),
            proximity_distance: self.proximity_distance,
            week_row_height: self.week_row_height,
            first_day: self.first_weekday()?,
        })
    }

    /// Returns the configured first day of the week.
    ///
    /// # Errors
    ///
    /// Returns [`AlmanacError::Configuration`] when `first_day` exceeds 6.
    pub fn first_weekday(&self) -> Result<Weekday, AlmanacError> {
        if self.first_day > 6 {
            return Err(AlmanacError::Configuration {
                message: format!(
                    "first day must be between 0 (Sunday) and 6 (Saturday), got {}",
                    self.first_day
                ),
            });
        }
        Ok((0..self.first_day).fold(Weekday::Sun, |day, _| day.succ()))
    }

    /// Parses the configured viewable row indices, if any.
    ///
    /// # Errors
    ///
    /// Returns [`AlmanacError::InvalidViewableIndex`] for entries that are
    /// not non-negative integers.
    pub fn viewable_indices(&self) -> Result<Option<Vec<usize>>, AlmanacError> {
        let Some(raw) = self.viewable.as_deref() else {
            return Ok(None);
        };

        raw.split(',')
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .map(|entry| {
                entry
                    .parse::<usize>()
                    .map_err(|_| AlmanacError::InvalidViewableIndex {
                        value: entry.to_owned(),
                    })
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Some)
    }
}

#[cfg(test)]
mod tests;
