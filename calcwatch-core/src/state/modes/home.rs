//! Home (timekeeping) mode

use crate::config::Language;
use crate::time::DateTime;

/// Home mode state
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct HomeState {
    /// Backlight is lit
    pub backlight_on: bool,
    /// 24-hour display
    pub use_24h: bool,
    /// Databank screen shown while D is held
    pub show_database: bool,
    /// Dual time screen shown while A is held
    pub show_dual_time: bool,
    /// Date-time the epoch was seeded from
    pub set: DateTime,
    /// Current date-time, refreshed every second
    pub now: DateTime,
    pub language: Language,
    /// Baseline panel contrast
    pub contrast: u8,
}

impl HomeState {
    pub fn new(set: DateTime, now: DateTime, language: Language, contrast: u8) -> Self {
        Self {
            backlight_on: false,
            use_24h: false,
            show_database: false,
            show_dual_time: false,
            set,
            now,
            language,
            contrast,
        }
    }

    /// Hours as shown on the display
    pub fn display_hours(&self, hours: u8) -> u8 {
        display_hours(self.use_24h, hours)
    }
}

/// Convert 0-23 hours for 12- or 24-hour display
///
/// In 12-hour mode midnight shows as 12 and noon stays 12.
pub fn display_hours(use_24h: bool, hours: u8) -> u8 {
    if use_24h {
        return hours;
    }
    match hours {
        0 => 12,
        h if h > 12 => h - 12,
        h => h,
    }
}
