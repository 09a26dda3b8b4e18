//! Watch configuration

use heapless::String;

use crate::time::DateTime;

use super::Language;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Maximum time zone label length
pub const MAX_ZONE_LABEL_LEN: usize = 3;

/// Side-effect tone
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Tone {
    pub frequency_hz: u32,
    pub duration_ms: u32,
}

/// Watch configuration
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WatchConfig {
    /// Date and time the epoch is seeded with at startup
    pub default_datetime: DateTime,
    /// Panel contrast with the backlight off
    pub contrast: u8,
    /// Panel contrast while the backlight is on
    pub backlight_contrast: u8,
    /// Backlight duration in timer ticks
    pub backlight_ticks: u16,
    /// Databank intro length in high-rate ticks
    pub database_intro_ticks: u8,
    /// Dual time offset from home time, in seconds
    pub dual_time_offset_s: u32,
    /// Dual time zone label
    pub dual_time_label: String<MAX_ZONE_LABEL_LEN>,
    /// Contrast change per stopwatch A/D press
    pub contrast_step: u8,
    /// Key beep pitch per key index step
    pub key_beep_step_hz: u32,
    /// Key beep length
    pub key_beep_ms: u32,
    /// Side button click
    pub click: Tone,
    /// Weekday language
    pub language: Language,
}

impl Default for WatchConfig {
    fn default() -> Self {
        let mut dual_time_label = String::new();
        // "TYO" always fits
        let _ = dual_time_label.push_str("TYO");

        Self {
            default_datetime: DateTime::new(2022, 4, 24, 13, 58, 0),
            contrast: 0x7F,
            backlight_contrast: 0xFF,
            backlight_ticks: 160,
            database_intro_ticks: 50,
            dual_time_offset_s: 3 * 3600 + 30 * 60,
            dual_time_label,
            contrast_step: 10,
            key_beep_step_hz: 100,
            key_beep_ms: 100,
            click: Tone {
                frequency_hz: 410,
                duration_ms: 80,
            },
            language: Language::English,
        }
    }
}

impl WatchConfig {
    /// Beep for a keypad key at `index` (0-15)
    pub fn key_tone(&self, index: u8) -> Tone {
        Tone {
            frequency_hz: (u32::from(index) + 1) * self.key_beep_step_hz,
            duration_ms: self.key_beep_ms,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = WatchConfig::default();
        assert_eq!(config.contrast, 0x7F);
        assert_eq!(config.backlight_ticks, 160);
        assert_eq!(config.dual_time_offset_s, 12_600);
        assert_eq!(config.dual_time_label.as_str(), "TYO");
        assert_eq!(config.default_datetime.date.year, 2022);
    }

    #[test]
    fn test_key_tone() {
        let config = WatchConfig::default();
        assert_eq!(config.key_tone(0).frequency_hz, 100);
        assert_eq!(config.key_tone(15).frequency_hz, 1600);
        assert_eq!(config.key_tone(3).duration_ms, 100);
    }
}
