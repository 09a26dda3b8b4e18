//! Display languages

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Language used for weekday names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Language {
    #[default]
    English,
    French,
    Dutch,
    German,
    Italian,
}

impl Language {
    /// Weekday abbreviations, Sunday first
    pub const fn weekdays(self) -> [&'static str; 7] {
        match self {
            Language::English => ["SUN", "MON", "TUE", "WED", "THU", "FRI", "SAT"],
            Language::French => ["DIM", "LUN", "MAR", "MER", "JEU", "VEN", "SAM"],
            Language::Dutch => ["ZON", "MAA", "DIN", "WOE", "DON", "VRI", "ZAT"],
            Language::German => ["SON", "MON", "DIE", "MIT", "DON", "FRE", "SAM"],
            Language::Italian => ["DOM", "LUN", "MAR", "MER", "GIO", "VEN", "SAB"],
        }
    }

    /// Abbreviation for weekday 0-6 (0 = Sunday)
    pub fn weekday_name(self, weekday: u8) -> &'static str {
        self.weekdays()[weekday as usize % 7]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weekday_names() {
        assert_eq!(Language::English.weekday_name(0), "SUN");
        assert_eq!(Language::French.weekday_name(1), "LUN");
        assert_eq!(Language::German.weekday_name(6), "SAM");
        assert_eq!(Language::Italian.weekday_name(4), "GIO");
    }

    #[test]
    fn test_default_is_english() {
        assert_eq!(Language::default(), Language::English);
        assert_eq!(Language::default().weekday_name(3), "WED");
    }
}
