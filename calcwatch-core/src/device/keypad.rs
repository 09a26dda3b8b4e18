//! Buttons and keypad keys
//!
//! The keypad is a 4x4 matrix scanned one row at a time. A latched key is
//! reported as `row * 10 + column` (rows 0-3, columns 1-4):
//!
//! ```text
//!          col 1  col 2  col 3  col 4
//! row 3      A      3      2      1
//! row 2      B      6      5      4
//! row 1      C      9      8      7
//! row 0      D      #      0      *
//! ```

/// Discrete side buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Button {
    /// Backlight
    Light,
    /// Clear / start-stop / 12-24h toggle depending on mode
    Action,
    /// Advance to the next mode
    Mode,
    /// Stopwatch split
    Split,
}

impl Button {
    /// All buttons in tie-break order (lowest bit first)
    pub const ALL: [Button; 4] = [Button::Light, Button::Action, Button::Mode, Button::Split];

    /// Bit in the held-buttons mask
    pub const fn mask(self) -> u8 {
        match self {
            Button::Light => 0x01,
            Button::Action => 0x02,
            Button::Mode => 0x04,
            Button::Split => 0x08,
        }
    }

    /// First button (in tie-break order) set in `mask`
    pub fn first_in(mask: u8) -> Option<Button> {
        Button::ALL.into_iter().find(|b| mask & b.mask() != 0)
    }
}

/// Keypad keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Key {
    Digit0,
    Digit1,
    Digit2,
    Digit3,
    Digit4,
    Digit5,
    Digit6,
    Digit7,
    Digit8,
    Digit9,
    A,
    B,
    C,
    D,
    Star,
    Pound,
}

impl Key {
    /// All keys in index order
    pub const ALL: [Key; 16] = [
        Key::Digit0,
        Key::Digit1,
        Key::Digit2,
        Key::Digit3,
        Key::Digit4,
        Key::Digit5,
        Key::Digit6,
        Key::Digit7,
        Key::Digit8,
        Key::Digit9,
        Key::A,
        Key::B,
        Key::C,
        Key::D,
        Key::Star,
        Key::Pound,
    ];

    /// Decode a latched scan code
    pub fn from_code(code: u8) -> Option<Key> {
        let key = match code {
            1 => Key::D,
            2 => Key::Pound,
            3 => Key::Digit0,
            4 => Key::Star,

            11 => Key::C,
            12 => Key::Digit9,
            13 => Key::Digit8,
            14 => Key::Digit7,

            21 => Key::B,
            22 => Key::Digit6,
            23 => Key::Digit5,
            24 => Key::Digit4,

            31 => Key::A,
            32 => Key::Digit3,
            33 => Key::Digit2,
            34 => Key::Digit1,

            _ => return None,
        };
        Some(key)
    }

    /// 0-based position: digits, then A-D, then `*` and `#`
    pub fn index(self) -> u8 {
        self as u8
    }

    /// Numeric value of a digit key
    pub fn digit(self) -> Option<u8> {
        let index = self.index();
        (index < 10).then_some(index)
    }
}
