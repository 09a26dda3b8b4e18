//! Databank mode
//!
//! Keys pick one of a fixed set of labels; A and D page through the
//! glyph table five pages at a time.

use heapless::String;

use crate::device::Key;

/// Maximum label length
pub const MAX_LABEL_LEN: usize = 9;
/// Number of glyph pages
pub const PAGE_COUNT: u8 = 5;

/// Databank mode state
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DatabaseState {
    /// High-rate ticks left of the intro screen
    pub intro: u8,
    /// Header label
    pub label: String<MAX_LABEL_LEN>,
    /// Glyph page 1-5, 0 = none
    pub page: u8,
}

impl DatabaseState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm the intro screen
    pub fn start_intro(&mut self, ticks: u8) {
        self.intro = ticks;
    }

    pub fn intro_active(&self) -> bool {
        self.intro > 0
    }

    /// One high-rate tick of the intro
    pub fn fast_tick(&mut self) {
        self.intro = self.intro.saturating_sub(1);
    }

    /// Handle a keypad press
    pub fn press(&mut self, key: Key) {
        let label = match key {
            Key::Digit0 => "ABC",
            Key::Digit1 => "DEF",
            Key::Digit2 => "GHI",
            Key::Digit3 => "JKL",
            Key::Digit4 => "MNO",
            Key::Digit5 => "PQR",
            Key::Digit6 => "STU",
            Key::Digit7 => "VWX",
            Key::Digit8 => "YZ1",
            Key::Digit9 => "234",
            Key::A => {
                self.page_down();
                "567"
            }
            Key::B => "890",
            Key::C => "%<>",
            Key::D => {
                self.page_up();
                // Accented A glyphs
                "\u{0B}\u{0C}\u{0D}"
            }
            // Calculator icon
            Key::Pound => "\u{06}\u{07}\u{08}",
            Key::Star => "",
        };
        self.label.clear();
        // Every label fits
        let _ = self.label.push_str(label);
    }

    fn page_down(&mut self) {
        self.page = match self.page {
            0 => 1,
            1 => PAGE_COUNT,
            p => p - 1,
        };
    }

    fn page_up(&mut self) {
        self.page = match self.page {
            0 => PAGE_COUNT,
            p if p >= PAGE_COUNT => 1,
            p => p + 1,
        };
    }

    /// First glyph index of the current page
    pub fn first_glyph(&self) -> Option<u8> {
        (self.page != 0).then(|| (self.page - 1) * 28 + 1)
    }
}
