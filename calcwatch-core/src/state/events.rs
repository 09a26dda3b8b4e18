//! Events that drive the mode state machine

use crate::device::{Button, Key};

/// Logical input and timer events
///
/// Produced one at a time by [`EventExtractor`](crate::device::EventExtractor).
/// "No event" is never delivered; the extractor waits instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    // Side buttons
    /// A side button went down
    ButtonPressed(Button),
    /// The held side button was let go
    ButtonReleased(Button),

    // Keypad
    /// A keypad key was latched
    KeyPressed(Key),
    /// The latched key was let go
    KeyReleased(Key),

    // Timers
    /// The epoch advanced by one second
    SecondTick,
    /// High-rate tick (100/15 Hz), only while enabled
    FastTick,
    /// The backlight countdown reached zero
    BacklightExpired,
}

impl Event {
    /// The key, if this is a key press
    pub fn pressed_key(&self) -> Option<Key> {
        match self {
            Event::KeyPressed(key) => Some(*key),
            _ => None,
        }
    }
}
