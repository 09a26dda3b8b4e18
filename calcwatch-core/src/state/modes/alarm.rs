//! Alarm mode
//!
//! The alarm screen only previews indicator icons: the last key pressed
//! chooses which ones light. Nothing is scheduled.

use crate::device::Key;

/// Alarm mode state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AlarmState {
    /// Last key pressed in alarm mode
    pub cursor: Option<Key>,
}

impl AlarmState {
    pub fn press(&mut self, key: Key) {
        self.cursor = Some(key);
    }
}
