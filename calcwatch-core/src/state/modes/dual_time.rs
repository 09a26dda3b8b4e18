//! Dual time mode

use heapless::String;

use crate::config::MAX_ZONE_LABEL_LEN;
use crate::time::{epoch_to_datetime, DateTime};

/// Dual time mode state
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DualTimeState {
    /// Home screen shown while A is held
    pub show_home: bool,
    /// Databank screen shown while D is held
    pub show_database: bool,
    /// Zone label (not displayed)
    pub zone: String<MAX_ZONE_LABEL_LEN>,
    /// Offset from home time in seconds
    pub offset_s: u32,
    /// Current dual date-time, refreshed every second
    pub now: DateTime,
}

impl DualTimeState {
    pub fn new(zone: String<MAX_ZONE_LABEL_LEN>, offset_s: u32, epoch: u32) -> Self {
        Self {
            show_home: false,
            show_database: false,
            zone,
            offset_s,
            now: epoch_to_datetime(epoch.wrapping_add(offset_s)),
        }
    }

    /// Refresh from the home epoch
    pub fn update(&mut self, epoch: u32) {
        self.now = epoch_to_datetime(epoch.wrapping_add(self.offset_s));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset() {
        let mut dt = DualTimeState::new(String::new(), 12_600, 0);
        assert_eq!((dt.now.time.hours, dt.now.time.minutes), (3, 30));

        // 22:00 home is 01:30 next day
        dt.update(22 * 3600);
        assert_eq!((dt.now.time.hours, dt.now.time.minutes), (1, 30));
        assert_eq!(dt.now.date.day, 2);
    }
}
