//! Hundredths-of-a-second duration breakdown

const HUNDREDTHS_PER_SECOND: u32 = 100;
const HUNDREDTHS_PER_MINUTE: u32 = 60 * HUNDREDTHS_PER_SECOND;
const HUNDREDTHS_PER_HOUR: u32 = 60 * HUNDREDTHS_PER_MINUTE;

/// A tick difference split into clock fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Duration {
    /// Unbounded
    pub hours: u32,
    pub minutes: u8,
    pub seconds: u8,
    pub hundredths: u8,
}

/// Split a hundredths-of-a-second difference into h/m/s/cs
pub fn duration_breakdown(diff: u32) -> Duration {
    let hours = diff / HUNDREDTHS_PER_HOUR;
    let rest = diff % HUNDREDTHS_PER_HOUR;
    let minutes = rest / HUNDREDTHS_PER_MINUTE;
    let rest = rest % HUNDREDTHS_PER_MINUTE;
    let seconds = rest / HUNDREDTHS_PER_SECOND;
    let hundredths = rest % HUNDREDTHS_PER_SECOND;

    Duration {
        hours,
        minutes: minutes as u8,
        seconds: seconds as u8,
        hundredths: hundredths as u8,
    }
}
