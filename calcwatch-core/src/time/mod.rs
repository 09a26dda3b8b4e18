//! Calendar and duration math
//!
//! Pure functions over seconds-since-1970 and hundredths-of-a-second
//! counters. Nothing here reads device state.

pub mod calendar;
pub mod duration;

pub use calendar::{datetime_to_epoch, epoch_to_datetime, is_leap_year, Date, DateTime, Time};
pub use duration::{duration_breakdown, Duration};
