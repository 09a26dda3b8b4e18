//! Epoch <-> calendar conversion
//!
//! `epoch_to_datetime` estimates the year from `days / 365` and corrects
//! it with a leap-day count taken from 1972 up to the estimate, while
//! `datetime_to_epoch` sums exact year lengths. The pair round-trips
//! within non-leap years; in a leap year the last day of December comes
//! back one day early. Both directions are kept exactly as the watch has
//! always computed them.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

const SECONDS_PER_DAY: u32 = 24 * 60 * 60;

/// Days per month in a common year
const MONTH_DAYS: [u8; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Weekday of `days_since_epoch % 7`; 1970-01-01 was a Thursday
const WEEK_DAYS: [u8; 7] = [4, 5, 6, 0, 1, 2, 3];

/// Calendar date
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Date {
    /// Day of month, 1-based
    pub day: u8,
    /// Month, 1 = January
    pub month: u8,
    pub year: u16,
    /// 0 = Sunday .. 6 = Saturday
    pub weekday: u8,
}

/// Time of day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Time {
    /// 0-23
    pub hours: u8,
    pub minutes: u8,
    pub seconds: u8,
}

/// Date and time of day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DateTime {
    pub date: Date,
    pub time: Time,
}

impl DateTime {
    /// Build a date-time; the weekday is left at Sunday
    ///
    /// Only [`epoch_to_datetime`] derives weekdays.
    pub const fn new(year: u16, month: u8, day: u8, hours: u8, minutes: u8, seconds: u8) -> Self {
        Self {
            date: Date {
                day,
                month,
                year,
                weekday: 0,
            },
            time: Time {
                hours,
                minutes,
                seconds,
            },
        }
    }
}

/// Gregorian leap year rule
pub const fn is_leap_year(year: u32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

fn month_days(year: u32) -> [u8; 12] {
    let mut days = MONTH_DAYS;
    if is_leap_year(year) {
        days[1] = 29;
    }
    days
}

/// Convert seconds since 1970-01-01 00:00:00 to a date-time
pub fn epoch_to_datetime(epoch: u32) -> DateTime {
    let seconds = (epoch % 60) as u8;
    let minutes_total = epoch / 60;
    let minutes = (minutes_total % 60) as u8;
    let hours_total = minutes_total / 60;
    let hours = (hours_total % 24) as u8;
    let days = hours_total / 24;

    let weekday = WEEK_DAYS[(days % 7) as usize];

    // Ball-park year, then count leap days before it
    let year_guess = 1970 + days / 365;
    let leap_days = (1972..year_guess)
        .step_by(4)
        .filter(|&y| is_leap_year(y))
        .count() as u32;

    let days = days.saturating_sub(leap_days);
    let year = 1970 + days / 365;
    let day_of_year = days % 365 + 1;

    let lengths = month_days(year);
    let mut month = 0;
    let mut elapsed = 0u32;
    while month < 12 {
        if day_of_year <= elapsed {
            break;
        }
        elapsed += u32::from(lengths[month]);
        month += 1;
    }
    // `month` is 1-based here and never zero since day_of_year >= 1
    elapsed -= u32::from(lengths[month - 1]);
    let day = (day_of_year - elapsed) as u8;

    DateTime {
        date: Date {
            day,
            month: month as u8,
            year: year as u16,
            weekday,
        },
        time: Time {
            hours,
            minutes,
            seconds,
        },
    }
}

/// Convert a date-time to seconds since 1970-01-01 00:00:00
///
/// The weekday is ignored. Years before 1970 are out of domain. Instants
/// past 2106-02-07 06:28:15 saturate at `u32::MAX`.
pub fn datetime_to_epoch(dt: &DateTime) -> u32 {
    let year = u32::from(dt.date.year);

    // Fits easily: at most 65535 years of days
    let mut days = year.saturating_sub(1970) * 365;
    days += (1970..year).filter(|&y| is_leap_year(y)).count() as u32;

    let lengths = month_days(year);
    for month in 1..u32::from(dt.date.month) {
        days += u32::from(lengths[(month as usize - 1) % 12]);
    }
    days += u32::from(dt.date.day).saturating_sub(1);

    let time_of_day = u32::from(dt.time.hours) * 3600
        + u32::from(dt.time.minutes) * 60
        + u32::from(dt.time.seconds);

    days.saturating_mul(SECONDS_PER_DAY).saturating_add(time_of_day)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_epoch_zero() {
        let dt = epoch_to_datetime(0);
        assert_eq!(dt.date.year, 1970);
        assert_eq!(dt.date.month, 1);
        assert_eq!(dt.date.day, 1);
        // Thursday
        assert_eq!(dt.date.weekday, 4);
        assert_eq!(dt.time, Time::default());
    }

    #[test]
    fn test_default_seed() {
        let seed = DateTime::new(2022, 4, 24, 13, 58, 0);
        let epoch = datetime_to_epoch(&seed);
        assert_eq!(epoch, 1_650_808_680);

        let dt = epoch_to_datetime(epoch);
        assert_eq!(dt.date.year, 2022);
        assert_eq!(dt.date.month, 4);
        assert_eq!(dt.date.day, 24);
        // Sunday
        assert_eq!(dt.date.weekday, 0);
        assert_eq!(dt.time.hours, 13);
        assert_eq!(dt.time.minutes, 58);
    }

    #[test]
    fn test_leap_day() {
        let leap_day = DateTime::new(2024, 2, 29, 12, 0, 0);
        let dt = epoch_to_datetime(datetime_to_epoch(&leap_day));
        assert_eq!((dt.date.month, dt.date.day), (2, 29));

        let march = DateTime::new(2024, 3, 1, 0, 0, 0);
        assert_eq!(
            datetime_to_epoch(&march) - datetime_to_epoch(&leap_day),
            12 * 3600
        );
    }

    #[test]
    fn test_leap_year_end_comes_back_early() {
        let dt = epoch_to_datetime(datetime_to_epoch(&DateTime::new(1972, 12, 31, 0, 0, 0)));
        assert_eq!((dt.date.year, dt.date.month, dt.date.day), (1972, 12, 30));
    }

    #[test]
    fn test_far_future_saturates() {
        assert_eq!(datetime_to_epoch(&DateTime::new(2200, 1, 1, 0, 0, 0)), u32::MAX);
        assert_eq!(datetime_to_epoch(&DateTime::new(2106, 2, 7, 6, 28, 15)), u32::MAX);
        assert_eq!(
            datetime_to_epoch(&DateTime::new(2106, 2, 7, 6, 28, 14)),
            u32::MAX - 1
        );
        assert_eq!(
            datetime_to_epoch(&DateTime::new(u16::MAX, 12, 31, 23, 59, 59)),
            u32::MAX
        );
    }

    #[test]
    fn test_leap_year_rule() {
        assert!(is_leap_year(1972));
        assert!(is_leap_year(2000));
        assert!(!is_leap_year(2100));
        assert!(!is_leap_year(2023));
    }

    fn non_leap_datetime() -> impl Strategy<Value = DateTime> {
        (1970u16..=2099)
            .prop_filter("common year", |&y| !is_leap_year(u32::from(y)))
            .prop_flat_map(|year| {
                (Just(year), 1u8..=12).prop_flat_map(|(year, month)| {
                    let last = MONTH_DAYS[month as usize - 1];
                    (Just(year), Just(month), 1u8..=last, 0u8..24, 0u8..60, 0u8..60)
                })
            })
            .prop_map(|(year, month, day, h, m, s)| DateTime::new(year, month, day, h, m, s))
    }

    proptest! {
        #[test]
        fn prop_round_trip_in_common_years(dt in non_leap_datetime()) {
            let back = epoch_to_datetime(datetime_to_epoch(&dt));
            prop_assert_eq!(back.date.year, dt.date.year);
            prop_assert_eq!(back.date.month, dt.date.month);
            prop_assert_eq!(back.date.day, dt.date.day);
            prop_assert_eq!(back.time, dt.time);
        }

        #[test]
        fn prop_any_year_converts(
            year in 0u16..=u16::MAX,
            month in 1u8..=12,
            day in 1u8..=28,
            hours in 0u8..24,
        ) {
            let early = datetime_to_epoch(&DateTime::new(year, month, day, hours, 0, 0));
            let late = datetime_to_epoch(&DateTime::new(year, month, day, hours, 59, 59));
            prop_assert!(early <= late);
            if year >= 2107 {
                prop_assert_eq!(early, u32::MAX);
            }
        }

        #[test]
        fn prop_weekday_advances_daily(epoch in 0u32..4_000_000_000) {
            let today = epoch_to_datetime(epoch).date.weekday;
            let tomorrow = epoch_to_datetime(epoch + SECONDS_PER_DAY).date.weekday;
            prop_assert_eq!(tomorrow, (today + 1) % 7);
        }
    }
}
