//! Day-of-year and time-of-day codec for the fixed 365-day calendar.
//!
//! EPW and CONTAM files both identify dates as `M/D` without a year, and
//! CONTAM expects a non-leap year. Every date in the converter is a
//! [`DayOfYear`] in `1..=365`; formatting helpers that accept raw integers
//! return an empty string for out-of-range input.

use std::fmt;
use std::str::FromStr;

/// Number of days in the calendar year (no leap day)
pub const DAYS_IN_YEAR: u16 = 365;

/// Number of seconds in a day; `86400` itself formats as `24:00:00`
pub const SECONDS_PER_DAY: u32 = 86_400;

/// Length of each month, January first
pub const DAYS_PER_MONTH: [u16; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Day-of-year preceding the first day of each month, January first
pub const MONTH_OFFSETS: [u16; 12] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    #[error("invalid day of year: {doy} (must be 1..=365)")]
    InvalidDoy { doy: i64 },

    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth { month: i64 },

    #[error("invalid day: {day} for month {month} (max {max_day})")]
    InvalidDay { day: i64, month: i64, max_day: u16 },

    #[error("invalid date '{value}': expected M/D")]
    MissingSeparator { value: String },

    #[error("invalid date '{value}': '{part}' is not a number")]
    NotANumber { value: String, part: String },
}

/// Day of year in the 365-day calendar (1 = 1 January, 365 = 31 December)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DayOfYear(u16);

impl DayOfYear {
    pub const FIRST: DayOfYear = DayOfYear(1);
    pub const LAST: DayOfYear = DayOfYear(DAYS_IN_YEAR);

    /// Create a day of year, rejecting values outside `1..=365`
    pub fn new(doy: u16) -> Result<Self, CalendarError> {
        if (1..=DAYS_IN_YEAR).contains(&doy) {
            Ok(Self(doy))
        } else {
            Err(CalendarError::InvalidDoy { doy: doy.into() })
        }
    }

    pub fn get(self) -> u16 {
        self.0
    }

    /// Month (1-12) and day of month for this date
    pub fn month_day(self) -> (u16, u16) {
        let month_index = MONTH_OFFSETS
            .iter()
            .rposition(|&offset| offset < self.0)
            .unwrap_or(0);
        (month_index as u16 + 1, self.0 - MONTH_OFFSETS[month_index])
    }

    /// Iterate over the inclusive range `self..=end`; empty when `end < self`
    pub fn through(self, end: DayOfYear) -> impl Iterator<Item = DayOfYear> {
        (self.0..=end.0).map(DayOfYear)
    }
}

impl fmt::Display for DayOfYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (month, day) = self.month_day();
        write!(f, "{}/{}", month, day)
    }
}

impl FromStr for DayOfYear {
    type Err = CalendarError;

    /// Parse an `M/D` date, checking the day against the month length.
    /// Whitespace around either part is ignored (EPW writes ` 1/ 1`).
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let (month_str, day_str) =
            value
                .split_once('/')
                .ok_or_else(|| CalendarError::MissingSeparator {
                    value: value.to_string(),
                })?;

        let parse_part = |part: &str| {
            part.trim()
                .parse::<i64>()
                .map_err(|_| CalendarError::NotANumber {
                    value: value.to_string(),
                    part: part.to_string(),
                })
        };
        let month = parse_part(month_str)?;
        let day = parse_part(day_str)?;

        if !(1..=12).contains(&month) {
            return Err(CalendarError::InvalidMonth { month });
        }
        let max_day = DAYS_PER_MONTH[month as usize - 1];
        if day < 1 || day > i64::from(max_day) {
            return Err(CalendarError::InvalidDay {
                day,
                month,
                max_day,
            });
        }

        Ok(Self(MONTH_OFFSETS[month as usize - 1] + day as u16))
    }
}

/// Day of year from an EPW month and day-of-month.
///
/// Only the bounds 1-12 and 1-31 are checked, so 30 February maps to
/// 2 March. The result always lies in `1..=365`.
pub fn day_of_year_from_month_day(month: i64, day: i64) -> Result<DayOfYear, CalendarError> {
    if !(1..=12).contains(&month) {
        return Err(CalendarError::InvalidMonth { month });
    }
    if !(1..=31).contains(&day) {
        return Err(CalendarError::InvalidDay {
            day,
            month,
            max_day: 31,
        });
    }
    Ok(DayOfYear(MONTH_OFFSETS[month as usize - 1] + day as u16))
}

/// Format a raw day of year as `M/D`, or an empty string outside `1..=365`
pub fn format_day_of_year(doy: i64) -> String {
    u16::try_from(doy)
        .ok()
        .and_then(|doy| DayOfYear::new(doy).ok())
        .map(|doy| doy.to_string())
        .unwrap_or_default()
}

/// Format seconds since midnight as `HH:MM:SS`, or an empty string outside `0..=86400`
pub fn format_time_of_day(seconds: i64) -> String {
    if !(0..=i64::from(SECONDS_PER_DAY)).contains(&seconds) {
        return String::new();
    }
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;
    format!("{:02}:{:02}:{:02}", hours, minutes, secs)
}

/// Inclusive range test where `start > end` wraps past 31 December
pub fn is_within_range(value: DayOfYear, start: DayOfYear, end: DayOfYear) -> bool {
    if start <= end {
        start <= value && value <= end
    } else {
        value >= start || value <= end
    }
}
