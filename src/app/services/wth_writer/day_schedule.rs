//! Day schedule generation for the CONTAM weather file header
//!
//! Each generated day carries a day of week and a day type, both cycling
//! 1 to 7 from the configured first day. Special days replace the printed
//! day type for their own line only; the counters keep advancing.

use crate::app::models::DayEntry;
use crate::calendar::DayOfYear;
use crate::config::ConversionConfig;
use crate::constants::{DAYS_PER_WEEK, GROUND_TEMPERATURE_K};
use tracing::trace;

/// Cycling day-of-week and day-type counters for one conversion
#[derive(Debug, Clone)]
pub struct DaySchedule<'a> {
    config: &'a ConversionConfig,
    day_of_week: u8,
    day_type: u8,
}

impl<'a> DaySchedule<'a> {
    pub fn new(config: &'a ConversionConfig) -> Self {
        Self {
            config,
            day_of_week: config.first_day_of_week,
            day_type: config.first_day_of_week,
        }
    }

    /// Entry for `date`, advancing both counters
    pub fn next_entry(&mut self, date: DayOfYear) -> DayEntry {
        let day_type = self
            .config
            .special_day_type(date)
            .unwrap_or(self.day_type);

        let entry = DayEntry {
            date,
            day_of_week: self.day_of_week,
            day_type,
            dst: self.config.is_dst(date),
            ground_temperature_k: GROUND_TEMPERATURE_K,
        };
        trace!("Day schedule entry: {}", entry);

        self.day_of_week = cycle(self.day_of_week);
        self.day_type = cycle(self.day_type);
        entry
    }

    /// Entries for the inclusive, non-wrapping range `start..=end`
    pub fn entries(&mut self, start: DayOfYear, end: DayOfYear) -> Vec<DayEntry> {
        start.through(end).map(|date| self.next_entry(date)).collect()
    }

    /// Entries for `start..=end`, wrapping past 31 December when `start > end`
    pub fn entries_for_range(&mut self, start: DayOfYear, end: DayOfYear) -> Vec<DayEntry> {
        if start <= end {
            self.entries(start, end)
        } else {
            let mut days = self.entries(start, DayOfYear::LAST);
            days.extend(self.entries(DayOfYear::FIRST, end));
            days
        }
    }
}

fn cycle(counter: u8) -> u8 {
    if counter >= DAYS_PER_WEEK { 1 } else { counter + 1 }
}
