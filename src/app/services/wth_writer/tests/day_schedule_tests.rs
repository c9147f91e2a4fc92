//! Tests for day schedule generation

use super::doy;
use crate::app::services::wth_writer::DaySchedule;
use crate::calendar::DayOfYear;
use crate::config::ConversionConfig;

#[test]
fn test_full_year_counters_cycle_together() {
    let config = ConversionConfig::default();
    let mut schedule = DaySchedule::new(&config);
    let days = schedule.entries(DayOfYear::FIRST, DayOfYear::LAST);

    assert_eq!(days.len(), 365);
    for (index, day) in days.iter().enumerate() {
        assert_eq!(day.day_of_week, day.day_type);
        assert_eq!(day.day_of_week as usize, index % 7 + 1);
        assert!(!day.dst);
        assert_eq!(day.ground_temperature_k, 283.15);
    }
    assert_eq!(days[0].day_of_week, 1);
    assert_eq!(days[7].day_of_week, 1);
    assert_eq!(days[364].day_of_week, 1);
}

#[test]
fn test_first_day_of_week_seeds_both_counters() {
    let config = ConversionConfig::default().with_first_day_of_week(6);
    let mut schedule = DaySchedule::new(&config);
    let days = schedule.entries(doy(1), doy(4));

    let weekdays: Vec<u8> = days.iter().map(|d| d.day_of_week).collect();
    assert_eq!(weekdays, vec![6, 7, 1, 2]);

    let next = schedule.next_entry(doy(5));
    assert_eq!((next.day_of_week, next.day_type), (3, 3));
}

#[test]
fn test_special_day_changes_only_its_own_line() {
    let plain = ConversionConfig::default();
    let special = ConversionConfig::default().with_special_day(doy(100), 12);

    let baseline = DaySchedule::new(&plain).entries(DayOfYear::FIRST, DayOfYear::LAST);
    let overridden = DaySchedule::new(&special).entries(DayOfYear::FIRST, DayOfYear::LAST);

    for (before, after) in baseline.iter().zip(&overridden) {
        if before.date == doy(100) {
            assert_eq!(after.day_type, 12);
            assert_eq!(after.day_of_week, before.day_of_week);
        } else {
            assert_eq!(before, after);
        }
    }
}

#[test]
fn test_last_special_day_entry_wins() {
    let config = ConversionConfig::default()
        .with_special_day(doy(2), 9)
        .with_special_day(doy(2), 11);
    let days = DaySchedule::new(&config).entries(doy(1), doy(3));
    assert_eq!(days[1].day_type, 11);
    assert_eq!(days[2].day_type, 3);
}

#[test]
fn test_dst_window_flags() {
    let config = ConversionConfig::default().with_dst(doy(69), doy(307));
    let days = DaySchedule::new(&config).entries(DayOfYear::FIRST, DayOfYear::LAST);
    assert!(!days[67].dst);
    assert!(days[68].dst);
    assert!(days[306].dst);
    assert!(!days[307].dst);
}

#[test]
fn test_wrapping_dst_window() {
    let config = ConversionConfig::default().with_dst(doy(300), doy(60));
    let days = DaySchedule::new(&config).entries(DayOfYear::FIRST, DayOfYear::LAST);
    assert!(days[0].dst);
    assert!(days[59].dst);
    assert!(!days[60].dst);
    assert!(days[364].dst);
}

#[test]
fn test_wrapping_range_threads_counters() {
    let config = ConversionConfig::default();
    let days = DaySchedule::new(&config).entries_for_range(doy(364), doy(2));

    let dates: Vec<String> = days.iter().map(|d| d.date.to_string()).collect();
    assert_eq!(dates, vec!["12/30", "12/31", "1/1", "1/2"]);
    let weekdays: Vec<u8> = days.iter().map(|d| d.day_of_week).collect();
    assert_eq!(weekdays, vec![1, 2, 3, 4]);
}
