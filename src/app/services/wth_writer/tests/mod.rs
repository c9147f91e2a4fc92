//! Test helpers for the weather file writer

use crate::app::models::WthRecord;
use crate::calendar::DayOfYear;

mod day_schedule_tests;
mod writer_tests;

pub fn doy(value: u16) -> DayOfYear {
    DayOfYear::new(value).unwrap()
}

/// Record at 1/1 01:00 matching a 10 °C / 5 °C dew point observation
pub fn sample_record() -> WthRecord {
    WthRecord {
        date: DayOfYear::FIRST,
        time: 3600,
        dry_bulb_k: 283.15,
        pressure_pa: 101_325.0,
        wind_speed_ms: 4.1,
        wind_direction_deg: 270.0,
        humidity_ratio_g_kg: 5.426045,
        horizontal_radiation_kj: 0.0,
        direct_normal_radiation_kj: 0.0,
        sky_temperature_k: 268.549627,
        rain: false,
        snow: false,
    }
}
