//! Data models for EPW to CONTAM conversion
//!
//! This module contains the transient record types that flow through the
//! converter: the parsed EPW hourly observation, the derived CONTAM
//! weather record, the per-day schedule entry, and the statistics returned
//! to callers once a conversion finishes.

use crate::app::services::wth_writer::format::format_real;
use crate::calendar::{DayOfYear, format_time_of_day};
use crate::constants::{
    CELSIUS_TO_KELVIN, RAIN_CODES, SKY_COVER_SCALE, SKY_COVER_UNKNOWN, SNOW_DEPTH_THRESHOLD_CM,
};
use serde::Serialize;
use std::fmt;

// =============================================================================
// EPW Observation
// =============================================================================

/// One hourly record of an EPW file, reduced to the fields CONTAM needs
#[derive(Debug, Clone, PartialEq)]
pub struct EpwObservation {
    /// 1-based line number in the EPW file
    pub line: u64,

    /// Source year; informational only since the converter ignores years
    pub year: Option<i32>,

    /// Date derived from the month and day fields
    pub day_of_year: DayOfYear,

    pub hour: i64,
    pub minute: i64,

    /// Dry bulb temperature [°C]
    pub dry_bulb_c: f64,

    /// Dew point temperature [°C]
    pub dew_point_c: f64,

    /// Station pressure [Pa]
    pub pressure_pa: f64,

    /// Horizontal radiation [Wh/m²]
    pub horizontal_radiation_wh: f64,

    /// Direct normal radiation [Wh/m²]
    pub direct_normal_radiation_wh: f64,

    /// Wind direction [degrees]
    pub wind_direction_deg: f64,

    /// Wind speed [m/s]
    pub wind_speed_ms: f64,

    /// Total sky cover in tenths, or 99 when not observed
    pub total_sky_cover: f64,

    /// Rain digit taken from the present weather codes
    pub rain_code: u32,

    /// Snow depth [cm]
    pub snow_depth_cm: f64,
}

impl EpwObservation {
    /// Seconds since midnight; hour 24 minute 0 gives 86400.
    ///
    /// `None` when the hour/minute pair overflows.
    pub fn seconds_of_day(&self) -> Option<i64> {
        self.hour
            .checked_mul(3600)?
            .checked_add(self.minute.checked_mul(60)?)
    }

    pub fn dry_bulb_k(&self) -> f64 {
        self.dry_bulb_c + CELSIUS_TO_KELVIN
    }

    pub fn dew_point_k(&self) -> f64 {
        self.dew_point_c + CELSIUS_TO_KELVIN
    }

    /// Cloud cover input of the sky model; unobserved sky counts as clear
    pub fn cloud_cover(&self) -> f64 {
        if self.total_sky_cover == SKY_COVER_UNKNOWN {
            0.0
        } else {
            SKY_COVER_SCALE * self.total_sky_cover
        }
    }

    pub fn is_raining(&self) -> bool {
        RAIN_CODES.contains(&self.rain_code)
    }

    pub fn has_snow(&self) -> bool {
        self.snow_depth_cm > SNOW_DEPTH_THRESHOLD_CM
    }
}

// =============================================================================
// CONTAM Weather Records
// =============================================================================

/// One line of the CONTAM weather data section
#[derive(Debug, Clone, PartialEq)]
pub struct WthRecord {
    pub date: DayOfYear,

    /// Seconds since midnight; outside 0..=86400 the time column is written empty
    pub time: i64,

    /// Ambient temperature [K]
    pub dry_bulb_k: f64,

    /// Barometric pressure [Pa]
    pub pressure_pa: f64,

    /// Wind speed [m/s]
    pub wind_speed_ms: f64,

    /// Wind direction [degrees]
    pub wind_direction_deg: f64,

    /// Humidity ratio [g/kg]
    pub humidity_ratio_g_kg: f64,

    /// Total horizontal solar radiation [kJ/m²]
    pub horizontal_radiation_kj: f64,

    /// Direct normal solar radiation [kJ/m²]
    pub direct_normal_radiation_kj: f64,

    /// Effective sky temperature [K]
    pub sky_temperature_k: f64,

    pub rain: bool,
    pub snow: bool,
}

impl WthRecord {
    /// Same record at another time of day
    pub fn at_time(&self, time: i64) -> Self {
        Self {
            time,
            ..self.clone()
        }
    }
}

impl fmt::Display for WthRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}",
            self.date,
            format_time_of_day(self.time),
            format_real(self.dry_bulb_k),
            format_real(self.pressure_pa),
            format_real(self.wind_speed_ms),
            format_real(self.wind_direction_deg),
            format_real(self.humidity_ratio_g_kg),
            format_real(self.horizontal_radiation_kj),
            format_real(self.direct_normal_radiation_kj),
            format_real(self.sky_temperature_k),
            u8::from(self.rain),
            u8::from(self.snow),
        )
    }
}

/// One line of the CONTAM day schedule section
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DayEntry {
    pub date: DayOfYear,

    /// Day of week 1-7
    pub day_of_week: u8,

    /// Day type 1-7, or 1-12 for special days
    pub day_type: u8,

    pub dst: bool,

    /// Ground temperature [K]
    pub ground_temperature_k: f64,
}

impl fmt::Display for DayEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\t{}\t{}\t{}\t{}",
            self.date,
            self.day_of_week,
            self.day_type,
            u8::from(self.dst),
            format_real(self.ground_temperature_k),
        )
    }
}

// =============================================================================
// Conversion Statistics
// =============================================================================

/// Summary of a finished conversion
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConversionStats {
    /// Description written to the weather file
    pub description: String,

    /// First day of the converted range
    pub start_date: String,

    /// Last day of the converted range
    pub end_date: String,

    /// Lines written to the day schedule section
    pub days_written: usize,

    /// Data records read from the EPW file
    pub records_read: u64,

    /// Data lines written, including the midnight padding line
    pub records_written: u64,

    /// Data records outside the converted date range
    pub records_filtered: u64,

    /// Whether a midnight copy of the first record was inserted
    pub padded_first_record: bool,
}
