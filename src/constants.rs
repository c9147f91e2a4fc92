//! Application constants for the EPW to CONTAM converter
//!
//! This module contains the fixed EPW column layout, the CONTAM weather
//! file labels and the unit conversion factors used throughout the
//! converter.

// =============================================================================
// EPW Layout
// =============================================================================

/// Number of preamble lines before the first data record
pub const EPW_PREAMBLE_LINES: usize = 8;

/// 1-based line holding the location record (default description)
pub const EPW_LOCATION_LINE: usize = 1;

/// 1-based line holding the DATA PERIODS record
pub const EPW_DATA_PERIODS_LINE: usize = 8;

/// Field index of the first data period start date on the DATA PERIODS line
pub const DATA_PERIOD_START_FIELD: usize = 5;

/// Field index of the first data period end date on the DATA PERIODS line
pub const DATA_PERIOD_END_FIELD: usize = 6;

/// Field indices (0-based) of the EPW hourly data record
pub mod epw_columns {
    pub const YEAR: usize = 0;
    pub const MONTH: usize = 1;
    pub const DAY: usize = 2;
    pub const HOUR: usize = 3;
    pub const MINUTE: usize = 4;
    pub const DRY_BULB: usize = 6;
    pub const DEW_POINT: usize = 7;
    pub const PRESSURE: usize = 9;
    pub const HORIZONTAL_RADIATION: usize = 13;
    pub const DIRECT_NORMAL_RADIATION: usize = 14;
    pub const WIND_DIRECTION: usize = 20;
    pub const WIND_SPEED: usize = 21;
    pub const TOTAL_SKY_COVER: usize = 22;
    pub const PRESENT_WEATHER_CODES: usize = 27;
    pub const SNOW_DEPTH: usize = 30;
}

/// Total sky cover value meaning "not observed"
pub const SKY_COVER_UNKNOWN: f64 = 99.0;

/// Character position of the rain digit within the present weather codes
pub const RAIN_CODE_POSITION: usize = 1;

/// Present weather rain digits that count as precipitation
pub const RAIN_CODES: std::ops::RangeInclusive<u32> = 1..=8;

/// Snow depth [cm] above which the snow flag is set
pub const SNOW_DEPTH_THRESHOLD_CM: f64 = 1.0;

// =============================================================================
// Unit Conversion
// =============================================================================

/// Offset from degrees Celsius to Kelvin
pub const CELSIUS_TO_KELVIN: f64 = 273.15;

/// Wh/m² to kJ/m²
pub const WH_TO_KJ: f64 = 3.6;

/// Humidity ratio kg/kg to g/kg
pub const KG_TO_G: f64 = 1000.0;

/// Sky cover tenths to the cloud cover value used by the sky model
pub const SKY_COVER_SCALE: f64 = 0.1;

// =============================================================================
// CONTAM Weather File
// =============================================================================

/// First line of every CONTAM weather file
pub const WTH_FORMAT_TAG: &str = "WeatherFile ContamW 2.0";

/// Maximum description length accepted by CONTAM
pub const DESCRIPTION_MAX_CHARS: usize = 256;

/// Ground temperature written for every day [K]
pub const GROUND_TEMPERATURE_K: f64 = 283.15;

/// Trailing comment on the start date line
pub const START_DATE_COMMENT: &str = "!start - of - file date";

/// Trailing comment on the end date line
pub const END_DATE_COMMENT: &str = "!end - of - file date";

/// Column labels of the day schedule section
pub const DAY_SCHEDULE_LABELS: &[&str] = &["!Date", "DofW", "Dtype", "DST", "Tgrnd [K]"];

/// Column labels of the weather data section
pub const WEATHER_DATA_LABELS: &[&str] = &[
    "!Date",
    "Time",
    "Ta[K]",
    "Pb[Pa]",
    "Ws[m/s]",
    "Wd[deg]",
    "Hr[g/kg]",
    "Ith[kJ/m^2]",
    "Idn[kJ/m^2]",
    "Ts[K]",
    "Rn[-]",
    "Sn[-]",
];

/// Number of days in the day-of-week / day-type cycle
pub const DAYS_PER_WEEK: u8 = 7;

/// Largest day type a special day may assign
pub const MAX_DAY_TYPE: u8 = 12;

/// Significant digits used for real numbers in the weather file
pub const WTH_SIGNIFICANT_DIGITS: usize = 6;

// =============================================================================
// File Extensions
// =============================================================================

pub const EPW_EXTENSION: &str = "epw";
pub const WTH_EXTENSION: &str = "wth";

// =============================================================================
// Logging
// =============================================================================

/// Target used in the default log filter
pub const LOG_TARGET: &str = "epw2wth";
