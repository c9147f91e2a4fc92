//! EPW hourly record parsing
//!
//! The date is parsed on its own first so that records outside the
//! converted range can be skipped without touching their other fields.

use super::field_parsers::{
    invalid_field, parse_optional_integer, parse_rain_code, parse_required_integer,
    parse_required_real,
};
use crate::app::models::EpwObservation;
use crate::calendar::{DayOfYear, day_of_year_from_month_day};
use crate::constants::epw_columns;
use crate::error::Result;
use csv::StringRecord;

/// Day of year from the month and day columns
pub fn parse_record_date(record: &StringRecord, line: u64) -> Result<DayOfYear> {
    let month = parse_required_integer(record, line, epw_columns::MONTH, "month")?;
    let day = parse_required_integer(record, line, epw_columns::DAY, "day")?;

    day_of_year_from_month_day(month, day).map_err(|e| {
        invalid_field(
            line,
            epw_columns::MONTH,
            "date",
            &format!("{}/{}", month, day),
            e,
        )
    })
}

/// Parse the remaining fields of a record whose date is already known
pub fn parse_observation(
    record: &StringRecord,
    line: u64,
    day_of_year: DayOfYear,
) -> Result<EpwObservation> {
    let real = |column, field| parse_required_real(record, line, column, field);

    Ok(EpwObservation {
        line,
        year: parse_optional_integer(record, epw_columns::YEAR)
            .and_then(|year| i32::try_from(year).ok()),
        day_of_year,
        hour: parse_required_integer(record, line, epw_columns::HOUR, "hour")?,
        minute: parse_required_integer(record, line, epw_columns::MINUTE, "minute")?,
        dry_bulb_c: real(epw_columns::DRY_BULB, "dry bulb temperature")?,
        dew_point_c: real(epw_columns::DEW_POINT, "dew point temperature")?,
        pressure_pa: real(epw_columns::PRESSURE, "station pressure")?,
        horizontal_radiation_wh: real(epw_columns::HORIZONTAL_RADIATION, "horizontal radiation")?,
        direct_normal_radiation_wh: real(
            epw_columns::DIRECT_NORMAL_RADIATION,
            "direct normal radiation",
        )?,
        wind_direction_deg: real(epw_columns::WIND_DIRECTION, "wind direction")?,
        wind_speed_ms: real(epw_columns::WIND_SPEED, "wind speed")?,
        total_sky_cover: real(epw_columns::TOTAL_SKY_COVER, "total sky cover")?,
        rain_code: parse_rain_code(
            record,
            line,
            epw_columns::PRESENT_WEATHER_CODES,
            "present weather codes",
        )?,
        // whole centimetres only
        snow_depth_cm: real(epw_columns::SNOW_DEPTH, "snow depth")?.trunc(),
    })
}
