//! EPW record to CONTAM weather record transformation
//!
//! Holds the date filter and the first-record flag for one conversion.
//! CONTAM requires the weather data to start at midnight, so the first
//! accepted record is preceded by a copy of itself at 00:00:00 when its own
//! time is later in the day.

use crate::app::models::{EpwObservation, WthRecord};
use crate::app::services::epw_parser::{field_parsers::invalid_field, parse_observation, parse_record_date};
use crate::calendar::{DayOfYear, SECONDS_PER_DAY, is_within_range};
use crate::constants::{KG_TO_G, WH_TO_KJ, epw_columns};
use crate::error::Result;
use crate::psychrometrics::{humidity_ratio, saturation_pressure, sky_temperature};
use csv::StringRecord;
use tracing::{trace, warn};

/// Outcome of transforming one data record
#[derive(Debug, Clone, PartialEq)]
pub enum Transformed {
    /// Date outside the converted range; nothing beyond the date was parsed
    Filtered(DayOfYear),

    /// Lines to write, in order
    Accepted(Vec<WthRecord>),
}

#[derive(Debug, Clone)]
pub struct RecordTransformer {
    start: DayOfYear,
    end: DayOfYear,
    first_record: bool,
}

impl RecordTransformer {
    /// Transformer accepting `start..=end`, wrapping past 31 December when `start > end`
    pub fn new(start: DayOfYear, end: DayOfYear) -> Self {
        Self {
            start,
            end,
            first_record: true,
        }
    }

    /// True until a record has been accepted
    pub fn is_first_record(&self) -> bool {
        self.first_record
    }

    pub fn accepts(&self, date: DayOfYear) -> bool {
        is_within_range(date, self.start, self.end)
    }

    /// Transform one comma-delimited EPW record found at `line`
    pub fn transform(&mut self, record: &StringRecord, line: u64) -> Result<Transformed> {
        let date = parse_record_date(record, line)?;
        if !self.accepts(date) {
            trace!("Line {}: {} outside {}..{}", line, date, self.start, self.end);
            return Ok(Transformed::Filtered(date));
        }

        let observation = parse_observation(record, line, date)?;
        if let Some(year) = observation.year {
            trace!("Line {}: {} of {}", line, date, year);
        }
        let converted = convert_observation(&observation)?;

        let mut lines = Vec::with_capacity(2);
        if self.first_record && converted.time != 0 {
            lines.push(converted.at_time(0));
        }
        lines.push(converted);
        self.first_record = false;

        Ok(Transformed::Accepted(lines))
    }
}

/// Derive the CONTAM quantities from one EPW observation
///
/// A time of day outside 00:00:00 to 24:00:00 is kept as is; its time
/// column is written empty.
pub fn convert_observation(observation: &EpwObservation) -> Result<WthRecord> {
    let clock = || format!("{}:{:02}", observation.hour, observation.minute);

    let time = observation.seconds_of_day().ok_or_else(|| {
        invalid_field(
            observation.line,
            epw_columns::HOUR,
            "time of day",
            &clock(),
            "seconds since midnight overflow",
        )
    })?;

    if !(0..=i64::from(SECONDS_PER_DAY)).contains(&time) {
        warn!(
            "Line {}: time {} ({} seconds) is outside 00:00:00 to 24:00:00; written with an empty time",
            observation.line,
            clock(),
            time
        );
    }

    let dry_bulb_k = observation.dry_bulb_k();
    let dew_point_k = observation.dew_point_k();

    if observation.pressure_pa <= saturation_pressure(dew_point_k) {
        warn!(
            "Line {}: station pressure {} Pa does not exceed saturation pressure at dew point {} K",
            observation.line, observation.pressure_pa, dew_point_k
        );
    }

    Ok(WthRecord {
        date: observation.day_of_year,
        time,
        dry_bulb_k,
        pressure_pa: observation.pressure_pa,
        wind_speed_ms: observation.wind_speed_ms,
        wind_direction_deg: observation.wind_direction_deg,
        humidity_ratio_g_kg: KG_TO_G * humidity_ratio(dew_point_k, observation.pressure_pa),
        horizontal_radiation_kj: WH_TO_KJ * observation.horizontal_radiation_wh,
        direct_normal_radiation_kj: WH_TO_KJ * observation.direct_normal_radiation_wh,
        sky_temperature_k: sky_temperature(dry_bulb_k, dew_point_k, observation.cloud_cover()),
        rain: observation.is_raining(),
        snow: observation.has_snow(),
    })
}
