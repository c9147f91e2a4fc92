//! Conversion configuration loading and validation.
//!
//! The JSON document mirrors the keys understood by the CONTAM weather
//! tools (`startdate`, `enddate`, `usedst`, ...). It is decoded into a
//! [`RawConfig`] with every key optional, then validated into an
//! immutable [`ConversionConfig`] so each missing or malformed key gets
//! its own message.

use crate::calendar::{DayOfYear, is_within_range};
use crate::constants::{DAYS_PER_WEEK, MAX_DAY_TYPE};
use crate::error::{ConversionError, Result};
use serde::Deserialize;
use serde_json::Value;
use std::path::Path;
use tracing::debug;

/// JSON configuration document as written by users
///
/// Integer keys are kept as raw JSON values so a value of the wrong type
/// is reported against its key. `null` counts as absent.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawConfig {
    pub startdate: Option<String>,
    pub enddate: Option<String>,
    pub description: Option<String>,
    pub usedst: Option<Value>,
    pub dststart: Option<String>,
    pub dstend: Option<String>,
    pub firstdoy: Option<Value>,
    #[serde(default)]
    pub specialdays: Option<Vec<RawSpecialDay>>,
}

/// One entry of the `specialdays` array
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawSpecialDay {
    pub date: Option<String>,
    pub daytype: Option<Value>,
}

/// Daylight saving time window, possibly wrapping past 31 December
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DstWindow {
    pub start: DayOfYear,
    pub end: DayOfYear,
}

impl DstWindow {
    pub fn contains(&self, date: DayOfYear) -> bool {
        is_within_range(date, self.start, self.end)
    }
}

/// A date whose day type is forced to a fixed value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpecialDay {
    pub date: DayOfYear,
    /// Day type 1-12
    pub day_type: u8,
}

/// Validated conversion settings, immutable for the duration of a conversion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionConfig {
    /// First day to convert; `None` uses the EPW data period start
    pub start_date: Option<DayOfYear>,

    /// Last day to convert; `None` uses the EPW data period end
    pub end_date: Option<DayOfYear>,

    /// Weather file description; `None` uses the EPW location line
    pub description: Option<String>,

    /// Daylight saving time window; `None` disables DST
    pub dst: Option<DstWindow>,

    /// Day of week (and initial day type) of the first generated day, 1-7
    pub first_day_of_week: u8,

    /// Day type overrides, in configuration order
    pub special_days: Vec<SpecialDay>,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            start_date: None,
            end_date: None,
            description: None,
            dst: None,
            first_day_of_week: 1,
            special_days: Vec::new(),
        }
    }
}

impl ConversionConfig {
    /// Decode and validate a JSON configuration document
    pub fn from_json_str(json: &str) -> Result<Self> {
        let raw: RawConfig = serde_json::from_str(json)?;
        Self::try_from(raw)
    }

    /// Read, decode and validate a JSON configuration file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ConversionError::configuration(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;
        let config = Self::from_json_str(&content)?;
        debug!("Loaded configuration from {}: {:?}", path.display(), config);
        Ok(config)
    }

    /// Restrict conversion to `start..=end` (wrapping when `start > end`)
    pub fn with_date_range(mut self, start: DayOfYear, end: DayOfYear) -> Self {
        self.start_date = Some(start);
        self.end_date = Some(end);
        self
    }

    /// Override the description taken from the EPW file
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Enable daylight saving time over `start..=end`
    pub fn with_dst(mut self, start: DayOfYear, end: DayOfYear) -> Self {
        self.dst = Some(DstWindow { start, end });
        self
    }

    /// Set the day of week of the first generated day
    pub fn with_first_day_of_week(mut self, first_day_of_week: u8) -> Self {
        self.first_day_of_week = first_day_of_week;
        self
    }

    /// Append a day type override
    pub fn with_special_day(mut self, date: DayOfYear, day_type: u8) -> Self {
        self.special_days.push(SpecialDay { date, day_type });
        self
    }

    /// True when DST is enabled and `date` falls inside the DST window
    pub fn is_dst(&self, date: DayOfYear) -> bool {
        self.dst.is_some_and(|window| window.contains(date))
    }

    /// Override day type for `date`; the last matching entry wins
    pub fn special_day_type(&self, date: DayOfYear) -> Option<u8> {
        self.special_days
            .iter()
            .rev()
            .find(|special| special.date == date)
            .map(|special| special.day_type)
    }

    /// Check the invariants that the public fields cannot enforce
    pub fn validate(&self) -> Result<()> {
        if !(1..=DAYS_PER_WEEK).contains(&self.first_day_of_week) {
            return Err(ConversionError::configuration(format!(
                "Invalid firstdoy in the config file: {}",
                self.first_day_of_week
            )));
        }

        if let Some(special) = self
            .special_days
            .iter()
            .find(|special| !(1..=MAX_DAY_TYPE).contains(&special.day_type))
        {
            return Err(ConversionError::configuration(format!(
                "Invalid day type in special day: {}",
                special.day_type
            )));
        }

        Ok(())
    }
}

impl TryFrom<RawConfig> for ConversionConfig {
    type Error = ConversionError;

    fn try_from(raw: RawConfig) -> Result<Self> {
        let start_date = required_date(raw.startdate.as_deref(), "startdate", "start date")?;
        let end_date = required_date(raw.enddate.as_deref(), "enddate", "end date")?;

        let description = raw.description.filter(|d| !d.is_empty());

        let use_dst = match raw.usedst {
            None => {
                return Err(ConversionError::configuration(
                    "usedst not found in the config file.",
                ));
            }
            Some(value) => match value.as_i64() {
                Some(0) => false,
                Some(1) => true,
                _ => {
                    return Err(ConversionError::configuration(format!(
                        "Invalid usedst in the config file: {}",
                        value
                    )));
                }
            },
        };

        let dst = if use_dst {
            Some(DstWindow {
                start: required_date(raw.dststart.as_deref(), "dststart", "dststart")?,
                end: required_date(raw.dstend.as_deref(), "dstend", "dstend")?,
            })
        } else {
            None
        };

        let first_day_of_week = match raw.firstdoy {
            None => {
                return Err(ConversionError::configuration(
                    "firstdoy not found in the config file.",
                ));
            }
            Some(value) => small_integer(&value)
                .filter(|day| (1..=DAYS_PER_WEEK).contains(day))
                .ok_or_else(|| {
                    ConversionError::configuration(format!(
                        "Invalid firstdoy in the config file: {}",
                        value
                    ))
                })?,
        };

        let special_days = raw
            .specialdays
            .unwrap_or_default()
            .into_iter()
            .map(parse_special_day)
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            start_date: Some(start_date),
            end_date: Some(end_date),
            description,
            dst,
            first_day_of_week,
            special_days,
        })
    }
}

fn required_date(value: Option<&str>, key: &str, label: &str) -> Result<DayOfYear> {
    let value = value.filter(|v| !v.is_empty()).ok_or_else(|| {
        ConversionError::configuration(format!("{} not found in the config file.", key))
    })?;

    value.parse::<DayOfYear>().map_err(|e| {
        ConversionError::configuration(format!(
            "Invalid {} in the config file: {} ({})",
            label, value, e
        ))
    })
}

/// JSON integer that fits a `u8`
fn small_integer(value: &Value) -> Option<u8> {
    value.as_i64().and_then(|v| u8::try_from(v).ok())
}

fn parse_special_day(raw: RawSpecialDay) -> Result<SpecialDay> {
    let date_str = raw
        .date
        .filter(|d| !d.is_empty())
        .ok_or_else(|| ConversionError::configuration("date not found in a special day object"))?;
    let date = date_str.parse::<DayOfYear>().map_err(|e| {
        ConversionError::configuration(format!(
            "Invalid date in the special day: {} ({})",
            date_str, e
        ))
    })?;

    let day_type = raw.daytype.ok_or_else(|| {
        ConversionError::configuration("daytype not found in a special day object")
    })?;
    let day_type = small_integer(&day_type)
        .filter(|t| (1..=MAX_DAY_TYPE).contains(t))
        .ok_or_else(|| {
            ConversionError::configuration(format!(
                "Invalid day type in special day: {}",
                day_type
            ))
        })?;

    Ok(SpecialDay { date, day_type })
}
