//! EPW preamble parsing
//!
//! An EPW file opens with eight header records (LOCATION, DESIGN
//! CONDITIONS, TYPICAL/EXTREME PERIODS, GROUND TEMPERATURES, HOLIDAYS/DAYLIGHT
//! SAVINGS, two COMMENTS lines and DATA PERIODS). Only the location line
//! and the first data period are needed for conversion.

use crate::calendar::DayOfYear;
use crate::constants::{
    DATA_PERIOD_END_FIELD, DATA_PERIOD_START_FIELD, DESCRIPTION_MAX_CHARS,
    EPW_DATA_PERIODS_LINE, EPW_LOCATION_LINE, EPW_PREAMBLE_LINES,
};
use crate::error::{ConversionError, Result};
use std::io::BufRead;
use tracing::debug;

/// Metadata taken from the EPW preamble
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EpwHeader {
    /// Location line, truncated to the CONTAM description limit
    pub description: String,

    /// First day of the file's data period
    pub data_period_start: DayOfYear,

    /// Last day of the file's data period
    pub data_period_end: DayOfYear,
}

impl EpwHeader {
    /// Consume the preamble lines from `reader`, leaving it at the first data record
    pub fn read<R: BufRead>(reader: &mut R) -> Result<Self> {
        let mut lines = Vec::with_capacity(EPW_PREAMBLE_LINES);
        for line_number in 1..=EPW_PREAMBLE_LINES {
            let mut line = String::new();
            if reader.read_line(&mut line)? == 0 {
                return Err(ConversionError::invalid_header(
                    line_number,
                    format!(
                        "unexpected end of file, expected {} header lines",
                        EPW_PREAMBLE_LINES
                    ),
                ));
            }
            lines.push(line.trim_end_matches(['\r', '\n']).to_string());
        }
        Self::parse(&lines)
    }

    /// Parse already-split preamble lines
    pub fn parse(lines: &[String]) -> Result<Self> {
        let location = lines.get(EPW_LOCATION_LINE - 1).ok_or_else(|| {
            ConversionError::invalid_header(EPW_LOCATION_LINE, "missing location line")
        })?;
        let data_periods = lines.get(EPW_DATA_PERIODS_LINE - 1).ok_or_else(|| {
            ConversionError::invalid_header(EPW_DATA_PERIODS_LINE, "missing DATA PERIODS line")
        })?;

        let fields: Vec<&str> = data_periods.split(',').collect();
        let data_period_start = parse_period_date(&fields, DATA_PERIOD_START_FIELD, "start")?;
        let data_period_end = parse_period_date(&fields, DATA_PERIOD_END_FIELD, "end")?;

        let header = Self {
            description: truncate_description(location),
            data_period_start,
            data_period_end,
        };
        debug!(
            "EPW data period {} to {}",
            header.data_period_start, header.data_period_end
        );
        Ok(header)
    }
}

fn parse_period_date(fields: &[&str], index: usize, which: &str) -> Result<DayOfYear> {
    let value = fields.get(index).ok_or_else(|| {
        ConversionError::invalid_header(
            EPW_DATA_PERIODS_LINE,
            format!("missing {} date in field {}", which, index),
        )
    })?;

    value.parse::<DayOfYear>().map_err(|e| {
        ConversionError::invalid_header(
            EPW_DATA_PERIODS_LINE,
            format!("Invalid {} date in the epw file: {} ({})", which, value, e),
        )
    })
}

/// Limit a description to the number of characters CONTAM accepts
pub fn truncate_description(description: &str) -> String {
    description.chars().take(DESCRIPTION_MAX_CHARS).collect()
}
