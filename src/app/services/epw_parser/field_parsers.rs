//! Field parsing utilities for EPW data records
//!
//! Every helper reports failures with the input line, the column index and
//! the offending text.

use crate::constants::RAIN_CODE_POSITION;
use crate::error::{ConversionError, Result};
use csv::StringRecord;

/// Fetch a field by column index, trimmed
pub fn get_required_field<'r>(
    record: &'r StringRecord,
    line: u64,
    column: usize,
    field: &'static str,
) -> Result<&'r str> {
    record
        .get(column)
        .map(str::trim)
        .ok_or_else(|| ConversionError::MissingField {
            line,
            column,
            field,
            found: record.len(),
        })
}

/// Parse a required integer field
pub fn parse_required_integer(
    record: &StringRecord,
    line: u64,
    column: usize,
    field: &'static str,
) -> Result<i64> {
    let value = get_required_field(record, line, column, field)?;
    value
        .parse::<i64>()
        .map_err(|e| invalid_field(line, column, field, value, e))
}

/// Parse a required real field
pub fn parse_required_real(
    record: &StringRecord,
    line: u64,
    column: usize,
    field: &'static str,
) -> Result<f64> {
    let value = get_required_field(record, line, column, field)?;
    value
        .parse::<f64>()
        .map_err(|e| invalid_field(line, column, field, value, e))
}

/// Parse an optional integer field; missing or malformed values give `None`
pub fn parse_optional_integer(record: &StringRecord, column: usize) -> Option<i64> {
    record
        .get(column)
        .and_then(|value| value.trim().parse::<i64>().ok())
}

/// Rain digit from the present weather codes (second character)
pub fn parse_rain_code(
    record: &StringRecord,
    line: u64,
    column: usize,
    field: &'static str,
) -> Result<u32> {
    let value = get_required_field(record, line, column, field)?;
    value
        .chars()
        .nth(RAIN_CODE_POSITION)
        .and_then(|c| c.to_digit(10))
        .ok_or_else(|| {
            invalid_field(
                line,
                column,
                field,
                value,
                format!("character {} is not a digit", RAIN_CODE_POSITION + 1),
            )
        })
}

/// Build an invalid field error
pub fn invalid_field(
    line: u64,
    column: usize,
    field: &'static str,
    value: &str,
    reason: impl ToString,
) -> ConversionError {
    ConversionError::InvalidField {
        line,
        column,
        field,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
