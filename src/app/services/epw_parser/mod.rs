//! EnergyPlus weather (EPW) file parsing
//!
//! - [`header`] - preamble reading and data period extraction
//! - [`record_parser`] - hourly record parsing by fixed column position
//! - [`field_parsers`] - per-field helpers with line/column error context
//!
//! Data records are read with the `csv` crate after the preamble has been
//! consumed from the same buffered reader.

pub mod field_parsers;
pub mod header;
pub mod record_parser;

#[cfg(test)]
mod tests;

use crate::constants::EPW_PREAMBLE_LINES;
use csv::{Reader, ReaderBuilder, StringRecord};
use std::io::Read;

pub use header::{EpwHeader, truncate_description};
pub use record_parser::{parse_observation, parse_record_date};

/// CSV reader over the data section; `reader` must be positioned after the preamble
pub fn data_reader<R: Read>(reader: R) -> Reader<R> {
    ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader)
}

/// 1-based line number of a data record within the whole EPW file
pub fn record_line(record: &StringRecord) -> u64 {
    let data_line = record.position().map_or(0, |position| position.line());
    EPW_PREAMBLE_LINES as u64 + data_line
}
