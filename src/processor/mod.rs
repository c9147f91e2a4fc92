//! EPW to CONTAM conversion pipeline.
//!
//! Reads the EPW preamble, reconciles the configured date range with the
//! file's data period, writes the day schedule and then streams every data
//! record through the [`RecordTransformer`] in a single sequential pass.

#[cfg(test)]
pub mod tests;

use crate::app::models::ConversionStats;
use crate::app::services::epw_parser::{EpwHeader, data_reader, record_line, truncate_description};
use crate::app::services::record_transformer::{RecordTransformer, Transformed};
use crate::app::services::wth_writer::{DaySchedule, WthWriter};
use crate::calendar::{DayOfYear, is_within_range};
use crate::config::ConversionConfig;
use crate::error::{ConversionError, Result};
use csv::StringRecord;
use std::io::{self, BufRead, BufWriter, Write};
use tracing::{debug, info};

/// Convert EPW text from `input` into a CONTAM weather file on `output`.
///
/// Output is written incrementally; on error whatever was already written
/// stays in `output`.
pub fn convert_epw<R: BufRead, W: Write>(
    config: &ConversionConfig,
    mut input: R,
    output: W,
) -> Result<ConversionStats> {
    config.validate()?;

    let header = EpwHeader::read(&mut input)?;
    let (start, end) = resolve_date_range(config, &header)?;
    let description = config
        .description
        .as_deref()
        .map_or_else(|| header.description.clone(), truncate_description);

    info!("Converting EPW data from {} to {}", start, end);
    debug!("Weather file description: {}", description);
    if let Some(window) = config.dst {
        debug!("Daylight saving time from {} to {}", window.start, window.end);
    }

    let mut writer = WthWriter::new(BufWriter::new(output));
    writer.write_header(&description, start, end)?;

    let mut schedule = DaySchedule::new(config);
    writer.write_days(&schedule.entries_for_range(start, end))?;
    debug!("Wrote {} day schedule lines", writer.days_written());

    writer.write_data_labels()?;

    let mut stats = ConversionStats {
        description,
        start_date: start.to_string(),
        end_date: end.to_string(),
        days_written: writer.days_written(),
        records_read: 0,
        records_written: 0,
        records_filtered: 0,
        padded_first_record: false,
    };

    let mut transformer = RecordTransformer::new(start, end);
    let mut reader = data_reader(input);
    let mut record = StringRecord::new();

    while reader.read_record(&mut record)? {
        let line = record_line(&record);
        stats.records_read += 1;

        match transformer.transform(&record, line)? {
            Transformed::Filtered(_) => stats.records_filtered += 1,
            Transformed::Accepted(lines) => {
                if lines.len() > 1 {
                    debug!("Line {}: inserted midnight copy of first record", line);
                    stats.padded_first_record = true;
                }
                for wth_record in &lines {
                    writer.write_record(wth_record)?;
                }
            }
        }
    }

    stats.records_written = writer.records_written();
    writer.finish()?;

    info!(
        "Converted {} of {} records ({} filtered, {} lines written)",
        stats.records_read - stats.records_filtered,
        stats.records_read,
        stats.records_filtered,
        stats.records_written
    );
    Ok(stats)
}

/// Convert in-memory EPW text using a JSON configuration document
pub fn convert_epw_to_string(epw_text: &str, config_json: &str) -> Result<String> {
    let config = ConversionConfig::from_json_str(config_json)?;

    let mut output = Vec::new();
    convert_epw(&config, epw_text.as_bytes(), &mut output)?;

    String::from_utf8(output)
        .map_err(|e| ConversionError::Io(io::Error::new(io::ErrorKind::InvalidData, e)))
}

/// Effective start and end dates: configured values, else the file's data period.
///
/// When both dates are configured each must lie inside the file's data period.
pub fn resolve_date_range(
    config: &ConversionConfig,
    header: &EpwHeader,
) -> Result<(DayOfYear, DayOfYear)> {
    let file_start = header.data_period_start;
    let file_end = header.data_period_end;

    if let (Some(start), Some(end)) = (config.start_date, config.end_date) {
        if !is_within_range(start, file_start, file_end) {
            return Err(ConversionError::date_range(format!(
                "The start date in config is not within the dates included in the EPW file ({} not in {} to {}).",
                start, file_start, file_end
            )));
        }
        if !is_within_range(end, file_start, file_end) {
            return Err(ConversionError::date_range(format!(
                "The end date in config is not within the dates included in the EPW file ({} not in {} to {}).",
                end, file_start, file_end
            )));
        }
    }

    let start = config.start_date.unwrap_or(file_start);
    let end = config.end_date.unwrap_or(file_end);
    debug!(
        "Resolved date range {} to {} (file data period {} to {})",
        start, end, file_start, file_end
    );
    Ok((start, end))
}
