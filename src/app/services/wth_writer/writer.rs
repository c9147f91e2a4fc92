//! Sequential writer for the CONTAM weather file sections

use crate::app::models::{DayEntry, WthRecord};
use crate::calendar::DayOfYear;
use crate::constants::{
    DAY_SCHEDULE_LABELS, END_DATE_COMMENT, START_DATE_COMMENT, WEATHER_DATA_LABELS,
    WTH_FORMAT_TAG,
};
use crate::error::Result;
use std::io::Write;

/// Writes the header, day schedule and weather data sections in order
pub struct WthWriter<W: Write> {
    out: W,
    days_written: usize,
    records_written: u64,
}

impl<W: Write> WthWriter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            days_written: 0,
            records_written: 0,
        }
    }

    /// Format tag, description, date range and the day schedule labels
    pub fn write_header(
        &mut self,
        description: &str,
        start: DayOfYear,
        end: DayOfYear,
    ) -> Result<()> {
        writeln!(self.out, "{}", WTH_FORMAT_TAG)?;
        writeln!(self.out, "{}", description)?;
        writeln!(self.out, "{} {}", start, START_DATE_COMMENT)?;
        writeln!(self.out, "{} {}", end, END_DATE_COMMENT)?;
        writeln!(self.out, "{}", DAY_SCHEDULE_LABELS.join("\t"))?;
        Ok(())
    }

    pub fn write_day(&mut self, entry: &DayEntry) -> Result<()> {
        writeln!(self.out, "{}", entry)?;
        self.days_written += 1;
        Ok(())
    }

    pub fn write_days<'e>(&mut self, entries: impl IntoIterator<Item = &'e DayEntry>) -> Result<()> {
        for entry in entries {
            self.write_day(entry)?;
        }
        Ok(())
    }

    /// Column comment line opening the weather data section
    pub fn write_data_labels(&mut self) -> Result<()> {
        writeln!(self.out, "{}", WEATHER_DATA_LABELS.join("\t"))?;
        Ok(())
    }

    pub fn write_record(&mut self, record: &WthRecord) -> Result<()> {
        writeln!(self.out, "{}", record)?;
        self.records_written += 1;
        Ok(())
    }

    pub fn days_written(&self) -> usize {
        self.days_written
    }

    pub fn records_written(&self) -> u64 {
        self.records_written
    }

    /// Flush and hand back the underlying writer
    pub fn finish(mut self) -> Result<W> {
        self.out.flush()?;
        Ok(self.out)
    }
}
