//! CONTAM weather file (.wth) output
//!
//! - [`format`] - C `%g` style real number formatting
//! - [`day_schedule`] - day of week / day type / DST lines of the header
//! - [`writer`] - section-by-section file writer

pub mod day_schedule;
pub mod format;
pub mod writer;

#[cfg(test)]
mod tests;

pub use day_schedule::DaySchedule;
pub use format::format_real;
pub use writer::WthWriter;
