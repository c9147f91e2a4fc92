//! EPW to CONTAM Weather File Converter
//!
//! A Rust library for converting EnergyPlus weather (EPW) files into the
//! CONTAM multizone airflow model's `.wth` weather file format.
//!
//! This library provides tools for:
//! - Parsing the EPW preamble and hourly data records by fixed column position
//! - Generating the CONTAM day schedule (day of week, day type, DST)
//! - Deriving humidity ratio and effective sky temperature from EPW fields
//! - Filtering records to a configured, possibly year-wrapping, date range
//! - Loading and validating JSON conversion configuration
//!
//! ## Usage
//!
//! ```rust
//! use epw2wth::{ConversionConfig, convert_epw};
//!
//! # fn example(epw_text: &str) -> epw2wth::Result<()> {
//! let mut wth = Vec::new();
//! let stats = convert_epw(&ConversionConfig::default(), epw_text.as_bytes(), &mut wth)?;
//! println!("Wrote {} weather lines", stats.records_written);
//! # Ok(())
//! # }
//! ```

pub mod calendar;
pub mod config;
pub mod constants;
pub mod error;
pub mod processor;
pub mod psychrometrics;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod epw_parser;
        pub mod record_transformer;
        pub mod wth_writer;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{ConversionStats, DayEntry, EpwObservation, WthRecord};
pub use calendar::{CalendarError, DayOfYear};
pub use config::ConversionConfig;
pub use error::{ConversionError, Result};
pub use processor::{convert_epw, convert_epw_to_string};
