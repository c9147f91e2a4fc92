//! Command-line argument definitions for the EPW to CONTAM converter
//!
//! This module defines the CLI interface using the clap derive API.

use crate::constants::{EPW_EXTENSION, WTH_EXTENSION};
use clap::Parser;
use std::path::{Path, PathBuf};

/// CLI arguments for the EPW to CONTAM weather file converter
#[derive(Debug, Clone, Parser)]
#[command(
    name = "epw2wth",
    version,
    about = "Convert EnergyPlus EPW weather files into CONTAM .wth weather files",
    long_about = "Reads an EnergyPlus weather (EPW) file and writes a CONTAM weather file \
                  containing a day schedule (day of week, day type, DST, ground temperature) \
                  followed by one weather line per hourly record. An optional JSON \
                  configuration file selects the date range, description, DST window, \
                  first day of week and special days."
)]
pub struct Args {
    /// EnergyPlus weather file to read
    #[arg(value_name = "EPW_FILE")]
    pub epw_file: PathBuf,

    /// CONTAM weather file to create
    #[arg(value_name = "WTH_FILE")]
    pub wth_file: PathBuf,

    /// JSON configuration file
    ///
    /// Keys: startdate, enddate, description, usedst, dststart, dstend,
    /// firstdoy and specialdays. Without it the whole EPW data period is
    /// converted with no DST and the first day on day 1 of the week.
    #[arg(value_name = "CONFIG_FILE")]
    pub config_file: Option<PathBuf>,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    ///
    /// Only show errors. Overrides verbose settings.
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,

    /// Disable the progress indicator
    #[arg(long = "no-progress", help = "Disable the progress indicator")]
    pub no_progress: bool,
}

impl Args {
    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }

    /// Check if we should show the progress indicator
    pub fn show_progress(&self) -> bool {
        !self.quiet && !self.no_progress
    }

    /// Warnings for input/output paths with unexpected extensions
    pub fn extension_warnings(&self) -> Vec<String> {
        let mut warnings = Vec::new();
        if !has_extension(&self.epw_file, EPW_EXTENSION) {
            warnings.push(format!(
                "Input file {} does not have a .{} extension",
                self.epw_file.display(),
                EPW_EXTENSION
            ));
        }
        if !has_extension(&self.wth_file, WTH_EXTENSION) {
            warnings.push(format!(
                "Output file {} does not have a .{} extension",
                self.wth_file.display(),
                WTH_EXTENSION
            ));
        }
        warnings
    }
}

fn has_extension(path: &Path, expected: &str) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(expected))
}
