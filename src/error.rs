//! Error handling for EPW to CONTAM weather file conversion.
//!
//! Provides error types with context for configuration loading, EPW
//! preamble parsing, date-range reconciliation and per-record field
//! conversion failures.

use crate::calendar::CalendarError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConversionError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Calendar(#[from] CalendarError),

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Invalid EPW header at line {line}: {reason}")]
    InvalidHeader { line: usize, reason: String },

    #[error("{message}")]
    DateRange { message: String },

    #[error("Invalid value '{value}' for {field} (column {column}) at line {line}: {reason}")]
    InvalidField {
        line: u64,
        column: usize,
        field: &'static str,
        value: String,
        reason: String,
    },

    #[error("Missing {field} (column {column}) at line {line}: record has {found} columns")]
    MissingField {
        line: u64,
        column: usize,
        field: &'static str,
        found: usize,
    },
}

impl ConversionError {
    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create an EPW header error for a 1-based line number
    pub fn invalid_header(line: usize, reason: impl Into<String>) -> Self {
        Self::InvalidHeader {
            line,
            reason: reason.into(),
        }
    }

    /// Create a date range consistency error
    pub fn date_range(message: impl Into<String>) -> Self {
        Self::DateRange {
            message: message.into(),
        }
    }

    /// True for errors raised before any conversion output is produced
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration { .. } | Self::Json(_))
    }
}

pub type Result<T> = std::result::Result<T, ConversionError>;
