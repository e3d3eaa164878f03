//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use thiserror::Error;

/// Errors that can occur while loading the collisions CSV
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Failed to open dataset: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV parse error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Missing required column: `{0}`")]
    MissingColumn(String),

    #[error("Line {line}: invalid `{column}` value '{value}': {reason}")]
    InvalidValue {
        line: usize,
        column: String,
        value: String,
        reason: String,
    },

    #[error("Line {line}: {source}")]
    InvalidRecord {
        line: usize,
        #[source]
        source: ValidationError,
    },
}

/// Errors raised when a selection or record falls outside its domain
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Year {year} is outside the selectable range [{min}, {max}]")]
    YearOutOfRange { year: i32, min: i32, max: i32 },

    #[error("Invalid year selection '{0}' (expected \"all\" or a year)")]
    InvalidYearSelection(String),

    #[error("Hour {0} is outside [0, 23]")]
    HourOutOfRange(i64),

    #[error("Day of week {0} is outside [0, 6]")]
    DayOutOfRange(i64),

    #[error("Geographic code '{0}' must contain only digits")]
    InvalidFips(String),

    #[error("County name is empty")]
    EmptyCounty,
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}
