//! Error types for the almanac library.

use std::path::PathBuf;

use thiserror::Error;

/// Comprehensive error type for all outline operations.
#[derive(Error, Debug)]
pub enum AlmanacError {
    /// Date construction or day arithmetic left the representable range
    #[error("Date arithmetic error: {source}")]
    DateArithmetic {
        #[from]
        source: jiff::Error,
    },
    /// ISO week number that does not exist in the given ISO year
    #[error("ISO year {iso_year} has no week {iso_week} (valid weeks are 1..={max_week})")]
    InvalidIsoWeek {
        iso_year: i16,
        iso_week: i8,
        max_week: i8,
    },
    /// ISO weekday outside Monday=1..Sunday=7
    #[error("Invalid ISO weekday {iso_day} (must be 1..=7)")]
    InvalidIsoDay { iso_day: i8 },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> AlmanacError {
        AlmanacError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl AlmanacError {
    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }
}

/// Result type alias for outline operations
pub type Result<T> = std::result::Result<T, AlmanacError>;
