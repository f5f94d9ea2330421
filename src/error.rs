//! Custom error types for spendscope
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for spendscope operations
#[derive(Error, Debug)]
pub enum SpendscopeError {
    /// A required column is missing from the uploaded file
    #[error("Missing required column: {0}")]
    MissingColumn(&'static str),

    /// An amount cell could not be parsed as a decimal number
    #[error("Row {row}: invalid amount '{value}'")]
    InvalidAmount { row: usize, value: String },

    /// A date cell does not match the expected DD/MM/YYYY format
    #[error("Row {row}: invalid date '{value}' (expected DD/MM/YYYY)")]
    InvalidDate { row: usize, value: String },

    /// The CSV itself is malformed
    #[error("CSV error: {0}")]
    Csv(String),

    /// A session edit referenced a row that does not exist
    #[error("Row {row} is out of range (table has {len} rows)")]
    RowOutOfRange { row: usize, len: usize },

    /// Storage errors (category registry file)
    #[error("Storage error: {0}")]
    Storage(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),
}

impl SpendscopeError {
    /// Check if this is a load error (the file must be corrected and re-loaded)
    pub fn is_load_error(&self) -> bool {
        matches!(
            self,
            Self::MissingColumn(_)
                | Self::InvalidAmount { .. }
                | Self::InvalidDate { .. }
                | Self::Csv(_)
        )
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for SpendscopeError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for SpendscopeError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<csv::Error> for SpendscopeError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err.to_string())
    }
}

/// Result type alias for spendscope operations
pub type SpendscopeResult<T> = Result<T, SpendscopeError>;
