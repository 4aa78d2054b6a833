//! Parse errors for the SpryWare CSV format

use thiserror::Error;

/// Errors during CSV parsing
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("invalid field count: expected {expected}, got {found}")]
    FieldCount { expected: usize, found: usize },

    #[error("failed to parse time '{0}': {1}")]
    InvalidTime(String, String),

    #[error("failed to parse condition '{0}': {1}")]
    InvalidCondition(String, String),

    #[error("failed to parse scale '{0}': {1}")]
    InvalidScale(String, String),

    #[error("failed to parse price '{0}': {1}")]
    InvalidPrice(String, String),

    #[error("failed to parse size '{0}': {1}")]
    InvalidSize(String, String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ParseError {
    /// True when the row simply did not have the expected column count.
    ///
    /// The vendor files end with a trailer row of a different shape, so
    /// readers treat this case as end of data rather than a failure.
    pub fn is_field_count(&self) -> bool {
        matches!(self, ParseError::FieldCount { .. })
    }
}
