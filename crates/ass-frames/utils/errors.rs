//! Core error type for strict codec operations
//!
//! The lenient decoders used by the parser never fail; they wrap the strict
//! `try_*` entry points and substitute documented defaults. `CoreError` is
//! what those strict entry points report.

use thiserror::Error;

/// Error returned by the strict time/color/numeric decoders
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Color text is not `&H` followed by 6 or 8 hex digits
    #[error("Invalid color format: {0}")]
    InvalidColor(String),

    /// Time text is not `H:MM:SS.CS`
    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    /// Numeric field failed to parse
    #[error("Invalid numeric value: {0}")]
    InvalidNumeric(String),
}

impl CoreError {
    /// Create color error from invalid input
    pub fn invalid_color<T: core::fmt::Display>(value: T) -> Self {
        Self::InvalidColor(value.to_string())
    }

    /// Create time error from invalid input and a reason
    pub fn invalid_time<T: core::fmt::Display>(value: T, reason: &str) -> Self {
        Self::InvalidTime(format!("'{value}': {reason}"))
    }

    /// Create numeric error from invalid input and a reason
    pub fn invalid_numeric<T: core::fmt::Display>(value: T, reason: &str) -> Self {
        Self::InvalidNumeric(format!("'{value}': {reason}"))
    }
}
