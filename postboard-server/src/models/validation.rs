//! Validation error types

use std::fmt;

/// Validation error for request input that cannot be coerced
#[derive(Debug, Clone)]
pub enum ValidationError {
    /// Numeric field below zero
    Negative { field: &'static str, value: i64 },

    /// Query string could not be parsed into the expected shape
    InvalidQuery { reason: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Negative { field, value } => {
                write!(f, "{} must be greater than or equal to 0, got {}", field, value)
            }
            Self::InvalidQuery { reason } => write!(f, "invalid query: {}", reason),
        }
    }
}

impl std::error::Error for ValidationError {}
