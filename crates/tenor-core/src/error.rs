//! Error types for core types.

use thiserror::Error;

/// A specialized Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors raised by the core types.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    /// Error in date calculations or invalid date.
    #[error("Invalid date: {message}")]
    InvalidDate {
        /// Description of the date error.
        message: String,
    },

    /// A time grid that is empty, unsorted or contains non-finite times.
    #[error("Invalid time discretization: {reason}")]
    InvalidTimeDiscretization {
        /// Description of what is wrong with the grid.
        reason: String,
    },
}

impl CoreError {
    /// Creates an invalid date error.
    #[must_use]
    pub fn invalid_date(message: impl Into<String>) -> Self {
        Self::InvalidDate {
            message: message.into(),
        }
    }

    /// Creates an invalid time discretization error.
    #[must_use]
    pub fn invalid_time_discretization(reason: impl Into<String>) -> Self {
        Self::InvalidTimeDiscretization {
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CoreError::invalid_date("2024-02-30 is not a valid date");
        assert!(err.to_string().contains("Invalid date"));

        let err = CoreError::invalid_time_discretization("times must be strictly increasing");
        assert!(err.to_string().contains("strictly increasing"));
    }
}
