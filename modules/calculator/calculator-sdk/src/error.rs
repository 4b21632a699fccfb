//! Error types for the calculator module.

use thiserror::Error;

/// Message carried by the error returned for a zero divisor.
pub const DIVIDE_BY_ZERO_MESSAGE: &str = "Cannot divide by zero";

/// Message carried by the error returned for a negative square root operand.
pub const NEGATIVE_SQRT_MESSAGE: &str = "Cannot calculate square root of a negative number";

/// Errors that can occur when using the calculator API.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalculatorError {
    /// An operand is outside the domain of the operation.
    #[error("{message}")]
    InvalidArgument {
        /// Human-readable description of the rejected input.
        message: String,
    },

    /// An internal error occurred.
    #[error("internal error: {0}")]
    Internal(String),
}

impl CalculatorError {
    /// Build an [`CalculatorError::InvalidArgument`] error.
    #[must_use]
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// The text carried by this error, without any prefix.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::InvalidArgument { message } | Self::Internal(message) => message,
        }
    }

    /// Whether this error classifies as an invalid argument.
    #[must_use]
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_displays_bare_message() {
        let err = CalculatorError::invalid_argument(DIVIDE_BY_ZERO_MESSAGE);
        assert_eq!(err.to_string(), "Cannot divide by zero");
        assert_eq!(err.message(), "Cannot divide by zero");
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_internal_is_prefixed() {
        let err = CalculatorError::Internal("boom".to_owned());
        assert_eq!(err.to_string(), "internal error: boom");
        assert_eq!(err.message(), "boom");
        assert!(!err.is_invalid_argument());
    }
}
