//! Domain errors for the calculator module.

use calculator_sdk::{CalculatorError, DIVIDE_BY_ZERO_MESSAGE, NEGATIVE_SQRT_MESSAGE};
use thiserror::Error;

/// Operand rejected by the domain service.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum DomainError {
    #[error("division of {dividend} by zero")]
    DivisionByZero { dividend: f64 },

    #[error("square root of negative value {value}")]
    NegativeSquareRoot { value: f64 },
}

impl From<DomainError> for CalculatorError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::DivisionByZero { .. } => {
                CalculatorError::invalid_argument(DIVIDE_BY_ZERO_MESSAGE)
            }
            DomainError::NegativeSquareRoot { .. } => {
                CalculatorError::invalid_argument(NEGATIVE_SQRT_MESSAGE)
            }
        }
    }
}
