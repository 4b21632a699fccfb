//! Domain service for calculator
//!
//! Contains the core arithmetic.

use tracing::debug;

use super::error::DomainError;
use crate::config::CalculatorConfig;

/// Domain service that performs arithmetic operations.
///
/// Stateless apart from its configuration. Integral operations wrap on
/// overflow in every build profile.
#[derive(Debug, Clone, Default)]
pub struct Service {
    config: CalculatorConfig,
}

impl Service {
    /// Create a new service.
    #[must_use]
    pub fn new(config: CalculatorConfig) -> Self {
        Self { config }
    }

    /// Add two numbers and return the sum.
    #[must_use]
    pub fn add(&self, a: i32, b: i32) -> i32 {
        if self.config.trace_operations {
            debug!(a, b, "performing addition");
        }
        a.wrapping_add(b)
    }

    /// Subtract `b` from `a`.
    #[must_use]
    pub fn subtract(&self, a: i32, b: i32) -> i32 {
        if self.config.trace_operations {
            debug!(a, b, "performing subtraction");
        }
        a.wrapping_sub(b)
    }

    #[must_use]
    pub fn multiply(&self, a: i32, b: i32) -> i32 {
        if self.config.trace_operations {
            debug!(a, b, "performing multiplication");
        }
        a.wrapping_mul(b)
    }

    /// Divide `a` by `b`.
    ///
    /// # Errors
    /// [`DomainError::DivisionByZero`] when `b` is exactly zero (either sign).
    pub fn divide(&self, a: f64, b: f64) -> Result<f64, DomainError> {
        if self.config.trace_operations {
            debug!(a, b, "performing division");
        }
        if b == 0.0 {
            return Err(DomainError::DivisionByZero { dividend: a });
        }
        Ok(a / b)
    }

    /// Square root of `a`.
    ///
    /// # Errors
    /// [`DomainError::NegativeSquareRoot`] when `a` is strictly negative.
    pub fn sqrt(&self, a: f64) -> Result<f64, DomainError> {
        if self.config.trace_operations {
            debug!(a, "performing square root");
        }
        if a < 0.0 {
            return Err(DomainError::NegativeSquareRoot { value: a });
        }
        Ok(a.sqrt())
    }
}
