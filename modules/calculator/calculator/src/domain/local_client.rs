//! Local (in-process) client for the calculator module.

use std::sync::Arc;

use calculator_sdk::{CalculatorClientV1, CalculatorError};

use super::{DomainError, Service};

/// Local client wrapping the calculator service.
pub struct CalculatorLocalClient {
    svc: Arc<Service>,
}

impl CalculatorLocalClient {
    #[must_use]
    pub fn new(svc: Arc<Service>) -> Self {
        Self { svc }
    }
}

fn log_and_convert(op: &str, e: DomainError) -> CalculatorError {
    tracing::warn!(operation = op, error = %e, "calculator call rejected");
    e.into()
}

impl CalculatorClientV1 for CalculatorLocalClient {
    fn add(&self, a: i32, b: i32) -> i32 {
        self.svc.add(a, b)
    }

    fn subtract(&self, a: i32, b: i32) -> i32 {
        self.svc.subtract(a, b)
    }

    fn multiply(&self, a: i32, b: i32) -> i32 {
        self.svc.multiply(a, b)
    }

    fn divide(&self, a: f64, b: f64) -> Result<f64, CalculatorError> {
        self.svc
            .divide(a, b)
            .map_err(|e| log_and_convert("divide", e))
    }

    fn sqrt(&self, a: f64) -> Result<f64, CalculatorError> {
        self.svc.sqrt(a).map_err(|e| log_and_convert("sqrt", e))
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use tracing_test::traced_test;

    fn client() -> CalculatorLocalClient {
        CalculatorLocalClient::new(Arc::new(Service::default()))
    }

    #[test]
    fn test_integral_operations_delegate() {
        let client = client();
        assert_eq!(client.add(2, 3), 5);
        assert_eq!(client.subtract(5, -3), 8);
        assert_eq!(client.multiply(-2, -3), 6);
    }

    #[test]
    #[traced_test]
    fn test_divide_by_zero_is_logged_and_converted() {
        let err = client().divide(3.0, 0.0).unwrap_err();
        assert_eq!(err, CalculatorError::invalid_argument("Cannot divide by zero"));
        assert!(logs_contain("calculator call rejected"));
        assert!(logs_contain("operation=\"divide\""));
    }

    #[test]
    #[traced_test]
    fn test_negative_sqrt_is_logged_and_converted() {
        let err = client().sqrt(-9.0).unwrap_err();
        assert!(err.is_invalid_argument());
        assert_eq!(
            err.message(),
            "Cannot calculate square root of a negative number"
        );
        assert!(logs_contain("square root of negative value -9"));
    }

    #[test]
    #[traced_test]
    fn test_successful_calls_do_not_warn() {
        let _ = client().divide(1.0, 4.0);
        assert!(!logs_contain("calculator call rejected"));
    }
}
