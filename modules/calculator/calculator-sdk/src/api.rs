//! Calculator API trait
//!
//! Contract trait for the calculator module.

use crate::error::CalculatorError;

/// Calculator API trait.
///
/// Integral operations work on `i32` and wrap on overflow with
/// two's-complement semantics. They never fail.
/// Floating-point operations reject the inputs they cannot handle with
/// [`CalculatorError::InvalidArgument`].
pub trait CalculatorClientV1: Send + Sync {
    /// Add two integers. `i32::MAX + 1` wraps to `i32::MIN`.
    fn add(&self, a: i32, b: i32) -> i32;

    /// Subtract `b` from `a`. `i32::MIN - 1` wraps to `i32::MAX`.
    fn subtract(&self, a: i32, b: i32) -> i32;

    /// Multiply two integers, wrapping on overflow.
    fn multiply(&self, a: i32, b: i32) -> i32;

    /// Divide `a` by `b`.
    ///
    /// # Errors
    /// Returns [`CalculatorError::InvalidArgument`] with
    /// [`DIVIDE_BY_ZERO_MESSAGE`](crate::DIVIDE_BY_ZERO_MESSAGE) when `b` is zero.
    fn divide(&self, a: f64, b: f64) -> Result<f64, CalculatorError>;

    /// Square root of `a`.
    ///
    /// # Errors
    /// Returns [`CalculatorError::InvalidArgument`] with
    /// [`NEGATIVE_SQRT_MESSAGE`](crate::NEGATIVE_SQRT_MESSAGE) when `a` is negative.
    fn sqrt(&self, a: f64) -> Result<f64, CalculatorError>;
}
