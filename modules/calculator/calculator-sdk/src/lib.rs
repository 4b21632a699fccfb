//! Calculator SDK
//!
//! This crate provides the public API for the `calculator` module:
//!
//! - [`CalculatorClientV1`] - API trait for consumers
//! - [`CalculatorError`] - Error types
//!
//! ## Usage
//!
//! ```ignore
//! use calculator_sdk::{CalculatorClientV1, CalculatorError};
//!
//! let client: Arc<dyn CalculatorClientV1> = calculator::client(CalculatorConfig::default());
//!
//! assert_eq!(client.add(2, 3), 5);
//! let quotient = client.divide(5.0, 2.0)?;
//! ```
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

pub mod api;
pub mod error;

pub use api::CalculatorClientV1;
pub use error::{CalculatorError, DIVIDE_BY_ZERO_MESSAGE, NEGATIVE_SQRT_MESSAGE};
