//! Calculator Module
//!
//! A stateless arithmetic service: addition, subtraction, multiplication,
//! division and square root.
//!
//! ## Architecture
//!
//! - `config.rs` - Module configuration
//! - `domain/service.rs` - Core arithmetic
//! - `domain/local_client.rs` - In-process `CalculatorClientV1` implementation
//!
//! External consumers should depend on `calculator-sdk` and hold an
//! `Arc<dyn CalculatorClientV1>` obtained from [`client`].
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

use std::sync::Arc;

use calculator_sdk::CalculatorClientV1;

pub mod config;
pub mod domain;

pub use config::CalculatorConfig;

/// Build a calculator client backed by a fresh domain service.
#[must_use]
pub fn client(config: CalculatorConfig) -> Arc<dyn CalculatorClientV1> {
    let service = Arc::new(domain::Service::new(config));
    Arc::new(domain::CalculatorLocalClient::new(service))
}
