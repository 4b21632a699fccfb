//! Domain layer for calculator module
//!
//! Contains the arithmetic and the in-process client.

pub mod error;
pub mod local_client;
pub mod service;

pub use error::DomainError;
pub use local_client::CalculatorLocalClient;
pub use service::Service;
