//! Configuration for the calculator module.

use serde::Deserialize;

/// Module configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CalculatorConfig {
    /// Emit a `debug` event with the operands of every operation.
    pub trace_operations: bool,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            trace_operations: true,
        }
    }
}
