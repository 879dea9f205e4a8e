//! Error taxonomy shared by every modeling operation
//!
//! All errors are recoverable: a failed command leaves the registry and the
//! session exactly as they were.

use thiserror::Error;
use uuid::Uuid;

/// Error type for modeling operations
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CadError {
    /// A numeric parameter was non-finite, zero or negative (or otherwise out of range)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The operation does not support the target body's geometry
    #[error("Unsupported geometry: {0}")]
    UnsupportedGeometry(String),

    /// Nothing to operate on (no profiles to extrude, no bodies to export)
    #[error("Empty model: {0}")]
    EmptyModel(String),

    /// A body id was not present in the registry
    #[error("Body not found: {0}")]
    NotFound(Uuid),

    /// The command is not accepted in the current session state
    #[error("Command {command} not accepted while {state}")]
    InvalidTransition {
        /// Name of the rejected command
        command: &'static str,
        /// Name of the session state at the time of the command
        state: &'static str,
    },
}

/// Result type for modeling operations
pub type CadResult<T> = Result<T, CadError>;

/// Ensure `value` is finite and strictly positive
pub fn require_positive(name: &str, value: f32) -> CadResult<f32> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(CadError::InvalidInput(format!(
            "{name} must be a finite positive number, got {value}"
        )))
    }
}
