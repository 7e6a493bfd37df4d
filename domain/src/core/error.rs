//! Domain error types

use thiserror::Error;

/// Domain-level errors
///
/// Only caller-contract violations are errors. Missing fields, missing
/// parts and damaged parts are reported as findings instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl DomainError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        DomainError::InvalidInput(message.into())
    }

    /// Check if this error represents a caller-contract violation
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, DomainError::InvalidInput(_))
    }
}
