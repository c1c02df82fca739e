//! Unified error types for the domain layer
//!
//! Expected game outcomes (unknown title, missing opponent, unrouteable text)
//! are NOT errors - they travel back to the player as messages. `DomainError`
//! is reserved for values that cannot be constructed and transitions the
//! context state machine does not declare.

use thiserror::Error;

use crate::value_objects::PlayerContext;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Validation failed (e.g., invalid field values)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Parse error (for value objects)
    #[error("Parse error: {0}")]
    Parse(String),

    /// State transition not allowed
    #[error("Invalid state transition: cannot {action} while in {from}")]
    InvalidStateTransition {
        from: PlayerContext,
        action: &'static str,
    },
}

impl DomainError {
    /// Creates a validation error for business rule violations.
    ///
    /// # Example
    /// ```ignore
    /// if max_hit_points <= 0 {
    ///     return Err(DomainError::validation("max_hit_points must be positive"));
    /// }
    /// ```
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Creates a parse error for string-to-type conversion failures.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    /// Create an invalid state transition error
    pub fn invalid_transition(from: PlayerContext, action: &'static str) -> Self {
        Self::InvalidStateTransition { from, action }
    }

    /// Check if this error came from the context state machine.
    pub fn is_invalid_transition(&self) -> bool {
        matches!(self, Self::InvalidStateTransition { .. })
    }
}
