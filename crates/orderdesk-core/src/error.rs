//! # Error Types
//!
//! Validation error type for orderdesk-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  orderdesk-core errors (this file)                                     │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  orderdesk-db errors (separate crate)                                  │
//! │  └── DbError          - Store operation failures                       │
//! │                                                                         │
//! │  Flow: ValidationError → caller message   (before any store access)    │
//! │        DbError         → caller message   (after a store access)       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Every variant names the failing field
//! 3. Validation outcomes are values, never exceptions-as-control-flow

use thiserror::Error;

/// Input validation errors.
///
/// These errors occur when a record does not meet the field constraints.
/// Validation runs before any store interaction, so a failing rule has no
/// side effects. Checks are fail-fast: the first failing rule is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Field value is too short.
    #[error("{field} must be at least {min} characters")]
    TooShort { field: &'static str, min: usize },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: &'static str, max: usize },

    /// Invalid format (e.g., malformed email or phone number).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat {
        field: &'static str,
        reason: &'static str,
    },

    /// Value must be positive.
    #[error("{field} must be a positive integer")]
    MustBePositive { field: &'static str },

    /// Date lies in the future.
    #[error("{field} must not be in the future")]
    InFuture { field: &'static str },
}

impl ValidationError {
    /// Returns the name of the field that failed validation.
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::TooShort { field, .. }
            | ValidationError::TooLong { field, .. }
            | ValidationError::InvalidFormat { field, .. }
            | ValidationError::MustBePositive { field }
            | ValidationError::InFuture { field } => field,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ValidationError::TooShort {
            field: "name",
            min: 3,
        };
        assert_eq!(err.to_string(), "name must be at least 3 characters");

        let err = ValidationError::MustBePositive { field: "quantity" };
        assert_eq!(err.to_string(), "quantity must be a positive integer");
    }

    #[test]
    fn test_field_accessor() {
        let err = ValidationError::InvalidFormat {
            field: "email",
            reason: "must contain an @ sign",
        };
        assert_eq!(err.field(), "email");
    }
}
