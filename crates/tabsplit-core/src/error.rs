//! # Error Types
//!
//! Domain-specific error types for tabsplit-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  tabsplit-core errors (this file)                                      │
//! │  ├── CoreError        - Bill store operation failures                  │
//! │  └── ValidationError  - Input coercion / validation failures           │
//! │                                                                         │
//! │  CLI errors (in app)                                                   │
//! │  └── ApiError         - What the user sees                             │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → terminal               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The split calculation itself cannot fail: division by a zero
//! food-and-drink total produces zero rates instead of an error.

use thiserror::Error;

use crate::types::BillId;

// =============================================================================
// Core Error
// =============================================================================

/// Bill store errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A command addressed a person that is not in the store.
    ///
    /// ## When This Occurs
    /// - The person was deleted
    /// - The id was never handed out
    /// - A reset cleared the store
    #[error("Person not found: {0}")]
    PersonNotFound(BillId),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Invalid format (text where an amount was expected).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::PersonNotFound(BillId::new(7));
        assert_eq!(err.to_string(), "Person not found: 7");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::TooLong {
            field: "name".to_string(),
            max: 80,
        };
        assert_eq!(err.to_string(), "name must be at most 80 characters");

        let err = ValidationError::InvalidFormat {
            field: "amount".to_string(),
            reason: "not a number".to_string(),
        };
        assert_eq!(err.to_string(), "amount has invalid format: not a number");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::TooLong {
            field: "name".to_string(),
            max: 80,
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
