//! # Validation Module
//!
//! Input checks for the bill store.
//!
//! Amounts are deliberately NOT validated beyond numeric coercion (see
//! [`crate::format::try_parse_currency_input`]): zero and negative values
//! reach the calculator unchanged.
//!
//! ## Usage
//! ```rust
//! use tabsplit_core::validation::validate_person_name;
//!
//! assert_eq!(validate_person_name("  Alice ").unwrap(), "Alice");
//! assert!(validate_person_name(&"A".repeat(500)).is_err());
//! ```

use crate::error::ValidationError;
use crate::MAX_NAME_LENGTH;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validates a person's name.
///
/// ## Rules
/// - Surrounding whitespace is trimmed
/// - Empty is allowed (a person may stay unnamed while being edited)
/// - At most `MAX_NAME_LENGTH` characters
///
/// ## Returns
/// The trimmed name.
pub fn validate_person_name(name: &str) -> ValidationResult<String> {
    let name = name.trim();

    if name.chars().count() > MAX_NAME_LENGTH {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_NAME_LENGTH,
        });
    }

    Ok(name.to_string())
}

// =============================================================================
// Unit Tests
// =============================================================================
