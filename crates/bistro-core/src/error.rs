//! # Error Types
//!
//! Domain-specific error types for bistro-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  bistro-core errors (this file)                                        │
//! │  ├── CoreError        - Menu removal failure (ItemNotFound)            │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  bistro app errors (separate crate)                                    │
//! │  └── AppError         - Config loading, I/O                            │
//! │                                                                         │
//! │  Flow: ValidationError → AppError → stderr                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Only one operation in the domain can actually fail:
//! removing an item that is not on the menu. Everything else is total.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Domain errors raised by [`Restaurant`](crate::Restaurant) operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// The named item is not on the menu.
    ///
    /// ## When This Occurs
    /// - `remove_from_menu` called with a name that was never added
    /// - The item was already removed
    ///
    /// The menu is left untouched when this is returned.
    #[error("Menu item not found: {0}")]
    ItemNotFound(String),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised when parsing times or checking configuration, before any
/// restaurant is built.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Invalid format (e.g., a time that is not HH:MM:SS).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Two values are in the wrong order (e.g., closing before opening).
    #[error("{field} is invalid: {reason}")]
    InvalidRange { field: String, reason: String },

    /// Duplicate value (e.g., the same menu item listed twice).
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_not_found_message() {
        let err = CoreError::ItemNotFound("French fries".to_string());
        assert_eq!(err.to_string(), "Menu item not found: French fries");
    }

    #[test]
    fn test_item_not_found_is_the_only_domain_error() {
        let err = CoreError::ItemNotFound("French fries".to_string());
        // Exhaustive: a new variant must be handled here.
        let name = match err {
            CoreError::ItemNotFound(name) => name,
        };
        assert_eq!(name, "French fries");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "name".to_string(),
        };
        assert_eq!(err.to_string(), "name is required");

        let err = ValidationError::Duplicate {
            field: "menu item".to_string(),
            value: "Sweet corn soup".to_string(),
        };
        assert_eq!(err.to_string(), "menu item 'Sweet corn soup' already exists");
    }
}
