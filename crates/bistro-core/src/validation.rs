//! # Validation Module
//!
//! Input checks applied before a restaurant is built from outside data
//! (config files, environment variables).
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Deserialization (serde / toml)                               │
//! │  ├── Types: prices are unsigned integers, times are strings            │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── Names present and of sane length                                  │
//! │  ├── Times parse, opening before closing                               │
//! │  └── No duplicate menu entries                                         │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Restaurant                                                   │
//! │  └── Accepts anything; every operation but remove is total             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The [`Restaurant`](crate::Restaurant) itself never calls these: its API
//! accepts any input.

use std::collections::HashSet;

use crate::error::ValidationError;
use crate::hours::{parse_time_of_day, OperatingHours};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Maximum length of restaurant names, locations and item names.
pub const MAX_NAME_LEN: usize = 200;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a free-text field such as a restaurant name or location.
///
/// ## Rules
/// - Must not be empty or whitespace
/// - At most [`MAX_NAME_LEN`] characters
///
/// ## Example
/// ```rust
/// use bistro_core::validation::validate_text;
///
/// assert!(validate_text("location", "Chennai").is_ok());
/// assert!(validate_text("location", "  ").is_err());
/// ```
pub fn validate_text(field: &str, value: &str) -> ValidationResult<()> {
    let value = value.trim();

    if value.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if value.chars().count() > MAX_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max: MAX_NAME_LEN,
        });
    }

    Ok(())
}

/// Validates a menu item name.
pub fn validate_item_name(name: &str) -> ValidationResult<()> {
    validate_text("menu item name", name)
}

// =============================================================================
// Hours Validators
// =============================================================================

/// Parses and checks an opening/closing pair.
///
/// ## Rules
/// - Both must be `HH:MM:SS` (or `HH:MM`) 24-hour times
/// - Opening must be strictly before closing
///
/// ## Example
/// ```rust
/// use bistro_core::validation::validate_hours;
///
/// assert!(validate_hours("10:30:00", "22:00:00").is_ok());
/// assert!(validate_hours("22:00:00", "10:30:00").is_err());
/// ```
pub fn validate_hours(opening: &str, closing: &str) -> ValidationResult<OperatingHours> {
    let opening = parse_time_of_day(opening).map_err(|e| rename_field(e, "opening"))?;
    let closing = parse_time_of_day(closing).map_err(|e| rename_field(e, "closing"))?;

    let hours = OperatingHours::new(opening, closing);
    if !hours.is_well_formed() {
        return Err(ValidationError::InvalidRange {
            field: "hours".to_string(),
            reason: format!("opening {} must be before closing {}", opening, closing),
        });
    }

    Ok(hours)
}

fn rename_field(err: ValidationError, field: &str) -> ValidationError {
    match err {
        ValidationError::Required { .. } => ValidationError::Required {
            field: field.to_string(),
        },
        ValidationError::InvalidFormat { reason, .. } => ValidationError::InvalidFormat {
            field: field.to_string(),
            reason,
        },
        other => other,
    }
}

// =============================================================================
// Collection Validators
// =============================================================================

/// Validates a list of item names: each name valid, none repeated.
pub fn validate_unique_items<'a, I>(names: I) -> ValidationResult<()>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen = HashSet::new();

    for name in names {
        validate_item_name(name)?;
        if !seen.insert(name) {
            return Err(ValidationError::Duplicate {
                field: "menu item".to_string(),
                value: name.to_string(),
            });
        }
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
