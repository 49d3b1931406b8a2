//! # Operating Hours
//!
//! The half-open interval `[opening, closing)` during which a restaurant
//! takes orders.
//!
//! ## Boundary Rules
//! ```text
//!            opening                               closing
//!   ─────────────[■■■■■■■■■■■■■■■■■■■■■■■■■■■■■■■■■■■)──────────────►
//!   08:00 closed  10:30 open     15:00 open           22:00 closed
//! ```
//!
//! Hours never wrap past midnight: if `closing <= opening` the interval is
//! empty and the restaurant is never open.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::validation::ValidationResult;

/// Opening and closing time-of-day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperatingHours {
    pub opening: NaiveTime,
    pub closing: NaiveTime,
}

impl OperatingHours {
    pub const fn new(opening: NaiveTime, closing: NaiveTime) -> Self {
        OperatingHours { opening, closing }
    }

    /// Returns true iff `opening <= time < closing`.
    ///
    /// ```rust
    /// use bistro_core::hours::{parse_time_of_day, OperatingHours};
    ///
    /// let hours = OperatingHours::new(
    ///     parse_time_of_day("10:30:00").unwrap(),
    ///     parse_time_of_day("22:00:00").unwrap(),
    /// );
    /// assert!(hours.contains(parse_time_of_day("10:30:00").unwrap()));
    /// assert!(!hours.contains(parse_time_of_day("22:00:00").unwrap()));
    /// ```
    #[inline]
    pub fn contains(&self, time: NaiveTime) -> bool {
        self.opening <= time && time < self.closing
    }

    /// True when the interval holds at least one instant.
    #[inline]
    pub fn is_well_formed(&self) -> bool {
        self.opening < self.closing
    }
}

/// Parses a 24-hour time-of-day written `HH:MM:SS` (or `HH:MM`).
///
/// ## Example
/// ```rust
/// use bistro_core::hours::parse_time_of_day;
///
/// assert!(parse_time_of_day("10:30:00").is_ok());
/// assert!(parse_time_of_day("22:00").is_ok());
/// assert!(parse_time_of_day("25:00:00").is_err());
/// ```
pub fn parse_time_of_day(value: &str) -> ValidationResult<NaiveTime> {
    let value = value.trim();

    if value.is_empty() {
        return Err(ValidationError::Required {
            field: "time".to_string(),
        });
    }

    NaiveTime::parse_from_str(value, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M"))
        .map_err(|_| ValidationError::InvalidFormat {
            field: "time".to_string(),
            reason: format!("'{}' is not a 24-hour HH:MM:SS time", value),
        })
}
