//! # bistro-core: Pure Domain Logic for Bistro
//!
//! A single restaurant: its opening hours, its menu, and the price of an
//! order placed against that menu. No I/O lives here.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Bistro Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    apps/bistro (binary)                         │   │
//! │  │    bistro.toml + env ──► BistroConfig ──► report / JSON         │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ bistro-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌────────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │ restaurant │  │   menu    │  │   hours   │  │   money   │  │   │
//! │  │   │ Restaurant │  │ MenuItem  │  │ Operating │  │   Money   │  │   │
//! │  │   │            │  │   Menu    │  │   Hours   │  │           │  │   │
//! │  │   └────────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   clock: the only path by which "now" gets in                   │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`restaurant`] - The Restaurant entity
//! - [`menu`] - Menu and MenuItem
//! - [`hours`] - Operating hours and time parsing
//! - [`clock`] - Clock trait, system and fixed clocks
//! - [`money`] - Money type with integer arithmetic
//! - [`error`] - Domain error types
//! - [`validation`] - Checks for externally supplied data
//!
//! ## Example Usage
//!
//! ```rust
//! use bistro_core::clock::FixedClock;
//! use bistro_core::hours::parse_time_of_day;
//! use bistro_core::{CoreError, Money, Restaurant};
//!
//! let t = |s| parse_time_of_day(s).unwrap();
//! let mut cafe = Restaurant::with_clock(
//!     "Amelie's cafe",
//!     "Chennai",
//!     t("10:30:00"),
//!     t("22:00:00"),
//!     FixedClock::at(t("08:00:00")),
//! );
//! assert!(!cafe.is_open());
//!
//! cafe.add_to_menu("Sweet corn soup", Money::new(119));
//! assert_eq!(
//!     cafe.remove_from_menu("French fries"),
//!     Err(CoreError::ItemNotFound("French fries".to_string()))
//! );
//! assert_eq!(cafe.calculate_order_total(["Sweet corn soup", "Non-existent item"]), Money::new(119));
//! ```

pub mod clock;
pub mod error;
pub mod hours;
pub mod menu;
pub mod money;
pub mod restaurant;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{CoreError, CoreResult, ValidationError};
pub use hours::OperatingHours;
pub use menu::{Menu, MenuItem};
pub use money::Money;
pub use restaurant::Restaurant;
