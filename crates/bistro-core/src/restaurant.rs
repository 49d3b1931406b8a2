//! # Restaurant
//!
//! The restaurant entity: identity, operating hours and menu.
//!
//! ## Operations
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Restaurant Operations                              │
//! │                                                                         │
//! │  Operation                  Reads / Writes          Can Fail?           │
//! │  ─────────                  ──────────────          ─────────           │
//! │                                                                         │
//! │  is_open() ───────────────► clock + hours           no                  │
//! │                                                                         │
//! │  add_to_menu() ───────────► menu (insert/overwrite) no                  │
//! │                                                                         │
//! │  remove_from_menu() ──────► menu (remove)           ItemNotFound        │
//! │                                                                         │
//! │  get_menu() ──────────────► menu (read only)        no                  │
//! │                                                                         │
//! │  calculate_order_total() ─► menu (read only)        no                  │
//! │                                                                         │
//! │  NOTE: Not internally synchronized. Wrap in a Mutex to share.           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::NaiveTime;
use serde::Serialize;
use tracing::debug;

use crate::clock::{Clock, SystemClock};
use crate::error::{CoreError, CoreResult};
use crate::hours::OperatingHours;
use crate::menu::{Menu, MenuItem};
use crate::money::Money;

/// A single restaurant.
///
/// Name, location and hours are fixed at construction; the menu changes
/// freely afterwards. `C` is where [`is_open`](Restaurant::is_open) gets the
/// current time from.
#[derive(Debug, Clone, Serialize)]
pub struct Restaurant<C = SystemClock> {
    name: String,
    location: String,
    #[serde(flatten)]
    hours: OperatingHours,
    menu: Menu,
    #[serde(skip)]
    clock: C,
}

impl Restaurant<SystemClock> {
    /// Creates a restaurant with an empty menu that reads the local clock.
    pub fn new(
        name: impl Into<String>,
        location: impl Into<String>,
        opening_time: NaiveTime,
        closing_time: NaiveTime,
    ) -> Self {
        Self::with_clock(name, location, opening_time, closing_time, SystemClock)
    }
}

impl<C> Restaurant<C> {
    /// Creates a restaurant with an empty menu and the given clock.
    ///
    /// ## Example
    /// ```rust
    /// use bistro_core::clock::FixedClock;
    /// use bistro_core::hours::parse_time_of_day;
    /// use bistro_core::Restaurant;
    ///
    /// let t = |s| parse_time_of_day(s).unwrap();
    /// let cafe = Restaurant::with_clock(
    ///     "Amelie's cafe",
    ///     "Chennai",
    ///     t("10:30:00"),
    ///     t("22:00:00"),
    ///     FixedClock::at(t("15:00:00")),
    /// );
    /// assert!(cafe.is_open());
    /// ```
    pub fn with_clock(
        name: impl Into<String>,
        location: impl Into<String>,
        opening_time: NaiveTime,
        closing_time: NaiveTime,
        clock: C,
    ) -> Self {
        Restaurant {
            name: name.into(),
            location: location.into(),
            hours: OperatingHours::new(opening_time, closing_time),
            menu: Menu::new(),
            clock,
        }
    }

    // =========================================================================
    // Identity & Hours
    // =========================================================================

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn opening_time(&self) -> NaiveTime {
        self.hours.opening
    }

    pub fn closing_time(&self) -> NaiveTime {
        self.hours.closing
    }

    pub fn hours(&self) -> OperatingHours {
        self.hours
    }

    /// Whether the restaurant is open at `time`: `opening <= time < closing`.
    pub fn is_open_at(&self, time: NaiveTime) -> bool {
        self.hours.contains(time)
    }

    // =========================================================================
    // Menu
    // =========================================================================

    /// Adds an item to the menu.
    ///
    /// Adding a name that is already on the menu overwrites its price and
    /// keeps its position; the old price is returned.
    pub fn add_to_menu(&mut self, name: impl Into<String>, price: Money) -> Option<Money> {
        let name = name.into();
        debug!(item = %name, %price, "Adding item to menu");

        let previous = self.menu.insert(name, price);
        if let Some(old) = previous {
            debug!(old_price = %old, "Overwrote existing menu item");
        }
        previous
    }

    /// Removes an item from the menu and returns it.
    ///
    /// ## Errors
    /// [`CoreError::ItemNotFound`] if no item has that name. The menu is
    /// unchanged in that case.
    pub fn remove_from_menu(&mut self, name: &str) -> CoreResult<MenuItem> {
        match self.menu.remove(name) {
            Some(item) => {
                debug!(item = %item.name, "Removed item from menu");
                Ok(item)
            }
            None => {
                debug!(item = %name, "Cannot remove item that is not on the menu");
                Err(CoreError::ItemNotFound(name.to_string()))
            }
        }
    }

    /// Current menu entries in insertion order.
    pub fn get_menu(&self) -> &[MenuItem] {
        self.menu.items()
    }

    pub fn price_of(&self, name: &str) -> Option<Money> {
        self.menu.price_of(name)
    }

    // =========================================================================
    // Orders
    // =========================================================================

    /// Sums the menu price of every selected item.
    ///
    /// Each occurrence counts, so ordering the same dish twice pays for it
    /// twice. Names that are not on the menu are skipped.
    ///
    /// ## Example
    /// ```rust
    /// use bistro_core::hours::parse_time_of_day;
    /// use bistro_core::{Money, Restaurant};
    ///
    /// let t = |s| parse_time_of_day(s).unwrap();
    /// let mut cafe = Restaurant::new("Amelie's cafe", "Chennai", t("10:30"), t("22:00"));
    /// cafe.add_to_menu("Sweet corn soup", Money::new(119));
    /// cafe.add_to_menu("Vegetable lasagne", Money::new(269));
    ///
    /// let total = cafe.calculate_order_total(["Sweet corn soup", "Vegetable lasagne"]);
    /// assert_eq!(total, Money::new(388));
    /// ```
    pub fn calculate_order_total<I, S>(&self, selected_items: I) -> Money
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        selected_items
            .into_iter()
            .filter_map(|name| {
                let name = name.as_ref();
                let price = self.menu.price_of(name);
                if price.is_none() {
                    debug!(item = %name, "Skipping order item that is not on the menu");
                }
                price
            })
            .sum()
    }
}

impl<C: Clock> Restaurant<C> {
    /// Whether the restaurant is open right now, according to its clock.
    pub fn is_open(&self) -> bool {
        self.is_open_at(self.clock.now())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
