//! # Menu
//!
//! An insertion-ordered list of uniquely named items.
//!
//! ## Menu Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Menu Operations                                 │
//! │                                                                         │
//! │  insert("Sweet corn soup", 119)                                        │
//! │      ├── name absent  ──► items.push(item)            size + 1          │
//! │      └── name present ──► items[i].price = 119        size unchanged    │
//! │                                                                         │
//! │  remove("Vegetable lasagne")                                           │
//! │      ├── name present ──► items.remove(i)             size - 1          │
//! │      └── name absent  ──► None                        size unchanged    │
//! │                                                                         │
//! │  items()  ──► &[MenuItem] in the order they were first added            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A restaurant menu holds tens of items, so lookups are a linear scan
//! over a `Vec`, which also keeps display order for free.

use serde::{Deserialize, Serialize};

use crate::money::Money;

// =============================================================================
// Menu Item
// =============================================================================

/// A dish and its price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    /// Display name; unique within a menu.
    pub name: String,

    /// Price in whole currency units.
    pub price: Money,
}

impl MenuItem {
    pub fn new(name: impl Into<String>, price: Money) -> Self {
        MenuItem {
            name: name.into(),
            price,
        }
    }
}

// =============================================================================
// Menu
// =============================================================================

/// The items a restaurant sells.
///
/// ## Invariants
/// - Item names are unique (inserting an existing name overwrites its price)
/// - Items keep the position they were first inserted at
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Menu {
    items: Vec<MenuItem>,
}

impl Menu {
    /// Creates an empty menu.
    pub fn new() -> Self {
        Menu { items: Vec::new() }
    }

    /// Adds an item, or replaces the price of an item with the same name.
    ///
    /// Returns the previous price when an existing item was overwritten.
    pub fn insert(&mut self, name: impl Into<String>, price: Money) -> Option<Money> {
        let name = name.into();

        if let Some(item) = self.items.iter_mut().find(|i| i.name == name) {
            return Some(std::mem::replace(&mut item.price, price));
        }

        self.items.push(MenuItem { name, price });
        None
    }

    /// Removes the named item, returning it if it was present.
    pub fn remove(&mut self, name: &str) -> Option<MenuItem> {
        let index = self.position(name)?;
        Some(self.items.remove(index))
    }

    /// Looks up an item by name.
    pub fn get(&self, name: &str) -> Option<&MenuItem> {
        self.items.iter().find(|i| i.name == name)
    }

    /// Returns the price of the named item.
    #[inline]
    pub fn price_of(&self, name: &str) -> Option<Money> {
        self.get(name).map(|i| i.price)
    }

    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// All items in insertion order.
    #[inline]
    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.items.iter().position(|i| i.name == name)
    }
}

impl<N: Into<String>> FromIterator<(N, Money)> for Menu {
    fn from_iter<I: IntoIterator<Item = (N, Money)>>(iter: I) -> Self {
        let mut menu = Menu::new();
        for (name, price) in iter {
            menu.insert(name, price);
        }
        menu
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_menu() -> Menu {
        [
            ("Sweet corn soup", Money::new(119)),
            ("Vegetable lasagne", Money::new(269)),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_insert_new_item_appends() {
        let mut menu = sample_menu();
        assert_eq!(menu.insert("Sizzling brownie", Money::new(319)), None);
        assert_eq!(menu.len(), 3);
        assert_eq!(menu.items()[2].name, "Sizzling brownie");
    }

    #[test]
    fn test_insert_existing_item_overwrites_in_place() {
        let mut menu = sample_menu();
        let previous = menu.insert("Sweet corn soup", Money::new(129));

        assert_eq!(previous, Some(Money::new(119)));
        assert_eq!(menu.len(), 2);
        assert_eq!(menu.items()[0], MenuItem::new("Sweet corn soup", Money::new(129)));
    }

    #[test]
    fn test_remove() {
        let mut menu = sample_menu();
        let removed = menu.remove("Sweet corn soup").unwrap();
        assert_eq!(removed.price, Money::new(119));
        assert_eq!(menu.len(), 1);
        assert!(!menu.contains("Sweet corn soup"));

        assert!(menu.remove("Sweet corn soup").is_none());
        assert_eq!(menu.len(), 1);
    }

    #[test]
    fn test_get() {
        let menu = sample_menu();
        assert_eq!(
            menu.get("Sweet corn soup"),
            Some(&MenuItem::new("Sweet corn soup", Money::new(119)))
        );
        assert!(menu.get("French fries").is_none());
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let menu = sample_menu();
        assert_eq!(menu.price_of("Vegetable lasagne"), Some(Money::new(269)));
        assert_eq!(menu.price_of("vegetable lasagne"), None);
    }

    #[test]
    fn test_serializes_as_list() {
        let json = serde_json::to_value(sample_menu()).unwrap();
        assert_eq!(
            json,
            serde_json::json!([
                { "name": "Sweet corn soup", "price": 119 },
                { "name": "Vegetable lasagne", "price": 269 }
            ])
        );
    }
}
