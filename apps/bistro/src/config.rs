//! # Restaurant Configuration
//!
//! Where the restaurant's identity, hours and starting menu come from.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     BISTRO_NAME, BISTRO_LOCATION, BISTRO_OPENING, BISTRO_CLOSING       │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     --config <path>, else $BISTRO_CONFIG, else                         │
//! │     ~/.config/bistro/bistro.toml (Linux)                               │
//! │     ~/Library/Application Support/com.bistro.bistro/bistro.toml (macOS)│
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     Amelie's cafe, Chennai, 10:30:00 - 22:00:00, empty menu            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! [restaurant]
//! name = "Amelie's cafe"
//! location = "Chennai"
//! opening = "10:30:00"
//! closing = "22:00:00"
//!
//! [[menu]]
//! name = "Sweet corn soup"
//! price = 119
//!
//! [[menu]]
//! name = "Vegetable lasagne"
//! price = 269
//! ```

use std::path::PathBuf;

use bistro_core::validation::{validate_hours, validate_text, validate_unique_items};
use bistro_core::{Money, OperatingHours, Restaurant};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::{AppError, AppResult};

/// Environment variable naming an explicit config file.
pub const CONFIG_PATH_ENV: &str = "BISTRO_CONFIG";

// =============================================================================
// Restaurant Settings
// =============================================================================

/// Identity and opening hours. Times stay strings until validation so a
/// bad value is reported with its field name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestaurantSettings {
    #[serde(default = "default_name")]
    pub name: String,

    #[serde(default = "default_location")]
    pub location: String,

    /// Opening time, `HH:MM:SS`.
    #[serde(default = "default_opening")]
    pub opening: String,

    /// Closing time, `HH:MM:SS`. Exclusive.
    #[serde(default = "default_closing")]
    pub closing: String,
}

fn default_name() -> String {
    "Amelie's cafe".to_string()
}

fn default_location() -> String {
    "Chennai".to_string()
}

fn default_opening() -> String {
    "10:30:00".to_string()
}

fn default_closing() -> String {
    "22:00:00".to_string()
}

impl Default for RestaurantSettings {
    fn default() -> Self {
        RestaurantSettings {
            name: default_name(),
            location: default_location(),
            opening: default_opening(),
            closing: default_closing(),
        }
    }
}

// =============================================================================
// Menu Entries
// =============================================================================

/// One `[[menu]]` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuEntry {
    pub name: String,
    pub price: Money,
}

// =============================================================================
// Main Configuration
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BistroConfig {
    #[serde(default)]
    pub restaurant: RestaurantSettings,

    /// Starting menu, in display order.
    #[serde(default)]
    pub menu: Vec<MenuEntry>,
}

impl BistroConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file
    /// 3. Environment variables
    ///
    /// An explicitly named file (argument or `$BISTRO_CONFIG`) must exist;
    /// the platform default file is optional. The result is not validated
    /// yet: [`build_restaurant`](Self::build_restaurant) does that once.
    pub fn load(config_path: Option<PathBuf>) -> AppResult<Self> {
        Self::load_with(config_path, |key| std::env::var(key).ok())
    }

    /// [`load`](Self::load) with `lookup` standing in for the process
    /// environment, for both `$BISTRO_CONFIG` and the overrides.
    pub fn load_with<F>(config_path: Option<PathBuf>, lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let explicit = config_path.or_else(|| lookup(CONFIG_PATH_ENV).map(PathBuf::from));

        let mut config = match explicit {
            Some(path) => {
                if !path.exists() {
                    return Err(AppError::ConfigNotFound(path));
                }
                Self::from_file(path)?
            }
            None => match Self::default_config_path() {
                Some(path) if path.exists() => Self::from_file(path)?,
                Some(path) => {
                    debug!(?path, "Config file not found, using defaults");
                    Self::default()
                }
                None => {
                    debug!("No config directory on this platform, using defaults");
                    Self::default()
                }
            },
        };

        config.apply_overrides(lookup);
        Ok(config)
    }

    fn from_file(path: PathBuf) -> AppResult<Self> {
        info!(?path, "Loading restaurant config from file");
        let contents = std::fs::read_to_string(&path)
            .map_err(|source| AppError::ConfigRead { path, source })?;
        Self::from_toml_str(&contents)
    }

    /// Parses a TOML document. Missing sections fall back to defaults.
    pub fn from_toml_str(contents: &str) -> AppResult<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Validates the configuration and returns the parsed hours.
    pub fn validate(&self) -> AppResult<OperatingHours> {
        validate_text("name", &self.restaurant.name)?;
        validate_text("location", &self.restaurant.location)?;
        let hours = validate_hours(&self.restaurant.opening, &self.restaurant.closing)?;
        validate_unique_items(self.menu.iter().map(|entry| entry.name.as_str()))?;

        Ok(hours)
    }

    /// Applies overrides from any key lookup; `lookup` stands in for the
    /// process environment.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let set = |key: &str, field: &mut String| {
            if let Some(value) = lookup(key) {
                if value.trim().is_empty() {
                    warn!(key, "Ignoring empty override from environment");
                    return;
                }
                debug!(key, value = %value, "Overriding config from environment");
                *field = value;
            }
        };

        set("BISTRO_NAME", &mut self.restaurant.name);
        set("BISTRO_LOCATION", &mut self.restaurant.location);
        set("BISTRO_OPENING", &mut self.restaurant.opening);
        set("BISTRO_CLOSING", &mut self.restaurant.closing);
    }

    /// Validates the configuration, then builds a restaurant with the
    /// configured menu, reading time from `clock`.
    ///
    /// This is the single place a loaded config gets validated.
    pub fn build_restaurant<C>(&self, clock: C) -> AppResult<Restaurant<C>> {
        let hours = self.validate()?;

        let mut restaurant = Restaurant::with_clock(
            self.restaurant.name.trim(),
            self.restaurant.location.trim(),
            hours.opening,
            hours.closing,
            clock,
        );
        for entry in &self.menu {
            restaurant.add_to_menu(entry.name.clone(), entry.price);
        }

        info!(
            name = restaurant.name(),
            items = restaurant.get_menu().len(),
            "Restaurant ready"
        );
        Ok(restaurant)
    }

    /// Returns the default config file path.
    pub fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "bistro", "bistro")
            .map(|dirs| dirs.config_dir().join("bistro.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bistro_core::FixedClock;
    use chrono::NaiveTime;
    use std::collections::HashMap;

    const SAMPLE: &str = r#"
        [restaurant]
        name = "Amelie's cafe"
        location = "Chennai"
        opening = "10:30:00"
        closing = "22:00:00"

        [[menu]]
        name = "Sweet corn soup"
        price = 119

        [[menu]]
        name = "Vegetable lasagne"
        price = 269
    "#;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    fn at(h: u32, m: u32) -> FixedClock {
        FixedClock::at(NaiveTime::from_hms_opt(h, m, 0).unwrap())
    }

    #[test]
    fn test_default_config() {
        let config = BistroConfig::default();
        assert_eq!(config.restaurant.name, "Amelie's cafe");
        assert_eq!(config.restaurant.opening, "10:30:00");
        assert!(config.menu.is_empty());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_sample() {
        let config = BistroConfig::from_toml_str(SAMPLE).unwrap();
        assert_eq!(config.menu.len(), 2);
        assert_eq!(config.menu[0].price, Money::new(119));
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let config = BistroConfig::from_toml_str("[restaurant]\nname = \"Dosa Corner\"\n").unwrap();
        assert_eq!(config.restaurant.name, "Dosa Corner");
        assert_eq!(config.restaurant.location, "Chennai");
        assert_eq!(config.restaurant.closing, "22:00:00");
    }

    #[test]
    fn test_negative_price_is_rejected_by_parser() {
        let doc = "[[menu]]\nname = \"Refund\"\nprice = -5\n";
        assert!(matches!(
            BistroConfig::from_toml_str(doc),
            Err(AppError::ConfigParse(_))
        ));
    }

    #[test]
    fn test_config_validation() {
        let mut config = BistroConfig::from_toml_str(SAMPLE).unwrap();
        assert!(config.validate().is_ok());

        config.restaurant.closing = "09:00:00".to_string();
        assert!(matches!(config.validate(), Err(AppError::Validation(_))));

        config.restaurant.closing = "22:00:00".to_string();
        config.menu.push(MenuEntry {
            name: "Sweet corn soup".to_string(),
            price: Money::new(99),
        });
        assert!(matches!(config.validate(), Err(AppError::Validation(_))));
    }

    #[test]
    fn test_overrides() {
        let env: HashMap<&str, &str> = [
            ("BISTRO_NAME", "Night Owl"),
            ("BISTRO_OPENING", "18:00:00"),
            ("BISTRO_LOCATION", "  "),
        ]
        .into_iter()
        .collect();

        let mut config = BistroConfig::default();
        config.apply_overrides(|key| env.get(key).map(|v| v.to_string()));

        assert_eq!(config.restaurant.name, "Night Owl");
        assert_eq!(config.restaurant.opening, "18:00:00");
        assert_eq!(config.restaurant.location, "Chennai");
        assert_eq!(config.restaurant.closing, "22:00:00");
    }

    #[test]
    fn test_build_restaurant() {
        let config = BistroConfig::from_toml_str(SAMPLE).unwrap();
        let cafe = config.build_restaurant(at(15, 0)).unwrap();

        assert!(cafe.is_open());
        assert_eq!(cafe.name(), "Amelie's cafe");
        let names: Vec<&str> = cafe.get_menu().iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, ["Sweet corn soup", "Vegetable lasagne"]);

        let closed = config.build_restaurant(at(22, 0)).unwrap();
        assert!(!closed.is_open());
    }

    #[test]
    fn test_load_explicit_missing_file() {
        let path = std::env::temp_dir().join("bistro-definitely-missing.toml");
        assert!(matches!(
            BistroConfig::load_with(Some(path), no_env),
            Err(AppError::ConfigNotFound(_))
        ));
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!("bistro-test-{}.toml", std::process::id()));
        std::fs::write(&path, SAMPLE).unwrap();

        let config = BistroConfig::load_with(Some(path.clone()), no_env);
        std::fs::remove_file(&path).unwrap();

        let config = config.unwrap();
        assert_eq!(config.menu.len(), 2);
        assert!(config.build_restaurant(at(15, 0)).is_ok());
    }

    #[test]
    fn test_load_ignores_process_environment() {
        let path = std::env::temp_dir().join(format!("bistro-env-{}.toml", std::process::id()));
        std::fs::write(&path, SAMPLE).unwrap();

        let env: HashMap<&str, &str> = [("BISTRO_OPENING", "23:00:00")].into_iter().collect();
        let overridden = BistroConfig::load_with(Some(path.clone()), |key| {
            env.get(key).map(|v| v.to_string())
        });
        let plain = BistroConfig::load_with(Some(path.clone()), no_env);
        std::fs::remove_file(&path).unwrap();

        // Only the supplied lookup is consulted.
        let overridden = overridden.unwrap();
        assert_eq!(overridden.restaurant.opening, "23:00:00");
        assert!(matches!(
            overridden.build_restaurant(at(15, 0)),
            Err(AppError::Validation(_))
        ));

        let plain = plain.unwrap();
        assert_eq!(plain.restaurant.opening, "10:30:00");
        assert!(plain.build_restaurant(at(15, 0)).unwrap().is_open());
    }

    #[test]
    fn test_config_path_from_lookup() {
        let env: HashMap<&str, &str> = [(CONFIG_PATH_ENV, "/nonexistent/bistro.toml")]
            .into_iter()
            .collect();
        let result = BistroConfig::load_with(None, |key| env.get(key).map(|v| v.to_string()));
        assert!(matches!(result, Err(AppError::ConfigNotFound(_))));
    }

    #[test]
    fn test_invalid_config_loads_but_does_not_build() {
        let path = std::env::temp_dir().join(format!("bistro-bad-{}.toml", std::process::id()));
        std::fs::write(&path, "[restaurant]\nopening = \"22:00:00\"\nclosing = \"10:30:00\"\n").unwrap();

        let config = BistroConfig::load_with(Some(path.clone()), no_env);
        std::fs::remove_file(&path).unwrap();

        let config = config.unwrap();
        assert!(matches!(
            config.build_restaurant(at(15, 0)),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn test_toml_serialization() {
        let config = BistroConfig::from_toml_str(SAMPLE).unwrap();
        let toml_str = toml::to_string_pretty(&config).unwrap();
        assert!(toml_str.contains("[restaurant]"));
        assert!(toml_str.contains("[[menu]]"));
        assert_eq!(BistroConfig::from_toml_str(&toml_str).unwrap(), config);
    }
}
