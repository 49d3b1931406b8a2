//! # bistro: Restaurant Report
//!
//! Loads a restaurant from config and reports on it.
//!
//! ## Usage
//! ```bash
//! # Is Amelie's open right now, and what is on the menu?
//! cargo run -p bistro
//!
//! # Price an order as if it were 15:00
//! cargo run -p bistro -- --at 15:00:00 "Sweet corn soup" "Vegetable lasagne"
//!
//! # Same, as JSON on stdout
//! cargo run -p bistro -- --config ./bistro.toml --json "Sweet corn soup"
//! ```
//!
//! ## Startup Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  1. init_tracing()        RUST_LOG or "info,bistro=debug", to stderr    │
//! │  2. CliArgs::parse()      --config, --at, --json, items                │
//! │  3. BistroConfig::load()  defaults, then file, then env                 │
//! │  4. build_restaurant()    validate; FixedClock if --at, else System     │
//! │  5. build_report()        open?, menu, order total                      │
//! │  6. print text or JSON to stdout                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod error;

use std::fmt;
use std::path::PathBuf;

use bistro_core::hours::parse_time_of_day;
use bistro_core::{Clock, FixedClock, MenuItem, Money, Restaurant, SystemClock};
use chrono::NaiveTime;
use serde::Serialize;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use crate::config::BistroConfig;
use crate::error::{AppError, AppResult};

// =============================================================================
// Command Line
// =============================================================================

/// Parsed command-line arguments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliArgs {
    /// `--config <path>`
    pub config: Option<PathBuf>,

    /// `--at HH:MM:SS`: pretend it is this time of day.
    pub at: Option<NaiveTime>,

    /// `--json`: print the report as JSON.
    pub json: bool,

    /// Remaining arguments: items to order.
    pub items: Vec<String>,
}

impl CliArgs {
    /// Parses arguments, excluding the program name.
    ///
    /// `--` ends option parsing so an item may start with a dash.
    pub fn parse<I>(args: I) -> AppResult<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut parsed = CliArgs::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--config" | "-c" => {
                    let path = args.next().ok_or_else(|| {
                        AppError::InvalidArgument(format!("{} needs a path", arg))
                    })?;
                    parsed.config = Some(PathBuf::from(path));
                }
                "--at" => {
                    let value = args.next().ok_or_else(|| {
                        AppError::InvalidArgument("--at needs a time (HH:MM:SS)".to_string())
                    })?;
                    parsed.at = Some(parse_time_of_day(&value)?);
                }
                "--json" => parsed.json = true,
                "--" => {
                    parsed.items.extend(args.by_ref());
                }
                other if other.starts_with('-') => {
                    return Err(AppError::InvalidArgument(format!(
                        "unknown option '{}'",
                        other
                    )));
                }
                item => parsed.items.push(item.to_string()),
            }
        }

        Ok(parsed)
    }
}

// =============================================================================
// Report
// =============================================================================

/// What the binary prints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub name: String,
    pub location: String,
    pub opening: NaiveTime,
    pub closing: NaiveTime,
    pub is_open: bool,
    pub menu: Vec<MenuItem>,
    pub order: Vec<String>,
    pub order_total: Money,
}

/// Collects the report for `restaurant` and the ordered `items`.
pub fn build_report<C: Clock>(restaurant: &Restaurant<C>, items: &[String]) -> Report {
    Report {
        name: restaurant.name().to_string(),
        location: restaurant.location().to_string(),
        opening: restaurant.opening_time(),
        closing: restaurant.closing_time(),
        is_open: restaurant.is_open(),
        menu: restaurant.get_menu().to_vec(),
        order: items.to_vec(),
        order_total: restaurant.calculate_order_total(items),
    }
}

/// Plain-text rendering.
impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = if self.is_open { "OPEN" } else { "CLOSED" };

        writeln!(f, "{} ({})", self.name, self.location)?;
        writeln!(f, "Hours: {} - {} [{}]", self.opening, self.closing, status)?;
        writeln!(f)?;

        if self.menu.is_empty() {
            writeln!(f, "Menu is empty")?;
        } else {
            writeln!(f, "Menu:")?;
            for item in &self.menu {
                writeln!(f, "  {:<30} {:>8}", item.name, item.price)?;
            }
        }

        if !self.order.is_empty() {
            writeln!(f)?;
            writeln!(f, "Order: {}", self.order.join(", "))?;
            writeln!(f, "Total: {}", self.order_total)?;
        }

        Ok(())
    }
}

// =============================================================================
// Entry Points
// =============================================================================

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=bistro_core=trace` - Show trace for the domain crate only
/// - Default: INFO, debug for bistro crates
///
/// Logs go to stderr so `--json` output stays machine-readable.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,bistro=debug,bistro_core=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Loads config, builds the restaurant and prints the report.
pub fn run(args: CliArgs) -> AppResult<()> {
    info!("Starting Bistro");
    debug!(?args, "Parsed arguments");

    let config = BistroConfig::load(args.config.clone())?;

    let report = match args.at {
        Some(time) => {
            info!(%time, "Using fixed clock");
            build_report(&config.build_restaurant(FixedClock::at(time))?, &args.items)
        }
        None => build_report(&config.build_restaurant(SystemClock)?, &args.items),
    };

    info!(
        open = report.is_open,
        total = %report.order_total,
        "Report ready"
    );

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", report);
    }

    Ok(())
}
