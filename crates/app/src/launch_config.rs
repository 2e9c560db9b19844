//! Launch-time overrides for the first building and headless modes.
//!
//! Native builds read `FLOORCRAFT_*` environment variables; the browser
//! build reads the page's query string (`?floors=3&bedrooms=2&columns=1`).
//! Bad values are logged and replaced by defaults.

use bevy::prelude::*;

use planner::config::{MAX_BEDROOMS, MAX_FLOORS, MIN_BEDROOMS, MIN_FLOORS};
use planner::request::{parse_count, BEDROOMS_FIELD, FLOORS_FIELD};
use planner::BuildRequest;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct LaunchConfig {
    pub request: BuildRequest,
    /// Render, save one screenshot to this path and exit.
    pub screenshot: Option<String>,
    /// Print the generated layout as JSON and exit without opening a window.
    pub print_layout: bool,
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

impl LaunchConfig {
    /// Builds the config from a key lookup. Keys are upper-case names
    /// without prefix: `FLOORS`, `BEDROOMS`, `COLUMNS`, `SCREENSHOT`,
    /// `PRINT_LAYOUT`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(raw) = lookup("FLOORS") {
            match parse_count(FLOORS_FIELD, &raw, MIN_FLOORS, MAX_FLOORS) {
                Ok(floors) => config.request.floors = floors,
                Err(err) => warn!("Ignoring floor override: {err}"),
            }
        }
        if let Some(raw) = lookup("BEDROOMS") {
            match parse_count(BEDROOMS_FIELD, &raw, MIN_BEDROOMS, MAX_BEDROOMS) {
                Ok(bedrooms) => config.request.bedrooms = bedrooms,
                Err(err) => warn!("Ignoring bedroom override: {err}"),
            }
        }
        if let Some(raw) = lookup("COLUMNS") {
            config.request.columns = parse_flag(&raw);
        }
        config.screenshot = lookup("SCREENSHOT").filter(|p| !p.trim().is_empty());
        config.print_layout = lookup("PRINT_LAYOUT").is_some_and(|v| parse_flag(&v));
        config
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::from_lookup(|key| std::env::var(format!("FLOORCRAFT_{key}")).ok())
    }

    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let params = web_sys::window()
            .and_then(|window| window.location().search().ok())
            .and_then(|search| web_sys::UrlSearchParams::new_with_str(&search).ok());
        Self::from_lookup(|key| {
            params
                .as_ref()
                .and_then(|p| p.get(&key.to_ascii_lowercase()))
        })
    }
}
