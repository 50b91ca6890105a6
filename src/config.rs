/// Service configuration loader - parses risqmap.toml
///
/// Separates deployment knobs from code, making it easy to repoint
/// feed URLs or adjust the poll cadence without recompiling. Secrets
/// and per-machine overrides come from `.env` via `dotenv`, so the
/// checked-in TOML never carries credentials.

use serde::Deserialize;
use std::env;
use std::fs;

/// Root configuration loaded from risqmap.toml.
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceConfig {
    pub service: ServiceSection,
    pub endpoint: EndpointSection,
    pub feeds: FeedsSection,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServiceSection {
    /// How often to poll the feeds (USGS updates every 15 minutes).
    pub poll_interval_minutes: u64,
    /// Window within which a station counts as actively reporting.
    pub freshness_window_days: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EndpointSection {
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FeedsSection {
    pub pump_status_url: String,
    pub flood_alert_url: String,
    pub weather_url: String,
}

/// Loads service configuration from risqmap.toml, applying any
/// `RISQMAP_*` overrides from the environment (a `.env` file is read
/// first if present).
///
/// # Panics
/// Panics if the configuration file is missing or malformed. This is
/// intentional — the service cannot operate without valid feed URLs,
/// and a loud failure at startup beats a daemon polling nothing.
///
/// # File Location
/// Expects `risqmap.toml` in the current working directory (project
/// root when running via `cargo run`).
pub fn load_config() -> ServiceConfig {
    dotenv::dotenv().ok();

    let config_path = "risqmap.toml";

    let contents = fs::read_to_string(config_path)
        .unwrap_or_else(|e| panic!("Failed to read {}: {}", config_path, e));

    let mut config: ServiceConfig = toml::from_str(&contents)
        .unwrap_or_else(|e| panic!("Failed to parse {}: {}", config_path, e));

    if let Ok(url) = env::var("RISQMAP_PUMP_STATUS_URL") {
        config.feeds.pump_status_url = url;
    }
    if let Ok(url) = env::var("RISQMAP_FLOOD_ALERT_URL") {
        config.feeds.flood_alert_url = url;
    }
    if let Ok(url) = env::var("RISQMAP_WEATHER_URL") {
        config.feeds.weather_url = url;
    }

    config
}
