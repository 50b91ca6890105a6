/// risqmap_service: flood monitoring, classification, and dashboard
/// metrics service.
///
/// # Module structure
///
/// ```text
/// risqmap_service
/// ├── model       — shared data types (WaterLevelPost, FloodAlert, FeedError, …)
/// ├── config      — service configuration loader (risqmap.toml + .env)
/// ├── stations    — USGS gauge station registry with display names and elevations
/// ├── classify
/// │   ├── water_level — gauge reading severity ladder
/// │   ├── pump        — free-text pump condition matching
/// │   └── safe_zone   — combined safety verdict with confidence
/// ├── metrics
/// │   ├── dashboard — headline counters over the raw feed arrays
/// │   └── history   — incident bucketing for charts
/// ├── ingest
/// │   ├── usgs    — USGS NWIS IV API: URL construction + JSON parsing
/// │   ├── pumps   — pump-status proxy feed parsing
/// │   ├── alerts  — flood-alert feed parsing
/// │   ├── weather — two-provider weather shape normalization
/// │   └── fixtures (test only) — representative feed payloads
/// ├── monitor     — in-memory snapshot store + incident log
/// ├── daemon      — main poll loop (thread-pooled feed collection)
/// └── endpoint    — JSON HTTP API for the dashboard frontend
/// ```

/// Public modules
pub mod classify;
pub mod config;
pub mod daemon;
pub mod endpoint;
pub mod ingest;
pub mod metrics;
pub mod model;
pub mod monitor;
pub mod stations;
