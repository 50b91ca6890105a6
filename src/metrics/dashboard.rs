/// Dashboard metrics aggregation.
///
/// Reduces the raw station, pump, and alert arrays into the five
/// headline counters shown on the monitoring dashboard. The five
/// sub-results are independent single-pass reductions; each is exposed
/// on its own so it can be tested in isolation with synthetic arrays.
///
/// Records with malformed timestamps or non-finite coordinates are
/// silently skipped — the aggregator never fails, it degrades to
/// undercounting.
///
/// # Clock injection
/// The recency count takes `now: DateTime<Utc>` rather than calling
/// `Utc::now()` internally, keeping it deterministic in tests. Use
/// `calculate` for the real-time wrapper.

use std::collections::HashSet;

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

use crate::model::{AlertLevel, FloodAlert, PumpRecord, WaterLevelPost};

/// Estimated residents represented by one station in an elevated state.
const PEOPLE_PER_STATION: f64 = 2_500.0;
/// Estimated residents represented by one alert-affected area.
const PEOPLE_PER_AREA: f64 = 3_500.0;
/// Window within which a station counts as actively reporting.
const REPORTING_WINDOW_DAYS: i64 = 7;

/// Headline dashboard counters, recomputed on every call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardMetrics {
    pub total_regions: usize,
    pub active_alerts: usize,
    pub flood_zones: usize,
    pub people_at_risk: u64,
    pub weather_stations: usize,
    /// RFC 3339 timestamp of this computation.
    pub last_update: String,
}

// ---------------------------------------------------------------------------
// Aggregation
// ---------------------------------------------------------------------------

/// Computes all dashboard metrics at a fixed instant.
pub fn calculate_at(
    posts: &[WaterLevelPost],
    pumps: &[PumpRecord],
    alerts: &[FloodAlert],
    now: DateTime<Utc>,
) -> DashboardMetrics {
    DashboardMetrics {
        total_regions: count_regions(posts, pumps),
        active_alerts: count_active_alerts(posts, alerts),
        flood_zones: count_flood_zones(posts, pumps),
        people_at_risk: estimate_people_at_risk(posts, alerts),
        weather_stations: count_reporting_stations(posts, pumps, now),
        last_update: now.to_rfc3339(),
    }
}

/// Real-time wrapper around `calculate_at`.
pub fn calculate(
    posts: &[WaterLevelPost],
    pumps: &[PumpRecord],
    alerts: &[FloodAlert],
) -> DashboardMetrics {
    calculate_at(posts, pumps, alerts, Utc::now())
}

// ---------------------------------------------------------------------------
// Sub-aggregations
// ---------------------------------------------------------------------------

/// Extracts the region token from a station display name: the text
/// after the first `@`, with leading whitespace trimmed. Names without
/// an `@` (or with nothing after it) contribute no token.
pub fn region_token(name: &str) -> Option<&str> {
    let (_, after) = name.split_once('@')?;
    let token = after.trim_start();
    if token.is_empty() { None } else { Some(token) }
}

/// Distinct regions across station names and pump locations.
pub fn count_regions(posts: &[WaterLevelPost], pumps: &[PumpRecord]) -> usize {
    let mut regions: HashSet<&str> = posts
        .iter()
        .filter_map(|p| region_token(&p.name))
        .collect();

    for pump in pumps {
        if !pump.location.is_empty() {
            regions.insert(pump.location.as_str());
        }
    }

    regions.len()
}

/// Active alert count: the larger of the station-status count and the
/// official active-alert count. The two sources overlap, so taking the
/// max avoids double counting while never under-reporting either.
pub fn count_active_alerts(posts: &[WaterLevelPost], alerts: &[FloodAlert]) -> usize {
    let elevated_stations = posts
        .iter()
        .filter(|p| {
            p.status.as_deref().map_or(false, |s| {
                let s = s.to_lowercase();
                s.contains("alert")
                    || s.contains("danger")
                    || s.contains("warning")
                    || s.contains("critical")
            })
        })
        .count();

    let official = alerts.iter().filter(|a| a.is_active).count();

    elevated_stations.max(official)
}

/// Distinct coarse grid cells (0.5° × 0.5°) covered by station and pump
/// coordinates. Non-finite coordinates are skipped.
pub fn count_flood_zones(posts: &[WaterLevelPost], pumps: &[PumpRecord]) -> usize {
    let mut cells: HashSet<(i64, i64)> = HashSet::new();

    let coords = posts
        .iter()
        .map(|p| (p.latitude, p.longitude))
        .chain(pumps.iter().map(|p| (p.latitude, p.longitude)));

    for (lat, lon) in coords {
        if lat.is_finite() && lon.is_finite() {
            cells.insert(((lat / 0.5).floor() as i64, (lon / 0.5).floor() as i64));
        }
    }

    cells.len()
}

/// Population-at-risk estimate.
///
/// Stations contribute by status bucket: danger/critical 3×, alert2 or
/// warning 2×, alert1/alert3 1×, each × 2,500. Active alerts contribute
/// `affected_areas × 3,500`, weighted 2× for critical and 1.5× for
/// danger. The result is rounded to whole people.
pub fn estimate_people_at_risk(posts: &[WaterLevelPost], alerts: &[FloodAlert]) -> u64 {
    let station_total: f64 = posts
        .iter()
        .map(|p| {
            let status = p.status.as_deref().unwrap_or("").to_lowercase();
            let multiplier = if status.contains("danger") || status.contains("critical") {
                3.0
            } else if status.contains("alert2") || status.contains("warning") {
                2.0
            } else if status.contains("alert1") || status.contains("alert3") {
                1.0
            } else {
                0.0
            };
            multiplier * PEOPLE_PER_STATION
        })
        .sum();

    let alert_total: f64 = alerts
        .iter()
        .filter(|a| a.is_active)
        .map(|a| {
            let weight = match a.level {
                AlertLevel::Critical => 2.0,
                AlertLevel::Danger => 1.5,
                AlertLevel::Warning | AlertLevel::Info => 1.0,
            };
            a.affected_areas.len() as f64 * PEOPLE_PER_AREA * weight
        })
        .sum();

    (station_total + alert_total).round() as u64
}

/// Stations and pumps that reported within the last seven days of
/// `now`. Unparseable timestamps count as not reporting.
pub fn count_reporting_stations(
    posts: &[WaterLevelPost],
    pumps: &[PumpRecord],
    now: DateTime<Utc>,
) -> usize {
    let cutoff = now - Duration::days(REPORTING_WINDOW_DAYS);

    let recent_posts = posts
        .iter()
        .filter(|p| {
            DateTime::parse_from_rfc3339(&p.timestamp)
                .map(|dt| dt.with_timezone(&Utc) >= cutoff)
                .unwrap_or(false)
        })
        .count();

    let recent_pumps = pumps
        .iter()
        .filter(|p| p.updated_at.parse_utc().map_or(false, |dt| dt >= cutoff))
        .count();

    recent_posts + recent_pumps
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
