/// HTTP endpoint for querying the monitoring state.
///
/// Provides a small JSON API for the dashboard frontend and external
/// tools to read derived data and submit incident reports.
///
/// Endpoints:
/// - GET  /health                  - Service liveness + per-feed ages
/// - GET  /dashboard               - Current dashboard metrics
/// - GET  /stations                - Stations with latest classified reading
/// - GET  /zones/safety            - Per-station safe-zone verdicts
/// - GET  /incidents               - The incident log
/// - GET  /incidents/chart         - Chart buckets (?granularity=day|month)
/// - POST /incidents               - Submit a crowd-sourced report

use std::io::Read;
use std::sync::Arc;

use chrono::Utc;
use serde::Serialize;

use crate::classify::{safe_zone, water_level};
use crate::metrics::dashboard;
use crate::metrics::history::{self, ChartGranularity};
use crate::model::{FloodAlert, LevelUnit, NewIncidentReport, WaterLevelPost};
use crate::monitor::SnapshotStore;
use crate::stations::{self, Station};

// ---------------------------------------------------------------------------
// Response Types
// ---------------------------------------------------------------------------

/// One station with its latest classified reading, if any.
#[derive(Debug, Serialize)]
pub struct StationReadingResponse {
    pub site_code: String,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub latest: Option<ReadingData>,
}

/// Latest reading data for JSON response.
#[derive(Debug, Serialize)]
pub struct ReadingData {
    pub water_level: f64,
    pub unit: LevelUnit,
    pub timestamp: String,
    pub status: String,
    pub color: String,
}

/// Safe-zone verdict for one station.
#[derive(Debug, Serialize)]
pub struct StationSafetyResponse {
    pub site_code: String,
    pub name: String,
    pub is_safe: bool,
    pub confidence: u8,
    pub reason: String,
}

// ---------------------------------------------------------------------------
// Derived views
// ---------------------------------------------------------------------------

/// Builds the per-station reading view from the latest posts.
pub fn station_readings(posts: &[WaterLevelPost]) -> Vec<StationReadingResponse> {
    stations::STATION_REGISTRY
        .iter()
        .map(|station| {
            let latest = posts.iter().find(|p| p.id == station.site_code).map(|post| {
                let classification = water_level::classify(post.water_level, post.unit);
                ReadingData {
                    water_level: post.water_level,
                    unit: post.unit,
                    timestamp: post.timestamp.clone(),
                    status: classification.status.to_string(),
                    color: classification.color.to_string(),
                }
            });

            StationReadingResponse {
                site_code: station.site_code.to_string(),
                name: station.name.to_string(),
                latitude: station.latitude,
                longitude: station.longitude,
                latest,
            }
        })
        .collect()
}

/// Evaluates the safe-zone classifier for every registered station
/// against the latest posts and active alerts.
pub fn station_safety(posts: &[WaterLevelPost], alerts: &[FloodAlert]) -> Vec<StationSafetyResponse> {
    stations::STATION_REGISTRY
        .iter()
        .map(|station| {
            let level_m = posts
                .iter()
                .find(|p| p.id == station.site_code)
                .map(|p| match p.unit {
                    LevelUnit::Meters => p.water_level,
                    LevelUnit::Feet => p.water_level * water_level::FT_TO_M,
                });

            let alert_text = active_alert_label(station, alerts);

            let verdict = safe_zone::classify(level_m, alert_text, station.elevation_m);

            StationSafetyResponse {
                site_code: station.site_code.to_string(),
                name: station.name.to_string(),
                is_safe: verdict.is_safe,
                confidence: verdict.confidence,
                reason: verdict.reason.to_string(),
            }
        })
        .collect()
}

/// The label of the most severe active alert naming the station's
/// region, if any.
fn active_alert_label(station: &Station, alerts: &[FloodAlert]) -> Option<&'static str> {
    let region = dashboard::region_token(station.name)?;

    alerts
        .iter()
        .filter(|a| a.is_active && a.affected_areas.iter().any(|area| area == region))
        .map(|a| a.level)
        .max_by_key(|level| *level as u8)
        .map(|level| level.label())
}

// ---------------------------------------------------------------------------
// HTTP Server
// ---------------------------------------------------------------------------

/// Starts the endpoint server on the specified port. Blocks the calling
/// thread; spawn it in the background.
pub fn start_endpoint_server(port: u16, store: Arc<SnapshotStore>) -> Result<(), String> {
    let server = tiny_http::Server::http(format!("0.0.0.0:{}", port))
        .map_err(|e| format!("Failed to start HTTP server: {}", e))?;

    println!("📡 HTTP endpoint listening on http://0.0.0.0:{}", port);

    for mut request in server.incoming_requests() {
        let url = request.url().to_string();
        let (path, query) = match url.split_once('?') {
            Some((p, q)) => (p, Some(q)),
            None => (url.as_str(), None),
        };

        let is_post = *request.method() == tiny_http::Method::Post;

        let response = match (is_post, path) {
            (false, "/health") => handle_health(&store),
            (false, "/dashboard") => handle_dashboard(&store),
            (false, "/stations") => handle_stations(&store),
            (false, "/zones/safety") => handle_safety(&store),
            (false, "/incidents") => handle_incidents(&store),
            (false, "/incidents/chart") => handle_chart(&store, query),
            (true, "/incidents") => handle_report(&store, &mut request),
            _ => create_response(
                404,
                serde_json::json!({
                    "error": "Not found",
                    "available_endpoints": [
                        "/health", "/dashboard", "/stations", "/zones/safety",
                        "/incidents", "/incidents/chart"
                    ]
                }),
            ),
        };

        if let Err(e) = request.respond(response) {
            eprintln!("Failed to send response: {}", e);
        }
    }

    Ok(())
}

type JsonResponse = tiny_http::Response<std::io::Cursor<Vec<u8>>>;

fn handle_health(store: &SnapshotStore) -> JsonResponse {
    create_response(
        200,
        serde_json::json!({
            "status": "ok",
            "service": "risqmap_service",
            "version": env!("CARGO_PKG_VERSION"),
            "feed_ages": store.feed_ages(Utc::now()),
        }),
    )
}

fn handle_dashboard(store: &SnapshotStore) -> JsonResponse {
    let snapshot = store.snapshot();
    let metrics = dashboard::calculate(&snapshot.posts, &snapshot.pumps, &snapshot.alerts);
    json_or_500(&metrics)
}

fn handle_stations(store: &SnapshotStore) -> JsonResponse {
    let snapshot = store.snapshot();
    json_or_500(&station_readings(&snapshot.posts))
}

fn handle_safety(store: &SnapshotStore) -> JsonResponse {
    let snapshot = store.snapshot();
    json_or_500(&station_safety(&snapshot.posts, &snapshot.alerts))
}

fn handle_incidents(store: &SnapshotStore) -> JsonResponse {
    json_or_500(&store.incidents())
}

fn handle_chart(store: &SnapshotStore, query: Option<&str>) -> JsonResponse {
    let granularity = match query_value(query, "granularity") {
        None => ChartGranularity::Month,
        Some(raw) => match ChartGranularity::parse(&raw) {
            Some(g) => g,
            None => {
                return create_response(
                    400,
                    serde_json::json!({
                        "error": format!("invalid granularity '{}'", raw),
                        "expected": ["day", "month"]
                    }),
                );
            }
        },
    };

    let points = history::aggregate(&store.incidents(), granularity);
    json_or_500(&points)
}

fn handle_report(store: &SnapshotStore, request: &mut tiny_http::Request) -> JsonResponse {
    let mut body = String::new();
    if request.as_reader().read_to_string(&mut body).is_err() {
        return create_response(400, serde_json::json!({ "error": "unreadable request body" }));
    }

    let report: NewIncidentReport = match serde_json::from_str(&body) {
        Ok(r) => r,
        Err(e) => {
            return create_response(
                400,
                serde_json::json!({ "error": format!("invalid report: {}", e) }),
            );
        }
    };

    if let Err(reason) = report.validate() {
        return create_response(400, serde_json::json!({ "error": reason }));
    }

    let incident = store.add_incident(report, Utc::now());
    match serde_json::to_value(&incident) {
        Ok(value) => create_response(201, value),
        Err(e) => create_response(500, serde_json::json!({ "error": e.to_string() })),
    }
}

/// Extracts one value from a query string, percent-decoded.
fn query_value(query: Option<&str>, key: &str) -> Option<String> {
    query?
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(k, _)| *k == key)
        .map(|(_, v)| urlencoding::decode(v).map(|c| c.into_owned()).unwrap_or_else(|_| v.to_string()))
}

fn json_or_500<T: Serialize>(value: &T) -> JsonResponse {
    match serde_json::to_value(value) {
        Ok(json) => create_response(200, json),
        Err(e) => create_response(500, serde_json::json!({ "error": e.to_string() })),
    }
}

/// Create HTTP response with JSON body.
fn create_response(status_code: u16, json: serde_json::Value) -> JsonResponse {
    let body = serde_json::to_string_pretty(&json).unwrap_or_else(|_| "{}".to_string());
    let bytes = body.into_bytes();

    tiny_http::Response::from_data(bytes)
        .with_status_code(tiny_http::StatusCode::from(status_code))
        .with_header(
            tiny_http::Header::from_bytes(&b"Content-Type"[..], &b"application/json"[..]).unwrap(),
        )
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
