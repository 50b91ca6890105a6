/// Core data types for the RisqMap monitoring service.
///
/// This module defines the shared domain model imported by all other
/// modules. It contains no I/O and no business rules — only the value
/// types that flow between the ingest, classification, metrics, and
/// endpoint layers.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Measurement units
// ---------------------------------------------------------------------------

/// Unit of a gauge water-level reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LevelUnit {
    #[serde(rename = "m")]
    Meters,
    #[serde(rename = "ft")]
    Feet,
}

impl std::fmt::Display for LevelUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LevelUnit::Meters => write!(f, "m"),
            LevelUnit::Feet => write!(f, "ft"),
        }
    }
}

// ---------------------------------------------------------------------------
// Feed record types
// ---------------------------------------------------------------------------

/// A single gauge station observation, normalized from the USGS adapter.
///
/// `water_level` is a finite, non-negative number in the stated unit;
/// `timestamp` is ISO 8601 with offset, as delivered by the feed.
/// `status` is the severity code stamped by the water-level classifier
/// at the ingest boundary (`"normal"`, `"alert1"`, …); it is `None` for
/// records that bypassed classification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaterLevelPost {
    pub id: String,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub water_level: f64,
    pub unit: LevelUnit,
    pub timestamp: String,
    pub status: Option<String>,
}

/// A pump station record from the pump-status proxy.
///
/// `condition` is free text; classification is a case-insensitive
/// substring match over it, never an exact parse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PumpRecord {
    pub id: String,
    pub location: String,
    pub latitude: f64,
    pub longitude: f64,
    pub condition: String,
    pub updated_at: Timestamp,
}

/// Severity level of an official flood alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertLevel {
    Info,
    Warning,
    Danger,
    Critical,
}

impl AlertLevel {
    /// Display text as shown on the dashboard. The safe-zone
    /// classifier keys on this text, so `Danger` must appear in the
    /// danger and critical labels and nowhere else.
    pub fn label(&self) -> &'static str {
        match self {
            AlertLevel::Info => "Info",
            AlertLevel::Warning => "Warning",
            AlertLevel::Danger => "Danger",
            AlertLevel::Critical => "Critical Danger",
        }
    }
}

/// An official flood alert from the alert feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FloodAlert {
    pub id: String,
    pub level: AlertLevel,
    pub is_active: bool,
    #[serde(default)]
    pub affected_areas: Vec<String>,
    pub timestamp: String,
}

// ---------------------------------------------------------------------------
// Incident types
// ---------------------------------------------------------------------------

/// Lifecycle status of a reported incident.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IncidentStatus {
    Resolved,
    Ongoing,
    Monitoring,
}

/// A flood incident record — seeded from agency data or submitted as a
/// crowd-sourced report. Read-only once created; the chart aggregator
/// consumes these without mutating them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoricalIncident {
    pub id: u64,
    #[serde(rename = "type")]
    pub incident_type: String,
    pub location: String,
    pub date: String,
    pub description: String,
    /// Reported severity on a 1–10 scale.
    pub severity: u8,
    pub evacuees: Option<u32>,
    pub reported_losses: Option<f64>,
    pub status: IncidentStatus,
}

/// A crowd-sourced report as submitted over the API, before the service
/// assigns it an id and defaults. Distinct from `HistoricalIncident` so
/// clients cannot pick their own ids or backdate the record silently.
#[derive(Debug, Clone, Deserialize)]
pub struct NewIncidentReport {
    #[serde(rename = "type")]
    pub incident_type: String,
    pub location: String,
    pub date: Option<String>,
    pub description: String,
    pub severity: u8,
    pub evacuees: Option<u32>,
    pub reported_losses: Option<f64>,
    pub status: Option<IncidentStatus>,
}

impl NewIncidentReport {
    /// Checks the submission against the report form's rules.
    pub fn validate(&self) -> Result<(), String> {
        if self.location.trim().is_empty() {
            return Err("location must not be empty".to_string());
        }
        if !(1..=10).contains(&self.severity) {
            return Err(format!("severity must be 1-10, got {}", self.severity));
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Timestamps
// ---------------------------------------------------------------------------

/// A feed timestamp that may arrive as an ISO 8601 string or as epoch
/// seconds, depending on which upstream shape produced it. The two
/// shapes are distinguished once, here, instead of being probed at
/// every call site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Timestamp {
    Iso(String),
    Epoch(i64),
}

impl Timestamp {
    /// Parses into a UTC instant. Returns `None` for unparseable ISO
    /// strings or out-of-range epoch values; callers treat `None` as
    /// "not recent".
    pub fn parse_utc(&self) -> Option<chrono::DateTime<chrono::Utc>> {
        match self {
            Timestamp::Iso(s) => chrono::DateTime::parse_from_rfc3339(s)
                .ok()
                .map(|dt| dt.with_timezone(&chrono::Utc)),
            Timestamp::Epoch(secs) => chrono::DateTime::from_timestamp(*secs, 0),
        }
    }
}

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Errors that can arise when fetching or parsing an upstream feed.
#[derive(Debug, PartialEq)]
pub enum FeedError {
    /// The request never produced a response (DNS, connect, timeout).
    RequestFailed(String),
    /// Non-2xx HTTP response from the upstream service.
    HttpError(u16),
    /// The response body could not be deserialized.
    ParseError(String),
    /// The response parsed but contained no usable records
    /// (empty payload or all entries rejected).
    NoDataAvailable(String),
}

impl std::fmt::Display for FeedError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FeedError::RequestFailed(msg) => write!(f, "Request failed: {}", msg),
            FeedError::HttpError(code) => write!(f, "HTTP error: {}", code),
            FeedError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            FeedError::NoDataAvailable(what) => write!(f, "No data available: {}", what),
        }
    }
}

impl std::error::Error for FeedError {}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
