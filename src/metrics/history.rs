/// Historical incident chart aggregation.
///
/// Buckets incident records by day or month and computes per-bucket
/// counts and averages for charting. Only observed dates appear in the
/// output — gaps are never zero-filled, so chart consumers must
/// tolerate missing buckets or pre-fill them.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;

use crate::model::{HistoricalIncident, IncidentStatus};

/// Bucket width for chart aggregation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartGranularity {
    Day,
    Month,
}

impl ChartGranularity {
    /// Parses the `granularity` query value. Unrecognized values return
    /// `None`; the endpoint maps that to a client error.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "day" => Some(ChartGranularity::Day),
            "month" => Some(ChartGranularity::Month),
            _ => None,
        }
    }
}

/// One chart bucket: either a calendar day or a calendar month.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartDataPoint {
    /// Bucket label: `YYYY-MM-DD` for days, `YYYY-MM` for months.
    pub name: String,
    pub incidents: usize,
    /// Mean reported severity across the bucket's incidents.
    pub severity: f64,
    pub resolved: usize,
    pub ongoing: usize,
    pub losses: f64,
}

#[derive(Default)]
struct BucketAccumulator {
    incidents: usize,
    severity_sum: f64,
    resolved: usize,
    ongoing: usize,
    losses: f64,
}

// ---------------------------------------------------------------------------
// Aggregation
// ---------------------------------------------------------------------------

/// Groups incidents into chart buckets, ascending by bucket date.
///
/// Incidents whose `date` cannot be parsed are silently skipped.
/// Incidents in `monitoring` status count toward `incidents` but to
/// neither `resolved` nor `ongoing`.
pub fn aggregate(
    incidents: &[HistoricalIncident],
    granularity: ChartGranularity,
) -> Vec<ChartDataPoint> {
    // Bucket labels are ISO-prefix formatted, so the BTreeMap's string
    // order is exactly chronological order for both granularities.
    let mut buckets: BTreeMap<String, BucketAccumulator> = BTreeMap::new();

    for incident in incidents {
        let Some(date) = parse_incident_date(&incident.date) else {
            continue;
        };

        let label = match granularity {
            ChartGranularity::Day => date.format("%Y-%m-%d").to_string(),
            ChartGranularity::Month => date.format("%Y-%m").to_string(),
        };

        let bucket = buckets.entry(label).or_default();
        bucket.incidents += 1;
        bucket.severity_sum += incident.severity as f64;
        match incident.status {
            IncidentStatus::Resolved => bucket.resolved += 1,
            IncidentStatus::Ongoing => bucket.ongoing += 1,
            IncidentStatus::Monitoring => {}
        }
        bucket.losses += incident.reported_losses.unwrap_or(0.0);
    }

    buckets
        .into_iter()
        .map(|(name, acc)| ChartDataPoint {
            name,
            severity: acc.severity_sum / acc.incidents as f64,
            incidents: acc.incidents,
            resolved: acc.resolved,
            ongoing: acc.ongoing,
            losses: acc.losses,
        })
        .collect()
}

/// Accepts either a full RFC 3339 timestamp or a plain `YYYY-MM-DD`
/// date, returning the calendar date in the timestamp's own offset.
fn parse_incident_date(raw: &str) -> Option<NaiveDate> {
    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
