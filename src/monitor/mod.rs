/// In-memory snapshot store shared by the polling loop and the HTTP
/// endpoint.
///
/// ## Architecture
///
/// The daemon writes the latest successful result for each feed here;
/// the endpoint reads whole snapshots out. Nothing is persisted — the
/// dashboard is a pure function of the latest feed data, and the
/// incident log lives only for the life of the process.
///
/// A failed poll leaves the previous feed data in place, so one feed
/// outage degrades that feed's freshness rather than blanking the
/// dashboard. Per-feed fetch times are kept so `/health` can report
/// how old each feed actually is.

use std::sync::Mutex;

use chrono::{DateTime, Utc};

use crate::ingest::weather::WeatherObservation;
use crate::model::{
    FloodAlert, HistoricalIncident, IncidentStatus, NewIncidentReport, PumpRecord, WaterLevelPost,
};

// ---------------------------------------------------------------------------
// Snapshot types
// ---------------------------------------------------------------------------

/// Latest data for all feeds, with per-feed fetch times.
#[derive(Debug, Clone, Default)]
pub struct FeedSnapshot {
    pub posts: Vec<WaterLevelPost>,
    pub pumps: Vec<PumpRecord>,
    pub alerts: Vec<FloodAlert>,
    pub weather: Option<WeatherObservation>,
    pub posts_fetched_at: Option<DateTime<Utc>>,
    pub pumps_fetched_at: Option<DateTime<Utc>>,
    pub alerts_fetched_at: Option<DateTime<Utc>>,
    pub weather_fetched_at: Option<DateTime<Utc>>,
}

/// Age of each feed in minutes, `None` where a feed has never been
/// fetched successfully.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct FeedAges {
    pub posts_minutes: Option<i64>,
    pub pumps_minutes: Option<i64>,
    pub alerts_minutes: Option<i64>,
    pub weather_minutes: Option<i64>,
}

struct Inner {
    snapshot: FeedSnapshot,
    incidents: Vec<HistoricalIncident>,
    next_incident_id: u64,
}

/// Shared store. Wrap in an `Arc` and hand clones to the daemon and
/// endpoint threads.
pub struct SnapshotStore {
    inner: Mutex<Inner>,
}

impl SnapshotStore {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                snapshot: FeedSnapshot::default(),
                incidents: Vec::new(),
                next_incident_id: 1,
            }),
        }
    }

    // --- Feed updates -------------------------------------------------------

    pub fn update_posts(&self, posts: Vec<WaterLevelPost>, fetched_at: DateTime<Utc>) {
        let mut inner = self.inner.lock().unwrap();
        inner.snapshot.posts = posts;
        inner.snapshot.posts_fetched_at = Some(fetched_at);
    }

    pub fn update_pumps(&self, pumps: Vec<PumpRecord>, fetched_at: DateTime<Utc>) {
        let mut inner = self.inner.lock().unwrap();
        inner.snapshot.pumps = pumps;
        inner.snapshot.pumps_fetched_at = Some(fetched_at);
    }

    pub fn update_alerts(&self, alerts: Vec<FloodAlert>, fetched_at: DateTime<Utc>) {
        let mut inner = self.inner.lock().unwrap();
        inner.snapshot.alerts = alerts;
        inner.snapshot.alerts_fetched_at = Some(fetched_at);
    }

    pub fn update_weather(&self, weather: WeatherObservation, fetched_at: DateTime<Utc>) {
        let mut inner = self.inner.lock().unwrap();
        inner.snapshot.weather = Some(weather);
        inner.snapshot.weather_fetched_at = Some(fetched_at);
    }

    // --- Reads --------------------------------------------------------------

    /// A consistent copy of the latest feed data.
    pub fn snapshot(&self) -> FeedSnapshot {
        self.inner.lock().unwrap().snapshot.clone()
    }

    /// Per-feed ages relative to `now`.
    pub fn feed_ages(&self, now: DateTime<Utc>) -> FeedAges {
        let inner = self.inner.lock().unwrap();
        let age = |t: Option<DateTime<Utc>>| t.map(|t| (now - t).num_minutes());
        FeedAges {
            posts_minutes: age(inner.snapshot.posts_fetched_at),
            pumps_minutes: age(inner.snapshot.pumps_fetched_at),
            alerts_minutes: age(inner.snapshot.alerts_fetched_at),
            weather_minutes: age(inner.snapshot.weather_fetched_at),
        }
    }

    // --- Incident log -------------------------------------------------------

    /// Accepts a validated report, assigns the next id, fills defaults,
    /// and appends it to the log. The submission date defaults to `now`;
    /// the status defaults to monitoring.
    pub fn add_incident(
        &self,
        report: NewIncidentReport,
        now: DateTime<Utc>,
    ) -> HistoricalIncident {
        let mut inner = self.inner.lock().unwrap();
        let id = inner.next_incident_id;
        inner.next_incident_id += 1;

        let incident = HistoricalIncident {
            id,
            incident_type: report.incident_type,
            location: report.location,
            date: report.date.unwrap_or_else(|| now.to_rfc3339()),
            description: report.description,
            severity: report.severity,
            evacuees: report.evacuees,
            reported_losses: report.reported_losses,
            status: report.status.unwrap_or(IncidentStatus::Monitoring),
        };

        inner.incidents.push(incident.clone());
        incident
    }

    /// The full incident log, oldest first.
    pub fn incidents(&self) -> Vec<HistoricalIncident> {
        self.inner.lock().unwrap().incidents.clone()
    }
}

impl Default for SnapshotStore {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
