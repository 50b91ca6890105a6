/// Core daemon implementation for the RisqMap monitoring service.
///
/// This module implements the main loop that:
/// 1. Polls the four upstream feeds on a fixed interval
/// 2. Fans the fetches out on a thread pool so one slow feed does not
///    delay the others
/// 3. Writes successful results into the shared snapshot store
/// 4. Recomputes the dashboard metrics and logs a one-line summary
///
/// A failed fetch degrades that feed only — the store keeps serving the
/// previous data, and `/health` shows the growing age.

use std::error::Error;
use std::sync::Arc;
use std::sync::mpsc;

use chrono::Utc;
use threadpool::ThreadPool;

use crate::config::ServiceConfig;
use crate::ingest::{alerts, pumps, usgs, weather};
use crate::metrics::dashboard;
use crate::model::FeedError;
use crate::monitor::SnapshotStore;
use crate::stations;

/// One worker per feed; the pool exists so a stalled feed cannot
/// serialize the others behind it.
const FEED_WORKERS: usize = 4;

/// The IV request period. One hour of readings is enough to always
/// contain the latest value while keeping responses small.
const IV_PERIOD: &str = "PT1H";

// ---------------------------------------------------------------------------
// Feed identification
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedKind {
    Gauges,
    Pumps,
    Alerts,
    Weather,
}

impl FeedKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FeedKind::Gauges => "gauges",
            FeedKind::Pumps => "pumps",
            FeedKind::Alerts => "alerts",
            FeedKind::Weather => "weather",
        }
    }
}

/// Outcome of one feed fetch: how many records landed in the store.
type FeedOutcome = (FeedKind, Result<usize, FeedError>);

// ---------------------------------------------------------------------------
// Daemon
// ---------------------------------------------------------------------------

pub struct Daemon {
    config: ServiceConfig,
    store: Arc<SnapshotStore>,
    pool: ThreadPool,
    client: reqwest::blocking::Client,
}

impl Daemon {
    pub fn new(config: ServiceConfig, store: Arc<SnapshotStore>) -> Self {
        Self {
            config,
            store,
            pool: ThreadPool::new(FEED_WORKERS),
            client: reqwest::blocking::Client::new(),
        }
    }

    /// Runs one poll of all four feeds in parallel, waiting for every
    /// worker before returning the per-feed outcomes.
    pub fn poll_once(&self) -> Vec<FeedOutcome> {
        let (tx, rx) = mpsc::channel::<FeedOutcome>();

        let gauge_url = usgs::build_iv_url(&stations::all_site_codes(), IV_PERIOD);
        self.spawn_fetch(FeedKind::Gauges, gauge_url, &tx);
        self.spawn_fetch(FeedKind::Pumps, self.config.feeds.pump_status_url.clone(), &tx);
        self.spawn_fetch(FeedKind::Alerts, self.config.feeds.flood_alert_url.clone(), &tx);
        self.spawn_fetch(FeedKind::Weather, self.config.feeds.weather_url.clone(), &tx);
        drop(tx);

        rx.iter().collect()
    }

    fn spawn_fetch(&self, kind: FeedKind, url: String, tx: &mpsc::Sender<FeedOutcome>) {
        let tx = tx.clone();
        let client = self.client.clone();
        let store = Arc::clone(&self.store);

        self.pool.execute(move || {
            let outcome = fetch_body(&client, &url).and_then(|body| {
                let now = Utc::now();
                match kind {
                    FeedKind::Gauges => usgs::parse_iv_response(&body).map(|posts| {
                        let count = posts.len();
                        store.update_posts(posts, now);
                        count
                    }),
                    FeedKind::Pumps => pumps::parse_pump_feed(&body).map(|records| {
                        let count = records.len();
                        store.update_pumps(records, now);
                        count
                    }),
                    FeedKind::Alerts => alerts::parse_alert_feed(&body).map(|records| {
                        let count = records.len();
                        store.update_alerts(records, now);
                        count
                    }),
                    FeedKind::Weather => weather::parse_weather_response(&body).map(|obs| {
                        store.update_weather(obs, now);
                        1
                    }),
                }
            });

            // The receiver only disappears on shutdown; nothing to do then.
            let _ = tx.send((kind, outcome));
        });
    }

    /// Main daemon loop (runs indefinitely).
    pub fn run(&self) -> Result<(), Box<dyn Error>> {
        println!("🚀 Starting daemon loop...");
        println!("   Poll interval: {} minutes", self.config.service.poll_interval_minutes);
        println!("   Monitoring {} gauge stations + 3 proxy feeds", stations::STATION_REGISTRY.len());

        loop {
            let start = Utc::now();

            let outcomes = self.poll_once();
            report_outcomes(&outcomes);

            let snapshot = self.store.snapshot();
            let metrics =
                dashboard::calculate(&snapshot.posts, &snapshot.pumps, &snapshot.alerts);
            println!(
                "   Dashboard: {} regions, {} active alerts, {} flood zones, {} people at risk",
                metrics.total_regions,
                metrics.active_alerts,
                metrics.flood_zones,
                metrics.people_at_risk
            );

            // Sleep until the next poll, compensating for fetch time.
            let elapsed = (Utc::now() - start).num_seconds();
            let sleep_seconds =
                (self.config.service.poll_interval_minutes * 60) as i64 - elapsed;

            if sleep_seconds > 0 {
                std::thread::sleep(std::time::Duration::from_secs(sleep_seconds as u64));
            }
        }
    }
}

/// Fetches a feed body, mapping transport and status failures into
/// `FeedError`.
fn fetch_body(client: &reqwest::blocking::Client, url: &str) -> Result<String, FeedError> {
    let response = client
        .get(url)
        .send()
        .map_err(|e| FeedError::RequestFailed(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(FeedError::HttpError(status.as_u16()));
    }

    response
        .text()
        .map_err(|e| FeedError::RequestFailed(e.to_string()))
}

fn report_outcomes(outcomes: &[FeedOutcome]) {
    let succeeded = outcomes.iter().filter(|(_, r)| r.is_ok()).count();
    println!("✓ Poll complete: {}/{} feeds updated", succeeded, outcomes.len());

    for (kind, outcome) in outcomes {
        match outcome {
            Ok(count) => println!("   {} - {} records", kind.as_str(), count),
            Err(e) => eprintln!("   {} - fetch failed: {}", kind.as_str(), e),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
