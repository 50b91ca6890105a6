//! RisqMap Monitoring Service - Main Daemon
//!
//! A server-side daemon that continuously:
//! 1. Polls USGS gauges, the pump proxy, the alert feed, and weather
//! 2. Classifies readings into severity buckets
//! 3. Aggregates dashboard metrics and incident history
//! 4. Provides an HTTP endpoint for the dashboard frontend
//!
//! Usage:
//!   cargo run --release                    # Start daemon without HTTP endpoint
//!   cargo run --release -- --endpoint 8080 # Start with HTTP endpoint on port 8080
//!
//! Environment:
//!   RISQMAP_PUMP_STATUS_URL / RISQMAP_FLOOD_ALERT_URL / RISQMAP_WEATHER_URL
//!     - optional overrides for the feed URLs in risqmap.toml

use std::env;
use std::sync::Arc;

use risqmap_service::config;
use risqmap_service::daemon::Daemon;
use risqmap_service::endpoint;
use risqmap_service::monitor::SnapshotStore;
use risqmap_service::stations;

fn main() {
    println!("🌊 RisqMap Monitoring Service");
    println!("=============================\n");

    // Parse command-line arguments
    let args: Vec<String> = env::args().collect();
    let mut endpoint_port: Option<u16> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--endpoint" => {
                if i + 1 < args.len() {
                    endpoint_port = args[i + 1].parse().ok();
                    i += 2;
                } else {
                    eprintln!("Error: --endpoint requires a port number");
                    std::process::exit(1);
                }
            }
            _ => {
                eprintln!("Unknown argument: {}", args[i]);
                eprintln!("Usage: {} [--endpoint PORT]", args[0]);
                std::process::exit(1);
            }
        }
    }

    // Load configuration (panics with an actionable message if invalid)
    println!("📊 Loading configuration...");
    let service_config = config::load_config();
    println!("✓ Configuration loaded\n");

    let store = Arc::new(SnapshotStore::new());
    let daemon = Daemon::new(service_config.clone(), Arc::clone(&store));

    // Prime the snapshot so the endpoint has data from the first request
    println!("📥 Priming feeds ({} gauge stations + 3 proxies)...", stations::STATION_REGISTRY.len());
    for (kind, outcome) in daemon.poll_once() {
        match outcome {
            Ok(count) => println!("   ✓ {} - {} records", kind.as_str(), count),
            Err(e) => eprintln!("   ✗ {} - {}", kind.as_str(), e),
        }
    }
    println!();

    // Start the HTTP endpoint in a background thread. The flag wins
    // over the configured port when both are present.
    let port = endpoint_port.unwrap_or(service_config.endpoint.port);
    println!("🚀 Starting HTTP endpoint server...");
    let endpoint_store = Arc::clone(&store);
    std::thread::spawn(move || {
        if let Err(e) = endpoint::start_endpoint_server(port, endpoint_store) {
            eprintln!("❌ Endpoint server error: {}", e);
        }
    });
    println!("   Endpoint running on http://0.0.0.0:{}\n", port);

    // Run the main monitoring loop
    println!("🔄 Starting continuous monitoring loop...");
    println!("   Poll interval: {} minutes", service_config.service.poll_interval_minutes);
    println!("   Press Ctrl+C to stop\n");

    if let Err(e) = daemon.run() {
        eprintln!("\n❌ Daemon error: {}", e);
        std::process::exit(1);
    }
}
