/// Flood-alert feed client.
///
/// The alert feed publishes official advisories as a JSON array. Alert
/// levels form a closed set (info/warning/danger/critical); an entry
/// with an unrecognized level is skipped rather than failing the whole
/// feed, since the feed occasionally trials new level names before
/// they are agreed.

use crate::model::{FeedError, FloodAlert};

// ---------------------------------------------------------------------------
// Parsing
// ---------------------------------------------------------------------------

/// Parses the alert feed response into `FloodAlert`s.
///
/// Each entry is deserialized independently: one malformed entry (bad
/// level, missing field) drops that entry only.
///
/// # Errors
/// - `FeedError::ParseError` — the envelope itself is malformed.
/// - `FeedError::NoDataAvailable` — the feed parsed but no entry survived.
pub fn parse_alert_feed(json: &str) -> Result<Vec<FloodAlert>, FeedError> {
    let envelope: serde_json::Value = serde_json::from_str(json)
        .map_err(|e| FeedError::ParseError(format!("JSON deserialization failed: {}", e)))?;

    let entries = envelope
        .get("alerts")
        .and_then(|v| v.as_array())
        .ok_or_else(|| FeedError::ParseError("missing 'alerts' array".to_string()))?;

    let alerts: Vec<FloodAlert> = entries
        .iter()
        .filter_map(|entry| serde_json::from_value(entry.clone()).ok())
        .collect();

    if alerts.is_empty() {
        return Err(FeedError::NoDataAvailable(
            "alert feed contained no well-formed entries".to_string(),
        ));
    }

    Ok(alerts)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
