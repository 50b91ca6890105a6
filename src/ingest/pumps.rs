/// Pump-status proxy client.
///
/// The proxy aggregates municipal pump telemetry into one JSON feed.
/// Field coverage is uneven across municipalities: some omit
/// coordinates, some send `updated_at` as epoch seconds instead of ISO
/// strings. Entries missing required fields are dropped; the rest
/// survive, so one bad municipality cannot blank the whole feed.

use serde::Deserialize;

use crate::model::{FeedError, PumpRecord, Timestamp};

// ---------------------------------------------------------------------------
// Serde structures
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
struct PumpFeedResponse {
    pumps: Vec<RawPumpEntry>,
}

/// A feed entry before completeness checking. Everything is optional
/// here; normalization decides what survives.
#[derive(Deserialize)]
struct RawPumpEntry {
    id: Option<String>,
    location: Option<String>,
    latitude: Option<f64>,
    longitude: Option<f64>,
    condition: Option<String>,
    updated_at: Option<Timestamp>,
}

// ---------------------------------------------------------------------------
// Parsing
// ---------------------------------------------------------------------------

/// Parses the pump-status proxy response into `PumpRecord`s.
///
/// An entry survives only if it carries an id, a location, both
/// coordinates, and an update timestamp. A missing `condition` becomes
/// the empty string — the classifier reads that as offline, which is
/// the correct read for a pump that stopped reporting its state.
///
/// # Errors
/// - `FeedError::ParseError` — the envelope itself is malformed.
/// - `FeedError::NoDataAvailable` — the feed parsed but no entry survived.
pub fn parse_pump_feed(json: &str) -> Result<Vec<PumpRecord>, FeedError> {
    let response: PumpFeedResponse = serde_json::from_str(json)
        .map_err(|e| FeedError::ParseError(format!("JSON deserialization failed: {}", e)))?;

    let records: Vec<PumpRecord> = response
        .pumps
        .into_iter()
        .filter_map(|entry| {
            Some(PumpRecord {
                id: entry.id?,
                location: entry.location?,
                latitude: entry.latitude?,
                longitude: entry.longitude?,
                condition: entry.condition.unwrap_or_default(),
                updated_at: entry.updated_at?,
            })
        })
        .collect();

    if records.is_empty() {
        return Err(FeedError::NoDataAvailable(
            "pump feed contained no complete entries".to_string(),
        ));
    }

    Ok(records)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ingest::fixtures::*;

    #[test]
    fn test_parse_complete_entries() {
        let pumps = parse_pump_feed(fixture_pump_feed_json()).expect("fixture should parse");
        assert_eq!(pumps.len(), 3);

        let trenton = pumps.iter().find(|p| p.id == "P-TRN-01").expect("Trenton pump");
        assert_eq!(trenton.location, "Trenton");
        assert_eq!(trenton.condition, "Currently Operating");
    }

    #[test]
    fn test_parse_accepts_epoch_timestamps() {
        let pumps = parse_pump_feed(fixture_pump_feed_json()).expect("fixture should parse");
        let camden = pumps.iter().find(|p| p.id == "P-CMD-02").expect("Camden pump");
        assert_eq!(camden.updated_at, Timestamp::Epoch(1_714_561_200));
        assert!(camden.updated_at.parse_utc().is_some());
    }

    #[test]
    fn test_parse_drops_incomplete_entries() {
        // The fixture carries one entry with no coordinates; it must
        // not survive into the records.
        let pumps = parse_pump_feed(fixture_pump_feed_json()).expect("fixture should parse");
        assert!(pumps.iter().all(|p| p.id != "P-BAD-99"));
    }

    #[test]
    fn test_parse_missing_condition_becomes_empty_string() {
        let pumps = parse_pump_feed(fixture_pump_feed_json()).expect("fixture should parse");
        let silent = pumps.iter().find(|p| p.id == "P-EWG-03").expect("Ewing pump");
        assert_eq!(silent.condition, "");
    }

    #[test]
    fn test_parse_all_incomplete_yields_no_data() {
        let json = r#"{ "pumps": [ { "id": "P-LONE-01" } ] }"#;
        assert!(matches!(
            parse_pump_feed(json),
            Err(FeedError::NoDataAvailable(_))
        ));
    }

    #[test]
    fn test_parse_malformed_envelope_is_parse_error() {
        assert!(matches!(
            parse_pump_feed(r#"{"pumps": 7}"#),
            Err(FeedError::ParseError(_))
        ));
    }
}
