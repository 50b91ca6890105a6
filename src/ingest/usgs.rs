/// USGS NWIS Instantaneous Values (IV) API client.
///
/// Handles URL construction and JSON response parsing for the USGS
/// Water Services IV endpoint:
///   https://waterservices.usgs.gov/nwis/iv/
///
/// The IV service returns WaterML rendered as JSON. See `fixtures.rs`
/// for annotated examples of the response structure. Parsing produces
/// `WaterLevelPost`s: one per gauge-height series, carrying the
/// station's coordinates and a severity status stamped by the
/// water-level classifier at this boundary.

use serde::Deserialize;

use crate::classify::water_level;
use crate::model::{FeedError, LevelUnit, WaterLevelPost};
use crate::stations;

// ---------------------------------------------------------------------------
// Serde structures for WaterML JSON deserialization
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
struct IvResponse {
    value: ValueWrapper,
}

#[derive(Deserialize)]
struct ValueWrapper {
    #[serde(rename = "timeSeries")]
    time_series: Vec<TimeSeries>,
}

#[derive(Deserialize)]
struct TimeSeries {
    #[serde(rename = "sourceInfo")]
    source_info: SourceInfo,
    variable: Variable,
    values: Vec<Values>,
}

#[derive(Deserialize)]
struct SourceInfo {
    #[serde(rename = "siteName")]
    site_name: String,
    #[serde(rename = "siteCode")]
    site_code: Vec<SiteCode>,
    #[serde(rename = "geoLocation")]
    geo_location: GeoLocation,
}

#[derive(Deserialize)]
struct SiteCode {
    value: String,
}

#[derive(Deserialize)]
struct GeoLocation {
    #[serde(rename = "geogLocation")]
    geog_location: GeogLocation,
}

#[derive(Deserialize)]
struct GeogLocation {
    latitude: f64,
    longitude: f64,
}

#[derive(Deserialize)]
struct Variable {
    unit: Unit,
    #[serde(rename = "noDataValue")]
    no_data_value: f64,
}

#[derive(Deserialize)]
struct Unit {
    #[serde(rename = "unitCode")]
    unit_code: String,
}

#[derive(Deserialize)]
struct Values {
    value: Vec<ValueEntry>,
}

#[derive(Deserialize)]
struct ValueEntry {
    value: String, // USGS returns measurements as strings!
    #[serde(rename = "dateTime")]
    date_time: String,
}

// ---------------------------------------------------------------------------
// URL construction
// ---------------------------------------------------------------------------

const IV_BASE_URL: &str = "https://waterservices.usgs.gov/nwis/iv/";

/// USGS parameter code for gage height (stage), in feet.
pub const PARAM_STAGE: &str = "00065";

/// Builds a USGS IV API URL for the given site codes and ISO 8601
/// period (e.g. `"PT1H"` for the past hour). The URL always requests
/// gage height as JSON and filters to active sites only.
pub fn build_iv_url(sites: &[&str], period: &str) -> String {
    format!(
        "{}?sites={}&parameterCd={}&period={}&format=json&siteStatus=active",
        IV_BASE_URL,
        sites.join(","),
        PARAM_STAGE,
        period
    )
}

// ---------------------------------------------------------------------------
// Response parsing
// ---------------------------------------------------------------------------

/// Parses a USGS IV API JSON response body into `WaterLevelPost`s, one
/// per gauge-height series that contains valid data.
///
/// Per series, the most recent value wins. Series with an empty value
/// array, the USGS sentinel (`-999999`), or a unit other than feet or
/// meters are skipped. Registered stations get their dashboard display
/// name; unregistered ones keep the feed's site name. Every surviving
/// post carries a classifier-stamped `status`.
///
/// # Errors
/// - `FeedError::ParseError` — malformed or unexpected JSON structure.
/// - `FeedError::NoDataAvailable` — no series produced a usable post.
pub fn parse_iv_response(json: &str) -> Result<Vec<WaterLevelPost>, FeedError> {
    let response: IvResponse = serde_json::from_str(json)
        .map_err(|e| FeedError::ParseError(format!("JSON deserialization failed: {}", e)))?;

    if response.value.time_series.is_empty() {
        return Err(FeedError::NoDataAvailable(
            "No timeSeries entries in response".to_string(),
        ));
    }

    let mut posts = Vec::new();

    for series in response.value.time_series {
        let site_code = series
            .source_info
            .site_code
            .first()
            .ok_or_else(|| FeedError::ParseError("Missing siteCode".to_string()))?
            .value
            .clone();

        let unit = match series.variable.unit.unit_code.as_str() {
            "ft" => LevelUnit::Feet,
            "m" => LevelUnit::Meters,
            _ => continue, // discharge and other parameters are not posts
        };

        let no_data_value = series.variable.no_data_value;

        let Some(values_wrapper) = series.values.first() else {
            continue;
        };

        // Most recent value: last entry in the chronologically sorted array.
        let Some(latest) = values_wrapper.value.last() else {
            continue;
        };

        let value: f64 = latest.value.parse().map_err(|e| {
            FeedError::ParseError(format!("Failed to parse value '{}': {}", latest.value, e))
        })?;

        if (value - no_data_value).abs() < 0.1 {
            continue;
        }

        let name = stations::display_name(&site_code)
            .map(str::to_string)
            .unwrap_or_else(|| series.source_info.site_name.clone());

        let status = water_level::classify(value, unit).status.to_string();

        posts.push(WaterLevelPost {
            id: site_code,
            name,
            latitude: series.source_info.geo_location.geog_location.latitude,
            longitude: series.source_info.geo_location.geog_location.longitude,
            water_level: value,
            unit,
            timestamp: latest.date_time.clone(),
            status: Some(status),
        });
    }

    if posts.is_empty() {
        return Err(FeedError::NoDataAvailable(
            "All timeSeries entries were empty or contained sentinel values".to_string(),
        ));
    }

    Ok(posts)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
