/// Test fixtures: representative JSON payloads for every upstream feed.
///
/// These fixtures are structurally complete but truncated to the
/// minimum needed to exercise the parsers. They reflect the real
/// envelopes returned by the feeds.
///
/// USGS IV response shape:
///   response.value.timeSeries[]
///     .sourceInfo.siteCode[0].value  — site number (string)
///     .sourceInfo.siteName
///     .sourceInfo.geoLocation.geogLocation.{latitude,longitude}
///     .variable.unit.unitCode
///     .variable.noDataValue          — sentinel for missing data (-999999)
///     .values[0].value[]
///       .value     — the measurement as a STRING (not a number)
///       .dateTime  — ISO 8601 with offset
///
/// Note: USGS measurement values are always JSON strings, even though
/// they represent numbers. Parsers must handle this.

/// Single site (Trenton 01463500) at 9.84 ft — 3.0 m, over the danger
/// threshold.
#[cfg(test)]
pub(crate) fn fixture_trenton_json() -> &'static str {
    r#"{
      "value": {
        "timeSeries": [
          {
            "sourceInfo": {
              "siteName": "DELAWARE RIVER AT TRENTON NJ",
              "siteCode": [{ "value": "01463500", "network": "NWIS", "agencyCode": "USGS" }],
              "geoLocation": {
                "geogLocation": { "srs": "EPSG:4326", "latitude": 40.2217, "longitude": -74.7782 }
              }
            },
            "variable": {
              "variableCode": [{ "value": "00065", "network": "NWIS" }],
              "variableName": "Gage height, ft",
              "unit": { "unitCode": "ft" },
              "noDataValue": -999999.0
            },
            "values": [{
              "value": [
                { "value": "9.62", "qualifiers": ["P"], "dateTime": "2024-05-01T11:45:00.000-04:00" },
                { "value": "9.84", "qualifiers": ["P"], "dateTime": "2024-05-01T12:00:00.000-04:00" }
              ]
            }]
          }
        ]
      }
    }"#
}

/// Two sites: Lambertville (registered, low stage) and Manville
/// (not in the registry).
#[cfg(test)]
pub(crate) fn fixture_multi_site_json() -> &'static str {
    r#"{
      "value": {
        "timeSeries": [
          {
            "sourceInfo": {
              "siteName": "DELAWARE RIVER AT LAMBERTVILLE NJ",
              "siteCode": [{ "value": "01462000", "network": "NWIS", "agencyCode": "USGS" }],
              "geoLocation": {
                "geogLocation": { "srs": "EPSG:4326", "latitude": 40.3651, "longitude": -74.9482 }
              }
            },
            "variable": {
              "variableCode": [{ "value": "00065", "network": "NWIS" }],
              "variableName": "Gage height, ft",
              "unit": { "unitCode": "ft" },
              "noDataValue": -999999.0
            },
            "values": [{
              "value": [
                { "value": "2.50", "qualifiers": ["P"], "dateTime": "2024-05-01T12:00:00.000-04:00" }
              ]
            }]
          },
          {
            "sourceInfo": {
              "siteName": "RARITAN RIVER AT MANVILLE NJ",
              "siteCode": [{ "value": "01400500", "network": "NWIS", "agencyCode": "USGS" }],
              "geoLocation": {
                "geogLocation": { "srs": "EPSG:4326", "latitude": 40.5418, "longitude": -74.5882 }
              }
            },
            "variable": {
              "variableCode": [{ "value": "00065", "network": "NWIS" }],
              "variableName": "Gage height, ft",
              "unit": { "unitCode": "ft" },
              "noDataValue": -999999.0
            },
            "values": [{
              "value": [
                { "value": "4.90", "qualifiers": ["P"], "dateTime": "2024-05-01T12:00:00.000-04:00" }
              ]
            }]
          }
        ]
      }
    }"#
}

/// Structurally valid series whose value array is empty — a site that
/// reported nothing in the requested period.
#[cfg(test)]
pub(crate) fn fixture_empty_value_array_json() -> &'static str {
    r#"{
      "value": {
        "timeSeries": [
          {
            "sourceInfo": {
              "siteName": "DELAWARE RIVER AT TRENTON NJ",
              "siteCode": [{ "value": "01463500", "network": "NWIS", "agencyCode": "USGS" }],
              "geoLocation": {
                "geogLocation": { "srs": "EPSG:4326", "latitude": 40.2217, "longitude": -74.7782 }
              }
            },
            "variable": {
              "variableCode": [{ "value": "00065", "network": "NWIS" }],
              "variableName": "Gage height, ft",
              "unit": { "unitCode": "ft" },
              "noDataValue": -999999.0
            },
            "values": [{ "value": [] }]
          }
        ]
      }
    }"#
}

/// Series carrying only the USGS sentinel value for "no data".
#[cfg(test)]
pub(crate) fn fixture_sentinel_no_data_json() -> &'static str {
    r#"{
      "value": {
        "timeSeries": [
          {
            "sourceInfo": {
              "siteName": "DELAWARE RIVER AT TRENTON NJ",
              "siteCode": [{ "value": "01463500", "network": "NWIS", "agencyCode": "USGS" }],
              "geoLocation": {
                "geogLocation": { "srs": "EPSG:4326", "latitude": 40.2217, "longitude": -74.7782 }
              }
            },
            "variable": {
              "variableCode": [{ "value": "00065", "network": "NWIS" }],
              "variableName": "Gage height, ft",
              "unit": { "unitCode": "ft" },
              "noDataValue": -999999.0
            },
            "values": [{
              "value": [
                { "value": "-999999", "qualifiers": ["P"], "dateTime": "2024-05-01T12:00:00.000-04:00" }
              ]
            }]
          }
        ]
      }
    }"#
}

/// Pump proxy feed: two complete entries (one with an epoch
/// timestamp), one with no condition text, and one missing coordinates.
#[cfg(test)]
pub(crate) fn fixture_pump_feed_json() -> &'static str {
    r#"{
      "pumps": [
        {
          "id": "P-TRN-01",
          "location": "Trenton",
          "latitude": 40.2105,
          "longitude": -74.7699,
          "condition": "Currently Operating",
          "updated_at": "2024-05-01T11:45:00+00:00"
        },
        {
          "id": "P-CMD-02",
          "location": "Camden",
          "latitude": 39.9368,
          "longitude": -75.1066,
          "condition": "Scheduled Maintenance",
          "updated_at": 1714561200
        },
        {
          "id": "P-EWG-03",
          "location": "Ewing",
          "latitude": 40.2598,
          "longitude": -74.7999,
          "updated_at": "2024-05-01T09:30:00+00:00"
        },
        {
          "id": "P-BAD-99",
          "location": "Unknown",
          "condition": "Operating",
          "updated_at": "2024-05-01T11:00:00+00:00"
        }
      ]
    }"#
}

/// Alert feed: an active danger alert, an expired info alert with no
/// area list, and an entry using a trial level name the model rejects.
#[cfg(test)]
pub(crate) fn fixture_alert_feed_json() -> &'static str {
    r#"{
      "alerts": [
        {
          "id": "ALERT-2024-117",
          "level": "danger",
          "is_active": true,
          "affected_areas": ["Trenton", "Lambertville"],
          "timestamp": "2024-05-01T10:15:00+00:00"
        },
        {
          "id": "ALERT-2024-118",
          "level": "info",
          "is_active": false,
          "timestamp": "2024-04-28T16:00:00+00:00"
        },
        {
          "id": "ALERT-2024-119",
          "level": "severe",
          "is_active": true,
          "affected_areas": ["Camden"],
          "timestamp": "2024-05-01T10:20:00+00:00"
        }
      ]
    }"#
}

/// Open-Meteo current-conditions shape: Celsius, wind in km/h.
#[cfg(test)]
pub(crate) fn fixture_open_meteo_json() -> &'static str {
    r#"{
      "latitude": 40.25,
      "longitude": -74.75,
      "current": {
        "time": "2024-05-01T12:00",
        "temperature_2m": 18.4,
        "relative_humidity_2m": 82.0,
        "wind_speed_10m": 14.4
      }
    }"#
}

/// OpenWeather current-conditions shape: Kelvin under `main`, wind in m/s.
#[cfg(test)]
pub(crate) fn fixture_open_weather_json() -> &'static str {
    r#"{
      "weather": [{ "id": 501, "main": "Rain", "description": "moderate rain" }],
      "main": {
        "temp": 291.55,
        "humidity": 82.0,
        "pressure": 1009
      },
      "wind": { "speed": 4.0, "deg": 230 },
      "name": "Trenton"
    }"#
}
