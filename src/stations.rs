/// Station registry for the Delaware basin monitoring deployment.
///
/// Defines the canonical list of USGS gauge stations this service
/// polls, with the display names, coordinates, and surveyed ground
/// elevations the rest of the pipeline consumes. This is the single
/// source of truth for site codes — other modules should reference
/// stations from here rather than hardcoding them.
///
/// Display names use the dashboard's `"River @ City"` form; the text
/// after the `@` is what the region aggregation keys on.

/// Metadata for a single monitored gauge station.
pub struct Station {
    /// 8-digit USGS site code.
    pub site_code: &'static str,
    /// Dashboard display name in `"River @ City"` form.
    pub name: &'static str,
    /// WGS84 latitude.
    pub latitude: f64,
    /// WGS84 longitude.
    pub longitude: f64,
    /// Surveyed ground elevation at the gauge, in meters, where known.
    /// Feeds the safe-zone classifier; stations without a surveyed
    /// datum get the low-confidence evaluation path.
    pub elevation_m: Option<f64>,
}

/// All monitored stations, ordered roughly downstream to upstream.
///
/// Sources:
///   - Site codes: USGS NWIS (waterservices.usgs.gov)
///   - Elevations: USGS site inventory, converted from NGVD29 feet
pub static STATION_REGISTRY: &[Station] = &[
    Station {
        site_code: "01463500",
        name: "Delaware River @ Trenton",
        latitude: 40.2217,
        longitude: -74.7782,
        elevation_m: Some(3.0),
    },
    Station {
        site_code: "01464000",
        name: "Assunpink Creek @ Trenton",
        latitude: 40.2223,
        longitude: -74.7460,
        elevation_m: Some(6.1),
    },
    Station {
        site_code: "01462000",
        name: "Delaware River @ Lambertville",
        latitude: 40.3651,
        longitude: -74.9482,
        elevation_m: Some(18.3),
    },
    Station {
        site_code: "01457500",
        name: "Musconetcong River @ Bloomsbury",
        latitude: 40.6542,
        longitude: -75.0871,
        elevation_m: Some(86.9),
    },
    Station {
        site_code: "01446500",
        name: "Delaware River @ Belvidere",
        latitude: 40.8268,
        longitude: -75.0802,
        elevation_m: Some(68.6),
    },
    Station {
        site_code: "01440200",
        name: "Delaware River @ Montague",
        latitude: 41.3092,
        longitude: -74.7957,
        elevation_m: None, // datum under revision at this gauge
    },
];

/// Returns the site codes for all monitored stations, suitable for
/// passing directly to `ingest::usgs::build_iv_url`.
pub fn all_site_codes() -> Vec<&'static str> {
    STATION_REGISTRY.iter().map(|s| s.site_code).collect()
}

/// Looks up a station by site code. Returns `None` if not found.
pub fn find_station(site_code: &str) -> Option<&'static Station> {
    STATION_REGISTRY.iter().find(|s| s.site_code == site_code)
}

/// Dashboard display name for a site code, if the station is registered.
pub fn display_name(site_code: &str) -> Option<&'static str> {
    find_station(site_code).map(|s| s.name)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_site_codes_are_valid_usgs_format() {
        // USGS site codes here are 8-digit numeric strings. An invalid
        // entry would be silently dropped from the IV API response.
        for station in STATION_REGISTRY {
            assert_eq!(
                station.site_code.len(),
                8,
                "site code for '{}' should be 8 digits, got '{}'",
                station.name,
                station.site_code
            );
            assert!(
                station.site_code.chars().all(|c| c.is_ascii_digit()),
                "site code for '{}' should be numeric, got '{}'",
                station.name,
                station.site_code
            );
        }
    }

    #[test]
    fn test_no_duplicate_site_codes() {
        let mut seen = std::collections::HashSet::new();
        for station in STATION_REGISTRY {
            assert!(
                seen.insert(station.site_code),
                "duplicate site code '{}' found in STATION_REGISTRY",
                station.site_code
            );
        }
    }

    #[test]
    fn test_every_display_name_yields_a_region_token() {
        // The region aggregation keys on the text after '@'; a name
        // without it would silently drop the station from the count.
        for station in STATION_REGISTRY {
            let token = crate::metrics::dashboard::region_token(station.name);
            assert!(
                token.is_some_and(|t| !t.is_empty()),
                "display name '{}' has no region token",
                station.name
            );
        }
    }

    #[test]
    fn test_coordinates_are_plausible() {
        for station in STATION_REGISTRY {
            assert!(station.latitude > 38.0 && station.latitude < 42.5, "{}", station.name);
            assert!(station.longitude > -76.0 && station.longitude < -74.0, "{}", station.name);
        }
    }

    #[test]
    fn test_find_station_returns_correct_entry() {
        let station = find_station("01463500").expect("Trenton should be in registry");
        assert_eq!(station.site_code, "01463500");
        assert!(station.name.contains("Trenton"));
    }

    #[test]
    fn test_find_station_returns_none_for_unknown_code() {
        assert!(find_station("00000000").is_none());
    }

    #[test]
    fn test_all_site_codes_helper_matches_registry_length() {
        assert_eq!(all_site_codes().len(), STATION_REGISTRY.len());
    }
}
