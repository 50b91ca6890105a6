/// Weather feed normalization.
///
/// The configured weather URL may point at either of two providers,
/// whose responses disagree on shape and units: an OpenWeather-style
/// payload nests Kelvin temperatures under `main`, an Open-Meteo-style
/// payload nests Celsius under `current` with wind in km/h. The two
/// shapes are distinguished once, here, by an untagged union — callers
/// only ever see the normalized observation.

use serde::Deserialize;

use crate::model::FeedError;

// ---------------------------------------------------------------------------
// Upstream shapes
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
#[serde(untagged)]
enum WeatherResponse {
    OpenWeather(OpenWeatherShape),
    OpenMeteo(OpenMeteoShape),
}

#[derive(Deserialize)]
struct OpenWeatherShape {
    main: OpenWeatherMain,
    wind: Option<OpenWeatherWind>,
    #[serde(default)]
    weather: Vec<OpenWeatherCondition>,
}

#[derive(Deserialize)]
struct OpenWeatherMain {
    /// Kelvin.
    temp: f64,
    humidity: Option<f64>,
}

#[derive(Deserialize)]
struct OpenWeatherWind {
    /// Meters per second.
    speed: f64,
}

#[derive(Deserialize)]
struct OpenWeatherCondition {
    main: String,
}

#[derive(Deserialize)]
struct OpenMeteoShape {
    current: OpenMeteoCurrent,
}

#[derive(Deserialize)]
struct OpenMeteoCurrent {
    /// Celsius.
    temperature_2m: f64,
    relative_humidity_2m: Option<f64>,
    /// Kilometers per hour.
    wind_speed_10m: Option<f64>,
}

// ---------------------------------------------------------------------------
// Normalized observation
// ---------------------------------------------------------------------------

const KELVIN_OFFSET: f64 = 273.15;
const KMH_PER_MS: f64 = 3.6;

/// A current-conditions observation in service units: Celsius, percent,
/// meters per second.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct WeatherObservation {
    pub temperature_c: f64,
    pub humidity_pct: Option<f64>,
    pub wind_speed_ms: Option<f64>,
    /// Short condition text where the provider supplies one.
    pub condition: Option<String>,
}

/// Parses either provider shape into a normalized observation.
///
/// # Errors
/// - `FeedError::ParseError` — the body matches neither known shape.
pub fn parse_weather_response(json: &str) -> Result<WeatherObservation, FeedError> {
    let response: WeatherResponse = serde_json::from_str(json)
        .map_err(|e| FeedError::ParseError(format!("unrecognized weather shape: {}", e)))?;

    Ok(match response {
        WeatherResponse::OpenWeather(shape) => WeatherObservation {
            temperature_c: shape.main.temp - KELVIN_OFFSET,
            humidity_pct: shape.main.humidity,
            wind_speed_ms: shape.wind.map(|w| w.speed),
            condition: shape.weather.into_iter().next().map(|c| c.main),
        },
        WeatherResponse::OpenMeteo(shape) => WeatherObservation {
            temperature_c: shape.current.temperature_2m,
            humidity_pct: shape.current.relative_humidity_2m,
            wind_speed_ms: shape.current.wind_speed_10m.map(|kmh| kmh / KMH_PER_MS),
            condition: None,
        },
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ingest::fixtures::*;

    #[test]
    fn test_open_meteo_shape_normalizes() {
        let obs = parse_weather_response(fixture_open_meteo_json()).expect("should parse");
        assert!((obs.temperature_c - 18.4).abs() < 0.001);
        assert_eq!(obs.humidity_pct, Some(82.0));
        // 14.4 km/h -> 4.0 m/s
        assert!((obs.wind_speed_ms.unwrap() - 4.0).abs() < 0.001);
        assert_eq!(obs.condition, None);
    }

    #[test]
    fn test_open_weather_shape_normalizes() {
        let obs = parse_weather_response(fixture_open_weather_json()).expect("should parse");
        // 291.55 K -> 18.4 C
        assert!((obs.temperature_c - 18.4).abs() < 0.001);
        assert_eq!(obs.humidity_pct, Some(82.0));
        assert_eq!(obs.wind_speed_ms, Some(4.0));
        assert_eq!(obs.condition.as_deref(), Some("Rain"));
    }

    #[test]
    fn test_both_shapes_agree_after_normalization() {
        let meteo = parse_weather_response(fixture_open_meteo_json()).unwrap();
        let ow = parse_weather_response(fixture_open_weather_json()).unwrap();
        assert!((meteo.temperature_c - ow.temperature_c).abs() < 0.01);
        assert!((meteo.wind_speed_ms.unwrap() - ow.wind_speed_ms.unwrap()).abs() < 0.01);
    }

    #[test]
    fn test_unknown_shape_is_parse_error() {
        let result = parse_weather_response(r#"{"observations": {"tempF": 65}}"#);
        assert!(matches!(result, Err(FeedError::ParseError(_))));
    }
}
