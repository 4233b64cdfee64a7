//! Weather data models
//!
//! Types for the MetaWeather location document. Only the fields the card shows
//! are read, and only from the first consolidated weather entry.

use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};
use thiserror::Error;

/// Conditions of one consolidated weather entry
///
/// Measurements start in the API's units (Celsius, kph, mbar, km) and are
/// converted in place by the card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsolidatedWeather {
    /// Weather state abbreviation, names the icon (e.g. `lc`)
    pub weather_state_abbr: String,
    /// Human-readable weather state (e.g. "Light Cloud")
    pub weather_state_name: String,
    /// Current temperature
    pub the_temp: f64,
    /// Minimum temperature
    pub min_temp: f64,
    /// Maximum temperature
    pub max_temp: f64,
    /// Compass point the wind blows from (e.g. `WSW`)
    pub wind_direction_compass: String,
    /// Wind speed
    pub wind_speed: f64,
    /// Relative humidity percentage, shown as delivered
    pub humidity: Number,
    /// Air pressure
    pub air_pressure: f64,
    /// Visibility distance
    pub visibility: f64,
    /// Forecast confidence percentage, shown as delivered
    pub predictability: Number,
}

/// Location weather as shown on the card
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocationWeather {
    /// Location name
    pub title: String,
    /// First consolidated weather entry, treated as current conditions
    pub current: ConsolidatedWeather,
}

/// Raw API response
#[derive(Debug, Deserialize)]
struct ApiResponse {
    title: String,
    consolidated_weather: Vec<Value>,
}

/// Why a JSON document is not a usable location weather document
#[derive(Debug, Error)]
pub enum ShapeError {
    /// Missing or wrongly typed field
    #[error("{0}")]
    Field(#[from] serde_json::Error),

    /// No forecast entries
    #[error("consolidated_weather is empty")]
    NoEntries,
}

impl TryFrom<Value> for LocationWeather {
    type Error = ShapeError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        let response: ApiResponse = serde_json::from_value(value)?;
        let first = response
            .consolidated_weather
            .into_iter()
            .next()
            .ok_or(ShapeError::NoEntries)?;

        Ok(Self {
            title: response.title,
            current: serde_json::from_value(first)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn entry() -> Value {
        json!({
            "id": 6_543_210,
            "weather_state_name": "Light Cloud",
            "weather_state_abbr": "lc",
            "wind_direction_compass": "WSW",
            "applicable_date": "2021-03-01",
            "min_temp": 3.5,
            "max_temp": 11.2,
            "the_temp": 9.87,
            "wind_speed": 7.4,
            "wind_direction": 250.1,
            "air_pressure": 1021.0,
            "humidity": 71,
            "visibility": 12.3,
            "predictability": 70
        })
    }

    #[test]
    fn test_parse_first_entry() {
        let doc = json!({
            "title": "Berlin",
            "woeid": 638_242,
            "consolidated_weather": [entry(), {"the_temp": "ignored"}]
        });

        let weather = LocationWeather::try_from(doc).expect("should parse");
        assert_eq!(weather.title, "Berlin");
        assert_eq!(weather.current.weather_state_abbr, "lc");
        assert!((weather.current.the_temp - 9.87).abs() < f64::EPSILON);
        assert_eq!(weather.current.humidity.to_string(), "71");
        assert_eq!(weather.current.predictability.to_string(), "70");
    }

    #[test]
    fn test_missing_title_is_shape_error() {
        let doc = json!({ "consolidated_weather": [entry()] });
        let err = LocationWeather::try_from(doc).expect_err("should fail");
        assert!(matches!(err, ShapeError::Field(_)));
        assert!(err.to_string().contains("title"));
    }

    #[test]
    fn test_missing_entry_field_is_shape_error() {
        let mut broken = entry();
        broken
            .as_object_mut()
            .expect("object")
            .remove("wind_speed");
        let doc = json!({ "title": "Berlin", "consolidated_weather": [broken] });

        let err = LocationWeather::try_from(doc).expect_err("should fail");
        assert!(err.to_string().contains("wind_speed"));
    }

    #[test]
    fn test_empty_forecast_is_shape_error() {
        let doc = json!({ "title": "Berlin", "consolidated_weather": [] });
        let err = LocationWeather::try_from(doc).expect_err("should fail");
        assert!(matches!(err, ShapeError::NoEntries));
    }

    #[test]
    fn test_error_document_is_shape_error() {
        let doc = json!({ "detail": "Not found." });
        assert!(LocationWeather::try_from(doc).is_err());
    }
}
