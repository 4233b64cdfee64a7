//! Weather card options value object
//!
//! Options arrive from the host as plain string pairs. The five keys the card
//! understands get typed accessors and defaults; every other key is kept as an
//! opaque extra so newer host configs pass through untouched.
//!
//! # Examples
//!
//! ```
//! use domain::value_objects::{CardOptions, TemperatureUnit};
//!
//! let options = CardOptions::new([("temp_unit", "F"), ("platform", "weather")]);
//! assert_eq!(options.woeid(), "2514815");
//! assert_eq!(options.temperature_unit(), TemperatureUnit::Fahrenheit);
//! assert_eq!(options.extra("platform"), Some("weather"));
//! ```

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

use super::units::{DistanceUnit, PressureUnit, TemperatureUnit, WindSpeedUnit};

/// Default location (WOEID) when none is configured
pub const DEFAULT_WOEID: &str = "2514815";
/// Default temperature unit
pub const DEFAULT_TEMP_UNIT: &str = "c";
/// Default wind speed unit
pub const DEFAULT_WIND_SPEED_UNIT: &str = "kph";
/// Default air pressure unit
///
/// The sentinel `x` matches no converting unit, so pressure stays in mbar.
pub const DEFAULT_AIR_PRESSURE_UNIT: &str = "x";
/// Default visibility unit
pub const DEFAULT_VISIBILITY_UNIT: &str = "km";

/// Options for a single weather card
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardOptions {
    woeid: String,
    temp_unit: String,
    wind_speed_unit: String,
    air_pressure_unit: String,
    visibility_unit: String,
    #[serde(flatten)]
    extra: BTreeMap<String, String>,
}

impl CardOptions {
    /// Build options from host-supplied key/value pairs
    ///
    /// Later pairs win over earlier ones with the same key. Values are stored
    /// verbatim; nothing is validated.
    pub fn new<I, K, V>(options: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut card = Self::default();
        for (key, value) in options {
            card.set(key.into(), value.into());
        }
        card
    }

    fn set(&mut self, key: String, value: String) {
        match key.as_str() {
            "woeid" => self.woeid = value,
            "temp_unit" => self.temp_unit = value,
            "wind_speed_unit" => self.wind_speed_unit = value,
            "air_pressure_unit" => self.air_pressure_unit = value,
            "visibility_unit" => self.visibility_unit = value,
            _ => {
                self.extra.insert(key, value);
            },
        }
    }

    /// Location identifier sent to the weather API
    pub fn woeid(&self) -> &str {
        &self.woeid
    }

    /// Temperature unit as configured
    pub fn temp_unit(&self) -> &str {
        &self.temp_unit
    }

    /// Wind speed unit as configured, also used as the display label
    pub fn wind_speed_unit(&self) -> &str {
        &self.wind_speed_unit
    }

    /// Air pressure unit as configured, also used as the display label
    pub fn air_pressure_unit(&self) -> &str {
        &self.air_pressure_unit
    }

    /// Visibility unit as configured, also used as the display label
    pub fn visibility_unit(&self) -> &str {
        &self.visibility_unit
    }

    /// Typed temperature unit
    pub fn temperature_unit(&self) -> TemperatureUnit {
        TemperatureUnit::from_option(&self.temp_unit)
    }

    /// Typed wind speed unit
    pub fn wind_speed(&self) -> WindSpeedUnit {
        WindSpeedUnit::from_option(&self.wind_speed_unit)
    }

    /// Typed air pressure unit
    pub fn air_pressure(&self) -> PressureUnit {
        PressureUnit::from_option(&self.air_pressure_unit)
    }

    /// Typed visibility unit
    pub fn visibility(&self) -> DistanceUnit {
        DistanceUnit::from_option(&self.visibility_unit)
    }

    /// Look up an unrecognized option
    pub fn extra(&self, key: &str) -> Option<&str> {
        self.extra.get(key).map(String::as_str)
    }

    /// All unrecognized options
    pub fn extras(&self) -> &BTreeMap<String, String> {
        &self.extra
    }

    /// Look up any option, recognized or not
    pub fn get(&self, key: &str) -> Option<&str> {
        match key {
            "woeid" => Some(&self.woeid),
            "temp_unit" => Some(&self.temp_unit),
            "wind_speed_unit" => Some(&self.wind_speed_unit),
            "air_pressure_unit" => Some(&self.air_pressure_unit),
            "visibility_unit" => Some(&self.visibility_unit),
            _ => self.extra(key),
        }
    }
}

impl Default for CardOptions {
    fn default() -> Self {
        Self {
            woeid: DEFAULT_WOEID.to_string(),
            temp_unit: DEFAULT_TEMP_UNIT.to_string(),
            wind_speed_unit: DEFAULT_WIND_SPEED_UNIT.to_string(),
            air_pressure_unit: DEFAULT_AIR_PRESSURE_UNIT.to_string(),
            visibility_unit: DEFAULT_VISIBILITY_UNIT.to_string(),
            extra: BTreeMap::new(),
        }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for CardOptions {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::new(iter)
    }
}

/// Scalar option value as written in a config file
#[derive(Deserialize)]
#[serde(untagged)]
enum OptionValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl From<OptionValue> for String {
    fn from(value: OptionValue) -> Self {
        match value {
            OptionValue::Bool(b) => b.to_string(),
            OptionValue::Int(i) => i.to_string(),
            OptionValue::Float(f) => f.to_string(),
            OptionValue::Text(s) => s,
        }
    }
}

/// Deserializes any flat table of scalars, so `woeid = 2514815` and
/// `woeid = '2514815'` are equivalent
impl<'de> Deserialize<'de> for CardOptions {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = BTreeMap::<String, OptionValue>::deserialize(deserializer)?;
        Ok(Self::new(raw))
    }
}
