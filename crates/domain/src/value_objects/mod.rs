//! Value Objects - Immutable, identity-less domain primitives

mod card_options;
mod rounding;
mod units;

pub use card_options::{
    CardOptions, DEFAULT_AIR_PRESSURE_UNIT, DEFAULT_TEMP_UNIT, DEFAULT_VISIBILITY_UNIT,
    DEFAULT_WIND_SPEED_UNIT, DEFAULT_WOEID,
};
pub use rounding::{floor_to, format_floored};
pub use units::{
    DistanceUnit, KM_PER_MILE, MBAR_PER_INHG, PressureUnit, TemperatureUnit, WindSpeedUnit,
    fahrenheit_from_celsius, inhg_from_mbar, miles_from_km, wind_speed_mph,
};
