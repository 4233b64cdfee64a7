//! MetaWeather dashboard card platform
//!
//! Fetches current conditions for a location from the MetaWeather API
//! (<https://www.metaweather.com>), converts them into the configured display
//! units and renders an HTML card fragment for the host dashboard.

pub mod card;
pub mod client;
pub mod data_sources;
mod models;
pub mod templates;

pub use card::{CardError, WeatherCard};
pub use client::{ClientConfig, MetaWeatherClient, WeatherError, WeatherSource};
pub use data_sources::{DataSourceError, DataSources, WEATHER_PLATFORM};
pub use domain::CardOptions;
pub use models::{ConsolidatedWeather, LocationWeather, ShapeError};
pub use templates::{CardTemplates, TemplateError};
