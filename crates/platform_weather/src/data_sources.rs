//! Data source files
//!
//! The host dashboard declares its data sources as TOML tables, one table per
//! source:
//!
//! ```toml
//! [weather_ds]
//! platform = 'weather'
//! woeid = '2514815'
//! temp_unit = 'c'
//! ```
//!
//! Every table is read as [`CardOptions`]; tables whose `platform` is
//! `weather` can be turned into a [`WeatherCard`].

use config::{Config, File, FileFormat};
use domain::CardOptions;
use std::collections::BTreeMap;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info};

use crate::card::WeatherCard;
use crate::client::ClientConfig;

/// Platform name of weather data sources
pub const WEATHER_PLATFORM: &str = "weather";

/// Data source loading errors
#[derive(Debug, Error)]
pub enum DataSourceError {
    /// The file could not be read or is not a table of tables
    #[error("Failed to load data sources: {0}")]
    Load(#[from] config::ConfigError),

    /// No data source with this name
    #[error("Data source not found: {0}")]
    NotFound(String),

    /// The data source belongs to another platform
    #[error("Data source {0} is not a weather data source")]
    NotWeather(String),
}

/// Named data sources read from the host's config
#[derive(Debug, Clone, Default)]
pub struct DataSources {
    sources: BTreeMap<String, CardOptions>,
    client: ClientConfig,
}

impl DataSources {
    /// Load data sources from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DataSourceError> {
        let path = path.as_ref();
        let config = Config::builder()
            .add_source(File::from(path).format(FileFormat::Toml).required(true))
            .build()?;

        let sources = Self::from_config(config)?;
        info!(
            path = %path.display(),
            count = sources.sources.len(),
            "Loaded data sources"
        );
        Ok(sources)
    }

    /// Parse data sources from TOML text
    pub fn from_toml_str(toml: &str) -> Result<Self, DataSourceError> {
        let config = Config::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()?;

        Self::from_config(config)
    }

    fn from_config(config: Config) -> Result<Self, DataSourceError> {
        let sources: BTreeMap<String, CardOptions> = config.try_deserialize()?;
        Ok(Self {
            sources,
            client: ClientConfig::default(),
        })
    }

    /// Use this client configuration for every card built from these sources
    #[must_use]
    pub fn with_client_config(mut self, client: ClientConfig) -> Self {
        self.client = client;
        self
    }

    /// Names of all data sources, sorted
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.sources.keys().map(String::as_str)
    }

    /// Options of a data source
    pub fn get(&self, name: &str) -> Result<&CardOptions, DataSourceError> {
        self.sources
            .get(name)
            .ok_or_else(|| DataSourceError::NotFound(name.to_string()))
    }

    /// Build the weather card for a data source
    pub fn weather_card(&self, name: &str) -> Result<WeatherCard, DataSourceError> {
        let options = self.get(name)?;
        if !is_weather(options) {
            return Err(DataSourceError::NotWeather(name.to_string()));
        }
        Ok(self.card(options))
    }

    /// Build a card for every weather data source
    pub fn weather_cards(&self) -> impl Iterator<Item = (&str, WeatherCard)> {
        self.sources
            .iter()
            .filter(|(_, options)| is_weather(options))
            .map(|(name, options)| {
                debug!(data_source = %name, woeid = %options.woeid(), "Building weather card");
                (name.as_str(), self.card(options))
            })
    }

    fn card(&self, options: &CardOptions) -> WeatherCard {
        WeatherCard::with_client_config(options.clone(), self.client.clone())
    }
}

fn is_weather(options: &CardOptions) -> bool {
    options
        .extra("platform")
        .is_some_and(|platform| platform.eq_ignore_ascii_case(WEATHER_PLATFORM))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SOURCES: &str = r#"
[weather_ds]
platform = 'weather'
woeid = '2514815'
temp_unit = 'f'

[london]
platform = 'Weather'
woeid = 44418
visibility_unit = 'mi'

[rss_feed]
platform = 'rss'
url = 'https://example.com/feed.xml'
"#;

    #[test]
    fn test_parse_tables() {
        let sources = DataSources::from_toml_str(SOURCES).unwrap();
        let names: Vec<&str> = sources.names().collect();
        assert_eq!(names, vec!["london", "rss_feed", "weather_ds"]);

        let options = sources.get("weather_ds").unwrap();
        assert_eq!(options.woeid(), "2514815");
        assert_eq!(options.temp_unit(), "f");
        assert_eq!(options.wind_speed_unit(), "kph");
        assert_eq!(options.extra("platform"), Some("weather"));
    }

    #[test]
    fn test_integer_woeid_is_accepted() {
        let sources = DataSources::from_toml_str(SOURCES).unwrap();
        assert_eq!(sources.get("london").unwrap().woeid(), "44418");
    }

    #[test]
    fn test_weather_cards_skip_other_platforms() {
        let sources = DataSources::from_toml_str(SOURCES).unwrap();
        let cards: Vec<(&str, WeatherCard)> = sources.weather_cards().collect();

        let names: Vec<&str> = cards.iter().map(|(name, _)| *name).collect();
        assert_eq!(names, vec!["london", "weather_ds"]);
        assert_eq!(cards[0].1.options().visibility_unit(), "mi");
    }

    #[test]
    fn test_weather_card_by_name() {
        let sources = DataSources::from_toml_str(SOURCES).unwrap();

        let card = sources.weather_card("weather_ds").unwrap();
        assert_eq!(card.options().temp_unit(), "f");

        assert!(matches!(
            sources.weather_card("rss_feed"),
            Err(DataSourceError::NotWeather(_))
        ));
        assert!(matches!(
            sources.weather_card("missing"),
            Err(DataSourceError::NotFound(_))
        ));
    }

    #[test]
    fn test_invalid_toml_is_load_error() {
        let result = DataSources::from_toml_str("[weather_ds\nplatform = ");
        assert!(matches!(result, Err(DataSourceError::Load(_))));
    }

    #[test]
    fn test_error_display() {
        let err = DataSourceError::NotFound("weather_ds".to_string());
        assert_eq!(err.to_string(), "Data source not found: weather_ds");
    }
}
