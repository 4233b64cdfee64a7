//! MetaWeather client
//!
//! HTTP client for the MetaWeather location API.

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::OnceLock;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, instrument};

/// Weather client errors
///
/// Every variant is a fetch failure: the card turns any of them into its error
/// fragment.
#[derive(Debug, Error)]
pub enum WeatherError {
    /// The HTTP client could not be built
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request to the weather service failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Response body is not valid JSON
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Service is temporarily unavailable
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,
}

/// Weather client configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// MetaWeather base URL (default: <https://www.metaweather.com>)
    ///
    /// Serves both the location API and the weather state icons.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds (default: none, wait for the server)
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

fn default_base_url() -> String {
    "https://www.metaweather.com".to_string()
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: None,
        }
    }
}

/// Source of raw location weather documents
#[cfg_attr(test, automock)]
#[async_trait]
pub trait WeatherSource: Send + Sync {
    /// Fetch the location document for a WOEID and decode it as JSON
    async fn location(&self, woeid: &str) -> Result<Value, WeatherError>;

    /// URL of the icon for a weather state abbreviation
    fn icon_url(&self, weather_state_abbr: &str) -> String;
}

/// MetaWeather HTTP client implementation
///
/// The underlying HTTP client is built on first use, so constructing this
/// never fails; a build failure surfaces as a fetch error instead.
#[derive(Debug, Clone, Default)]
pub struct MetaWeatherClient {
    client: OnceLock<Client>,
    config: ClientConfig,
}

impl MetaWeatherClient {
    /// Create a new MetaWeather client with the given configuration
    #[must_use]
    pub const fn new(config: ClientConfig) -> Self {
        Self {
            client: OnceLock::new(),
            config,
        }
    }

    /// Create a new client with default configuration
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new(ClientConfig::default())
    }

    /// Client configuration
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    fn http(&self) -> Result<&Client, WeatherError> {
        if let Some(client) = self.client.get() {
            return Ok(client);
        }

        let mut builder = Client::builder();
        if let Some(secs) = self.config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder
            .build()
            .map_err(|e| WeatherError::ConnectionFailed(e.to_string()))?;

        Ok(self.client.get_or_init(|| client))
    }

    fn base_url(&self) -> &str {
        self.config.base_url.trim_end_matches('/')
    }

    /// Build the API URL for a location request
    fn build_location_url(&self, woeid: &str) -> String {
        format!("{}/api/location/{woeid}", self.base_url())
    }
}

#[async_trait]
impl WeatherSource for MetaWeatherClient {
    #[instrument(skip(self))]
    async fn location(&self, woeid: &str) -> Result<Value, WeatherError> {
        let url = self.build_location_url(woeid);
        debug!(url = %url, "Fetching location weather");

        let response = self
            .http()?
            .get(&url)
            .send()
            .await
            .map_err(|e| WeatherError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(WeatherError::RateLimitExceeded);
        }
        if status.is_server_error() {
            return Err(WeatherError::ServiceUnavailable(format!("HTTP {status}")));
        }
        if !status.is_success() {
            return Err(WeatherError::RequestFailed(format!("HTTP {status}")));
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| WeatherError::ParseError(e.to_string()))
    }

    fn icon_url(&self, weather_state_abbr: &str) -> String {
        format!(
            "{}/static/img/weather/{weather_state_abbr}.svg",
            self.base_url()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "https://www.metaweather.com");
        assert_eq!(config.timeout_secs, None);
    }

    #[test]
    fn test_build_location_url() {
        let client = MetaWeatherClient::with_defaults();

        let url = client.build_location_url("2514815");
        assert_eq!(url, "https://www.metaweather.com/api/location/2514815");
    }

    #[test]
    fn test_build_location_url_trims_trailing_slash() {
        let config = ClientConfig {
            base_url: "http://localhost:8080/".to_string(),
            timeout_secs: Some(5),
        };
        let client = MetaWeatherClient::new(config);

        assert_eq!(
            client.build_location_url("44418"),
            "http://localhost:8080/api/location/44418"
        );
    }

    #[test]
    fn test_icon_url() {
        let client = MetaWeatherClient::with_defaults();

        assert_eq!(
            client.icon_url("lc"),
            "https://www.metaweather.com/static/img/weather/lc.svg"
        );
    }

    #[test]
    fn test_http_client_is_reused() {
        let client = MetaWeatherClient::with_defaults();
        let first = client.http().expect("client should build");
        let second = client.http().expect("client should build");
        assert!(std::ptr::eq(first, second));
    }

    #[test]
    fn test_weather_error_display() {
        let err = WeatherError::RequestFailed("HTTP 404 Not Found".to_string());
        assert_eq!(err.to_string(), "Request failed: HTTP 404 Not Found");

        let err = WeatherError::RateLimitExceeded;
        assert!(err.to_string().contains("Rate limit"));
    }

    #[test]
    fn test_config_deserialization_defaults() {
        let config: ClientConfig = serde_json::from_str("{}").expect("should deserialize");
        assert_eq!(config, ClientConfig::default());

        let config: ClientConfig =
            serde_json::from_str(r#"{"base_url": "https://mirror.example", "timeout_secs": 10}"#)
                .expect("should deserialize");
        assert_eq!(config.base_url, "https://mirror.example");
        assert_eq!(config.timeout_secs, Some(10));
    }
}
