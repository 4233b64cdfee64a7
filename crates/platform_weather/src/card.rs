//! Weather card
//!
//! Fetches the location document, converts units on the first consolidated
//! weather entry and renders the card. Only the fetch is a recovery boundary:
//! a failed request or an undecodable body becomes the error banner, while a
//! document that decodes but has the wrong shape is returned to the host as
//! [`CardError::UnexpectedResponse`].

use domain::CardOptions;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, instrument, warn};

use crate::client::{ClientConfig, MetaWeatherClient, WeatherSource};
use crate::models::{LocationWeather, ShapeError};
use crate::templates::{CardTemplates, CardView, TemplateError};

/// Errors a render hands back to the host
#[derive(Debug, Error)]
pub enum CardError {
    /// The API answered with JSON the card cannot read
    #[error("Unexpected weather response: {0}")]
    UnexpectedResponse(#[from] ShapeError),

    /// Template compilation or rendering failed
    #[error(transparent)]
    Template(#[from] TemplateError),
}

/// A dashboard card showing current weather for one location
#[derive(Clone)]
pub struct WeatherCard {
    options: CardOptions,
    source: Arc<dyn WeatherSource>,
}

impl fmt::Debug for WeatherCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WeatherCard")
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

impl WeatherCard {
    /// Create a card from host-supplied options, using the public MetaWeather API
    ///
    /// Missing options get their defaults and unknown ones are kept. Performs
    /// no I/O and never fails.
    pub fn new<I, K, V>(options: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self::from_options(CardOptions::new(options))
    }

    /// Create a card from prepared options, using the public MetaWeather API
    pub fn from_options(options: CardOptions) -> Self {
        Self::with_client_config(options, ClientConfig::default())
    }

    /// Create a card that talks to MetaWeather with a custom client configuration
    pub fn with_client_config(options: CardOptions, config: ClientConfig) -> Self {
        Self::with_source(options, Arc::new(MetaWeatherClient::new(config)))
    }

    /// Create a card reading from any weather source
    pub fn with_source(options: CardOptions, source: Arc<dyn WeatherSource>) -> Self {
        Self { options, source }
    }

    /// Options this card was built with
    pub const fn options(&self) -> &CardOptions {
        &self.options
    }

    /// Fetch current weather and render the card as an HTML fragment
    ///
    /// A fetch failure renders the error banner and is returned as `Ok`.
    ///
    /// # Errors
    ///
    /// Returns `CardError::UnexpectedResponse` when the API returns JSON that
    /// lacks the expected fields, and `CardError::Template` if rendering fails.
    #[instrument(skip(self), fields(woeid = %self.options.woeid()))]
    pub async fn render(&self) -> Result<String, CardError> {
        let templates = CardTemplates::shared()?;

        let document = match self.source.location(self.options.woeid()).await {
            Ok(document) => document,
            Err(e) => {
                warn!(error = %e, "Weather fetch failed, rendering error card");
                return Ok(templates.render_error(&e.to_string())?);
            },
        };

        let mut weather = LocationWeather::try_from(document)?;
        self.apply_units(&mut weather);

        let view = CardView {
            icon_url: self.source.icon_url(&weather.current.weather_state_abbr),
            weather: &weather,
            wind_speed_unit: self.options.wind_speed_unit(),
            air_pressure_unit: self.options.air_pressure_unit(),
            visibility_unit: self.options.visibility_unit(),
        };

        Ok(templates.render_card(&view)?)
    }

    /// Convert the current conditions from API units into the configured units
    ///
    /// Order: temperatures, wind speed, air pressure, visibility.
    pub fn apply_units(&self, weather: &mut LocationWeather) {
        let current = &mut weather.current;

        let temperature = self.options.temperature_unit();
        current.the_temp = temperature.convert(current.the_temp);
        current.min_temp = temperature.convert(current.min_temp);
        current.max_temp = temperature.convert(current.max_temp);

        let wind_speed = self.options.wind_speed();
        current.wind_speed = wind_speed.convert(current.wind_speed);

        let air_pressure = self.options.air_pressure();
        current.air_pressure = air_pressure.convert(current.air_pressure);

        let visibility = self.options.visibility();
        current.visibility = visibility.convert(current.visibility);

        debug!(
            %temperature,
            %wind_speed,
            %air_pressure,
            %visibility,
            "Applied display units"
        );
    }
}
