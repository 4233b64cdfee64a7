//! Card templates
//!
//! Uses Tera with two embedded HTML templates, one for the weather card and one
//! for the error banner. Auto-escaping is on for both, so text coming from the
//! API or from an error message cannot inject markup.
//!
//! Measurements go through the `floor_round` filter, which rounds down and
//! always prints the requested number of decimals (`68.0`, not `68`).

use serde::Serialize;
use std::collections::HashMap;
use std::sync::{Arc, LazyLock};
use tera::{Context, Tera, Value};
use thiserror::Error;

use crate::models::LocationWeather;

/// Name of the weather card template
pub const CARD_TEMPLATE: &str = "weather/card.html";
/// Name of the error banner template
pub const ERROR_TEMPLATE: &str = "weather/error.html";

/// Error type for template operations
#[derive(Debug, Error)]
pub enum TemplateError {
    /// Template not found
    #[error("Template not found: {0}")]
    NotFound(String),

    /// Template rendering failed
    #[error("Template rendering failed: {0}")]
    Render(String),

    /// Template compilation failed
    #[error("Template compilation failed: {0}")]
    Compile(String),
}

impl From<tera::Error> for TemplateError {
    fn from(e: tera::Error) -> Self {
        match e.kind {
            tera::ErrorKind::TemplateNotFound(name) => Self::NotFound(name),
            _ => Self::Render(e.to_string()),
        }
    }
}

/// Everything the card template reads
#[derive(Debug, Clone, Serialize)]
pub struct CardView<'a> {
    /// Weather with units already converted
    pub weather: &'a LocationWeather,
    /// Icon for the current weather state
    pub icon_url: String,
    /// Wind speed label, as configured
    pub wind_speed_unit: &'a str,
    /// Air pressure label, as configured
    pub air_pressure_unit: &'a str,
    /// Visibility label, as configured
    pub visibility_unit: &'a str,
}

/// Embedded templates - compiled into the binary
mod embedded {
    pub const CARD: &str = r#"
<div class="list-group">
    <div class="list-group-item">
        <div class="row align-items-center">
            <div class="col">
                <img height="48px" src="{{ icon_url }}">
            </div>
            <div class="col">
                <h2 class="m-0 text-primary">{{ weather.current.the_temp | floor_round }}&deg;</h2>
            </div>
        </div>
    </div>
    <div class="list-group-item text-center">
        <h4 class="align-middle m-0 text-secondary">{{ weather.title }}</h4>
    </div>
    <div class="list-group-item text-center">
        <b>Currently: </b>{{ weather.current.weather_state_name }}
    </div>
    <div class="list-group-item text-center">
        <b>Min: </b>{{ weather.current.min_temp | floor_round }}&deg;
    </div>
    <div class="list-group-item text-center">
        <b>Wind: </b>{{ weather.current.wind_direction_compass }} at {{ weather.current.wind_speed | floor_round }} {{ wind_speed_unit }}
    </div>
    <div class="list-group-item text-center">
        <b>Humidity: </b>{{ weather.current.humidity }}%
    </div>
    <div class="list-group-item text-center">
        <b>Air Pressure: </b>{{ weather.current.air_pressure | floor_round }} {{ air_pressure_unit }}
    </div>
    <div class="list-group-item text-center">
        <b>Visibility: </b>{{ weather.current.visibility | floor_round }} {{ visibility_unit }}
    </div>
    <div class="list-group-item text-center">
        <b>Predictability: </b>{{ weather.current.predictability }}%
    </div>
</div>
"#;

    pub const ERROR: &str = r#"
<div class="row">
    <div class="col s12">
        <span class="theme-failure-text font-weight-900">Check your config. This error was returned: {{ error }}</span>
    </div>
</div>
"#;
}

static SHARED: LazyLock<Result<CardTemplates, String>> =
    LazyLock::new(|| CardTemplates::new().map_err(|e| e.to_string()));

/// Card template engine using Tera
#[derive(Clone)]
pub struct CardTemplates {
    tera: Arc<Tera>,
}

impl std::fmt::Debug for CardTemplates {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CardTemplates").finish_non_exhaustive()
    }
}

impl CardTemplates {
    /// Compile the embedded templates
    pub fn new() -> Result<Self, TemplateError> {
        let mut tera = Tera::default();
        tera.autoescape_on(vec![".html"]);

        tera.add_raw_template(CARD_TEMPLATE, embedded::CARD)
            .map_err(|e| TemplateError::Compile(e.to_string()))?;
        tera.add_raw_template(ERROR_TEMPLATE, embedded::ERROR)
            .map_err(|e| TemplateError::Compile(e.to_string()))?;

        tera.register_filter("floor_round", floor_round_filter);

        Ok(Self {
            tera: Arc::new(tera),
        })
    }

    /// Process-wide templates, compiled on first use
    pub fn shared() -> Result<&'static Self, TemplateError> {
        SHARED
            .as_ref()
            .map_err(|e| TemplateError::Compile(e.clone()))
    }

    /// Render the weather card
    pub fn render_card(&self, view: &CardView<'_>) -> Result<String, TemplateError> {
        let ctx = Context::from_serialize(view)?;

        self.tera
            .render(CARD_TEMPLATE, &ctx)
            .map_err(TemplateError::from)
    }

    /// Render the error banner for a failed fetch
    pub fn render_error(&self, error: &str) -> Result<String, TemplateError> {
        let mut ctx = Context::new();
        ctx.insert("error", error);

        self.tera
            .render(ERROR_TEMPLATE, &ctx)
            .map_err(TemplateError::from)
    }
}

/// Custom filter: Round a number down to `precision` decimals (default 1)
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn floor_round_filter(value: &Value, args: &HashMap<String, Value>) -> tera::Result<Value> {
    let number = value
        .as_f64()
        .ok_or_else(|| tera::Error::msg("floor_round requires a number"))?;

    let precision = args
        .get("precision")
        .and_then(Value::as_u64)
        .unwrap_or(1)
        .min(u64::from(u8::MAX)) as u8;

    Ok(Value::String(domain::format_floored(number, precision)))
}
