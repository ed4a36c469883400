use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::{
    error::FetchError,
    model::{Condition, WeatherSnapshot},
};

use super::WeatherProvider;

pub const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org";

const CURRENT_PATH: &str = "/data/2.5/weather";

#[derive(Debug, Clone)]
pub struct OpenWeatherProvider {
    api_key: String,
    base_url: String,
    http: Client,
}

impl OpenWeatherProvider {
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
            http: Client::new(),
        }
    }

    /// Point the provider at another host, e.g. a mock server in tests.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn fetch_current(&self, location: &str) -> Result<WeatherSnapshot, FetchError> {
        let url = format!("{}{}", self.base_url, CURRENT_PATH);
        debug!(%url, location, "requesting current weather");

        // `query` percent-encodes the location, so spaces and `&` are safe.
        let res = self
            .http
            .get(&url)
            .query(&[("q", location), ("appid", self.api_key.as_str())])
            .send()
            .await
            .map_err(FetchError::Transport)?;

        let status = res.status();
        let body = res.text().await.map_err(FetchError::Transport)?;

        if !status.is_success() {
            return Err(FetchError::Status { status, body: truncate_body(&body) });
        }

        parse_current(&body)
    }
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
    humidity: f64,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    main: String,
    description: String,
}

#[derive(Debug, Deserialize)]
struct OwWind {
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct OwSys {
    country: String,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    name: String,
    sys: OwSys,
    main: OwMain,
    weather: Vec<OwWeather>,
    wind: OwWind,
}

/// Decode a `/data/2.5/weather` body. Only the first `weather` entry counts.
pub fn parse_current(body: &str) -> Result<WeatherSnapshot, FetchError> {
    let parsed: OwCurrentResponse = serde_json::from_str(body)?;

    let weather = parsed
        .weather
        .into_iter()
        .next()
        .ok_or_else(|| FetchError::Parse("response contained no weather entries".to_string()))?;

    Ok(WeatherSnapshot {
        place: parsed.name,
        country: parsed.sys.country,
        condition: Condition::parse(&weather.main),
        description: weather.description,
        temperature_k: parsed.main.temp,
        humidity_pct: parsed.main.humidity,
        wind_speed_mps: parsed.wind.speed,
    })
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    async fn current(&self, location: &str) -> Result<WeatherSnapshot, FetchError> {
        self.fetch_current(location).await
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() <= MAX {
        return body.to_string();
    }
    let mut end = MAX;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &body[..end])
}
