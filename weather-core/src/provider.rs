use crate::{Config, FetchError, WeatherSnapshot, provider::openweather::OpenWeatherProvider};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod openweather;

/// Source of current-weather snapshots, looked up by free-text place name.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    /// Issue exactly one request for `location`.
    async fn current(&self, location: &str) -> Result<WeatherSnapshot, FetchError>;
}

/// Construct the OpenWeather provider from config, with an optional API key
/// that takes precedence over the stored one.
pub fn provider_from_config(
    config: &Config,
    api_key_override: Option<&str>,
) -> anyhow::Result<Box<dyn WeatherProvider>> {
    let api_key = api_key_override.or(config.api_key()).ok_or_else(|| {
        anyhow::anyhow!(
            "No OpenWeather API key configured.\n\
                 Hint: run `weather configure` or set OPENWEATHER_API_KEY."
        )
    })?;

    let provider = OpenWeatherProvider::new(api_key.to_owned()).with_base_url(config.base_url());

    Ok(Box::new(provider))
}
