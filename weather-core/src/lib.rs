//! Core library for the `weather` CLI.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - The OpenWeather current-weather fetch behind a provider trait
//! - The snapshot model and its display derivations
//! - The search state of a weather view (query, snapshot, loading flag)
//!
//! It is used by `weather-cli`, but can also be reused by other front ends.

pub mod config;
pub mod display;
pub mod error;
pub mod model;
pub mod provider;
pub mod state;

pub use config::Config;
pub use display::{Icon, WeatherCard};
pub use error::{ErrorKind, FetchError};
pub use model::{Condition, WeatherSnapshot};
pub use provider::{WeatherProvider, openweather::OpenWeatherProvider, provider_from_config};
pub use state::{SearchOutcome, SearchTicket, WeatherState};
