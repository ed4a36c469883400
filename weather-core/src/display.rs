//! Presentation helpers: everything shown on a weather card is derived here
//! from a [`WeatherSnapshot`] and the current date, with no stored state.

use chrono::{Local, NaiveDate};
use std::fmt;

use crate::model::{Condition, WeatherSnapshot};

const ZERO_CELSIUS_K: f64 = 273.15;

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

pub fn celsius(kelvin: f64) -> f64 {
    round2(kelvin - ZERO_CELSIUS_K)
}

pub fn fahrenheit(kelvin: f64) -> f64 {
    round2((kelvin - ZERO_CELSIUS_K) * 9.0 / 5.0 + 32.0)
}

/// Display icon for a condition category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Cloud,
    Sun,
    Raindrop,
    Drizzle,
    Lightning,
    Snowflake,
    Haze,
}

impl Icon {
    /// `None` for categories outside the known vocabulary.
    pub fn for_condition(condition: &Condition) -> Option<Self> {
        match condition {
            Condition::Clouds => Some(Icon::Cloud),
            Condition::Clear => Some(Icon::Sun),
            Condition::Rain => Some(Icon::Raindrop),
            Condition::Drizzle => Some(Icon::Drizzle),
            Condition::Thunderstorm => Some(Icon::Lightning),
            Condition::Snow => Some(Icon::Snowflake),
            Condition::Haze => Some(Icon::Haze),
            Condition::Other(_) => None,
        }
    }

    /// Case-insensitive lookup straight from the provider's category string.
    pub fn for_category(category: &str) -> Option<Self> {
        Self::for_condition(&Condition::parse(category))
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            Icon::Cloud => "☁",
            Icon::Sun => "☀",
            Icon::Raindrop => "💧",
            Icon::Drizzle => "🌦",
            Icon::Lightning => "⚡",
            Icon::Snowflake => "❄",
            Icon::Haze => "🌫",
        }
    }
}

/// Uppercase the first character only; the rest is left as-is.
pub fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// `DD/MM/YY`.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d/%m/%y").to_string()
}

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Everything a rendered card shows, already derived.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherCard {
    pub location: String,
    pub date: String,
    pub icon: Option<Icon>,
    pub celsius: f64,
    pub fahrenheit: f64,
    pub description: String,
    pub humidity_pct: f64,
    pub wind_speed_mps: f64,
}

impl WeatherCard {
    pub fn new(snapshot: &WeatherSnapshot, date: NaiveDate) -> Self {
        Self {
            location: format!("{}, {}", snapshot.place, snapshot.country),
            date: format_date(date),
            icon: Icon::for_condition(&snapshot.condition),
            celsius: celsius(snapshot.temperature_k),
            fahrenheit: fahrenheit(snapshot.temperature_k),
            description: capitalize_first(&snapshot.description),
            humidity_pct: snapshot.humidity_pct,
            wind_speed_mps: snapshot.wind_speed_mps,
        }
    }
}

impl fmt::Display for WeatherCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "📍 {}  Date: {}", self.location, self.date)?;
        if let Some(icon) = self.icon {
            writeln!(f, "   {}", icon.glyph())?;
        }
        writeln!(f, "Temperature: {:.2}°C / {:.2}°F", self.celsius, self.fahrenheit)?;
        writeln!(f, "Weather: {}", self.description)?;
        writeln!(f, "Humidity: {}%", self.humidity_pct)?;
        write!(f, "Wind Speed: {} m/s", self.wind_speed_mps)
    }
}
