/// Coarse condition category reported by the provider (`weather[0].main`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Condition {
    Clouds,
    Clear,
    Rain,
    Drizzle,
    Thunderstorm,
    Snow,
    Haze,
    /// Anything outside the known vocabulary, kept verbatim.
    Other(String),
}

impl Condition {
    /// Parse a provider category string. Matching is case-insensitive and
    /// never fails: unknown categories become [`Condition::Other`].
    pub fn parse(raw: &str) -> Self {
        match raw.to_lowercase().as_str() {
            "clouds" => Condition::Clouds,
            "clear" => Condition::Clear,
            "rain" => Condition::Rain,
            "drizzle" => Condition::Drizzle,
            "thunderstorm" => Condition::Thunderstorm,
            "snow" => Condition::Snow,
            "haze" => Condition::Haze,
            _ => Condition::Other(raw.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Condition::Clouds => "clouds",
            Condition::Clear => "clear",
            Condition::Rain => "rain",
            Condition::Drizzle => "drizzle",
            Condition::Thunderstorm => "thunderstorm",
            Condition::Snow => "snow",
            Condition::Haze => "haze",
            Condition::Other(raw) => raw,
        }
    }
}

/// Last successfully fetched observation for a place.
///
/// Replaced wholesale on every successful search, never patched.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherSnapshot {
    pub place: String,
    pub country: String,
    pub condition: Condition,
    pub description: String,
    pub temperature_k: f64,
    pub humidity_pct: f64,
    pub wind_speed_mps: f64,
}
