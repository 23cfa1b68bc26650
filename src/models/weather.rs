//! Weather summary model returned by the weather endpoint

use serde::{Deserialize, Serialize};

/// Flat current-conditions and short-range forecast for one location
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WeatherSummary {
    /// Display name of the resolved location
    #[serde(rename = "location")]
    pub location_name: String,
    /// Current temperature in Fahrenheit
    #[serde(rename = "temperature")]
    pub temperature_f: f64,
    /// weather.gov has no feels-like value; mirrors the temperature
    #[serde(rename = "feelsLike")]
    pub feels_like_f: f64,
    /// Short forecast text, e.g. "Mostly Sunny"
    #[serde(rename = "condition")]
    pub condition_text: String,
    /// Relative humidity percentage (0-100)
    #[serde(rename = "humidity")]
    pub humidity_pct: f64,
    /// Sustained wind speed in mph
    #[serde(rename = "windSpeed")]
    pub wind_speed_mph: f64,
    /// Heuristic UV index, see [`crate::weather::reshape::estimate_uv_index`]
    #[serde(rename = "uvIndex")]
    pub uv_index_estimate: u8,
    /// Up to three daytime forecast entries, in order
    #[serde(rename = "forecast")]
    pub three_day_forecast: Vec<DailyForecast>,
    /// Always "imperial" for weather.gov
    pub units: String,
}

/// One daytime forecast entry
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct DailyForecast {
    /// First word of the period name ("Today", "Tuesday")
    pub day: String,
    pub condition: String,
    /// Daytime high in Fahrenheit
    #[serde(rename = "high")]
    pub high_f: i32,
    /// Overnight low for the same date, when the forecast has one
    #[serde(rename = "low")]
    pub low_f: Option<i32>,
}
