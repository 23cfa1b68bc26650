//! `api.weather.gov` response structures
//!
//! Only the fields the reshaper reads are modelled; everything else in the
//! GeoJSON payloads is ignored.

use chrono::{DateTime, FixedOffset};
use serde::Deserialize;

/// `/points/{lat},{lon}` response
#[derive(Debug, Deserialize)]
pub struct PointsResponse {
    pub properties: GridPoints,
}

/// Grid reference for a point: the forecast URLs to follow next
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridPoints {
    /// 12-hour period forecast URL
    pub forecast: String,
    /// Hourly forecast URL
    pub forecast_hourly: String,
}

/// Forecast and hourly forecast response
#[derive(Debug, Deserialize)]
pub struct ForecastResponse {
    pub properties: ForecastProperties,
}

#[derive(Debug, Deserialize)]
pub struct ForecastProperties {
    #[serde(default)]
    pub periods: Vec<ForecastPeriod>,
}

/// One forecast period (12 hours for the daily forecast, 1 hour for hourly)
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastPeriod {
    /// "Today", "Tonight", "Wednesday Night", empty for hourly periods
    #[serde(default)]
    pub name: String,
    /// Local time at the forecast location, with its UTC offset
    pub start_time: DateTime<FixedOffset>,
    pub is_daytime: bool,
    /// Fahrenheit
    pub temperature: i32,
    /// "10 mph" or "5 to 10 mph"
    #[serde(default)]
    pub wind_speed: String,
    #[serde(default)]
    pub short_forecast: String,
    #[serde(default)]
    pub relative_humidity: Option<QuantitativeValue>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct QuantitativeValue {
    pub value: Option<f64>,
}
