//! weather.gov client
//!
//! A lookup is three sequential calls: the `/points` grid reference for the
//! coordinates, then the two forecast URLs it returns.

use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

use crate::models::Coordinates;
use crate::{FetchStep, OutfitError, Result};

pub mod reshape;
pub mod weather_gov;

pub use weather_gov::{ForecastPeriod, GridPoints};

/// Client for `api.weather.gov`
#[derive(Debug, Clone)]
pub struct WeatherGovClient {
    client: Client,
    base_url: String,
}

impl WeatherGovClient {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Resolve coordinates to the forecast URLs of their grid cell
    #[instrument(skip(self), fields(lat = coordinates.latitude, lon = coordinates.longitude))]
    pub async fn grid_points(&self, coordinates: Coordinates) -> Result<GridPoints> {
        let url = format!(
            "{}/points/{},{}",
            self.base_url,
            format_degrees(coordinates.latitude),
            format_degrees(coordinates.longitude)
        );

        let points: weather_gov::PointsResponse = self.get_json(&url, FetchStep::GridPoints).await?;
        debug!("Forecast URL {}", points.properties.forecast);
        Ok(points.properties)
    }

    /// 12-hour day/night periods, in upstream order
    #[instrument(skip(self))]
    pub async fn forecast(&self, url: &str) -> Result<Vec<ForecastPeriod>> {
        let response: weather_gov::ForecastResponse = self.get_json(url, FetchStep::Forecast).await?;
        debug!("{} forecast periods", response.properties.periods.len());
        Ok(response.properties.periods)
    }

    /// Hourly periods, in upstream order; the first one is "now"
    #[instrument(skip(self))]
    pub async fn hourly_forecast(&self, url: &str) -> Result<Vec<ForecastPeriod>> {
        let response: weather_gov::ForecastResponse =
            self.get_json(url, FetchStep::HourlyForecast).await?;
        debug!("{} hourly periods", response.properties.periods.len());
        Ok(response.properties.periods)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str, step: FetchStep) -> Result<T> {
        let response = self
            .client
            .get(url)
            .header(reqwest::header::ACCEPT, "application/geo+json")
            .send()
            .await
            .map_err(|e| OutfitError::upstream(step, e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(OutfitError::upstream(step, format!("status {status}")));
        }

        response
            .json()
            .await
            .map_err(|e| OutfitError::upstream(step, format!("invalid response: {e}")))
    }
}

/// Four decimals without trailing zeros, the form `/points` answers directly
fn format_degrees(value: f64) -> String {
    let formatted = format!("{value:.4}");
    formatted
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}
