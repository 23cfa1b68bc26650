//! Weather lookup pipeline
//!
//! Resolve the location, fetch the grid reference and both forecasts from
//! weather.gov one after another, reshape, then run the outfit rules.

use std::fmt;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};

use crate::config::AppConfig;
use crate::geocoding::{GeocodingClient, Suggestion};
use crate::location_resolver::LocationResolver;
use crate::models::{LocationQuery, OutfitRecommendation, WeatherSummary, location::MIN_QUERY_LEN};
use crate::outfit;
use crate::weather::{WeatherGovClient, reshape};
use crate::{OutfitError, Result};

/// Weather summary plus the outfit recommended for it
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct WeatherReport {
    #[serde(flatten)]
    pub summary: WeatherSummary,
    pub outfit: OutfitRecommendation,
}

/// Service running lookups against the geocoder and weather.gov
#[derive(Debug, Clone)]
pub struct OutfitForecastService {
    resolver: LocationResolver,
    geocoder: GeocodingClient,
    weather: WeatherGovClient,
    suggestion_limit: u8,
}

impl OutfitForecastService {
    pub fn new(geocoder: GeocodingClient, weather: WeatherGovClient, suggestion_limit: u8) -> Self {
        Self {
            resolver: LocationResolver::new(geocoder.clone()),
            geocoder,
            weather,
            suggestion_limit,
        }
    }

    /// Build both upstream clients from configuration, sharing one HTTP client
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(config.weather.user_agent.as_str())
            .build()
            .map_err(|e| OutfitError::config(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self::new(
            GeocodingClient::new(client.clone(), config.geocoder.base_url.as_str()),
            WeatherGovClient::new(client, config.weather.base_url.as_str()),
            config.geocoder.suggestion_limit,
        ))
    }

    /// Run the full pipeline for one query
    #[instrument(skip(self))]
    pub async fn lookup(&self, query: LocationQuery) -> Result<WeatherReport> {
        let location = self.resolver.resolve(query).await?;

        let grid = self.weather.grid_points(location.coordinates).await?;
        let daily = self.weather.forecast(&grid.forecast).await?;
        let hourly = self.weather.hourly_forecast(&grid.forecast_hourly).await?;

        let summary = reshape::reshape(&location.display_name, &daily, &hourly)?;
        let outfit = outfit::recommend(&summary);

        info!(
            "Weather for {}: {}°F, {}",
            summary.location_name, summary.temperature_f, summary.condition_text
        );

        Ok(WeatherReport { summary, outfit })
    }

    /// Autocomplete suggestions; never fails, an unusable answer is empty
    #[instrument(skip(self))]
    pub async fn suggestions(&self, query: &str) -> Vec<Suggestion> {
        let query = query.trim();
        if query.chars().count() < MIN_QUERY_LEN {
            return Vec::new();
        }

        match self.geocoder.suggest(query, self.suggestion_limit).await {
            Ok(suggestions) => suggestions,
            Err(e) => {
                warn!("Suggestion lookup failed for '{}': {}", query, e);
                Vec::new()
            }
        }
    }
}

impl fmt::Display for WeatherReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = &self.summary;
        writeln!(f, "📍 {}", s.location_name)?;
        writeln!(
            f,
            "   {}°F (feels like {}°F), {}",
            s.temperature_f, s.feels_like_f, s.condition_text
        )?;
        writeln!(
            f,
            "   Humidity {}%, wind {} mph, UV index ~{}",
            s.humidity_pct, s.wind_speed_mph, s.uv_index_estimate
        )?;
        for day in &s.three_day_forecast {
            match day.low_f {
                Some(low) => writeln!(f, "   {:<10} {:>3}°/{:>3}°  {}", day.day, day.high_f, low, day.condition)?,
                None => writeln!(f, "   {:<10} {:>3}°/  -   {}", day.day, day.high_f, day.condition)?,
            }
        }
        writeln!(f)?;
        write!(f, "{}", self.outfit)
    }
}
