//! Weather outfit recommender
//!
//! Looks up current conditions and a short forecast for a US location from
//! weather.gov and turns them into clothing advice.

pub mod api;
pub mod config;
pub mod error;
pub mod forecast_service;
pub mod geocoding;
pub mod geolocation;
pub mod location_resolver;
pub mod models;
pub mod outfit;
pub mod telemetry;
pub mod weather;
pub mod web;

// Re-export core types for public API
pub use config::AppConfig;
pub use error::{FetchStep, OutfitError};
pub use forecast_service::{OutfitForecastService, WeatherReport};
pub use geocoding::{GeocodingClient, Suggestion};
pub use geolocation::{ConfiguredGeolocator, GeolocationError, Geolocator};
pub use location_resolver::LocationResolver;
pub use models::{
    Coordinates, DailyForecast, LocationQuery, OutfitRecommendation, ResolvedLocation,
    WeatherSummary,
};
pub use weather::WeatherGovClient;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, OutfitError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
