//! Error types and handling for the weather outfit service

use std::fmt;

use thiserror::Error;

/// Upstream call that a request pipeline was making when it failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchStep {
    /// Free-text geocoding (first candidate lookup)
    Geocode,
    /// Geocoder autocomplete suggestions
    Suggest,
    /// weather.gov `/points` grid reference lookup
    GridPoints,
    /// weather.gov daily (12-hour period) forecast
    Forecast,
    /// weather.gov hourly forecast
    HourlyForecast,
}

impl FetchStep {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            FetchStep::Geocode => "geocode",
            FetchStep::Suggest => "suggest",
            FetchStep::GridPoints => "grid points",
            FetchStep::Forecast => "forecast",
            FetchStep::HourlyForecast => "hourly forecast",
        }
    }
}

impl fmt::Display for FetchStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Main error type for the weather outfit service
#[derive(Error, Debug)]
pub enum OutfitError {
    /// Request did not carry a usable location
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    /// Geocoder returned no candidates for the query
    #[error("Location not found: {query}")]
    LocationNotFound { query: String },

    /// Location is outside the supported (US) region
    #[error("Unsupported region: {message}")]
    UnsupportedRegion { message: String },

    /// An upstream HTTP call failed or returned unusable data
    #[error("Failed to get {step}: {message}")]
    Upstream { step: FetchStep, message: String },

    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// I/O operation errors
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

impl OutfitError {
    /// Create a new input validation error
    pub fn invalid_input<S: Into<String>>(message: S) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    pub fn location_not_found<S: Into<String>>(query: S) -> Self {
        Self::LocationNotFound {
            query: query.into(),
        }
    }

    pub fn unsupported_region<S: Into<String>>(message: S) -> Self {
        Self::UnsupportedRegion {
            message: message.into(),
        }
    }

    /// Create a new upstream error for the given step
    pub fn upstream<S: Into<String>>(step: FetchStep, message: S) -> Self {
        Self::Upstream {
            step,
            message: message.into(),
        }
    }

    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// HTTP status code the web layer answers with
    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self {
            OutfitError::InvalidInput { .. } => 400,
            OutfitError::LocationNotFound { .. } => 404,
            OutfitError::UnsupportedRegion { .. } => 400,
            // weather.gov rejects points it has no grid for (oceans, non-US)
            OutfitError::Upstream {
                step: FetchStep::GridPoints,
                ..
            } => 400,
            OutfitError::Upstream { .. } => 500,
            OutfitError::Config { .. } | OutfitError::Io { .. } => 500,
        }
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            OutfitError::InvalidInput { message } => message.clone(),
            OutfitError::LocationNotFound { .. } => {
                "We couldn't find that location. Please try a different city, state, or zip code."
                    .to_string()
            }
            OutfitError::UnsupportedRegion { .. } => {
                "This app currently only supports locations in the United States.".to_string()
            }
            OutfitError::Upstream {
                step: FetchStep::GridPoints,
                ..
            } => "This location is not supported by the weather.gov API. Please try a location within the United States."
                .to_string(),
            OutfitError::Upstream { .. } => "Failed to fetch weather data".to_string(),
            OutfitError::Config { .. } => {
                "Configuration error. Please check your config file.".to_string()
            }
            OutfitError::Io { .. } => "Failed to fetch weather data".to_string(),
        }
    }

    /// Client errors are expected traffic; everything else is worth an error log
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.status_code())
    }
}
