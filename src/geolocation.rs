//! Current-position lookup
//!
//! A position source answers once per call with coordinates or one of a
//! fixed set of refusals. The service itself has no device to ask, so the
//! shipped implementation reads a fixed position from configuration.

use async_trait::async_trait;
use thiserror::Error;
use tracing::debug;

use crate::config::GeolocationConfig;
use crate::models::Coordinates;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeolocationError {
    #[error("Location permission denied")]
    PermissionDenied,

    #[error("Location information unavailable")]
    Unavailable,

    #[error("Location request timed out")]
    Timeout,

    #[error("Location access is disabled by policy")]
    PolicyRestricted,
}

impl GeolocationError {
    /// Text shown to the user, who can still type a location instead
    #[must_use]
    pub fn user_message(&self) -> &'static str {
        match self {
            GeolocationError::PermissionDenied => {
                "Location permission denied. Please enter a location manually."
            }
            GeolocationError::Unavailable => {
                "Your location is unavailable. Please enter a location manually."
            }
            GeolocationError::Timeout => {
                "Timed out while getting your location. Please enter a location manually."
            }
            GeolocationError::PolicyRestricted => {
                "Location access is not allowed here. Please enter a location manually."
            }
        }
    }
}

/// Source of the caller's current position
#[async_trait]
pub trait Geolocator: Send + Sync {
    async fn current_position(&self) -> Result<Coordinates, GeolocationError>;
}

/// Position taken from the `[geolocation]` configuration section
#[derive(Debug, Clone)]
pub struct ConfiguredGeolocator {
    enabled: bool,
    position: Option<Coordinates>,
}

impl ConfiguredGeolocator {
    #[must_use]
    pub fn new(config: &GeolocationConfig) -> Self {
        let position = match (config.latitude, config.longitude) {
            (Some(lat), Some(lon)) => Some(Coordinates::new(lat, lon)),
            _ => None,
        };
        Self {
            enabled: config.enabled,
            position,
        }
    }
}

#[async_trait]
impl Geolocator for ConfiguredGeolocator {
    async fn current_position(&self) -> Result<Coordinates, GeolocationError> {
        if !self.enabled {
            return Err(GeolocationError::PolicyRestricted);
        }
        let position = self.position.ok_or(GeolocationError::Unavailable)?;
        debug!("Configured position: {:?}", position);
        Ok(position)
    }
}
