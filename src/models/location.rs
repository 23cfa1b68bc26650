//! Location model for geographic coordinates and lookup requests

use serde::{Deserialize, Serialize};

use crate::{OutfitError, Result};

/// Approximate continental-US bounding box accepted for coordinate lookups
pub const US_LATITUDE_RANGE: (f64, f64) = (24.5, 49.5);
pub const US_LONGITUDE_RANGE: (f64, f64) = (-125.0, -66.5);

/// Shortest free-text query sent to the geocoder
pub const MIN_QUERY_LEN: usize = 3;

const MISSING_LOCATION: &str = "Either lat/lon or location must be provided";

/// Point on the globe in decimal degrees
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct Coordinates {
    /// Latitude in decimal degrees
    pub latitude: f64,
    /// Longitude in decimal degrees
    pub longitude: f64,
}

impl Coordinates {
    #[must_use]
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Check the point against the continental-US box (bounds inclusive)
    #[must_use]
    pub fn is_within_continental_us(&self) -> bool {
        let (lat_min, lat_max) = US_LATITUDE_RANGE;
        let (lon_min, lon_max) = US_LONGITUDE_RANGE;
        (lat_min..=lat_max).contains(&self.latitude) && (lon_min..=lon_max).contains(&self.longitude)
    }

    /// Name used when the user supplied raw coordinates
    #[must_use]
    pub fn display_name(&self) -> String {
        format!("{:.2}, {:.2}", self.latitude, self.longitude)
    }
}

/// What the caller asked to look up
#[derive(Debug, Clone, PartialEq)]
pub enum LocationQuery {
    Coordinates(Coordinates),
    Text(String),
}

impl LocationQuery {
    /// Build a query from raw request parameters.
    ///
    /// Coordinates take precedence when both `lat` and `lon` are present.
    pub fn from_params(
        lat: Option<&str>,
        lon: Option<&str>,
        location: Option<&str>,
    ) -> Result<Self> {
        fn non_empty(v: Option<&str>) -> Option<&str> {
            v.map(str::trim).filter(|s| !s.is_empty())
        }

        if let (Some(lat), Some(lon)) = (non_empty(lat), non_empty(lon)) {
            let latitude = parse_degrees(lat, "lat")?;
            let longitude = parse_degrees(lon, "lon")?;
            return Ok(Self::Coordinates(Coordinates::new(latitude, longitude)));
        }

        match non_empty(location) {
            Some(text) => Self::text(text),
            None => Err(OutfitError::invalid_input(MISSING_LOCATION)),
        }
    }

    /// Free-text query, rejected when shorter than [`MIN_QUERY_LEN`] characters
    pub fn text(text: &str) -> Result<Self> {
        let text = text.trim();
        if text.chars().count() < MIN_QUERY_LEN {
            return Err(OutfitError::invalid_input(format!(
                "Location must be at least {MIN_QUERY_LEN} characters"
            )));
        }
        Ok(Self::Text(text.to_string()))
    }
}

fn parse_degrees(raw: &str, name: &str) -> Result<f64> {
    raw.parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| OutfitError::invalid_input(format!("Invalid {name} value: {raw}")))
}

/// A location the weather pipeline can fetch for
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ResolvedLocation {
    pub coordinates: Coordinates,
    /// Human-readable name shown with the forecast
    pub display_name: String,
}

impl ResolvedLocation {
    #[must_use]
    pub fn new(coordinates: Coordinates, display_name: String) -> Self {
        Self {
            coordinates,
            display_name,
        }
    }
}
