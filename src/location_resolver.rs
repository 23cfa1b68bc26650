//! Location Resolution Module
//!
//! Turns a [`LocationQuery`] (raw coordinates or free text) into a
//! [`ResolvedLocation`] inside the supported region.

use tracing::debug;

use crate::geocoding::{GeocodeCandidate, GeocodingClient};
use crate::models::{Coordinates, LocationQuery, ResolvedLocation};
use crate::{OutfitError, Result};

/// Country code the geocoder reports for the United States
pub const SUPPORTED_COUNTRY: &str = "USA";

const UNSUPPORTED_REGION: &str = "This app currently only supports locations in the United States.";

/// Service for resolving location queries
#[derive(Debug, Clone)]
pub struct LocationResolver {
    geocoder: GeocodingClient,
}

impl LocationResolver {
    pub fn new(geocoder: GeocodingClient) -> Self {
        Self { geocoder }
    }

    /// Resolve a query into a named, supported location
    pub async fn resolve(&self, query: LocationQuery) -> Result<ResolvedLocation> {
        debug!("Resolving location query: {:?}", query);

        let location = match query {
            LocationQuery::Coordinates(coordinates) => Self::resolve_coordinates(coordinates)?,
            LocationQuery::Text(text) => self.resolve_text(&text).await?,
        };

        debug!(
            "Resolved location: {} at ({}, {})",
            location.display_name, location.coordinates.latitude, location.coordinates.longitude
        );

        Ok(location)
    }

    /// Raw coordinates are only bounds-checked and named after themselves
    fn resolve_coordinates(coordinates: Coordinates) -> Result<ResolvedLocation> {
        if !coordinates.is_within_continental_us() {
            return Err(OutfitError::unsupported_region(UNSUPPORTED_REGION));
        }
        Ok(ResolvedLocation::new(coordinates, coordinates.display_name()))
    }

    /// Geocode free text and keep the first candidate
    async fn resolve_text(&self, text: &str) -> Result<ResolvedLocation> {
        debug!("Geocoding location text: {}", text);

        let candidate = self
            .geocoder
            .find_candidate(text)
            .await?
            .ok_or_else(|| OutfitError::location_not_found(text))?;

        Self::accept_candidate(candidate)
    }

    fn accept_candidate(candidate: GeocodeCandidate) -> Result<ResolvedLocation> {
        if let Some(country) = &candidate.country
            && country != SUPPORTED_COUNTRY
        {
            debug!("Rejecting candidate {} in {}", candidate.address, country);
            return Err(OutfitError::unsupported_region(UNSUPPORTED_REGION));
        }

        Ok(ResolvedLocation::new(
            Coordinates::new(candidate.latitude, candidate.longitude),
            candidate.address,
        ))
    }
}
