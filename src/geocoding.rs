//! ArcGIS World Geocoder client
//!
//! Free-text address lookup (first candidate only) and autocomplete
//! suggestions restricted to the US. No API key required.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

use crate::{FetchStep, OutfitError, Result};

/// Autocomplete entry, passed through to clients verbatim
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Suggestion {
    pub text: String,
    pub magic_key: String,
    pub is_collection: bool,
}

/// Best geocoder match for a free-text query
#[derive(Debug, Clone, PartialEq)]
pub struct GeocodeCandidate {
    /// Matched address, e.g. "Denver, Colorado"
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
    /// ISO 3166-1 alpha-3 code when the geocoder reports one
    pub country: Option<String>,
}

/// ArcGIS response structures
mod arcgis {
    use serde::Deserialize;

    use super::Suggestion;

    #[derive(Debug, Deserialize)]
    pub struct CandidatesResponse {
        #[serde(default)]
        pub candidates: Vec<Candidate>,
    }

    #[derive(Debug, Deserialize)]
    pub struct Candidate {
        pub address: String,
        pub location: Point,
        #[serde(default)]
        pub attributes: Attributes,
    }

    #[derive(Debug, Deserialize)]
    pub struct Point {
        pub x: f64,
        pub y: f64,
    }

    #[derive(Debug, Default, Deserialize)]
    pub struct Attributes {
        #[serde(rename = "Country")]
        pub country: Option<String>,
    }

    #[derive(Debug, Deserialize)]
    pub struct SuggestResponse {
        #[serde(default)]
        pub suggestions: Vec<Suggestion>,
    }
}

impl From<arcgis::Candidate> for GeocodeCandidate {
    fn from(candidate: arcgis::Candidate) -> Self {
        Self {
            address: candidate.address,
            latitude: candidate.location.y,
            longitude: candidate.location.x,
            country: candidate.attributes.country.filter(|c| !c.is_empty()),
        }
    }
}

/// Geocoder client bound to one GeocodeServer base URL
#[derive(Debug, Clone)]
pub struct GeocodingClient {
    client: Client,
    base_url: String,
}

impl GeocodingClient {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Look up the single best candidate for a free-text location
    #[instrument(skip(self))]
    pub async fn find_candidate(&self, text: &str) -> Result<Option<GeocodeCandidate>> {
        let url = format!(
            "{}/findAddressCandidates?f=json&singleLine={}&outFields=Match_addr,Country&maxLocations=1",
            self.base_url,
            urlencoding::encode(text)
        );

        let response: arcgis::CandidatesResponse = self.get_json(&url, FetchStep::Geocode).await?;
        let candidate = response.candidates.into_iter().next().map(GeocodeCandidate::from);

        match &candidate {
            Some(c) => debug!(
                "Geocoded '{}' to {} ({:.4}, {:.4})",
                text, c.address, c.latitude, c.longitude
            ),
            None => warn!("No geocoding candidates for '{}'", text),
        }
        Ok(candidate)
    }

    /// Fetch up to `limit` US autocomplete suggestions
    #[instrument(skip(self))]
    pub async fn suggest(&self, text: &str, limit: u8) -> Result<Vec<Suggestion>> {
        let url = format!(
            "{}/suggest?f=json&text={}&maxSuggestions={}&countryCode=USA",
            self.base_url,
            urlencoding::encode(text),
            limit
        );

        let response: arcgis::SuggestResponse = self.get_json(&url, FetchStep::Suggest).await?;
        debug!("{} suggestions for '{}'", response.suggestions.len(), text);
        Ok(response.suggestions)
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, url: &str, step: FetchStep) -> Result<T> {
        let response = self
            .client
            .get(url)
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_candidate_conversion() {
        let raw: arcgis::CandidatesResponse = serde_json::from_value(serde_json::json!({
            "candidates": [{
                "address": "Denver, Colorado",
                "location": {"x": -104.99, "y": 39.74},
                "score": 100,
                "attributes": {"Match_addr": "Denver, Colorado", "Country": "USA"}
            }]
        }))
        .unwrap();

        let candidate: GeocodeCandidate = raw.candidates.into_iter().next().unwrap().into();
        assert_eq!(candidate.address, "Denver, Colorado");
        assert_eq!(candidate.latitude, 39.74);
        assert_eq!(candidate.longitude, -104.99);
        assert_eq!(candidate.country.as_deref(), Some("USA"));
    }

    #[test]
    fn test_missing_candidates_field() {
        let raw: arcgis::CandidatesResponse =
            serde_json::from_value(serde_json::json!({"spatialReference": {"wkid": 4326}})).unwrap();
        assert!(raw.candidates.is_empty());
    }

    #[test]
    fn test_empty_country_is_none() {
        let raw: arcgis::Candidate = serde_json::from_value(serde_json::json!({
            "address": "Somewhere",
            "location": {"x": 1.0, "y": 2.0},
            "attributes": {"Country": ""}
        }))
        .unwrap();
        assert!(GeocodeCandidate::from(raw).country.is_none());
    }

    #[test]
    fn test_suggestion_passthrough_names() {
        let suggestion: Suggestion = serde_json::from_value(serde_json::json!({
            "text": "Denver, CO, USA",
            "magicKey": "abc123",
            "isCollection": false
        }))
        .unwrap();
        let json = serde_json::to_value(&suggestion).unwrap();
        assert_eq!(json["magicKey"], "abc123");
        assert_eq!(json["isCollection"], false);
    }
}
