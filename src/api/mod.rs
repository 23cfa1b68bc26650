use axum::{
    Router,
    extract::{Query, State, rejection::QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::get,
};
use serde::{Deserialize, Serialize};
use tracing::{error, instrument, warn};

use crate::OutfitError;
use crate::forecast_service::{OutfitForecastService, WeatherReport};
use crate::geocoding::Suggestion;
use crate::models::LocationQuery;

/// Shared handler state
#[derive(Debug, Clone)]
pub struct AppState {
    pub service: OutfitForecastService,
}

impl AppState {
    pub fn new(service: OutfitForecastService) -> Self {
        Self { service }
    }
}

/// Raw query parameters; parsed by [`LocationQuery::from_params`] so bad
/// numbers get the same error body as everything else
#[derive(Debug, Deserialize)]
pub struct WeatherParams {
    pub lat: Option<String>,
    pub lon: Option<String>,
    pub location: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SuggestionParams {
    pub query: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SuggestionsResponse {
    pub suggestions: Vec<Suggestion>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Pipeline failure rendered as `{ "error": ... }` with the mapped status
pub struct ApiError(OutfitError);

impl From<OutfitError> for ApiError {
    fn from(err: OutfitError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let err = self.0;
        if err.is_client_error() {
            warn!("Request rejected: {}", err);
        } else {
            error!("Request failed: {}", err);
        }

        let status =
            StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let body = ErrorBody {
            error: err.user_message(),
        };
        (status, Json(body)).into_response()
    }
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/weather", get(get_weather))
        .route("/location-suggestions", get(get_location_suggestions))
}

#[instrument(skip(state))]
async fn get_weather(
    State(state): State<AppState>,
    params: Result<Query<WeatherParams>, QueryRejection>,
) -> Result<Json<WeatherReport>, ApiError> {
    let Query(params) = params.map_err(|e| OutfitError::invalid_input(e.body_text()))?;
    let query = LocationQuery::from_params(
        params.lat.as_deref(),
        params.lon.as_deref(),
        params.location.as_deref(),
    )?;
    let report = state.service.lookup(query).await?;
    Ok(Json(report))
}

#[instrument(skip(state))]
async fn get_location_suggestions(
    State(state): State<AppState>,
    params: Result<Query<SuggestionParams>, QueryRejection>,
) -> Json<SuggestionsResponse> {
    let query = match params {
        Ok(Query(params)) => params.query.unwrap_or_default(),
        Err(e) => {
            warn!("Ignoring malformed suggestion query: {}", e.body_text());
            String::new()
        }
    };
    let suggestions = state.service.suggestions(&query).await;
    Json(SuggestionsResponse { suggestions })
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: crate::VERSION.to_string(),
    })
}
