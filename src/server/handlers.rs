//! HTTP endpoint handlers.
//!
//! This module provides the request handlers for:
//! - `/health` - Health check endpoint
//! - `/api/v1/airports` - Filtered airport listing
//! - `/api/v1/admin/airports` - Placeholder admin endpoints that never change the cache

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use super::error::AppError;
use crate::cache::{AirportQuery, AirportStore};
use crate::data::FlatAirport;

/// Shared state handed to every handler.
pub type AppState = Arc<AirportStore>;

/// Base path of the admin endpoints.
pub const ADMIN_AIRPORTS_PATH: &str = "/api/v1/admin/airports";

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    /// Number of cached airports
    pub airports: usize,
}

/// Airport body accepted and returned by the admin endpoints.
///
/// Every field is optional since the placeholders accept partial records.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AirportPayload {
    pub airport_code: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub airport_name: Option<String>,
    pub city_code: Option<String>,
    pub city_name: Option<String>,
    pub time_zone_name: Option<String>,
    pub state_code: Option<String>,
    pub state_name: Option<String>,
    pub country_code: Option<String>,
    pub country_name: Option<String>,
    pub region_code: Option<String>,
    pub region_name: Option<String>,
}

impl From<&FlatAirport> for AirportPayload {
    fn from(airport: &FlatAirport) -> Self {
        Self {
            airport_code: Some(airport.airport_code.clone()),
            latitude: Some(airport.latitude),
            longitude: Some(airport.longitude),
            airport_name: Some(airport.airport_name.clone()),
            city_code: Some(airport.city_code.clone()),
            city_name: Some(airport.city_name.clone()),
            time_zone_name: Some(airport.time_zone_name.clone()),
            state_code: airport.state_code.clone(),
            state_name: airport.state_name.clone(),
            country_code: Some(airport.country_code.clone()),
            country_name: Some(airport.country_name.clone()),
            region_code: Some(airport.region_code.clone()),
            region_name: Some(airport.region_name.clone()),
        }
    }
}

/// Mock record served by the admin read placeholder when the cache has no match
fn mock_sydney() -> AirportPayload {
    AirportPayload {
        airport_code: Some("SYD".to_string()),
        airport_name: Some("Sydney".to_string()),
        country_code: Some("AU".to_string()),
        ..AirportPayload::default()
    }
}

/// Health check endpoint.
///
/// # Response
///
/// ```json
/// {"status": "ok", "airports": 412}
/// ```
pub async fn health(State(store): State<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "ok",
            airports: store.len(),
        }),
    )
}

/// List airports matching the optional query-string filters.
///
/// Accepts `countryCode`, `regionCode`, `stateCode`, `cityCode` and
/// `airportName`. Blank and unknown parameters are ignored. No match yields
/// an empty array.
pub async fn list_airports(
    State(store): State<AppState>,
    Query(query): Query<AirportQuery>,
) -> Json<Vec<FlatAirport>> {
    let airports = store.query(&query);
    tracing::debug!(?query, matches = airports.len(), "Airport query");
    Json(airports)
}

/// Placeholder create: echoes the airport with its code upper-cased.
///
/// Responds `201 Created` with a `Location` header. Nothing is stored.
pub async fn create_airport(
    Json(mut airport): Json<AirportPayload>,
) -> Result<impl IntoResponse, AppError> {
    tracing::info!(?airport, "Placeholder: received request to create airport");

    let code = airport
        .airport_code
        .as_deref()
        .map(str::trim)
        .filter(|code| !code.is_empty())
        .map(str::to_uppercase)
        .ok_or_else(|| AppError::BadRequest("airportCode is required".to_string()))?;
    airport.airport_code = Some(code.clone());

    let location = format!("{}/{}", ADMIN_AIRPORTS_PATH, code);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(airport),
    ))
}

/// Placeholder read: serves the cached airport, or the Sydney mock.
pub async fn get_airport(
    State(store): State<AppState>,
    Path(airport_code): Path<String>,
) -> Result<Json<AirportPayload>, AppError> {
    tracing::info!(%airport_code, "Placeholder: received request to read airport");

    if let Some(airport) = store.get(&airport_code) {
        return Ok(Json(AirportPayload::from(airport)));
    }
    if airport_code.eq_ignore_ascii_case("SYD") {
        return Ok(Json(mock_sydney()));
    }
    Err(AppError::NotFound(airport_code))
}

/// Placeholder update: echoes the request body.
pub async fn update_airport(
    Path(airport_code): Path<String>,
    Json(airport): Json<AirportPayload>,
) -> Json<AirportPayload> {
    tracing::info!(%airport_code, ?airport, "Placeholder: received request to update airport");
    Json(airport)
}

/// Placeholder delete: always `204 No Content`.
pub async fn delete_airport(Path(airport_code): Path<String>) -> StatusCode {
    tracing::info!(%airport_code, "Placeholder: received request to delete airport");
    StatusCode::NO_CONTENT
}
