//! Core data models for the airports service
//!
//! This module contains the nested record shape received from the upstream
//! reference-data API and the flat record shape served to clients.

pub mod transform;
pub mod upstream;

pub use transform::{check_required, transform, MissingGroup, RequiredGroup, RequiredGroups};
pub use upstream::{AirportSource, UpstreamClient, UpstreamError};

use serde::{Deserialize, Deserializer, Serialize};

/// Treats an explicit JSON `null` the same as a missing field
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// An airport record as received from the upstream API
///
/// Every nested group may be missing entirely. Scalar fields inside a group
/// default to empty values so a sparse group still counts as present.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawAirport {
    /// IATA airport code
    #[serde(default, deserialize_with = "null_as_default")]
    pub airport_code: String,
    /// Human-readable airport name
    #[serde(default, deserialize_with = "null_as_default")]
    pub airport_name: String,
    #[serde(default)]
    pub location: Option<Location>,
    #[serde(default)]
    pub city: Option<City>,
    #[serde(default)]
    pub country: Option<Country>,
    #[serde(default)]
    pub region: Option<Region>,
}

/// Geographic coordinates of an airport
///
/// A missing or `null` coordinate reads as `0.0`, so `(0.0, 0.0)` may mean
/// the upstream sent an empty `location` object.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    #[serde(default, deserialize_with = "null_as_default")]
    pub latitude: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub longitude: f64,
}

/// City served by an airport, with its optional state
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct City {
    #[serde(default, deserialize_with = "null_as_default")]
    pub city_code: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub city_name: String,
    /// IANA time zone name (e.g. "Australia/Sydney")
    #[serde(default, deserialize_with = "null_as_default")]
    pub time_zone_name: String,
    /// Not every country has states, so this group is optional
    #[serde(default)]
    pub state: Option<State>,
}

/// State or province a city belongs to
///
/// Both sub-fields are optional: an empty `{}` state object carries no codes.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct State {
    #[serde(default)]
    pub state_code: Option<String>,
    #[serde(default)]
    pub state_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Country {
    #[serde(default, deserialize_with = "null_as_default")]
    pub country_code: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub country_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Region {
    #[serde(default, deserialize_with = "null_as_default")]
    pub region_code: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub region_name: String,
}

/// Denormalized airport record held in the cache and served to clients
///
/// Only the state fields may be absent; every other field is populated
/// whenever a `FlatAirport` exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlatAirport {
    pub airport_code: String,
    pub latitude: f64,
    pub longitude: f64,
    pub airport_name: String,
    pub city_code: String,
    pub city_name: String,
    pub time_zone_name: String,
    pub state_code: Option<String>,
    pub state_name: Option<String>,
    pub country_code: String,
    pub country_name: String,
    pub region_code: String,
    pub region_name: String,
}
