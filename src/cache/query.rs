//! Filter criteria for airport queries

use serde::Deserialize;

use crate::data::FlatAirport;

/// Optional filters accepted by [`AirportStore::query`](super::AirportStore::query)
///
/// Deserializes from camelCase query-string keys; any other key is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AirportQuery {
    pub country_code: Option<String>,
    pub region_code: Option<String>,
    pub state_code: Option<String>,
    pub city_code: Option<String>,
    /// Case-insensitive substring of the airport name
    pub airport_name: Option<String>,
}

impl AirportQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn country_code(mut self, code: impl Into<String>) -> Self {
        self.country_code = Some(code.into());
        self
    }

    pub fn region_code(mut self, code: impl Into<String>) -> Self {
        self.region_code = Some(code.into());
        self
    }

    pub fn state_code(mut self, code: impl Into<String>) -> Self {
        self.state_code = Some(code.into());
        self
    }

    pub fn city_code(mut self, code: impl Into<String>) -> Self {
        self.city_code = Some(code.into());
        self
    }

    pub fn airport_name(mut self, name: impl Into<String>) -> Self {
        self.airport_name = Some(name.into());
        self
    }

    /// Drops blank criteria and lower-cases the rest
    ///
    /// Blank (empty or whitespace-only) values are treated as not supplied.
    pub fn normalized(&self) -> Criteria {
        Criteria {
            country_code: supplied(&self.country_code),
            region_code: supplied(&self.region_code),
            state_code: supplied(&self.state_code),
            city_code: supplied(&self.city_code),
            airport_name: supplied(&self.airport_name),
        }
    }
}

fn supplied(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .filter(|v| !v.trim().is_empty())
        .map(str::to_lowercase)
}

/// Normalized criteria, ready to match against cache records
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Criteria {
    country_code: Option<String>,
    region_code: Option<String>,
    state_code: Option<String>,
    city_code: Option<String>,
    airport_name: Option<String>,
}

impl Criteria {
    /// True when no criterion was supplied
    pub fn is_unconstrained(&self) -> bool {
        *self == Criteria::default()
    }

    /// Checks a record against every supplied criterion
    pub fn matches(&self, airport: &FlatAirport) -> bool {
        code_matches(&self.country_code, Some(&airport.country_code))
            && code_matches(&self.region_code, Some(&airport.region_code))
            && code_matches(&self.state_code, airport.state_code.as_ref())
            && code_matches(&self.city_code, Some(&airport.city_code))
            && self
                .airport_name
                .as_ref()
                .map_or(true, |needle| airport.airport_name.to_lowercase().contains(needle.as_str()))
    }
}

/// An unsupplied criterion matches anything; a supplied one never matches an absent field
fn code_matches(criterion: &Option<String>, field: Option<&String>) -> bool {
    match criterion {
        None => true,
        Some(expected) => field.is_some_and(|value| value.to_lowercase() == *expected),
    }
}
