//! Flattening of upstream airport records
//!
//! Converts the nested upstream shape into [`FlatAirport`]. Location, City,
//! Country and Region are required groups: a record missing any of them is
//! skipped. State is the only optional group and degrades to absent fields.

use std::fmt;

use super::{City, Country, FlatAirport, Location, RawAirport, Region};

/// Marker used in logs when a skipped record carries no airport code
const UNKNOWN_AIRPORT: &str = "unknown";

/// Nested groups that must be present for a record to be cached
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequiredGroup {
    Location,
    City,
    Country,
    Region,
}

impl RequiredGroup {
    /// Fixed checklist, in evaluation order
    pub const ALL: [RequiredGroup; 4] = [
        RequiredGroup::Location,
        RequiredGroup::City,
        RequiredGroup::Country,
        RequiredGroup::Region,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            RequiredGroup::Location => "location",
            RequiredGroup::City => "city",
            RequiredGroup::Country => "country",
            RequiredGroup::Region => "region",
        }
    }
}

impl fmt::Display for RequiredGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Reason a record was rejected by [`check_required`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MissingGroup {
    /// The upstream array contained `null` in place of a record
    NullRecord,
    /// A required nested group was absent
    Group {
        airport_code: String,
        group: RequiredGroup,
    },
}

impl MissingGroup {
    /// Airport code for logging, or the unknown marker
    pub fn airport_code(&self) -> &str {
        match self {
            MissingGroup::NullRecord => UNKNOWN_AIRPORT,
            MissingGroup::Group { airport_code, .. } => airport_code,
        }
    }
}

impl fmt::Display for MissingGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MissingGroup::NullRecord => write!(f, "null record"),
            MissingGroup::Group { group, .. } => write!(f, "missing {} group", group),
        }
    }
}

/// Borrowed view of the required groups of a record that passed validation
#[derive(Debug, Clone, Copy)]
pub struct RequiredGroups<'a> {
    pub location: &'a Location,
    pub city: &'a City,
    pub country: &'a Country,
    pub region: &'a Region,
}

/// Validates that every required group is present
///
/// Groups are checked in [`RequiredGroup::ALL`] order.
///
/// # Returns
/// * `Ok(RequiredGroups)` - Borrowed references to all required groups
/// * `Err(MissingGroup)` - The first required group that is absent
pub fn check_required(raw: Option<&RawAirport>) -> Result<RequiredGroups<'_>, MissingGroup> {
    let raw = raw.ok_or(MissingGroup::NullRecord)?;
    let missing = |group: RequiredGroup| {
        let airport_code = if raw.airport_code.trim().is_empty() {
            UNKNOWN_AIRPORT.to_string()
        } else {
            raw.airport_code.clone()
        };
        MissingGroup::Group { airport_code, group }
    };

    Ok(RequiredGroups {
        location: raw
            .location
            .as_ref()
            .ok_or_else(|| missing(RequiredGroup::Location))?,
        city: raw.city.as_ref().ok_or_else(|| missing(RequiredGroup::City))?,
        country: raw
            .country
            .as_ref()
            .ok_or_else(|| missing(RequiredGroup::Country))?,
        region: raw
            .region
            .as_ref()
            .ok_or_else(|| missing(RequiredGroup::Region))?,
    })
}

/// Transforms one upstream record into a cache record
///
/// Returns `None` for a null record or one missing a required group, and logs
/// the skip. Field values are copied verbatim.
pub fn transform(raw: Option<&RawAirport>) -> Option<FlatAirport> {
    let groups = match check_required(raw) {
        Ok(groups) => groups,
        Err(reason) => {
            tracing::warn!(
                airport_code = reason.airport_code(),
                "Skipping incomplete airport record: {}",
                reason
            );
            return None;
        }
    };
    let raw = raw?;

    let (state_code, state_name) = match &groups.city.state {
        Some(state) => (state.state_code.clone(), state.state_name.clone()),
        None => (None, None),
    };

    Some(FlatAirport {
        airport_code: raw.airport_code.clone(),
        latitude: groups.location.latitude,
        longitude: groups.location.longitude,
        airport_name: raw.airport_name.clone(),
        city_code: groups.city.city_code.clone(),
        city_name: groups.city.city_name.clone(),
        time_zone_name: groups.city.time_zone_name.clone(),
        state_code,
        state_name,
        country_code: groups.country.country_code.clone(),
        country_name: groups.country.country_name.clone(),
        region_code: groups.region.region_code.clone(),
        region_name: groups.region.region_name.clone(),
    })
}
