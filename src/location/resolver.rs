//! Address normalization.
//!
//! Converts the flat address-field bag returned by a reverse geocoder into a
//! [`LocationData`], and formats locations for display. Singapore addresses get
//! their own heuristics: the city-level fields there are usually just
//! "Singapore", so the neighborhood and district carry the useful information.

use std::collections::HashMap;

use super::{is_singapore, Coordinates, LocationData, LocationError};

/// Candidate fields for a Singapore neighborhood, in priority order.
const SG_NEIGHBORHOOD_FIELDS: &[&str] = &["neighbourhood", "suburb", "residential", "quarter", "hamlet"];
/// Fallback fields for a Singapore neighborhood.
const SG_NEIGHBORHOOD_FALLBACK: &[&str] = &["amenity", "building", "house_name"];
/// Candidate fields for a Singapore district, in priority order.
const SG_DISTRICT_FIELDS: &[&str] = &[
    "city_district",
    "district",
    "subdistrict",
    "town",
    "village",
    "municipality",
];
/// Fallback fields for a Singapore district.
const SG_DISTRICT_FALLBACK: &[&str] = &["road", "pedestrian", "footway"];

const CITY_FIELDS: &[&str] = &["city", "town", "village", "municipality", "county", "state_district"];
const REGION_FIELDS: &[&str] = &["state", "province", "region", "county"];

const UNKNOWN_CITY: &str = "Unknown City";
const UNKNOWN_COUNTRY: &str = "Unknown Country";

/// Generic trailing words dropped from Singapore place names.
const GENERIC_SUFFIXES: &[&str] = &[
    "estate", "park", "garden", "gardens", "court", "place", "avenue", "road", "street", "drive",
    "lane", "walk", "close", "crescent", "rise", "hill", "view", "height", "heights",
];

/// Named address components from a reverse-geocoding response.
///
/// Only the fields this module asks for are consulted; everything else is
/// carried along and ignored.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AddressFields {
    fields: HashMap<String, String>,
}

impl AddressFields {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field, replacing any previous value.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(name.into(), value.into());
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    /// Get a field if it holds a non-blank value.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .get(name)
            .map(String::as_str)
            .filter(|v| !v.trim().is_empty())
    }

    /// First non-blank value among `names`, in order.
    pub fn first_of(&self, names: &[&str]) -> Option<&str> {
        names.iter().find_map(|name| self.get(name))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for AddressFields {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Resolve a geocoding outcome into a location.
///
/// Never fails: a geocoding error produces the coordinate-derived fallback.
pub fn resolve(outcome: Result<AddressFields, LocationError>, coordinates: Coordinates) -> LocationData {
    match outcome {
        Ok(fields) => resolve_address(&fields, coordinates),
        Err(e) => {
            tracing::warn!("Reverse geocoding failed, using coordinate fallback: {}", e);
            fallback(coordinates)
        }
    }
}

/// Normalize an address-field bag.
pub fn resolve_address(fields: &AddressFields, coordinates: Coordinates) -> LocationData {
    let city = fields.first_of(CITY_FIELDS).unwrap_or(UNKNOWN_CITY).to_string();
    let region = fields.first_of(REGION_FIELDS).unwrap_or_default().to_string();
    let country = fields.get("country").unwrap_or(UNKNOWN_COUNTRY).to_string();

    let (district, neighborhood) = if is_singapore(&country) {
        let neighborhood = fields
            .first_of(SG_NEIGHBORHOOD_FIELDS)
            .or_else(|| fields.first_of(SG_NEIGHBORHOOD_FALLBACK))
            .and_then(strip_generic_suffix);
        let district = fields
            .first_of(SG_DISTRICT_FIELDS)
            .or_else(|| fields.first_of(SG_DISTRICT_FALLBACK))
            .and_then(strip_generic_suffix);
        (district, neighborhood)
    } else {
        (None, None)
    };

    LocationData {
        city,
        region,
        country,
        district,
        neighborhood,
        coordinates,
    }
}

/// Coordinate-derived location used when geocoding fails.
pub fn fallback(coordinates: Coordinates) -> LocationData {
    LocationData {
        city: format!("Location {:.2}, {:.2}", coordinates.lat, coordinates.lng),
        region: "Coordinates".to_string(),
        country: "Unknown".to_string(),
        district: None,
        neighborhood: None,
        coordinates,
    }
}

/// Drop one trailing generic word such as "Park" or "Heights".
///
/// The word must be separated from the rest of the name by whitespace and end
/// the string. Returns `None` if nothing is left.
pub fn strip_generic_suffix(name: &str) -> Option<String> {
    let stripped = match name.rsplit_once(char::is_whitespace) {
        Some((head, last))
            if !last.is_empty()
                && GENERIC_SUFFIXES
                    .iter()
                    .any(|suffix| last.eq_ignore_ascii_case(suffix)) =>
        {
            head.trim_end()
        }
        _ => name,
    };

    if stripped.is_empty() {
        None
    } else {
        Some(stripped.to_string())
    }
}

/// Format a location for display.
///
/// Singapore locations use the most specific component available; everywhere
/// else it is "{city}, {country}".
pub fn format_display(location: &LocationData) -> String {
    if !location.is_singapore() {
        return format!("{}, {}", location.city, location.country);
    }

    let present = |v: &Option<String>| v.as_deref().filter(|s| !s.is_empty()).map(str::to_string);

    if let Some(neighborhood) = present(&location.neighborhood) {
        return format!("{}, Singapore", neighborhood);
    }
    if let Some(district) = present(&location.district) {
        return format!("{}, Singapore", district);
    }
    if !location.region.is_empty() && location.region != "Singapore" {
        return format!("{}, Singapore", location.region);
    }
    if !location.city.is_empty() && location.city != "Singapore" {
        return format!("{}, Singapore", location.city);
    }
    "Singapore".to_string()
}
