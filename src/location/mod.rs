//! Location resolution.
//!
//! Turns a coordinate fix into a structured, display-ready location. The
//! coordinate fix comes from a [`PositionSource`], the address fields from a
//! [`Geocoder`], and [`resolver`] normalizes them with country-specific
//! heuristics.

pub mod acquisition;
pub mod geocoder;
pub mod resolver;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use acquisition::{LocationAcquirer, ManualPosition, PositionSource};
pub use geocoder::{Geocoder, NominatimGeocoder, OfflineGeocoder};
pub use resolver::{format_display, resolve, AddressFields};

/// Latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

impl std::fmt::Display for Coordinates {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.4}, {:.4}", self.lat, self.lng)
    }
}

/// A resolved location.
///
/// Replaced wholesale on every successful resolution, never merged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationData {
    /// City or town name
    pub city: String,
    /// State, province or region (may be empty)
    pub region: String,
    /// Country name as delivered by the geocoder
    pub country: String,
    /// District, only populated for Singapore
    #[serde(default)]
    pub district: Option<String>,
    /// Neighborhood, only populated for Singapore
    #[serde(default)]
    pub neighborhood: Option<String>,
    /// Coordinates the location was resolved from
    pub coordinates: Coordinates,
}

impl LocationData {
    /// Whether the country name refers to Singapore (case-insensitive).
    pub fn is_singapore(&self) -> bool {
        is_singapore(&self.country)
    }

    /// Human readable label for this location.
    pub fn display(&self) -> String {
        format_display(self)
    }
}

pub(crate) fn is_singapore(country: &str) -> bool {
    country.to_lowercase().contains("singapore")
}

/// Location acquisition and geocoding errors.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum LocationError {
    #[error("Geolocation is not supported on this device")]
    Unsupported,

    #[error("Timed out acquiring a position after {0} seconds")]
    Timeout(u64),

    #[error("Position request denied: {0}")]
    Denied(String),

    #[error("Geocoding failed: {0}")]
    Geocoding(String),

    #[error("Geocoding service unavailable")]
    Unavailable,
}
