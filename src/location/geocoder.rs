//! Reverse geocoding providers.
//!
//! A provider turns coordinates into an [`AddressFields`] bag or fails. Every
//! failure is reported as a [`LocationError`] and routed to the resolver's
//! coordinate fallback by the caller.

use std::time::Duration;

use serde::Deserialize;
use serde_json::Value;

use super::{AddressFields, Coordinates, LocationError};

/// Default Nominatim endpoint.
pub const DEFAULT_NOMINATIM_URL: &str = "https://nominatim.openstreetmap.org";

/// Default User-Agent sent with geocoding requests.
pub const DEFAULT_USER_AGENT: &str = "EmotionalWeatherApp/1.0";

/// Trait for reverse geocoding providers
pub trait Geocoder: Send + Sync {
    /// Look up the address fields for a coordinate pair.
    fn reverse(
        &self,
        coordinates: Coordinates,
    ) -> impl std::future::Future<Output = Result<AddressFields, LocationError>> + Send;
}

/// Nominatim reverse geocoding response (only the part we read).
#[derive(Debug, Deserialize)]
struct NominatimResponse {
    #[serde(default)]
    address: Option<serde_json::Map<String, Value>>,
}

/// Reverse geocoder backed by the OpenStreetMap Nominatim API.
pub struct NominatimGeocoder {
    http: reqwest::Client,
    base_url: String,
}

impl NominatimGeocoder {
    /// Create a geocoder against the public Nominatim instance.
    pub fn new() -> Result<Self, LocationError> {
        Self::with_base_url(
            DEFAULT_NOMINATIM_URL.to_string(),
            DEFAULT_USER_AGENT,
            Duration::from_secs(10),
        )
    }

    /// Create a geocoder with a custom endpoint, user agent and request timeout.
    pub fn with_base_url(
        base_url: String,
        user_agent: &str,
        timeout: Duration,
    ) -> Result<Self, LocationError> {
        let http = reqwest::Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()
            .map_err(|e| LocationError::Geocoding(e.to_string()))?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Build the reverse lookup URL.
    fn build_url(&self, coordinates: Coordinates) -> String {
        format!(
            "{}/reverse?format=json&lat={}&lon={}&zoom=18&addressdetails=1",
            self.base_url, coordinates.lat, coordinates.lng
        )
    }

    /// Convert a decoded response body into address fields.
    fn parse_body(body: &str) -> Result<AddressFields, LocationError> {
        let response: NominatimResponse =
            serde_json::from_str(body).map_err(|e| LocationError::Geocoding(e.to_string()))?;

        Ok(response
            .address
            .unwrap_or_default()
            .into_iter()
            .filter_map(|(name, value)| match value {
                Value::String(s) => Some((name, s)),
                _ => None,
            })
            .collect())
    }
}

impl Geocoder for NominatimGeocoder {
    async fn reverse(&self, coordinates: Coordinates) -> Result<AddressFields, LocationError> {
        let url = self.build_url(coordinates);
        tracing::debug!("Reverse geocoding {}", coordinates);

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| LocationError::Geocoding(e.to_string()))?;

        if !response.status().is_success() {
            return Err(LocationError::Geocoding(format!(
                "request failed with status {}",
                response.status()
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| LocationError::Geocoding(e.to_string()))?;

        Self::parse_body(&body)
    }
}

/// Geocoder used when no network lookup should be attempted.
///
/// Always fails, so every resolution takes the coordinate fallback.
#[derive(Debug, Clone, Copy, Default)]
pub struct OfflineGeocoder;

impl Geocoder for OfflineGeocoder {
    async fn reverse(&self, _coordinates: Coordinates) -> Result<AddressFields, LocationError> {
        Err(LocationError::Unavailable)
    }
}
