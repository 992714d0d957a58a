//! Environment snapshots.
//!
//! Provides the current weather around a coordinate pair. The only built-in
//! source is the [`EnvironmentSimulator`]; any source that fails is replaced by
//! the fixed [`WeatherSnapshot::fallback`] snapshot.

pub mod assessment;
pub mod simulator;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::location::Coordinates;

pub use assessment::{mood_notes, HumidityLevel, UvLevel};
pub use simulator::{observe_or_fallback, EnvironmentSimulator};

/// Environment-related errors
#[derive(Debug, Clone, Error, PartialEq)]
pub enum EnvironmentError {
    #[error("Weather source unavailable: {0}")]
    Unavailable(String),

    #[error("Invalid weather data: {0}")]
    InvalidData(String),
}

/// Sky conditions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SkyCondition {
    #[serde(rename = "Clear")]
    Clear,
    #[serde(rename = "Partly Cloudy")]
    PartlyCloudy,
    #[serde(rename = "Cloudy")]
    Cloudy,
    #[serde(rename = "Light Rain")]
    LightRain,
}

impl SkyCondition {
    /// All conditions, in sampling order.
    pub const ALL: [SkyCondition; 4] = [
        SkyCondition::Clear,
        SkyCondition::PartlyCloudy,
        SkyCondition::Cloudy,
        SkyCondition::LightRain,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SkyCondition::Clear => "Clear",
            SkyCondition::PartlyCloudy => "Partly Cloudy",
            SkyCondition::Cloudy => "Cloudy",
            SkyCondition::LightRain => "Light Rain",
        }
    }
}

impl std::fmt::Display for SkyCondition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Current weather around a location.
///
/// Always replaced as a whole, never partially updated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherSnapshot {
    /// Temperature in °C
    pub temperature: i32,
    /// Relative humidity percentage
    pub humidity: i32,
    /// UV index
    pub uv_index: i32,
    /// Sky condition
    pub condition: SkyCondition,
    /// Wind speed in km/h
    pub wind_speed: i32,
    /// Atmospheric pressure in hPa
    pub pressure: i32,
    /// Visibility in km
    pub visibility: i32,
    /// "Feels like" temperature in °C
    pub feels_like: i32,
}

impl WeatherSnapshot {
    /// Snapshot substituted when a weather source fails.
    pub fn fallback() -> Self {
        Self {
            temperature: 25,
            humidity: 60,
            uv_index: 5,
            condition: SkyCondition::PartlyCloudy,
            wind_speed: 10,
            pressure: 1013,
            visibility: 10,
            feels_like: 27,
        }
    }

    pub fn uv_level(&self) -> UvLevel {
        UvLevel::from_index(self.uv_index)
    }

    pub fn humidity_level(&self) -> HumidityLevel {
        HumidityLevel::from_percent(self.humidity)
    }
}

/// Trait for weather sources
pub trait EnvironmentSource {
    /// Observe the weather at the given coordinates.
    fn observe(&mut self, coordinates: Coordinates) -> Result<WeatherSnapshot, EnvironmentError>;
}
