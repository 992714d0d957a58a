//! Application configuration.
//!
//! Loaded from `config.toml` in the platform data directory. A missing file
//! yields the defaults.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::location::geocoder::{DEFAULT_NOMINATIM_URL, DEFAULT_USER_AGENT};
use crate::location::Coordinates;

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Application version
    pub version: String,
    /// Data directory path
    #[serde(skip)]
    pub data_dir: PathBuf,
    /// Location settings
    pub location: LocationSettings,
    /// Climate settings
    pub climate: ClimateSettings,
    /// Environment settings
    pub environment: EnvironmentSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            data_dir: PathBuf::new(),
            location: LocationSettings::default(),
            climate: ClimateSettings::default(),
            environment: EnvironmentSettings::default(),
        }
    }
}

impl AppConfig {
    /// Path of the state database inside the data directory.
    pub fn database_path(&self) -> PathBuf {
        self.data_dir.join("emoweather.db")
    }
}

/// Location acquisition and geocoding settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LocationSettings {
    /// How long to wait for a position fix, in seconds
    pub acquisition_timeout_secs: u64,
    /// Maximum age of a reusable position fix, in seconds
    pub max_fix_age_secs: u64,
    /// Reverse geocoding endpoint
    pub geocoder_url: String,
    /// User-Agent sent to the geocoder
    pub user_agent: String,
    /// Geocoding request timeout in seconds
    pub request_timeout_secs: u64,
    /// Default latitude when none is given on the command line
    pub default_latitude: Option<f64>,
    /// Default longitude when none is given on the command line
    pub default_longitude: Option<f64>,
}

impl Default for LocationSettings {
    fn default() -> Self {
        Self {
            acquisition_timeout_secs: 10,
            max_fix_age_secs: 300,
            geocoder_url: DEFAULT_NOMINATIM_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            request_timeout_secs: 10,
            default_latitude: None,
            default_longitude: None,
        }
    }
}

impl LocationSettings {
    pub fn acquisition_timeout(&self) -> Duration {
        Duration::from_secs(self.acquisition_timeout_secs)
    }

    pub fn max_fix_age(&self) -> Duration {
        Duration::from_secs(self.max_fix_age_secs)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Configured default position, if both halves are set.
    pub fn default_coordinates(&self) -> Option<Coordinates> {
        match (self.default_latitude, self.default_longitude) {
            (Some(lat), Some(lng)) => Some(Coordinates::new(lat, lng)),
            _ => None,
        }
    }
}

/// Climate summary settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClimateSettings {
    /// Only summarize reports made at the current location (once one is resolved)
    pub filter_by_location: bool,
}

impl Default for ClimateSettings {
    fn default() -> Self {
        Self {
            filter_by_location: true,
        }
    }
}

/// Environment simulation settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EnvironmentSettings {
    /// Fixed seed for reproducible simulation and forecasts
    pub seed: Option<u64>,
}

/// Get the application data directory.
pub fn get_data_dir() -> PathBuf {
    directories::ProjectDirs::from("com", "emoweather", "EmotionalWeather")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Get the configuration file path.
pub fn get_config_path() -> PathBuf {
    get_data_dir().join("config.toml")
}

/// Load application configuration from the default location.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from(&get_config_path(), get_data_dir())
}

/// Load application configuration from a file.
pub fn load_config_from(path: &Path, data_dir: PathBuf) -> Result<AppConfig, ConfigError> {
    if !path.exists() {
        let config = AppConfig {
            data_dir,
            ..Default::default()
        };
        return Ok(config);
    }

    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::IoError(e.to_string()))?;

    let mut config: AppConfig =
        toml::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))?;

    config.data_dir = data_dir;

    Ok(config)
}

/// Save application configuration to file.
pub fn save_config(config: &AppConfig, path: &Path) -> Result<(), ConfigError> {
    // Ensure parent directory exists
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| ConfigError::IoError(e.to_string()))?;
    }

    let content = toml::to_string_pretty(config).map_err(|e| ConfigError::SerializeError(e.to_string()))?;

    std::fs::write(path, content).map_err(|e| ConfigError::IoError(e.to_string()))?;

    Ok(())
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Serialize error: {0}")]
    SerializeError(String),
}
