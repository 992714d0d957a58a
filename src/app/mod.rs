//! Application state and controller.
//!
//! [`AppController`] owns the application state and is the only writer to it.
//! State is restored once with [`AppController::load`] and persisted after each
//! mutation through the [`StateStore`].
//!
//! Permission flow:
//! - `pending -> granted` when coordinates, resolution and persistence all succeed
//! - `pending/granted -> denied` on any failure in that pipeline
//! - `unsupported` is decided once at load time and never left

pub mod loading;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::climate::{self, ClimateSummary, JournalInsights};
use crate::environment::{observe_or_fallback, EnvironmentSource, WeatherSnapshot};
use crate::journal::{JournalError, MoodEntry, MoodJournal};
use crate::location::{
    resolver, Coordinates, Geocoder, LocationAcquirer, LocationData, PositionSource,
};
use crate::storage::{ClimateSettings, StateStore, StorageError};

pub use loading::{LoadingFlag, LoadingGuard};

/// Display string before any location is known.
pub const DEFAULT_LOCATION_LABEL: &str = "Your Area";
/// Display string after a failed location request.
pub const DENIED_LOCATION_LABEL: &str = "Location Access Denied";
/// Display string when the device cannot provide a position.
pub const UNSUPPORTED_LOCATION_LABEL: &str = "Location Not Available";

/// Location permission status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PermissionState {
    #[default]
    Pending,
    Granted,
    Denied,
    Unsupported,
}

impl std::fmt::Display for PermissionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PermissionState::Pending => write!(f, "pending"),
            PermissionState::Granted => write!(f, "granted"),
            PermissionState::Denied => write!(f, "denied"),
            PermissionState::Unsupported => write!(f, "unsupported"),
        }
    }
}

/// Controller errors.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("A location request is already in progress")]
    LocationRequestInFlight,

    #[error("A weather request is already in progress")]
    EnvironmentRequestInFlight,

    #[error("Invalid mood report: {0}")]
    InvalidReport(String),

    #[error(transparent)]
    Journal(#[from] JournalError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

/// Everything the application knows at a point in time.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Mood reports, newest first
    pub journal: MoodJournal,
    /// Last resolved location
    pub location: Option<LocationData>,
    /// Display string of the current location
    pub location_display: String,
    /// Location permission status
    pub permission: PermissionState,
    /// Latest weather snapshot
    pub weather: Option<WeatherSnapshot>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            journal: MoodJournal::new(),
            location: None,
            location_display: DEFAULT_LOCATION_LABEL.to_string(),
            permission: PermissionState::Pending,
            weather: None,
        }
    }
}

/// Owns the application state and drives every mutation of it.
pub struct AppController<S, P, G, E> {
    store: S,
    acquirer: Option<LocationAcquirer<P>>,
    geocoder: G,
    environment: E,
    settings: ClimateSettings,
    state: AppState,
    location_loading: LoadingFlag,
    environment_loading: LoadingFlag,
}

impl<S, P, G, E> AppController<S, P, G, E>
where
    S: StateStore,
    P: PositionSource,
    G: Geocoder,
    E: EnvironmentSource,
{
    /// Restore persisted state and run the geolocation capability check.
    ///
    /// `acquirer` is `None` when the device has no way to provide a position.
    pub fn load(
        store: S,
        acquirer: Option<LocationAcquirer<P>>,
        geocoder: G,
        environment: E,
        settings: ClimateSettings,
    ) -> Result<Self, AppError> {
        let journal = MoodJournal::load(&store)?;
        let saved_location = store.load_location()?;

        let mut app = Self {
            store,
            acquirer,
            geocoder,
            environment,
            settings,
            state: AppState {
                journal,
                ..AppState::default()
            },
            location_loading: LoadingFlag::new(),
            environment_loading: LoadingFlag::new(),
        };

        if let Some(location) = saved_location {
            let coordinates = location.coordinates;
            app.state.location_display = resolver::format_display(&location);
            app.state.location = Some(location);
            app.state.permission = PermissionState::Granted;
            app.refresh_environment(coordinates)?;
        }

        let supported = app.acquirer.as_ref().is_some_and(|a| a.is_supported());
        if !supported {
            tracing::info!("Geolocation not available on this device");
            app.state.permission = PermissionState::Unsupported;
            app.state.location_display = UNSUPPORTED_LOCATION_LABEL.to_string();
        }

        tracing::debug!(
            "Loaded state: {} reports, permission {}",
            app.state.journal.len(),
            app.state.permission
        );
        Ok(app)
    }

    /// Acquire coordinates, resolve them into a location and persist it.
    ///
    /// Failures are absorbed and reported through the returned permission
    /// state. Only a concurrent duplicate request is an error.
    pub async fn request_location_resolution(&mut self) -> Result<PermissionState, AppError> {
        if self.state.permission == PermissionState::Unsupported {
            return Ok(PermissionState::Unsupported);
        }

        let _guard = self
            .location_loading
            .try_begin()
            .ok_or(AppError::LocationRequestInFlight)?;

        let Some(acquirer) = self.acquirer.as_mut() else {
            return Ok(self.deny());
        };

        let coordinates = match acquirer.acquire().await {
            Ok(coordinates) => coordinates,
            Err(e) => {
                tracing::warn!("Error getting location: {}", e);
                return Ok(self.deny());
            }
        };
        tracing::debug!("Acquired position {}", coordinates);

        if let Err(e) = self.refresh_environment(coordinates) {
            tracing::debug!("Skipping weather refresh: {}", e);
        }

        let outcome = self.geocoder.reverse(coordinates).await;
        let location = resolver::resolve(outcome, coordinates);
        let label = resolver::format_display(&location);
        let saved = self.store.save_location(&location);
        self.state.location = Some(location);

        if let Err(e) = saved {
            tracing::warn!("Failed to persist location: {}", e);
            return Ok(self.deny());
        }

        tracing::info!("Location resolved to {}", label);
        self.state.location_display = label;
        self.state.permission = PermissionState::Granted;
        Ok(PermissionState::Granted)
    }

    fn deny(&mut self) -> PermissionState {
        self.state.permission = PermissionState::Denied;
        self.state.location_display = DENIED_LOCATION_LABEL.to_string();
        PermissionState::Denied
    }

    /// Replace the weather snapshot with a fresh observation.
    pub fn refresh_environment(
        &mut self,
        coordinates: Coordinates,
    ) -> Result<&WeatherSnapshot, AppError> {
        let _guard = self
            .environment_loading
            .try_begin()
            .ok_or(AppError::EnvironmentRequestInFlight)?;

        let snapshot = observe_or_fallback(&mut self.environment, coordinates);
        Ok(&*self.state.weather.insert(snapshot))
    }

    /// Record a mood report at the current location.
    pub fn submit_mood(&mut self, mood: &str, intensity: u8) -> Result<&MoodEntry, AppError> {
        let mood = mood.trim();
        if mood.is_empty() {
            return Err(AppError::InvalidReport("mood must not be empty".to_string()));
        }
        if !MoodEntry::validate_intensity(intensity) {
            return Err(AppError::InvalidReport(format!(
                "intensity {} is outside 1-100",
                intensity
            )));
        }

        let coordinates = self.state.location.as_ref().map(|l| l.coordinates);
        let entry = self.state.journal.append(
            &self.store,
            mood,
            intensity,
            &self.state.location_display,
            coordinates,
        )?;
        if !entry.is_known_mood() {
            tracing::debug!("Recorded custom mood '{}'", entry.mood);
        }
        Ok(entry)
    }

    /// Climate summary for the current location.
    ///
    /// Reports are filtered by location only once a location has been resolved.
    pub fn climate(&self) -> Option<ClimateSummary> {
        let filter = self.settings.filter_by_location && self.state.location.is_some();
        self.climate_with_filter(filter)
    }

    /// Climate summary with an explicit location filter.
    pub fn climate_with_filter(&self, filter_by_location: bool) -> Option<ClimateSummary> {
        climate::summarize(
            self.state.journal.entries(),
            &self.state.location_display,
            filter_by_location,
        )
    }

    /// Statistics over the whole journal.
    pub fn insights(&self) -> JournalInsights {
        let current = self
            .state
            .location
            .as_ref()
            .map(|_| self.state.location_display.as_str());
        JournalInsights::compute(self.state.journal.entries(), current)
    }

    /// The `limit` most recent reports.
    pub fn recent_reports(&self, limit: usize) -> &[MoodEntry] {
        climate::recent_reports(self.state.journal.entries(), limit)
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn permission(&self) -> PermissionState {
        self.state.permission
    }

    pub fn location(&self) -> Option<&LocationData> {
        self.state.location.as_ref()
    }

    pub fn location_display(&self) -> &str {
        &self.state.location_display
    }

    pub fn weather(&self) -> Option<&WeatherSnapshot> {
        self.state.weather.as_ref()
    }

    pub fn journal(&self) -> &MoodJournal {
        &self.state.journal
    }

    /// Handle for observing the location request flag.
    pub fn location_loading(&self) -> LoadingFlag {
        self.location_loading.clone()
    }

    /// Handle for observing the weather request flag.
    pub fn environment_loading(&self) -> LoadingFlag {
        self.environment_loading.clone()
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
