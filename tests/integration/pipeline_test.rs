//! End-to-end location resolution through the controller

use std::time::Duration;

use emoweather::app::{AppController, PermissionState};
use emoweather::environment::EnvironmentSimulator;
use emoweather::journal::MoodEntry;
use emoweather::location::{
    AddressFields, Coordinates, Geocoder, LocationAcquirer, LocationData, LocationError,
    ManualPosition, OfflineGeocoder, PositionSource,
};
use emoweather::storage::{ClimateSettings, Database, StateStore, StorageError};
use rand_chacha::ChaCha8Rng;

/// Geocoder answering with a fixed Nominatim address.
struct CannedGeocoder(Vec<(&'static str, &'static str)>);

impl Geocoder for CannedGeocoder {
    async fn reverse(&self, _: Coordinates) -> Result<AddressFields, LocationError> {
        Ok(self.0.iter().copied().collect())
    }
}

fn tiong_bahru() -> CannedGeocoder {
    CannedGeocoder(vec![
        ("neighbourhood", "Tiong Bahru"),
        ("city_district", "Bukit Merah"),
        ("city", "Singapore"),
        ("country", "Singapore"),
    ])
}

/// Position source that never answers.
struct StalledPosition;

impl PositionSource for StalledPosition {
    async fn current_position(&self) -> Result<Coordinates, LocationError> {
        std::future::pending().await
    }
}

/// Store whose location writes always fail.
struct ReadOnlyLocationStore(Database);

impl StateStore for ReadOnlyLocationStore {
    fn load_mood_log(&self) -> Result<Option<Vec<MoodEntry>>, StorageError> {
        self.0.load_mood_log()
    }

    fn save_mood_log(&self, entries: &[MoodEntry]) -> Result<(), StorageError> {
        self.0.save_mood_log(entries)
    }

    fn load_location(&self) -> Result<Option<LocationData>, StorageError> {
        self.0.load_location()
    }

    fn save_location(&self, _: &LocationData) -> Result<(), StorageError> {
        Err(StorageError::IoError("quota exceeded".to_string()))
    }
}

fn singapore() -> LocationAcquirer<ManualPosition> {
    LocationAcquirer::new(ManualPosition::at(Coordinates::new(1.2847, 103.8321)))
}

#[tokio::test]
async fn test_singapore_resolution_grants_and_persists() {
    let mut app = AppController::load(
        Database::open_in_memory().unwrap(),
        Some(singapore()),
        tiong_bahru(),
        EnvironmentSimulator::seeded(11),
        ClimateSettings::default(),
    )
    .unwrap();

    let state = app.request_location_resolution().await.unwrap();
    assert_eq!(state, PermissionState::Granted);
    assert_eq!(app.location_display(), "Tiong Bahru, Singapore");

    let location = app.location().unwrap();
    assert_eq!(location.neighborhood.as_deref(), Some("Tiong Bahru"));
    assert_eq!(location.district.as_deref(), Some("Bukit Merah"));

    // Tropical latitude adjustments apply to the refreshed snapshot.
    let weather = app.weather().unwrap();
    assert!(weather.uv_index >= 3);

    let saved = app.store().load_location().unwrap().unwrap();
    assert_eq!(&saved, location);
}

#[tokio::test]
async fn test_persist_failure_denies_but_keeps_location() {
    let mut app = AppController::load(
        ReadOnlyLocationStore(Database::open_in_memory().unwrap()),
        Some(singapore()),
        tiong_bahru(),
        EnvironmentSimulator::seeded(11),
        ClimateSettings::default(),
    )
    .unwrap();

    let state = app.request_location_resolution().await.unwrap();
    assert_eq!(state, PermissionState::Denied);
    assert_eq!(app.location_display(), "Location Access Denied");
    assert!(app.location().is_some());
    assert!(!app.location_loading().is_loading());
}

#[tokio::test]
async fn test_stalled_position_times_out_to_denied() {
    let acquirer = LocationAcquirer::with_limits(
        StalledPosition,
        Duration::from_millis(20),
        Duration::from_secs(300),
    );
    let mut app: AppController<_, _, _, EnvironmentSimulator<ChaCha8Rng>> = AppController::load(
        Database::open_in_memory().unwrap(),
        Some(acquirer),
        OfflineGeocoder,
        EnvironmentSimulator::seeded(2),
        ClimateSettings::default(),
    )
    .unwrap();

    let state = app.request_location_resolution().await.unwrap();
    assert_eq!(state, PermissionState::Denied);
    assert_eq!(app.location_display(), "Location Access Denied");
    assert!(app.location().is_none());
    assert!(app.weather().is_none());

    // Reports still work, stamped with the denied label.
    let entry = app.submit_mood("anxious", 60).unwrap();
    assert_eq!(entry.location, "Location Access Denied");
}

#[tokio::test]
async fn test_climate_follows_resolved_location() {
    let mut app = AppController::load(
        Database::open_in_memory().unwrap(),
        Some(singapore()),
        tiong_bahru(),
        EnvironmentSimulator::seeded(5),
        ClimateSettings::default(),
    )
    .unwrap();

    app.submit_mood("angry", 10).unwrap();
    app.request_location_resolution().await.unwrap();
    app.submit_mood("sad", 40).unwrap();
    app.submit_mood("joyful", 90).unwrap();

    let local = app.climate().unwrap();
    assert_eq!(local.total_reports, 2);
    assert_eq!(local.average_intensity, 65);
    assert_eq!(local.dominant_mood, "joyful");
    assert_eq!(local.trend.to_string(), "improving");

    let everywhere = app.climate_with_filter(false).unwrap();
    assert_eq!(everywhere.total_reports, 3);
    assert_eq!(everywhere.average_intensity, 47);

    let insights = app.insights();
    assert_eq!(insights.total_reports, 3);
    assert_eq!(insights.location_count, 1);
}
