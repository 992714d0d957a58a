//! Restoring state across restarts

use emoweather::app::{AppController, PermissionState};
use emoweather::environment::EnvironmentSimulator;
use emoweather::location::{Coordinates, LocationAcquirer, ManualPosition, OfflineGeocoder};
use emoweather::storage::{ClimateSettings, Database};
use rand_chacha::ChaCha8Rng;

type App = AppController<Database, ManualPosition, OfflineGeocoder, EnvironmentSimulator<ChaCha8Rng>>;

/// Open the app the way the binary does: always with a position source,
/// which has coordinates only when some were given for this run.
fn open(path: &std::path::Path, position: Option<Coordinates>) -> App {
    open_with(path, Some(LocationAcquirer::new(ManualPosition::new(position))))
}

fn open_with(path: &std::path::Path, acquirer: Option<LocationAcquirer<ManualPosition>>) -> App {
    AppController::load(
        Database::open(path).expect("Failed to open database"),
        acquirer,
        OfflineGeocoder,
        EnvironmentSimulator::seeded(8),
        ClimateSettings::default(),
    )
    .expect("Failed to load app")
}

#[tokio::test]
async fn test_restart_restores_location_weather_and_journal() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("emoweather.db");
    let lyon = Coordinates::new(45.76, 4.83);

    let display = {
        let mut app = open(&path, Some(lyon));
        app.request_location_resolution().await.unwrap();
        app.submit_mood("content", 55).unwrap();
        app.submit_mood("neutral", 45).unwrap();
        app.location_display().to_string()
    };

    let app = open(&path, Some(lyon));
    assert_eq!(app.permission(), PermissionState::Granted);
    assert_eq!(app.location_display(), display);
    assert_eq!(app.location().unwrap().coordinates, lyon);
    assert_eq!(app.journal().len(), 2);
    assert_eq!(app.journal().latest().unwrap().mood, "neutral");

    // Northern latitude adjustments apply to the restored snapshot.
    let weather = app.weather().unwrap();
    assert!(weather.temperature <= 30);
    assert!(weather.humidity >= 50);
}

#[tokio::test]
async fn test_restart_without_coordinates_keeps_saved_location() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("emoweather.db");

    let display = {
        let mut app = open(&path, Some(Coordinates::new(45.76, 4.83)));
        app.request_location_resolution().await.unwrap();
        app.submit_mood("joyful", 80).unwrap();
        app.location_display().to_string()
    };

    let mut app = open(&path, None);
    assert_eq!(app.permission(), PermissionState::Granted);
    assert_eq!(app.location_display(), display);

    let entry = app.submit_mood("sad", 20).unwrap();
    assert_eq!(entry.location, display);

    let summary = app.climate().unwrap();
    assert_eq!(summary.total_reports, 2);
    assert_eq!(summary.average_intensity, 50);
    assert_eq!(summary.trend.to_string(), "declining");
}

#[tokio::test]
async fn test_locate_without_coordinates_is_denied() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("emoweather.db");

    let mut app = open(&path, None);
    assert_eq!(app.permission(), PermissionState::Pending);

    let state = app.request_location_resolution().await.unwrap();
    assert_eq!(state, PermissionState::Denied);
    assert_eq!(app.location_display(), "Location Access Denied");
    assert!(app.location().is_none());
}

#[tokio::test]
async fn test_restart_without_position_source_is_unsupported() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("emoweather.db");

    {
        let mut app = open(&path, Some(Coordinates::new(1.29, 103.85)));
        app.request_location_resolution().await.unwrap();
    }

    let app = open_with(&path, None);
    assert_eq!(app.permission(), PermissionState::Unsupported);
    assert_eq!(app.location_display(), "Location Not Available");
    assert!(app.location().is_some());
}
