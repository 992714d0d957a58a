//! Emotional Weather - mood journal and local emotional climate
//!
//! Lets a user log mood reports tied to a resolved real-world location and
//! shows a rolling summary ("climate") of recent reports, alongside a
//! simulated weather snapshot for the same coordinates.

pub mod app;
pub mod climate;
pub mod environment;
pub mod journal;
pub mod location;
pub mod storage;

// Re-export commonly used types
pub use app::{AppController, AppError, PermissionState};
pub use climate::{summarize, ClimateSummary, Trend};
pub use environment::{EnvironmentSimulator, WeatherSnapshot};
pub use journal::{MoodEntry, MoodJournal};
pub use location::{Coordinates, LocationData};
pub use storage::{AppConfig, Database, StateStore};
