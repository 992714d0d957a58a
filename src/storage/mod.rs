//! Storage module for persisted state and configuration.
//!
//! Two independent records are persisted: the mood log and the last resolved
//! location. [`StateStore`] is the seam the journal and the controller write
//! through; [`Database`] is the SQLite-backed implementation.

pub mod config;
pub mod database;
pub mod schema;

use thiserror::Error;

use crate::journal::MoodEntry;
use crate::location::LocationData;

pub use config::{AppConfig, ClimateSettings, ConfigError, EnvironmentSettings, LocationSettings};
pub use database::Database;

/// Persistence collaborator for application state.
pub trait StateStore {
    /// Load the persisted mood log, newest first. `None` if nothing was saved yet.
    fn load_mood_log(&self) -> Result<Option<Vec<MoodEntry>>, StorageError>;

    /// Replace the persisted mood log.
    fn save_mood_log(&self, entries: &[MoodEntry]) -> Result<(), StorageError>;

    /// Load the last resolved location.
    fn load_location(&self) -> Result<Option<LocationData>, StorageError>;

    /// Replace the persisted location.
    fn save_location(&self, location: &LocationData) -> Result<(), StorageError>;
}

/// Storage errors.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Failed to connect to database: {0}")]
    ConnectionFailed(String),

    #[error("IO error: {0}")]
    IoError(String),

    #[error("Migration failed: {0}")]
    MigrationFailed(String),

    #[error("Query failed: {0}")]
    QueryFailed(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Deserialization error: {0}")]
    DeserializationError(String),
}
