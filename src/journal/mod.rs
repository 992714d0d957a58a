//! Mood journal.
//!
//! A bounded, newest-first log of mood reports. Every append is persisted
//! immediately through a [`StateStore`]; if that write fails the in-memory log
//! keeps the new entry and the error is returned to the caller.

pub mod entry;

use chrono::Utc;
use thiserror::Error;
use uuid::Uuid;

use crate::location::Coordinates;
use crate::storage::{StateStore, StorageError};

pub use entry::{MoodEntry, MAX_INTENSITY, MIN_INTENSITY, MOOD_CATEGORIES};

/// Maximum number of entries kept in the journal.
pub const MAX_ENTRIES: usize = 50;

/// Journal errors.
#[derive(Debug, Error)]
pub enum JournalError {
    #[error("Failed to persist mood log: {0}")]
    PersistFailed(#[source] StorageError),

    #[error("Failed to load mood log: {0}")]
    LoadFailed(#[source] StorageError),
}

/// Newest-first log of mood reports.
#[derive(Debug, Clone, Default)]
pub struct MoodJournal {
    entries: Vec<MoodEntry>,
}

impl MoodJournal {
    /// Create an empty journal.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restore the persisted journal, or an empty one if nothing was saved.
    pub fn load<S: StateStore + ?Sized>(store: &S) -> Result<Self, JournalError> {
        let mut entries = store
            .load_mood_log()
            .map_err(JournalError::LoadFailed)?
            .unwrap_or_default();
        entries.truncate(MAX_ENTRIES);

        tracing::debug!("Loaded {} mood entries", entries.len());
        Ok(Self { entries })
    }

    /// Record a new report and persist the resulting log.
    ///
    /// Inputs are stored as given; range checks are the caller's job. The
    /// entry is kept in memory even if persisting fails.
    pub fn append<S: StateStore + ?Sized>(
        &mut self,
        store: &S,
        mood: &str,
        intensity: u8,
        location: &str,
        coordinates: Option<Coordinates>,
    ) -> Result<&MoodEntry, JournalError> {
        let entry = MoodEntry {
            id: Uuid::new_v4().to_string(),
            mood: mood.to_string(),
            intensity,
            timestamp: Utc::now(),
            location: location.to_string(),
            coordinates,
        };

        self.entries.insert(0, entry);
        if self.entries.len() > MAX_ENTRIES {
            let evicted = self.entries.len() - MAX_ENTRIES;
            self.entries.truncate(MAX_ENTRIES);
            tracing::debug!("Evicted {} oldest mood entries", evicted);
        }

        if let Err(e) = store.save_mood_log(&self.entries) {
            tracing::warn!("Mood log not persisted, in-memory log has diverged: {}", e);
            return Err(JournalError::PersistFailed(e));
        }

        Ok(&self.entries[0])
    }

    /// Entries, newest first.
    pub fn entries(&self) -> &[MoodEntry] {
        &self.entries
    }

    /// The most recent entry.
    pub fn latest(&self) -> Option<&MoodEntry> {
        self.entries.first()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
