//! Mood report entries.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::location::Coordinates;

/// Mood categories offered to the user.
pub const MOOD_CATEGORIES: &[&str] = &["joyful", "content", "neutral", "anxious", "sad", "angry"];

/// Lowest accepted intensity.
pub const MIN_INTENSITY: u8 = 1;
/// Highest accepted intensity.
pub const MAX_INTENSITY: u8 = 100;

/// A single mood report.
///
/// Entries are immutable; they are only ever evicted from the journal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoodEntry {
    /// Unique identifier
    pub id: String,
    /// Mood category
    pub mood: String,
    /// Intensity percentage (1-100)
    pub intensity: u8,
    /// When the report was made
    pub timestamp: DateTime<Utc>,
    /// Display string of the location the report was made at
    pub location: String,
    /// Coordinates at report time, if a location had been resolved
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Coordinates>,
}

impl MoodEntry {
    /// Check whether an intensity is in the accepted range.
    pub fn validate_intensity(intensity: u8) -> bool {
        (MIN_INTENSITY..=MAX_INTENSITY).contains(&intensity)
    }

    /// Whether the mood is one of the built-in categories.
    pub fn is_known_mood(&self) -> bool {
        MOOD_CATEGORIES.contains(&self.mood.as_str())
    }
}
