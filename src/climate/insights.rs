//! Personal statistics over the whole journal.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::journal::MoodEntry;

/// Number of most recent reports used for the recent average.
pub const RECENT_REPORTS: usize = 7;

/// Statistics shown alongside the climate summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalInsights {
    /// Number of reports in the journal
    pub total_reports: usize,
    /// Rounded mean intensity of the most recent reports (0 when empty)
    pub recent_average: u32,
    /// Number of reports in the recent slice
    pub recent_count: usize,
    /// Number of distinct report locations
    pub location_count: usize,
}

impl JournalInsights {
    /// Compute insights for a newest-first journal.
    ///
    /// With a resolved `current_location`, only reports made there count
    /// towards `location_count`.
    pub fn compute(entries: &[MoodEntry], current_location: Option<&str>) -> Self {
        let recent = &entries[..entries.len().min(RECENT_REPORTS)];
        let recent_average = if recent.is_empty() {
            0
        } else {
            let total: u32 = recent.iter().map(|e| u32::from(e.intensity)).sum();
            (f64::from(total) / recent.len() as f64).round() as u32
        };

        let locations: HashSet<&str> = entries
            .iter()
            .filter(|e| current_location.map_or(true, |current| e.location == current))
            .map(|e| e.location.as_str())
            .collect();

        Self {
            total_reports: entries.len(),
            recent_average,
            recent_count: recent.len(),
            location_count: locations.len(),
        }
    }
}

/// The `limit` most recent reports.
pub fn recent_reports(entries: &[MoodEntry], limit: usize) -> &[MoodEntry] {
    &entries[..entries.len().min(limit)]
}
