//! Windowed climate aggregation.

use super::{ClimateSummary, Trend};
use crate::journal::MoodEntry;

/// Maximum number of recent reports considered.
pub const WINDOW_SIZE: usize = 20;

/// Summarize the most recent reports.
///
/// `entries` must be newest first. With `filter_by_location` only reports whose
/// location equals `current_location` are considered. Returns `None` when there
/// is nothing to summarize.
pub fn summarize(
    entries: &[MoodEntry],
    current_location: &str,
    filter_by_location: bool,
) -> Option<ClimateSummary> {
    if entries.is_empty() {
        return None;
    }

    let window: Vec<&MoodEntry> = entries
        .iter()
        .filter(|e| !filter_by_location || e.location == current_location)
        .take(WINDOW_SIZE)
        .collect();

    if window.is_empty() {
        return None;
    }

    let total: u32 = window.iter().map(|e| u32::from(e.intensity)).sum();
    let average_intensity = (f64::from(total) / window.len() as f64).round() as u32;

    Some(ClimateSummary {
        average_intensity,
        dominant_mood: dominant_mood(&window),
        total_reports: window.len(),
        trend: trend(&window),
    })
}

/// Most frequent mood; ties go to the mood seen first.
fn dominant_mood(window: &[&MoodEntry]) -> String {
    // Counts in first-occurrence order.
    let mut counts: Vec<(&str, usize)> = Vec::new();
    for entry in window {
        match counts.iter().position(|(mood, _)| *mood == entry.mood.as_str()) {
            Some(i) => counts[i].1 += 1,
            None => counts.push((entry.mood.as_str(), 1)),
        }
    }

    let mut best: Option<(&str, usize)> = None;
    for (mood, count) in counts {
        if best.map_or(true, |(_, best_count)| count > best_count) {
            best = Some((mood, count));
        }
    }

    best.map(|(mood, _)| mood.to_string()).unwrap_or_default()
}

/// Compare the two most recent intensities.
///
/// Equal intensities count as declining.
fn trend(window: &[&MoodEntry]) -> Trend {
    match window {
        [latest, previous, ..] => {
            if latest.intensity > previous.intensity {
                Trend::Improving
            } else {
                Trend::Declining
            }
        }
        _ => Trend::Stable,
    }
}
