//! Unit tests for climate aggregation

use chrono::{Duration, Utc};
use emoweather::climate::{summarize, JournalInsights, Trend, WINDOW_SIZE};
use emoweather::journal::MoodEntry;

fn entry(mood: &str, intensity: u8, location: &str, minutes_ago: i64) -> MoodEntry {
    MoodEntry {
        id: uuid::Uuid::new_v4().to_string(),
        mood: mood.to_string(),
        intensity,
        timestamp: Utc::now() - Duration::minutes(minutes_ago),
        location: location.to_string(),
        coordinates: None,
    }
}

#[test]
fn test_worked_example() {
    let entries = vec![
        entry("joyful", 90, "X", 0),
        entry("sad", 40, "X", 5),
        entry("joyful", 70, "Y", 10),
    ];

    let summary = summarize(&entries, "X", true).expect("Summary expected");
    assert_eq!(summary.average_intensity, 65);
    assert_eq!(summary.dominant_mood, "joyful");
    assert_eq!(summary.trend, Trend::Improving);
    assert_eq!(summary.total_reports, 2);
}

#[test]
fn test_filter_keeps_newest_first_order() {
    // Interleaved locations: the window must be the 20 newest "X" reports.
    let mut entries = Vec::new();
    for i in 0..30 {
        entries.push(entry("content", 60, "X", i * 2));
        entries.push(entry("angry", 5, "Y", i * 2 + 1));
    }
    entries[0].intensity = 100;
    entries[2].intensity = 20;

    let summary = summarize(&entries, "X", true).unwrap();
    assert_eq!(summary.total_reports, WINDOW_SIZE);
    assert_eq!(summary.dominant_mood, "content");
    assert_eq!(summary.trend, Trend::Improving);
    // (100 + 20 + 18 * 60) / 20 = 60
    assert_eq!(summary.average_intensity, 60);
}

#[test]
fn test_unfiltered_ignores_current_location() {
    let entries = vec![entry("anxious", 30, "Y", 0), entry("anxious", 30, "Z", 1)];
    let summary = summarize(&entries, "X", false).unwrap();
    assert_eq!(summary.total_reports, 2);
    assert_eq!(summary.trend, Trend::Declining);
}

#[test]
fn test_location_match_is_exact() {
    let entries = vec![entry("joyful", 80, "Bishan, Singapore", 0)];
    assert!(summarize(&entries, "bishan, singapore", true).is_none());
    assert!(summarize(&entries, "Bishan, Singapore ", true).is_none());
    assert!(summarize(&entries, "Bishan, Singapore", true).is_some());
}

#[test]
fn test_dominant_mood_three_way_tie() {
    let entries = vec![
        entry("sad", 10, "X", 0),
        entry("joyful", 90, "X", 1),
        entry("neutral", 50, "X", 2),
    ];
    assert_eq!(summarize(&entries, "X", true).unwrap().dominant_mood, "sad");
}

#[test]
fn test_insights_alongside_summary() {
    let entries = vec![
        entry("joyful", 90, "X", 0),
        entry("sad", 40, "X", 5),
        entry("joyful", 70, "Y", 10),
    ];
    let insights = JournalInsights::compute(&entries, None);
    assert_eq!(insights.total_reports, 3);
    assert_eq!(insights.recent_average, 67);
    assert_eq!(insights.recent_count, 3);
    assert_eq!(insights.location_count, 2);
}
