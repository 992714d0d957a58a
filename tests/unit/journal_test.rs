//! Unit tests for the mood journal

use emoweather::journal::{MoodJournal, MAX_ENTRIES};
use emoweather::location::Coordinates;
use emoweather::storage::{Database, StateStore};

#[test]
fn test_fifty_one_appends_keep_newest_fifty() {
    let db = Database::open_in_memory().expect("Failed to create database");
    let mut journal = MoodJournal::new();

    let mut ids = Vec::new();
    for i in 0..51u8 {
        let entry = journal
            .append(&db, "content", i + 1, "Bishan, Singapore", None)
            .expect("Failed to append");
        ids.push(entry.id.clone());
    }

    assert_eq!(journal.len(), MAX_ENTRIES);

    // Newest first: the journal is the appended ids reversed, minus the first one.
    let expected: Vec<String> = ids[1..].iter().rev().cloned().collect();
    let actual: Vec<String> = journal.entries().iter().map(|e| e.id.clone()).collect();
    assert_eq!(actual, expected);
    assert_eq!(journal.entries()[0].intensity, 51);
    assert_eq!(journal.entries()[MAX_ENTRIES - 1].intensity, 2);

    let persisted = db.load_mood_log().unwrap().expect("Log should be persisted");
    assert_eq!(persisted.len(), MAX_ENTRIES);
    assert_eq!(persisted[0].id, ids[50]);
}

#[test]
fn test_reload_preserves_order_and_timestamps() {
    let db = Database::open_in_memory().expect("Failed to create database");
    let mut journal = MoodJournal::new();
    journal
        .append(&db, "sad", 20, "Lyon, France", Some(Coordinates::new(45.76, 4.83)))
        .unwrap();
    journal.append(&db, "joyful", 95, "Lyon, France", None).unwrap();

    let restored = MoodJournal::load(&db).unwrap();
    assert_eq!(restored.entries(), journal.entries());
    assert!(restored.entries()[0].timestamp >= restored.entries()[1].timestamp);
}

#[test]
fn test_load_truncates_oversized_log() {
    let db = Database::open_in_memory().expect("Failed to create database");
    let mut journal = MoodJournal::new();
    for _ in 0..MAX_ENTRIES {
        journal.append(&db, "neutral", 50, "X", None).unwrap();
    }

    // A log written by something that did not enforce the cap.
    let mut oversized = journal.entries().to_vec();
    oversized.extend(journal.entries().iter().take(5).cloned());
    db.save_mood_log(&oversized).unwrap();

    assert_eq!(MoodJournal::load(&db).unwrap().len(), MAX_ENTRIES);
}
