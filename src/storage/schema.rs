//! Database schema definitions.

/// SQL schema for the persisted records.
///
/// Each record is a whole JSON document keyed by name and rewritten on every
/// save.
pub const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS records (
    key TEXT PRIMARY KEY,
    value TEXT NOT NULL,
    updated_at TEXT NOT NULL
);
"#;

/// Schema version tracking table.
pub const SCHEMA_VERSION_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS schema_version (
    version INTEGER PRIMARY KEY,
    applied_at TEXT NOT NULL
);
"#;

/// Current schema version.
pub const CURRENT_VERSION: i32 = 1;

/// Record key for the mood log.
pub const MOOD_ENTRIES_KEY: &str = "mood_entries";

/// Record key for the last resolved location.
pub const LOCATION_DATA_KEY: &str = "location_data";
