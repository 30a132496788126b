use super::{level::Level, owner::Owner};
use chrono::NaiveDate;
use serde::Serialize;

/// One persisted day rating.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    pub id: i64,            // ⇔ entries.id (assigned by the store)
    pub owner: Owner,       // ⇔ entries.owner
    pub date: NaiveDate,    // ⇔ entries.date (TEXT "YYYY-MM-DD")
    pub level: Level,       // ⇔ entries.level (1..=5)
    pub note: Option<String>,
    pub created_at: String, // ⇔ entries.created_at (RFC 3339)
    pub updated_at: String, // ⇔ entries.updated_at (RFC 3339)
}

impl Entry {
    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    pub fn has_note(&self) -> bool {
        self.note.is_some()
    }
}

/// Collapse blank notes to `None`, the way the entry form submits them.
pub fn normalize_note(note: Option<&str>) -> Option<String> {
    note.map(str::trim)
        .filter(|n| !n.is_empty())
        .map(str::to_string)
}
