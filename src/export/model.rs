use crate::models::entry::Entry;
use serde::Serialize;

/// Flat row written by the CSV and JSON exporters.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct EntryExport {
    pub id: i64,
    pub date: String,
    pub level: u8,
    pub note: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<&Entry> for EntryExport {
    fn from(e: &Entry) -> Self {
        Self {
            id: e.id,
            date: e.date_str(),
            level: e.level.value(),
            note: e.note.clone().unwrap_or_default(),
            created_at: e.created_at.clone(),
            updated_at: e.updated_at.clone(),
        }
    }
}
