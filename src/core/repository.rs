//! Entry repository: the write-side invariant of one rating per owner per day.

use crate::db::store::RecordStore;
use crate::errors::{AppError, AppResult};
use crate::models::entry::{Entry, normalize_note};
use crate::models::level::Level;
use crate::models::owner::Owner;
use chrono::NaiveDate;

pub struct EntryRepository<S: RecordStore> {
    store: S,
}

impl<S: RecordStore> EntryRepository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// All entries of `owner`, newest first. Empty when nothing was recorded.
    pub fn list_entries(&self, owner: &Owner) -> AppResult<Vec<Entry>> {
        self.store.select_by_owner(owner)
    }

    pub fn get_entry(&self, owner: &Owner, date: NaiveDate) -> AppResult<Option<Entry>> {
        self.store.select_one(owner, date)
    }

    /// Entries of `owner` between `start` and `end` (inclusive), oldest first.
    pub fn entries_between(
        &self,
        owner: &Owner,
        start: NaiveDate,
        end: NaiveDate,
    ) -> AppResult<Vec<Entry>> {
        if start > end {
            return Err(AppError::invalid(format!(
                "range ends ({end}) before it starts ({start})"
            )));
        }
        self.store.select_range(owner, start, end)
    }

    /// Create the entry for `(owner, date)` or overwrite its level and note.
    ///
    /// The level is validated before the store is contacted. Saving does
    /// not refresh any derived view; callers re-list when they need one.
    pub fn upsert_entry(
        &mut self,
        owner: &Owner,
        date: NaiveDate,
        level: i64,
        note: Option<&str>,
    ) -> AppResult<Entry> {
        let level = Level::new(level)?;
        let note = normalize_note(note);

        self.store
            .upsert_on_conflict(owner, date, level, note.as_deref())
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
