//! Record store seam.
//!
//! The entry repository only ever talks to storage through [`RecordStore`]:
//! "select where owner" reads (all, one day, or a date range) and one
//! "upsert on conflict (owner, date)" write. Implementations must offer
//! read-your-writes: once an upsert returns, the next select sees it.

use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::AppResult;
use crate::models::entry::Entry;
use crate::models::level::Level;
use crate::models::owner::Owner;
use chrono::NaiveDate;

pub trait RecordStore {
    /// All records of `owner`, newest date first.
    fn select_by_owner(&self, owner: &Owner) -> AppResult<Vec<Entry>>;

    /// The record for `(owner, date)`, if any.
    fn select_one(&self, owner: &Owner, date: NaiveDate) -> AppResult<Option<Entry>>;

    /// Records of `owner` with `start <= date <= end`, oldest first.
    fn select_range(
        &self,
        owner: &Owner,
        start: NaiveDate,
        end: NaiveDate,
    ) -> AppResult<Vec<Entry>>;

    /// Atomic insert-or-overwrite keyed by `(owner, date)`.
    fn upsert_on_conflict(
        &mut self,
        owner: &Owner,
        date: NaiveDate,
        level: Level,
        note: Option<&str>,
    ) -> AppResult<Entry>;
}

impl RecordStore for DbPool {
    fn select_by_owner(&self, owner: &Owner) -> AppResult<Vec<Entry>> {
        queries::select_entries_by_owner(&self.conn, owner)
    }

    fn select_one(&self, owner: &Owner, date: NaiveDate) -> AppResult<Option<Entry>> {
        queries::select_entry(&self.conn, owner, &date)
    }

    fn select_range(
        &self,
        owner: &Owner,
        start: NaiveDate,
        end: NaiveDate,
    ) -> AppResult<Vec<Entry>> {
        queries::select_entries_in_range(&self.conn, owner, &start, &end)
    }

    fn upsert_on_conflict(
        &mut self,
        owner: &Owner,
        date: NaiveDate,
        level: Level,
        note: Option<&str>,
    ) -> AppResult<Entry> {
        queries::upsert_entry(&self.conn, owner, &date, level, note)
    }
}

impl<S: RecordStore + ?Sized> RecordStore for &mut S {
    fn select_by_owner(&self, owner: &Owner) -> AppResult<Vec<Entry>> {
        (**self).select_by_owner(owner)
    }

    fn select_one(&self, owner: &Owner, date: NaiveDate) -> AppResult<Option<Entry>> {
        (**self).select_one(owner, date)
    }

    fn select_range(
        &self,
        owner: &Owner,
        start: NaiveDate,
        end: NaiveDate,
    ) -> AppResult<Vec<Entry>> {
        (**self).select_range(owner, start, end)
    }

    fn upsert_on_conflict(
        &mut self,
        owner: &Owner,
        date: NaiveDate,
        level: Level,
        note: Option<&str>,
    ) -> AppResult<Entry> {
        (**self).upsert_on_conflict(owner, date, level, note)
    }
}
