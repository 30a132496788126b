use crate::errors::{AppError, AppResult};
use crate::models::entry::Entry;
use crate::models::level::Level;
use crate::models::owner::Owner;
use chrono::{Local, NaiveDate};
use rusqlite::types::Type;
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

const ENTRY_COLUMNS: &str = "id, owner, date, level, note, created_at, updated_at";

fn conversion_error(idx: usize, err: AppError) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(err))
}

pub fn date_to_db(date: &NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

pub fn map_row(row: &Row) -> Result<Entry> {
    let owner_str: String = row.get("owner")?;
    let owner = Owner::parse(&owner_str).map_err(|e| conversion_error(1, e))?;

    let date_str: String = row.get("date")?;
    let date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d").map_err(|_| {
        conversion_error(
            2,
            AppError::invalid(format!("stored date '{}' is malformed", date_str)),
        )
    })?;

    let level_raw: i64 = row.get("level")?;
    let level = Level::try_from(level_raw).map_err(|e| conversion_error(3, e))?;

    Ok(Entry {
        id: row.get("id")?,
        owner,
        date,
        level,
        note: row.get("note")?,
        created_at: row.get("created_at")?,
        updated_at: row.get("updated_at")?,
    })
}

/// Every entry of `owner`, newest date first.
pub fn select_entries_by_owner(conn: &Connection, owner: &Owner) -> AppResult<Vec<Entry>> {
    let mut stmt = conn.prepare_cached(&format!(
        "SELECT {ENTRY_COLUMNS} FROM entries
         WHERE owner = ?1
         ORDER BY date DESC"
    ))?;

    let rows = stmt.query_map([owner.as_str()], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Entries of `owner` between two dates (inclusive), oldest first.
pub fn select_entries_in_range(
    conn: &Connection,
    owner: &Owner,
    start: &NaiveDate,
    end: &NaiveDate,
) -> AppResult<Vec<Entry>> {
    let mut stmt = conn.prepare_cached(&format!(
        "SELECT {ENTRY_COLUMNS} FROM entries
         WHERE owner = ?1 AND date BETWEEN ?2 AND ?3
         ORDER BY date ASC"
    ))?;

    let rows = stmt.query_map(
        params![owner.as_str(), date_to_db(start), date_to_db(end)],
        map_row,
    )?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn select_entry(conn: &Connection, owner: &Owner, date: &NaiveDate) -> AppResult<Option<Entry>> {
    let mut stmt = conn.prepare_cached(&format!(
        "SELECT {ENTRY_COLUMNS} FROM entries
         WHERE owner = ?1 AND date = ?2"
    ))?;

    let entry = stmt
        .query_row(params![owner.as_str(), date_to_db(date)], map_row)
        .optional()?;
    Ok(entry)
}

/// Insert the entry for `(owner, date)` or overwrite its level and note.
///
/// A single statement, so readers see either the previous row or the new
/// one. `id`, `date` and `created_at` of an existing row are preserved.
pub fn upsert_entry(
    conn: &Connection,
    owner: &Owner,
    date: &NaiveDate,
    level: Level,
    note: Option<&str>,
) -> AppResult<Entry> {
    let now = Local::now().to_rfc3339();

    let mut stmt = conn.prepare_cached(&format!(
        "INSERT INTO entries (owner, date, level, note, created_at, updated_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?5)
         ON CONFLICT(owner, date) DO UPDATE SET
             level = excluded.level,
             note = excluded.note,
             updated_at = excluded.updated_at
         RETURNING {ENTRY_COLUMNS}"
    ))?;

    let entry = stmt.query_row(
        params![
            owner.as_str(),
            date_to_db(date),
            i64::from(level.value()),
            note,
            now
        ],
        map_row,
    )?;
    Ok(entry)
}
