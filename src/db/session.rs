//! Persistence of the locally signed-in user (one-row `session` table).

use crate::errors::AppResult;
use crate::models::owner::Owner;
use chrono::Local;
use rusqlite::{Connection, OptionalExtension, params};

pub fn load_session_owner(conn: &Connection) -> AppResult<Option<Owner>> {
    let raw: Option<String> = conn
        .query_row("SELECT owner FROM session WHERE id = 1", [], |row| row.get(0))
        .optional()?;

    // A corrupted row is treated as "signed out".
    Ok(raw.and_then(|name| Owner::parse(&name).ok()))
}

pub fn save_session_owner(conn: &Connection, owner: &Owner) -> AppResult<()> {
    conn.execute(
        "INSERT INTO session (id, owner, signed_in_at) VALUES (1, ?1, ?2)
         ON CONFLICT(id) DO UPDATE SET
             owner = excluded.owner,
             signed_in_at = excluded.signed_in_at",
        params![owner.as_str(), Local::now().to_rfc3339()],
    )?;
    Ok(())
}

pub fn clear_session(conn: &Connection) -> AppResult<()> {
    conn.execute("DELETE FROM session", [])?;
    Ok(())
}
