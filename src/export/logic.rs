use crate::db::log::audit_or_warn;
use crate::db::pool::DbPool;
use crate::core::repository::EntryRepository;
use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::EntryExport;
use crate::export::range::parse_range;
use crate::models::owner::Owner;
use crate::ui::messages::warning;
use chrono::NaiveDate;
use std::path::Path;

/// High-level export of one user's entries.
pub struct ExportLogic;

impl ExportLogic {
    /// Export `owner`'s entries, oldest first.
    ///
    /// `range`: `None`, `"all"` or one of the forms accepted by
    /// [`parse_range`]. Returns how many entries were written.
    pub fn export(
        pool: &mut DbPool,
        owner: &Owner,
        format: ExportFormat,
        file: &str,
        range: Option<&str>,
        force: bool,
    ) -> AppResult<usize> {
        let path = Path::new(file);

        let bounds: Option<(NaiveDate, NaiveDate)> = match range {
            None => None,
            Some(r) if r.eq_ignore_ascii_case("all") => None,
            Some(r) => Some(parse_range(r)?),
        };

        let rows = load_entries(pool, owner, bounds)?;

        if rows.is_empty() {
            warning("No entries found for the selected range.");
            return Ok(0);
        }

        ensure_writable(path, force)?;

        match format {
            ExportFormat::Csv => export_csv(&rows, path)?,
            ExportFormat::Json => export_json(&rows, path)?,
        }

        audit_or_warn(
            &pool.conn,
            "export",
            &path.to_string_lossy(),
            &format!("Exported {} entries as {}", rows.len(), format.as_str()),
        );

        Ok(rows.len())
    }
}

fn load_entries(
    pool: &mut DbPool,
    owner: &Owner,
    bounds: Option<(NaiveDate, NaiveDate)>,
) -> AppResult<Vec<EntryExport>> {
    let repo = EntryRepository::new(&mut *pool);
    let entries = match bounds {
        None => {
            let mut all = repo.list_entries(owner)?;
            all.reverse();
            all
        }
        Some((start, end)) => repo.entries_between(owner, start, end)?,
    };

    Ok(entries.iter().map(EntryExport::from).collect())
}
