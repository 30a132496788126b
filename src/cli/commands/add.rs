use crate::cli::commands::open_session;
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::dashboard::Dashboard;
use crate::core::repository::EntryRepository;
use crate::db::log::audit_or_warn;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::date;

/// Rate a day: insert or replace the signed-in user's entry for DATE.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        date: date_arg,
        level,
        note,
    } = &cli.command
    {
        //
        // 1. Parse date (today / yesterday / YYYY-MM-DD)
        //
        let day = date::parse_day(date_arg, date::today())?;

        //
        // 2. Level falls back to the configured default
        //
        let level = level.unwrap_or(cfg.default_level);

        //
        // 3. Open DB + session, then save
        //
        let (mut pool, session) = open_session(cli, cfg)?;

        let entry = {
            let mut dash = Dashboard::new(
                session,
                EntryRepository::new(&mut pool),
                cfg.recent_limit,
            );
            dash.save(day, level, note.as_deref())?
        };

        audit_or_warn(
            &pool.conn,
            "add",
            &entry.date_str(),
            &format!("{} rated the day {}", entry.owner, entry.level),
        );

        success(format!(
            "Saved {} for {}: level {}{}.",
            entry.owner,
            entry.date_str(),
            entry.level,
            if entry.has_note() { " with note" } else { "" }
        ));
    }

    Ok(())
}
