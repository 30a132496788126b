use crate::cli::commands::open_session;
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::calendar::recent_entries;
use crate::core::dashboard::Dashboard;
use crate::core::repository::EntryRepository;
use crate::errors::AppResult;
use crate::render::heatmap::{Style, render_recent};
use crate::ui::messages::header;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::List { limit, plain } = &cli.command {
        let (mut pool, session) = open_session(cli, cfg)?;
        let dash = Dashboard::new(
            session,
            EntryRepository::new(&mut pool),
            cfg.recent_limit,
        );

        let entries = dash.entries()?;
        let recent = recent_entries(&entries, limit.unwrap_or(cfg.recent_limit));

        header(format!(
            "Recent entries ({} of {})",
            recent.len(),
            entries.len()
        ));
        println!("{}", render_recent(recent, Style::detect(*plain)));
    }

    Ok(())
}
