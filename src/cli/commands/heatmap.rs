use crate::cli::commands::open_session;
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::dashboard::Dashboard;
use crate::core::repository::EntryRepository;
use crate::errors::AppResult;
use crate::render::heatmap::{Style, render_dashboard};
use crate::utils::date;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Heatmap { today, plain } = &cli.command {
        let reference = date::reference_date(today.as_deref())?;
        let (mut pool, session) = open_session(cli, cfg)?;

        let mut dash = Dashboard::new(
            session,
            EntryRepository::new(&mut pool),
            cfg.recent_limit,
        );
        let view = dash.refresh(reference)?;

        print!("{}", render_dashboard(view, Style::detect(*plain)));
    }

    Ok(())
}
