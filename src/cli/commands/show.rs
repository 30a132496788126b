use crate::cli::commands::open_session;
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::dashboard::Dashboard;
use crate::core::repository::EntryRepository;
use crate::errors::AppResult;
use crate::render::heatmap::{Style, render_entry};
use crate::ui::messages::info;
use crate::utils::date;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Show { date: date_arg, plain } = &cli.command {
        let day = date::parse_day(date_arg, date::today())?;
        let (mut pool, session) = open_session(cli, cfg)?;
        let dash = Dashboard::new(
            session,
            EntryRepository::new(&mut pool),
            cfg.recent_limit,
        );

        match dash.entry(day)? {
            Some(entry) => println!("{}", render_entry(&entry, Style::detect(*plain))),
            None => info(format!("No entry for {}.", day)),
        }
    }

    Ok(())
}
