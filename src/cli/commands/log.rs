use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::log::LogLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if matches!(cli.command, Commands::Log { print: true }) {
        let mut pool = DbPool::open(&cfg.database_path().to_string_lossy())?;
        LogLogic::print_log(&mut pool)?;
    }

    Ok(())
}
