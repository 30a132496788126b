use crate::cli::commands::open_session;
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::session::SessionProvider;
use crate::errors::{AppError, AppResult};
use crate::export::ExportLogic;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        range,
        force,
    } = &cli.command
    {
        let (mut pool, session) = open_session(cli, cfg)?;
        let owner = session
            .current_user()
            .ok_or_else(|| AppError::invalid("not signed in; nothing to export"))?;

        ExportLogic::export(&mut pool, &owner, *format, file, range.as_deref(), *force)?;
    }
    Ok(())
}
