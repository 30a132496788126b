use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::backup::BackupLogic;
use crate::errors::AppResult;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Backup {
        file,
        compress,
        force,
    } = &cli.command
    {
        let db_path = cfg.database_path();
        BackupLogic::backup(&db_path.to_string_lossy(), file, *compress, *force)?;
    }

    Ok(())
}
