pub mod add;
pub mod backup;
pub mod config;
pub mod db;
pub mod export;
pub mod heatmap;
pub mod init;
pub mod list;
pub mod log;
pub mod session;
pub mod show;
pub mod stats;

use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::session::LocalSession;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::owner::Owner;

/// Open the configured database and restore the session, honouring `--user`.
pub(crate) fn open_session(cli: &Cli, cfg: &Config) -> AppResult<(DbPool, LocalSession)> {
    let pool = DbPool::open(&cfg.database_path().to_string_lossy())?;
    let mut session = LocalSession::restore(&pool.conn)?;

    if let Some(name) = &cli.user {
        session.set_user(Some(Owner::parse(name)?));
    }

    Ok((pool, session))
}
