use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::log::audit_or_warn;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file (skipped in test mode)
///  - the SQLite database and all pending migrations
pub fn handle(cli: &Cli) -> AppResult<()> {
    let db_path = Config::init_all(cli.db.as_deref(), cli.test)?;
    let db_str = db_path.to_string_lossy().to_string();

    info("Initializing dotlog…");
    info(format!("Config file : {}", Config::config_file().display()));
    info(format!("Database    : {}", db_str));

    let pool = DbPool::open(&db_str)?;

    audit_or_warn(
        &pool.conn,
        "init",
        "Database initialized",
        &format!("Database initialized at {}", db_str),
    );

    success(format!("Database initialized at {}", db_str));
    Ok(())
}
