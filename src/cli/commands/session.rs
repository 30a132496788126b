//! `login`, `logout` and `whoami`.

use crate::cli::commands::open_session;
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::session::SessionProvider;
use crate::db::log::audit_or_warn;
use crate::errors::AppResult;
use crate::models::owner::Owner;
use crate::ui::messages::{info, success};

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Login { name } => {
            let owner = Owner::parse(name)?;
            let (pool, mut session) = open_session(cli, cfg)?;

            session.sign_in(&pool.conn, owner.clone())?;
            audit_or_warn(&pool.conn, "login", owner.as_str(), "Signed in");
            success(format!("Signed in as {}.", owner));
        }
        Commands::Logout => {
            let (pool, mut session) = open_session(cli, cfg)?;

            match session.current_user() {
                Some(owner) => {
                    session.sign_out(&pool.conn)?;
                    audit_or_warn(&pool.conn, "logout", owner.as_str(), "Signed out");
                    success(format!("Signed out {}.", owner));
                }
                None => info("Nobody is signed in."),
            }
        }
        Commands::Whoami => {
            let (_pool, session) = open_session(cli, cfg)?;

            match session.current_user() {
                Some(owner) => println!("{}", owner),
                None => info("Not signed in. Use `dotlog login <name>`."),
            }
        }
        _ => {}
    }

    Ok(())
}
