use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for dotlog
#[derive(Parser)]
#[command(
    name = "dotlog",
    version = env!("CARGO_PKG_VERSION"),
    about = "Rate each day from 1 to 5 and see your year as a heatmap",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Act as this user for one command instead of the signed-in one
    #[arg(global = true, long = "user", short = 'u')]
    pub user: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Sign in as NAME on this machine
    Login {
        /// User name (no spaces)
        name: String,
    },

    /// Sign out the current user
    Logout,

    /// Show who is signed in
    Whoami,

    /// Rate a day (a second rating for the same day replaces the first)
    Add {
        /// Day to rate: YYYY-MM-DD, "today" or "yesterday"
        #[arg(default_value = "today")]
        date: String,

        #[arg(
            long,
            short,
            allow_negative_numbers = true,
            help = "Level from 1 (rough) to 5 (great); defaults to the configured default_level"
        )]
        level: Option<i64>,

        #[arg(long, short, help = "Optional note: what happened today?")]
        note: Option<String>,
    },

    /// Show the last 52 weeks as a heatmap, plus recent entries
    Heatmap {
        #[arg(long, value_name = "DATE", help = "Reference day drawn as the last cell")]
        today: Option<String>,

        #[arg(long, help = "No colours: '.' for empty days, digits for levels")]
        plain: bool,
    },

    /// List the most recent entries
    List {
        #[arg(long, short = 'n', help = "How many entries to show")]
        limit: Option<usize>,

        #[arg(long, help = "No colours")]
        plain: bool,
    },

    /// Show the entry of a single day
    Show {
        /// YYYY-MM-DD, "today" or "yesterday"
        date: String,

        #[arg(long, help = "No colours")]
        plain: bool,
    },

    /// Totals, average, level histogram and streaks
    Stats {
        #[arg(long, value_name = "DATE", help = "Reference day for the current streak")]
        today: Option<String>,
    },

    /// Export your entries
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(
            long,
            value_name = "RANGE",
            help = "Filter by year/month/day or a custom range (YYYY-MM:YYYY-MM)"
        )]
        range: Option<String>,

        #[arg(long, short = 'f', help = "Overwrite FILE without asking")]
        force: bool,
    },

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, help = "Write a .zip archive instead of a plain copy")]
        compress: bool,

        #[arg(long, short = 'f', help = "Overwrite FILE without asking")]
        force: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "path", help = "Print the configuration file location")]
        path: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(long = "editor", help = "Editor to use with --edit")]
        editor: Option<String>,
    },

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },
}
