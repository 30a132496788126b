//! Unified application error type.
//! All modules (db, core, cli, utils) return AppError so the CLI can report
//! every failure the same way.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // Caller errors
    // ---------------------------
    /// Bad level, malformed date or missing owner. Raised before the
    /// record store is contacted and never retried.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    // ---------------------------
    // Record store
    // ---------------------------
    /// Any failure reaching or executing against the record store.
    #[error("Store unavailable: {0}")]
    StoreUnavailable(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),
}

impl AppError {
    pub fn invalid<T: Into<String>>(msg: T) -> Self {
        AppError::InvalidInput(msg.into())
    }

    pub fn is_store_unavailable(&self) -> bool {
        matches!(self, AppError::StoreUnavailable(_))
    }
}

pub type AppResult<T> = Result<T, AppError>;
