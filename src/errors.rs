//! Unified application error type.
//! All modules (db, core, cli, config) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    // ---------------------------
    // Validation errors
    // ---------------------------
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Event title must not be empty")]
    EmptyTitle,

    #[error("Unknown category '{0}' (see `rdates categories`)")]
    UnknownCategory(String),

    #[error("Category '{0}' is a filter and cannot be assigned to an event")]
    ReservedCategory(String),

    #[error("Unknown icon '{0}' (see `rdates categories`)")]
    UnknownIcon(String),

    #[error("Invalid event id: {0}")]
    InvalidEventId(String),

    #[error("Event id prefix '{0}' matches more than one event")]
    AmbiguousEventId(String),

    #[error("Unknown color theme: {0}")]
    UnknownTheme(String),

    // ---------------------------
    // Lookup errors
    // ---------------------------
    #[error("No event found with id {0}")]
    EventNotFound(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),
}

pub type AppResult<T> = Result<T, AppError>;
