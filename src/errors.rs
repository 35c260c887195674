//! Unified application error type.
//! All modules (store, core, cli, utils) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

/// Why a single log row cannot be turned into an interval.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RowError {
    /// Empty field or wrong number of fields (e.g. a timer still running).
    #[error("incomplete row")]
    IncompleteRow,

    /// Unparsable timestamp or end before start.
    #[error("invalid field: {0}")]
    InvalidField(String),
}

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid timestamp '{0}' (expected HH:MM:SS YYYY/MM/DD)")]
    InvalidTimestamp(String),

    #[error("Invalid row: {0}")]
    Row(#[from] RowError),

    #[error("Invalid week start day: {0} (expected 0=Sunday .. 6=Saturday)")]
    InvalidWeekday(i64),

    // ---------------------------
    // Store / timer state
    // ---------------------------
    #[error("No completed interval found in {0}")]
    NotFound(String),

    #[error("Time log not found: {0} (start a timer first)")]
    StoreMissing(String),

    #[error("A timer is already running since {0}")]
    IntervalAlreadyOpen(String),

    #[error("No running timer to stop in {0}")]
    NoOpenInterval(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration: {0}")]
    ConfigLoad(String),

    #[error("Failed to save configuration: {0}")]
    ConfigSave(String),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
