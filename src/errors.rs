//! Unified application error type.
//! All modules (data, config, cli, utils) return AppError to keep the error
//! handling consistent and easy to manage. The core evaluators never error:
//! malformed schedule data degrades to "closed" / "no pharmacy on duty".

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
    // Dataset-related
    // ---------------------------
    #[error("Dataset error: {0}")]
    Data(#[from] serde_json::Error),

    #[error("Dataset file not found: {0}")]
    DataFileNotFound(String),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid timestamp format: {0}")]
    InvalidTimestamp(String),

    // ---------------------------
    // Lookup errors
    // ---------------------------
    #[error("No business found matching '{0}'")]
    BusinessNotFound(String),

    #[error("Unknown category: {0}")]
    UnknownCategory(String),

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
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
