//! Unified application error type.
//! Every layer around the calculator (store, config, cli, export) returns
//! AppError. The calculator itself has no failure path.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO / serialization
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Unsupported snapshot file: {0} (use .json, .yaml or .yml)")]
    UnsupportedSnapshot(String),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    #[error("Invalid period: {0}")]
    InvalidPeriod(String),

    #[error("Invalid rate type: {0}")]
    InvalidRateType(String),

    // ---------------------------
    // Entry errors
    // ---------------------------
    #[error("Invalid entry: {0}")]
    InvalidEntry(String),

    #[error("No entry found with id {0}")]
    EntryNotFound(String),

    #[error("No expense found with id {0}")]
    ExpenseNotFound(String),

    #[error("No work type found with id {0}")]
    WorkTypeNotFound(String),

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

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
