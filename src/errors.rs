//! Unified application error type.
//! All modules (core, cli, export, utils) return AppError to keep the error
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
    // Input dataset
    // ---------------------------
    #[error("Malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid timestamp '{value}' ({context})")]
    InvalidTimestamp { value: String, context: String },

    #[error("Invalid category: {0}")]
    InvalidCategory(String),

    // ---------------------------
    // Rendering
    // ---------------------------
    #[error("Render error: {0}")]
    Render(String),

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

pub type AppResult<T> = Result<T, AppError>;
