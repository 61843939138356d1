//! # Error Types
//!
//! This module defines error types used throughout the doselabel library.
//!
//! Bad form input is never an error here: numeric fields clamp or fall back
//! to a placeholder. Errors only come from the outer layers (files, print
//! facilities, the HTTP server).

use thiserror::Error;

/// Main error type for doselabel operations
#[derive(Debug, Error)]
pub enum LabelError {
    /// Print facility failure (command exited non-zero, output not writable)
    #[error("Print error: {0}")]
    Print(String),

    /// Configuration file could not be interpreted
    #[error("Config error: {0}")]
    Config(String),

    /// HTTP server errors (bind, serve)
    #[error("Server error: {0}")]
    Server(String),

    /// JSON error wrapper
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error wrapper
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
