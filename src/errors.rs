//! Error types for the genguard crate
//!
//! This module contains all error types that can be returned by genguard operations.

use std::path::PathBuf;
use thiserror::Error;

pub use reserved_words::ReservedNameError;

#[derive(Error, Debug)]
pub enum GenGuardError {
    #[error(transparent)]
    ReservedName(#[from] ReservedNameError),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid entity definition in {path}: {source}")]
    InvalidEntityFile {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}
