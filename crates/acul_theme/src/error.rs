//! Errors raised while loading screen contexts

use std::path::PathBuf;
use thiserror::Error;

/// Loading errors. Theme computation itself cannot fail.
#[derive(Error, Debug)]
pub enum ThemeError {
    /// Failed to read a context file
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Context is not valid JSON
    #[error("invalid JSON context: {0}")]
    Json(#[from] serde_json::Error),

    /// Context is not valid TOML
    #[error("invalid TOML context: {0}")]
    Toml(#[from] toml::de::Error),

    /// File extension is neither `.json` nor `.toml`
    #[error("unsupported context format: {0}")]
    UnsupportedFormat(String),
}

pub type Result<T> = std::result::Result<T, ThemeError>;
