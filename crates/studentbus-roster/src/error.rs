//! Error types for roster parsing, loading and encoding

use std::path::PathBuf;

/// Why a single roster line was rejected
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecordError {
    #[error("invalid line format")]
    Format,

    #[error("id {0} does not fit in 0..=65535")]
    IdOutOfRange(String),

    #[error("full name is empty")]
    EmptyName,

    #[error("invalid date {0}")]
    InvalidDate(String),
}

/// Failure to read the roster directory itself
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("cannot read roster directory {path}: {source}")]
    Directory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// JSON batch encode/decode failure
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
