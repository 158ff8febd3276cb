//! Error types for shoremap

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for shoremap core operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("cannot open input file {}: {source}", path.display())]
    InputFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("malformed table {}: {reason}", path.display())]
    MalformedTable { path: PathBuf, reason: String },

    #[error("table {} contains no coordinate rows", path.display())]
    EmptyTable { path: PathBuf },

    #[error("row {row} of {} is missing field '{field}'", path.display())]
    MissingField {
        path: PathBuf,
        row: usize,
        field: &'static str,
    },

    #[error("invalid canvas width: {0} (must be positive)")]
    InvalidWidth(u32),

    #[error("{0}")]
    Other(String),
}

/// Result type alias for shoremap core operations
pub type Result<T> = std::result::Result<T, Error>;
