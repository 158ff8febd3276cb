//! Error types for map composition.

use std::path::PathBuf;
use thiserror::Error;

/// Errors produced while composing or saving the map.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("cannot fill polygon: table {} has no points", path.display())]
    EmptyTable { path: PathBuf },

    #[error("cannot load font {}: {reason}", path.display())]
    Font { path: PathBuf, reason: String },

    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("core error: {0}")]
    Core(#[from] shoremap_core::Error),
}

/// Result alias for render operations.
pub type Result<T> = std::result::Result<T, RenderError>;
