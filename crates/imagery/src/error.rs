//! Error types for basemap fetching.

use thiserror::Error;

/// Errors produced while fetching or decoding basemap imagery.
#[derive(Error, Debug)]
pub enum ImageryError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status} fetching {url}")]
    Status { status: u16, url: String },

    #[error("cannot decode imagery response: {0}")]
    Decode(#[from] image::ImageError),

    #[error("runtime error: {0}")]
    Runtime(String),

    #[error("core error: {0}")]
    Core(#[from] shoremap_core::Error),
}

/// Result alias for imagery operations.
pub type Result<T> = std::result::Result<T, ImageryError>;
