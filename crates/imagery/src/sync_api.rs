//! Blocking (synchronous) API.
//!
//! Wraps the async fetch with a Tokio runtime so callers don't need to
//! manage their own async runtime.

use image::RgbaImage;
use shoremap_core::MapProjection;

use crate::error::{ImageryError, Result};
use crate::fetch::{fetch_basemap, FetchOptions};

/// One-shot convenience function: fetch the basemap for a projection (blocking).
///
/// Uses an internal single-threaded Tokio runtime.
pub fn fetch_basemap_blocking(proj: &MapProjection, options: &FetchOptions) -> Result<RgbaImage> {
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| ImageryError::Runtime(e.to_string()))?;

    rt.block_on(fetch_basemap(proj, options))
}
