//! # Shoremap Imagery
//!
//! Satellite basemap fetching for shoremap.
//!
//! One `export` request against the public ArcGIS Online REST API returns a
//! basemap image covering a Web Mercator bounding box at an exact pixel
//! size, which becomes the background of the rendered map. Connect and
//! timeout failures are retried with exponential backoff; there is no
//! offline fallback.

pub mod error;
pub mod fetch;
pub mod http;
pub mod service;
pub mod sync_api;

pub use error::{ImageryError, Result};
pub use fetch::{fetch_basemap, FetchOptions};
pub use service::{export_url, ImageryService};
pub use sync_api::fetch_basemap_blocking;

/// Blocking API re-exported as `blocking` module.
pub mod blocking {
    pub use crate::sync_api::*;
}
