//! Async basemap fetch: export request + image decode.

use std::time::Duration;

use image::RgbaImage;
use shoremap_core::MapProjection;
use tracing::{debug, info};

use crate::error::Result;
use crate::http::HttpClient;
use crate::service::{export_url, ImageryService};

/// Options for basemap fetching.
#[derive(Debug, Clone)]
pub struct FetchOptions {
    /// Basemap service to query.
    pub service: ImageryService,
    /// Per-request timeout.
    pub timeout: Duration,
    /// Retries for connect/timeout failures.
    pub max_retries: u32,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            service: ImageryService::WorldImagery,
            timeout: Duration::from_secs(30),
            max_retries: 3,
        }
    }
}

/// Fetch the basemap covering the projection's extent.
///
/// The returned image has exactly the projection's canvas dimensions, so it
/// can be used directly as the render background.
pub async fn fetch_basemap(proj: &MapProjection, options: &FetchOptions) -> Result<RgbaImage> {
    let client = HttpClient::new(options.timeout, options.max_retries)?;
    let url = export_url(options.service, proj);
    debug!("imagery request: {url}");

    let bytes = client.fetch_bytes(&url).await?;
    info!(
        "fetched {} basemap: {} bytes for {}x{} px",
        options.service,
        bytes.len(),
        proj.width(),
        proj.height()
    );

    let img = image::load_from_memory(&bytes)?.to_rgba8();
    Ok(img)
}
