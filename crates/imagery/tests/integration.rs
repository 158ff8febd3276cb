//! Integration tests for basemap fetching.
//!
//! Tests marked `#[ignore]` require network access to ArcGIS Online.
//! Run with: `cargo test -p shoremap-imagery -- --ignored`

use shoremap_core::{BoundingBox, MapProjection};
use shoremap_imagery::{fetch_basemap, FetchOptions, ImageryService};

/// Fetch a small satellite tile over Kinsale harbour.
#[tokio::test]
#[ignore]
async fn fetch_world_imagery_tile() {
    let bbox = BoundingBox::new(51.6, -8.6, 51.75, -8.4);
    let proj = MapProjection::new(bbox, 300).unwrap();

    let img = fetch_basemap(&proj, &FetchOptions::default())
        .await
        .expect("failed to fetch basemap");

    assert_eq!(img.width(), proj.width());
    assert_eq!(img.height(), proj.height());
}

/// The topo service should answer the same bbox request.
#[tokio::test]
#[ignore]
async fn fetch_topo_tile() {
    let bbox = BoundingBox::new(51.6, -8.6, 51.75, -8.4);
    let proj = MapProjection::new(bbox, 200).unwrap();

    let options = FetchOptions {
        service: ImageryService::WorldTopoMap,
        ..FetchOptions::default()
    };
    let img = fetch_basemap(&proj, &options).await.expect("fetch failed");
    assert_eq!(img.width(), 200);
}
