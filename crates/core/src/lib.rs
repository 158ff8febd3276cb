//! # Shoremap Core
//!
//! Core types and I/O for the shoremap static-map renderer.
//!
//! This crate provides:
//! - `BoundingBox`: the four-coordinate rectangle defining the visible map extent
//! - `MapProjection`: Web Mercator mapping from (lon, lat) to canvas pixels
//! - `PointTable`: ordered coordinate rows loaded from a CSV or XML file
//! - `Error`: typed failures for input loading and projection setup

pub mod bbox;
pub mod error;
pub mod projection;
pub mod table;

pub use bbox::BoundingBox;
pub use error::{Error, Result};
pub use projection::{lonlat_to_mercator, MapProjection, EARTH_RADIUS_M};
pub use table::{LonLat, PointTable};
