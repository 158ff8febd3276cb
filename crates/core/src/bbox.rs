//! Geographic bounding box for the visible map extent.

use serde::{Deserialize, Serialize};

/// A geographic bounding box in WGS-84 degrees.
///
/// The usual invariant is `south < north` and `west < east`; it is not
/// validated here. A degenerate box produces a degenerate map rather than
/// an error, matching the permissive behavior of the rest of the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    /// Latitude of the lower (southern) edge
    pub south: f64,
    /// Longitude of the left (western) edge
    pub west: f64,
    /// Latitude of the upper (northern) edge
    pub north: f64,
    /// Longitude of the right (eastern) edge
    pub east: f64,
}

impl BoundingBox {
    pub fn new(south: f64, west: f64, north: f64, east: f64) -> Self {
        Self {
            south,
            west,
            north,
            east,
        }
    }

    /// Longitude at the given fraction of the west-to-east span.
    ///
    /// `frac = 0.0` is the western edge, `frac = 1.0` the eastern edge.
    /// Used to anchor decorations: e.g. west=-10, east=-8, frac=0.86
    /// gives -8.28, near the right edge.
    pub fn lon_at(&self, frac: f64) -> f64 {
        self.west + (self.east - self.west) * frac
    }

    /// Latitude at the given fraction of the south-to-north span.
    pub fn lat_at(&self, frac: f64) -> f64 {
        self.south + (self.north - self.south) * frac
    }
}
