//! Web Mercator projection context.
//!
//! Maps WGS-84 (lon, lat) to pixel coordinates on a canvas covering a fixed
//! [`BoundingBox`]. The canvas width is chosen by the caller; the height
//! follows from the box's aspect ratio in projected meters, so the map is
//! not stretched. The context is created once per render and never mutated.

use crate::bbox::BoundingBox;
use crate::error::{Error, Result};

/// WGS-84 semi-major axis in meters (spherical Web Mercator).
pub const EARTH_RADIUS_M: f64 = 6_378_137.0;

/// Latitude limit of the Web Mercator projection.
const MAX_LATITUDE: f64 = 85.051_128_779_806_59;

/// Project a WGS-84 coordinate to Web Mercator meters (EPSG:3857).
pub fn lonlat_to_mercator(lon: f64, lat: f64) -> (f64, f64) {
    let lat = lat.clamp(-MAX_LATITUDE, MAX_LATITUDE);
    let x = EARTH_RADIUS_M * lon.to_radians();
    let y = EARTH_RADIUS_M * (std::f64::consts::FRAC_PI_4 + lat.to_radians() / 2.0).tan().ln();
    (x, y)
}

/// Projection context: fixed bounding box, fixed canvas size.
#[derive(Debug, Clone)]
pub struct MapProjection {
    bbox: BoundingBox,
    width: u32,
    height: u32,
    /// Mercator coordinates of the box corners.
    min_x: f64,
    min_y: f64,
    max_x: f64,
    max_y: f64,
}

impl MapProjection {
    /// Create a projection for `bbox` on a canvas `width_px` pixels wide.
    ///
    /// The canvas height is `width_px` scaled by the projected aspect ratio
    /// of the box, rounded, and at least 1 pixel.
    pub fn new(bbox: BoundingBox, width_px: u32) -> Result<Self> {
        if width_px == 0 {
            return Err(Error::InvalidWidth(width_px));
        }
        let (min_x, min_y) = lonlat_to_mercator(bbox.west, bbox.south);
        let (max_x, max_y) = lonlat_to_mercator(bbox.east, bbox.north);
        let span_x = max_x - min_x;
        let span_y = max_y - min_y;
        let height = if span_x.abs() > f64::EPSILON {
            ((width_px as f64) * (span_y / span_x).abs()).round().max(1.0) as u32
        } else {
            1
        };
        Ok(Self {
            bbox,
            width: width_px,
            height,
            min_x,
            min_y,
            max_x,
            max_y,
        })
    }

    pub fn bbox(&self) -> BoundingBox {
        self.bbox
    }

    /// Canvas width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Canvas height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Mercator extent as (min_x, min_y, max_x, max_y), for imagery requests.
    pub fn mercator_extent(&self) -> (f64, f64, f64, f64) {
        (self.min_x, self.min_y, self.max_x, self.max_y)
    }

    /// Project (lon, lat) to fractional pixel coordinates.
    ///
    /// Pixel y grows downward: the northern edge maps to y = 0. Coordinates
    /// outside the bounding box project outside `[0, width] x [0, height]`
    /// and are clipped later by the drawing code.
    pub fn to_pixel(&self, lon: f64, lat: f64) -> (f64, f64) {
        let (mx, my) = lonlat_to_mercator(lon, lat);
        let x = (mx - self.min_x) / (self.max_x - self.min_x) * self.width as f64;
        let y = (self.max_y - my) / (self.max_y - self.min_y) * self.height as f64;
        (x, y)
    }

    /// Pixels per projected (Mercator) meter along the x axis.
    pub fn pixels_per_mercator_meter(&self) -> f64 {
        self.width as f64 / (self.max_x - self.min_x)
    }

    /// Pixels covered by `meters` of ground distance at latitude `lat`.
    ///
    /// Web Mercator inflates distances by `1 / cos(lat)`, so a ground
    /// distance converts to projected meters before going to pixels.
    pub fn ground_meters_to_pixels(&self, meters: f64, lat: f64) -> f64 {
        let mercator_m = meters / lat.to_radians().cos();
        mercator_m * self.pixels_per_mercator_meter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinsale_bbox() -> BoundingBox {
        BoundingBox::new(51.6, -8.6, 51.75, -8.4)
    }

    #[test]
    fn corners_map_to_canvas_corners() {
        let proj = MapProjection::new(kinsale_bbox(), 1500).unwrap();
        let (x, y) = proj.to_pixel(-8.6, 51.75);
        assert!(x.abs() < 1e-6);
        assert!(y.abs() < 1e-6);
        let (x, y) = proj.to_pixel(-8.4, 51.6);
        assert!((x - 1500.0).abs() < 1e-6);
        assert!((y - proj.height() as f64).abs() < 1e-6);
    }

    #[test]
    fn height_follows_aspect_ratio() {
        let proj = MapProjection::new(kinsale_bbox(), 1500).unwrap();
        // 0.15/0.2 degrees of latitude vs longitude, stretched by the
        // Mercator factor 1/cos(51.7) ~ 1.61: height ~ 1500 * 0.75 * 1.61.
        let h = proj.height();
        assert!(h > 1750 && h < 1880, "unexpected height {h}");
    }

    #[test]
    fn east_of_west_means_larger_x() {
        let proj = MapProjection::new(kinsale_bbox(), 800).unwrap();
        let (x1, _) = proj.to_pixel(-8.55, 51.7);
        let (x2, _) = proj.to_pixel(-8.45, 51.7);
        assert!(x2 > x1);
    }

    #[test]
    fn north_maps_above_south() {
        let proj = MapProjection::new(kinsale_bbox(), 800).unwrap();
        let (_, y_north) = proj.to_pixel(-8.5, 51.74);
        let (_, y_south) = proj.to_pixel(-8.5, 51.61);
        assert!(y_north < y_south);
    }

    #[test]
    fn zero_width_is_rejected() {
        assert!(MapProjection::new(kinsale_bbox(), 0).is_err());
    }

    #[test]
    fn equator_scale_is_exact() {
        // At the equator ground meters equal Mercator meters.
        let bbox = BoundingBox::new(-0.1, -0.1, 0.1, 0.1);
        let proj = MapProjection::new(bbox, 1000).unwrap();
        let span_m = 2.0 * EARTH_RADIUS_M * 0.1_f64.to_radians();
        let px = proj.ground_meters_to_pixels(span_m, 0.0);
        assert!((px - 1000.0).abs() < 1e-6);
    }
}
