//! Map style configuration.
//!
//! One flat struct holding every drawing knob with its default, passed as a
//! unit to the renderer. Callers override individual fields with struct
//! update syntax:
//!
//! ```
//! use shoremap_render::{Color, MapStyle};
//!
//! let style = MapStyle {
//!     bed_color: Color::new(30, 100, 200),
//!     bed_alpha: 0.3,
//!     ..MapStyle::default()
//! };
//! assert_eq!(style.point_size, 3.0);
//! ```

use std::path::PathBuf;
use std::str::FromStr;

use crate::color::Color;

/// Units for the scale-bar distance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScaleUnits {
    #[default]
    Meters,
    Kilometers,
}

impl ScaleUnits {
    /// Conversion factor to meters.
    pub fn meters(&self) -> f64 {
        match self {
            Self::Meters => 1.0,
            Self::Kilometers => 1000.0,
        }
    }

    /// Short unit label for the scale-bar text.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Meters => "m",
            Self::Kilometers => "km",
        }
    }
}

impl FromStr for ScaleUnits {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "m" | "meters" | "metres" => Ok(Self::Meters),
            "km" | "kilometers" | "kilometres" => Ok(Self::Kilometers),
            _ => Err(format!("unknown scale units: {s}. Use m or km.")),
        }
    }
}

/// Canvas corner for placing the legend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Corner {
    #[default]
    LowerRight,
    LowerLeft,
    UpperRight,
    UpperLeft,
}

impl FromStr for Corner {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace([' ', '_'], "-").as_str() {
            "lower-right" => Ok(Self::LowerRight),
            "lower-left" => Ok(Self::LowerLeft),
            "upper-right" => Ok(Self::UpperRight),
            "upper-left" => Ok(Self::UpperLeft),
            _ => Err(format!(
                "unknown corner: {s}. Use lower-right, lower-left, upper-right, or upper-left."
            )),
        }
    }
}

/// All drawing options with their defaults.
///
/// The defaults were tuned for a ~16:12 coastal survey figure; in
/// particular the scale-bar fractions (0.86, 0.92) and the arrow position
/// (0.93, 0.93) are literal constants, not derived from the aspect ratio.
#[derive(Debug, Clone)]
pub struct MapStyle {
    /// Canvas width in pixels; the height follows the bounding-box aspect.
    pub width_px: u32,

    /// Fill color for site polygons.
    pub bed_color: Color,
    /// Fill opacity in [0, 1].
    pub bed_alpha: f32,

    /// Marker color for site points.
    pub point_color: Color,
    /// Marker opacity in [0, 1].
    pub point_alpha: f32,
    /// Marker radius in pixels.
    pub point_size: f32,

    /// Scale-bar anchor as a fraction of the west-to-east span.
    pub scale_lon_frac: f64,
    /// Southern-edge weight of the scale-bar latitude blend
    /// (`south*frac + north*(1-frac)`); 0.92 anchors near the bottom edge.
    pub scale_lat_frac: f64,
    /// Scale-bar ground length, in `scale_units`.
    pub scale_length: f64,
    /// Scale-bar length units.
    pub scale_units: ScaleUnits,
    /// Scale-bar label color.
    pub scale_font_color: Color,
    /// Scale-bar label size in pixels.
    pub scale_font_size: f32,

    /// North-arrow color (shaft, head and label).
    pub arrow_color: Color,
    /// North-arrow label size in pixels.
    pub arrow_font_size: f32,
    /// Arrow-head width in pixels.
    pub arrow_head_width: f32,
    /// Arrow length as a fraction of the canvas height.
    pub arrow_length: f64,
    /// Arrow label, usually a single character.
    pub arrow_text: String,
    /// Shaft width in pixels.
    pub arrow_width: f32,
    /// Arrow tip x as a fraction of the canvas width (from the left).
    pub arrow_x: f64,
    /// Arrow tip y as a fraction of the canvas height (from the bottom).
    pub arrow_y: f64,

    /// Legend label size in pixels.
    pub legend_font_size: f32,
    /// Legend placement corner.
    pub legend_loc: Corner,

    /// TTF font for label text. `None` probes common system locations;
    /// when no font is found, decorations are drawn without text.
    pub font_path: Option<PathBuf>,
}

impl Default for MapStyle {
    fn default() -> Self {
        Self {
            width_px: 1500,
            bed_color: Color::GREEN,
            bed_alpha: 0.5,
            point_color: Color::WHITE,
            point_alpha: 0.9,
            point_size: 3.0,
            scale_lon_frac: 0.86,
            scale_lat_frac: 0.92,
            scale_length: 200.0,
            scale_units: ScaleUnits::Meters,
            scale_font_color: Color::WHITE,
            scale_font_size: 16.0,
            arrow_color: Color::WHITE,
            arrow_font_size: 26.0,
            arrow_head_width: 15.0,
            arrow_length: 0.1,
            arrow_text: "N".to_string(),
            arrow_width: 5.0,
            arrow_x: 0.93,
            arrow_y: 0.93,
            legend_font_size: 16.0,
            legend_loc: Corner::LowerRight,
            font_path: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let style = MapStyle::default();
        assert_eq!(style.width_px, 1500);
        assert_eq!(style.bed_color, Color::GREEN);
        assert!((style.bed_alpha - 0.5).abs() < f32::EPSILON);
        assert!((style.scale_lon_frac - 0.86).abs() < f64::EPSILON);
        assert!((style.scale_lat_frac - 0.92).abs() < f64::EPSILON);
        assert_eq!(style.scale_units, ScaleUnits::Meters);
        assert_eq!(style.arrow_text, "N");
        assert_eq!(style.legend_loc, Corner::LowerRight);
    }

    #[test]
    fn scale_units_parse_and_convert() {
        assert_eq!("km".parse::<ScaleUnits>().unwrap(), ScaleUnits::Kilometers);
        assert!((ScaleUnits::Kilometers.meters() - 1000.0).abs() < f64::EPSILON);
        assert_eq!(ScaleUnits::Meters.label(), "m");
        assert!("furlongs".parse::<ScaleUnits>().is_err());
    }

    #[test]
    fn corner_parses_separators() {
        assert_eq!("lower_right".parse::<Corner>().unwrap(), Corner::LowerRight);
        assert_eq!("upper left".parse::<Corner>().unwrap(), Corner::UpperLeft);
    }
}
