//! Label rasterization.
//!
//! Wraps font loading and `imageproc` text drawing. A font is loaded either
//! from an explicit path or by probing common system locations; when none
//! is found the renderer still works, it just skips label text (useful on
//! bare CI images with no fonts installed).

use std::path::{Path, PathBuf};

use ab_glyph::{Font, FontVec, PxScale, ScaleFont};
use image::{Rgba, RgbaImage};
use imageproc::drawing::{draw_text_mut, Blend};
use tracing::warn;

use crate::error::{RenderError, Result};

/// Candidate font files probed when no explicit path is configured.
const FONT_SEARCH_PATHS: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/liberation-sans/LiberationSans-Regular.ttf",
    "/usr/share/fonts/truetype/freefont/FreeSans.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

/// Text drawing helper holding the loaded font, if any.
#[derive(Debug)]
pub struct Labeller {
    font: Option<FontVec>,
}

impl Labeller {
    /// Load the font at `path`, or probe the system locations when `None`.
    ///
    /// An explicit path that cannot be loaded is an error; a failed probe
    /// only logs a warning and disables label text.
    pub fn new(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            let font = load_font(path).map_err(|reason| RenderError::Font {
                path: path.to_path_buf(),
                reason,
            })?;
            return Ok(Self { font: Some(font) });
        }

        for candidate in FONT_SEARCH_PATHS {
            let candidate = PathBuf::from(candidate);
            if candidate.is_file() {
                if let Ok(font) = load_font(&candidate) {
                    return Ok(Self { font: Some(font) });
                }
            }
        }

        warn!("no usable TTF font found; map labels will be omitted");
        Ok(Self { font: None })
    }

    /// Whether a font is available for label text.
    pub fn has_font(&self) -> bool {
        self.font.is_some()
    }

    /// Pixel width of `text` at the given size, 0.0 without a font.
    pub fn text_width(&self, text: &str, size: f32) -> f32 {
        let Some(font) = &self.font else {
            return 0.0;
        };
        let scaled = font.as_scaled(PxScale::from(size));
        text.chars()
            .map(|c| scaled.h_advance(scaled.glyph_id(c)))
            .sum()
    }

    /// Draw `text` with its top-left corner at (x, y). No-op without a font.
    pub fn draw(
        &self,
        canvas: &mut Blend<RgbaImage>,
        text: &str,
        x: i32,
        y: i32,
        size: f32,
        color: Rgba<u8>,
    ) {
        if let Some(font) = &self.font {
            draw_text_mut(canvas, color, x, y, PxScale::from(size), font, text);
        }
    }

    /// Draw `text` horizontally centered on `center_x`.
    pub fn draw_centered(
        &self,
        canvas: &mut Blend<RgbaImage>,
        text: &str,
        center_x: i32,
        y: i32,
        size: f32,
        color: Rgba<u8>,
    ) {
        let w = self.text_width(text, size);
        self.draw(canvas, text, center_x - (w / 2.0).round() as i32, y, size, color);
    }
}

fn load_font(path: &Path) -> std::result::Result<FontVec, String> {
    let bytes = std::fs::read(path).map_err(|e| e.to_string())?;
    FontVec::try_from_vec(bytes).map_err(|e| e.to_string())
}
