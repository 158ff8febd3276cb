//! The render context: one canvas, one projection, one legend, owned by a
//! single render pass.
//!
//! There is no global figure state; two `MapRenderer`s can be driven
//! independently (or concurrently) without interfering.

use std::path::Path;

use image::imageops::FilterType;
use image::{Rgba, RgbaImage};
use imageproc::drawing::Blend;
use shoremap_core::{BoundingBox, MapProjection, PointTable};
use tracing::debug;

use crate::error::Result;
use crate::layers::{draw_markers, fill_layer};
use crate::legend::{draw_legend, LegendEntry, SeriesKind};
use crate::north_arrow::draw_north_arrow;
use crate::scalebar::draw_scale_bar;
use crate::style::MapStyle;
use crate::text::Labeller;

/// Neutral background used until (or unless) a basemap is set.
const BASE_FILL: Rgba<u8> = Rgba([72, 84, 96, 255]);

pub struct MapRenderer {
    proj: MapProjection,
    style: MapStyle,
    labeller: Labeller,
    canvas: Blend<RgbaImage>,
    legend: Vec<LegendEntry>,
}

impl MapRenderer {
    /// Create a renderer for `bbox` with the given style.
    ///
    /// The canvas starts as a solid neutral fill; call [`set_background`]
    /// with fetched imagery to replace it.
    ///
    /// [`set_background`]: MapRenderer::set_background
    pub fn new(bbox: BoundingBox, style: MapStyle) -> Result<Self> {
        let proj = MapProjection::new(bbox, style.width_px)?;
        let labeller = Labeller::new(style.font_path.as_deref())?;
        let canvas = Blend(RgbaImage::from_pixel(
            proj.width(),
            proj.height(),
            BASE_FILL,
        ));
        Ok(Self {
            proj,
            style,
            labeller,
            canvas,
            legend: Vec::new(),
        })
    }

    pub fn projection(&self) -> &MapProjection {
        &self.proj
    }

    pub fn style(&self) -> &MapStyle {
        &self.style
    }

    /// Legend entries collected so far (one per labelled series).
    pub fn legend_entries(&self) -> &[LegendEntry] {
        &self.legend
    }

    /// Replace the canvas background with basemap imagery.
    ///
    /// Imagery fetched through `shoremap-imagery` already has the canvas
    /// dimensions; anything else is resampled to fit.
    pub fn set_background(&mut self, imagery: RgbaImage) {
        let (w, h) = (self.proj.width(), self.proj.height());
        let background = if imagery.width() == w && imagery.height() == h {
            imagery
        } else {
            debug!(
                "resampling background {}x{} to canvas {}x{}",
                imagery.width(),
                imagery.height(),
                w,
                h
            );
            image::imageops::resize(&imagery, w, h, FilterType::Triangle)
        };
        self.canvas = Blend(background);
    }

    /// Draw every table: polygon fill then point markers, in input order.
    ///
    /// Only the first table contributes legend entries, one for the fill
    /// series and one for the marker series, so the legend never repeats
    /// labels no matter how many tables are drawn.
    pub fn draw_layers(
        &mut self,
        tables: &[PointTable],
        fill_label: &str,
        marker_label: &str,
    ) -> Result<()> {
        for (i, table) in tables.iter().enumerate() {
            fill_layer(&mut self.canvas, &self.proj, table, &self.style)?;
            draw_markers(&mut self.canvas, &self.proj, table, &self.style);
            if i == 0 {
                self.legend.push(LegendEntry {
                    kind: SeriesKind::Fill,
                    label: fill_label.to_string(),
                });
                self.legend.push(LegendEntry {
                    kind: SeriesKind::Marker,
                    label: marker_label.to_string(),
                });
            }
        }
        Ok(())
    }

    /// Draw the scale bar at its configured anchor.
    pub fn draw_scale_bar(&mut self) {
        draw_scale_bar(&mut self.canvas, &self.proj, &self.style, &self.labeller);
    }

    /// Draw the north arrow at its configured axes fraction.
    pub fn draw_north_arrow(&mut self) {
        draw_north_arrow(&mut self.canvas, &self.proj, &self.style, &self.labeller);
    }

    /// Draw the legend panel from the collected entries.
    pub fn draw_legend(&mut self) {
        draw_legend(&mut self.canvas, &self.legend, &self.style, &self.labeller);
    }

    /// Save the composed image; the format follows the path extension.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        self.canvas.0.save(path.as_ref())?;
        Ok(())
    }

    /// Consume the renderer and return the composed image.
    pub fn into_image(self) -> RgbaImage {
        self.canvas.0
    }
}
