//! Legend: collected series entries rendered as a boxed list.

use image::RgbaImage;
use imageproc::drawing::{
    draw_filled_circle_mut, draw_filled_rect_mut, draw_hollow_rect_mut, Blend,
};
use imageproc::rect::Rect;

use crate::color::Color;
use crate::style::{Corner, MapStyle};
use crate::text::Labeller;

/// How a legend entry's swatch is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesKind {
    /// Shaded polygon series: square swatch.
    Fill,
    /// Point marker series: disc swatch.
    Marker,
}

/// One legend row.
#[derive(Debug, Clone)]
pub struct LegendEntry {
    pub kind: SeriesKind,
    pub label: String,
}

const PAD: i32 = 10;
const MARGIN: i32 = 14;
const ROW_GAP: i32 = 6;

/// Draw the legend panel in the configured corner.
pub fn draw_legend(
    canvas: &mut Blend<RgbaImage>,
    entries: &[LegendEntry],
    style: &MapStyle,
    labeller: &Labeller,
) {
    if entries.is_empty() {
        return;
    }

    let swatch = style.legend_font_size.round().max(8.0) as i32;
    let row_h = swatch + ROW_GAP;

    let text_w = entries
        .iter()
        .map(|e| labeller.text_width(&e.label, style.legend_font_size))
        .fold(0.0_f32, f32::max)
        .ceil() as i32;
    // Reserve label room even without a font so the panel shape is stable.
    let fallback_w = entries
        .iter()
        .map(|e| e.label.chars().count() as i32)
        .max()
        .unwrap_or(0)
        * (style.legend_font_size * 0.55) as i32;
    let label_w = text_w.max(fallback_w);

    let panel_w = PAD * 2 + swatch + 8 + label_w;
    let panel_h = PAD * 2 + row_h * entries.len() as i32 - ROW_GAP;

    let (img_w, img_h) = (canvas.0.width() as i32, canvas.0.height() as i32);
    let (left, top) = match style.legend_loc {
        Corner::LowerRight => (img_w - MARGIN - panel_w, img_h - MARGIN - panel_h),
        Corner::LowerLeft => (MARGIN, img_h - MARGIN - panel_h),
        Corner::UpperRight => (img_w - MARGIN - panel_w, MARGIN),
        Corner::UpperLeft => (MARGIN, MARGIN),
    };

    draw_filled_rect_mut(
        canvas,
        Rect::at(left, top).of_size(panel_w.max(1) as u32, panel_h.max(1) as u32),
        Color::WHITE.with_alpha(0.85),
    );
    draw_hollow_rect_mut(
        canvas,
        Rect::at(left, top).of_size(panel_w.max(1) as u32, panel_h.max(1) as u32),
        Color::BLACK.opaque(),
    );

    for (i, entry) in entries.iter().enumerate() {
        let row_top = top + PAD + i as i32 * row_h;
        match entry.kind {
            SeriesKind::Fill => {
                draw_filled_rect_mut(
                    canvas,
                    Rect::at(left + PAD, row_top).of_size(swatch as u32, swatch as u32),
                    style.bed_color.with_alpha(style.bed_alpha),
                );
                draw_hollow_rect_mut(
                    canvas,
                    Rect::at(left + PAD, row_top).of_size(swatch as u32, swatch as u32),
                    Color::BLACK.opaque(),
                );
            }
            SeriesKind::Marker => {
                let r = (swatch / 3).max(2);
                draw_filled_circle_mut(
                    canvas,
                    (left + PAD + swatch / 2, row_top + swatch / 2),
                    r,
                    style.point_color.with_alpha(style.point_alpha),
                );
            }
        }
        labeller.draw(
            canvas,
            &entry.label,
            left + PAD + swatch + 8,
            row_top,
            style.legend_font_size,
            Color::BLACK.opaque(),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn legend_panel_is_visible_in_the_lower_right() {
        let style = MapStyle::default();
        let labeller = Labeller::new(None).unwrap();
        let entries = vec![
            LegendEntry {
                kind: SeriesKind::Fill,
                label: "Seagrass".into(),
            },
            LegendEntry {
                kind: SeriesKind::Marker,
                label: "Samples".into(),
            },
        ];
        let mut canvas = Blend(RgbaImage::from_pixel(
            400,
            300,
            image::Rgba([3, 3, 3, 255]),
        ));
        draw_legend(&mut canvas, &entries, &style, &labeller);

        let changed = (250..400)
            .flat_map(|x| (200..300).map(move |y| (x, y)))
            .any(|(x, y)| canvas.0.get_pixel(x, y) != &image::Rgba([3, 3, 3, 255]));
        assert!(changed, "legend did not paint the lower-right quadrant");
    }

    #[test]
    fn empty_legend_draws_nothing() {
        let style = MapStyle::default();
        let labeller = Labeller::new(None).unwrap();
        let mut canvas = Blend(RgbaImage::from_pixel(
            64,
            64,
            image::Rgba([3, 3, 3, 255]),
        ));
        draw_legend(&mut canvas, &[], &style, &labeller);
        assert!(canvas
            .0
            .pixels()
            .all(|p| p == &image::Rgba([3, 3, 3, 255])));
    }
}
