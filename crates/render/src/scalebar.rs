//! Scale bar, drawn in the basemap "fancy" style: alternating dark/light
//! segments with a centered distance label.

use image::RgbaImage;
use imageproc::drawing::{draw_filled_rect_mut, draw_hollow_rect_mut, Blend};
use imageproc::rect::Rect;
use shoremap_core::{BoundingBox, MapProjection};

use crate::color::Color;
use crate::style::MapStyle;
use crate::text::Labeller;

/// Number of alternating segments in the bar.
const SEGMENTS: u32 = 4;
/// Bar height in pixels.
const BAR_HEIGHT: u32 = 8;

/// Geographic anchor of the scale bar (its center).
///
/// Longitude blends toward the eastern edge, latitude toward the southern
/// edge: anchor latitude is `south*frac + north*(1-frac)`. With the
/// default fractions (0.86, 0.92) the bar sits in the lower-right region
/// of the map, e.g. west=-10, east=-8 gives anchor longitude -8.28.
pub fn scale_anchor(bbox: &BoundingBox, style: &MapStyle) -> (f64, f64) {
    (
        bbox.lon_at(style.scale_lon_frac),
        bbox.lat_at(1.0 - style.scale_lat_frac),
    )
}

/// Scale-bar label, e.g. `200 m` or `1.5 km`.
fn length_label(style: &MapStyle) -> String {
    let len = style.scale_length;
    if (len - len.round()).abs() < 1e-9 {
        format!("{} {}", len.round() as i64, style.scale_units.label())
    } else {
        format!("{} {}", len, style.scale_units.label())
    }
}

/// Draw the scale bar centered on the configured anchor.
pub fn draw_scale_bar(
    canvas: &mut Blend<RgbaImage>,
    proj: &MapProjection,
    style: &MapStyle,
    labeller: &Labeller,
) {
    let bbox = proj.bbox();
    let (anchor_lon, anchor_lat) = scale_anchor(&bbox, style);
    let (cx, cy) = proj.to_pixel(anchor_lon, anchor_lat);

    let ground_m = style.scale_length * style.scale_units.meters();
    let bar_px = proj.ground_meters_to_pixels(ground_m, anchor_lat).round() as i64;
    if bar_px < SEGMENTS as i64 {
        // Bar shorter than its segment count: not drawable at this zoom.
        return;
    }

    let left = cx.round() as i32 - (bar_px / 2) as i32;
    let top = cy.round() as i32 - (BAR_HEIGHT / 2) as i32;
    let seg_w = (bar_px as f64 / SEGMENTS as f64).round() as i32;

    for i in 0..SEGMENTS as i32 {
        let color = if i % 2 == 0 {
            Color::BLACK.opaque()
        } else {
            Color::WHITE.opaque()
        };
        let x = left + i * seg_w;
        let w = if i == SEGMENTS as i32 - 1 {
            (left + bar_px as i32 - x).max(1) as u32
        } else {
            seg_w.max(1) as u32
        };
        draw_filled_rect_mut(canvas, Rect::at(x, top).of_size(w, BAR_HEIGHT), color);
    }
    draw_hollow_rect_mut(
        canvas,
        Rect::at(left, top).of_size(bar_px as u32, BAR_HEIGHT),
        Color::BLACK.opaque(),
    );

    let label = length_label(style);
    let label_y = top - style.scale_font_size.round() as i32 - 4;
    labeller.draw_centered(
        canvas,
        &label,
        cx.round() as i32,
        label_y,
        style.scale_font_size,
        style.scale_font_color.opaque(),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::ScaleUnits;

    #[test]
    fn anchor_matches_worked_example() {
        let bbox = BoundingBox::new(51.6, -10.0, 51.75, -8.0);
        let style = MapStyle::default();
        let (lon, lat) = scale_anchor(&bbox, &style);
        assert!((lon - (-8.28)).abs() < 1e-12);
        assert!((lat - (51.6 * 0.92 + 51.75 * 0.08)).abs() < 1e-9);
    }

    #[test]
    fn anchor_latitude_weights_the_southern_edge() {
        // south*frac + north*(1-frac): the default 0.92 lands near the
        // bottom edge, 51.612 for the Kinsale box.
        let bbox = BoundingBox::new(51.6, -8.6, 51.75, -8.4);
        let style = MapStyle::default();
        let (_, lat) = scale_anchor(&bbox, &style);
        assert!((lat - 51.612).abs() < 1e-9);
    }

    #[test]
    fn anchor_fractions_are_independent() {
        let bbox = BoundingBox::new(0.0, 0.0, 10.0, 10.0);
        let style = MapStyle {
            scale_lon_frac: 0.25,
            scale_lat_frac: 0.75,
            ..MapStyle::default()
        };
        let (lon, lat) = scale_anchor(&bbox, &style);
        assert!((lon - 2.5).abs() < 1e-12);
        assert!((lat - 2.5).abs() < 1e-12);
    }

    #[test]
    fn label_drops_trailing_zero() {
        let style = MapStyle::default();
        assert_eq!(length_label(&style), "200 m");
        let style = MapStyle {
            scale_length: 1.5,
            scale_units: ScaleUnits::Kilometers,
            ..MapStyle::default()
        };
        assert_eq!(length_label(&style), "1.5 km");
    }

    #[test]
    fn bar_paints_the_anchor_row() {
        let bbox = BoundingBox::new(51.6, -8.6, 51.75, -8.4);
        let proj = MapProjection::new(bbox, 800).unwrap();
        let style = MapStyle::default();
        let labeller = Labeller::new(None).unwrap();
        let mut canvas = Blend(RgbaImage::from_pixel(
            proj.width(),
            proj.height(),
            image::Rgba([7, 7, 7, 255]),
        ));
        draw_scale_bar(&mut canvas, &proj, &style, &labeller);

        let (lon, lat) = scale_anchor(&proj.bbox(), &style);
        let (cx, cy) = proj.to_pixel(lon, lat);
        let px = canvas.0.get_pixel(cx.round() as u32, cy.round() as u32);
        assert_ne!(px, &image::Rgba([7, 7, 7, 255]));
    }
}
