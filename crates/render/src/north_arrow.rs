//! North arrow annotation.
//!
//! A vertical arrow at a fixed axes-fraction position with a single
//! character label below it. Purely decorative: the projection is always
//! north-up, so the arrow does not track map content.

use image::RgbaImage;
use imageproc::drawing::{draw_filled_rect_mut, draw_polygon_mut, Blend};
use imageproc::point::Point;
use imageproc::rect::Rect;
use shoremap_core::MapProjection;

use crate::style::MapStyle;
use crate::text::Labeller;

/// Draw the north arrow and its label.
pub fn draw_north_arrow(
    canvas: &mut Blend<RgbaImage>,
    proj: &MapProjection,
    style: &MapStyle,
    labeller: &Labeller,
) {
    let w = proj.width() as f64;
    let h = proj.height() as f64;

    // Axes fractions are measured from the lower-left corner, pixel y from
    // the top, hence the (1 - fy) flips.
    let x = (style.arrow_x * w).round() as i32;
    let tip_y = ((1.0 - style.arrow_y) * h).round() as i32;
    let tail_y = ((1.0 - (style.arrow_y - style.arrow_length)) * h).round() as i32;

    let color = style.arrow_color.opaque();
    let head_w = style.arrow_head_width.max(3.0).round() as i32;
    let head_h = head_w;
    let shaft_w = style.arrow_width.max(1.0).round() as i32;

    // Shaft from the tail up to the base of the head.
    let shaft_top = tip_y + head_h;
    if tail_y > shaft_top {
        draw_filled_rect_mut(
            canvas,
            Rect::at(x - shaft_w / 2, shaft_top)
                .of_size(shaft_w.max(1) as u32, (tail_y - shaft_top) as u32),
            color,
        );
    }

    // Triangular head pointing up.
    draw_polygon_mut(
        canvas,
        &[
            Point::new(x, tip_y),
            Point::new(x - head_w / 2, shaft_top),
            Point::new(x + head_w / 2, shaft_top),
        ],
        color,
    );

    let label_y = tail_y + 4;
    labeller.draw_centered(
        canvas,
        &style.arrow_text,
        x,
        label_y,
        style.arrow_font_size,
        color,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use shoremap_core::BoundingBox;

    #[test]
    fn arrow_paints_near_the_configured_fraction() {
        let proj =
            MapProjection::new(BoundingBox::new(51.6, -8.6, 51.75, -8.4), 600).unwrap();
        let style = MapStyle::default();
        let labeller = Labeller::new(None).unwrap();
        let mut canvas = Blend(RgbaImage::from_pixel(
            proj.width(),
            proj.height(),
            image::Rgba([0, 0, 0, 255]),
        ));
        draw_north_arrow(&mut canvas, &proj, &style, &labeller);

        // Sample the shaft midpoint.
        let x = (0.93 * proj.width() as f64).round() as u32;
        let y_mid = ((1.0 - (0.93 - 0.05)) * proj.height() as f64).round() as u32;
        assert_eq!(
            canvas.0.get_pixel(x, y_mid),
            &image::Rgba([255, 255, 255, 255])
        );
    }
}
