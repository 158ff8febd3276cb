//! Site layers: polygon fill and point markers.

use image::RgbaImage;
use imageproc::drawing::{draw_filled_circle_mut, draw_polygon_mut, Blend};
use imageproc::point::Point;
use shoremap_core::{MapProjection, PointTable};

use crate::error::{RenderError, Result};
use crate::style::MapStyle;

/// Project the table's boundary and close it.
///
/// Returns the N points in row order followed by a duplicate of the first,
/// so the trace always has N+1 vertices with `last == first`. An empty
/// table is an error: there is no polygon to close.
pub fn closed_trace(proj: &MapProjection, table: &PointTable) -> Result<Vec<(f64, f64)>> {
    if table.is_empty() {
        return Err(RenderError::EmptyTable {
            path: table.source().to_path_buf(),
        });
    }
    let mut trace: Vec<(f64, f64)> = table
        .points()
        .iter()
        .map(|p| proj.to_pixel(p.lon, p.lat))
        .collect();
    trace.push(trace[0]);
    Ok(trace)
}

/// Fill the polygon enclosed by the table's boundary trace.
pub fn fill_layer(
    canvas: &mut Blend<RgbaImage>,
    proj: &MapProjection,
    table: &PointTable,
    style: &MapStyle,
) -> Result<()> {
    let trace = closed_trace(proj, table)?;

    // The fill routine wants an open ring of distinct integer vertices; the
    // closing edge is implicit.
    let mut ring: Vec<Point<i32>> = Vec::with_capacity(trace.len());
    for &(x, y) in &trace[..trace.len() - 1] {
        let p = Point::new(x.round() as i32, y.round() as i32);
        if ring.last() != Some(&p) {
            ring.push(p);
        }
    }
    while ring.len() > 1 && ring.first() == ring.last() {
        ring.pop();
    }
    if ring.len() < 3 {
        // Degenerate after rounding: nothing to fill.
        return Ok(());
    }

    draw_polygon_mut(canvas, &ring, style.bed_color.with_alpha(style.bed_alpha));
    Ok(())
}

/// Draw every point of the table as a filled disc marker, in row order.
pub fn draw_markers(
    canvas: &mut Blend<RgbaImage>,
    proj: &MapProjection,
    table: &PointTable,
    style: &MapStyle,
) {
    let radius = style.point_size.max(1.0).round() as i32;
    let color = style.point_color.with_alpha(style.point_alpha);
    for p in table.points() {
        let (x, y) = proj.to_pixel(p.lon, p.lat);
        draw_filled_circle_mut(canvas, (x.round() as i32, y.round() as i32), radius, color);
    }
}
