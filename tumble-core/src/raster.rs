//! Line rasterization into the canvas

use nalgebra::Point2;

use crate::canvas::Canvas;
use crate::color::Color;

/// Scan step for the slope walk, in canvas-space units.
pub(crate) const SCAN_STEP: f32 = 0.01;

/// Draw a digital line segment between two canvas-space points.
///
/// The endpoint's x is nudged one unit to the right before the slope is
/// computed so that a vertical segment does not divide by a zero run.
/// The nudge flattens every slope by `dy / (dx + 1)` and overruns the
/// endpoint by up to one column; both effects are part of the rendered
/// look and are pinned by tests. Samples whose y falls past the canvas
/// height are skipped, and any remaining out-of-range write is dropped
/// by the canvas itself.
pub fn draw_line(canvas: &mut Canvas, start: Point2<f32>, end: Point2<f32>, color: Color) {
    let end_x = end.x + 1.0;
    let slope = (end.y - start.y) / (end_x - start.x);
    let mut x = start.x;
    while x < end_x {
        let y = slope * (x - start.x) + start.y;
        if y <= canvas.height() as f32 {
            canvas.put(x.floor() as i32, y.floor() as i32, color);
        }
        x += SCAN_STEP;
    }
}
