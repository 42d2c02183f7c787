//! Equators: full-width beveled lines, one jittered inside each horizontal band.

use crate::canvas::Canvas;
use crate::config::PlanetConfig;
use crate::placement::Placement;

use super::bevel::{draw_bevel, BevelShape};

/// Row of equator `index` out of `count` on a canvas `height` pixels tall.
///
/// Lands somewhere in `[index * height / count, (index + 1) * height / count)`.
pub fn equator_level(placement: &mut Placement, index: i32, count: i32, height: i32) -> i32 {
    let jitter = (placement.unit() * height as f64) / count as f64;
    let band_start = (index as i64 * height as i64) / count as i64;
    (jitter + band_start as f64) as i32
}

pub fn render_equators(canvas: &mut Canvas, placement: &mut Placement, config: &PlanetConfig) {
    let count = config.equator_count;
    if count <= 0 {
        return;
    }

    let width = canvas.width() as f64;
    let size_factor = config.size_factor();
    for index in 0..count {
        let level = equator_level(placement, index, count, config.height) as f64;
        let line = BevelShape::Line { y: level, x0: 0.0, x1: width };
        draw_bevel(canvas, line, size_factor, config.foreground);
    }
}
