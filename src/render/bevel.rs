//! Three-pass beveled strokes shared by equators, megacities and suburbs.

use crate::canvas::Canvas;
use crate::color::Color;

/// Geometry stroked by a bevel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BevelShape {
    /// Horizontal line at `y` spanning `[x0, x1)`.
    Line { y: f64, x0: f64, x1: f64 },
    /// Circle inscribed in the `diameter` square with top-left `(x, y)`.
    Ring { x: f64, y: f64, diameter: f64 },
}

/// Pen multipliers and shading steps, back to front.
const PASSES: [(f32, Pass); 3] = [(3.0, Pass::Dark), (2.0, Pass::Medium), (1.0, Pass::Light)];

#[derive(Clone, Copy)]
enum Pass {
    Dark,
    Medium,
    Light,
}

impl Pass {
    fn color(self, base: Color) -> Color {
        match self {
            Pass::Dark => base.darker_by(2),
            Pass::Medium => base,
            Pass::Light => base.brighter_by(2),
        }
    }
}

/// Stroke `shape` three times on identical geometry: wide and dark, then
/// medium in the base color, then thin and light on top.
pub fn draw_bevel(canvas: &mut Canvas, shape: BevelShape, size_factor: f32, color: Color) {
    for (multiplier, pass) in PASSES {
        let width = (size_factor * multiplier) as f64;
        let color = pass.color(color);
        match shape {
            BevelShape::Line { y, x0, x1 } => canvas.stroke_horizontal_line(y, x0, x1, width, color),
            BevelShape::Ring { x, y, diameter } => canvas.stroke_ellipse(x, y, diameter, width, color),
        }
    }
}
