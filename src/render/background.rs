//! Background: solid base, plate texture, then a light-to-dark gradient.

use crate::canvas::Canvas;
use crate::config::PlanetConfig;
use crate::placement::Placement;

use super::plates::render_plates;

/// Brightening steps applied to the gradient's top color.
const GRADIENT_TOP_STEPS: u32 = 3;
/// Darkening steps applied to the gradient's bottom color.
const GRADIENT_BOTTOM_STEPS: u32 = 7;

pub fn render_background(canvas: &mut Canvas, placement: &mut Placement, config: &PlanetConfig) {
    render_base(canvas, placement, config);
    render_gradient(canvas, config);
}

/// Opaque base fill plus plate texture. Alpha never applies here.
pub fn render_base(canvas: &mut Canvas, placement: &mut Placement, config: &PlanetConfig) {
    canvas.fill(config.background);
    render_plates(canvas, placement, config.background, config.plate_density);
}

/// Vertical gradient over the whole canvas, translucent when an alpha is configured.
pub fn render_gradient(canvas: &mut Canvas, config: &PlanetConfig) {
    let color = config.background_with_alpha();
    let top = color.brighter_by(GRADIENT_TOP_STEPS);
    let bottom = color.darker_by(GRADIENT_BOTTOM_STEPS);
    canvas.fill_vertical_gradient(0.0, canvas.height() as f64, top, bottom);
}
