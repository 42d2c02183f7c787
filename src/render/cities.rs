//! Megacities and their suburbs, all drawn as beveled rings.
//!
//! Cities are placed independently and may overlap each other. Each city then
//! scatters a random number of smaller suburb rings around its centre.

use crate::canvas::Canvas;
use crate::color::Color;
use crate::config::PlanetConfig;
use crate::placement::{Placement, PlacementError};

use super::bevel::{draw_bevel, BevelShape};

/// A ring placed on the canvas: top-left corner and diameter in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Site {
    pub x: i32,
    pub y: i32,
    pub diameter: i32,
}

impl Site {
    fn draw(&self, canvas: &mut Canvas, size_factor: f32, color: Color) {
        let ring = BevelShape::Ring {
            x: self.x as f64,
            y: self.y as f64,
            diameter: self.diameter as f64,
        };
        draw_bevel(canvas, ring, size_factor, color);
    }
}

/// A megacity with the suburbs drawn around it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Megacity {
    pub site: Site,
    pub suburbs: Vec<Site>,
}

/// Place and draw every megacity, returning what was drawn.
pub fn render_megacities(
    canvas: &mut Canvas,
    placement: &mut Placement,
    config: &PlanetConfig,
) -> Result<Vec<Megacity>, PlacementError> {
    let size_factor = config.size_factor();
    let mut cities = Vec::with_capacity(config.megacity_count.max(0) as usize);

    for _ in 0..config.megacity_count.max(0) {
        let diameter = placement.random_diameter(config.height, size_factor)?;
        let x = placement.random_top_left(config.width, diameter)?;
        let y = placement.random_top_left(config.height, diameter)?;
        let site = Site { x, y, diameter };
        site.draw(canvas, size_factor, config.foreground);

        let suburbs = render_suburbs(canvas, placement, config, site)?;
        cities.push(Megacity { site, suburbs });
    }

    Ok(cities)
}

/// Draw between zero and `max_suburbs_per_megacity - 1` suburbs for `city`.
///
/// Suburb corners land inside the city's bounding square (centre ± radius) and
/// their diameters are drawn relative to the city's diameter.
pub fn render_suburbs(
    canvas: &mut Canvas,
    placement: &mut Placement,
    config: &PlanetConfig,
    city: Site,
) -> Result<Vec<Site>, PlacementError> {
    let size_factor = config.size_factor();
    let count = placement.below(config.max_suburbs_per_megacity);
    let radius = city.diameter / 2;
    let (cx, cy) = (city.x + radius, city.y + radius);

    let mut suburbs = Vec::with_capacity(count.max(0) as usize);
    for _ in 0..count.max(0) {
        let x = placement.random_bounded(cx - radius, cx + radius)?;
        let y = placement.random_bounded(cy - radius, cy + radius)?;
        let diameter = placement.random_diameter(city.diameter, size_factor)?;
        let suburb = Site { x, y, diameter };
        suburb.draw(canvas, size_factor, config.foreground);
        suburbs.push(suburb);
    }

    Ok(suburbs)
}
