//! Planet texture rendering pipeline.
//!
//! Stages always run in this order, each painting over the previous one:
//! background (base fill, plates, gradient), equators, megacities with suburbs.

pub mod background;
pub mod bevel;
pub mod cities;
pub mod equators;
pub mod plates;

use image::RgbImage;
use rand_chacha::ChaCha8Rng;

use crate::canvas::Canvas;
use crate::config::PlanetConfig;
use crate::placement::{Placement, PlacementError, DEFAULT_MAX_ATTEMPTS};

pub use background::render_background;
pub use cities::{render_megacities, Megacity, Site};
pub use equators::render_equators;

/// Errors that abandon a render.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderError {
    InvalidCanvasSize { width: i32, height: i32 },
    Placement(PlacementError),
}

impl std::fmt::Display for RenderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenderError::InvalidCanvasSize { width, height } => {
                write!(f, "Invalid canvas size: {}x{}", width, height)
            }
            RenderError::Placement(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for RenderError {}

impl From<PlacementError> for RenderError {
    fn from(e: PlacementError) -> Self {
        RenderError::Placement(e)
    }
}

/// Render a planet texture with the default placement retry cap.
pub fn render_planet(config: &PlanetConfig, rng: &mut ChaCha8Rng) -> Result<RgbImage, RenderError> {
    render_planet_with_limit(config, rng, DEFAULT_MAX_ATTEMPTS)
}

/// Render a planet texture, failing once any placement draw loop hits `max_attempts`.
pub fn render_planet_with_limit(
    config: &PlanetConfig,
    rng: &mut ChaCha8Rng,
    max_attempts: u32,
) -> Result<RgbImage, RenderError> {
    if config.width <= 0 || config.height <= 0 {
        return Err(RenderError::InvalidCanvasSize {
            width: config.width,
            height: config.height,
        });
    }

    let mut canvas = Canvas::new(config.width as u32, config.height as u32);
    let mut placement = Placement::with_max_attempts(rng, max_attempts);

    render_background(&mut canvas, &mut placement, config);
    render_equators(&mut canvas, &mut placement, config);
    render_megacities(&mut canvas, &mut placement, config)?;

    Ok(canvas.into_image())
}
