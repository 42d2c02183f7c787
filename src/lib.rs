//! Stylized planet-surface texture generation
//!
//! Re-exports modules for use by the binary and tests.

pub mod canvas;
pub mod color;
pub mod config;
pub mod export;
pub mod placement;
pub mod render;

pub use color::Color;
pub use config::{ConfigError, PlanetConfig};
pub use render::{render_planet, RenderError};
