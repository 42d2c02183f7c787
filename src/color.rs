//! Colors and the darker/brighter shading steps used for bevels and gradients.
//!
//! The shading follows the classic AWT `Color.darker()` / `Color.brighter()`
//! arithmetic (factor 0.7, truncating), so fixtures stay exact regardless of
//! which imaging backend ends up drawing the pixels.

use image::Rgb;

/// Multiplier applied by one shading step.
pub const SHADE_FACTOR: f64 = 0.7;

/// RGBA color with 8-bit channels. Opaque colors carry `a = 255`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

/// Direction of a shading step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shade {
    Darker,
    Brighter,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn is_opaque(&self) -> bool {
        self.a == 255
    }

    /// One darkening step: every channel scaled by 0.7 and truncated.
    pub fn darker(self) -> Self {
        let step = |c: u8| (c as f64 * SHADE_FACTOR) as u8;
        Self::rgba(step(self.r), step(self.g), step(self.b), self.a)
    }

    /// One brightening step.
    ///
    /// Pure black can't be divided out of, so it jumps to a dim gray first;
    /// channels that are lit but below that floor are raised to it.
    pub fn brighter(self) -> Self {
        let floor = (1.0 / (1.0 - SHADE_FACTOR)) as u8;
        if self.r == 0 && self.g == 0 && self.b == 0 {
            return Self::rgba(floor, floor, floor, self.a);
        }

        let step = |c: u8| {
            let c = if c > 0 && c < floor { floor } else { c };
            (c as f64 / SHADE_FACTOR).min(255.0) as u8
        };
        Self::rgba(step(self.r), step(self.g), step(self.b), self.a)
    }

    pub fn darker_by(self, steps: u32) -> Self {
        scale(self, Shade::Darker, steps)
    }

    pub fn brighter_by(self, steps: u32) -> Self {
        scale(self, Shade::Brighter, steps)
    }

    /// Same color with a different alpha.
    pub fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Linear interpolation of all four channels, `t` clamped to [0, 1].
    pub fn lerp(self, other: Self, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
        Self::rgba(
            mix(self.r, other.r),
            mix(self.g, other.g),
            mix(self.b, other.b),
            mix(self.a, other.a),
        )
    }

    pub fn to_rgb(self) -> Rgb<u8> {
        Rgb([self.r, self.g, self.b])
    }
}

/// Apply `steps` shading steps in the given direction.
pub fn scale(color: Color, shade: Shade, steps: u32) -> Color {
    (0..steps).fold(color, |c, _| match shade {
        Shade::Darker => c.darker(),
        Shade::Brighter => c.brighter(),
    })
}
