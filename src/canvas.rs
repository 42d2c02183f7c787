//! Raster canvas with the handful of fill/stroke primitives the renderer needs.
//!
//! Geometry is in floating point pixel units. A pixel is sampled at its integer
//! coordinate and coverage intervals are half-open, so a span `[a, b)` paints
//! every pixel `p` with `a <= p < b`. Anything outside the canvas is clipped.

use image::{ImageBuffer, Rgb, RgbImage};

use crate::color::Color;

pub struct Canvas {
    image: RgbImage,
}

impl Canvas {
    /// Black canvas of the given size.
    pub fn new(width: u32, height: u32) -> Self {
        Self { image: ImageBuffer::new(width, height) }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn pixel(&self, x: u32, y: u32) -> Rgb<u8> {
        *self.image.get_pixel(x, y)
    }

    pub fn image(&self) -> &RgbImage {
        &self.image
    }

    pub fn into_image(self) -> RgbImage {
        self.image
    }

    /// Paint one pixel, blending source-over when the color is translucent.
    fn paint(&mut self, x: u32, y: u32, color: Color) {
        let dst = self.image.get_pixel_mut(x, y);
        if color.is_opaque() {
            *dst = color.to_rgb();
            return;
        }

        let alpha = color.a as f32 / 255.0;
        let blend = |src: u8, dst: u8| (src as f32 * alpha + dst as f32 * (1.0 - alpha)).round() as u8;
        dst.0 = [
            blend(color.r, dst.0[0]),
            blend(color.g, dst.0[1]),
            blend(color.b, dst.0[2]),
        ];
    }

    /// Pixel indices covered by `[start, end)`, clipped to `[0, limit)`.
    fn span(start: f64, end: f64, limit: u32) -> std::ops::Range<u32> {
        let lo = start.ceil().max(0.0);
        let hi = end.ceil().min(limit as f64);
        if hi <= lo {
            return 0..0;
        }
        lo as u32..hi as u32
    }

    pub fn fill(&mut self, color: Color) {
        let (w, h) = (self.width(), self.height());
        self.fill_rect(0.0, 0.0, w as f64, h as f64, color);
    }

    /// Fill the axis-aligned rectangle with top-left `(x, y)`.
    pub fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: Color) {
        if width <= 0.0 || height <= 0.0 {
            return;
        }
        let xs = Self::span(x, x + width, self.width());
        for py in Self::span(y, y + height, self.height()) {
            for px in xs.clone() {
                self.paint(px, py, color);
            }
        }
    }

    /// Stroke a horizontal line at `y` from `x0` to `x1` with the given pen width.
    ///
    /// Butt caps: the stroke covers exactly `[x0, x1)` horizontally and
    /// `[y - width/2, y + width/2)` vertically.
    pub fn stroke_horizontal_line(&mut self, y: f64, x0: f64, x1: f64, width: f64, color: Color) {
        let half = width / 2.0;
        let (left, right) = if x0 <= x1 { (x0, x1) } else { (x1, x0) };
        self.fill_rect(left, y - half, right - left, width, color);
    }

    /// Stroke the circle inscribed in the `diameter`-sized square at `(x, y)`.
    ///
    /// A pixel is painted when its distance to the centre lies in
    /// `[r - width/2, r + width/2)`.
    pub fn stroke_ellipse(&mut self, x: f64, y: f64, diameter: f64, width: f64, color: Color) {
        if diameter < 0.0 || width <= 0.0 {
            return;
        }
        let radius = diameter / 2.0;
        let (cx, cy) = (x + radius, y + radius);
        let half = width / 2.0;
        let inner = (radius - half).max(0.0);
        let outer = radius + half;

        let xs = Self::span(cx - outer, cx + outer + 1.0, self.width());
        for py in Self::span(cy - outer, cy + outer + 1.0, self.height()) {
            let dy = py as f64 - cy;
            for px in xs.clone() {
                let dx = px as f64 - cx;
                let dist = (dx * dx + dy * dy).sqrt();
                if dist >= inner && dist < outer {
                    self.paint(px, py, color);
                }
            }
        }
    }

    /// Fill the whole canvas with a vertical gradient from `top` (at `y0`) to
    /// `bottom` (at `y1`). Rows outside the segment take the nearest end color.
    pub fn fill_vertical_gradient(&mut self, y0: f64, y1: f64, top: Color, bottom: Color) {
        let span = y1 - y0;
        for py in 0..self.height() {
            let t = if span.abs() < f64::EPSILON {
                if (py as f64) < y0 { 0.0 } else { 1.0 }
            } else {
                ((py as f64 + 0.5 - y0) / span) as f32
            };
            let color = top.lerp(bottom, t);
            for px in 0..self.width() {
                self.paint(px, py, color);
            }
        }
    }
}
