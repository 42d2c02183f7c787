//! Metal plate texture: random highlight rectangles with offset drop shadows.

use crate::canvas::Canvas;
use crate::color::Color;
use crate::placement::Placement;

/// Offset of a plate's shadow from its highlight, in pixels.
const SHADOW_OFFSET: f64 = 2.0;

/// Draw `density` plates over the canvas using `base` for shading.
///
/// Plates may hang off the right or bottom edge; the canvas clips them.
pub fn render_plates(canvas: &mut Canvas, placement: &mut Placement, base: Color, density: i32) {
    let width = canvas.width() as f64;
    let height = canvas.height() as f64;
    let shadow = base.darker_by(2);
    let highlight = base.brighter_by(2);

    for _ in 0..density.max(0) {
        let plate_width = (placement.unit() * width / 10.0) as i32 as f64;
        let plate_height = (placement.unit() * height / 15.0) as i32 as f64;
        let x = placement.below(canvas.width() as i32) as f64;
        let y = placement.below(canvas.height() as i32) as f64;

        canvas.fill_rect(x + SHADOW_OFFSET, y + SHADOW_OFFSET, plate_width, plate_height, shadow);
        canvas.fill_rect(x, y, plate_width, plate_height, highlight);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_plates_only_use_shadow_and_highlight() {
        let base = Color::rgb(100, 80, 60);
        let mut canvas = Canvas::new(200, 150);
        canvas.fill(base);

        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let mut placement = Placement::new(&mut rng);
        render_plates(&mut canvas, &mut placement, base, 200);

        let allowed = [base.to_rgb(), base.darker_by(2).to_rgb(), base.brighter_by(2).to_rgb()];
        assert!(canvas.image().pixels().all(|p| allowed.contains(p)));
        assert!(canvas.image().pixels().any(|p| *p == base.brighter_by(2).to_rgb()));
    }

    #[test]
    fn test_zero_or_negative_density_draws_nothing() {
        let base = Color::rgb(100, 80, 60);
        for density in [0, -3] {
            let mut canvas = Canvas::new(50, 50);
            canvas.fill(base);
            let mut rng = ChaCha8Rng::seed_from_u64(1);
            let mut placement = Placement::new(&mut rng);
            render_plates(&mut canvas, &mut placement, base, density);
            assert!(canvas.image().pixels().all(|p| *p == base.to_rgb()));
        }
    }
}
