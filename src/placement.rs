//! Bounded random positions and sizes with rejection-retry semantics.
//!
//! Every helper draws `uniform(0, n)`, truncates to an integer and redraws
//! while the result violates its predicate. The loops are iterative and
//! capped by `max_attempts`; hitting the cap is reported instead of hanging.

use rand::Rng;
use rand_chacha::ChaCha8Rng;

/// Default number of draws a single helper call may make.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 100_000;

/// Errors from the rejection loops.
#[derive(Debug, Clone, PartialEq)]
pub enum PlacementError {
    /// The predicate rejected every draw up to the attempt cap.
    Exhausted { helper: &'static str, detail: String, attempts: u32 },
}

impl std::fmt::Display for PlacementError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlacementError::Exhausted { helper, detail, attempts } => write!(
                f,
                "Placement exhausted: {} ({}) rejected {} draws",
                helper, detail, attempts
            ),
        }
    }
}

impl std::error::Error for PlacementError {}

/// Random placement source shared by every rendering stage.
pub struct Placement<'a> {
    rng: &'a mut ChaCha8Rng,
    max_attempts: u32,
}

impl<'a> Placement<'a> {
    pub fn new(rng: &'a mut ChaCha8Rng) -> Self {
        Self { rng, max_attempts: DEFAULT_MAX_ATTEMPTS }
    }

    pub fn with_max_attempts(rng: &'a mut ChaCha8Rng, max_attempts: u32) -> Self {
        Self { rng, max_attempts: max_attempts.max(1) }
    }

    /// Uniform draw in [0, 1).
    pub fn unit(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }

    /// Uniform draw in [0, n), truncated toward zero.
    pub fn below(&mut self, n: i32) -> i32 {
        (self.unit() * n as f64) as i32
    }

    /// Diameter of a city-like feature relative to `max_span`.
    ///
    /// Draws `uniform(0, max_span) / (size_factor * 1.5)` and redraws while
    /// the result is smaller than `max_span / 8`.
    pub fn random_diameter(&mut self, max_span: i32, size_factor: f32) -> Result<i32, PlacementError> {
        let minimum = max_span / 8;
        let divisor = size_factor as f64 * 1.5;
        self.retry(
            "random_diameter",
            || format!("max_span={}, size_factor={}", max_span, size_factor),
            |p| ((p.unit() * max_span as f64) / divisor) as i32,
            |d| d >= minimum,
        )
    }

    /// Top-left coordinate such that an object of `diameter` fits in [0, max_dimension).
    pub fn random_top_left(&mut self, max_dimension: i32, diameter: i32) -> Result<i32, PlacementError> {
        let limit = max_dimension - diameter;
        self.retry(
            "random_top_left",
            || format!("max_dimension={}, diameter={}", max_dimension, diameter),
            |p| p.below(max_dimension),
            |pos| pos <= limit,
        )
    }

    /// Draws `uniform(0, max)` and redraws while the result is above `max` or below `min`.
    pub fn random_bounded(&mut self, min: i32, max: i32) -> Result<i32, PlacementError> {
        self.retry(
            "random_bounded",
            || format!("min={}, max={}", min, max),
            |p| p.below(max),
            |pos| !(pos > max || pos < min),
        )
    }

    fn retry<D, F, A>(&mut self, helper: &'static str, detail: D, mut draw: F, accept: A) -> Result<i32, PlacementError>
    where
        D: FnOnce() -> String,
        F: FnMut(&mut Self) -> i32,
        A: Fn(i32) -> bool,
    {
        for _ in 0..self.max_attempts {
            let value = draw(self);
            if accept(value) {
                return Ok(value);
            }
        }
        Err(PlacementError::Exhausted { helper, detail: detail(), attempts: self.max_attempts })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;

    #[test]
    fn test_diameter_at_native_resolution() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let mut placement = Placement::new(&mut rng);
        for _ in 0..500 {
            let d = placement.random_diameter(256, 1.0).unwrap();
            assert!(d >= 32);
            // 256 / 1.5 is the largest reachable value
            assert!(d < 171);
        }
    }

    #[test]
    fn test_unreachable_diameter_exhausts() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let mut placement = Placement::with_max_attempts(&mut rng, 50);
        // uniform(0, 256) / 15 never reaches 256 / 8
        let err = placement.random_diameter(256, 10.0).unwrap_err();
        let PlacementError::Exhausted { helper, attempts, .. } = err;
        assert_eq!(helper, "random_diameter");
        assert_eq!(attempts, 50);
    }

    #[test]
    fn test_object_wider_than_canvas_exhausts() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let mut placement = Placement::with_max_attempts(&mut rng, 20);
        assert!(placement.random_top_left(10, 40).is_err());
    }

    #[test]
    fn test_bounded_zero_max() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let mut placement = Placement::new(&mut rng);
        assert_eq!(placement.random_bounded(-5, 0).unwrap(), 0);
    }

    #[test]
    fn test_same_seed_same_draws() {
        let mut a = ChaCha8Rng::seed_from_u64(99);
        let mut b = ChaCha8Rng::seed_from_u64(99);
        let mut pa = Placement::new(&mut a);
        let mut pb = Placement::new(&mut b);
        for _ in 0..20 {
            assert_eq!(pa.random_diameter(512, 2.0), pb.random_diameter(512, 2.0));
            assert_eq!(pa.random_bounded(10, 90), pb.random_bounded(10, 90));
        }
    }

    proptest! {
        /// Diameters never fall under an eighth of the span.
        #[test]
        fn diameter_respects_minimum(seed in any::<u64>(), span in 8i32..1024) {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let mut placement = Placement::new(&mut rng);
            let d = placement.random_diameter(span, span as f32 / 256.0).unwrap();
            prop_assert!(d >= span / 8, "diameter {} below {}", d, span / 8);
        }

        /// Objects placed by top-left always fit inside the dimension.
        #[test]
        fn top_left_fits(seed in any::<u64>(), dim in 1i32..2048, frac in 0.0f64..1.0) {
            let diameter = (dim as f64 * frac) as i32;
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let mut placement = Placement::new(&mut rng);
            let pos = placement.random_top_left(dim, diameter).unwrap();
            prop_assert!(pos >= 0);
            prop_assert!(pos + diameter <= dim);
        }

        /// Bounded draws stay inside [min, max].
        #[test]
        fn bounded_in_window(seed in any::<u64>(), min in -100i32..200, width in 8i32..200) {
            let max = min.max(0) + width;
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let mut placement = Placement::new(&mut rng);
            let pos = placement.random_bounded(min, max).unwrap();
            prop_assert!(pos >= min && pos <= max);
        }
    }
}
