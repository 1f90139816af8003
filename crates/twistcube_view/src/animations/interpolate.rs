//! Interpolation functions.

/// Function that maps a float from the range 0.0 to 1.0 to another float
/// from 0.0 to 1.0.
pub type InterpolateFn = fn(f32) -> f32;

/// Interpolate using a cubic ease-in-out curve: accelerate through the first
/// half of the turn, then decelerate symmetrically.
pub const CUBIC: InterpolateFn = |t| {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cubic_endpoints() {
        assert_eq!(0.0, CUBIC(0.0));
        assert_eq!(0.5, CUBIC(0.5));
        assert_eq!(1.0, CUBIC(1.0));
    }

    #[test]
    fn test_cubic_monotone() {
        let samples: Vec<f32> = (0..=100).map(|i| CUBIC(i as f32 / 100.0)).collect();
        for pair in samples.windows(2) {
            assert!(pair[0] <= pair[1], "not monotone at {pair:?}");
        }
    }
}
