//! Fixed-width prediction interval around the point estimate.

use crate::domain::PredictionResult;

/// 95% prediction-interval half-width calibrated for the shipped model.
///
/// Precomputed during training analysis; recalibrating it requires
/// retraining, so it is never derived at runtime.
pub const DEFAULT_HALF_WIDTH: f64 = 351_834.78;

/// Wraps a scalar estimate in `(point - K, point, point + K)`.
///
/// The half-width `K` is an injectable calibration parameter; artifacts
/// carry their own value so it stays in step with the model they describe.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntervalCalculator {
    half_width: f64,
}

impl IntervalCalculator {
    pub fn new(half_width: f64) -> Self {
        Self { half_width }
    }

    pub fn half_width(&self) -> f64 {
        self.half_width
    }

    pub fn to_interval(&self, point: f64) -> PredictionResult {
        PredictionResult {
            lower: point - self.half_width,
            point,
            upper: point + self.half_width,
        }
    }
}

impl Default for IntervalCalculator {
    fn default() -> Self {
        Self::new(DEFAULT_HALF_WIDTH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interval_is_symmetric_around_point() {
        let result = IntervalCalculator::default().to_interval(600_000.0);
        assert!((result.lower - 248_165.22).abs() < 1e-9);
        assert_eq!(result.point, 600_000.0);
        assert!((result.upper - 951_834.78).abs() < 1e-9);
    }

    #[test]
    fn half_width_is_injectable() {
        let result = IntervalCalculator::new(1_000.0).to_interval(0.0);
        assert_eq!(result.lower, -1_000.0);
        assert_eq!(result.upper, 1_000.0);
    }
}
