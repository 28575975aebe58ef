//! The prediction pipeline shared by single and batch scoring.
//!
//! Keeping this in one place avoids duplicating the core workflow:
//! validate -> engineer features -> estimate -> interval
//!
//! The front-ends (single `predict`, CSV `batch`) then focus on
//! presentation and I/O.

use crate::domain::{PredictionResult, RawPropertyRecord};
use crate::error::AppError;
use crate::estimator::Estimator;
use crate::features;
use crate::interval::IntervalCalculator;
use crate::schema;

/// The only entry point callers use to turn a raw record into a priced
/// interval.
///
/// Constructed once at startup around a loaded estimator; `run` holds no
/// state across calls, so a pipeline can serve any number of concurrent
/// requests once built.
#[derive(Debug, Clone)]
pub struct PredictionPipeline<E: Estimator> {
    estimator: E,
    interval: IntervalCalculator,
}

impl<E: Estimator> PredictionPipeline<E> {
    pub fn new(estimator: E, interval: IntervalCalculator) -> Self {
        Self { estimator, interval }
    }

    /// Validate, engineer, estimate, and wrap one record.
    ///
    /// A schema violation aborts the call before any estimation; no partial
    /// result is produced.
    pub fn run(&self, record: &RawPropertyRecord) -> Result<PredictionResult, AppError> {
        let valid = schema::validate(record)?;
        let features = features::engineer(valid);
        let point = self.estimator.predict(&features);
        if !point.is_finite() {
            return Err(AppError::internal("Estimator produced a non-finite price estimate."));
        }
        Ok(self.interval.to_interval(point))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::FeatureVector;

    /// Estimator stub returning a fixed point estimate.
    struct Fixed(f64);

    impl Estimator for Fixed {
        fn predict(&self, _features: &FeatureVector) -> f64 {
            self.0
        }
    }

    #[test]
    fn end_to_end_sample_record() {
        let pipeline = PredictionPipeline::new(Fixed(600_000.0), IntervalCalculator::default());
        let result = pipeline.run(&RawPropertyRecord::sample()).unwrap();

        assert!((result.lower - 248_165.22).abs() < 1e-9);
        assert_eq!(result.point, 600_000.0);
        assert!((result.upper - 951_834.78).abs() < 1e-9);
    }

    #[test]
    fn schema_violation_aborts_before_estimation() {
        struct Panicking;
        impl Estimator for Panicking {
            fn predict(&self, _features: &FeatureVector) -> f64 {
                panic!("estimator must not run on invalid input");
            }
        }

        let pipeline = PredictionPipeline::new(Panicking, IntervalCalculator::default());
        let mut record = RawPropertyRecord::sample();
        record.rooms = 0;

        let err = pipeline.run(&record).unwrap_err();
        assert_eq!(err.exit_code(), 2);
        assert!(err.to_string().contains("ROOMS"));
    }

    #[test]
    fn non_finite_estimate_is_an_internal_error() {
        let pipeline = PredictionPipeline::new(Fixed(f64::NAN), IntervalCalculator::default());
        let err = pipeline.run(&RawPropertyRecord::sample()).unwrap_err();
        assert_eq!(err.exit_code(), 4);
    }

    #[test]
    fn run_is_repeatable() {
        let pipeline = PredictionPipeline::new(Fixed(425_000.0), IntervalCalculator::default());
        let record = RawPropertyRecord::sample();
        let first = pipeline.run(&record).unwrap();
        let second = pipeline.run(&record).unwrap();
        assert_eq!(first, second);
    }
}
