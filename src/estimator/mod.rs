//! Price estimator contract and its artifact-backed implementation.
//!
//! The pipeline treats the estimator as an opaque capability: given a
//! feature vector in trained-column order, return one scalar dollar
//! estimate. The concrete implementation is a scoring artifact distilled
//! from the trained regression model and shipped as a versioned JSON file.

pub mod artifact;

pub use artifact::*;

use crate::features::FeatureVector;

/// A pre-trained price estimator.
///
/// Contract: deterministic given an identical vector, read-only across
/// calls, and invoked with the exact column set/order `FeatureVector`
/// produces.
pub trait Estimator {
    fn predict(&self, features: &FeatureVector) -> f64;
}
