//! Load and score the JSON model artifact.
//!
//! The artifact is the portable representation of the trained model:
//!
//! - model name/version metadata
//! - the trained column list (must match `FeatureVector::COLUMNS` exactly)
//! - an intercept plus one term per column: a linear coefficient for
//!   numeric columns, a label -> weight table for categorical columns
//! - the calibrated prediction-interval half-width
//!
//! Loading is a startup concern: any failure here is fatal (exit code 3),
//! never a per-request error. `verify` rejects an artifact whose column
//! list or categorical level coverage disagrees with the feature contract,
//! so scoring itself cannot encounter a missing column or label.

use std::collections::BTreeMap;
use std::fs::File;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::estimator::Estimator;
use crate::features::{FeatureValue, FeatureVector};
use crate::schema;

/// One scoring term.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Term {
    /// Numeric column: contributes `coef * value`.
    Linear { coef: f64 },
    /// Categorical column: contributes the weight of the observed label.
    Categorical { levels: BTreeMap<String, f64> },
}

/// A scoring artifact distilled from the trained model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringArtifact {
    pub name: String,
    pub version: String,
    /// Trained columns in training order.
    pub columns: Vec<String>,
    pub intercept: f64,
    pub terms: BTreeMap<String, Term>,
    /// 95% prediction-interval half-width calibrated alongside the model.
    pub interval_half_width: f64,
}

impl ScoringArtifact {
    /// Load and verify an artifact file.
    pub fn load(path: &Path) -> Result<Self, AppError> {
        let file = File::open(path).map_err(|e| {
            AppError::artifact(format!("Failed to open model artifact '{}': {e}", path.display()))
        })?;
        let artifact: ScoringArtifact = serde_json::from_reader(file)
            .map_err(|e| AppError::artifact(format!("Invalid model artifact: {e}")))?;
        artifact.verify()?;
        Ok(artifact)
    }

    /// Check the artifact against the feature contract and field schema.
    pub fn verify(&self) -> Result<(), AppError> {
        if self.columns != FeatureVector::COLUMNS {
            return Err(AppError::artifact(format!(
                "Model artifact '{}' was trained on a different column set; \
                 expected [{}], found [{}]",
                self.name,
                FeatureVector::COLUMNS.join(", "),
                self.columns.join(", "),
            )));
        }

        for column in &self.columns {
            let term = self.terms.get(column).ok_or_else(|| {
                AppError::artifact(format!("Model artifact is missing a term for column {column}"))
            })?;
            match (term, schema::category_levels(column)) {
                (Term::Categorical { levels }, Some(expected)) => {
                    for label in expected {
                        if !levels.contains_key(label) {
                            return Err(AppError::artifact(format!(
                                "Model artifact term {column} has no weight for level '{label}'"
                            )));
                        }
                    }
                }
                (Term::Linear { .. }, None) => {}
                (Term::Linear { .. }, Some(_)) => {
                    return Err(AppError::artifact(format!(
                        "Model artifact term {column} must be categorical"
                    )));
                }
                (Term::Categorical { .. }, None) => {
                    return Err(AppError::artifact(format!(
                        "Model artifact term {column} must be linear"
                    )));
                }
            }
        }

        if !self.interval_half_width.is_finite() || self.interval_half_width < 0.0 {
            return Err(AppError::artifact(
                "Model artifact interval_half_width must be a non-negative finite number",
            ));
        }

        Ok(())
    }
}

impl Estimator for ScoringArtifact {
    fn predict(&self, features: &FeatureVector) -> f64 {
        let mut score = self.intercept;
        for (column, value) in features.values() {
            // `verify` guarantees a term per column and full level coverage.
            match (self.terms.get(column), value) {
                (Some(Term::Linear { coef }), FeatureValue::Number(x)) => score += coef * x,
                (Some(Term::Categorical { levels }), FeatureValue::Label(label)) => {
                    score += levels.get(label).copied().unwrap_or(0.0);
                }
                _ => {}
            }
        }
        score
    }
}
