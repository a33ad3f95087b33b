//! Pre-trained performance classifier
//!
//! A multinomial logistic model exported by the offline training run:
//! one coefficient row and one intercept per class. `predict` takes the
//! argmax of the per-class scores; `predict_proba` softmaxes them.

use crate::errors::{Result, ServiceError};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PerformanceClassifier {
    /// One row per class, each `n_features` long
    pub coefficients: Vec<Vec<f64>>,

    /// One intercept per class
    pub intercepts: Vec<f64>,
}

impl PerformanceClassifier {
    pub fn n_classes(&self) -> usize {
        self.coefficients.len()
    }

    pub fn n_features(&self) -> usize {
        self.coefficients.first().map(|row| row.len()).unwrap_or(0)
    }

    /// Raw per-class scores: `W·x + b`
    fn decision_scores(&self, features: &[f64]) -> Result<Vec<f64>> {
        if features.len() != self.n_features() {
            return Err(ServiceError::DimensionMismatch {
                expected: self.n_features(),
                actual: features.len(),
            });
        }

        Ok(self
            .coefficients
            .iter()
            .zip(self.intercepts.iter())
            .map(|(row, intercept)| {
                row.iter()
                    .zip(features.iter())
                    .map(|(w, x)| w * x)
                    .sum::<f64>()
                    + intercept
            })
            .collect())
    }

    /// Predicted class index (argmax of the class scores).
    ///
    /// Ties resolve to the lowest index, matching the probability argmax.
    pub fn predict(&self, features: &[f64]) -> Result<usize> {
        let scores = self.decision_scores(features)?;
        if scores.is_empty() {
            return Err(ServiceError::ArtifactMismatch(
                "classifier has no classes".to_string(),
            ));
        }

        let mut best = 0;
        for (index, score) in scores.iter().enumerate() {
            if *score > scores[best] {
                best = index;
            }
        }
        Ok(best)
    }

    /// Full probability distribution over the classes (softmax of the scores).
    pub fn predict_proba(&self, features: &[f64]) -> Result<Vec<f64>> {
        let scores = self.decision_scores(features)?;

        // Shift by the max score so exp() cannot overflow.
        let max = scores.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        let exps: Vec<f64> = scores.iter().map(|s| (s - max).exp()).collect();
        let total: f64 = exps.iter().sum();

        Ok(exps.iter().map(|e| e / total).collect())
    }
}
