//! Fitted standardization transform
//!
//! Produced by the offline training run alongside the classifier; the same
//! transform must be applied at inference time, feature for feature.

use crate::errors::{Result, ServiceError};
use serde::{Deserialize, Serialize};

/// Per-feature standardization: `(x - mean) / scale`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StandardScaler {
    /// Per-feature mean observed at fit time
    pub mean: Vec<f64>,

    /// Per-feature scale (standard deviation) observed at fit time
    pub scale: Vec<f64>,
}

impl StandardScaler {
    /// Normalize a raw feature vector.
    pub fn transform(&self, raw: &[f64]) -> Result<Vec<f64>> {
        if raw.len() != self.mean.len() {
            return Err(ServiceError::DimensionMismatch {
                expected: self.mean.len(),
                actual: raw.len(),
            });
        }

        Ok(raw
            .iter()
            .zip(self.mean.iter().zip(self.scale.iter()))
            .map(|(x, (mean, scale))| {
                // A zero scale means the feature was constant at fit time.
                if *scale == 0.0 {
                    0.0
                } else {
                    (x - mean) / scale
                }
            })
            .collect())
    }

    /// Number of features this scaler was fitted on
    pub fn n_features(&self) -> usize {
        self.mean.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scaler() -> StandardScaler {
        StandardScaler {
            mean: vec![50.0, 60.0, 3.0],
            scale: vec![10.0, 30.0, 1.5],
        }
    }

    #[test]
    fn test_transform_standardizes() {
        let scaled = scaler().transform(&[70.0, 60.0, 1.5]).unwrap();
        assert_eq!(scaled, vec![2.0, 0.0, -1.0]);
    }

    #[test]
    fn test_transform_identity_scaler() {
        let identity = StandardScaler {
            mean: vec![0.0, 0.0],
            scale: vec![1.0, 1.0],
        };
        let scaled = identity.transform(&[3.5, -2.25]).unwrap();
        assert_eq!(scaled, vec![3.5, -2.25]);
    }

    #[test]
    fn test_transform_zero_scale_feature() {
        let constant = StandardScaler {
            mean: vec![4.0],
            scale: vec![0.0],
        };
        let scaled = constant.transform(&[9.0]).unwrap();
        assert_eq!(scaled, vec![0.0]);
    }

    #[test]
    fn test_transform_wrong_dimension() {
        let err = scaler().transform(&[1.0, 2.0]).unwrap_err();
        assert!(matches!(
            err,
            ServiceError::DimensionMismatch {
                expected: 3,
                actual: 2
            }
        ));
    }

    #[test]
    fn test_scaler_deserializes_from_json() {
        let scaler: StandardScaler =
            serde_json::from_str(r#"{"mean": [1.0, 2.0], "scale": [0.5, 2.0]}"#).unwrap();
        assert_eq!(scaler.n_features(), 2);
        assert_eq!(scaler.transform(&[2.0, 2.0]).unwrap(), vec![2.0, 0.0]);
    }
}
