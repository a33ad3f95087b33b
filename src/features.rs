//! Canonical feature schema for task-session measurements
//!
//! The field order here must match the order the artifacts were fitted
//! with; the scaler and classifier both index features positionally.

use crate::errors::{Result, ServiceError};
use serde_json::Value;

/// Feature names in the exact order used when the artifacts were produced.
pub const FEATURES_ORDER: [&str; 9] = [
    "Tangram_Accuracy (%)",
    "Tangram_Completion_Time (s)",
    "Tangram_Difficulty_Level",
    "GSR_Baseline (μS)",
    "GSR_Challenge (μS)",
    "Pupil_Baseline (mm)",
    "Pupil_Task (mm)",
    "Cognitive_Load_Index",
    "Stress_Reactivity_Index",
];

/// One task session's measurements, ordered per [`FEATURES_ORDER`].
///
/// Built fresh from untrusted JSON for each request and dropped when the
/// request completes.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector(Vec<f64>);

impl FeatureVector {
    /// Extract the required features from an untrusted JSON value.
    ///
    /// Fields not in the schema are silently ignored. Missing fields are
    /// enumerated in schema order so the caller can self-correct from the
    /// error message alone; values are checked for numeric type only after
    /// the full field set is known to be present.
    pub fn from_json(input: &Value) -> Result<Self> {
        let object = input.as_object().ok_or_else(|| {
            ServiceError::MalformedBody(format!(
                "expected an object, got {}",
                json_type_name(input)
            ))
        })?;

        let missing: Vec<String> = FEATURES_ORDER
            .iter()
            .filter(|field| !object.contains_key(**field))
            .map(|field| field.to_string())
            .collect();

        if !missing.is_empty() {
            return Err(ServiceError::MissingFeatures {
                missing,
                required: FEATURES_ORDER.to_vec(),
            });
        }

        let mut values = Vec::with_capacity(FEATURES_ORDER.len());
        for field in FEATURES_ORDER {
            let value = object.get(field).ok_or_else(|| {
                ServiceError::MissingFeatures {
                    missing: vec![field.to_string()],
                    required: FEATURES_ORDER.to_vec(),
                }
            })?;
            let number = value
                .as_f64()
                .ok_or_else(|| ServiceError::NonNumericFeature {
                    field: field.to_string(),
                    found: json_type_name(value).to_string(),
                })?;
            values.push(number);
        }

        Ok(FeatureVector(values))
    }

    /// Raw values in schema order
    pub fn values(&self) -> &[f64] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<f64>> for FeatureVector {
    fn from(values: Vec<f64>) -> Self {
        FeatureVector(values)
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
