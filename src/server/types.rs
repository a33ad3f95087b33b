//! Wire types for the HTTP surface

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Successful inference response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionResponse {
    /// Decoded performance category
    pub predicted_performance: String,

    /// Probability per known class, rounded to 4 decimal places.
    /// Always covers every class the label encoder knows, not just the
    /// predicted one.
    pub prediction_probabilities: BTreeMap<String, f64>,
}

/// Error payload shared by 400 and 500 responses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Round a probability to 4 decimal places for the response payload
pub fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round4() {
        assert_eq!(round4(0.123456), 0.1235);
        assert_eq!(round4(0.12344), 0.1234);
        assert_eq!(round4(1.0), 1.0);
        assert_eq!(round4(0.0), 0.0);
    }

    #[test]
    fn test_prediction_response_serializes() {
        let mut probabilities = BTreeMap::new();
        probabilities.insert("High".to_string(), 0.7211);
        probabilities.insert("Low".to_string(), 0.2789);

        let response = PredictionResponse {
            predicted_performance: "High".to_string(),
            prediction_probabilities: probabilities,
        };

        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"predicted_performance\":\"High\""));
        assert!(json.contains("\"prediction_probabilities\""));

        let parsed: PredictionResponse = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.predicted_performance, "High");
        assert_eq!(parsed.prediction_probabilities["Low"], 0.2789);
    }

    #[test]
    fn test_error_response_shape() {
        let response = ErrorResponse {
            error: "incomplete input".to_string(),
        };
        let json = serde_json::to_string(&response).unwrap();
        assert_eq!(json, r#"{"error":"incomplete input"}"#);
    }
}
