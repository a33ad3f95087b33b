//! Class index to label bijection

use crate::errors::{Result, ServiceError};
use serde::{Deserialize, Serialize};

/// Ordered class names fitted offline. The position of a name is its
/// class index; the classifier's coefficient rows use the same order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabelEncoder {
    pub classes: Vec<String>,
}

impl LabelEncoder {
    /// Decode a class index to its human-readable label.
    pub fn decode(&self, index: usize) -> Result<&str> {
        self.classes
            .get(index)
            .map(|s| s.as_str())
            .ok_or(ServiceError::UnknownClassIndex(index))
    }

    /// All known class names, in index order
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encoder() -> LabelEncoder {
        LabelEncoder {
            classes: vec![
                "High".to_string(),
                "Low".to_string(),
                "Medium".to_string(),
            ],
        }
    }

    #[test]
    fn test_decode_known_indices() {
        let encoder = encoder();
        assert_eq!(encoder.decode(0).unwrap(), "High");
        assert_eq!(encoder.decode(1).unwrap(), "Low");
        assert_eq!(encoder.decode(2).unwrap(), "Medium");
    }

    #[test]
    fn test_decode_out_of_range() {
        let err = encoder().decode(3).unwrap_err();
        assert!(matches!(err, ServiceError::UnknownClassIndex(3)));
    }

    #[test]
    fn test_encoder_deserializes_from_json() {
        let encoder: LabelEncoder =
            serde_json::from_str(r#"{"classes": ["High", "Low"]}"#).unwrap();
        assert_eq!(encoder.len(), 2);
        assert_eq!(encoder.decode(1).unwrap(), "Low");
    }
}
