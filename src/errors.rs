//! Error types for the Performa inference service
//!
//! One enum covers artifact loading, client input validation, and
//! in-request processing faults, with the HTTP status mapping attached
//! so every failure serializes as the same `{"error": ...}` payload.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use crate::server::types::ErrorResponse;

/// Main error type for the inference service
#[derive(Error, Debug)]
pub enum ServiceError {
    /// Artifact file not found at its configured path
    #[error("{name} artifact not found at {path}")]
    ArtifactMissing { name: String, path: String },

    /// Artifact file exists but could not be deserialized
    #[error("{name} artifact at {path} is unreadable: {reason}")]
    ArtifactCorrupt {
        name: String,
        path: String,
        reason: String,
    },

    /// Loaded artifacts disagree on their fitted dimensions
    #[error("artifact dimensions are inconsistent: {0}")]
    ArtifactMismatch(String),

    /// Service started degraded; inference cannot be served until restart
    #[error("model components are unavailable: {reason}. Restore the artifact files and restart the service.")]
    Degraded { reason: String },

    /// Request body did not parse as a JSON object
    #[error("request body is not a JSON object: {0}")]
    MalformedBody(String),

    /// Required feature fields absent from the request
    #[error("incomplete input. Missing features: {missing:?}. Every one of the following fields is required, in this order: {required:?}")]
    MissingFeatures {
        missing: Vec<String>,
        required: Vec<&'static str>,
    },

    /// A required feature carried a non-numeric value
    #[error("feature '{field}' must be numeric, got {found}")]
    NonNumericFeature { field: String, found: String },

    /// Feature vector length disagrees with the fitted artifacts
    #[error("feature dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// Classifier produced an index outside the encoder's class set
    #[error("predicted class index {0} is outside the known label set")]
    UnknownClassIndex(usize),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for service operations
pub type Result<T> = std::result::Result<T, ServiceError>;

impl ServiceError {
    /// HTTP status for this error.
    ///
    /// Client input errors map to 400; everything the caller cannot fix
    /// (degraded artifacts, internal faults) maps to 500.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::MalformedBody(_)
            | ServiceError::MissingFeatures { .. }
            | ServiceError::NonNumericFeature { .. } => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Whether this error is the caller's fault
    pub fn is_client_error(&self) -> bool {
        self.status_code() == StatusCode::BAD_REQUEST
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ErrorResponse {
            error: self.to_string(),
        });
        (status, body).into_response()
    }
}
