//! Performa - task-session performance inference service
//!
//! A small HTTP wrapper around a pre-trained performance classifier:
//! one inference endpoint, one liveness endpoint, and three artifacts
//! (model, scaler, label encoder) loaded once at startup and shared
//! read-only across requests.

pub mod errors;
pub mod config;
pub mod cli;
pub mod features;
pub mod artifacts;
pub mod telemetry;
pub mod server;
pub mod doctor;

// Re-export commonly used types
pub use errors::{Result, ServiceError};
pub use features::{FeatureVector, FEATURES_ORDER};
