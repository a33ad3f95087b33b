//! Startup loading of the three inference artifacts
//!
//! The classifier, scaler and label encoder are loaded exactly once,
//! before the listener binds, and never mutated afterwards. A missing or
//! corrupt artifact leaves the process running but permanently degraded;
//! restart is the only recovery path.

pub mod classifier;
pub mod encoder;
pub mod scaler;

pub use classifier::PerformanceClassifier;
pub use encoder::LabelEncoder;
pub use scaler::StandardScaler;

use crate::config::ServiceConfig;
use crate::errors::{Result, ServiceError};
use crate::features::FEATURES_ORDER;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

/// The three fitted artifacts, ready for shared read-only use
#[derive(Debug, Clone)]
pub struct ArtifactStore {
    pub model: PerformanceClassifier,
    pub scaler: StandardScaler,
    pub encoder: LabelEncoder,
}

/// Outcome of the one-shot startup load
#[derive(Debug)]
pub enum ArtifactState {
    Ready(ArtifactStore),

    /// Load failed; the reason is echoed in every inference response
    Degraded { reason: String },
}

impl ArtifactState {
    /// Access the store, or the degraded-state error for the response
    pub fn store(&self) -> Result<&ArtifactStore> {
        match self {
            ArtifactState::Ready(store) => Ok(store),
            ArtifactState::Degraded { reason } => Err(ServiceError::Degraded {
                reason: reason.clone(),
            }),
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, ArtifactState::Ready(_))
    }
}

impl ArtifactStore {
    /// Load and cross-check all three artifacts.
    ///
    /// Any failure degrades the whole store; there is no partial
    /// availability.
    pub fn load(config: &ServiceConfig) -> ArtifactState {
        match Self::try_load(config) {
            Ok(store) => ArtifactState::Ready(store),
            Err(e) => ArtifactState::Degraded {
                reason: e.to_string(),
            },
        }
    }

    fn try_load(config: &ServiceConfig) -> Result<Self> {
        let model: PerformanceClassifier = load_artifact("model", &config.model_path())?;
        let scaler: StandardScaler = load_artifact("scaler", &config.scaler_path())?;
        let encoder: LabelEncoder =
            load_artifact("label encoder", &config.label_encoder_path())?;

        let store = ArtifactStore {
            model,
            scaler,
            encoder,
        };
        store.check_consistency()?;
        Ok(store)
    }

    /// The fitted dimensions must agree with each other and with the
    /// feature schema; a store that passes this never produces a
    /// dimension error or an undecodable class index at request time.
    pub fn check_consistency(&self) -> Result<()> {
        let n_features = FEATURES_ORDER.len();

        if self.model.n_features() != n_features {
            return Err(ServiceError::ArtifactMismatch(format!(
                "model expects {} features, schema defines {}",
                self.model.n_features(),
                n_features
            )));
        }
        if self
            .model
            .coefficients
            .iter()
            .any(|row| row.len() != n_features)
        {
            return Err(ServiceError::ArtifactMismatch(
                "model coefficient rows have unequal lengths".to_string(),
            ));
        }
        if self.model.intercepts.len() != self.model.n_classes() {
            return Err(ServiceError::ArtifactMismatch(format!(
                "model has {} coefficient rows but {} intercepts",
                self.model.n_classes(),
                self.model.intercepts.len()
            )));
        }
        if self.scaler.n_features() != n_features {
            return Err(ServiceError::ArtifactMismatch(format!(
                "scaler fitted on {} features, schema defines {}",
                self.scaler.n_features(),
                n_features
            )));
        }
        if self.scaler.scale.len() != self.scaler.mean.len() {
            return Err(ServiceError::ArtifactMismatch(
                "scaler mean and scale lengths differ".to_string(),
            ));
        }
        if self.encoder.is_empty() {
            return Err(ServiceError::ArtifactMismatch(
                "label encoder has no classes".to_string(),
            ));
        }
        if self.model.n_classes() != self.encoder.len() {
            return Err(ServiceError::ArtifactMismatch(format!(
                "model predicts {} classes but the label encoder knows {}",
                self.model.n_classes(),
                self.encoder.len()
            )));
        }

        Ok(())
    }
}

/// Deserialize one artifact file, distinguishing a missing file from a
/// present-but-unreadable one.
pub(crate) fn load_artifact<T: DeserializeOwned>(name: &str, path: &Path) -> Result<T> {
    if !path.exists() {
        return Err(ServiceError::ArtifactMissing {
            name: name.to_string(),
            path: path.display().to_string(),
        });
    }

    let contents = fs::read_to_string(path).map_err(|e| ServiceError::ArtifactCorrupt {
        name: name.to_string(),
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;

    serde_json::from_str(&contents).map_err(|e| ServiceError::ArtifactCorrupt {
        name: name.to_string(),
        path: path.display().to_string(),
        reason: e.to_string(),
    })
}
