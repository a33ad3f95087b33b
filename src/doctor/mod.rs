//! Doctor command for artifact diagnostics
//!
//! Offline health checks over the three artifact files, for operators
//! deploying or restoring a service instance.

use colored::Colorize;

use crate::artifacts::{
    load_artifact, ArtifactStore, LabelEncoder, PerformanceClassifier, StandardScaler,
};
use crate::config::ServiceConfig;

/// Health check result
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HealthStatus {
    Pass,
    Warn(String),
    Fail(String),
}

/// Individual health check
#[derive(Debug)]
pub struct HealthCheck {
    pub name: String,
    pub status: HealthStatus,
}

/// Doctor diagnostics system
pub struct Doctor {
    config: ServiceConfig,
}

impl Doctor {
    /// Create a new doctor instance
    pub fn new(config: ServiceConfig) -> Self {
        Self { config }
    }

    /// Run all health checks
    pub fn run_diagnostics(&self) -> Vec<HealthCheck> {
        vec![
            self.check_artifact_dir(),
            self.check_model(),
            self.check_scaler(),
            self.check_label_encoder(),
            self.check_consistency(),
        ]
    }

    /// Check 1: artifact directory exists
    fn check_artifact_dir(&self) -> HealthCheck {
        let dir = &self.config.artifacts.dir;
        HealthCheck {
            name: "Artifact Directory".to_string(),
            status: if dir.is_dir() {
                HealthStatus::Pass
            } else {
                HealthStatus::Fail(format!("{} is not a directory", dir.display()))
            },
        }
    }

    /// Check 2: model file parses
    fn check_model(&self) -> HealthCheck {
        let status =
            match load_artifact::<PerformanceClassifier>("model", &self.config.model_path()) {
                Ok(model) if model.n_classes() < 2 => HealthStatus::Warn(format!(
                    "model has {} class(es); a classifier needs at least 2",
                    model.n_classes()
                )),
                Ok(_) => HealthStatus::Pass,
                Err(e) => HealthStatus::Fail(e.to_string()),
            };
        HealthCheck {
            name: "Model".to_string(),
            status,
        }
    }

    /// Check 3: scaler file parses
    fn check_scaler(&self) -> HealthCheck {
        let status = match load_artifact::<StandardScaler>("scaler", &self.config.scaler_path()) {
            Ok(scaler) if scaler.scale.iter().any(|s| *s == 0.0) => {
                HealthStatus::Warn("scaler contains zero-scale features".to_string())
            }
            Ok(_) => HealthStatus::Pass,
            Err(e) => HealthStatus::Fail(e.to_string()),
        };
        HealthCheck {
            name: "Scaler".to_string(),
            status,
        }
    }

    /// Check 4: label encoder file parses
    fn check_label_encoder(&self) -> HealthCheck {
        let status = match load_artifact::<LabelEncoder>(
            "label encoder",
            &self.config.label_encoder_path(),
        ) {
            Ok(encoder) if encoder.is_empty() => {
                HealthStatus::Fail("label encoder has no classes".to_string())
            }
            Ok(_) => HealthStatus::Pass,
            Err(e) => HealthStatus::Fail(e.to_string()),
        };
        HealthCheck {
            name: "Label Encoder".to_string(),
            status,
        }
    }

    /// Check 5: the three artifacts agree on dimensions
    fn check_consistency(&self) -> HealthCheck {
        let status = match ArtifactStore::load(&self.config) {
            crate::artifacts::ArtifactState::Ready(_) => HealthStatus::Pass,
            crate::artifacts::ArtifactState::Degraded { reason } => HealthStatus::Fail(reason),
        };
        HealthCheck {
            name: "Consistency".to_string(),
            status,
        }
    }

    /// Display diagnostics results
    pub fn display_results(checks: &[HealthCheck]) {
        println!("\nPerforma artifact diagnostics\n");
        println!("{:<20} {}", "Check", "Status");
        println!("{}", "=".repeat(50));

        for check in checks {
            let message = match &check.status {
                HealthStatus::Pass => "PASS".green().to_string(),
                HealthStatus::Warn(msg) => format!("{}: {}", "WARN".yellow(), msg),
                HealthStatus::Fail(msg) => format!("{}: {}", "FAIL".red(), msg),
            };
            println!("{:<20} {}", check.name, message);
        }

        println!();
    }

    /// Get overall health status
    pub fn overall_status(checks: &[HealthCheck]) -> bool {
        !checks
            .iter()
            .any(|c| matches!(c.status, HealthStatus::Fail(_)))
    }
}
