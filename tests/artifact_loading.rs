//! Loader behavior against real files on disk
//!
//! Uses a temp directory per test; the service never writes artifacts,
//! so these tests stand in for the offline training run.

use std::fs;
use std::path::Path;

use performa::artifacts::{ArtifactState, ArtifactStore};
use performa::config::ServiceConfig;
use performa::doctor::Doctor;

fn write_valid_artifacts(dir: &Path) {
    fs::write(
        dir.join("model_performa.json"),
        serde_json::json!({
            "coefficients": [
                [0.8, -0.1, 0.2, -0.3, 0.1, 0.05, -0.2, 0.4, -0.15],
                [-0.8, 0.1, -0.2, 0.3, -0.1, -0.05, 0.2, -0.4, 0.15],
                [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]
            ],
            "intercepts": [0.05, -0.05, 0.0]
        })
        .to_string(),
    )
    .unwrap();

    fs::write(
        dir.join("scaler.json"),
        serde_json::json!({
            "mean": [50.0, 60.0, 3.0, 1.2, 1.6, 3.0, 3.5, 0.5, 0.4],
            "scale": [20.0, 30.0, 1.5, 0.5, 0.6, 0.4, 0.5, 0.2, 0.15]
        })
        .to_string(),
    )
    .unwrap();

    fs::write(
        dir.join("label_encoder.json"),
        serde_json::json!({ "classes": ["High", "Low", "Medium"] }).to_string(),
    )
    .unwrap();
}

fn config_for(dir: &Path) -> ServiceConfig {
    let mut config = ServiceConfig::default();
    config.artifacts.dir = dir.to_path_buf();
    config
}

#[test]
fn test_load_valid_artifacts() {
    let dir = tempfile::tempdir().unwrap();
    write_valid_artifacts(dir.path());

    let state = ArtifactStore::load(&config_for(dir.path()));
    assert!(state.is_ready());

    let store = state.store().unwrap();
    assert_eq!(store.model.n_classes(), 3);
    assert_eq!(store.model.n_features(), 9);
    assert_eq!(store.scaler.n_features(), 9);
    let classes: Vec<&str> = store.encoder.classes().iter().map(|s| s.as_str()).collect();
    assert_eq!(classes, vec!["High", "Low", "Medium"]);
}

#[test]
fn test_missing_model_degrades_with_path() {
    let dir = tempfile::tempdir().unwrap();
    write_valid_artifacts(dir.path());
    fs::remove_file(dir.path().join("model_performa.json")).unwrap();

    match ArtifactStore::load(&config_for(dir.path())) {
        ArtifactState::Degraded { reason } => {
            assert!(reason.contains("model"));
            assert!(reason.contains("not found"));
            assert!(reason.contains("model_performa.json"));
        }
        ArtifactState::Ready(_) => panic!("expected degraded state"),
    }
}

#[test]
fn test_corrupt_scaler_degrades_with_diagnostic() {
    let dir = tempfile::tempdir().unwrap();
    write_valid_artifacts(dir.path());
    fs::write(dir.path().join("scaler.json"), "{ not valid json").unwrap();

    match ArtifactStore::load(&config_for(dir.path())) {
        ArtifactState::Degraded { reason } => {
            assert!(reason.contains("scaler"));
            assert!(reason.contains("unreadable"));
        }
        ArtifactState::Ready(_) => panic!("expected degraded state"),
    }
}

#[test]
fn test_wrong_shape_model_degrades() {
    let dir = tempfile::tempdir().unwrap();
    write_valid_artifacts(dir.path());
    // Valid JSON, wrong field names for a classifier.
    fs::write(
        dir.path().join("model_performa.json"),
        r#"{"weights": [1.0, 2.0]}"#,
    )
    .unwrap();

    match ArtifactStore::load(&config_for(dir.path())) {
        ArtifactState::Degraded { reason } => assert!(reason.contains("model")),
        ArtifactState::Ready(_) => panic!("expected degraded state"),
    }
}

#[test]
fn test_inconsistent_class_counts_degrade() {
    let dir = tempfile::tempdir().unwrap();
    write_valid_artifacts(dir.path());
    fs::write(
        dir.path().join("label_encoder.json"),
        serde_json::json!({ "classes": ["High", "Low"] }).to_string(),
    )
    .unwrap();

    match ArtifactStore::load(&config_for(dir.path())) {
        ArtifactState::Degraded { reason } => {
            assert!(reason.contains("inconsistent"));
        }
        ArtifactState::Ready(_) => panic!("expected degraded state"),
    }
}

#[test]
fn test_doctor_passes_on_valid_artifacts() {
    let dir = tempfile::tempdir().unwrap();
    write_valid_artifacts(dir.path());

    let doctor = Doctor::new(config_for(dir.path()));
    let checks = doctor.run_diagnostics();
    assert!(Doctor::overall_status(&checks));
}

#[test]
fn test_doctor_fails_on_empty_directory() {
    let dir = tempfile::tempdir().unwrap();

    let doctor = Doctor::new(config_for(dir.path()));
    let checks = doctor.run_diagnostics();
    assert!(!Doctor::overall_status(&checks));
}
