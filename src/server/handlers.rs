//! Request handlers for the inference surface

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use std::collections::BTreeMap;
use std::time::Instant;
use uuid::Uuid;

use crate::errors::{Result, ServiceError};
use crate::features::FeatureVector;
use crate::server::types::{round4, PredictionResponse};
use crate::server::AppState;
use crate::telemetry::RequestEvent;

/// Fixed liveness string served at `GET /`
pub const LIVENESS_MESSAGE: &str = "Performa inference service is running";

/// GET / liveness probe. Never consults artifact state.
pub async fn home() -> &'static str {
    LIVENESS_MESSAGE
}

/// POST /predict_performance
///
/// The body is taken raw and parsed here so that malformed JSON maps to
/// the service's own 400 payload instead of a framework rejection.
pub async fn predict_performance(State(state): State<AppState>, body: String) -> Response {
    let started = Instant::now();

    match run_prediction(&state, &body) {
        Ok(response) => {
            state.telemetry.record(RequestEvent::Served {
                label: response.predicted_performance.clone(),
                latency_ms: started.elapsed().as_millis() as u64,
            });
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => {
            let request_id = Uuid::new_v4();
            eprintln!(
                "[{}] prediction failed ({}): {}",
                request_id,
                e.status_code().as_u16(),
                e
            );
            state.telemetry.record(match &e {
                ServiceError::Degraded { .. } => RequestEvent::DegradedRejection,
                e if e.is_client_error() => RequestEvent::ClientRejection,
                _ => RequestEvent::InternalFailure,
            });
            e.into_response()
        }
    }
}

/// The full inference path: validate, project, scale, classify, decode.
fn run_prediction(state: &AppState, body: &str) -> Result<PredictionResponse> {
    let store = state.artifacts.store()?;

    let input: serde_json::Value =
        serde_json::from_str(body).map_err(|e| ServiceError::MalformedBody(e.to_string()))?;
    let features = FeatureVector::from_json(&input)?;

    let scaled = store.scaler.transform(features.values())?;
    let class_index = store.model.predict(&scaled)?;
    let probabilities = store.model.predict_proba(&scaled)?;
    let predicted = store.encoder.decode(class_index)?.to_string();

    let prediction_probabilities: BTreeMap<String, f64> = store
        .encoder
        .classes()
        .iter()
        .zip(probabilities.iter())
        .map(|(class, p)| (class.clone(), round4(*p)))
        .collect();

    Ok(PredictionResponse {
        predicted_performance: predicted,
        prediction_probabilities,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_home_returns_liveness_string() {
        let body = home().await;
        assert_eq!(body, LIVENESS_MESSAGE);
    }
}
