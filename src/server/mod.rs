//! HTTP surface: shared state, router assembly, serve loop

pub mod handlers;
pub mod types;

use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;

use crate::artifacts::ArtifactState;
use crate::telemetry::TelemetryCollector;

/// Shared per-process state injected into every handler.
///
/// The artifacts are loaded once before the listener binds and never
/// mutated afterwards, so plain `Arc` sharing covers concurrent reads.
#[derive(Clone)]
pub struct AppState {
    pub artifacts: Arc<ArtifactState>,
    pub telemetry: TelemetryCollector,
}

impl AppState {
    pub fn new(artifacts: ArtifactState) -> Self {
        Self {
            artifacts: Arc::new(artifacts),
            telemetry: TelemetryCollector::new(),
        }
    }
}

/// Assemble the two-route application router
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::home))
        .route("/predict_performance", post(handlers::predict_performance))
        .with_state(state)
}

/// Bind and serve until ctrl-c, then print the telemetry summary
pub async fn serve(state: AppState, addr: &str) -> anyhow::Result<()> {
    let telemetry = state.telemetry.clone();
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    telemetry.print_summary();
    Ok(())
}

async fn shutdown_signal() {
    // If the signal handler cannot install, keep serving until killed.
    if tokio::signal::ctrl_c().await.is_err() {
        std::future::pending::<()>().await;
    }
}
