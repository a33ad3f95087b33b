//! Request telemetry for the Performa service
//!
//! In-process counters only, dumped to the console on shutdown.

use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Telemetry event types
#[derive(Debug, Clone)]
pub enum RequestEvent {
    /// A prediction was served successfully
    Served { label: String, latency_ms: u64 },

    /// A request was rejected as the caller's fault (400)
    ClientRejection,

    /// A request failed on an internal fault (500)
    InternalFailure,

    /// A request was refused because the artifacts never loaded
    DegradedRejection,
}

/// Telemetry statistics
#[derive(Debug, Clone, Default)]
pub struct RequestStats {
    pub served: usize,
    pub predictions_by_label: HashMap<String, usize>,
    pub client_rejections: usize,
    pub internal_failures: usize,
    pub degraded_rejections: usize,
    pub total_latency_ms: u64,
}

impl RequestStats {
    pub fn total_requests(&self) -> usize {
        self.served + self.client_rejections + self.internal_failures + self.degraded_rejections
    }

    /// Mean handler latency over served predictions
    pub fn avg_latency_ms(&self) -> f64 {
        if self.served == 0 {
            0.0
        } else {
            self.total_latency_ms as f64 / self.served as f64
        }
    }
}

/// Telemetry collector shared across request handlers
#[derive(Clone)]
pub struct TelemetryCollector {
    stats: Arc<Mutex<RequestStats>>,
    started_at: DateTime<Utc>,
}

impl TelemetryCollector {
    pub fn new() -> Self {
        Self {
            stats: Arc::new(Mutex::new(RequestStats::default())),
            started_at: Utc::now(),
        }
    }

    /// Record an event
    pub fn record(&self, event: RequestEvent) {
        let mut stats = self.stats.lock().unwrap();
        match event {
            RequestEvent::Served { label, latency_ms } => {
                stats.served += 1;
                stats.total_latency_ms += latency_ms;
                *stats.predictions_by_label.entry(label).or_insert(0) += 1;
            }
            RequestEvent::ClientRejection => {
                stats.client_rejections += 1;
            }
            RequestEvent::InternalFailure => {
                stats.internal_failures += 1;
            }
            RequestEvent::DegradedRejection => {
                stats.degraded_rejections += 1;
            }
        }
    }

    /// Get current statistics
    pub fn snapshot(&self) -> RequestStats {
        self.stats.lock().unwrap().clone()
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// Print a shutdown summary to the console
    pub fn print_summary(&self) {
        let stats = self.snapshot();
        let uptime = Utc::now() - self.started_at;

        println!();
        println!("Session summary");
        println!("  Uptime:              {}s", uptime.num_seconds());
        println!("  Requests:            {}", stats.total_requests());
        println!("  Predictions served:  {}", stats.served);
        if !stats.predictions_by_label.is_empty() {
            let mut labels: Vec<_> = stats.predictions_by_label.iter().collect();
            labels.sort_by(|a, b| a.0.cmp(b.0));
            for (label, count) in labels {
                println!("    {:<18} {}", label, count);
            }
        }
        println!("  Client rejections:   {}", stats.client_rejections);
        println!("  Internal failures:   {}", stats.internal_failures);
        if stats.degraded_rejections > 0 {
            println!("  Degraded rejections: {}", stats.degraded_rejections);
        }
        if stats.served > 0 {
            println!("  Avg latency:         {:.2}ms", stats.avg_latency_ms());
        }
    }
}

impl Default for TelemetryCollector {
    fn default() -> Self {
        Self::new()
    }
}
