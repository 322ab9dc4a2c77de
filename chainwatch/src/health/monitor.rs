// File: chainwatch/src/health/monitor.rs
use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;
use serde_json::Value;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::timeout;
use tracing::{debug, warn};

use super::heartbeat::HeartbeatRegistry;
use super::probe::ChainProbe;
use super::types::{ChainHealth, ChainStatusReport, HealthMetrics, HealthStatus};
use crate::errors::ProbeError;

/// Something that can judge the health of one chain.
#[async_trait]
pub trait HealthMonitor: Send + Sync {
    fn chain_id(&self) -> &str;

    /// Derived fresh on every call. Never fails.
    async fn check_health(&self) -> HealthStatus;

    /// Refreshes and returns the monitor's metrics snapshot. Never fails.
    async fn get_metrics(&self) -> HealthMetrics;

    /// Both views back to back. They may reflect different probe outcomes.
    async fn check(&self) -> ChainHealth {
        let status = self.check_health().await;
        let metrics = self.get_metrics().await;
        ChainHealth { status, metrics }
    }
}

/// Combines heartbeat liveness with an optional live probe for one chain
pub struct ChainHealthMonitor {
    chain_id: String,
    heartbeats: Arc<HeartbeatRegistry>,
    probe: Option<Arc<dyn ChainProbe>>,
    probe_timeout: Duration,
    last_metrics: Mutex<HealthMetrics>,
}

impl ChainHealthMonitor {
    pub fn new(
        chain_id: &str,
        heartbeats: Arc<HeartbeatRegistry>,
        probe: Option<Arc<dyn ChainProbe>>,
        probe_timeout: Duration,
    ) -> Self {
        Self {
            chain_id: chain_id.to_string(),
            heartbeats,
            probe,
            probe_timeout,
            last_metrics: Mutex::new(HealthMetrics::new()),
        }
    }

    pub fn has_probe(&self) -> bool {
        self.probe.is_some()
    }

    async fn bounded<T, F>(&self, operation: &str, call: F) -> Result<T>
    where
        T: Send,
        F: Future<Output = Result<T>> + Send,
    {
        timeout(self.probe_timeout, call).await.map_err(|_| ProbeError::Timeout {
            chain_id: self.chain_id.clone(),
            operation: operation.to_string(),
        })?
    }
}

#[async_trait]
impl HealthMonitor for ChainHealthMonitor {
    fn chain_id(&self) -> &str {
        &self.chain_id
    }

    async fn check_health(&self) -> HealthStatus {
        if !self.heartbeats.is_alive(&self.chain_id).await {
            return HealthStatus::Unhealthy;
        }

        let Some(probe) = &self.probe else {
            return HealthStatus::Healthy;
        };

        match self.bounded("ping", probe.ping()).await {
            Ok(true) => HealthStatus::Healthy,
            Ok(false) => {
                debug!("Chain '{}' reachable but reported trouble", self.chain_id);
                HealthStatus::Degraded
            }
            Err(e) => {
                warn!(
                    "Chain '{}' probe call failed during health check: {}",
                    self.chain_id, e
                );
                HealthStatus::Unhealthy
            }
        }
    }

    async fn get_metrics(&self) -> HealthMetrics {
        let is_alive = self.heartbeats.is_alive(&self.chain_id).await;
        let last_checked = Utc::now();

        let outcome = match &self.probe {
            Some(probe) => Some(self.bounded("get_status", probe.get_status()).await),
            None => None,
        };

        let mut metrics = self.last_metrics.lock().await;
        metrics.is_alive = is_alive;
        metrics.last_checked = last_checked;

        match outcome {
            Some(Ok(report)) => apply_status_report(&mut metrics, report),
            Some(Err(e)) => {
                warn!(
                    "Failed to get metrics from probe for chain '{}': {}",
                    self.chain_id, e
                );
                metrics.response_time_ms = -1.0;
                metrics.error_rate = 1.0;

                let metadata = metrics.metadata.get_or_insert_with(Default::default);
                metadata.remove("status");
                metadata.insert("error".to_string(), Value::String(e.to_string()));
            }
            None => {
                metrics.response_time_ms = 0.0;
                metrics.error_rate = 0.0;
                if let Some(metadata) = metrics.metadata.as_mut() {
                    metadata.remove("status");
                    metadata.remove("error");
                }
            }
        }

        metrics.clone()
    }
}

fn apply_status_report(metrics: &mut HealthMetrics, report: ChainStatusReport) {
    metrics.response_time_ms = report.response_time_ms;
    metrics.error_rate = report.error_rate;

    let metadata = metrics.metadata.get_or_insert_with(Default::default);
    metadata.insert("status".to_string(), Value::String(report.status));
    metadata.insert(
        "error".to_string(),
        report.error.map(Value::String).unwrap_or(Value::Null),
    );
}
