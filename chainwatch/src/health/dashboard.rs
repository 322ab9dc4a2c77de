//! Worst-case reduction of per-chain statuses into one dashboard view

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;

use super::monitor::HealthMonitor;
use super::types::{ChainHealth, HealthStatus};

/// Aggregated view across all monitored chains
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dashboard {
    pub overall_status: HealthStatus,
    pub total_chains: usize,
    pub chains: BTreeMap<String, ChainHealth>,
    pub unhealthy_chains: usize,
    pub degraded_chains: usize,
}

/// Counts and overall verdict for a set of statuses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusSummary {
    pub overall: HealthStatus,
    pub unhealthy: usize,
    pub degraded: usize,
}

/// Unhealthy beats degraded beats healthy. `Unknown` entries are ignored,
/// and an empty set is healthy.
pub fn summarize<I>(statuses: I) -> StatusSummary
where
    I: IntoIterator<Item = HealthStatus>,
{
    let mut unhealthy = 0;
    let mut degraded = 0;
    let mut worst = HealthStatus::Healthy;

    for status in statuses {
        match status {
            HealthStatus::Unhealthy => unhealthy += 1,
            HealthStatus::Degraded => degraded += 1,
            HealthStatus::Healthy | HealthStatus::Unknown => {}
        }
        if status.severity() > worst.severity() {
            worst = status;
        }
    }

    StatusSummary {
        overall: worst,
        unhealthy,
        degraded,
    }
}

/// Checks every monitor in turn and folds the results. Holds no state between calls.
pub async fn build_dashboard<M>(monitors: &[Arc<M>]) -> Dashboard
where
    M: HealthMonitor + ?Sized,
{
    let mut chains = BTreeMap::new();

    for monitor in monitors {
        let health = monitor.check().await;
        chains.insert(monitor.chain_id().to_string(), health);
    }

    let summary = summarize(chains.values().map(|health| health.status));

    Dashboard {
        overall_status: summary.overall,
        total_chains: chains.len(),
        chains,
        unhealthy_chains: summary.unhealthy,
        degraded_chains: summary.degraded,
    }
}
