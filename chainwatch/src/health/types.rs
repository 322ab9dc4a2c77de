//! Health monitoring types shared by the registry, monitors and dashboard

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Health verdict for a single chain or for the whole dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Degraded,
    Unhealthy,
    /// No data yet. Not ranked against the other variants.
    Unknown,
}

impl HealthStatus {
    /// Rank used for worst-case aggregation. `Unknown` has no rank.
    pub fn severity(self) -> Option<u8> {
        match self {
            HealthStatus::Healthy => Some(0),
            HealthStatus::Degraded => Some(1),
            HealthStatus::Unhealthy => Some(2),
            HealthStatus::Unknown => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            HealthStatus::Healthy => "healthy",
            HealthStatus::Degraded => "degraded",
            HealthStatus::Unhealthy => "unhealthy",
            HealthStatus::Unknown => "unknown",
        }
    }
}

impl fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Live metrics snapshot owned by one chain monitor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthMetrics {
    pub timestamp: DateTime<Utc>,
    /// Negative when the probe failed to answer
    pub response_time_ms: f64,
    /// 1.0 when the probe failed to answer
    pub error_rate: f64,
    /// Reserved, not populated by the probe path
    pub availability: f64,
    pub last_checked: DateTime<Utc>,
    pub is_alive: bool,
    pub metadata: Option<HashMap<String, serde_json::Value>>,
}

impl HealthMetrics {
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            timestamp: now,
            response_time_ms: 0.0,
            error_rate: 0.0,
            availability: 0.0,
            last_checked: now,
            is_alive: false,
            metadata: Some(HashMap::new()),
        }
    }
}

impl Default for HealthMetrics {
    fn default() -> Self {
        Self::new()
    }
}

/// Status document reported by a chain's probe
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChainStatusReport {
    #[serde(default)]
    pub response_time_ms: f64,
    #[serde(default)]
    pub error_rate: f64,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub error: Option<String>,
}

/// Status plus metrics for one chain
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChainHealth {
    pub status: HealthStatus,
    pub metrics: HealthMetrics,
}

/// Per-chain health as returned to API callers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChainHealthReport {
    pub chain_id: String,
    pub status: HealthStatus,
    pub metrics: HealthMetrics,
}

/// Liveness of the API itself
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceStatus {
    pub status: String,
    pub message: String,
}
