//! Health monitoring module
//!
//! Heartbeat liveness, per-chain health monitors and the dashboard reduction.

pub mod dashboard;
pub mod heartbeat;
pub mod monitor;
pub mod probe;
pub mod types;

pub use dashboard::{build_dashboard, summarize, Dashboard, StatusSummary};
pub use heartbeat::{HeartbeatRecord, HeartbeatRegistry};
pub use monitor::{ChainHealthMonitor, HealthMonitor};
pub use probe::{ChainProbe, HttpChainProbe};
pub use types::{ChainHealth, ChainHealthReport, ChainStatusReport, HealthMetrics, HealthStatus, ServiceStatus};
