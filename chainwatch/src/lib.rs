pub mod config;
pub mod constants;
pub mod errors;
pub mod health;
pub mod prober;
pub mod services;
pub mod web;

// Re-export commonly used types
pub use config::{ChainConfig, Config, ConfigManager};
pub use errors::{ConfigError, MonitorError, ProbeError};
pub use health::{ChainHealthMonitor, HealthMonitor, HealthStatus, HeartbeatRegistry};
pub use prober::PeriodicProber;
pub use services::HealthService;
