//! Custom error types for the chain health monitor
//!
//! `MonitorError` covers configuration loading. Probe failures are `ProbeError`
//! values carried inside `anyhow::Error` and folded into health status.

use std::fmt;

/// Main error type for the chain health monitor
#[derive(Debug)]
pub enum MonitorError {
    /// Configuration-related errors
    Config(ConfigError),

    /// Other errors with context
    Other(String),
}

/// Configuration error variants
#[derive(Debug)]
pub enum ConfigError {
    /// Failed to load configuration file
    LoadFailed { path: String, reason: String },

    /// Invalid configuration value
    InvalidValue { field: String, reason: String },

    /// The same chain id is defined in more than one file
    DuplicateChain { chain_id: String, path: String },
}

/// Probe error variants
#[derive(Debug)]
pub enum ProbeError {
    /// The chain could not be reached
    ConnectionFailed { chain_id: String, reason: String },

    /// The probe call did not finish in time
    Timeout { chain_id: String, operation: String },

    /// The chain answered with something we could not use
    InvalidResponse { chain_id: String, reason: String },
}

impl fmt::Display for MonitorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MonitorError::Config(e) => write!(f, "Configuration error: {}", e),
            MonitorError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::LoadFailed { path, reason } => {
                write!(f, "Failed to load config from '{}': {}", path, reason)
            }
            ConfigError::InvalidValue { field, reason } => {
                write!(f, "Invalid value for '{}': {}", field, reason)
            }
            ConfigError::DuplicateChain { chain_id, path } => {
                write!(f, "Chain '{}' defined again in '{}'", chain_id, path)
            }
        }
    }
}

impl fmt::Display for ProbeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProbeError::ConnectionFailed { chain_id, reason } => {
                write!(f, "Connection to chain '{}' failed: {}", chain_id, reason)
            }
            ProbeError::Timeout {
                chain_id,
                operation,
            } => {
                write!(f, "Timeout while {} on chain '{}'", operation, chain_id)
            }
            ProbeError::InvalidResponse { chain_id, reason } => {
                write!(f, "Invalid response from chain '{}': {}", chain_id, reason)
            }
        }
    }
}

impl std::error::Error for MonitorError {}
impl std::error::Error for ConfigError {}
impl std::error::Error for ProbeError {}

impl From<anyhow::Error> for MonitorError {
    fn from(err: anyhow::Error) -> Self {
        MonitorError::Other(err.to_string())
    }
}

impl From<ConfigError> for MonitorError {
    fn from(err: ConfigError) -> Self {
        MonitorError::Config(err)
    }
}
