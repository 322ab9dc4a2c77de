// File: chainwatch/src/config/mod.rs
pub mod manager;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::Duration;
pub use manager::ConfigManager;

use crate::constants::defaults;
use crate::errors::ConfigError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_ping_interval")]
    pub default_ping_interval_seconds: u64,
    #[serde(default = "default_prober_interval")]
    pub prober_interval_seconds: u64,
    #[serde(default = "default_probe_timeout")]
    pub probe_timeout_seconds: u64,
    // Populated from the chain files next to main.toml
    #[serde(skip)]
    pub chains: HashMap<String, ChainConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChainConfig {
    pub ping_interval_seconds: Option<u64>,
    pub probe_url: Option<String>,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChainConfigFile {
    #[serde(default)]
    pub chains: HashMap<String, ChainConfig>,
}

fn default_host() -> String {
    defaults::HOST.to_string()
}

fn default_port() -> u16 {
    defaults::PORT
}

fn default_ping_interval() -> u64 {
    defaults::PING_INTERVAL_SECONDS
}

fn default_prober_interval() -> u64 {
    defaults::PROBER_INTERVAL_SECONDS
}

fn default_probe_timeout() -> u64 {
    defaults::PROBE_TIMEOUT_SECONDS
}

fn default_enabled() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            default_ping_interval_seconds: default_ping_interval(),
            prober_interval_seconds: default_prober_interval(),
            probe_timeout_seconds: default_probe_timeout(),
            chains: HashMap::new(),
        }
    }
}

impl Config {
    pub fn default_ping_interval(&self) -> Duration {
        Duration::from_secs(self.default_ping_interval_seconds)
    }

    pub fn prober_interval(&self) -> Duration {
        Duration::from_secs(self.prober_interval_seconds)
    }

    pub fn probe_timeout(&self) -> Duration {
        Duration::from_secs(self.probe_timeout_seconds)
    }

    /// Chains that should be registered at startup, in id order.
    pub fn enabled_chains(&self) -> Vec<(&String, &ChainConfig)> {
        let mut chains: Vec<_> = self.chains.iter().filter(|(_, c)| c.enabled).collect();
        chains.sort_by(|a, b| a.0.cmp(b.0));
        chains
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.default_ping_interval_seconds == 0 {
            return Err(ConfigError::InvalidValue {
                field: "default_ping_interval_seconds".to_string(),
                reason: "must be greater than zero".to_string(),
            });
        }
        if self.prober_interval_seconds == 0 {
            return Err(ConfigError::InvalidValue {
                field: "prober_interval_seconds".to_string(),
                reason: "must be greater than zero".to_string(),
            });
        }
        if self.probe_timeout_seconds == 0 {
            return Err(ConfigError::InvalidValue {
                field: "probe_timeout_seconds".to_string(),
                reason: "must be greater than zero".to_string(),
            });
        }
        for (chain_id, chain) in &self.chains {
            if let Some(url) = &chain.probe_url {
                if !(url.starts_with("http://") || url.starts_with("https://")) {
                    return Err(ConfigError::InvalidValue {
                        field: format!("chains.{}.probe_url", chain_id),
                        reason: format!("'{}' is not an http(s) URL", url),
                    });
                }
            }
        }
        Ok(())
    }
}

impl ChainConfig {
    pub fn ping_interval(&self) -> Option<Duration> {
        self.ping_interval_seconds.map(Duration::from_secs)
    }
}
