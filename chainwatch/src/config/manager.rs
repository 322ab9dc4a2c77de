// File: chainwatch/src/config/manager.rs
use super::{ChainConfigFile, Config};
use crate::errors::{ConfigError, MonitorError};
use glob::glob;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::fs;
use tracing::{debug, info};

pub struct ConfigManager {
    current_config: Arc<Config>,
}

impl ConfigManager {
    pub async fn new(config_dir: String) -> Result<Self, MonitorError> {
        let config = Self::load_configuration(&config_dir).await?;
        Ok(Self {
            current_config: Arc::new(config),
        })
    }

    pub fn from_config(config: Config) -> Self {
        Self {
            current_config: Arc::new(config),
        }
    }

    pub fn get_current_config(&self) -> Arc<Config> {
        self.current_config.clone()
    }

    async fn load_configuration(config_dir: &str) -> Result<Config, MonitorError> {
        let main_config_path = format!("{}/main.toml", config_dir);
        let main_config_content =
            fs::read_to_string(&main_config_path)
                .await
                .map_err(|e| ConfigError::LoadFailed {
                    path: main_config_path.clone(),
                    reason: e.to_string(),
                })?;

        let mut config: Config =
            toml::from_str(&main_config_content).map_err(|e| ConfigError::LoadFailed {
                path: main_config_path.clone(),
                reason: e.to_string(),
            })?;

        // Every other toml file in the directory contributes chains
        let pattern = format!("{}/*.toml", config_dir);
        let mut all_chains = HashMap::new();

        let entries = glob(&pattern).map_err(|e| ConfigError::LoadFailed {
            path: pattern.clone(),
            reason: e.to_string(),
        })?;

        for entry in entries {
            let path = entry.map_err(|e| ConfigError::LoadFailed {
                path: pattern.clone(),
                reason: e.to_string(),
            })?;
            let filename = path
                .file_name()
                .and_then(|name| name.to_str())
                .ok_or_else(|| MonitorError::Other(format!("Invalid filename: {}", path.display())))?;

            if filename == "main.toml" {
                continue;
            }

            debug!("Loading chain config: {}", path.display());

            let content = fs::read_to_string(&path)
                .await
                .map_err(|e| ConfigError::LoadFailed {
                    path: path.display().to_string(),
                    reason: e.to_string(),
                })?;

            let chain_file: ChainConfigFile =
                toml::from_str(&content).map_err(|e| ConfigError::LoadFailed {
                    path: path.display().to_string(),
                    reason: e.to_string(),
                })?;

            for (chain_id, chain_config) in chain_file.chains {
                if all_chains.contains_key(&chain_id) {
                    return Err(ConfigError::DuplicateChain {
                        chain_id,
                        path: path.display().to_string(),
                    }
                    .into());
                }
                all_chains.insert(chain_id, chain_config);
            }
        }

        config.chains = all_chains;
        config.validate()?;

        info!(
            "Loaded {} chains ({} enabled), default ping interval {}s, prober every {}s",
            config.chains.len(),
            config.enabled_chains().len(),
            config.default_ping_interval_seconds,
            config.prober_interval_seconds
        );

        Ok(config)
    }
}
