// File: chainwatch/src/services/health_service.rs
use anyhow::{Context, Result};
use reqwest::Client as HttpClient;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::config::Config;
use crate::constants::api;
use crate::health::{
    build_dashboard, ChainHealthMonitor, ChainHealthReport, ChainProbe, Dashboard, HealthMonitor,
    HeartbeatRegistry, HttpChainProbe, ServiceStatus,
};

/// Owns the monitor collection and hands out health views.
///
/// Constructed once at startup and shared by handle with the HTTP layer;
/// the heartbeat registry handle is shared with the prober as well.
pub struct HealthService {
    config: Arc<Config>,
    heartbeats: Arc<HeartbeatRegistry>,
    monitors: RwLock<HashMap<String, Arc<ChainHealthMonitor>>>,
    client: HttpClient,
}

impl HealthService {
    pub fn new(config: Arc<Config>, heartbeats: Arc<HeartbeatRegistry>) -> Result<Self> {
        let client = HttpClient::builder()
            .timeout(config.probe_timeout())
            .build()
            .context("Failed to create probe HTTP client")?;

        Ok(Self {
            config,
            heartbeats,
            monitors: RwLock::new(HashMap::with_capacity(16)),
            client,
        })
    }

    pub fn heartbeats(&self) -> Arc<HeartbeatRegistry> {
        self.heartbeats.clone()
    }

    /// Registers the heartbeat and creates the monitor, with an HTTP probe when
    /// the chain's config names a probe URL.
    pub async fn register_chain(&self, chain_id: &str, ping_interval: Option<Duration>) {
        let probe = self.configured_probe(chain_id);
        self.add_monitor(chain_id, ping_interval, probe).await;
    }

    /// Same as `register_chain` with an explicit probe. An existing monitor is kept.
    ///
    /// Lock order is monitors, then registry, here and everywhere else.
    pub async fn add_monitor(
        &self,
        chain_id: &str,
        ping_interval: Option<Duration>,
        probe: Option<Arc<dyn ChainProbe>>,
    ) -> Arc<ChainHealthMonitor> {
        let mut monitors = self.monitors.write().await;
        self.heartbeats.register(chain_id, ping_interval).await;

        monitors
            .entry(chain_id.to_string())
            .or_insert_with(|| {
                debug!(
                    "Creating monitor for chain '{}' (probe: {})",
                    chain_id,
                    probe.is_some()
                );
                Arc::new(ChainHealthMonitor::new(
                    chain_id,
                    self.heartbeats.clone(),
                    probe,
                    self.config.probe_timeout(),
                ))
            })
            .clone()
    }

    /// Drops the monitor and the heartbeat record. Returns whether anything was removed.
    pub async fn unregister_chain(&self, chain_id: &str) -> bool {
        let mut monitors = self.monitors.write().await;
        let removed_monitor = monitors.remove(chain_id).is_some();
        let removed_heartbeat = self.heartbeats.unregister(chain_id).await;
        drop(monitors);

        if removed_monitor {
            info!("Stopped monitoring chain '{}'", chain_id);
        }
        removed_monitor || removed_heartbeat
    }

    /// Inbound heartbeat from a chain. Unknown chains are ignored.
    pub async fn record_heartbeat(&self, chain_id: &str) -> bool {
        self.heartbeats.ping(chain_id).await
    }

    pub async fn monitored_chains(&self) -> Vec<String> {
        let monitors = self.monitors.read().await;
        let mut chains: Vec<String> = monitors.keys().cloned().collect();
        chains.sort();
        chains
    }

    /// Liveness of the API itself, independent of any chain.
    pub fn get_overall_status(&self) -> ServiceStatus {
        ServiceStatus {
            status: api::OPERATIONAL_STATUS.to_string(),
            message: api::OPERATIONAL_MESSAGE.to_string(),
        }
    }

    /// Health of one chain. An unseen chain id gets a monitor on first query
    /// and is auto-registered with the default ping interval.
    pub async fn get_chain_health(&self, chain_id: &str) -> ChainHealthReport {
        let monitor = self.monitor_for(chain_id).await;
        let health = monitor.check().await;

        ChainHealthReport {
            chain_id: chain_id.to_string(),
            status: health.status,
            metrics: health.metrics,
        }
    }

    pub async fn get_dashboard(&self) -> Dashboard {
        // Snapshot the collection so no lock is held across probe calls
        let monitors: Vec<Arc<ChainHealthMonitor>> = {
            let monitors = self.monitors.read().await;
            monitors.values().cloned().collect()
        };
        build_dashboard(&monitors).await
    }

    async fn monitor_for(&self, chain_id: &str) -> Arc<ChainHealthMonitor> {
        {
            let monitors = self.monitors.read().await;
            if let Some(monitor) = monitors.get(chain_id) {
                // A record dropped behind the service's back is restored so the
                // chain can be pinged again
                if !self.heartbeats.is_registered(chain_id).await {
                    info!("Re-registering monitored chain '{}'", chain_id);
                    self.heartbeats.register(chain_id, None).await;
                }
                return monitor.clone();
            }
        }

        if !self.heartbeats.is_registered(chain_id).await {
            info!("Auto-registering chain '{}' on first health query", chain_id);
        }
        let probe = self.configured_probe(chain_id);
        self.add_monitor(chain_id, None, probe).await
    }

    fn configured_probe(&self, chain_id: &str) -> Option<Arc<dyn ChainProbe>> {
        let url = self.config.chains.get(chain_id)?.probe_url.as_deref()?;
        let probe: Arc<dyn ChainProbe> =
            Arc::new(HttpChainProbe::new(chain_id, url, self.client.clone()));
        Some(probe)
    }
}
