// File: chainwatch/src/prober.rs

use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::health::HeartbeatRegistry;

/// Background task that refreshes every registered chain's heartbeat on a fixed tick.
///
/// Stands in for real inbound heartbeats. Every chain is pinged on every tick,
/// whatever its own ping interval is, so a registered chain never expires
/// while the prober runs.
pub struct PeriodicProber {
    heartbeats: Arc<HeartbeatRegistry>,
    tick_interval: Duration,
}

impl PeriodicProber {
    pub fn new(heartbeats: Arc<HeartbeatRegistry>, tick_interval: Duration) -> Self {
        Self {
            heartbeats,
            tick_interval,
        }
    }

    pub fn tick_interval(&self) -> Duration {
        self.tick_interval
    }

    /// Pings every currently registered chain once. Returns how many pings landed.
    pub async fn tick(&self) -> usize {
        let chains = self.heartbeats.registered_chains().await;
        let mut pinged = 0;
        for chain_id in &chains {
            // A chain unregistered since the listing is simply skipped
            if self.heartbeats.ping(chain_id).await {
                pinged += 1;
            }
        }
        debug!("Prober tick refreshed {}/{} chains", pinged, chains.len());
        pinged
    }

    /// Runs until the returned handle is aborted or the runtime shuts down.
    pub fn spawn(self) -> JoinHandle<()> {
        info!(
            "Starting periodic prober with {:?} tick",
            self.tick_interval
        );
        tokio::spawn(async move {
            // tokio panics on a zero period
            let period = self.tick_interval.max(Duration::from_millis(1));
            let mut interval = tokio::time::interval(period);
            // The first tick of a tokio interval fires immediately
            interval.tick().await;
            let mut tick_count = 0u64;

            loop {
                interval.tick().await;
                tick_count += 1;
                let pinged = self.tick().await;

                if tick_count % 100 == 0 {
                    info!(
                        "Prober cycle #{} - {} chains refreshed",
                        tick_count, pinged
                    );
                }
            }
        })
    }
}
