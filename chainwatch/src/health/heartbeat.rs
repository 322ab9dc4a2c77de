// File: chainwatch/src/health/heartbeat.rs

use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

/// Last-seen timestamp and expected ping interval for one chain
#[derive(Debug, Clone)]
pub struct HeartbeatRecord {
    pub last_seen: DateTime<Utc>,
    pub ping_interval: Duration,
}

impl HeartbeatRecord {
    fn is_alive_at(&self, now: DateTime<Utc>) -> bool {
        // A last_seen in the future (clock step) counts as zero elapsed
        let elapsed = (now - self.last_seen).to_std().unwrap_or_default();
        elapsed <= self.ping_interval
    }
}

/// Source of truth for when each chain was last heard from.
///
/// Every lookup for an unregistered chain degrades to `false`/`None`;
/// nothing here returns an error.
pub struct HeartbeatRegistry {
    records: Arc<RwLock<HashMap<String, HeartbeatRecord>>>,
    default_ping_interval: Duration,
}

impl HeartbeatRegistry {
    pub fn new(default_ping_interval: Duration) -> Self {
        Self {
            records: Arc::new(RwLock::new(HashMap::with_capacity(16))),
            default_ping_interval,
        }
    }

    pub fn default_ping_interval(&self) -> Duration {
        self.default_ping_interval
    }

    /// Returns `true` if a record was inserted. An existing record is left untouched.
    pub async fn register(&self, chain_id: &str, ping_interval: Option<Duration>) -> bool {
        let mut records = self.records.write().await;
        if records.contains_key(chain_id) {
            info!("Chain '{}' already registered", chain_id);
            return false;
        }

        let ping_interval = ping_interval
            .filter(|interval| !interval.is_zero())
            .unwrap_or(self.default_ping_interval);

        records.insert(
            chain_id.to_string(),
            HeartbeatRecord {
                last_seen: Utc::now(),
                ping_interval,
            },
        );

        info!(
            "Chain '{}' registered with ping interval {:?}",
            chain_id, ping_interval
        );
        true
    }

    pub async fn unregister(&self, chain_id: &str) -> bool {
        let mut records = self.records.write().await;
        if records.remove(chain_id).is_some() {
            info!("Chain '{}' unregistered", chain_id);
            true
        } else {
            debug!("Chain '{}' not found, nothing to unregister", chain_id);
            false
        }
    }

    pub async fn ping(&self, chain_id: &str) -> bool {
        let mut records = self.records.write().await;
        match records.get_mut(chain_id) {
            Some(record) => {
                record.last_seen = Utc::now();
                debug!("Chain '{}' pinged at {}", chain_id, record.last_seen);
                true
            }
            None => {
                warn!("Chain '{}' not registered, ignoring ping", chain_id);
                false
            }
        }
    }

    pub async fn last_seen(&self, chain_id: &str) -> Option<DateTime<Utc>> {
        let records = self.records.read().await;
        records.get(chain_id).map(|record| record.last_seen)
    }

    pub async fn ping_interval(&self, chain_id: &str) -> Option<Duration> {
        let records = self.records.read().await;
        records.get(chain_id).map(|record| record.ping_interval)
    }

    /// Inclusive: alive while `now - last_seen <= ping_interval`.
    pub async fn is_alive(&self, chain_id: &str) -> bool {
        let records = self.records.read().await;
        records
            .get(chain_id)
            .map(|record| record.is_alive_at(Utc::now()))
            .unwrap_or(false)
    }

    pub async fn is_registered(&self, chain_id: &str) -> bool {
        let records = self.records.read().await;
        records.contains_key(chain_id)
    }

    pub async fn snapshot(&self, chain_id: &str) -> Option<HeartbeatRecord> {
        let records = self.records.read().await;
        records.get(chain_id).cloned()
    }

    /// Registered chain ids in sorted order.
    pub async fn registered_chains(&self) -> Vec<String> {
        let records = self.records.read().await;
        let mut chains: Vec<String> = records.keys().cloned().collect();
        chains.sort();
        chains
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

impl Clone for HeartbeatRegistry {
    fn clone(&self) -> Self {
        Self {
            records: self.records.clone(),
            default_ping_interval: self.default_ping_interval,
        }
    }
}

impl Default for HeartbeatRegistry {
    fn default() -> Self {
        Self::new(Duration::from_secs(
            crate::constants::defaults::PING_INTERVAL_SECONDS,
        ))
    }
}
