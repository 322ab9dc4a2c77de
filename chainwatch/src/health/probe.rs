//! Probe capability every monitored chain exposes

use anyhow::Result;
use async_trait::async_trait;
use reqwest::Client as HttpClient;
use tracing::debug;

use super::types::ChainStatusReport;
use crate::constants::probe::{PING_PATH, STATUS_PATH};
use crate::errors::ProbeError;

/// Active check against a running chain.
///
/// Both calls may suspend on network I/O and may fail. Callers treat a
/// failure, including a timeout, as the chain being unreachable.
#[async_trait]
pub trait ChainProbe: Send + Sync {
    /// `Ok(false)` means the chain answered but reported trouble.
    async fn ping(&self) -> Result<bool>;

    async fn get_status(&self) -> Result<ChainStatusReport>;
}

/// Probe that talks to `<base_url>/ping` and `<base_url>/status` over HTTP
pub struct HttpChainProbe {
    chain_id: String,
    base_url: String,
    client: HttpClient,
}

impl HttpChainProbe {
    pub fn new(chain_id: &str, base_url: &str, client: HttpClient) -> Self {
        Self {
            chain_id: chain_id.to_string(),
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    fn connection_failed(&self, err: reqwest::Error) -> ProbeError {
        ProbeError::ConnectionFailed {
            chain_id: self.chain_id.clone(),
            reason: err.to_string(),
        }
    }
}

#[async_trait]
impl ChainProbe for HttpChainProbe {
    async fn ping(&self) -> Result<bool> {
        let response = self
            .client
            .get(self.endpoint(PING_PATH))
            .send()
            .await
            .map_err(|e| self.connection_failed(e))?;

        let reachable_and_ok = response.status().is_success();
        if !reachable_and_ok {
            debug!(
                "Chain '{}' answered ping with HTTP {}",
                self.chain_id,
                response.status()
            );
        }
        Ok(reachable_and_ok)
    }

    async fn get_status(&self) -> Result<ChainStatusReport> {
        let response = self
            .client
            .get(self.endpoint(STATUS_PATH))
            .send()
            .await
            .map_err(|e| self.connection_failed(e))?;

        if !response.status().is_success() {
            return Err(ProbeError::InvalidResponse {
                chain_id: self.chain_id.clone(),
                reason: format!("HTTP error {}", response.status()),
            }
            .into());
        }

        let report: ChainStatusReport =
            response
                .json()
                .await
                .map_err(|e| ProbeError::InvalidResponse {
                    chain_id: self.chain_id.clone(),
                    reason: format!("Failed to parse JSON response: {}", e),
                })?;

        Ok(report)
    }
}
