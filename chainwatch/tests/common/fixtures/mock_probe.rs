//! In-process probes with fixed behaviour

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use chainwatch::health::{ChainProbe, ChainStatusReport};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;

/// Answers ping with a fixed value and reports a fixed status
pub struct ScriptedProbe {
    pub ping_result: bool,
    pub report: ChainStatusReport,
    pub ping_calls: AtomicUsize,
}

impl ScriptedProbe {
    pub fn healthy() -> Self {
        Self::new(true)
    }

    /// Reachable, but ping signals trouble
    pub fn troubled() -> Self {
        Self::new(false)
    }

    fn new(ping_result: bool) -> Self {
        Self {
            ping_result,
            report: ChainStatusReport {
                response_time_ms: 50.0,
                error_rate: 0.01,
                status: "operational".to_string(),
                error: None,
            },
            ping_calls: AtomicUsize::new(0),
        }
    }

    pub fn ping_calls(&self) -> usize {
        self.ping_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ChainProbe for ScriptedProbe {
    async fn ping(&self) -> Result<bool> {
        self.ping_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.ping_result)
    }

    async fn get_status(&self) -> Result<ChainStatusReport> {
        Ok(self.report.clone())
    }
}

/// Every call fails as if the chain were unreachable
pub struct FailingProbe;

#[async_trait]
impl ChainProbe for FailingProbe {
    async fn ping(&self) -> Result<bool> {
        Err(anyhow!("connection refused"))
    }

    async fn get_status(&self) -> Result<ChainStatusReport> {
        Err(anyhow!("connection refused"))
    }
}

/// Healthy until switched into failure with `fail()`
pub struct FlakyProbe {
    inner: ScriptedProbe,
    failing: AtomicBool,
}

impl FlakyProbe {
    pub fn new() -> Self {
        Self {
            inner: ScriptedProbe::healthy(),
            failing: AtomicBool::new(false),
        }
    }

    pub fn fail(&self) {
        self.failing.store(true, Ordering::SeqCst);
    }
}

#[async_trait]
impl ChainProbe for FlakyProbe {
    async fn ping(&self) -> Result<bool> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(anyhow!("connection reset by peer"));
        }
        self.inner.ping().await
    }

    async fn get_status(&self) -> Result<ChainStatusReport> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(anyhow!("connection reset by peer"));
        }
        self.inner.get_status().await
    }
}

/// Answers correctly, but only after a delay
pub struct SlowProbe {
    pub delay: Duration,
}

#[async_trait]
impl ChainProbe for SlowProbe {
    async fn ping(&self) -> Result<bool> {
        tokio::time::sleep(self.delay).await;
        Ok(true)
    }

    async fn get_status(&self) -> Result<ChainStatusReport> {
        tokio::time::sleep(self.delay).await;
        Ok(ChainStatusReport::default())
    }
}
