//! services/api/src/adapters/unfurl.rs
//!
//! Preview generator adapters. The shell has no real link unfurling: the
//! simulated adapter waits a fixed delay and then synthesizes metadata in
//! process. The timeout adapter turns a stalled generator into a failure.

use async_trait::async_trait;
use linkshare_core::domain::PreviewDraft;
use linkshare_core::ports::{PortError, PortResult, PreviewGenerator};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

//=========================================================================================
// Simulated Latency
//=========================================================================================

/// Delays every generation by a fixed amount before delegating.
#[derive(Clone)]
pub struct SimulatedUnfurlAdapter {
    inner: Arc<dyn PreviewGenerator>,
    delay: Duration,
}

impl SimulatedUnfurlAdapter {
    pub fn new(inner: Arc<dyn PreviewGenerator>, delay: Duration) -> Self {
        Self { inner, delay }
    }
}

#[async_trait]
impl PreviewGenerator for SimulatedUnfurlAdapter {
    async fn generate(&self, url: &str) -> PortResult<PreviewDraft> {
        debug!("Simulating unfurl of {} ({} ms)", url, self.delay.as_millis());
        tokio::time::sleep(self.delay).await;
        self.inner.generate(url).await
    }
}

//=========================================================================================
// Timeout
//=========================================================================================

/// Fails generations that take longer than `limit`.
#[derive(Clone)]
pub struct TimeoutUnfurlAdapter {
    inner: Arc<dyn PreviewGenerator>,
    limit: Duration,
}

impl TimeoutUnfurlAdapter {
    pub fn new(inner: Arc<dyn PreviewGenerator>, limit: Duration) -> Self {
        Self { inner, limit }
    }
}

#[async_trait]
impl PreviewGenerator for TimeoutUnfurlAdapter {
    async fn generate(&self, url: &str) -> PortResult<PreviewDraft> {
        match tokio::time::timeout(self.limit, self.inner.generate(url)).await {
            Ok(outcome) => outcome,
            Err(_) => {
                warn!("Preview generation for {} timed out", url);
                Err(PortError::Timeout(self.limit.as_millis() as u64))
            }
        }
    }
}
