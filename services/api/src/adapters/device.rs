//! services/api/src/adapters/device.rs
//!
//! Stand-ins for the device integrations a mobile shell would provide:
//! clipboard, share sheet and haptics. The shell has no device, so the
//! clipboard is an in-memory buffer the client writes to, shares are logged,
//! and haptic events become trace records.

use async_trait::async_trait;
use linkshare_core::ports::{Clipboard, Haptic, HapticFeedback, PortResult, ShareDispatcher};
use tokio::sync::RwLock;
use tracing::{debug, info};

//=========================================================================================
// Clipboard
//=========================================================================================

#[derive(Default)]
pub struct MemoryClipboard {
    text: RwLock<String>,
}

impl MemoryClipboard {
    pub async fn set_text(&self, text: impl Into<String>) {
        *self.text.write().await = text.into();
    }
}

#[async_trait]
impl Clipboard for MemoryClipboard {
    async fn read_text(&self) -> PortResult<String> {
        Ok(self.text.read().await.clone())
    }
}

//=========================================================================================
// Share Sheet
//=========================================================================================

#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingShareAdapter;

#[async_trait]
impl ShareDispatcher for LoggingShareAdapter {
    async fn share(&self, url: &str) -> PortResult<()> {
        info!("Share requested for {}", url);
        Ok(())
    }
}

//=========================================================================================
// Haptics
//=========================================================================================

#[derive(Debug, Default, Clone, Copy)]
pub struct TracingHaptics;

impl HapticFeedback for TracingHaptics {
    fn emit(&self, feedback: Haptic) {
        debug!(?feedback, "haptic");
    }
}
