//! crates/linkshare_core/src/ports.rs
//!
//! Defines the service contracts (traits) the controllers depend on.
//! These traits form the boundary of the hexagonal architecture, allowing the core
//! to stay independent of device integrations, randomness and wall-clock time.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::PreviewDraft;

//=========================================================================================
// Generic Port Error and Result Types
//=========================================================================================

/// A generic error type for all port operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PortError {
    #[error("Operation timed out after {0} ms")]
    Timeout(u64),
    #[error("Device integration unavailable: {0}")]
    Unavailable(String),
    #[error("An unexpected error occurred: {0}")]
    Unexpected(String),
}

/// A convenience type alias for `Result<T, PortError>`.
pub type PortResult<T> = Result<T, PortError>;

//=========================================================================================
// Deterministic Seams
//=========================================================================================

/// Source of every random choice the core makes.
pub trait RandomSource: Send + Sync {
    /// Returns an index uniformly drawn from `0..len`. `len` is never zero.
    fn pick(&self, len: usize) -> usize;
}

pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

//=========================================================================================
// Asynchronous Service Ports
//=========================================================================================

#[async_trait]
pub trait PreviewGenerator: Send + Sync {
    /// Produces preview metadata for an already validated URL.
    async fn generate(&self, url: &str) -> PortResult<PreviewDraft>;
}

#[async_trait]
pub trait Clipboard: Send + Sync {
    /// Returns the current clipboard text, possibly empty.
    async fn read_text(&self) -> PortResult<String>;
}

#[async_trait]
pub trait ShareDispatcher: Send + Sync {
    /// Hands a URL to the platform share sheet. There is no response to await.
    async fn share(&self, url: &str) -> PortResult<()>;
}

//=========================================================================================
// Haptic Feedback
//=========================================================================================

/// Categorical feedback emitted alongside state transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Haptic {
    LightImpact,
    MediumImpact,
    Success,
    Warning,
    Error,
}

/// Purely advisory; implementations must never fail the caller.
pub trait HapticFeedback: Send + Sync {
    fn emit(&self, feedback: Haptic);
}
