//! Load phases and request tokens shared by every orchestrator
//!
//! Orchestrators never cancel in-flight requests. Instead each operation
//! takes a token from [`RequestTokens`] and only applies its result if the
//! token is still the latest one issued.

use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};

/// Where a state machine is in its load cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    #[default]
    Idle,
    Loading,
    Ready,
    Failed,
}

/// Monotonic token source for one state machine
#[derive(Debug, Default)]
pub struct RequestTokens {
    latest: AtomicU64,
}

impl RequestTokens {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a new token, superseding every earlier one
    pub fn issue(&self) -> u64 {
        self.latest.fetch_add(1, Ordering::SeqCst) + 1
    }

    pub fn is_current(&self, token: u64) -> bool {
        self.latest.load(Ordering::SeqCst) == token
    }
}
