//! Control loop configuration.
//!
//! - `COTTON_TICK_MS`: pacing interval in milliseconds (default: 100)

use crate::types::TICK_MS;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoopConfig {
    pub tick_ms: u64,
}

impl Default for LoopConfig {
    fn default() -> Self {
        Self { tick_ms: TICK_MS }
    }
}

impl LoopConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let tick_ms = lookup("COTTON_TICK_MS")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(TICK_MS);
        Self { tick_ms }
    }

    /// No pacing; for headless runs and tests.
    pub fn unpaced() -> Self {
        Self { tick_ms: 0 }
    }
}
