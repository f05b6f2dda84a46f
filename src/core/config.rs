//! Engine configuration.
//!
//! All policy values are explicit parameters - the engine reads no global
//! mutable state. Hosts construct an `EngineConfig` once and hand it to
//! `MatchEngine::new`.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Default mismatch-hide delay.
///
/// Long enough for the player to memorize the mismatched pair before it
/// flips back; short enough not to stall the game.
pub const DEFAULT_HIDE_DELAY: Duration = Duration::from_millis(800);

/// Configuration for a `MatchEngine`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// How long a mismatched pair stays face up before flipping back.
    pub hide_delay: Duration,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            hide_delay: DEFAULT_HIDE_DELAY,
        }
    }
}

impl EngineConfig {
    /// Create a configuration with default policy values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the mismatch-hide delay.
    #[must_use]
    pub fn with_hide_delay(mut self, delay: Duration) -> Self {
        self.hide_delay = delay;
        self
    }
}
