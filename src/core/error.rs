//! Error taxonomy for the engine's caller-facing operations.
//!
//! Only `start_game` can fail. Stale or out-of-range `select_tile` calls
//! are expected UI races (a tap landing during the mismatch-hide delay, or
//! after the session stopped) and are silently absorbed instead.

use thiserror::Error;

/// Errors surfaced to the host.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    /// The requested tile count cannot form pairs.
    #[error("invalid tile count {0}: must be a positive even number")]
    InvalidTileCount(usize),

    /// The symbol pool cannot cover the requested pair count.
    #[error("insufficient symbols: {requested} pairs requested but only {available} symbols available")]
    InsufficientSymbols {
        /// Pairs the caller asked for (`tile_count / 2`).
        requested: usize,
        /// Distinct symbols in the pool.
        available: usize,
    },
}
