//! Lifecycle notifications emitted by the engine.
//!
//! The engine never holds a reference to the host. It pushes `GameEvent`
//! values into an internal FIFO queue and the host drains them after each
//! command or tick - delivered in order, at most once per event.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::TileId;

/// A state-change notification for the host to render.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A new game began; the host should render the grid and start its
    /// elapsed-time display tick.
    GameStarted,

    /// The named tiles flipped face up.
    TilesRevealed(Vec<TileId>),

    /// The named tiles flipped back face down (mismatch resolved).
    TilesHidden(Vec<TileId>),

    /// All pairs matched. Carries the final elapsed time; the host stops
    /// polling and transitions to its results view.
    GameEnded {
        /// Raw duration; render with [`format_elapsed`] if desired.
        elapsed: Duration,
    },
}

/// Render a duration as `MM:SS.cc` (minutes, seconds, centiseconds).
///
/// Display helper for hosts; the engine itself only reports raw durations.
#[must_use]
pub fn format_elapsed(elapsed: Duration) -> String {
    let total_centis = elapsed.as_millis() / 10;
    let minutes = total_centis / 6000;
    let seconds = (total_centis / 100) % 60;
    let centis = total_centis % 100;
    format!("{minutes:02}:{seconds:02}.{centis:02}")
}
