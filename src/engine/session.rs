//! Per-game session state.
//!
//! A `GameSession` is created by `start_game` and replaced wholesale by the
//! next one. It exclusively owns its deck and all tiles; mutation happens
//! only through the engine's operations. Dropping the session (stop or new
//! game) structurally cancels any pending deferred hide - there is no timer
//! object to invalidate.

use std::time::Duration;

use smallvec::SmallVec;

use crate::core::TileId;
use crate::deck::Deck;

/// A mismatch hide scheduled at resolution time.
///
/// While pending, no new tile may enter the selection; the engine's
/// "resolution pending" no-op rule enforces this.
#[derive(Clone, Debug)]
pub(crate) struct PendingHide {
    /// The mismatched pair to flip back.
    pub tiles: [TileId; 2],
    /// Delay left before the hide fires.
    pub remaining: Duration,
}

/// State of one run of the game, from start to end or stop.
#[derive(Clone, Debug)]
pub struct GameSession {
    pub(crate) deck: Deck,
    /// Accumulated while running; frozen on end or stop.
    pub(crate) elapsed: Duration,
    pub(crate) running: bool,
    /// Decrements only on confirmed matches; 0 is the sole terminal
    /// condition.
    pub(crate) remaining_pairs: usize,
    /// Tiles revealed but not yet resolved (0..=2).
    pub(crate) selection: SmallVec<[TileId; 2]>,
    pub(crate) pending_hide: Option<PendingHide>,
}

impl GameSession {
    /// Start a session over a freshly built deck.
    pub(crate) fn new(deck: Deck) -> Self {
        let remaining_pairs = deck.pair_count();
        Self {
            deck,
            elapsed: Duration::ZERO,
            running: true,
            remaining_pairs,
            selection: SmallVec::new(),
            pending_hide: None,
        }
    }

    /// Freeze the session: stop the clock and drop any deferred hide.
    pub(crate) fn stop(&mut self) {
        self.running = false;
        self.pending_hide = None;
    }

    /// Is a mismatch resolution pending?
    pub(crate) fn resolution_pending(&self) -> bool {
        self.pending_hide.is_some()
    }
}
