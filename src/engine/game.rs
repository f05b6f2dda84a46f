//! The matching engine: command surface, resolution rules, timing.
//!
//! The engine cooperates with a host-driven event/timer loop. Commands
//! (`start_game`, `select_tile`, `stop_game`) arrive from the host; time
//! arrives through `advance`, which the host calls from its periodic tick
//! (e.g. every 10 ms). Notifications flow back through a drained FIFO
//! queue. Single logical thread of control throughout; if embedded in a
//! concurrent host, wrap the engine in a single-owner actor or mutex.

use std::collections::VecDeque;
use std::time::Duration;

use crate::core::{EngineConfig, GameError, GameRng, Symbol, Tile, TileId, TileState};
use crate::deck::{self, Deck};

use super::event::GameEvent;
use super::session::{GameSession, PendingHide};

/// The tile-matching memory game engine.
///
/// Owns the symbol pool, the deterministic RNG, the current session, and
/// the notification queue. All tile mutation flows through its operations.
#[derive(Debug)]
pub struct MatchEngine {
    pool: Vec<Symbol>,
    config: EngineConfig,
    rng: GameRng,
    session: Option<GameSession>,
    events: VecDeque<GameEvent>,
}

impl MatchEngine {
    /// Create an engine over a pool of distinct symbols.
    ///
    /// The pool must hold distinct symbols; decks sample from it without
    /// replacement. A fixed seed reproduces identical decks.
    #[must_use]
    pub fn new(pool: Vec<Symbol>, config: EngineConfig, seed: u64) -> Self {
        Self {
            pool,
            config,
            rng: GameRng::new(seed),
            session: None,
            events: VecDeque::new(),
        }
    }

    // === Commands ===

    /// Start a new game with `tile_count` tiles.
    ///
    /// Builds a fresh shuffled deck, resets the clock, and emits
    /// `GameStarted`. Any previous session - including its pending
    /// mismatch hide - is discarded. On error the previous session is
    /// left untouched.
    ///
    /// # Errors
    ///
    /// - `InvalidTileCount` if `tile_count` is zero or odd.
    /// - `InsufficientSymbols` if the pool cannot cover `tile_count / 2`
    ///   pairs.
    pub fn start_game(&mut self, tile_count: usize) -> Result<(), GameError> {
        let deck = deck::builder::build(tile_count, &self.pool, &mut self.rng)?;

        log::debug!(
            "game started: {tile_count} tiles, {} pairs",
            deck.pair_count()
        );
        self.session = Some(GameSession::new(deck));
        self.events.push_back(GameEvent::GameStarted);
        Ok(())
    }

    /// Start a fresh game with the same tile count as the current one.
    ///
    /// New shuffle, reset clock, `GameStarted` emitted again.
    ///
    /// # Errors
    ///
    /// `InvalidTileCount(0)` if no game has ever been started.
    pub fn restart_game(&mut self) -> Result<(), GameError> {
        self.start_game(self.tile_count())
    }

    /// Stop the current game.
    ///
    /// Freezes the clock, cancels any pending mismatch hide, and emits
    /// nothing (the host initiated the stop). Idempotent; a no-op if no
    /// game is active.
    pub fn stop_game(&mut self) {
        if let Some(session) = self.session.as_mut() {
            if session.running {
                log::debug!("game stopped after {:?}", session.elapsed);
            }
            session.stop();
        }
    }

    /// Forward a player tap on a tile.
    ///
    /// Silently ignored when no game is running, when the tile is unknown,
    /// already `Revealed` or `Matched`, or while a mismatch resolution is
    /// pending - stale taps are expected UI races, not errors. Otherwise
    /// the tile flips face up (`TilesRevealed`), and a second revealed
    /// tile resolves immediately: a match marks both tiles `Matched` and
    /// may end the game; a mismatch schedules the deferred hide.
    pub fn select_tile(&mut self, id: TileId) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        if !session.running || session.resolution_pending() || session.selection.len() >= 2 {
            return;
        }
        match session.deck.tile(id) {
            Some(tile) if tile.is_hidden() => {}
            _ => return,
        }

        if let Some(tile) = session.deck.tile_mut(id) {
            tile.state = TileState::Revealed;
        }
        session.selection.push(id);
        log::trace!("{id} revealed");
        self.events.push_back(GameEvent::TilesRevealed(vec![id]));

        if session.selection.len() == 2 {
            self.resolve_selection();
        }
    }

    /// Advance game time by `dt`.
    ///
    /// Called from the host's periodic tick. Accumulates elapsed time
    /// while running and counts down the pending mismatch hide; when the
    /// delay expires the mismatched pair flips back (`TilesHidden`) and
    /// the selection clears. A no-op once the game has ended or stopped,
    /// so no notification can fire after the session is over.
    pub fn advance(&mut self, dt: Duration) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        if !session.running {
            return;
        }
        session.elapsed += dt;

        if let Some(pending) = session.pending_hide.as_mut() {
            if pending.remaining > dt {
                pending.remaining -= dt;
                return;
            }
            let tiles = pending.tiles;
            for id in tiles {
                if let Some(tile) = session.deck.tile_mut(id) {
                    tile.state = TileState::Hidden;
                }
            }
            session.selection.clear();
            session.pending_hide = None;
            log::trace!("mismatch hidden: {}, {}", tiles[0], tiles[1]);
            self.events.push_back(GameEvent::TilesHidden(tiles.to_vec()));
        }
    }

    /// Evaluate the full selection: match or mismatch.
    fn resolve_selection(&mut self) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        let (first, second) = (session.selection[0], session.selection[1]);
        let is_match = match (session.deck.tile(first), session.deck.tile(second)) {
            (Some(a), Some(b)) => a.symbol == b.symbol,
            _ => return,
        };

        if is_match {
            for id in [first, second] {
                if let Some(tile) = session.deck.tile_mut(id) {
                    tile.state = TileState::Matched;
                }
            }
            session.selection.clear();
            session.remaining_pairs -= 1;
            log::debug!(
                "matched {first} and {second}, {} pairs remaining",
                session.remaining_pairs
            );

            if session.remaining_pairs == 0 {
                session.running = false;
                let elapsed = session.elapsed;
                log::debug!("game ended after {:?}", elapsed);
                self.events.push_back(GameEvent::GameEnded { elapsed });
            }
        } else {
            // Matched tiles stay revealed forever; a mismatch flips back
            // only after the configured delay so the player can memorize
            // the pair. Selection stays full until the hide fires, which
            // blocks a third reveal mid-resolution.
            session.pending_hide = Some(PendingHide {
                tiles: [first, second],
                remaining: self.config.hide_delay,
            });
            log::trace!("mismatch: {first} vs {second}");
        }
    }

    // === Queries ===

    /// Tile at a deck position, or `None` if out of range or no game.
    #[must_use]
    pub fn tile_at(&self, position: usize) -> Option<&Tile> {
        self.session.as_ref()?.deck.get(position)
    }

    /// Deck position for a tile identity, or `None` for unknown ids.
    #[must_use]
    pub fn index_for_tile(&self, id: TileId) -> Option<usize> {
        self.session.as_ref()?.deck.position_of(id)
    }

    /// Current deck size; 0 before any game has started.
    #[must_use]
    pub fn tile_count(&self) -> usize {
        self.session.as_ref().map_or(0, |s| s.deck.len())
    }

    /// Pairs still unmatched; 0 before any game has started.
    #[must_use]
    pub fn remaining_pairs(&self) -> usize {
        self.session.as_ref().map_or(0, |s| s.remaining_pairs)
    }

    /// Time accumulated while running; frozen once the game ends or stops.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.session.as_ref().map_or(Duration::ZERO, |s| s.elapsed)
    }

    /// Is a game currently in progress?
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.session.as_ref().is_some_and(|s| s.running)
    }

    /// The deck of the current session, if any.
    #[must_use]
    pub fn deck(&self) -> Option<&Deck> {
        self.session.as_ref().map(|s| &s.deck)
    }

    // === Notifications ===

    /// Pop the oldest undelivered notification.
    pub fn next_event(&mut self) -> Option<GameEvent> {
        self.events.pop_front()
    }

    /// Drain all undelivered notifications, oldest first.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        self.events.drain(..).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine(pool_size: u32) -> MatchEngine {
        let pool: Vec<Symbol> = (0..pool_size).map(Symbol::new).collect();
        MatchEngine::new(pool, EngineConfig::default(), 42)
    }

    #[test]
    fn test_queries_before_start() {
        let engine = engine(10);

        assert_eq!(engine.tile_count(), 0);
        assert_eq!(engine.remaining_pairs(), 0);
        assert_eq!(engine.elapsed(), Duration::ZERO);
        assert!(!engine.is_running());
        assert!(engine.tile_at(0).is_none());
        assert!(engine.index_for_tile(TileId::new(0)).is_none());
        assert!(engine.deck().is_none());
    }

    #[test]
    fn test_start_game() {
        let mut engine = engine(10);
        engine.start_game(12).unwrap();

        assert!(engine.is_running());
        assert_eq!(engine.tile_count(), 12);
        assert_eq!(engine.remaining_pairs(), 6);
        assert_eq!(engine.drain_events(), vec![GameEvent::GameStarted]);
    }

    #[test]
    fn test_index_round_trip() {
        let mut engine = engine(10);
        engine.start_game(8).unwrap();

        for pos in 0..8 {
            let tile = *engine.tile_at(pos).unwrap();
            assert_eq!(engine.index_for_tile(tile.id), Some(pos));
        }
        assert!(engine.tile_at(8).is_none());
    }

    #[test]
    fn test_restart_requires_prior_game() {
        let mut engine = engine(10);
        assert_eq!(
            engine.restart_game().unwrap_err(),
            GameError::InvalidTileCount(0)
        );
    }

    #[test]
    fn test_restart_keeps_tile_count() {
        let mut engine = engine(10);
        engine.start_game(8).unwrap();
        engine.drain_events();

        engine.restart_game().unwrap();

        assert_eq!(engine.tile_count(), 8);
        assert_eq!(engine.remaining_pairs(), 4);
        assert!(engine.is_running());
        assert_eq!(engine.drain_events(), vec![GameEvent::GameStarted]);
    }

    #[test]
    fn test_select_ignored_when_not_running() {
        let mut engine = engine(10);
        engine.select_tile(TileId::new(0));
        assert!(engine.drain_events().is_empty());

        engine.start_game(4).unwrap();
        engine.stop_game();
        engine.drain_events();

        engine.select_tile(TileId::new(0));
        assert!(engine.drain_events().is_empty());
    }

    #[test]
    fn test_select_unknown_tile_ignored() {
        let mut engine = engine(10);
        engine.start_game(4).unwrap();
        engine.drain_events();

        engine.select_tile(TileId::new(99));

        assert!(engine.drain_events().is_empty());
    }

    #[test]
    fn test_elapsed_accumulates_only_while_running() {
        let mut engine = engine(10);
        engine.advance(Duration::from_millis(50));
        assert_eq!(engine.elapsed(), Duration::ZERO);

        engine.start_game(4).unwrap();
        engine.advance(Duration::from_millis(50));
        engine.advance(Duration::from_millis(30));
        assert_eq!(engine.elapsed(), Duration::from_millis(80));

        engine.stop_game();
        engine.advance(Duration::from_millis(500));
        assert_eq!(engine.elapsed(), Duration::from_millis(80));
    }
}
