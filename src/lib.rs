//! # tile-match
//!
//! A tile-matching memory game engine.
//!
//! A fixed-size deck of paired symbols is shuffled into a grid; the player
//! reveals two tiles at a time. Matching pairs stay revealed, non-matching
//! pairs flip back after a short delay, and the game ends when every pair
//! is matched, reporting elapsed time.
//!
//! ## Design Principles
//!
//! 1. **Engine only**: rendering, audio, input, score persistence, and
//!    difficulty menus are host concerns. The engine consumes commands
//!    and emits notifications.
//!
//! 2. **No ambient state**: the symbol pool, the mismatch-hide delay, and
//!    the RNG seed are explicit parameters. Same seed, same deck.
//!
//! 3. **Host-driven time**: the engine never reads the wall clock. The
//!    host feeds time through [`MatchEngine::advance`] from its periodic
//!    tick, which makes every timing behavior deterministic in tests.
//!
//! ## Modules
//!
//! - `core`: tile identities, symbols, states, RNG, configuration, errors
//! - `deck`: the deck builder and the `Deck` type
//! - `engine`: the matching engine, its session state, and notifications
//!
//! ## Example
//!
//! ```
//! use std::time::Duration;
//! use tile_match::{EngineConfig, GameEvent, MatchEngine, Symbol};
//!
//! let pool: Vec<Symbol> = (0..10).map(Symbol::new).collect();
//! let mut engine = MatchEngine::new(pool, EngineConfig::default(), 42);
//!
//! engine.start_game(12)?;
//! assert_eq!(engine.next_event(), Some(GameEvent::GameStarted));
//!
//! // Host loop: forward taps, tick time, render drained events.
//! engine.select_tile(engine.tile_at(0).unwrap().id);
//! engine.advance(Duration::from_millis(10));
//! for event in engine.drain_events() {
//!     match event {
//!         GameEvent::TilesRevealed(ids) => { /* flip face up */ }
//!         GameEvent::TilesHidden(ids) => { /* flip face down */ }
//!         GameEvent::GameEnded { elapsed } => { /* show results */ }
//!         GameEvent::GameStarted => { /* render grid */ }
//!     }
//! }
//! # Ok::<(), tile_match::GameError>(())
//! ```

pub mod core;
pub mod deck;
pub mod engine;

// Re-export commonly used types
pub use crate::core::{
    EngineConfig, GameError, GameRng, Symbol, Tile, TileId, TileState, DEFAULT_HIDE_DELAY,
};

pub use crate::deck::{builder::build as build_deck, Deck};

pub use crate::engine::{format_elapsed, GameEvent, GameSession, MatchEngine};
