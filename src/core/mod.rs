//! Core engine types: tiles, symbols, RNG, configuration, errors.
//!
//! These are the fundamental building blocks shared by the deck builder
//! and the matching engine. Hosts configure policy via `EngineConfig`
//! rather than globals.

pub mod config;
pub mod error;
pub mod rng;
pub mod tile;

pub use config::{EngineConfig, DEFAULT_HIDE_DELAY};
pub use error::GameError;
pub use rng::GameRng;
pub use tile::{Symbol, Tile, TileId, TileState};
