//! Tile identities, symbols, and runtime tile state.
//!
//! Every tile in a deck has a `TileId` (its position in the deck, stable
//! for the life of the game) and a `Symbol` (an opaque pairing key).
//! Exactly two tiles per game share a given symbol.
//!
//! The engine doesn't interpret symbols - the host maps them to images.

use serde::{Deserialize, Serialize};

/// Unique identifier for a tile within one game.
///
/// A tile's id equals its position in the deck, so ids are stable and
/// dense: `0..tile_count`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TileId(pub u32);

impl TileId {
    /// Create a new tile ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl From<u32> for TileId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for TileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Tile({})", self.0)
    }
}

/// Opaque pairing key. The host assigns meaning (an image, a glyph).
///
/// Exactly two tiles per game carry the same symbol.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Symbol(pub u32);

impl Symbol {
    /// Create a new symbol.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Symbol({})", self.0)
    }
}

/// Visibility state of a single tile.
///
/// Transitions: `Hidden -> Revealed` on selection, `Revealed -> Matched`
/// on a confirmed pair, `Revealed -> Hidden` when a mismatch hide fires.
/// `Matched` is terminal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TileState {
    /// Face down; selectable.
    #[default]
    Hidden,
    /// Face up, awaiting match resolution.
    Revealed,
    /// Permanently face up; never re-enters selection.
    Matched,
}

/// One tile in a deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tile {
    /// Stable identity (position in the deck).
    pub id: TileId,

    /// Pairing key shared with exactly one other tile.
    pub symbol: Symbol,

    /// Current visibility state.
    pub state: TileState,
}

impl Tile {
    /// Create a fresh face-down tile.
    #[must_use]
    pub const fn new(id: TileId, symbol: Symbol) -> Self {
        Self {
            id,
            symbol,
            state: TileState::Hidden,
        }
    }

    /// Is this tile face down?
    #[must_use]
    pub fn is_hidden(&self) -> bool {
        self.state == TileState::Hidden
    }

    /// Is this tile face up but unresolved?
    #[must_use]
    pub fn is_revealed(&self) -> bool {
        self.state == TileState::Revealed
    }

    /// Has this tile been matched?
    #[must_use]
    pub fn is_matched(&self) -> bool {
        self.state == TileState::Matched
    }
}
