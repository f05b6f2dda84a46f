//! The deck: an ordered set of paired tiles for one game session.
//!
//! A `Deck` is built once per game by [`builder::build`] and is immutable
//! in composition - symbols and order are fixed - though individual tile
//! state mutates as the game progresses. Only the engine mutates tiles;
//! the host sees read-only views.

pub mod builder;

use rustc_hash::FxHashMap;

use crate::core::{Tile, TileId};

/// Ordered sequence of tiles for one game.
#[derive(Clone, Debug)]
pub struct Deck {
    tiles: Vec<Tile>,
    /// Tile identity to deck position.
    index: FxHashMap<TileId, usize>,
}

impl Deck {
    /// Wrap a built tile sequence.
    pub(crate) fn new(tiles: Vec<Tile>) -> Self {
        let index = tiles
            .iter()
            .enumerate()
            .map(|(pos, tile)| (tile.id, pos))
            .collect();
        Self { tiles, index }
    }

    /// Number of tiles in the deck.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Is the deck empty?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Number of symbol pairs in the deck.
    #[must_use]
    pub fn pair_count(&self) -> usize {
        self.tiles.len() / 2
    }

    /// Tile at a deck position, or `None` if out of range.
    #[must_use]
    pub fn get(&self, position: usize) -> Option<&Tile> {
        self.tiles.get(position)
    }

    /// Deck position of a tile identity, or `None` for unknown ids.
    #[must_use]
    pub fn position_of(&self, id: TileId) -> Option<usize> {
        self.index.get(&id).copied()
    }

    /// Tile by identity, or `None` for unknown ids.
    #[must_use]
    pub fn tile(&self, id: TileId) -> Option<&Tile> {
        self.position_of(id).and_then(|pos| self.tiles.get(pos))
    }

    /// Mutable tile by identity. Engine-internal: all state changes flow
    /// through the matching engine's operations.
    pub(crate) fn tile_mut(&mut self, id: TileId) -> Option<&mut Tile> {
        let pos = self.position_of(id)?;
        self.tiles.get_mut(pos)
    }

    /// Iterate over tiles in deck order.
    pub fn iter(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter()
    }
}
