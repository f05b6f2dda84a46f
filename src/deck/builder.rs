//! Deck construction.
//!
//! Given a requested tile count and a pool of distinct symbols, produce a
//! shuffled sequence of paired tiles:
//!
//! 1. Sample `tile_count / 2` distinct symbols from the pool, uniformly
//!    without replacement.
//! 2. Duplicate each chosen symbol once.
//! 3. Shuffle the combined sequence uniformly.
//! 4. Assign fresh identities `0..tile_count`, all tiles face down.
//!
//! Pure and deterministic given a seeded `GameRng`.

use crate::core::{GameError, GameRng, Symbol, Tile, TileId};

use super::Deck;

/// Build a shuffled deck of paired tiles.
///
/// # Errors
///
/// - `InvalidTileCount` if `tile_count` is zero or odd.
/// - `InsufficientSymbols` if the pool holds fewer than `tile_count / 2`
///   distinct symbols.
pub fn build(tile_count: usize, pool: &[Symbol], rng: &mut GameRng) -> Result<Deck, GameError> {
    if tile_count == 0 || tile_count % 2 != 0 {
        return Err(GameError::InvalidTileCount(tile_count));
    }

    let pairs = tile_count / 2;
    if pairs > pool.len() {
        return Err(GameError::InsufficientSymbols {
            requested: pairs,
            available: pool.len(),
        });
    }

    let mut symbols = Vec::with_capacity(tile_count);
    for idx in rng.sample_indices(pool.len(), pairs) {
        symbols.push(pool[idx]);
        symbols.push(pool[idx]);
    }
    rng.shuffle(&mut symbols);

    let tiles = symbols
        .into_iter()
        .enumerate()
        .map(|(pos, symbol)| Tile::new(TileId::new(pos as u32), symbol))
        .collect();

    Ok(Deck::new(tiles))
}
