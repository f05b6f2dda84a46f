//! Deck builder property tests.

use std::collections::HashMap;

use proptest::prelude::*;

use tile_match::{build_deck, GameError, GameRng, Symbol, TileId};

fn pool(n: u32) -> Vec<Symbol> {
    (0..n).map(Symbol::new).collect()
}

proptest! {
    /// For all even tile counts the pool can cover: every symbol appears
    /// exactly twice, identities are dense, and all tiles start hidden.
    #[test]
    fn built_decks_are_well_formed(pairs in 1usize..=30, seed in any::<u64>()) {
        let tile_count = pairs * 2;
        let mut rng = GameRng::new(seed);
        let deck = build_deck(tile_count, &pool(30), &mut rng).unwrap();

        prop_assert_eq!(deck.len(), tile_count);
        prop_assert_eq!(deck.pair_count(), pairs);

        let mut counts: HashMap<Symbol, usize> = HashMap::new();
        for (pos, tile) in deck.iter().enumerate() {
            prop_assert_eq!(tile.id, TileId::new(pos as u32));
            prop_assert!(tile.is_hidden());
            *counts.entry(tile.symbol).or_default() += 1;
        }
        prop_assert_eq!(counts.len(), pairs);
        prop_assert!(counts.values().all(|&c| c == 2));
    }

    /// Odd and zero tile counts always fail, regardless of seed or pool.
    #[test]
    fn odd_counts_are_rejected(pairs in 0usize..=30, seed in any::<u64>()) {
        let tile_count = pairs * 2 + 1;
        let mut rng = GameRng::new(seed);
        let result = build_deck(tile_count, &pool(100), &mut rng);
        prop_assert_eq!(result.unwrap_err(), GameError::InvalidTileCount(tile_count));

        let mut rng = GameRng::new(seed);
        let result = build_deck(0, &pool(100), &mut rng);
        prop_assert_eq!(result.unwrap_err(), GameError::InvalidTileCount(0));
    }

    /// Chosen symbols are always a subset of the pool.
    #[test]
    fn symbols_come_from_the_pool(pairs in 1usize..=10, seed in any::<u64>()) {
        let pool = pool(12);
        let mut rng = GameRng::new(seed);
        let deck = build_deck(pairs * 2, &pool, &mut rng).unwrap();

        prop_assert!(deck.iter().all(|t| pool.contains(&t.symbol)));
    }
}

#[test]
fn requesting_more_pairs_than_symbols_fails() {
    let mut rng = GameRng::new(0);
    assert_eq!(
        build_deck(8, &pool(3), &mut rng).unwrap_err(),
        GameError::InsufficientSymbols {
            requested: 4,
            available: 3,
        }
    );
}

#[test]
fn same_seed_same_deck_different_seed_different_deck() {
    let layout = |seed: u64| -> Vec<u32> {
        let mut rng = GameRng::new(seed);
        build_deck(24, &pool(40), &mut rng)
            .unwrap()
            .iter()
            .map(|t| t.symbol.raw())
            .collect()
    };

    assert_eq!(layout(7), layout(7));
    assert_ne!(layout(7), layout(8));
}

#[test]
fn shuffle_separates_pairs() {
    // With 12 pairs the odds of every pair landing adjacent are
    // astronomically small; a sorted layout would mean no shuffle ran.
    let mut rng = GameRng::new(3);
    let deck = build_deck(24, &pool(40), &mut rng).unwrap();

    let adjacent_pairs = deck
        .iter()
        .zip(deck.iter().skip(1))
        .step_by(2)
        .filter(|(a, b)| a.symbol == b.symbol)
        .count();
    assert!(adjacent_pairs < 12);
}
