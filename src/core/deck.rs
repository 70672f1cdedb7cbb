//! Deck construction.
//!
//! A deck is the ordered tile sequence for one game. The order is fixed
//! when the deck is built; afterwards only per-tile state changes.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::ops::Index;

use super::config::validate_tile_count;
use super::error::{GameError, Result};
use super::rng::GameRng;
use super::symbol::SymbolId;
use super::tile::{Tile, TileState};

/// Indices of face-up tiles. At most two by construction.
pub type FaceUp = SmallVec<[usize; 2]>;

/// The full ordered collection of tiles for one game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    tiles: Vec<Tile>,
}

impl Deck {
    /// Build a shuffled deck of `tile_count` face-down tiles.
    ///
    /// Takes the first `tile_count / 2` catalog symbols, doubles them and
    /// applies a uniform permutation.
    ///
    /// # Errors
    ///
    /// `InvalidConfiguration` if `tile_count` is odd or exceeds twice the
    /// catalog size.
    pub fn build(tile_count: usize, rng: &mut GameRng) -> Result<Self> {
        validate_tile_count(tile_count)?;

        let symbols = SymbolId::first(tile_count / 2).ok_or_else(|| {
            GameError::invalid_configuration(format!("not enough symbols for {tile_count} tiles"))
        })?;

        let mut tiles: Vec<Tile> = symbols
            .iter()
            .chain(symbols.iter())
            .copied()
            .map(Tile::new)
            .collect();
        rng.shuffle(&mut tiles);

        Ok(Self { tiles })
    }

    /// Build a deck with a fixed order, all tiles face down.
    ///
    /// # Errors
    ///
    /// `InvalidConfiguration` if any symbol does not appear exactly twice.
    pub fn from_symbols(symbols: &[SymbolId]) -> Result<Self> {
        let deck = Self {
            tiles: symbols.iter().copied().map(Tile::new).collect(),
        };

        if let Some((symbol, count)) = deck.symbol_counts().into_iter().find(|&(_, n)| n != 2) {
            return Err(GameError::invalid_configuration(format!(
                "symbol {symbol} appears {count} times, expected 2"
            )));
        }

        Ok(deck)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Tile> {
        self.tiles.get(index)
    }

    #[must_use]
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Tile> {
        self.tiles.iter()
    }

    /// Number of occurrences of each symbol.
    #[must_use]
    pub fn symbol_counts(&self) -> FxHashMap<SymbolId, usize> {
        let mut counts = FxHashMap::default();
        for tile in &self.tiles {
            *counts.entry(tile.symbol).or_insert(0) += 1;
        }
        counts
    }

    /// Number of tiles in the given state.
    #[must_use]
    pub fn count_in(&self, state: TileState) -> usize {
        self.tiles.iter().filter(|t| t.state == state).count()
    }

    /// True when every tile is matched.
    #[must_use]
    pub fn all_matched(&self) -> bool {
        self.tiles.iter().all(Tile::is_matched)
    }

    /// Set the state of one tile. Returns false for an out-of-range index.
    pub(crate) fn set_state(&mut self, index: usize, state: TileState) -> bool {
        match self.tiles.get_mut(index) {
            Some(tile) => {
                tile.state = state;
                true
            }
            None => false,
        }
    }

    /// Move every face-up tile to `state`; returns the indices touched.
    pub(crate) fn settle_face_up(&mut self, state: TileState) -> FaceUp {
        let mut touched = FaceUp::new();
        for (index, tile) in self.tiles.iter_mut().enumerate() {
            if tile.is_face_up() {
                tile.state = state;
                touched.push(index);
            }
        }
        touched
    }
}

impl Index<usize> for Deck {
    type Output = Tile;

    fn index(&self, index: usize) -> &Tile {
        &self.tiles[index]
    }
}

impl<'a> IntoIterator for &'a Deck {
    type Item = &'a Tile;
    type IntoIter = std::slice::Iter<'a, Tile>;

    fn into_iter(self) -> Self::IntoIter {
        self.tiles.iter()
    }
}
