//! Game state: the deck and the try counter.
//!
//! The deck starts undealt and is built on first render. Once dealt it keeps
//! its order for the rest of the game.

use serde::{Deserialize, Serialize};

use super::deck::{Deck, FaceUp};
use super::error::Result;
use super::rng::GameRng;
use super::tile::TileState;

/// State owned by one game instance.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    deck: Option<Deck>,

    /// Completed pair evaluations. Never decremented.
    pub try_count: u32,
}

impl GameState {
    /// A fresh state with no deck dealt yet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A state with a pre-built deck.
    #[must_use]
    pub fn with_deck(deck: Deck) -> Self {
        Self {
            deck: Some(deck),
            try_count: 0,
        }
    }

    #[must_use]
    pub fn deck(&self) -> Option<&Deck> {
        self.deck.as_ref()
    }

    pub(crate) fn deck_mut(&mut self) -> Option<&mut Deck> {
        self.deck.as_mut()
    }

    #[must_use]
    pub fn is_dealt(&self) -> bool {
        self.deck.is_some()
    }

    /// Return the deck, building it on first use.
    ///
    /// Later calls return the existing deck untouched, whatever `tile_count`
    /// they pass; the size is still validated so a bad caller hears about it.
    ///
    /// # Errors
    ///
    /// `InvalidConfiguration` from `Deck::build`.
    pub fn deal(&mut self, tile_count: usize, rng: &mut GameRng) -> Result<&Deck> {
        super::config::validate_tile_count(tile_count)?;

        let deck = match self.deck.take() {
            Some(deck) => deck,
            None => Deck::build(tile_count, rng)?,
        };
        Ok(self.deck.insert(deck))
    }

    /// Indices of the tiles currently face up.
    #[must_use]
    pub fn face_up(&self) -> FaceUp {
        self.deck
            .iter()
            .flat_map(|deck| deck.iter().enumerate())
            .filter(|(_, tile)| tile.state == TileState::FaceUp)
            .map(|(index, _)| index)
            .collect()
    }

    /// Number of pairs already matched.
    #[must_use]
    pub fn matched_pairs(&self) -> usize {
        self.deck.as_ref().map_or(0, |d| d.count_in(TileState::Matched) / 2)
    }

    /// True once a dealt deck has every tile matched.
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.deck.as_ref().is_some_and(Deck::all_matched)
    }
}
