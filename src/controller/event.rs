//! Game history.
//!
//! Each accepted input and each fired task leaves one record, stamped with
//! the virtual time it happened at. Rejected clicks are not recorded.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::core::{FaceUp, SymbolId};

/// Something that changed the game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// The deck was built.
    Dealt { tile_count: usize },

    /// First tile of a pair turned face up.
    Flipped { index: usize, symbol: SymbolId },

    /// Second tile of a pair turned face up; one try spent.
    PairRevealed {
        first: usize,
        second: usize,
        matched: bool,
        try_count: u32,
    },

    /// The pending pair settled.
    Resolved { indices: FaceUp, matched: bool },

    /// The completion hook fired.
    Completed { try_count: u32 },
}

/// A `GameEvent` with its virtual timestamp.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecord {
    pub at: Duration,
    pub event: GameEvent,
}

impl EventRecord {
    #[must_use]
    pub fn new(at: Duration, event: GameEvent) -> Self {
        Self { at, event }
    }
}
