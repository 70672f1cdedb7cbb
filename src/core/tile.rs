//! Tiles and their visibility state.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::error::GameError;
use super::symbol::SymbolId;

/// Visibility state of a single tile.
///
/// ```text
/// FaceDown --flip--> FaceUp --resolve(match)----> Matched
///                    FaceUp --resolve(mismatch)-> FaceDown
/// ```
///
/// `Matched` is terminal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TileState {
    #[default]
    FaceDown,
    FaceUp,
    Matched,
}

impl TileState {
    /// Stable lowercase name, the inverse of `from_str`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            TileState::FaceDown => "face_down",
            TileState::FaceUp => "face_up",
            TileState::Matched => "matched",
        }
    }

    /// True once the tile shows its symbol (face up or matched).
    #[must_use]
    pub const fn is_revealed(self) -> bool {
        !matches!(self, TileState::FaceDown)
    }
}

impl FromStr for TileState {
    type Err = GameError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "face_down" => Ok(TileState::FaceDown),
            "face_up" => Ok(TileState::FaceUp),
            "matched" => Ok(TileState::Matched),
            other => {
                tracing::error!(raw = other, "unknown tile state");
                Err(GameError::invalid_state(other))
            }
        }
    }
}

impl TryFrom<u8> for TileState {
    type Error = GameError;

    fn try_from(raw: u8) -> Result<Self, Self::Error> {
        match raw {
            0 => Ok(TileState::FaceDown),
            1 => Ok(TileState::FaceUp),
            2 => Ok(TileState::Matched),
            other => {
                tracing::error!(raw = other, "unknown tile state discriminant");
                Err(GameError::invalid_state(other.to_string()))
            }
        }
    }
}

impl std::fmt::Display for TileState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One cell of the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tile {
    pub symbol: SymbolId,
    pub state: TileState,
}

impl Tile {
    /// A face-down tile.
    #[must_use]
    pub const fn new(symbol: SymbolId) -> Self {
        Self {
            symbol,
            state: TileState::FaceDown,
        }
    }

    #[must_use]
    pub const fn is_face_up(&self) -> bool {
        matches!(self.state, TileState::FaceUp)
    }

    #[must_use]
    pub const fn is_matched(&self) -> bool {
        matches!(self.state, TileState::Matched)
    }
}
