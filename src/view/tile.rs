//! Single tile rendering.

use serde::{Deserialize, Serialize};

use crate::core::{SymbolId, Tile, TileState};

/// What one tile looks like on screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TileFace {
    /// Blank back. The only interactive face.
    Back { index: usize },
    /// Symbol on a highlighted background, waiting for resolution.
    Front { index: usize, symbol: SymbolId },
    /// Symbol in the solved style.
    Solved { index: usize, symbol: SymbolId },
}

/// Map a tile to its face. Total over `TileState`, so there is no invalid
/// state to reject here; raw states are rejected when parsed.
#[must_use]
pub fn render_tile(index: usize, tile: &Tile) -> TileFace {
    match tile.state {
        TileState::FaceDown => TileFace::Back { index },
        TileState::FaceUp => TileFace::Front {
            index,
            symbol: tile.symbol,
        },
        TileState::Matched => TileFace::Solved {
            index,
            symbol: tile.symbol,
        },
    }
}

impl TileFace {
    #[must_use]
    pub fn index(&self) -> usize {
        match *self {
            TileFace::Back { index }
            | TileFace::Front { index, .. }
            | TileFace::Solved { index, .. } => index,
        }
    }

    /// Glyph shown, if the symbol is visible.
    #[must_use]
    pub fn glyph(&self) -> Option<&'static str> {
        match self {
            TileFace::Back { .. } => None,
            TileFace::Front { symbol, .. } | TileFace::Solved { symbol, .. } => Some(symbol.glyph()),
        }
    }

    /// True if the face forwards clicks.
    #[must_use]
    pub fn is_interactive(&self) -> bool {
        matches!(self, TileFace::Back { .. })
    }

    /// Forward a click to `on_flip` if this face accepts clicks.
    ///
    /// Face-up and solved tiles have no click handler; the click is
    /// dropped and `on_flip` is not called.
    pub fn click<R>(&self, on_flip: impl FnOnce(usize) -> R) -> Option<R> {
        match *self {
            TileFace::Back { index } => Some(on_flip(index)),
            TileFace::Front { .. } | TileFace::Solved { .. } => None,
        }
    }

    /// Fixed-width text cell. Backs show the 1-based tile number players
    /// type to flip them.
    #[must_use]
    pub fn cell(&self) -> String {
        match self {
            TileFace::Back { index } => format!("[{:>2}]", index + 1),
            TileFace::Front { symbol, .. } => format!("<{} >", symbol.glyph()),
            TileFace::Solved { symbol, .. } => format!(" {}  ", symbol.glyph()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tile(state: TileState) -> Tile {
        Tile {
            symbol: SymbolId::Umbrella,
            state,
        }
    }

    #[test]
    fn test_face_down_renders_back() {
        let face = render_tile(3, &tile(TileState::FaceDown));

        assert_eq!(face, TileFace::Back { index: 3 });
        assert_eq!(face.glyph(), None);
        assert!(face.is_interactive());
        assert_eq!(face.cell(), "[ 4]");
    }

    #[test]
    fn test_face_up_renders_front() {
        let face = render_tile(0, &tile(TileState::FaceUp));

        assert_eq!(
            face,
            TileFace::Front {
                index: 0,
                symbol: SymbolId::Umbrella
            }
        );
        assert_eq!(face.glyph(), Some("☂"));
        assert!(!face.is_interactive());
    }

    #[test]
    fn test_matched_renders_solved() {
        let face = render_tile(5, &tile(TileState::Matched));

        assert!(matches!(face, TileFace::Solved { index: 5, .. }));
        assert_eq!(face.index(), 5);
        assert!(!face.is_interactive());
    }

    #[test]
    fn test_click_forwards_only_from_back() {
        let mut clicked = Vec::new();

        render_tile(1, &tile(TileState::FaceDown)).click(|i| clicked.push(i));
        render_tile(2, &tile(TileState::FaceUp)).click(|i| clicked.push(i));
        render_tile(3, &tile(TileState::Matched)).click(|i| clicked.push(i));

        assert_eq!(clicked, vec![1]);
    }
}
