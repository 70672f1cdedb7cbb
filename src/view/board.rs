//! Play screen rendering: try counter plus the tile grid.

use serde::{Deserialize, Serialize};

use super::tile::{render_tile, TileFace};
use crate::core::Deck;

/// Render-ready play screen.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardView {
    pub try_count: u32,
    pub columns: usize,
    pub faces: Vec<TileFace>,
}

impl BoardView {
    /// Render every tile of `deck`.
    #[must_use]
    pub fn new(deck: &Deck, try_count: u32, columns: usize) -> Self {
        Self {
            try_count,
            columns: columns.max(1),
            faces: deck
                .iter()
                .enumerate()
                .map(|(index, tile)| render_tile(index, tile))
                .collect(),
        }
    }

    /// Faces grouped into grid rows.
    pub fn rows(&self) -> impl Iterator<Item = &[TileFace]> {
        self.faces.chunks(self.columns)
    }

    #[must_use]
    pub fn face(&self, index: usize) -> Option<&TileFace> {
        self.faces.get(index)
    }

    /// Header line with the try counter.
    #[must_use]
    pub fn header(&self) -> String {
        format!("Tries  {}", self.try_count)
    }
}

impl std::fmt::Display for BoardView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.header())?;
        writeln!(f)?;
        for row in self.rows() {
            let cells: Vec<String> = row.iter().map(TileFace::cell).collect();
            writeln!(f, "  {}", cells.join(" "))?;
        }
        Ok(())
    }
}
