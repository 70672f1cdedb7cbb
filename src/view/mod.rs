//! Presentation: tile faces, the play board and the start screen.
//!
//! Everything here is a pure function of game state. Views never mutate
//! the game; clicks are forwarded through callbacks.

mod board;
mod start;
mod tile;

pub use board::BoardView;
pub use start::{StartScreen, PLAY_LABEL, TAGLINE, TITLE};
pub use tile::{render_tile, TileFace};
