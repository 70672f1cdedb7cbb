//! Core game types: symbols, tiles, decks, state, configuration, RNG, errors.
//!
//! Nothing in here knows about timers or screens. The controller drives
//! these types; the view reads them.

pub mod error;
pub mod symbol;
pub mod tile;
pub mod config;
pub mod rng;
pub mod deck;
pub mod state;

pub use error::{GameError, Result};
pub use symbol::{SymbolId, CATALOG};
pub use tile::{Tile, TileState};
pub use config::{GameConfig, DEFAULT_COLUMNS, DEFAULT_RESOLUTION_DELAY_MS, DEFAULT_TILE_COUNT};
pub use rng::GameRng;
pub use deck::{Deck, FaceUp};
pub use state::GameState;
