//! # memory-match
//!
//! A memory-matching tile game: a board of face-down tiles hiding symbol
//! pairs, flipped two at a time until every pair is found.
//!
//! ## Design Principles
//!
//! 1. **One owner of state**: `GameController` is the only thing that
//!    mutates a game. Views are pure functions of its state.
//!
//! 2. **Explicit time**: deferred work (resolving a pair, signalling the
//!    win) is a task on a virtual clock, advanced by the host. Games are
//!    fully deterministic under a fixed seed and a fixed input sequence.
//!
//! 3. **Uniform shuffle**: decks are permuted with Fisher-Yates over a
//!    seeded ChaCha8 stream.
//!
//! ## Modules
//!
//! - `core`: Symbols, tiles, decks, state, configuration, RNG, errors
//! - `timer`: One-shot task queue on a virtual clock
//! - `controller`: Flip state machine, resolution, hooks, history
//! - `view`: Tile faces, the play board, the start screen
//! - `app`: Screen flow between start and play

pub mod core;
pub mod timer;
pub mod controller;
pub mod view;
pub mod app;

// Re-export commonly used types
pub use crate::core::{
    Deck, GameConfig, GameError, GameRng, GameState, Result,
    SymbolId, Tile, TileState, CATALOG,
};

pub use crate::timer::{Task, TaskQueue};

pub use crate::controller::{
    Celebration, EventRecord, FlipOutcome, GameController, GameEvent, GameHooks,
    IgnoreReason, NoHooks, Signal, SignalBuffer,
};

pub use crate::view::{render_tile, BoardView, StartScreen, TileFace};

pub use crate::app::{App, Finished, Screen};
