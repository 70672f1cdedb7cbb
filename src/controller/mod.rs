//! Game controller: flip handling, deferred resolution, hooks and history.
//!
//! ## Flip state machine
//!
//! - Face-down tile, nothing face up: the tile turns face up.
//! - Face-down tile, one tile face up: the tile turns face up, a try is
//!   counted, a match fires the celebration hook, and a resolution is
//!   scheduled `resolution_delay` later.
//! - Anything else is ignored and reported as `FlipOutcome::Ignored`.
//!
//! The resolution turns both face-up tiles matched or back face down. If
//! that leaves every tile matched, the completion hook fires on the next
//! tick.

mod event;
mod game;
mod hooks;

pub use event::{EventRecord, GameEvent};
pub use game::{FlipOutcome, GameController, IgnoreReason};
pub use hooks::{Celebration, GameHooks, NoHooks, Signal, SignalBuffer};
