//! Collaborators the controller calls out to.
//!
//! The controller never decides what a celebration looks like or what
//! happens after a win. It calls `GameHooks` and moves on.

use serde::{Deserialize, Serialize};

use crate::core::SymbolId;

/// A celebration request, fired once per detected match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Celebration {
    /// Symbol of the matched pair.
    pub symbol: SymbolId,
    /// Particle lifetime, in animation ticks.
    pub ticks: u32,
}

/// External collaborators of a running game.
pub trait GameHooks {
    /// Fire-and-forget celebration, called synchronously when the second
    /// tile of a matching pair is revealed.
    fn celebrate(&mut self, celebration: Celebration);

    /// Called once, on the tick after the last pair becomes matched.
    fn end(&mut self);
}

/// Hooks that do nothing.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoHooks;

impl GameHooks for NoHooks {
    fn celebrate(&mut self, _celebration: Celebration) {}

    fn end(&mut self) {}
}

/// A hook call, as recorded by `SignalBuffer`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Signal {
    Celebrate(Celebration),
    End,
}

/// Hooks that queue every call for the host to drain.
///
/// Lets the owner of a controller react to hook calls without the
/// controller holding a reference back to its owner.
#[derive(Clone, Debug, Default)]
pub struct SignalBuffer {
    signals: Vec<Signal>,
}

impl SignalBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take all queued signals, oldest first.
    pub fn drain(&mut self) -> Vec<Signal> {
        std::mem::take(&mut self.signals)
    }

    #[must_use]
    pub fn signals(&self) -> &[Signal] {
        &self.signals
    }

    /// Number of `celebrate` calls queued.
    #[must_use]
    pub fn celebrations(&self) -> usize {
        self.signals
            .iter()
            .filter(|s| matches!(s, Signal::Celebrate(_)))
            .count()
    }

    /// Number of `end` calls queued.
    #[must_use]
    pub fn ends(&self) -> usize {
        self.signals.iter().filter(|s| matches!(s, Signal::End)).count()
    }
}

impl GameHooks for SignalBuffer {
    fn celebrate(&mut self, celebration: Celebration) {
        self.signals.push(Signal::Celebrate(celebration));
    }

    fn end(&mut self) {
        self.signals.push(Signal::End);
    }
}

impl<H: GameHooks + ?Sized> GameHooks for &mut H {
    fn celebrate(&mut self, celebration: Celebration) {
        (**self).celebrate(celebration);
    }

    fn end(&mut self) {
        (**self).end();
    }
}
