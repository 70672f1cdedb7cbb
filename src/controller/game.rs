//! The game controller: the only place game state changes.

use im::Vector;
use std::time::Duration;
use tracing::{debug, info, warn};

use super::event::{EventRecord, GameEvent};
use super::hooks::{Celebration, GameHooks, NoHooks};
use crate::core::{Deck, FaceUp, GameConfig, GameRng, GameState, Result, Tile, TileState};
use crate::timer::{ScheduledTask, Task, TaskQueue};
use crate::view::BoardView;

/// Why a flip was ignored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IgnoreReason {
    /// No deck yet; the board has not been rendered.
    NotDealt,
    /// Index past the end of the deck.
    OutOfRange,
    /// Tile is already face up or matched.
    AlreadyRevealed,
    /// Two tiles are face up and waiting for resolution.
    PairPending,
}

/// Result of `GameController::flip`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlipOutcome {
    /// First tile of a pair turned face up.
    Revealed { index: usize },
    /// Second tile turned face up; a resolution is scheduled.
    PairRevealed {
        first: usize,
        second: usize,
        matched: bool,
    },
    /// Nothing changed.
    Ignored(IgnoreReason),
}

impl FlipOutcome {
    /// True if the flip changed the board.
    #[must_use]
    pub fn is_accepted(&self) -> bool {
        !matches!(self, FlipOutcome::Ignored(_))
    }
}

/// Owns one game: deck, try counter, pending timers and hooks.
///
/// ## Input lock
///
/// While two tiles are face up every flip is ignored. Since resolution is
/// the only way out of `FaceUp`, at most one resolution can be pending.
///
/// ## Time
///
/// The controller runs on a virtual clock. Hosts call `advance` with the
/// real time that passed; due tasks fire in order and read the state as it
/// is at that moment.
///
/// ```
/// use std::time::Duration;
/// use memory_match::controller::{FlipOutcome, GameController};
/// use memory_match::core::{Deck, GameConfig, SymbolId::{Cube, Hearts}, TileState};
///
/// let deck = Deck::from_symbols(&[Hearts, Cube, Hearts, Cube]).unwrap();
/// let mut game = GameController::with_deck(GameConfig::default(), deck).unwrap();
///
/// game.flip(0);
/// assert!(matches!(game.flip(2), FlipOutcome::PairRevealed { matched: true, .. }));
/// assert_eq!(game.try_count(), 1);
///
/// game.advance(Duration::from_millis(1000));
/// assert_eq!(game.tile(0).map(|t| t.state), Some(TileState::Matched));
/// ```
pub struct GameController<H: GameHooks = NoHooks> {
    config: GameConfig,
    state: GameState,
    rng: GameRng,
    timers: TaskQueue,
    hooks: H,
    history: Vector<EventRecord>,
    completed: bool,
}

impl GameController<NoHooks> {
    /// Create a game with no hooks attached.
    ///
    /// # Errors
    ///
    /// `InvalidConfiguration` if `config` does not validate.
    pub fn new(config: GameConfig) -> Result<Self> {
        Self::with_hooks(config, NoHooks)
    }

    /// Create a game over a fixed deck, already dealt.
    ///
    /// # Errors
    ///
    /// `InvalidConfiguration` if `config` does not validate.
    pub fn with_deck(config: GameConfig, deck: Deck) -> Result<Self> {
        Self::with_deck_and_hooks(config, deck, NoHooks)
    }
}

impl<H: GameHooks> GameController<H> {
    /// Create a game whose deck is built on first render.
    ///
    /// # Errors
    ///
    /// `InvalidConfiguration` if `config` does not validate.
    pub fn with_hooks(config: GameConfig, hooks: H) -> Result<Self> {
        if let Err(err) = config.validate() {
            warn!(%err, "rejected game configuration");
            return Err(err);
        }

        let rng = GameRng::from_seed_option(config.seed);
        info!(tile_count = config.tile_count, seed = rng.seed(), "new game");

        Ok(Self {
            config,
            state: GameState::new(),
            rng,
            timers: TaskQueue::new(),
            hooks,
            history: Vector::new(),
            completed: false,
        })
    }

    /// Create a game over a fixed deck. The deck's length overrides
    /// `config.tile_count`.
    ///
    /// # Errors
    ///
    /// `InvalidConfiguration` if the adjusted `config` does not validate.
    pub fn with_deck_and_hooks(config: GameConfig, deck: Deck, hooks: H) -> Result<Self> {
        let tile_count = deck.len();
        let mut game = Self::with_hooks(config.with_tile_count(tile_count), hooks)?;
        game.state = GameState::with_deck(deck);
        game.record(GameEvent::Dealt { tile_count });
        Ok(game)
    }

    // === Deck ===

    /// Build the deck if it does not exist yet and return it.
    ///
    /// Idempotent: once dealt, the same deck is returned for the life of
    /// the game.
    ///
    /// # Errors
    ///
    /// `InvalidConfiguration` if the deck cannot be built.
    pub fn deal(&mut self) -> Result<&Deck> {
        if !self.state.is_dealt() {
            let tile_count = self.config.tile_count;
            self.state.deal(tile_count, &mut self.rng)?;
            info!(tile_count, "dealt deck");
            self.record(GameEvent::Dealt { tile_count });
        }
        self.state.deal(self.config.tile_count, &mut self.rng)
    }

    /// Render the play screen, dealing on first call.
    ///
    /// # Errors
    ///
    /// `InvalidConfiguration` if the deck cannot be built.
    pub fn board(&mut self) -> Result<BoardView> {
        let columns = self.config.columns;
        let try_count = self.state.try_count;
        let deck = self.deal()?;
        Ok(BoardView::new(deck, try_count, columns))
    }

    // === Input ===

    /// Flip the tile at `index`.
    ///
    /// Ignored when the deck is not dealt, the index is out of range, the
    /// tile is already face up or matched, or two tiles are already face
    /// up. The second flip of a pair counts a try, fires the celebration
    /// hook on a match, and schedules the resolution.
    pub fn flip(&mut self, index: usize) -> FlipOutcome {
        let outcome = self.try_flip(index);
        match outcome {
            FlipOutcome::Ignored(reason) => debug!(index, ?reason, "flip ignored"),
            _ => debug!(index, ?outcome, "flip"),
        }
        outcome
    }

    fn try_flip(&mut self, index: usize) -> FlipOutcome {
        let Some(deck) = self.state.deck() else {
            return FlipOutcome::Ignored(IgnoreReason::NotDealt);
        };
        let Some(tile) = deck.get(index).copied() else {
            return FlipOutcome::Ignored(IgnoreReason::OutOfRange);
        };
        if tile.state != TileState::FaceDown {
            return FlipOutcome::Ignored(IgnoreReason::AlreadyRevealed);
        }

        let face_up = self.state.face_up();
        match face_up.as_slice() {
            &[] => {
                self.set_state(index, TileState::FaceUp);
                self.record(GameEvent::Flipped {
                    index,
                    symbol: tile.symbol,
                });
                FlipOutcome::Revealed { index }
            }
            &[first] => {
                self.state.try_count += 1;

                let matched = self
                    .tile(first)
                    .is_some_and(|other| other.symbol == tile.symbol);
                self.set_state(index, TileState::FaceUp);

                if matched {
                    self.hooks.celebrate(Celebration {
                        symbol: tile.symbol,
                        ticks: self.config.celebration_ticks,
                    });
                }

                self.timers
                    .schedule(self.config.resolution_delay(), Task::Resolve { matched });
                self.record(GameEvent::PairRevealed {
                    first,
                    second: index,
                    matched,
                    try_count: self.state.try_count,
                });

                FlipOutcome::PairRevealed {
                    first,
                    second: index,
                    matched,
                }
            }
            _ => FlipOutcome::Ignored(IgnoreReason::PairPending),
        }
    }

    // === Time ===

    /// Move the clock forward by `elapsed` and run every task now due.
    ///
    /// Tasks scheduled while these run (the completion signal) wait for the
    /// next call. Returns the events produced.
    pub fn advance(&mut self, elapsed: Duration) -> Vec<GameEvent> {
        self.timers
            .advance(elapsed)
            .into_iter()
            .filter_map(|task| self.run(task))
            .collect()
    }

    fn run(&mut self, scheduled: ScheduledTask) -> Option<GameEvent> {
        match scheduled.task {
            Task::Resolve { matched } => Some(self.resolve(matched)),
            Task::Complete => self.complete(),
        }
    }

    fn resolve(&mut self, matched: bool) -> GameEvent {
        let target = if matched {
            TileState::Matched
        } else {
            TileState::FaceDown
        };
        let indices: FaceUp = self
            .state
            .deck_mut()
            .map(|deck| deck.settle_face_up(target))
            .unwrap_or_default();
        debug!(?indices, matched, "resolved pair");

        if matched && self.state.is_won() {
            info!(try_count = self.state.try_count, "all pairs matched");
            self.timers
                .schedule(self.config.completion_delay(), Task::Complete);
        }

        self.record(GameEvent::Resolved { indices, matched })
    }

    fn complete(&mut self) -> Option<GameEvent> {
        if self.completed {
            return None;
        }
        self.completed = true;
        self.hooks.end();
        Some(self.record(GameEvent::Completed {
            try_count: self.state.try_count,
        }))
    }

    // === Queries ===

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn try_count(&self) -> u32 {
        self.state.try_count
    }

    #[must_use]
    pub fn tile(&self, index: usize) -> Option<Tile> {
        self.state.deck().and_then(|d| d.get(index)).copied()
    }

    /// Tiles in deck order; empty before the deal.
    #[must_use]
    pub fn tiles(&self) -> &[Tile] {
        self.state.deck().map(Deck::tiles).unwrap_or_default()
    }

    #[must_use]
    pub fn face_up(&self) -> FaceUp {
        self.state.face_up()
    }

    #[must_use]
    pub fn matched_pairs(&self) -> usize {
        self.state.matched_pairs()
    }

    #[must_use]
    pub fn total_pairs(&self) -> usize {
        self.state.deck().map_or(self.config.pair_count(), |d| d.len() / 2)
    }

    /// True once every tile is matched.
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.state.is_won()
    }

    /// True once the completion hook has fired.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.completed
    }

    /// True while a pair waits for resolution.
    #[must_use]
    pub fn is_resolving(&self) -> bool {
        self.timers.has_pending(|t| matches!(t, Task::Resolve { .. }))
    }

    /// Current virtual time.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.timers.now()
    }

    /// Time until the next pending task is due.
    #[must_use]
    pub fn time_until_next(&self) -> Option<Duration> {
        self.timers.time_until_next()
    }

    /// Everything that happened so far, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<EventRecord> {
        &self.history
    }

    #[must_use]
    pub fn hooks(&self) -> &H {
        &self.hooks
    }

    pub fn hooks_mut(&mut self) -> &mut H {
        &mut self.hooks
    }

    pub fn into_hooks(self) -> H {
        self.hooks
    }

    // === Internal ===

    fn set_state(&mut self, index: usize, state: TileState) {
        if let Some(deck) = self.state.deck_mut() {
            deck.set_state(index, state);
        }
    }

    fn record(&mut self, event: GameEvent) -> GameEvent {
        self.history
            .push_back(EventRecord::new(self.timers.now(), event.clone()));
        event
    }
}
