//! Screen flow: start screen, play, and back.
//!
//! `App` is what a front end drives. It owns at most one game at a time;
//! a finished game is dropped and the next `start` builds a new one, with a
//! new deck.

use std::time::Duration;
use tracing::info;

use crate::controller::{Celebration, FlipOutcome, GameController, GameEvent, Signal, SignalBuffer};
use crate::core::{GameConfig, GameRng, Result};
use crate::view::{BoardView, StartScreen};

/// The screen currently shown.
pub enum Screen {
    Start(StartScreen),
    Play(Box<GameController<SignalBuffer>>),
}

impl Screen {
    #[must_use]
    pub fn is_start(&self) -> bool {
        matches!(self, Screen::Start(_))
    }
}

/// Outcome of a finished game, kept for the start screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Finished {
    pub try_count: u32,
    pub pairs: usize,
}

/// Application state for one session.
pub struct App {
    config: GameConfig,
    seeds: GameRng,
    screen: Screen,
    celebrations: Vec<Celebration>,
    last_finished: Option<Finished>,
    games_played: u32,
}

impl App {
    /// Create a session showing the start screen.
    ///
    /// # Errors
    ///
    /// `InvalidConfiguration` if `config` does not validate, so a bad board
    /// is reported before anyone presses play.
    pub fn new(config: GameConfig) -> Result<Self> {
        config.validate()?;
        let seeds = GameRng::from_seed_option(config.seed).for_context("session");

        Ok(Self {
            config,
            seeds,
            screen: Screen::Start(StartScreen),
            celebrations: Vec::new(),
            last_finished: None,
            games_played: 0,
        })
    }

    /// Enter play with a fresh game, through the start screen's Play
    /// trigger. Does nothing if already playing.
    ///
    /// # Errors
    ///
    /// `InvalidConfiguration` if the game cannot be created.
    pub fn start(&mut self) -> Result<()> {
        let Screen::Start(screen) = &self.screen else {
            return Ok(());
        };
        let screen = *screen;

        let game = screen.activate(|| self.new_game())?;
        self.screen = Screen::Play(Box::new(game));
        Ok(())
    }

    fn new_game(&mut self) -> Result<GameController<SignalBuffer>> {
        let config = self.config.clone().with_seed(self.seeds.next_seed());
        let game = GameController::with_hooks(config, SignalBuffer::new())?;
        self.games_played += 1;
        info!(game = self.games_played, "starting game");
        Ok(game)
    }

    /// Route a click on tile `index` to the running game.
    ///
    /// Returns `None` on the start screen.
    pub fn click(&mut self, index: usize) -> Option<FlipOutcome> {
        let Screen::Play(game) = &mut self.screen else {
            return None;
        };
        let outcome = game.flip(index);
        self.pump();
        Some(outcome)
    }

    /// Let `elapsed` time pass in the running game.
    pub fn advance(&mut self, elapsed: Duration) -> Vec<GameEvent> {
        let Screen::Play(game) = &mut self.screen else {
            return Vec::new();
        };
        let events = game.advance(elapsed);
        self.pump();
        events
    }

    /// Run pending deadlines until none are left.
    ///
    /// `wait` is called with the delay before each deadline. `redraw` is
    /// called after every step that changed what is on screen: a pair
    /// resolving, or the game ending. The winning board is drawn before the
    /// completion tick swaps back to the start screen.
    ///
    /// # Errors
    ///
    /// Whatever `redraw` returns; the remaining deadlines stay pending.
    pub fn run_pending<E>(
        &mut self,
        mut wait: impl FnMut(Duration),
        mut redraw: impl FnMut(&mut Self) -> std::result::Result<(), E>,
    ) -> std::result::Result<(), E> {
        while let Some(delay) = self.time_until_next() {
            wait(delay);
            let events = self.advance(delay);
            let changed = events.iter().any(|event| {
                matches!(event, GameEvent::Resolved { .. } | GameEvent::Completed { .. })
            });
            if changed {
                redraw(self)?;
            }
        }
        Ok(())
    }

    /// Handle hook calls queued by the game.
    fn pump(&mut self) {
        let Screen::Play(game) = &mut self.screen else {
            return;
        };

        let mut ended = false;
        for signal in game.hooks_mut().drain() {
            match signal {
                Signal::Celebrate(celebration) => self.celebrations.push(celebration),
                Signal::End => ended = true,
            }
        }

        if ended {
            self.last_finished = Some(Finished {
                try_count: game.try_count(),
                pairs: game.total_pairs(),
            });
            info!(try_count = game.try_count(), "game finished");
            self.screen = Screen::Start(StartScreen);
        }
    }

    /// Render the play board, dealing the deck on first call.
    ///
    /// Returns `Ok(None)` on the start screen.
    ///
    /// # Errors
    ///
    /// `InvalidConfiguration` if the deck cannot be built.
    pub fn board(&mut self) -> Result<Option<BoardView>> {
        match &mut self.screen {
            Screen::Start(_) => Ok(None),
            Screen::Play(game) => game.board().map(Some),
        }
    }

    /// Render the current screen as text.
    ///
    /// # Errors
    ///
    /// `InvalidConfiguration` if the deck cannot be built.
    pub fn render(&mut self) -> Result<String> {
        if let Some(board) = self.board()? {
            return Ok(board.to_string());
        }

        let mut text = StartScreen.to_string();
        if let Some(finished) = self.last_finished {
            text.push_str(&format!(
                "\nLast game: {} pairs in {} tries\n",
                finished.pairs, finished.try_count
            ));
        }
        Ok(text)
    }

    /// Take celebrations fired since the last call.
    pub fn take_celebrations(&mut self) -> Vec<Celebration> {
        std::mem::take(&mut self.celebrations)
    }

    #[must_use]
    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    #[must_use]
    pub fn game(&self) -> Option<&GameController<SignalBuffer>> {
        match &self.screen {
            Screen::Play(game) => Some(&**game),
            Screen::Start(_) => None,
        }
    }

    #[must_use]
    pub fn is_playing(&self) -> bool {
        !self.screen.is_start()
    }

    /// Time until the running game has work due.
    #[must_use]
    pub fn time_until_next(&self) -> Option<Duration> {
        self.game().and_then(GameController::time_until_next)
    }

    #[must_use]
    pub fn last_finished(&self) -> Option<Finished> {
        self.last_finished
    }

    #[must_use]
    pub fn games_played(&self) -> u32 {
        self.games_played
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }
}
