//! Flip state machine integration tests.
//!
//! These tests drive a `GameController` over fixed decks and check the
//! try counter, the input lock, the deferred resolution and the hooks.

use std::time::Duration;

use memory_match::controller::{
    FlipOutcome, GameController, GameEvent, IgnoreReason, Signal, SignalBuffer,
};
use memory_match::core::{Deck, GameConfig, SymbolId, TileState};

const DELAY: Duration = Duration::from_millis(1000);

use SymbolId::{Cube, Die, Hearts, WaterDrop};

fn game(symbols: &[SymbolId]) -> GameController<SignalBuffer> {
    let deck = Deck::from_symbols(symbols).expect("valid deck");
    GameController::with_deck_and_hooks(GameConfig::default(), deck, SignalBuffer::new())
        .expect("valid config")
}

fn states(game: &GameController<SignalBuffer>) -> Vec<TileState> {
    game.tiles().iter().map(|t| t.state).collect()
}

// =============================================================================
// Full game
// =============================================================================

/// The [A, B, A, B] walkthrough: one miss, then two hits.
#[test]
fn test_four_tile_walkthrough() {
    use TileState::{FaceDown as D, FaceUp as U, Matched as M};

    let mut game = game(&[Hearts, Cube, Hearts, Cube]);

    // Miss.
    assert_eq!(game.flip(0), FlipOutcome::Revealed { index: 0 });
    assert_eq!(states(&game), vec![U, D, D, D]);
    assert!(game.flip(1).is_accepted());
    assert_eq!(game.try_count(), 1);
    assert_eq!(states(&game), vec![U, U, D, D]);
    game.advance(DELAY);
    assert_eq!(states(&game), vec![D, D, D, D]);

    // Hit on A.
    game.flip(0);
    game.flip(2);
    assert_eq!(game.try_count(), 2);
    game.advance(DELAY);
    assert_eq!(states(&game), vec![M, D, M, D]);

    // Hit on B ends the game.
    game.flip(1);
    game.flip(3);
    assert_eq!(game.try_count(), 3);
    game.advance(DELAY);
    assert_eq!(states(&game), vec![M, M, M, M]);
    assert_eq!(game.hooks().ends(), 0);

    game.advance(Duration::ZERO);
    assert_eq!(game.hooks().ends(), 1);
    assert_eq!(game.hooks().celebrations(), 2);
    assert!(game.is_complete());
}

// =============================================================================
// Ignored flips
// =============================================================================

/// Flipping a face-up tile changes nothing.
#[test]
fn test_face_up_tile_is_noop() {
    let mut game = game(&[Hearts, Cube, Hearts, Cube]);
    game.flip(0);
    let before = states(&game);

    assert_eq!(game.flip(0), FlipOutcome::Ignored(IgnoreReason::AlreadyRevealed));
    assert_eq!(states(&game), before);
    assert_eq!(game.try_count(), 0);
}

/// Flipping a matched tile changes nothing.
#[test]
fn test_matched_tile_is_noop() {
    let mut game = game(&[Hearts, Cube, Hearts, Cube]);
    game.flip(0);
    game.flip(2);
    game.advance(DELAY);

    assert_eq!(game.flip(2), FlipOutcome::Ignored(IgnoreReason::AlreadyRevealed));
    assert_eq!(game.try_count(), 1);
    assert_eq!(game.face_up().len(), 0);
}

/// A third tile cannot be flipped while a pair waits for resolution.
#[test]
fn test_third_flip_locked_until_resolution() {
    let mut game = game(&[Hearts, Cube, WaterDrop, Hearts, Cube, WaterDrop]);
    game.flip(0);
    game.flip(1);

    assert_eq!(game.flip(2), FlipOutcome::Ignored(IgnoreReason::PairPending));
    assert_eq!(game.tile(2).map(|t| t.state), Some(TileState::FaceDown));
    assert_eq!(game.try_count(), 1);

    game.advance(DELAY);
    assert_eq!(game.flip(2), FlipOutcome::Revealed { index: 2 });
}

/// Rapid repeated clicks on the second tile count one try.
#[test]
fn test_double_click_counts_once() {
    let mut game = game(&[Hearts, Cube, Hearts, Cube]);
    game.flip(0);
    game.flip(1);
    game.flip(1);
    game.flip(1);

    assert_eq!(game.try_count(), 1);
    game.advance(DELAY);
    assert_eq!(game.try_count(), 1);
    assert_eq!(game.state().face_up().len(), 0);
}

// =============================================================================
// Resolution and hooks
// =============================================================================

/// A mismatch never celebrates and flips both tiles back after the delay.
#[test]
fn test_mismatch_flow() {
    let mut game = game(&[Hearts, Cube, Hearts, Cube]);
    game.flip(3);
    game.flip(2);

    assert_eq!(game.try_count(), 1);
    assert_eq!(game.face_up().as_slice(), &[2, 3]);

    game.advance(Duration::from_millis(500));
    assert_eq!(game.face_up().len(), 2);

    game.advance(Duration::from_millis(500));
    assert_eq!(game.face_up().len(), 0);
    assert!(game.hooks().signals().is_empty());
}

/// A match celebrates once, at flip time, with the configured tick count.
#[test]
fn test_match_celebration_payload() {
    let deck = Deck::from_symbols(&[Die, Die]).unwrap();
    let config = GameConfig::new().with_celebration_ticks(42);
    let mut game =
        GameController::with_deck_and_hooks(config, deck, SignalBuffer::new()).unwrap();

    game.flip(1);
    game.flip(0);

    let signals = game.hooks_mut().drain();
    assert_eq!(signals.len(), 1);
    match signals[0] {
        Signal::Celebrate(celebration) => {
            assert_eq!(celebration.symbol, Die);
            assert_eq!(celebration.ticks, 42);
        }
        Signal::End => panic!("end fired before resolution"),
    }
}

/// End fires once, only after the last pair resolves.
#[test]
fn test_end_fires_once_after_last_pair() {
    let mut game = game(&[Hearts, Cube, Hearts, Cube]);

    game.flip(0);
    game.flip(2);
    game.advance(DELAY);
    game.advance(Duration::ZERO);
    assert_eq!(game.hooks().ends(), 0);

    game.flip(1);
    game.flip(3);
    game.advance(Duration::from_secs(10));
    assert_eq!(game.hooks().ends(), 0);

    game.advance(Duration::ZERO);
    game.advance(Duration::from_secs(10));
    assert_eq!(game.hooks().ends(), 1);
}

/// A custom completion delay holds the end signal back.
#[test]
fn test_completion_delay() {
    let deck = Deck::from_symbols(&[Cube, Cube]).unwrap();
    let config = GameConfig::new()
        .with_resolution_delay(Duration::from_millis(300))
        .with_completion_delay(Duration::from_millis(200));
    let mut game =
        GameController::with_deck_and_hooks(config, deck, SignalBuffer::new()).unwrap();

    game.flip(0);
    game.flip(1);
    game.advance(Duration::from_millis(300));
    assert!(game.is_won());
    assert_eq!(game.time_until_next(), Some(Duration::from_millis(200)));

    game.advance(Duration::from_millis(199));
    assert_eq!(game.hooks().ends(), 0);
    game.advance(Duration::from_millis(1));
    assert_eq!(game.hooks().ends(), 1);
}

/// History records accepted input in order and skips ignored flips.
#[test]
fn test_history() {
    let mut game = game(&[Hearts, Cube, Hearts, Cube]);
    game.flip(0);
    game.flip(0);
    game.flip(1);
    game.advance(DELAY);

    let events: Vec<_> = game.history().iter().map(|r| r.event.clone()).collect();
    assert_eq!(events.len(), 4);
    assert_eq!(events[0], GameEvent::Dealt { tile_count: 4 });
    assert_eq!(
        events[1],
        GameEvent::Flipped {
            index: 0,
            symbol: Hearts
        }
    );
    assert_eq!(
        events[2],
        GameEvent::PairRevealed {
            first: 0,
            second: 1,
            matched: false,
            try_count: 1
        }
    );
    assert!(matches!(events[3], GameEvent::Resolved { matched: false, .. }));
}
