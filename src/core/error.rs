//! Error types for deck construction and tile state parsing.
//!
//! Only two things can go wrong in a memory game: the board was configured
//! with a shape the symbol catalog cannot fill, or a tile state arrived from
//! outside the type system with a value that is not one of the three known
//! states. Rejected clicks are not errors; see `FlipOutcome`.

use thiserror::Error;

/// Errors raised by the game engine.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    /// The requested board cannot be built (odd tile count, not enough
    /// distinct symbols, zero columns, ...).
    #[error("invalid configuration: {reason}")]
    InvalidConfiguration { reason: String },

    /// A raw tile state outside `{FaceDown, FaceUp, Matched}`.
    #[error("invalid tile state '{raw}'")]
    InvalidState { raw: String },
}

impl GameError {
    /// Create an invalid configuration error.
    pub fn invalid_configuration(reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            reason: reason.into(),
        }
    }

    /// Create an invalid state error.
    pub fn invalid_state(raw: impl Into<String>) -> Self {
        Self::InvalidState { raw: raw.into() }
    }

    /// True for configuration errors.
    #[must_use]
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::InvalidConfiguration { .. })
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GameError>;
