//! Game configuration.
//!
//! A `GameConfig` describes the board shape and the timing of the deferred
//! steps. The defaults give the classic 4x4 board with a one second reveal.
//!
//! ```
//! use memory_match::core::GameConfig;
//!
//! let config = GameConfig::new()
//!     .with_tile_count(12)
//!     .with_columns(3)
//!     .with_seed(7);
//!
//! assert!(config.validate().is_ok());
//! assert_eq!(config.pair_count(), 6);
//! ```

use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::error::{GameError, Result};
use super::symbol::CATALOG;

/// Default number of tiles (8 pairs).
pub const DEFAULT_TILE_COUNT: usize = 16;

/// Default number of grid columns.
pub const DEFAULT_COLUMNS: usize = 4;

/// Delay between the second flip of a pair and its resolution.
pub const DEFAULT_RESOLUTION_DELAY_MS: u64 = 1000;

/// Particle lifetime passed to the celebration hook.
pub const DEFAULT_CELEBRATION_TICKS: u32 = 100;

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Number of tiles on the board. Must be even.
    pub tile_count: usize,

    /// Grid width used by the board view.
    pub columns: usize,

    /// Milliseconds between the second flip and the resolution.
    pub resolution_delay_ms: u64,

    /// Milliseconds between the final resolution and the completion signal.
    /// Zero still defers to the next tick.
    pub completion_delay_ms: u64,

    /// Particle lifetime for celebration bursts.
    pub celebration_ticks: u32,

    /// Shuffle seed. `None` draws one from OS entropy.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            tile_count: DEFAULT_TILE_COUNT,
            columns: DEFAULT_COLUMNS,
            resolution_delay_ms: DEFAULT_RESOLUTION_DELAY_MS,
            completion_delay_ms: 0,
            celebration_ticks: DEFAULT_CELEBRATION_TICKS,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Create a configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of tiles.
    #[must_use]
    pub fn with_tile_count(mut self, tile_count: usize) -> Self {
        self.tile_count = tile_count;
        self
    }

    /// Set the grid width.
    #[must_use]
    pub fn with_columns(mut self, columns: usize) -> Self {
        self.columns = columns;
        self
    }

    /// Set the resolution delay.
    #[must_use]
    pub fn with_resolution_delay(mut self, delay: Duration) -> Self {
        self.resolution_delay_ms = duration_to_ms(delay);
        self
    }

    /// Set the completion delay.
    #[must_use]
    pub fn with_completion_delay(mut self, delay: Duration) -> Self {
        self.completion_delay_ms = duration_to_ms(delay);
        self
    }

    /// Set the celebration particle lifetime.
    #[must_use]
    pub fn with_celebration_ticks(mut self, ticks: u32) -> Self {
        self.celebration_ticks = ticks;
        self
    }

    /// Pin the shuffle seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Number of symbol pairs on the board.
    #[must_use]
    pub fn pair_count(&self) -> usize {
        self.tile_count / 2
    }

    #[must_use]
    pub fn resolution_delay(&self) -> Duration {
        Duration::from_millis(self.resolution_delay_ms)
    }

    #[must_use]
    pub fn completion_delay(&self) -> Duration {
        Duration::from_millis(self.completion_delay_ms)
    }

    /// Check that a board can be built from this configuration.
    ///
    /// # Errors
    ///
    /// `InvalidConfiguration` if the tile count is odd, needs more symbols
    /// than the catalog has, or the grid has no columns.
    pub fn validate(&self) -> Result<()> {
        validate_tile_count(self.tile_count)?;

        if self.columns == 0 {
            return Err(GameError::invalid_configuration("board needs at least one column"));
        }

        Ok(())
    }
}

/// Check a tile count against the evenness rule and the catalog size.
pub(crate) fn validate_tile_count(tile_count: usize) -> Result<()> {
    if tile_count % 2 != 0 {
        return Err(GameError::invalid_configuration(format!(
            "tile count {tile_count} is odd"
        )));
    }

    let max = CATALOG.len() * 2;
    if tile_count > max {
        return Err(GameError::invalid_configuration(format!(
            "tile count {tile_count} needs {} symbols, catalog has {}",
            tile_count / 2,
            CATALOG.len()
        )));
    }

    Ok(())
}

fn duration_to_ms(delay: Duration) -> u64 {
    u64::try_from(delay.as_millis()).unwrap_or(u64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GameConfig::default();

        assert_eq!(config.tile_count, 16);
        assert_eq!(config.columns, 4);
        assert_eq!(config.pair_count(), 8);
        assert_eq!(config.resolution_delay(), Duration::from_secs(1));
        assert_eq!(config.completion_delay(), Duration::ZERO);
        assert_eq!(config.celebration_ticks, 100);
        assert_eq!(config.seed, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = GameConfig::new()
            .with_tile_count(4)
            .with_columns(2)
            .with_resolution_delay(Duration::from_millis(250))
            .with_completion_delay(Duration::from_millis(10))
            .with_celebration_ticks(30)
            .with_seed(42);

        assert_eq!(config.tile_count, 4);
        assert_eq!(config.columns, 2);
        assert_eq!(config.resolution_delay_ms, 250);
        assert_eq!(config.completion_delay_ms, 10);
        assert_eq!(config.celebration_ticks, 30);
        assert_eq!(config.seed, Some(42));
    }

    #[test]
    fn test_odd_tile_count_rejected() {
        let err = GameConfig::new().with_tile_count(15).validate().unwrap_err();
        assert!(err.is_configuration());
    }

    #[test]
    fn test_tile_count_beyond_catalog_rejected() {
        assert!(GameConfig::new().with_tile_count(20).validate().is_ok());
        assert!(GameConfig::new().with_tile_count(22).validate().is_err());
    }

    #[test]
    fn test_zero_columns_rejected() {
        let err = GameConfig::new().with_columns(0).validate().unwrap_err();
        assert!(err.is_configuration());
    }

    #[test]
    fn test_serde_defaults_fill_missing_fields() {
        let config: GameConfig = serde_json::from_str(r#"{"tile_count": 8, "seed": 3}"#).unwrap();

        assert_eq!(config.tile_count, 8);
        assert_eq!(config.seed, Some(3));
        assert_eq!(config.columns, DEFAULT_COLUMNS);
        assert_eq!(config.resolution_delay_ms, DEFAULT_RESOLUTION_DELAY_MS);
    }
}
