//! Tunable parameters of a game.
use thiserror::Error;

use crate::{board::PlacementGenerator, ships::Fleet};

/// Side length of the default board.
pub const BOARD_SIZE: i32 = 6;

/// Retry budget for every bounded random search.
pub const MAX_ATTEMPTS: usize = 10_000;

/// Reason a [`GameConfig`] cannot be played.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum ConfigError {
    /// The board has no cells.
    #[error("board size must be positive, got {0}")]
    EmptyBoard(i32),
    /// No vessels to place.
    #[error("the fleet has no vessels")]
    EmptyFleet,
    /// The vessel at this index of the fleet has no cells.
    #[error("vessel {0} of the fleet has length 0")]
    ZeroLengthVessel(usize),
    /// A retry budget of zero can never succeed.
    #[error("the retry budget must allow at least one attempt")]
    ZeroAttempts,
}

/// Settings shared by both sides of every round.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct GameConfig {
    /// Side length of each grid.
    pub board_size: i32,
    /// Vessels placed on each grid, in order.
    pub fleet: Fleet,
    /// Attempts allowed for each random placement, grid restart, and computer shot.
    pub max_attempts: usize,
}

impl GameConfig {
    /// Check that a game can be set up with these settings.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board_size <= 0 {
            return Err(ConfigError::EmptyBoard(self.board_size));
        }
        if self.fleet.is_empty() {
            return Err(ConfigError::EmptyFleet);
        }
        if let Some(index) = self.fleet.lengths().iter().position(|&len| len == 0) {
            return Err(ConfigError::ZeroLengthVessel(index));
        }
        if self.max_attempts == 0 {
            return Err(ConfigError::ZeroAttempts);
        }
        Ok(())
    }

    /// Validate the config and build the matching [`PlacementGenerator`].
    pub fn placement_generator(&self) -> Result<PlacementGenerator, ConfigError> {
        self.validate()?;
        Ok(PlacementGenerator::from_config(self))
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: BOARD_SIZE,
            fleet: Fleet::standard(),
            max_attempts: MAX_ATTEMPTS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        let config = GameConfig::default();
        assert_eq!(config.board_size, 6);
        assert_eq!(config.max_attempts, 10_000);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn rejects_unplayable_settings() {
        let mut config = GameConfig::default();
        config.board_size = 0;
        assert_eq!(config.validate(), Err(ConfigError::EmptyBoard(0)));

        let mut config = GameConfig::default();
        config.fleet = Fleet::new(vec![2, 0]);
        assert_eq!(config.validate(), Err(ConfigError::ZeroLengthVessel(1)));

        let mut config = GameConfig::default();
        config.fleet = Fleet::new(Vec::new());
        assert_eq!(config.validate(), Err(ConfigError::EmptyFleet));

        let mut config = GameConfig::default();
        config.max_attempts = 0;
        assert!(config.placement_generator().is_err());
    }
}
