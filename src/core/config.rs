//! Match configuration.
//!
//! Board dimensions are fixed by the rules (see [`PILE_COUNT`] and
//! [`STONES_PER_PILE`]); what a match can configure is who plays and where
//! the randomness comes from.
//!
//! [`PILE_COUNT`]: super::piles::PILE_COUNT
//! [`STONES_PER_PILE`]: super::piles::STONES_PER_PILE

use serde::{Deserialize, Serialize};

use super::rng::GameRng;
use crate::error::ConfigError;

/// Fewest players a match can be played with.
pub const MIN_PLAYERS: usize = 2;

/// Most players a match can seat (seat numbers are `u8`).
pub const MAX_PLAYERS: usize = u8::MAX as usize;

/// Settings for a single match.
///
/// ```
/// use nim_console::core::MatchConfig;
///
/// let config = MatchConfig::new().seed(7);
/// assert_eq!(config.player_count, 2);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Number of players registered before the first turn.
    pub player_count: usize,

    /// Seed for dealing the board. `None` draws one from the OS.
    pub seed: Option<u64>,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            player_count: MIN_PLAYERS,
            seed: None,
        }
    }
}

impl MatchConfig {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn player_count(mut self, count: usize) -> Self {
        self.player_count = count;
        self
    }

    #[must_use]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check the settings before a match starts.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.player_count < MIN_PLAYERS {
            return Err(ConfigError::TooFewPlayers {
                got: self.player_count,
                min: MIN_PLAYERS,
            });
        }
        if self.player_count > MAX_PLAYERS {
            return Err(ConfigError::TooManyPlayers {
                got: self.player_count,
                max: MAX_PLAYERS,
            });
        }
        Ok(())
    }

    /// RNG for dealing: seeded if a seed was given, otherwise fresh.
    #[must_use]
    pub fn rng(&self) -> GameRng {
        match self.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        }
    }
}
