//! Simulation run configuration.
use serde::{Deserialize, Serialize};

use crate::batch::{BatchResult, play_n_games};
use crate::constants::DEFAULT_TRIALS;
use crate::error::GameError;
use crate::rng::SeededSource;

/// How many games to play and where the randomness comes from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationConfig {
    #[serde(default = "SimulationConfig::default_trials")]
    pub trials: usize,
    /// Replay seed; `None` draws from operating-system entropy.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl SimulationConfig {
    const fn default_trials() -> usize {
        DEFAULT_TRIALS
    }

    #[must_use]
    pub const fn seeded(trials: usize, seed: u64) -> Self {
        Self {
            trials,
            seed: Some(seed),
        }
    }

    /// Check the configuration before a run.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::NonPositiveTrials`] when `trials` is zero.
    pub fn validate(&self) -> Result<(), GameError> {
        if self.trials == 0 {
            return Err(GameError::NonPositiveTrials);
        }
        Ok(())
    }

    /// Random source described by this configuration.
    #[must_use]
    pub fn source(&self) -> SeededSource {
        self.seed
            .map_or_else(SeededSource::from_entropy, SeededSource::from_user_seed)
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            trials: Self::default_trials(),
            seed: None,
        }
    }
}

/// Validate `config` and play its batch.
///
/// # Errors
///
/// Returns an error if the configuration is invalid.
pub fn run_simulation(config: &SimulationConfig) -> Result<BatchResult, GameError> {
    config.validate()?;
    let mut source = config.source();
    play_n_games(config.trials, &mut source)
}
