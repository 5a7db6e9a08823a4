//! Monty Hall Game Engine
//!
//! Platform-agnostic core logic for the three-door Monty Hall puzzle.
//! This crate deals the doors, plays the host, resolves stay/switch
//! decisions, and aggregates batches into win-rate statistics without any
//! terminal or file output.

pub mod batch;
pub mod config;
pub mod constants;
pub mod door;
pub mod error;
pub mod host;
pub mod numbers;
pub mod outcome;
pub mod rng;
pub mod round;
pub mod setup;
pub mod strategy;

// Re-export commonly used types
pub use batch::{BatchResult, BatchSummary, StrategyStats, play_n_games};
pub use config::{SimulationConfig, run_simulation};
pub use constants::{DEFAULT_TRIALS, DOOR_COUNT};
pub use door::{Arrangement, DoorIndex, Prize};
pub use error::GameError;
pub use host::{Reveal, open_goat_door, reveal};
pub use outcome::{Outcome, TrialResult, determine_winner};
pub use rng::{RandomSource, RngSource, ScriptedSource, SeededSource};
pub use round::{GameRound, play_game, play_round};
pub use setup::{create_game, select_door};
pub use strategy::{Strategy, change_door};

/// Main engine owning the random source for a sequence of games
pub struct Simulator<R>
where
    R: RandomSource,
{
    source: R,
}

impl<R> Simulator<R>
where
    R: RandomSource,
{
    /// Create a simulator drawing from the provided source
    pub const fn new(source: R) -> Self {
        Self { source }
    }

    /// Play a single game, keeping every intermediate decision
    pub fn play_round(&mut self) -> GameRound {
        round::play_round(&mut self.source)
    }

    /// Play a single game and return both strategies' results
    pub fn play_game(&mut self) -> [TrialResult; 2] {
        round::play_game(&mut self.source)
    }

    /// Play a batch of games
    ///
    /// # Errors
    ///
    /// Returns an error if `n` is zero.
    pub fn play_n_games(&mut self, n: usize) -> Result<BatchResult, GameError> {
        batch::play_n_games(n, &mut self.source)
    }

    /// Borrow the underlying random source
    pub const fn source(&self) -> &R {
        &self.source
    }

    #[must_use]
    pub fn into_source(self) -> R {
        self.source
    }
}

impl Simulator<SeededSource> {
    /// Create a simulator for a run configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn from_config(config: &SimulationConfig) -> Result<Self, GameError> {
        config.validate()?;
        Ok(Self::new(config.source()))
    }
}
