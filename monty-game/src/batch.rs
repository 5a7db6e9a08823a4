//! Batch runner and per-strategy statistics.
use log::info;
use serde::{Deserialize, Serialize};

use crate::constants::REPORT_DECIMALS;
use crate::error::GameError;
use crate::numbers::{proportion, round_to_places};
use crate::outcome::{Outcome, TrialResult};
use crate::rng::RandomSource;
use crate::round::play_round;
use crate::strategy::Strategy;

/// Every trial from a batch, two per game (stay then switch).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BatchResult {
    games: usize,
    trials: Vec<TrialResult>,
}

impl BatchResult {
    #[must_use]
    pub const fn games(&self) -> usize {
        self.games
    }

    #[must_use]
    pub fn trials(&self) -> &[TrialResult] {
        &self.trials
    }

    #[must_use]
    pub fn into_trials(self) -> Vec<TrialResult> {
        self.trials
    }

    /// Outcomes recorded for one strategy, in game order.
    pub fn outcomes_for(&self, strategy: Strategy) -> impl Iterator<Item = Outcome> + '_ {
        self.trials
            .iter()
            .filter(move |trial| trial.strategy == strategy)
            .map(|trial| trial.outcome)
    }

    #[must_use]
    pub fn summary(&self) -> BatchSummary {
        BatchSummary::from_trials(self.games, &self.trials)
    }
}

/// Win/lose tally for a single strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrategyStats {
    pub strategy: Strategy,
    pub wins: usize,
    pub losses: usize,
}

impl StrategyStats {
    #[must_use]
    pub const fn empty(strategy: Strategy) -> Self {
        Self {
            strategy,
            wins: 0,
            losses: 0,
        }
    }

    fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Win => self.wins += 1,
            Outcome::Lose => self.losses += 1,
        }
    }

    #[must_use]
    pub const fn total(&self) -> usize {
        self.wins + self.losses
    }

    /// Share of trials won, in `[0, 1]`.
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        proportion(self.wins, self.total())
    }

    #[must_use]
    pub fn lose_rate(&self) -> f64 {
        proportion(self.losses, self.total())
    }

    #[must_use]
    pub fn rounded_win_rate(&self) -> f64 {
        round_to_places(self.win_rate(), REPORT_DECIMALS)
    }

    #[must_use]
    pub fn rounded_lose_rate(&self) -> f64 {
        round_to_places(self.lose_rate(), REPORT_DECIMALS)
    }
}

/// Per-strategy statistics for a batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchSummary {
    pub games: usize,
    pub stay: StrategyStats,
    pub switch: StrategyStats,
}

impl BatchSummary {
    #[must_use]
    pub fn from_trials(games: usize, trials: &[TrialResult]) -> Self {
        let mut stay = StrategyStats::empty(Strategy::Stay);
        let mut switch = StrategyStats::empty(Strategy::Switch);
        for trial in trials {
            match trial.strategy {
                Strategy::Stay => stay.record(trial.outcome),
                Strategy::Switch => switch.record(trial.outcome),
            }
        }
        Self {
            games,
            stay,
            switch,
        }
    }

    #[must_use]
    pub const fn stats(&self, strategy: Strategy) -> &StrategyStats {
        match strategy {
            Strategy::Stay => &self.stay,
            Strategy::Switch => &self.switch,
        }
    }

    /// Both strategies, stay first.
    #[must_use]
    pub const fn rows(&self) -> [StrategyStats; 2] {
        [self.stay, self.switch]
    }
}

/// Play `n` games and collect `2n` trial results.
///
/// # Errors
///
/// Returns [`GameError::NonPositiveTrials`] when `n` is zero.
pub fn play_n_games<R: RandomSource + ?Sized>(
    n: usize,
    rng: &mut R,
) -> Result<BatchResult, GameError> {
    if n == 0 {
        return Err(GameError::NonPositiveTrials);
    }
    let mut trials = Vec::with_capacity(n.saturating_mul(2));
    for _ in 0..n {
        trials.extend(play_round(rng).trials());
    }
    let batch = BatchResult { games: n, trials };
    let summary = batch.summary();
    info!(
        "played {} games: stay won {:.2}, switch won {:.2}",
        summary.games,
        summary.stay.rounded_win_rate(),
        summary.switch.rounded_win_rate()
    );
    Ok(batch)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::RngSource;

    #[test]
    fn zero_games_rejected() {
        let mut source = RngSource::small(1);
        assert_eq!(
            play_n_games(0, &mut source),
            Err(GameError::NonPositiveTrials)
        );
        assert_eq!(source.draws(), 0);
    }

    #[test]
    fn batch_holds_two_trials_per_game() {
        let mut source = RngSource::small(2);
        let batch = play_n_games(25, &mut source).unwrap();
        assert_eq!(batch.games(), 25);
        assert_eq!(batch.trials().len(), 50);
        assert_eq!(batch.outcomes_for(Strategy::Stay).count(), 25);
        assert_eq!(batch.outcomes_for(Strategy::Switch).count(), 25);
        for pair in batch.trials().chunks(2) {
            assert_eq!(pair[0].strategy, Strategy::Stay);
            assert_eq!(pair[1].strategy, Strategy::Switch);
        }
    }

    #[test]
    fn summary_rates_are_complementary() {
        let mut source = RngSource::small(4);
        let summary = play_n_games(100, &mut source).unwrap().summary();
        assert_eq!(summary.stay.total(), 100);
        assert_eq!(summary.stay.wins + summary.switch.wins, 100);
        for row in summary.rows() {
            assert!((row.win_rate() + row.lose_rate() - 1.0).abs() < 1e-9);
            assert!((0.0..=1.0).contains(&row.win_rate()));
        }
    }

    #[test]
    fn stats_round_for_reporting() {
        let trials = [
            TrialResult::new(Strategy::Switch, Outcome::Win),
            TrialResult::new(Strategy::Switch, Outcome::Win),
            TrialResult::new(Strategy::Switch, Outcome::Lose),
        ];
        let summary = BatchSummary::from_trials(3, &trials);
        assert!((summary.switch.rounded_win_rate() - 0.67).abs() < f64::EPSILON);
        assert!((summary.switch.rounded_lose_rate() - 0.33).abs() < f64::EPSILON);
        assert_eq!(summary.stats(Strategy::Stay).total(), 0);
        assert!(summary.stay.win_rate().abs() < f64::EPSILON);
    }

    #[test]
    fn into_trials_hands_back_every_trial() {
        let mut source = RngSource::small(6);
        let batch = play_n_games(10, &mut source).unwrap();
        let expected = batch.trials().to_vec();
        let trials = batch.into_trials();
        assert_eq!(trials.len(), 20);
        assert_eq!(trials, expected);
    }
}
