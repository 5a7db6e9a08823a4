//! One full game: setup, pick, reveal, and both strategies resolved.
use log::debug;
use serde::Serialize;

use crate::door::{Arrangement, DoorIndex};
use crate::host::reveal;
use crate::outcome::{TrialResult, determine_winner};
use crate::rng::RandomSource;
use crate::setup::{create_game, select_door};
use crate::strategy::Strategy;

/// Record of a single played game.
///
/// Both trials share the arrangement, the initial pick, and the opened door.
/// Only [`play_round`] builds one, so the opened door is always a goat other
/// than the pick and exactly one of the two trials wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GameRound {
    arrangement: Arrangement,
    initial_pick: DoorIndex,
    opened: DoorIndex,
    stay: TrialResult,
    switch: TrialResult,
}

impl GameRound {
    #[must_use]
    pub const fn arrangement(&self) -> &Arrangement {
        &self.arrangement
    }

    #[must_use]
    pub const fn initial_pick(&self) -> DoorIndex {
        self.initial_pick
    }

    #[must_use]
    pub const fn opened(&self) -> DoorIndex {
        self.opened
    }

    /// The two trials, stay first.
    #[must_use]
    pub const fn trials(&self) -> [TrialResult; 2] {
        [self.stay, self.switch]
    }

    #[must_use]
    pub const fn trial(&self, strategy: Strategy) -> TrialResult {
        match strategy {
            Strategy::Stay => self.stay,
            Strategy::Switch => self.switch,
        }
    }
}

/// Play one game and keep every intermediate decision.
pub fn play_round<R: RandomSource + ?Sized>(rng: &mut R) -> GameRound {
    let arrangement = create_game(rng);
    let initial_pick = select_door(rng);
    let revealed = reveal(&arrangement, initial_pick, rng);
    let resolve = |strategy: Strategy| {
        let final_pick = revealed.final_pick(strategy);
        TrialResult::new(strategy, determine_winner(final_pick, &arrangement))
    };
    let round = GameRound {
        arrangement,
        initial_pick,
        opened: revealed.opened(),
        stay: resolve(Strategy::Stay),
        switch: resolve(Strategy::Switch),
    };
    debug!(
        "doors {} pick {} opened {} -> stay {} / switch {}",
        round.arrangement,
        round.initial_pick,
        round.opened,
        round.stay.outcome,
        round.switch.outcome
    );
    round
}

/// Play one game and report both strategies' results, stay first.
pub fn play_game<R: RandomSource + ?Sized>(rng: &mut R) -> [TrialResult; 2] {
    play_round(rng).trials()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outcome::Outcome;
    use crate::rng::{RngSource, ScriptedSource};

    #[test]
    fn returns_one_trial_per_strategy() {
        let mut source = RngSource::small(3);
        for _ in 0..200 {
            let [stay, switch] = play_game(&mut source);
            assert_eq!(stay.strategy, Strategy::Stay);
            assert_eq!(switch.strategy, Strategy::Switch);
            assert_ne!(stay.outcome, switch.outcome);
        }
    }

    #[test]
    fn scripted_goat_pick_rewards_switching() {
        // Car at door 2, contestant picks door 1.
        let mut source = ScriptedSource::new([1, 0, 0, 0]);
        let round = play_round(&mut source);
        assert_eq!(round.arrangement().car_door().get(), 2);
        assert_eq!(round.initial_pick().get(), 1);
        assert_eq!(round.opened().get(), 3);
        assert_eq!(round.trial(Strategy::Stay).outcome, Outcome::Lose);
        assert_eq!(round.trial(Strategy::Switch).outcome, Outcome::Win);
    }

    #[test]
    fn scripted_car_pick_rewards_staying() {
        // Car at door 1, contestant picks door 1, host opens door 2.
        let mut source = ScriptedSource::new([0, 0, 0, 0, 0]);
        let round = play_round(&mut source);
        assert_eq!(round.opened().get(), 2);
        assert_eq!(round.trial(Strategy::Stay).outcome, Outcome::Win);
        assert_eq!(round.trial(Strategy::Switch).outcome, Outcome::Lose);
    }

    #[test]
    fn recorded_rounds_keep_their_invariants() {
        let mut source = RngSource::small(0x5EED);
        for _ in 0..300 {
            let round = play_round(&mut source);
            assert_ne!(round.opened(), round.initial_pick());
            assert_ne!(round.opened(), round.arrangement().car_door());
            let wins = round.trials().iter().filter(|t| t.outcome.is_win()).count();
            assert_eq!(wins, 1);
        }
    }

    #[test]
    fn rounds_serialize_their_record() {
        let round = play_round(&mut ScriptedSource::new([1, 0, 0, 0]));
        let json = serde_json::to_value(round).unwrap();
        assert_eq!(json["arrangement"], serde_json::json!(["goat", "car", "goat"]));
        assert_eq!(json["initial_pick"], 1);
        assert_eq!(json["opened"], 3);
        assert_eq!(json["switch"]["outcome"], "WIN");
    }
}
