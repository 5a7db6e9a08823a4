//! Win/lose evaluation.
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::door::{Arrangement, DoorIndex, Prize};
use crate::strategy::Strategy;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Outcome {
    Win,
    Lose,
}

impl Outcome {
    #[must_use]
    pub const fn is_win(self) -> bool {
        matches!(self, Self::Win)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Win => write!(f, "WIN"),
            Self::Lose => write!(f, "LOSE"),
        }
    }
}

/// One strategy's result for one played game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TrialResult {
    pub strategy: Strategy,
    pub outcome: Outcome,
}

impl TrialResult {
    #[must_use]
    pub const fn new(strategy: Strategy, outcome: Outcome) -> Self {
        Self { strategy, outcome }
    }
}

/// The contestant wins exactly when the final pick hides the car.
#[must_use]
pub fn determine_winner(final_pick: DoorIndex, game: &Arrangement) -> Outcome {
    match game.prize_at(final_pick) {
        Prize::Car => Outcome::Win,
        Prize::Goat => Outcome::Lose,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_the_car_door_wins() {
        let game = Arrangement::with_car_at(DoorIndex::ALL[2]);
        assert_eq!(determine_winner(DoorIndex::ALL[2], &game), Outcome::Win);
        assert_eq!(determine_winner(DoorIndex::ALL[0], &game), Outcome::Lose);
        assert_eq!(determine_winner(DoorIndex::ALL[1], &game), Outcome::Lose);
    }

    #[test]
    fn evaluation_is_repeatable() {
        let game = Arrangement::with_car_at(DoorIndex::ALL[0]);
        for door in DoorIndex::ALL {
            assert_eq!(determine_winner(door, &game), determine_winner(door, &game));
        }
    }

    #[test]
    fn outcome_labels() {
        assert_eq!(Outcome::Win.to_string(), "WIN");
        assert_eq!(Outcome::Lose.to_string(), "LOSE");
        assert!(Outcome::Win.is_win());
    }
}
