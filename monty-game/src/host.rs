//! The host's goat reveal.
use serde::Serialize;

use crate::door::{Arrangement, DoorIndex};
use crate::rng::RandomSource;
use crate::strategy::Strategy;

/// A door opened by the host next to the contestant's pick.
///
/// Only built by [`reveal`], so `opened` is always a goat and never `pick`,
/// and `closed` is the single other unopened door.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Reveal {
    pick: DoorIndex,
    opened: DoorIndex,
    closed: DoorIndex,
}

impl Reveal {
    #[must_use]
    pub const fn pick(&self) -> DoorIndex {
        self.pick
    }

    #[must_use]
    pub const fn opened(&self) -> DoorIndex {
        self.opened
    }

    /// Where the contestant ends up under `strategy`.
    #[must_use]
    pub const fn final_pick(&self, strategy: Strategy) -> DoorIndex {
        match strategy {
            Strategy::Stay => self.pick,
            Strategy::Switch => self.closed,
        }
    }
}

/// Open a goat door that is not the contestant's pick.
///
/// A goat pick leaves exactly one eligible door, opened without a draw. A car
/// pick leaves two goats and the host chooses between them uniformly.
pub fn reveal<R: RandomSource + ?Sized>(
    game: &Arrangement,
    pick: DoorIndex,
    rng: &mut R,
) -> Reveal {
    let car = game.car_door();
    if let Some(opened) = DoorIndex::remaining(pick, car) {
        return Reveal {
            pick,
            opened,
            closed: car,
        };
    }
    let goats = pick.others();
    let choice = rng.pick_index(goats.len()) % goats.len();
    Reveal {
        pick,
        opened: goats[choice],
        closed: goats[1 - choice],
    }
}

/// Door number the host opens for `pick`.
pub fn open_goat_door<R: RandomSource + ?Sized>(
    game: &Arrangement,
    pick: DoorIndex,
    rng: &mut R,
) -> DoorIndex {
    reveal(game, pick, rng).opened()
}
