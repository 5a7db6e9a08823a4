//! Stage setup and the contestant's opening pick.
use crate::constants::DOOR_COUNT;
use crate::door::{Arrangement, DoorIndex};
use crate::rng::RandomSource;

/// Deal one car and two goats behind the doors.
///
/// The labels are dealt without replacement in the order car, goat, goat, so
/// the car lands on the first slot drawn. A source that deals nothing falls
/// back to a uniform pick for the car.
pub fn create_game<R: RandomSource + ?Sized>(rng: &mut R) -> Arrangement {
    let dealt = rng.sample_indices(DOOR_COUNT, DOOR_COUNT);
    let car_slot = match dealt.first() {
        Some(slot) => *slot,
        None => rng.pick_index(DOOR_COUNT),
    };
    Arrangement::with_car_at(DoorIndex::from_draw(car_slot))
}

/// The contestant's initial pick, independent of the arrangement.
pub fn select_door<R: RandomSource + ?Sized>(rng: &mut R) -> DoorIndex {
    DoorIndex::from_draw(rng.pick_index(DOOR_COUNT))
}
