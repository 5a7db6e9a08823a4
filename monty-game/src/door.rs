//! Doors, prizes, and the arrangement hidden behind them.
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::DOOR_COUNT;
use crate::error::GameError;

/// One of the three doors on stage, numbered 1 through 3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct DoorIndex(u8);

impl DoorIndex {
    /// Every door, in stage order.
    pub const ALL: [Self; DOOR_COUNT] = [Self(1), Self(2), Self(3)];

    /// Validate a raw door number.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidDoor`] for anything outside `1..=3`.
    pub fn new(value: u8) -> Result<Self, GameError> {
        match value {
            1..=3 => Ok(Self(value)),
            _ => Err(GameError::InvalidDoor(value)),
        }
    }

    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Door at a zero-based slot, or `None` past the last door.
    #[must_use]
    pub const fn from_slot(slot: usize) -> Option<Self> {
        if slot < DOOR_COUNT {
            Some(Self::ALL[slot])
        } else {
            None
        }
    }

    /// Map a raw draw onto a door, wrapping around the stage.
    pub(crate) const fn from_draw(draw: usize) -> Self {
        Self::ALL[draw % DOOR_COUNT]
    }

    /// The two doors other than this one, in stage order.
    #[must_use]
    pub const fn others(self) -> [Self; 2] {
        match self.0 {
            1 => [Self(2), Self(3)],
            2 => [Self(1), Self(3)],
            _ => [Self(1), Self(2)],
        }
    }

    /// The single door that is neither `a` nor `b`, or `None` when they coincide.
    #[must_use]
    pub const fn remaining(a: Self, b: Self) -> Option<Self> {
        if a.0 == b.0 {
            return None;
        }
        // Door numbers always sum to 6.
        Some(Self(6 - a.0 - b.0))
    }
}

impl TryFrom<u8> for DoorIndex {
    type Error = GameError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<DoorIndex> for u8 {
    fn from(door: DoorIndex) -> Self {
        door.0
    }
}

impl fmt::Display for DoorIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// What waits behind a door.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Prize {
    Car,
    Goat,
}

impl fmt::Display for Prize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Car => write!(f, "car"),
            Self::Goat => write!(f, "goat"),
        }
    }
}

/// Placement of one car and two goats behind the three doors.
///
/// Only the car's door is stored, so an arrangement can never hold a
/// second car or lose its only one. Serialized as the label list,
/// e.g. `["goat","car","goat"]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Prize>", into = "Vec<Prize>")]
pub struct Arrangement {
    car: DoorIndex,
}

impl Arrangement {
    #[must_use]
    pub const fn with_car_at(car: DoorIndex) -> Self {
        Self { car }
    }

    /// Build an arrangement from an explicit label list.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::ArrangementLength`] unless exactly three labels are
    /// given, and [`GameError::CarCount`] unless exactly one of them is a car.
    pub fn from_labels(labels: &[Prize]) -> Result<Self, GameError> {
        if labels.len() != DOOR_COUNT {
            return Err(GameError::ArrangementLength(labels.len()));
        }
        let cars: Vec<usize> = labels
            .iter()
            .enumerate()
            .filter(|(_, prize)| **prize == Prize::Car)
            .map(|(slot, _)| slot)
            .collect();
        match cars.as_slice() {
            [slot] => DoorIndex::from_slot(*slot)
                .map(Self::with_car_at)
                .ok_or(GameError::ArrangementLength(labels.len())),
            _ => Err(GameError::CarCount(cars.len())),
        }
    }

    #[must_use]
    pub const fn car_door(&self) -> DoorIndex {
        self.car
    }

    #[must_use]
    pub fn prize_at(&self, door: DoorIndex) -> Prize {
        if door == self.car {
            Prize::Car
        } else {
            Prize::Goat
        }
    }

    /// Labels in stage order.
    #[must_use]
    pub fn labels(&self) -> [Prize; DOOR_COUNT] {
        DoorIndex::ALL.map(|door| self.prize_at(door))
    }

    #[must_use]
    pub const fn goat_doors(&self) -> [DoorIndex; 2] {
        self.car.others()
    }
}

impl TryFrom<Vec<Prize>> for Arrangement {
    type Error = GameError;

    fn try_from(labels: Vec<Prize>) -> Result<Self, Self::Error> {
        Self::from_labels(&labels)
    }
}

impl From<Arrangement> for Vec<Prize> {
    fn from(arrangement: Arrangement) -> Self {
        arrangement.labels().to_vec()
    }
}

impl fmt::Display for Arrangement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c] = self.labels();
        write!(f, "[{a}, {b}, {c}]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn door(value: u8) -> DoorIndex {
        DoorIndex::new(value).unwrap()
    }

    #[test]
    fn door_index_rejects_out_of_range() {
        assert_eq!(DoorIndex::new(0), Err(GameError::InvalidDoor(0)));
        assert_eq!(DoorIndex::new(4), Err(GameError::InvalidDoor(4)));
        assert_eq!(door(3).get(), 3);
        assert_eq!(DoorIndex::from_draw(4), door(2));
    }

    #[test]
    fn from_slot_rejects_slots_past_the_stage() {
        assert_eq!(DoorIndex::from_slot(0), Some(door(1)));
        assert_eq!(DoorIndex::from_slot(2), Some(door(3)));
        assert_eq!(DoorIndex::from_slot(3), None);
        assert_eq!(DoorIndex::from_slot(7), None);
    }

    #[test]
    fn remaining_finds_the_third_door() {
        assert_eq!(DoorIndex::remaining(door(1), door(2)), Some(door(3)));
        assert_eq!(DoorIndex::remaining(door(3), door(1)), Some(door(2)));
        assert_eq!(DoorIndex::remaining(door(2), door(2)), None);
        assert_eq!(door(2).others(), [door(1), door(3)]);
    }

    #[test]
    fn arrangement_validates_labels() {
        let game = Arrangement::from_labels(&[Prize::Goat, Prize::Car, Prize::Goat]).unwrap();
        assert_eq!(game.car_door(), door(2));
        assert_eq!(game.prize_at(door(1)), Prize::Goat);
        assert_eq!(game.goat_doors(), [door(1), door(3)]);

        assert_eq!(
            Arrangement::from_labels(&[Prize::Car, Prize::Goat]),
            Err(GameError::ArrangementLength(2))
        );
        assert_eq!(
            Arrangement::from_labels(&[Prize::Car, Prize::Car, Prize::Goat]),
            Err(GameError::CarCount(2))
        );
        assert_eq!(
            Arrangement::from_labels(&[Prize::Goat; 3]),
            Err(GameError::CarCount(0))
        );
    }

    #[test]
    fn arrangement_serializes_as_labels() {
        let game = Arrangement::with_car_at(door(1));
        let json = serde_json::to_string(&game).unwrap();
        assert_eq!(json, r#"["car","goat","goat"]"#);
        let parsed: Arrangement = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, game);
        assert!(serde_json::from_str::<Arrangement>(r#"["car","car","goat"]"#).is_err());
        assert_eq!(game.to_string(), "[car, goat, goat]");
    }
}
