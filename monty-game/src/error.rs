//! Validation errors surfaced at the library boundary.
use thiserror::Error;

use crate::door::DoorIndex;

/// Errors raised when caller input violates a game precondition.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("door index {0} is outside 1..=3")]
    InvalidDoor(u8),
    #[error("arrangement must cover exactly 3 doors (got {0})")]
    ArrangementLength(usize),
    #[error("arrangement must hold exactly one car (got {0})")]
    CarCount(usize),
    #[error("opened door {door} is the contestant's own pick")]
    DoorCollision { door: DoorIndex },
    #[error("unknown strategy '{0}' (expected 'stay' or 'switch')")]
    InvalidStrategy(String),
    #[error("trial count must be positive")]
    NonPositiveTrials,
}
