//! Stay/switch strategies and the final-door decision.
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::door::DoorIndex;
use crate::error::GameError;

/// What the contestant does once the host has opened a goat door.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Keep the initial pick.
    Stay,
    /// Move to the last unopened door.
    Switch,
}

impl Strategy {
    pub const ALL: [Self; 2] = [Self::Stay, Self::Switch];

    #[must_use]
    pub const fn from_stay_flag(stay: bool) -> Self {
        if stay { Self::Stay } else { Self::Switch }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Stay => "stay",
            Self::Switch => "switch",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Strategy {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "stay" => Ok(Self::Stay),
            "switch" => Ok(Self::Switch),
            _ => Err(GameError::InvalidStrategy(s.to_string())),
        }
    }
}

/// Resolve the contestant's final door.
///
/// Staying always returns `pick`. Switching returns the one door that is
/// neither `opened` nor `pick`.
///
/// # Errors
///
/// Returns [`GameError::DoorCollision`] when switching away from a pick the
/// host claims to have opened.
pub fn change_door(
    strategy: Strategy,
    opened: DoorIndex,
    pick: DoorIndex,
) -> Result<DoorIndex, GameError> {
    match strategy {
        Strategy::Stay => Ok(pick),
        Strategy::Switch => {
            DoorIndex::remaining(opened, pick).ok_or(GameError::DoorCollision { door: pick })
        }
    }
}
