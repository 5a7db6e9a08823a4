//! Shared game constants.

/// Number of doors on stage.
pub const DOOR_COUNT: usize = 3;

/// Games played by a batch when the caller does not ask for a specific count.
pub const DEFAULT_TRIALS: usize = 100;

/// Decimal places used when win proportions are reported.
pub const REPORT_DECIMALS: u8 = 2;

/// Domain tag mixed into user seeds before they key the game RNG stream.
pub const STREAM_DOMAIN: &[u8] = b"monty-hall-doors";
