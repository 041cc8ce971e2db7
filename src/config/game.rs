/// Game configuration constants.
///
/// This module defines the main gameplay parameters such as turn duration,
/// grid dimensions and the bounds used by the random-walk growth.
use std::time::Duration;

/// Duration of a single turn in milliseconds.
pub const TURN_DURATION_MS: u64 = 1000;

/// Number of columns in the game grid.
pub const GRID_WIDTH: usize = 10;

/// Number of rows in the game grid.
pub const GRID_HEIGHT: usize = 10;

/// Color token of an unclaimed cell.
pub const NEUTRAL_COLOR: &str = "#000000";

/// Consecutive walk steps without growth before the walk jumps to another painted cell.
pub const WALK_STALL_LIMIT: usize = 32;

/// Walk steps allowed per requested cell before the walk falls back to direct growth.
pub const WALK_STEPS_PER_CELL: usize = 256;

/// Runtime game parameters. Defaults come from the constants above.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSettings {
    pub width: usize,
    pub height: usize,
    pub turn_duration: Duration,
    /// Paint one random neutral cell for each joining player.
    pub seed_start_cell: bool,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            width: GRID_WIDTH,
            height: GRID_HEIGHT,
            turn_duration: Duration::from_millis(TURN_DURATION_MS),
            seed_start_cell: true,
        }
    }
}

impl GameSettings {
    /// Settings for a bare grid: no starting cells are painted on join.
    pub fn bare(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            seed_start_cell: false,
            ..Self::default()
        }
    }
}
