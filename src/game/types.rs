use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::game::commands::CommandKind;
use crate::game::entities::Player;

/// Opaque player identifier.
pub type PlayerId = Uuid;

/// An in-bounds grid coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

/// A caller-supplied target. May lie outside the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Target {
    pub x: i64,
    pub y: i64,
}

impl Target {
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
}

/// One grid position and its current owner color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub x: usize,
    pub y: usize,
    pub color: String,
}

impl Cell {
    pub fn position(&self) -> Position {
        Position::new(self.x, self.y)
    }

    pub fn is_owned_by(&self, color: &str) -> bool {
        self.color == color
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lifecycle {
    Waiting,
    Playing,
}

/// Outcome of a move. `affected` is empty whenever `accepted` is false.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoveResult {
    pub accepted: bool,
    pub affected: Vec<Cell>,
}

impl MoveResult {
    pub fn accepted(affected: Vec<Cell>) -> Self {
        Self { accepted: true, affected }
    }

    pub fn rejected() -> Self {
        Self { accepted: false, affected: Vec::new() }
    }
}

/// A command advertised to the active player with its candidate targets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AvailableCommand {
    pub command: CommandKind,
    pub targets: Vec<Position>,
}

/// Grid serialized row-major from (0, 0).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MapSnapshot {
    pub width: usize,
    pub height: usize,
    pub pixels: Vec<String>,
}

/// Full observable game state, as sent to collaborators.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub state: Lifecycle,
    pub turn_number: usize,
    pub round_number: u64,
    pub active_player: Option<PlayerId>,
    pub players: Vec<Player>,
    pub map: MapSnapshot,
}
