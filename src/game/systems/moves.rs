//! Move resolution system.
//!
//! Validates a move against the player registry, the cooldown tracker and the
//! grid bounds, then repaints the affected cells. Every rejection happens before
//! any mutation.

use log::debug;
use thiserror::Error;

use crate::game::commands::CommandKind;
use crate::game::grid::{Grid, enclosed_region, frontier, random_walk_grow};
use crate::game::state::GameState;
use crate::game::types::{Cell, MoveResult, PlayerId, Position, Target};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveRejection {
    #[error("unknown player {0}")]
    UnknownPlayer(PlayerId),
    #[error("{kind:?} is cooling down until round {ready_at}")]
    CoolingDown { kind: CommandKind, ready_at: u64 },
    #[error("{0:?} needs a target")]
    MissingTarget(CommandKind),
    #[error("{kind:?} takes at most {max} targets, got {got}")]
    TooManyTargets { kind: CommandKind, max: usize, got: usize },
    #[error("target ({x}, {y}) is off the grid")]
    OffGrid { x: i64, y: i64 },
}

/// Applies a move for `player_id`. Rejections leave the state untouched.
pub fn process_move(
    game_state: &mut GameState,
    player_id: PlayerId,
    kind: CommandKind,
    targets: &[Target],
) -> MoveResult {
    match try_move(game_state, player_id, kind, targets) {
        Ok(affected) => MoveResult::accepted(affected),
        Err(reason) => {
            debug!("[Moves] Rejected {:?} from {}: {}", kind, player_id, reason);
            MoveResult::rejected()
        }
    }
}

fn try_move(
    game_state: &mut GameState,
    player_id: PlayerId,
    kind: CommandKind,
    targets: &[Target],
) -> Result<Vec<Cell>, MoveRejection> {
    let round = game_state.round_number;
    let player = game_state
        .players
        .get(&player_id)
        .ok_or(MoveRejection::UnknownPlayer(player_id))?;

    if !player.can_use(kind, round) {
        return Err(MoveRejection::CoolingDown {
            kind,
            ready_at: player.ready_at(kind),
        });
    }
    let color = player.color.clone();

    let grid = &game_state.grid;
    let positions = match kind {
        CommandKind::Paint => vec![target_position(grid, kind, targets)?],
        CommandKind::Bomb => {
            let origin = target_position(grid, kind, targets)?;
            let size = kind.rule().size.unwrap_or(1);
            random_walk_grow(grid, origin, size, &mut game_state.rng)
        }
        CommandKind::Eat => enclosed_region(grid, &color),
        CommandKind::Expand => frontier(grid, &color),
    };

    let affected: Vec<Cell> = positions
        .into_iter()
        .filter_map(|pos| game_state.grid.paint(pos, &color))
        .collect();

    if let Some(player) = game_state.players.get_mut(&player_id) {
        player.mark_used(kind, round);
    }
    game_state.round_changes.extend(affected.iter().cloned());

    debug!(
        "[Moves] {:?} by {} painted {} cells in round {}",
        kind,
        player_id,
        affected.len(),
        round
    );
    Ok(affected)
}

/// The single in-bounds target of a targeted command.
fn target_position(
    grid: &Grid,
    kind: CommandKind,
    targets: &[Target],
) -> Result<Position, MoveRejection> {
    let max = kind.rule().max_targets;
    if targets.len() > max {
        return Err(MoveRejection::TooManyTargets {
            kind,
            max,
            got: targets.len(),
        });
    }
    let target = targets.first().ok_or(MoveRejection::MissingTarget(kind))?;
    grid.position(target.x, target.y)
        .ok_or(MoveRejection::OffGrid { x: target.x, y: target.y })
}
