//! Turn rotation system.
//!
//! One tick activates one player. The player is picked from the live registry
//! at `turn_number mod player_count`, so joins and leaves between ticks shift
//! the rotation.

use std::mem;

use log::debug;

use crate::game::events::GameEvent;
use crate::game::state::GameState;
use crate::game::types::Lifecycle;

pub fn advance_turn(game_state: &mut GameState) {
    if game_state.lifecycle != Lifecycle::Playing {
        return;
    }
    let player_count = game_state.players.len();
    if player_count == 0 {
        return;
    }

    let slot = game_state.turn_number % player_count;
    let Some(player_id) = game_state.players.nth(slot).map(|p| p.id) else {
        return;
    };

    game_state.active_player = Some(player_id);
    let snapshot = game_state.snapshot();
    game_state.events.publish(&GameEvent::TurnBegin { player_id, snapshot });

    let available_commands = game_state.available_commands(player_id, game_state.round_number);
    let snapshot = game_state.snapshot();
    game_state.events.publish(&GameEvent::TurnChange {
        player_id,
        snapshot,
        available_commands,
    });

    game_state.turn_number += 1;
    let snapshot = game_state.snapshot();
    game_state.events.publish(&GameEvent::TurnEnd { player_id, snapshot });

    // A leave can shrink the registry below the turn counter.
    if game_state.turn_number >= player_count {
        game_state.turn_number = 0;
        game_state.round_number += 1;
        let map_changes = mem::take(&mut game_state.round_changes);
        debug!(
            "[Turns] Round {} ended with {} changed cells",
            game_state.round_number,
            map_changes.len()
        );
        let snapshot = game_state.snapshot();
        game_state.events.publish(&GameEvent::RoundEnd { snapshot, map_changes });
    }
}
