use actix::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::game::events::GameEvent;
use crate::game::types::{Cell, MoveResult, PlayerId, Position, Snapshot, Target};
use crate::game::CommandKind;

/// Kind of WebSocket connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionRole {
    Player,
    Observer,
}

// Client -> server
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ClientMessage {
    Join,
    PlayerMove {
        command: CommandKind,
        #[serde(default)]
        targets: Vec<Target>,
    },
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerCommand {
    #[serde(rename = "type")]
    pub kind: CommandKind,
    pub available_targets: Vec<Position>,
}

// Server -> client
#[derive(Message, Debug, Clone, Serialize)]
#[rtype(result = "()")]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum ServerMessage {
    Joined {
        player_id: PlayerId,
        player_color: String,
    },
    PlayerTurn {
        available_commands: Vec<PlayerCommand>,
    },
    GameUpdate {
        round: u64,
        map_changes: Vec<Cell>,
    },
    GameStarted {
        state: Snapshot,
    },
    GameStopped {
        state: Snapshot,
    },
    Error {
        code: String,
        message: String,
    },
}

impl ServerMessage {
    pub fn error(code: &str, message: &str) -> Self {
        Self::Error {
            code: code.to_string(),
            message: message.to_string(),
        }
    }

    /// Translates a game event for a session. `player` is the session's
    /// joined player; turn notifications only go to that player.
    pub fn relay(event: &GameEvent, player: Option<PlayerId>) -> Option<Self> {
        match event {
            GameEvent::TurnChange {
                player_id,
                available_commands,
                ..
            } if Some(*player_id) == player => Some(Self::PlayerTurn {
                available_commands: available_commands
                    .iter()
                    .map(|c| PlayerCommand {
                        kind: c.command,
                        available_targets: c.targets.clone(),
                    })
                    .collect(),
            }),
            GameEvent::RoundEnd {
                snapshot,
                map_changes,
            } if !map_changes.is_empty() => Some(Self::GameUpdate {
                round: snapshot.round_number,
                map_changes: map_changes.clone(),
            }),
            GameEvent::GameStart { snapshot } => Some(Self::GameStarted {
                state: snapshot.clone(),
            }),
            GameEvent::GameStop { snapshot } => Some(Self::GameStopped {
                state: snapshot.clone(),
            }),
            _ => None,
        }
    }
}

// Session -> game server
#[derive(Message)]
#[rtype(result = "()")]
pub struct Connect {
    pub session_id: Uuid,
    pub role: SessionRole,
    pub addr: Recipient<ServerMessage>,
}

#[derive(Message)]
#[rtype(result = "()")]
pub struct Disconnect {
    pub session_id: Uuid,
}

#[derive(Message)]
#[rtype(result = "Option<PlayerId>")]
pub struct JoinGame {
    pub session_id: Uuid,
}

#[derive(Message)]
#[rtype(result = "MoveResult")]
pub struct SubmitMove {
    pub session_id: Uuid,
    pub command: CommandKind,
    pub targets: Vec<Target>,
}

// HTTP control -> game server
#[derive(Message)]
#[rtype(result = "Snapshot")]
pub struct GetSnapshot;

#[derive(Message)]
#[rtype(result = "Snapshot")]
pub struct StartGame;

#[derive(Message)]
#[rtype(result = "Snapshot")]
pub struct StopGame;
