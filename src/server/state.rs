// src/server/state.rs

//! Application state for the backend server.
//!
//! Holds the game server actor address, shared between HTTP/WebSocket handlers.

use actix::Addr;

use crate::server::game_session::server::GameServer;

/// Shared application state, injected into HTTP/WebSocket handlers.
pub struct AppState {
    /// Address of the game server actor (owns the game state and turn timer).
    pub game_server: Addr<GameServer>,
}

impl AppState {
    pub fn new(game_server: Addr<GameServer>) -> Self {
        AppState { game_server }
    }
}
