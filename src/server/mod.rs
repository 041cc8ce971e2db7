// src/server/mod.rs

//! Server layer root module.
//!
//! This module organizes the transport around the game core, including:
//! - Application state management
//! - HTTP control endpoints and routing
//! - The game server actor and its WebSocket sessions
//! - Error response helpers

pub mod game_session;
pub mod http;
pub mod router;
pub mod state;
pub mod ws_error;
