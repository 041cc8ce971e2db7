//! Pixel arena backend.
//!
//! Turn-based territory painting: players claim grid cells with commands gated
//! by per-command cooldowns while a timer activates them in rotation.
//! `game` holds the engine and state machine, `server` the actix transport.

pub mod config;
pub mod game;
pub mod server;
