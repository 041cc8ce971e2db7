//! Game core: grid and territory engine, command rules, players, move
//! resolution and the turn/round state machine.

pub mod commands;
pub mod entities;
pub mod events;
pub mod grid;
pub mod scheduler;
pub mod state;
pub mod systems;
pub mod types;


pub use commands::{CommandKind, CommandRule};
pub use events::{EventBus, EventTopic, GameEvent, SubscriptionId};
pub use scheduler::{ManualClock, TurnClock};
pub use state::GameState;
pub use types::*;
