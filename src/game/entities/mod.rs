//! Game entities module.
//!
//! This module organizes player entity logic and the player registry.

pub mod player;
pub mod registry;

pub use player::*;
pub use registry::*;
