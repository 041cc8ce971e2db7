//! Grid storage and the territory engine built on it.

pub mod grid;
pub mod territory;

pub use grid::*;
pub use territory::*;
