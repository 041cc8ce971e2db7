pub mod moves;
pub mod turns;

pub use moves::*;
pub use turns::*;
