/// Main configuration module.
///
/// Re-exports submodules for game and server configuration.
pub mod game;
pub mod server;

use std::fmt::Display;
use std::str::FromStr;

use log::warn;

pub use game::GameSettings;

/// Reads and parses an environment variable. Unparsable values are logged and ignored.
pub fn env_override<T>(name: &str) -> Option<T>
where
    T: FromStr,
    T::Err: Display,
{
    let raw = std::env::var(name).ok()?;
    match raw.parse() {
        Ok(value) => Some(value),
        Err(e) => {
            warn!("[Config] Ignoring {}={:?}: {}", name, raw, e);
            None
        }
    }
}
