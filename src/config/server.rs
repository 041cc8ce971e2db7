/// Server configuration constants.
///
/// Address and port the HTTP/WebSocket server binds to.
pub const BIND_ADDRESS: &str = "127.0.0.1";

/// Default listening port. Can be overridden with the `PORT` environment variable.
pub const PORT: u16 = 3000;

/// Environment variable overriding the port.
pub const PORT_ENV: &str = "PORT";

/// Environment variable overriding the turn duration (milliseconds).
pub const TURN_TIME_ENV: &str = "TURN_TIME_MS";
