//! Main entry point for the backend server.
//!
//! Initializes the game server actor, configures application state, and launches the HTTP server
//! with the control endpoints and the player/observer WebSocket endpoints.

use std::time::Duration;

use actix::Actor;
use actix_web::{App, HttpServer, web};
use log::info;

use pixel_arena::config::server::{BIND_ADDRESS, PORT, PORT_ENV, TURN_TIME_ENV};
use pixel_arena::config::{GameSettings, env_override};
use pixel_arena::server::game_session::GameServer;
use pixel_arena::server::http::not_found;
use pixel_arena::server::router;
use pixel_arena::server::state::AppState;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize logger from environment variable (RUST_LOG).
    env_logger::init();

    let mut settings = GameSettings::default();
    if let Some(ms) = env_override::<u64>(TURN_TIME_ENV) {
        settings.turn_duration = Duration::from_millis(ms);
    }
    let port = env_override(PORT_ENV).unwrap_or(PORT);

    info!(
        "[Main] {}x{} grid, {:?} per turn",
        settings.width, settings.height, settings.turn_duration
    );

    // Start the GameServer actor (owns the game state and the turn timer).
    let game_server = GameServer::new(settings).start();

    // Shared application state for HTTP/WebSocket handlers.
    let state = web::Data::new(AppState::new(game_server));

    info!("[Main] Pixel arena server running on http://{}:{}", BIND_ADDRESS, port);

    HttpServer::new(move || {
        App::new()
            .wrap(
                actix_web::middleware::DefaultHeaders::new()
                    .add(("Access-Control-Allow-Origin", "*"))
                    .add(("Access-Control-Allow-Methods", "GET, POST, OPTIONS"))
                    .add(("Access-Control-Allow-Headers", "Content-Type")),
            )
            .app_data(state.clone())
            .configure(router::config)
            .default_service(web::to(not_found))
    })
    .bind((BIND_ADDRESS, port))?
    .run()
    .await
}
