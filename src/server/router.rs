//! HTTP and WebSocket routing configuration.
//!
//! Control endpoints are plain GET handlers; each WebSocket endpoint is handled
//! by a dedicated session actor.

use actix_web::web;

use crate::server::game_session::session::{ws_observer, ws_player};
use crate::server::http::{game_state, start_game, stop_game};

/// Configure the application's HTTP/WebSocket routes.
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/game-state").route(web::get().to(game_state)))
        .service(web::resource("/start").route(web::get().to(start_game)))
        .service(web::resource("/stop").route(web::get().to(stop_game)))
        .service(web::resource("/ws/player").to(ws_player))
        .service(web::resource("/ws/observer").to(ws_observer));
}
