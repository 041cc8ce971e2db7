//! HTTP control endpoints.
//!
//! Each handler forwards to the game server actor and answers with the
//! resulting snapshot as JSON.

use actix::MailboxError;
use actix_web::{HttpRequest, HttpResponse, http::StatusCode, web};
use log::error;

use crate::server::game_session::messages::{GetSnapshot, StartGame, StopGame};
use crate::server::state::AppState;
use crate::server::ws_error::http_error_response;

fn unavailable(e: MailboxError) -> HttpResponse {
    error!("[Http] Game server unreachable: {}", e);
    http_error_response(
        "SERVER_UNAVAILABLE",
        "Game server is not running",
        Some(&e.to_string()),
        StatusCode::INTERNAL_SERVER_ERROR,
    )
}

/// `GET /game-state`
pub async fn game_state(data: web::Data<AppState>) -> HttpResponse {
    match data.game_server.send(GetSnapshot).await {
        Ok(snapshot) => HttpResponse::Ok().json(snapshot),
        Err(e) => unavailable(e),
    }
}

/// `GET /start`
pub async fn start_game(data: web::Data<AppState>) -> HttpResponse {
    match data.game_server.send(StartGame).await {
        Ok(snapshot) => HttpResponse::Ok().json(snapshot),
        Err(e) => unavailable(e),
    }
}

/// `GET /stop`
pub async fn stop_game(data: web::Data<AppState>) -> HttpResponse {
    match data.game_server.send(StopGame).await {
        Ok(snapshot) => HttpResponse::Ok().json(snapshot),
        Err(e) => unavailable(e),
    }
}

pub async fn not_found(req: HttpRequest) -> HttpResponse {
    http_error_response("NOT_FOUND", "Not found", Some(req.path()), StatusCode::NOT_FOUND)
}
