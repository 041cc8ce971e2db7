//! WebSocket session handlers for players and observers.
//!
//! Each connection is an actor that registers with the game server on start,
//! relays parsed client messages to it, and serializes server messages back
//! to the client. Closing a player connection removes the player.
use actix::prelude::*;
use actix_web::{Error, HttpRequest, HttpResponse, web};
use actix_web_actors::ws;
use log::{error, warn};
use uuid::Uuid;

use crate::server::game_session::messages::{
    ClientMessage, Connect, Disconnect, JoinGame, ServerMessage, SessionRole, SubmitMove,
};
use crate::server::game_session::server::GameServer;
use crate::server::state::AppState;
use crate::server::ws_error::ws_error_message;

pub struct GameSessionActor {
    pub session_id: Uuid,
    pub role: SessionRole,
    pub server: Addr<GameServer>,
}

impl GameSessionActor {
    pub fn new(role: SessionRole, server: Addr<GameServer>) -> Self {
        Self {
            session_id: Uuid::new_v4(),
            role,
            server,
        }
    }

    fn handle_text(&mut self, text: &str, ctx: &mut ws::WebsocketContext<Self>) {
        // Observers are read-only.
        if self.role == SessionRole::Observer {
            return;
        }
        match serde_json::from_str::<ClientMessage>(text) {
            Ok(ClientMessage::Join) => {
                self.server.do_send(JoinGame {
                    session_id: self.session_id,
                });
            }
            Ok(ClientMessage::PlayerMove { command, targets }) => {
                self.server.do_send(SubmitMove {
                    session_id: self.session_id,
                    command,
                    targets,
                });
            }
            Err(e) => {
                warn!("[Session] Invalid message from {}: {}", self.session_id, e);
                ctx.text(ws_error_message(
                    "INVALID_MESSAGE",
                    "Invalid client message",
                    Some(&self.session_id.to_string()),
                ));
            }
        }
    }
}

impl Actor for GameSessionActor {
    type Context = ws::WebsocketContext<Self>;

    /// Registers the session with the game server.
    fn started(&mut self, ctx: &mut Self::Context) {
        self.server.do_send(Connect {
            session_id: self.session_id,
            role: self.role,
            addr: ctx.address().recipient(),
        });
    }

    /// Unregisters the session; a joined player leaves the game.
    fn stopped(&mut self, _ctx: &mut Self::Context) {
        self.server.do_send(Disconnect {
            session_id: self.session_id,
        });
    }
}

impl StreamHandler<Result<ws::Message, ws::ProtocolError>> for GameSessionActor {
    fn handle(&mut self, msg: Result<ws::Message, ws::ProtocolError>, ctx: &mut Self::Context) {
        match msg {
            Ok(ws::Message::Text(text)) => self.handle_text(&text, ctx),
            Ok(ws::Message::Ping(msg)) => ctx.pong(&msg),
            Ok(ws::Message::Close(reason)) => {
                ctx.close(reason);
                ctx.stop();
            }
            Err(e) => {
                warn!("[Session] Protocol error on {}: {}", self.session_id, e);
                ctx.stop();
            }
            _ => (),
        }
    }
}

impl Handler<ServerMessage> for GameSessionActor {
    type Result = ();

    fn handle(&mut self, msg: ServerMessage, ctx: &mut Self::Context) -> Self::Result {
        match serde_json::to_string(&msg) {
            Ok(text) => ctx.text(text),
            Err(e) => {
                error!("[Session] Failed to serialize ServerMessage: {}", e);
                ctx.text(ws_error_message("INTERNAL_ERROR", "Internal server error", None));
                ctx.close(Some(ws::CloseReason {
                    code: ws::CloseCode::Error,
                    description: Some("Internal server error".into()),
                }));
                ctx.stop();
            }
        }
    }
}

/// WebSocket endpoint for players. Clients send `join`, then `playerMove`.
pub async fn ws_player(
    req: HttpRequest,
    stream: web::Payload,
    data: web::Data<AppState>,
) -> Result<HttpResponse, Error> {
    ws::start(
        GameSessionActor::new(SessionRole::Player, data.game_server.clone()),
        &req,
        stream,
    )
}

/// WebSocket endpoint for observers. Receives round updates and lifecycle changes.
pub async fn ws_observer(
    req: HttpRequest,
    stream: web::Payload,
    data: web::Data<AppState>,
) -> Result<HttpResponse, Error> {
    ws::start(
        GameSessionActor::new(SessionRole::Observer, data.game_server.clone()),
        &req,
        stream,
    )
}
