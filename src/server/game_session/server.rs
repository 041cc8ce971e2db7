//! Game server actor.
//!
//! Owns the single `GameState`. Ticks, moves, joins and leaves all arrive as
//! actor messages, so every mutation runs on one sequential timeline.

use std::collections::HashMap;

use actix::prelude::*;
use actix::MessageResult;
use log::{debug, info, warn};
use uuid::Uuid;

use crate::config::GameSettings;
use crate::game::events::{EventTopic, SubscriptionId};
use crate::game::types::{MoveResult, PlayerId};
use crate::game::GameState;
use crate::server::game_session::clock::ActorClock;
use crate::server::game_session::messages::{
    Connect, Disconnect, GetSnapshot, JoinGame, ServerMessage, SessionRole, StartGame, StopGame,
    SubmitMove,
};

/// Topics every connected session listens to.
const SESSION_TOPICS: [EventTopic; 3] = [
    EventTopic::GameStart,
    EventTopic::GameStop,
    EventTopic::RoundEnd,
];

struct ConnectedSession {
    role: SessionRole,
    addr: Recipient<ServerMessage>,
    player_id: Option<PlayerId>,
    subscriptions: Vec<SubscriptionId>,
}

pub struct GameServer {
    game: GameState,
    sessions: HashMap<Uuid, ConnectedSession>,
    turn_timer: Option<SpawnHandle>,
}

impl Actor for GameServer {
    type Context = Context<Self>;
}

impl GameServer {
    pub fn new(settings: GameSettings) -> Self {
        Self::with_state(GameState::new(settings))
    }

    pub fn with_state(game: GameState) -> Self {
        Self {
            game,
            sessions: HashMap::new(),
            turn_timer: None,
        }
    }

    pub(crate) fn on_tick(&mut self) {
        self.game.tick();
    }

    /// Relays `topics` to the session, filtered for its joined player.
    fn subscribe(&mut self, session_id: Uuid, topics: &[EventTopic]) {
        let Some(session) = self.sessions.get_mut(&session_id) else {
            return;
        };
        for &topic in topics {
            let addr = session.addr.clone();
            let player = session.player_id;
            let id = self.game.events_mut().subscribe(
                topic,
                Box::new(move |event| {
                    if let Some(msg) = ServerMessage::relay(event, player) {
                        addr.do_send(msg);
                    }
                }),
            );
            session.subscriptions.push(id);
        }
    }
}

impl Handler<Connect> for GameServer {
    type Result = ();

    fn handle(&mut self, msg: Connect, _: &mut Context<Self>) -> Self::Result {
        debug!("[GameServer] Session connected: {} as {:?}", msg.session_id, msg.role);
        self.sessions.insert(
            msg.session_id,
            ConnectedSession {
                role: msg.role,
                addr: msg.addr,
                player_id: None,
                subscriptions: Vec::new(),
            },
        );
        self.subscribe(msg.session_id, &SESSION_TOPICS);
    }
}

impl Handler<Disconnect> for GameServer {
    type Result = ();

    fn handle(&mut self, msg: Disconnect, _: &mut Context<Self>) -> Self::Result {
        let Some(session) = self.sessions.remove(&msg.session_id) else {
            return;
        };
        for id in session.subscriptions {
            self.game.events_mut().unsubscribe(id);
        }
        if let Some(player_id) = session.player_id {
            self.game.remove_player(&player_id);
            info!("[GameServer] Player {} disconnected", player_id);
        }
    }
}

impl Handler<JoinGame> for GameServer {
    type Result = MessageResult<JoinGame>;

    fn handle(&mut self, msg: JoinGame, _: &mut Context<Self>) -> Self::Result {
        let Some(session) = self.sessions.get(&msg.session_id) else {
            warn!("[GameServer] Join from unknown session {}", msg.session_id);
            return MessageResult(None);
        };
        if session.role != SessionRole::Player {
            session
                .addr
                .do_send(ServerMessage::error("NOT_A_PLAYER", "Observers cannot join the game"));
            return MessageResult(None);
        }
        if let Some(existing) = session.player_id {
            warn!("[GameServer] Session {} already joined as {}", msg.session_id, existing);
            return MessageResult(Some(existing));
        }

        let player = self.game.add_player();
        if let Some(session) = self.sessions.get_mut(&msg.session_id) {
            session.player_id = Some(player.id);
            session.addr.do_send(ServerMessage::Joined {
                player_id: player.id,
                player_color: player.color.clone(),
            });
        }
        self.subscribe(msg.session_id, &[EventTopic::TurnChange]);
        MessageResult(Some(player.id))
    }
}

impl Handler<SubmitMove> for GameServer {
    type Result = MessageResult<SubmitMove>;

    fn handle(&mut self, msg: SubmitMove, _: &mut Context<Self>) -> Self::Result {
        let Some(session) = self.sessions.get(&msg.session_id) else {
            return MessageResult(MoveResult::rejected());
        };
        let Some(player_id) = session.player_id else {
            session
                .addr
                .do_send(ServerMessage::error("NOT_JOINED", "Join the game before moving"));
            return MessageResult(MoveResult::rejected());
        };

        let result = self.game.process_move(player_id, msg.command, &msg.targets);
        if !result.accepted {
            session
                .addr
                .do_send(ServerMessage::error("INVALID_MOVE", "Invalid move"));
        }
        MessageResult(result)
    }
}

impl Handler<GetSnapshot> for GameServer {
    type Result = MessageResult<GetSnapshot>;

    fn handle(&mut self, _: GetSnapshot, _: &mut Context<Self>) -> Self::Result {
        MessageResult(self.game.snapshot())
    }
}

impl Handler<StartGame> for GameServer {
    type Result = MessageResult<StartGame>;

    fn handle(&mut self, _: StartGame, ctx: &mut Context<Self>) -> Self::Result {
        let mut clock = ActorClock::new(ctx, &mut self.turn_timer);
        self.game.start(&mut clock);
        MessageResult(self.game.snapshot())
    }
}

impl Handler<StopGame> for GameServer {
    type Result = MessageResult<StopGame>;

    fn handle(&mut self, _: StopGame, ctx: &mut Context<Self>) -> Self::Result {
        let mut clock = ActorClock::new(ctx, &mut self.turn_timer);
        self.game.stop(&mut clock);
        MessageResult(self.game.snapshot())
    }
}
