//! Turn clock backed by the game server's actor context.

use std::time::Duration;

use actix::prelude::*;

use crate::game::TurnClock;
use crate::server::game_session::server::GameServer;

/// Arms an actix interval that ticks the game. The spawn handle is the
/// cancellation token; it lives in the actor so later calls can cancel it.
pub struct ActorClock<'a> {
    ctx: &'a mut Context<GameServer>,
    handle: &'a mut Option<SpawnHandle>,
}

impl<'a> ActorClock<'a> {
    pub fn new(ctx: &'a mut Context<GameServer>, handle: &'a mut Option<SpawnHandle>) -> Self {
        Self { ctx, handle }
    }
}

impl TurnClock for ActorClock<'_> {
    fn arm(&mut self, period: Duration) {
        self.disarm();
        let handle = self.ctx.run_interval(period, |act, _ctx| {
            act.on_tick();
        });
        *self.handle = Some(handle);
    }

    fn disarm(&mut self) {
        if let Some(handle) = self.handle.take() {
            self.ctx.cancel_future(handle);
        }
    }

    fn is_armed(&self) -> bool {
        self.handle.is_some()
    }
}
