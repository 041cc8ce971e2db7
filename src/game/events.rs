//! Outbound game notifications.
//!
//! Publish/subscribe with one topic per event kind. Handlers run synchronously
//! on the publisher's timeline, in subscription order.

use std::collections::HashMap;
use std::fmt;

use serde::Serialize;

use crate::game::types::{AvailableCommand, Cell, PlayerId, Snapshot};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventTopic {
    GameStart,
    GameStop,
    TurnBegin,
    TurnChange,
    TurnEnd,
    RoundEnd,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum GameEvent {
    GameStart {
        snapshot: Snapshot,
    },
    GameStop {
        snapshot: Snapshot,
    },
    TurnBegin {
        player_id: PlayerId,
        snapshot: Snapshot,
    },
    TurnChange {
        player_id: PlayerId,
        snapshot: Snapshot,
        available_commands: Vec<AvailableCommand>,
    },
    TurnEnd {
        player_id: PlayerId,
        snapshot: Snapshot,
    },
    RoundEnd {
        snapshot: Snapshot,
        map_changes: Vec<Cell>,
    },
}

impl GameEvent {
    pub fn topic(&self) -> EventTopic {
        match self {
            GameEvent::GameStart { .. } => EventTopic::GameStart,
            GameEvent::GameStop { .. } => EventTopic::GameStop,
            GameEvent::TurnBegin { .. } => EventTopic::TurnBegin,
            GameEvent::TurnChange { .. } => EventTopic::TurnChange,
            GameEvent::TurnEnd { .. } => EventTopic::TurnEnd,
            GameEvent::RoundEnd { .. } => EventTopic::RoundEnd,
        }
    }
}

pub type SubscriptionId = u64;

pub type EventHandler = Box<dyn FnMut(&GameEvent)>;

#[derive(Default)]
pub struct EventBus {
    next_id: SubscriptionId,
    topics: HashMap<EventTopic, Vec<(SubscriptionId, EventHandler)>>,
}

impl fmt::Debug for EventBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let counts: HashMap<_, _> = self.topics.iter().map(|(t, s)| (t, s.len())).collect();
        f.debug_struct("EventBus").field("subscribers", &counts).finish()
    }
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, topic: EventTopic, handler: EventHandler) -> SubscriptionId {
        self.next_id += 1;
        let id = self.next_id;
        self.topics.entry(topic).or_default().push((id, handler));
        id
    }

    /// Returns false when the id is unknown.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        for handlers in self.topics.values_mut() {
            if let Some(pos) = handlers.iter().position(|(sub, _)| *sub == id) {
                handlers.remove(pos);
                return true;
            }
        }
        false
    }

    pub fn subscriber_count(&self, topic: EventTopic) -> usize {
        self.topics.get(&topic).map_or(0, Vec::len)
    }

    pub fn publish(&mut self, event: &GameEvent) {
        if let Some(handlers) = self.topics.get_mut(&event.topic()) {
            for (_, handler) in handlers.iter_mut() {
                handler(event);
            }
        }
    }
}
