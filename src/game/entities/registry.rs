//! Insertion-ordered player table.
//!
//! Turn rotation indexes into this table, so iteration order must be the join
//! order. Players live in a slot array; a map resolves ids to slots.

use std::collections::HashMap;

use crate::game::entities::Player;
use crate::game::types::PlayerId;

#[derive(Debug, Clone, Default)]
pub struct PlayerRegistry {
    slots: Vec<Player>,
    index: HashMap<PlayerId, usize>,
}

impl PlayerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Appends a player. A duplicate id replaces the existing entry in place.
    pub fn insert(&mut self, player: Player) {
        match self.index.get(&player.id) {
            Some(&slot) => self.slots[slot] = player,
            None => {
                self.index.insert(player.id, self.slots.len());
                self.slots.push(player);
            }
        }
    }

    pub fn remove(&mut self, id: &PlayerId) -> Option<Player> {
        let slot = self.index.remove(id)?;
        let player = self.slots.remove(slot);
        for later in &self.slots[slot..] {
            if let Some(entry) = self.index.get_mut(&later.id) {
                *entry -= 1;
            }
        }
        Some(player)
    }

    pub fn get(&self, id: &PlayerId) -> Option<&Player> {
        self.index.get(id).map(|&slot| &self.slots[slot])
    }

    pub fn get_mut(&mut self, id: &PlayerId) -> Option<&mut Player> {
        self.index.get(id).map(|&slot| &mut self.slots[slot])
    }

    /// Player at position `slot` in join order.
    pub fn nth(&self, slot: usize) -> Option<&Player> {
        self.slots.get(slot)
    }

    pub fn first(&self) -> Option<&Player> {
        self.slots.first()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Player> {
        self.slots.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Player> {
        self.slots.iter_mut()
    }
}
