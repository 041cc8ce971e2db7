use std::collections::HashMap;

use rand::Rng;
use serde::Serialize;
use uuid::Uuid;

use crate::config::game::NEUTRAL_COLOR;
use crate::game::commands::CommandKind;
use crate::game::types::PlayerId;

#[derive(Debug, Clone, Serialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub color: String,
    /// Not driven by gameplay yet.
    pub score: u32,
    /// Round of the last successful use per command; absent means never used.
    #[serde(skip)]
    last_used: HashMap<CommandKind, u64>,
}

impl Player {
    pub fn new(id: PlayerId, name: String, color: String) -> Self {
        Self {
            id,
            name,
            color,
            score: 0,
            last_used: HashMap::new(),
        }
    }

    pub fn last_used(&self, kind: CommandKind) -> Option<u64> {
        self.last_used.get(&kind).copied()
    }

    /// First round at which `kind` can be used again.
    pub fn ready_at(&self, kind: CommandKind) -> u64 {
        let rule = kind.rule();
        match self.last_used(kind) {
            Some(round) => round + rule.cooldown,
            None => rule.warmup,
        }
    }

    pub fn can_use(&self, kind: CommandKind, round: u64) -> bool {
        round >= self.ready_at(kind)
    }

    pub fn mark_used(&mut self, kind: CommandKind, round: u64) {
        self.last_used.insert(kind, round);
    }

    pub fn reset_cooldowns(&mut self) {
        self.last_used.clear();
    }

    /// Command kinds usable at `round`, in table order.
    pub fn available_commands(&self, round: u64) -> Vec<CommandKind> {
        CommandKind::ALL
            .into_iter()
            .filter(|&kind| self.can_use(kind, round))
            .collect()
    }
}

/// Random `#rrggbb` color, never the neutral token.
pub fn random_color<R: Rng + ?Sized>(rng: &mut R) -> String {
    loop {
        let color = format!("#{:06x}", rng.random_range(0..=0xff_ffffu32));
        if color != NEUTRAL_COLOR {
            return color;
        }
    }
}

/// Generate a new player with a fresh id and a random color.
pub fn spawn_player<R: Rng + ?Sized>(rng: &mut R, ordinal: u64) -> Player {
    Player::new(Uuid::new_v4(), format!("Player {ordinal}"), random_color(rng))
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    fn player() -> Player {
        Player::new(Uuid::new_v4(), "Player 1".into(), "#123456".into())
    }

    #[test]
    fn test_fresh_player_only_paints() {
        let p = player();
        assert_eq!(p.available_commands(0), vec![CommandKind::Paint]);
        assert!(!p.can_use(CommandKind::Bomb, 9));
        assert!(p.can_use(CommandKind::Bomb, 10));
        assert!(p.can_use(CommandKind::Expand, 50));
        assert!(!p.can_use(CommandKind::Eat, 99));
    }

    #[test]
    fn test_cooldown_law() {
        for kind in CommandKind::ALL {
            let mut p = player();
            let used_at = 200;
            p.mark_used(kind, used_at);
            let cooldown = kind.rule().cooldown;
            for round in used_at..used_at + cooldown {
                assert!(!p.can_use(kind, round), "{kind:?} usable at {round}");
            }
            assert!(p.can_use(kind, used_at + cooldown));
        }
    }

    #[test]
    fn test_reset_cooldowns() {
        let mut p = player();
        p.mark_used(CommandKind::Paint, 5);
        assert!(!p.can_use(CommandKind::Paint, 0));
        p.reset_cooldowns();
        assert!(p.can_use(CommandKind::Paint, 0));
        assert_eq!(p.last_used(CommandKind::Paint), None);
    }

    #[test]
    fn test_available_commands_follow_table_order() {
        let p = player();
        assert_eq!(p.available_commands(1000), CommandKind::ALL.to_vec());
    }

    #[test]
    fn test_spawned_player_color() {
        let mut rng = StdRng::seed_from_u64(3);
        let p = spawn_player(&mut rng, 4);
        assert_eq!(p.name, "Player 4");
        assert_eq!(p.color.len(), 7);
        assert!(p.color.starts_with('#'));
        assert_ne!(p.color, NEUTRAL_COLOR);
        assert_eq!(p.score, 0);
    }
}
