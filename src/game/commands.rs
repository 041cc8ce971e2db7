//! Command rule table.
//!
//! Static data describing every command kind: how many explicit targets it takes,
//! its cooldown in rounds, the round it first unlocks, and (for bomb) the region size.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommandKind {
    Paint,
    Eat,
    Bomb,
    Expand,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandRule {
    pub max_targets: usize,
    /// Rounds that must pass after a use before the next one.
    pub cooldown: u64,
    /// First round at which a never-used command is available.
    pub warmup: u64,
    /// Number of cells grown from the origin. Only bomb has one.
    pub size: Option<usize>,
}

const PAINT: CommandRule = CommandRule {
    max_targets: 1,
    cooldown: 1,
    warmup: 0,
    size: None,
};

const EAT: CommandRule = CommandRule {
    max_targets: 0,
    cooldown: 100,
    warmup: 100,
    size: None,
};

const BOMB: CommandRule = CommandRule {
    max_targets: 1,
    cooldown: 10,
    warmup: 10,
    size: Some(16),
};

const EXPAND: CommandRule = CommandRule {
    max_targets: 0,
    cooldown: 50,
    warmup: 50,
    size: None,
};

impl CommandKind {
    /// Every kind, in advertisement order.
    pub const ALL: [CommandKind; 4] = [
        CommandKind::Paint,
        CommandKind::Eat,
        CommandKind::Bomb,
        CommandKind::Expand,
    ];

    pub fn rule(self) -> &'static CommandRule {
        match self {
            CommandKind::Paint => &PAINT,
            CommandKind::Eat => &EAT,
            CommandKind::Bomb => &BOMB,
            CommandKind::Expand => &EXPAND,
        }
    }

    /// Whether the command reads a client-chosen cell.
    pub fn takes_target(self) -> bool {
        self.rule().max_targets > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bomb_is_the_only_sized_command() {
        for kind in CommandKind::ALL {
            assert_eq!(kind.rule().size.is_some(), kind == CommandKind::Bomb);
        }
        assert_eq!(CommandKind::Bomb.rule().size, Some(16));
    }

    #[test]
    fn targeted_commands() {
        assert!(CommandKind::Paint.takes_target());
        assert!(CommandKind::Bomb.takes_target());
        assert!(!CommandKind::Eat.takes_target());
        assert!(!CommandKind::Expand.takes_target());
    }

    #[test]
    fn kinds_use_lowercase_names_on_the_wire() {
        let kind: CommandKind = serde_json::from_str(r#""expand""#).unwrap();
        assert_eq!(kind, CommandKind::Expand);
        assert_eq!(serde_json::to_string(&CommandKind::Paint).unwrap(), r#""paint""#);
    }
}
