use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;

use crate::config::GameSettings;
use crate::config::game::NEUTRAL_COLOR;
use crate::game::commands::CommandKind;
use crate::game::entities::{Player, PlayerRegistry, spawn_player};
use crate::game::events::{EventBus, GameEvent};
use crate::game::grid::{Grid, frontier};
use crate::game::scheduler::TurnClock;
use crate::game::systems::{advance_turn, process_move};
use crate::game::types::{
    AvailableCommand, Cell, Lifecycle, MoveResult, PlayerId, Position, Snapshot, Target,
};

/// The whole game: grid, players, counters and the notification bus.
///
/// Every mutating method assumes a single sequential caller; the server
/// keeps the state inside one actor.
#[derive(Debug)]
pub struct GameState {
    pub(crate) settings: GameSettings,
    pub(crate) lifecycle: Lifecycle,
    pub(crate) grid: Grid,
    pub(crate) players: PlayerRegistry,
    pub(crate) turn_number: usize,
    pub(crate) round_number: u64,
    pub(crate) active_player: Option<PlayerId>,
    /// Cells touched since the last round boundary.
    pub(crate) round_changes: Vec<Cell>,
    pub(crate) events: EventBus,
    pub(crate) rng: StdRng,
    joined: u64,
}

impl GameState {
    pub fn new(settings: GameSettings) -> Self {
        Self::with_rng(settings, StdRng::from_os_rng())
    }

    /// Deterministic state for replays and tests.
    pub fn with_seed(settings: GameSettings, seed: u64) -> Self {
        Self::with_rng(settings, StdRng::seed_from_u64(seed))
    }

    fn with_rng(settings: GameSettings, rng: StdRng) -> Self {
        GameState {
            grid: Grid::new(settings.width, settings.height),
            settings,
            lifecycle: Lifecycle::Waiting,
            players: PlayerRegistry::new(),
            turn_number: 0,
            round_number: 0,
            active_player: None,
            round_changes: Vec::new(),
            events: EventBus::new(),
            rng,
            joined: 0,
        }
    }

    pub fn settings(&self) -> &GameSettings {
        &self.settings
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn players(&self) -> &PlayerRegistry {
        &self.players
    }

    pub fn player(&self, id: &PlayerId) -> Option<&Player> {
        self.players.get(id)
    }

    pub fn turn_number(&self) -> usize {
        self.turn_number
    }

    pub fn round_number(&self) -> u64 {
        self.round_number
    }

    pub fn active_player(&self) -> Option<PlayerId> {
        self.active_player
    }

    pub fn round_changes(&self) -> &[Cell] {
        &self.round_changes
    }

    pub fn events_mut(&mut self) -> &mut EventBus {
        &mut self.events
    }

    /// Registers a new player with a generated id and color.
    pub fn add_player(&mut self) -> Player {
        self.joined += 1;
        let player = spawn_player(&mut self.rng, self.joined);

        if self.settings.seed_start_cell {
            self.seed_start_cell(&player.color);
        }

        info!("[Game] Player joined: {} {}", player.id, player.color);
        self.players.insert(player.clone());
        player
    }

    fn seed_start_cell(&mut self, color: &str) {
        let neutral: Vec<Position> = self
            .grid
            .cells()
            .filter(|cell| cell.is_owned_by(NEUTRAL_COLOR))
            .map(|cell| cell.position())
            .collect();
        if let Some(&pos) = neutral.choose(&mut self.rng) {
            if let Some(cell) = self.grid.paint(pos, color) {
                self.round_changes.push(cell);
            }
        }
    }

    /// Removes a player from the rotation. Their painted cells keep their color.
    pub fn remove_player(&mut self, id: &PlayerId) -> Option<Player> {
        let removed = self.players.remove(id)?;
        if self.active_player == Some(*id) {
            self.active_player = None;
        }
        info!("[Game] Player left: {}", id);
        Some(removed)
    }

    /// Resets counters, emits `gameStart` and arms the clock. Calling it while
    /// playing restarts the game and replaces the armed period.
    pub fn start(&mut self, clock: &mut dyn TurnClock) {
        self.turn_number = 0;
        self.round_number = 0;
        self.round_changes.clear();
        self.active_player = self.players.first().map(|p| p.id);
        for player in self.players.iter_mut() {
            player.reset_cooldowns();
        }
        self.lifecycle = Lifecycle::Playing;

        info!("[Game] Started with {} players", self.players.len());
        let snapshot = self.snapshot();
        self.events.publish(&GameEvent::GameStart { snapshot });
        clock.arm(self.settings.turn_duration);
    }

    pub fn stop(&mut self, clock: &mut dyn TurnClock) {
        clock.disarm();
        self.lifecycle = Lifecycle::Waiting;

        info!("[Game] Stopped at round {}", self.round_number);
        let snapshot = self.snapshot();
        self.events.publish(&GameEvent::GameStop { snapshot });
    }

    /// Activates the next player. No-op while waiting or without players.
    pub fn tick(&mut self) {
        advance_turn(self);
    }

    pub fn process_move(
        &mut self,
        player_id: PlayerId,
        kind: CommandKind,
        targets: &[Target],
    ) -> MoveResult {
        process_move(self, player_id, kind, targets)
    }

    /// Commands the player may use at `round`, each with its candidate targets.
    /// Only paint carries precomputed targets (the frontier).
    pub fn available_commands(&self, player_id: PlayerId, round: u64) -> Vec<AvailableCommand> {
        let Some(player) = self.players.get(&player_id) else {
            return Vec::new();
        };
        player
            .available_commands(round)
            .into_iter()
            .map(|command| AvailableCommand {
                command,
                targets: match command {
                    CommandKind::Paint => frontier(&self.grid, &player.color),
                    _ => Vec::new(),
                },
            })
            .collect()
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            state: self.lifecycle,
            turn_number: self.turn_number,
            round_number: self.round_number,
            active_player: self.active_player,
            players: self.players.iter().cloned().collect(),
            map: self.grid.snapshot(),
        }
    }

    #[cfg(test)]
    pub(crate) fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }
}
