//! Match state and events
//!
//! Everything a match mutates lives in [`MatchState`]; there are no globals.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::clock::MatchClock;
use super::registry::EntityRegistry;
use super::score::ScoreLedger;
use crate::config::GameConfig;

/// Current phase of the match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for the start gesture
    Waiting,
    /// Ticks are running and zaps are accepted
    Running,
    /// Countdown hit zero
    GameOver,
}

/// Things that happened during a tick or a zap, for sound/log collaborators
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    ZapFired { blast_id: u32, pos: Vec2 },
    MissileDestroyed { missile_id: u32, blast_id: u32, pos: Vec2 },
    MissileLanded { missile_id: u32, pos: Vec2 },
    MissileSplit { parent_id: u32, child_id: u32 },
    MissileSpawned { missile_id: u32 },
    BlastExpired { blast_id: u32 },
    SecondElapsed { countdown: i32 },
    GameOver { score: i64 },
}

/// Complete match state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchState {
    pub phase: GamePhase,
    pub registry: EntityRegistry,
    pub ledger: ScoreLedger,
    pub clock: MatchClock,
    /// Simulation tick counter
    pub time_ticks: u64,
}

impl MatchState {
    /// Fresh state waiting for `begin`
    pub fn new(config: &GameConfig) -> Self {
        Self {
            phase: GamePhase::Waiting,
            registry: EntityRegistry::new(),
            ledger: ScoreLedger::new(),
            clock: MatchClock::new(config.initial_countdown),
            time_ticks: 0,
        }
    }

    /// Reset everything and start running
    pub fn begin(&mut self, config: &GameConfig) {
        self.registry.clear();
        self.ledger = ScoreLedger::new();
        self.clock = MatchClock::new(config.initial_countdown);
        self.time_ticks = 0;
        self.phase = GamePhase::Running;
        log::info!(
            "Match started: {}s on the clock, {}ms ticks",
            config.initial_countdown,
            config.tick_interval_ms
        );
    }

    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    pub fn score(&self) -> i64 {
        self.ledger.score()
    }

    pub fn countdown(&self) -> i32 {
        self.clock.countdown()
    }
}
