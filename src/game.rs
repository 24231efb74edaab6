//! Match driver
//!
//! Owns the state, config and random source, and turns wall-clock time into
//! whole simulation ticks. Player zaps arrive at arbitrary times; they are
//! queued and applied just before the next tick so they never land inside one.

use std::collections::VecDeque;

use glam::Vec2;

use crate::config::GameConfig;
use crate::consts::MAX_SUBSTEPS;
use crate::error::ConfigResult;
use crate::sim::{self, GameEvent, GamePhase, MatchState, PcgPolicy, RandomPolicy, Snapshot};

/// Output of one scheduled tick
#[derive(Debug, Clone)]
pub enum Frame {
    /// Regular tick: render this
    Tick {
        snapshot: Snapshot,
        events: Vec<GameEvent>,
    },
    /// The tick that ended the match; nothing follows it
    GameOver {
        snapshot: Snapshot,
        events: Vec<GameEvent>,
    },
}

impl Frame {
    pub fn snapshot(&self) -> &Snapshot {
        match self {
            Frame::Tick { snapshot, .. } | Frame::GameOver { snapshot, .. } => snapshot,
        }
    }

    pub fn events(&self) -> &[GameEvent] {
        match self {
            Frame::Tick { events, .. } | Frame::GameOver { events, .. } => events,
        }
    }

    pub fn is_game_over(&self) -> bool {
        matches!(self, Frame::GameOver { .. })
    }
}

/// Game instance holding all state
#[derive(Debug)]
pub struct Game<R: RandomPolicy = PcgPolicy> {
    config: GameConfig,
    state: MatchState,
    rng: R,
    /// Zaps received since the last tick
    pending_zaps: VecDeque<Vec2>,
    /// Wall time not yet consumed by ticks
    accumulator_ms: u32,
}

impl Game<PcgPolicy> {
    /// Validate `config` and create a game seeded from `config.seed` (or entropy)
    pub fn new(config: GameConfig) -> ConfigResult<Self> {
        let rng = match config.seed {
            Some(seed) => PcgPolicy::new(seed),
            None => PcgPolicy::from_entropy(),
        };
        log::info!("RNG seed {}", rng.seed());
        Self::with_rng(config, rng)
    }
}

impl<R: RandomPolicy> Game<R> {
    /// Validate `config` and create a game with a caller-supplied random source
    pub fn with_rng(config: GameConfig, rng: R) -> ConfigResult<Self> {
        config.validate()?;
        Ok(Self {
            state: MatchState::new(&config),
            config,
            rng,
            pending_zaps: VecDeque::new(),
            accumulator_ms: 0,
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn state(&self) -> &MatchState {
        &self.state
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    pub fn is_over(&self) -> bool {
        self.state.phase == GamePhase::GameOver
    }

    /// Start gesture: reset everything and start ticking
    pub fn begin(&mut self) {
        self.pending_zaps.clear();
        self.accumulator_ms = 0;
        self.state.begin(&self.config);
    }

    /// Queue a zap to be applied before the next tick
    pub fn queue_fire(&mut self, x: f32, y: f32) {
        if !self.state.is_running() {
            log::warn!("Zap at ({:.0}, {:.0}) dropped: match not running", x, y);
            return;
        }
        self.pending_zaps.push_back(Vec2::new(x, y));
    }

    /// Apply a zap immediately. Must be called between ticks.
    pub fn fire(&mut self, x: f32, y: f32) -> Option<GameEvent> {
        sim::fire(&mut self.state, &self.config, Vec2::new(x, y))
    }

    /// Run exactly one tick, applying queued zaps first.
    ///
    /// Returns `None` once the match is no longer running.
    pub fn step(&mut self) -> Option<Frame> {
        if !self.state.is_running() {
            return None;
        }

        let mut events: Vec<GameEvent> = self
            .pending_zaps
            .drain(..)
            .filter_map(|pos| sim::fire(&mut self.state, &self.config, pos))
            .collect();
        events.extend(sim::tick(&mut self.state, &self.config, &mut self.rng));

        let snapshot = self.snapshot();
        if self.is_over() {
            self.accumulator_ms = 0;
            Some(Frame::GameOver { snapshot, events })
        } else {
            Some(Frame::Tick { snapshot, events })
        }
    }

    /// Feed elapsed wall time and run as many whole ticks as it covers,
    /// at most [`MAX_SUBSTEPS`] per call.
    pub fn update(&mut self, elapsed_ms: u32) -> Vec<Frame> {
        let mut frames = Vec::new();
        if !self.state.is_running() {
            return frames;
        }

        let interval = self.config.tick_interval_ms;
        // Never bank more than one call's worth of ticks
        self.accumulator_ms = self
            .accumulator_ms
            .saturating_add(elapsed_ms)
            .min(interval * MAX_SUBSTEPS);

        while self.accumulator_ms >= interval {
            self.accumulator_ms -= interval;
            match self.step() {
                Some(frame) => {
                    let over = frame.is_game_over();
                    frames.push(frame);
                    if over {
                        break;
                    }
                }
                None => break,
            }
        }
        frames
    }

    /// Milliseconds until the next tick is due
    pub fn time_to_next_tick(&self) -> u32 {
        self.config
            .tick_interval_ms
            .saturating_sub(self.accumulator_ms)
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(&self.state, &self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Chance;
    use crate::sim::ScriptedPolicy;

    fn quiet_game() -> Game<ScriptedPolicy> {
        let config = GameConfig {
            split_chance: Chance::NEVER,
            spawn_chance: Chance::NEVER,
            initial_countdown: 2,
            ..Default::default()
        };
        Game::with_rng(config, ScriptedPolicy::default()).unwrap()
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = GameConfig {
            split_deviation: crate::IntRange::new(40, 20),
            ..Default::default()
        };
        assert!(Game::new(config).is_err());
    }

    #[test]
    fn test_oversized_chance_rejected_at_startup() {
        let config = GameConfig {
            spawn_chance: Chance::new(1, 3_000_000_000),
            seed: Some(1),
            ..Default::default()
        };
        assert!(matches!(
            Game::new(config),
            Err(crate::ConfigError::InvalidChance { .. })
        ));
    }

    #[test]
    fn test_no_ticks_before_begin() {
        let mut game = quiet_game();
        assert!(game.step().is_none());
        assert!(game.update(1000).is_empty());
        game.queue_fire(0.0, 0.0);
        assert!(game.fire(0.0, 0.0).is_none());
        assert_eq!(game.state().score(), 0);
    }

    #[test]
    fn test_queued_zap_applied_before_tick() {
        let mut game = quiet_game();
        game.begin();
        game.queue_fire(50.0, 50.0);
        // Not applied until the tick
        assert_eq!(game.state().score(), 0);

        let frame = game.step().expect("frame");
        assert!(matches!(frame.events()[0], GameEvent::ZapFired { .. }));
        assert_eq!(frame.snapshot().score, -55);
        // Zap blast existed before the tick, so it grew once
        assert_eq!(frame.snapshot().blasts[0].radius, 23.0);
    }

    #[test]
    fn test_update_accumulates_partial_time() {
        let mut game = quiet_game();
        game.begin();
        assert!(game.update(30).is_empty());
        assert_eq!(game.time_to_next_tick(), 20);
        assert_eq!(game.update(30).len(), 1);
        assert_eq!(game.update(100).len(), 2);
        assert_eq!(game.state().time_ticks, 3);
    }

    #[test]
    fn test_update_caps_substeps() {
        let mut game = quiet_game();
        game.begin();
        let frames = game.update(10_000);
        assert_eq!(frames.len(), MAX_SUBSTEPS as usize);
    }

    #[test]
    fn test_single_game_over_frame() {
        let mut game = quiet_game();
        game.begin();
        let mut frames = Vec::new();
        for _ in 0..100 {
            frames.extend(game.update(50));
        }
        assert_eq!(frames.len(), 40);
        assert_eq!(frames.iter().filter(|f| f.is_game_over()).count(), 1);
        assert!(frames.last().unwrap().is_game_over());
        assert_eq!(frames.last().unwrap().snapshot().banner, Some(sim::Banner::GameOver));
        assert!(game.step().is_none());
    }

    #[test]
    fn test_begin_restarts_after_game_over() {
        let mut game = quiet_game();
        game.begin();
        game.fire(0.0, 0.0);
        while game.step().is_some() {}
        assert!(game.is_over());

        game.begin();
        assert_eq!(game.phase(), GamePhase::Running);
        assert_eq!(game.state().score(), 0);
        assert_eq!(game.state().countdown(), 2);
        assert!(game.state().registry.is_empty());
    }
}
