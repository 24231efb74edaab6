//! Demo player
//!
//! Picks the most dangerous missile (the lowest one that no live blast is
//! already going to reach) and zaps where it will be a few ticks from now.

use glam::Vec2;

use crate::config::GameConfig;
use crate::heading_vector;
use crate::sim::MatchState;

/// Ticks of lead when aiming at a moving missile
const LEAD_TICKS: f32 = 6.0;
/// Only engage missiles below this fraction of the playfield height
const ENGAGE_CEILING: f32 = 0.5;

#[derive(Debug, Clone)]
pub struct Autopilot {
    /// Minimum ticks between zaps
    pub fire_interval: u32,
    cooldown: u32,
}

impl Default for Autopilot {
    fn default() -> Self {
        Self::new(8)
    }
}

impl Autopilot {
    pub fn new(fire_interval: u32) -> Self {
        Self {
            fire_interval,
            cooldown: 0,
        }
    }

    /// Call once per tick; returns where to zap, if anywhere
    pub fn act(&mut self, state: &MatchState, config: &GameConfig) -> Option<Vec2> {
        if !state.is_running() {
            return None;
        }
        if self.cooldown > 0 {
            self.cooldown -= 1;
            return None;
        }

        let target = choose_target(state, config)?;
        self.cooldown = self.fire_interval;
        Some(target)
    }
}

/// Predicted position of the lowest missile that isn't already covered
pub fn choose_target(state: &MatchState, config: &GameConfig) -> Option<Vec2> {
    let reach = config.explosion_death_size * config.lethal_fraction;
    let ceiling = config.screen_height * ENGAGE_CEILING;

    state
        .registry
        .missiles()
        .iter()
        .filter(|m| m.pos.y < ceiling)
        .filter(|m| {
            !state
                .registry
                .blasts()
                .iter()
                .any(|b| b.pos.distance(m.pos) < reach)
        })
        .min_by(|a, b| a.pos.y.total_cmp(&b.pos.y))
        .map(|m| m.pos + heading_vector(m.heading, m.fall_speed * LEAD_TICKS))
}
