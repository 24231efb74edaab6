//! Falling missiles
//!
//! Headings are in degrees, 0 along +x and increasing counter-clockwise, so a
//! missile falling straight down has heading -90.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rng::RandomPolicy;
use crate::config::{GameConfig, IntRange};
use crate::heading_vector;

/// Headings for missiles entering from the left edge (pointing down and right)
pub const LEFT_SPAWN_HEADING: IntRange = IntRange::new(-90, -45);
/// Headings for missiles entering from the right edge (pointing down and left)
pub const RIGHT_SPAWN_HEADING: IntRange = IntRange::new(-125, -90);

/// A missile entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Missile {
    pub id: u32,
    pub pos: Vec2,
    /// Heading in degrees
    pub heading: f32,
    /// Distance travelled per tick, fixed for the missile's life
    pub fall_speed: f32,
    /// Set once the missile has split; a split missile never splits again
    pub has_split: bool,
}

impl Missile {
    pub fn new(id: u32, pos: Vec2, heading: f32, fall_speed: f32) -> Self {
        Self {
            id,
            pos,
            heading,
            fall_speed,
            has_split: false,
        }
    }

    /// Spawn a missile on the top edge, toward one of the outer columns,
    /// heading down and inward
    pub fn spawn(id: u32, config: &GameConfig, rng: &mut dyn RandomPolicy) -> Self {
        let magnitude = rng.draw(config.spawn_columns()) as f32;
        let (x, heading) = if rng.coin() {
            (-magnitude, rng.draw(LEFT_SPAWN_HEADING))
        } else {
            (magnitude, rng.draw(RIGHT_SPAWN_HEADING))
        };
        let fall_speed = rng.draw(config.fall_speed) as f32;

        Self::new(
            id,
            Vec2::new(x, config.screen_height),
            heading as f32,
            fall_speed,
        )
    }

    /// Move one tick along the current heading
    pub fn advance(&mut self) {
        self.pos += heading_vector(self.heading, self.fall_speed);
    }

    /// True once the missile is below the bottom of the playfield
    pub fn has_landed(&self, screen_height: f32) -> bool {
        self.pos.y < -screen_height
    }

    /// Split into two warheads.
    ///
    /// This missile turns by `+deviation`; the offspring starts at the same
    /// position with the turned heading minus `deviation`, i.e. the pre-split
    /// heading. Both halves are marked split. Returns `None` if this missile
    /// has already split.
    pub fn split(
        &mut self,
        id: u32,
        config: &GameConfig,
        rng: &mut dyn RandomPolicy,
    ) -> Option<Missile> {
        if self.has_split {
            return None;
        }
        self.has_split = true;

        let deviation = rng.draw(config.split_deviation) as f32;
        self.heading += deviation;

        let fall_speed = rng.draw(config.fall_speed) as f32;
        Some(Missile {
            id,
            pos: self.pos,
            heading: self.heading - deviation,
            fall_speed,
            has_split: true,
        })
    }
}
