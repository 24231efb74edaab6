//! Expanding blasts
//!
//! A blast is fixed in place and only ever grows. It is lethal inside a
//! fraction of its drawn radius and disappears once it passes the death size.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::config::GameConfig;

/// A blast entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Blast {
    pub id: u32,
    pub pos: Vec2,
    pub radius: f32,
}

impl Blast {
    pub fn new(id: u32, pos: Vec2, radius: f32) -> Self {
        Self { id, pos, radius }
    }

    /// Grow by one tick's worth
    pub fn grow(&mut self, step: f32) {
        self.radius += step.max(0.0);
    }

    /// True once the blast has grown past `death_size`
    pub fn is_spent(&self, death_size: f32) -> bool {
        self.radius > death_size
    }

    /// Whether a point is inside the lethal zone
    pub fn hits(&self, point: Vec2, lethal_fraction: f32) -> bool {
        self.pos.distance(point) < self.radius * lethal_fraction
    }

    /// Grey level for rendering, proportional to radius
    pub fn shade(&self, config: &GameConfig) -> f32 {
        self.radius / config.shade_scale()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lethal_zone() {
        let blast = Blast::new(1, Vec2::ZERO, 100.0);
        assert!(blast.hits(Vec2::new(10.0, 0.0), 0.7));
        assert!(blast.hits(Vec2::new(69.9, 0.0), 0.7));
        assert!(!blast.hits(Vec2::new(70.0, 0.0), 0.7));

        let small = Blast::new(2, Vec2::ZERO, 10.0);
        assert!(!small.hits(Vec2::new(10.0, 0.0), 0.7));
    }

    #[test]
    fn test_growth_and_death() {
        let mut blast = Blast::new(1, Vec2::ZERO, 82.0);
        assert!(!blast.is_spent(85.0));
        blast.grow(3.0);
        assert_eq!(blast.radius, 85.0);
        assert!(!blast.is_spent(85.0));
        blast.grow(3.0);
        assert!(blast.is_spent(85.0));
    }

    #[test]
    fn test_shade() {
        let config = GameConfig::default();
        let blast = Blast::new(1, Vec2::ZERO, 50.0);
        assert!((blast.shade(&config) - 0.5).abs() < 1e-6);
    }
}
