//! Blast vs missile collision detection
//!
//! Works on read-only slices and returns the kills; the caller applies them to
//! the registry and score afterwards.

use glam::Vec2;

use super::blast::Blast;
use super::missile::Missile;

/// One missile destroyed by one blast
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Kill {
    pub missile_id: u32,
    pub blast_id: u32,
    /// Missile position at the moment of the kill; the follow-up blast goes here
    pub pos: Vec2,
}

/// Result of a collision pass
#[derive(Debug, Clone, Default)]
pub struct CollisionOutcome {
    pub kills: Vec<Kill>,
    /// Total score change from the kills
    pub score_delta: i64,
}

impl CollisionOutcome {
    pub fn is_empty(&self) -> bool {
        self.kills.is_empty()
    }

    pub fn destroyed_ids(&self) -> Vec<u32> {
        self.kills.iter().map(|k| k.missile_id).collect()
    }
}

/// Test every (blast, missile) pair.
///
/// A missile is hit when it lies strictly inside `radius * lethal_fraction` of
/// a blast centre. Each missile can be killed at most once per pass; blasts are
/// scanned in registry order and the first one to reach a missile claims it.
pub fn resolve_collisions(
    blasts: &[Blast],
    missiles: &[Missile],
    lethal_fraction: f32,
    missile_bonus: i64,
) -> CollisionOutcome {
    let mut outcome = CollisionOutcome::default();
    let mut destroyed = vec![false; missiles.len()];

    for blast in blasts {
        for (idx, missile) in missiles.iter().enumerate() {
            if destroyed[idx] {
                continue;
            }
            if blast.hits(missile.pos, lethal_fraction) {
                destroyed[idx] = true;
                outcome.kills.push(Kill {
                    missile_id: missile.id,
                    blast_id: blast.id,
                    pos: missile.pos,
                });
                outcome.score_delta += missile_bonus;
            }
        }
    }

    outcome
}
