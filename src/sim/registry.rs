//! Entity storage
//!
//! The registry is the only owner of live missiles and blasts. Sweeps never
//! remove from a collection while walking it: they either collect ids first and
//! compact afterwards ([`EntityRegistry::remove_missiles`]) or split the
//! collection in one pass ([`EntityRegistry::sweep_missiles`]), so no live
//! entity is ever skipped.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::blast::Blast;
use super::missile::Missile;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntityRegistry {
    missiles: Vec<Missile>,
    blasts: Vec<Blast>,
    /// Next entity ID, shared by missiles and blasts
    next_id: u32,
}

impl Default for EntityRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl EntityRegistry {
    pub fn new() -> Self {
        Self {
            missiles: Vec::new(),
            blasts: Vec::new(),
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn missiles(&self) -> &[Missile] {
        &self.missiles
    }

    pub fn blasts(&self) -> &[Blast] {
        &self.blasts
    }

    /// Mutable access for in-place updates (movement); the set of live
    /// missiles cannot change through this
    pub fn missiles_mut(&mut self) -> std::slice::IterMut<'_, Missile> {
        self.missiles.iter_mut()
    }

    pub fn blasts_mut(&mut self) -> std::slice::IterMut<'_, Blast> {
        self.blasts.iter_mut()
    }

    pub fn missile(&self, id: u32) -> Option<&Missile> {
        self.missiles.iter().find(|m| m.id == id)
    }

    pub fn blast(&self, id: u32) -> Option<&Blast> {
        self.blasts.iter().find(|b| b.id == id)
    }

    pub fn add_missile(&mut self, missile: Missile) {
        self.missiles.push(missile);
    }

    pub fn add_blast(&mut self, blast: Blast) {
        self.blasts.push(blast);
    }

    /// Create a blast with a fresh id and return the id
    pub fn spawn_blast(&mut self, pos: Vec2, radius: f32) -> u32 {
        let id = self.next_entity_id();
        self.blasts.push(Blast::new(id, pos, radius));
        id
    }

    /// Remove a batch of missiles by id in a single compaction.
    ///
    /// # Panics
    /// Panics if any id is not live or appears twice; removing an entity that
    /// isn't there is a logic error upstream.
    pub fn remove_missiles(&mut self, ids: &[u32]) {
        if ids.is_empty() {
            return;
        }
        let before = self.missiles.len();
        self.missiles.retain(|m| !ids.contains(&m.id));
        let removed = before - self.missiles.len();
        assert_eq!(
            removed,
            ids.len(),
            "attempted to remove missiles that are not in the registry: {ids:?}"
        );
    }

    /// Remove every missile matching `pred` and return them
    pub fn sweep_missiles(&mut self, pred: impl FnMut(&Missile) -> bool) -> Vec<Missile> {
        let (removed, kept): (Vec<_>, Vec<_>) =
            std::mem::take(&mut self.missiles).into_iter().partition(pred);
        self.missiles = kept;
        removed
    }

    /// Remove every blast matching `pred` and return them
    pub fn sweep_blasts(&mut self, pred: impl FnMut(&Blast) -> bool) -> Vec<Blast> {
        let (removed, kept): (Vec<_>, Vec<_>) =
            std::mem::take(&mut self.blasts).into_iter().partition(pred);
        self.blasts = kept;
        removed
    }

    /// Offer every current missile a chance to split.
    ///
    /// `try_split` gets the missile and the id its offspring would take.
    /// Offspring are appended after the pass, so they are not offered a split
    /// in the same pass. Returns `(parent_id, child_id)` for each split.
    pub fn split_missiles(
        &mut self,
        mut try_split: impl FnMut(&mut Missile, u32) -> Option<Missile>,
    ) -> Vec<(u32, u32)> {
        let mut offspring = Vec::new();
        for missile in self.missiles.iter_mut() {
            if let Some(child) = try_split(missile, self.next_id) {
                debug_assert_eq!(child.id, self.next_id);
                self.next_id += 1;
                offspring.push((missile.id, child));
            }
        }

        offspring
            .into_iter()
            .map(|(parent_id, child)| {
                let child_id = child.id;
                self.missiles.push(child);
                (parent_id, child_id)
            })
            .collect()
    }

    /// Drop every entity. IDs keep counting up.
    pub fn clear(&mut self) {
        self.missiles.clear();
        self.blasts.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.missiles.is_empty() && self.blasts.is_empty()
    }
}
