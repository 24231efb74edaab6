//! Fixed-interval simulation tick
//!
//! One call to [`tick`] runs the whole step in a fixed order:
//! 1. blast/missile collisions (kills staged, follow-up blasts deferred)
//! 2. expiry sweeps (spent blasts, landed missiles)
//! 3. blast growth and missile movement
//! 4. split and spawn trials
//! 5. follow-up blasts from kills join the registry
//! 6. the clock advances
//!
//! Zaps ([`fire`]) are applied between ticks, never inside one.

use glam::Vec2;

use super::clock::ClockEvent;
use super::collision::resolve_collisions;
use super::missile::Missile;
use super::rng::RandomPolicy;
use super::state::{GameEvent, GamePhase, MatchState};
use crate::config::GameConfig;

/// Advance the match by one tick. Does nothing unless the match is running.
pub fn tick(
    state: &mut MatchState,
    config: &GameConfig,
    rng: &mut dyn RandomPolicy,
) -> Vec<GameEvent> {
    let mut events = Vec::new();
    if state.phase != GamePhase::Running {
        return events;
    }

    state.time_ticks += 1;

    // Collisions: read both collections, then apply the kills in one compaction
    let outcome = resolve_collisions(
        state.registry.blasts(),
        state.registry.missiles(),
        config.lethal_fraction,
        config.missile_bonus,
    );
    state.registry.remove_missiles(&outcome.destroyed_ids());
    state.ledger.apply(outcome.score_delta);

    // Expiry sweeps
    for blast in state
        .registry
        .sweep_blasts(|b| b.is_spent(config.explosion_death_size))
    {
        events.push(GameEvent::BlastExpired { blast_id: blast.id });
    }
    for missile in state
        .registry
        .sweep_missiles(|m| m.has_landed(config.screen_height))
    {
        log::debug!(
            "Missile {} landed at ({:.0}, {:.0})",
            missile.id,
            missile.pos.x,
            missile.pos.y
        );
        state.ledger.apply(-config.landed_penalty);
        events.push(GameEvent::MissileLanded {
            missile_id: missile.id,
            pos: missile.pos,
        });
    }

    // Growth and movement
    for blast in state.registry.blasts_mut() {
        blast.grow(config.blast_growth);
    }
    for missile in state.registry.missiles_mut() {
        missile.advance();
    }

    // Splits: only missiles that haven't split yet roll the dice
    let splits = state.registry.split_missiles(|missile, child_id| {
        if missile.has_split || !rng.trial(config.split_chance) {
            return None;
        }
        missile.split(child_id, config, &mut *rng)
    });
    for (parent_id, child_id) in splits {
        log::debug!("Missile {} split, warhead {}", parent_id, child_id);
        events.push(GameEvent::MissileSplit {
            parent_id,
            child_id,
        });
    }

    // Spawn
    if rng.trial(config.spawn_chance) {
        let id = state.registry.next_entity_id();
        let missile = Missile::spawn(id, config, rng);
        log::debug!(
            "Missile {} spawned at ({:.0}, {:.0}) heading {}",
            id,
            missile.pos.x,
            missile.pos.y,
            missile.heading
        );
        state.registry.add_missile(missile);
        events.push(GameEvent::MissileSpawned { missile_id: id });
    }

    // Follow-up blasts from this tick's kills
    for kill in &outcome.kills {
        let blast_id = state.registry.spawn_blast(kill.pos, config.blast_base_radius);
        log::debug!("Missile {} destroyed by blast {}", kill.missile_id, kill.blast_id);
        events.push(GameEvent::MissileDestroyed {
            missile_id: kill.missile_id,
            blast_id,
            pos: kill.pos,
        });
    }

    // Clock
    match state.clock.advance(config.tick_interval_ms) {
        ClockEvent::Pending => {}
        ClockEvent::SecondElapsed(countdown) => {
            log::trace!("{}s left, score {}", countdown, state.score());
            events.push(GameEvent::SecondElapsed { countdown });
        }
        ClockEvent::Ended => {
            state.phase = GamePhase::GameOver;
            log::info!("Game over, final score {}", state.score());
            events.push(GameEvent::GameOver {
                score: state.score(),
            });
        }
    }

    events
}

/// Player zap: costs points immediately and drops a blast at `pos`.
///
/// Ignored unless the match is running.
pub fn fire(state: &mut MatchState, config: &GameConfig, pos: Vec2) -> Option<GameEvent> {
    if state.phase != GamePhase::Running {
        log::warn!("Zap at ({:.0}, {:.0}) ignored: match not running", pos.x, pos.y);
        return None;
    }

    state.ledger.apply(-config.zap_cost);
    let blast_id = state.registry.spawn_blast(pos, config.blast_base_radius);
    log::debug!("Zap {} at ({:.0}, {:.0})", blast_id, pos.x, pos.y);
    Some(GameEvent::ZapFired { blast_id, pos })
}
