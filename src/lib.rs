//! Zap Command - A Missile Command style arcade simulation
//!
//! Core modules:
//! - `sim`: Fixed-interval simulation (missiles, blasts, collisions, clock, score)
//! - `game`: Scheduler that drives ticks and queues player input between them
//! - `config`: Runtime-tunable game constants, validated once at startup
//! - `autopilot`: Demo player for the headless runner

pub mod autopilot;
pub mod config;
pub mod error;
pub mod game;
pub mod sim;

pub use config::{Chance, GameConfig, IntRange};
pub use error::ConfigError;
pub use game::Game;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep in milliseconds (20 Hz)
    pub const TICK_INTERVAL_MS: u32 = 50;
    /// Maximum ticks run per scheduler update to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Match length in seconds
    pub const INITIAL_COUNTDOWN: i32 = 60;

    /// Playfield half-extents (the border is drawn at ±width, ±height)
    pub const SCREEN_WIDTH: f32 = 400.0;
    pub const SCREEN_HEIGHT: f32 = 300.0;

    /// Blast defaults
    pub const BLAST_BASE_RADIUS: f32 = 20.0;
    pub const BLAST_GROWTH: f32 = 3.0;
    pub const EXPLOSION_DEATH_SIZE: f32 = 85.0;
    /// Lethal zone is this fraction of the drawn radius
    pub const LETHAL_FRACTION: f32 = 0.7;

    /// Scoring
    pub const ZAP_COST: i64 = 55;
    pub const LANDED_PENALTY: i64 = 300;
    pub const MISSILE_BONUS: i64 = 100;

    /// Per-tick odds, as (numerator, denominator)
    pub const SPLIT_CHANCE: (u32, u32) = (5, 200);
    pub const SPAWN_CHANCE: (u32, u32) = (20, 200);

    /// Missile fall speed range (units per tick, inclusive)
    pub const FALL_SPEED_MIN: i32 = 3;
    pub const FALL_SPEED_MAX: i32 = 8;
    /// Split deviation range (degrees, inclusive)
    pub const SPLIT_DEVIATION_MIN: i32 = 20;
    pub const SPLIT_DEVIATION_MAX: i32 = 40;
}

/// Normalize a heading in degrees to [0, 360)
#[inline]
pub fn normalize_heading(degrees: f32) -> f32 {
    let wrapped = degrees.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f32, theta: f32) -> Vec2 {
    Vec2::new(r * theta.cos(), r * theta.sin())
}

/// Displacement for moving `distance` along a heading given in degrees
/// (0 = +x, counter-clockwise positive)
#[inline]
pub fn heading_vector(heading_degrees: f32, distance: f32) -> Vec2 {
    polar_to_cartesian(distance, heading_degrees.to_radians())
}
