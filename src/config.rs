//! Game configuration
//!
//! Every tunable lives in [`GameConfig`]. Defaults come from [`crate::consts`];
//! a JSON file may override any subset of them. The config is validated once
//! when a [`crate::Game`] is created and is read-only for the rest of the match.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{ConfigError, ConfigResult};

/// Inclusive integer range used for random draws
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntRange {
    pub min: i32,
    pub max: i32,
}

impl IntRange {
    pub const fn new(min: i32, max: i32) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: i32) -> bool {
        value >= self.min && value <= self.max
    }

    fn validate(&self, name: &'static str) -> ConfigResult<()> {
        if self.min > self.max {
            return Err(ConfigError::EmptyRange {
                name,
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }
}

/// Per-tick probability expressed as `numerator / denominator`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chance {
    pub numerator: u32,
    pub denominator: u32,
}

impl Chance {
    pub const fn new(numerator: u32, denominator: u32) -> Self {
        Self {
            numerator,
            denominator,
        }
    }

    /// Never succeeds
    pub const NEVER: Chance = Chance::new(0, 1);
    /// Always succeeds
    pub const ALWAYS: Chance = Chance::new(1, 1);

    fn validate(&self, name: &'static str) -> ConfigResult<()> {
        // Trials roll an i32 in 1..=denominator
        if self.denominator == 0
            || self.denominator > i32::MAX as u32
            || self.numerator > self.denominator
        {
            return Err(ConfigError::InvalidChance {
                name,
                numerator: self.numerator,
                denominator: self.denominator,
            });
        }
        Ok(())
    }
}

/// Largest accepted playfield half-extent
const MAX_EXTENT: f32 = 1.0e6;

/// Runtime game configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // === Clock ===
    /// Milliseconds between simulation ticks
    pub tick_interval_ms: u32,
    /// Match length in seconds
    pub initial_countdown: i32,

    // === Playfield ===
    /// Half-width of the playfield
    pub screen_width: f32,
    /// Half-height of the playfield; missiles spawn at +height, land below -height
    pub screen_height: f32,

    // === Blasts ===
    pub blast_base_radius: f32,
    pub blast_growth: f32,
    pub explosion_death_size: f32,
    /// Fraction of the drawn radius that destroys missiles
    pub lethal_fraction: f32,

    // === Scoring ===
    pub zap_cost: i64,
    pub landed_penalty: i64,
    pub missile_bonus: i64,

    // === Missiles ===
    pub split_chance: Chance,
    pub spawn_chance: Chance,
    pub fall_speed: IntRange,
    pub split_deviation: IntRange,

    /// RNG seed; `None` seeds from entropy
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: TICK_INTERVAL_MS,
            initial_countdown: INITIAL_COUNTDOWN,

            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,

            blast_base_radius: BLAST_BASE_RADIUS,
            blast_growth: BLAST_GROWTH,
            explosion_death_size: EXPLOSION_DEATH_SIZE,
            lethal_fraction: LETHAL_FRACTION,

            zap_cost: ZAP_COST,
            landed_penalty: LANDED_PENALTY,
            missile_bonus: MISSILE_BONUS,

            split_chance: Chance::new(SPLIT_CHANCE.0, SPLIT_CHANCE.1),
            spawn_chance: Chance::new(SPAWN_CHANCE.0, SPAWN_CHANCE.1),
            fall_speed: IntRange::new(FALL_SPEED_MIN, FALL_SPEED_MAX),
            split_deviation: IntRange::new(SPLIT_DEVIATION_MIN, SPLIT_DEVIATION_MAX),

            seed: None,
        }
    }
}

impl GameConfig {
    /// Load a config from a JSON file. Missing keys keep their defaults.
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: GameConfig =
            serde_json::from_str(&json).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        log::info!("Loaded config from {}", path.display());
        config.validate()?;
        Ok(config)
    }

    /// Check every constant once, before any tick runs
    pub fn validate(&self) -> ConfigResult<()> {
        if self.tick_interval_ms == 0 || self.tick_interval_ms > 1000 {
            return Err(ConfigError::OutOfRange {
                name: "tick_interval_ms",
                value: self.tick_interval_ms as f64,
                safe_range: "[1, 1000]",
            });
        }
        if self.initial_countdown <= 0 {
            return Err(ConfigError::OutOfRange {
                name: "initial_countdown",
                value: self.initial_countdown as f64,
                safe_range: "[1, ∞)",
            });
        }
        extent("screen_width", self.screen_width)?;
        extent("screen_height", self.screen_height)?;
        positive("blast_base_radius", self.blast_base_radius)?;
        positive("blast_growth", self.blast_growth)?;
        positive("explosion_death_size", self.explosion_death_size)?;
        if !(self.lethal_fraction > 0.0 && self.lethal_fraction <= 1.0) {
            return Err(ConfigError::OutOfRange {
                name: "lethal_fraction",
                value: self.lethal_fraction as f64,
                safe_range: "(0.0, 1.0]",
            });
        }

        self.split_chance.validate("split_chance")?;
        self.spawn_chance.validate("spawn_chance")?;
        self.fall_speed.validate("fall_speed")?;
        self.split_deviation.validate("split_deviation")?;
        // Spawn columns are drawn from [width * 4/7, width]
        self.spawn_columns().validate("spawn_columns")?;
        Ok(())
    }

    /// Horizontal spawn magnitude range, biased toward the outer thirds
    pub fn spawn_columns(&self) -> IntRange {
        let width = self.screen_width as i64;
        IntRange::new((width * 4 / 7) as i32, width as i32)
    }

    /// Shade divisor used for rendering blasts
    pub fn shade_scale(&self) -> f32 {
        self.explosion_death_size + 15.0
    }
}

/// Playfield half-extent: positive and small enough for integer spawn draws
fn extent(name: &'static str, value: f32) -> ConfigResult<()> {
    if value > 0.0 && value <= MAX_EXTENT {
        Ok(())
    } else {
        Err(ConfigError::OutOfRange {
            name,
            value: value as f64,
            safe_range: "(0.0, 1e6]",
        })
    }
}

fn positive(name: &'static str, value: f32) -> ConfigResult<()> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::OutOfRange {
            name,
            value: value as f64,
            safe_range: "(0.0, ∞)",
        })
    }
}
