//! Read-only view of a match for rendering collaborators

use serde::{Deserialize, Serialize};

use super::state::{GamePhase, MatchState};
use crate::config::GameConfig;
use crate::normalize_heading;

/// Fixed on-screen messages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Banner {
    Begin,
    GameOver,
}

impl Banner {
    pub fn text(&self) -> &'static str {
        match self {
            Banner::Begin => "Hit the a key to begin",
            Banner::GameOver => "Game Over",
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct MissileSnapshot {
    pub id: u32,
    pub x: f32,
    pub y: f32,
    /// Degrees in [0, 360)
    pub heading: f32,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct BlastSnapshot {
    pub id: u32,
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    /// Grey level, radius / (death size + 15)
    pub shade: f32,
}

/// Playfield border rectangle, centered on the origin
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct Border {
    pub half_width: f32,
    pub half_height: f32,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Snapshot {
    pub tick: u64,
    pub phase: GamePhase,
    pub countdown: i32,
    pub score: i64,
    /// `"Time: NNN / Score: M"`
    pub hud: String,
    pub banner: Option<Banner>,
    pub border: Border,
    pub missiles: Vec<MissileSnapshot>,
    pub blasts: Vec<BlastSnapshot>,
}

impl Snapshot {
    pub fn capture(state: &MatchState, config: &GameConfig) -> Self {
        let missiles = state
            .registry
            .missiles()
            .iter()
            .map(|m| MissileSnapshot {
                id: m.id,
                x: m.pos.x,
                y: m.pos.y,
                heading: normalize_heading(m.heading),
            })
            .collect();
        let blasts = state
            .registry
            .blasts()
            .iter()
            .map(|b| BlastSnapshot {
                id: b.id,
                x: b.pos.x,
                y: b.pos.y,
                radius: b.radius,
                shade: b.shade(config),
            })
            .collect();
        let banner = match state.phase {
            GamePhase::Waiting => Some(Banner::Begin),
            GamePhase::Running => None,
            GamePhase::GameOver => Some(Banner::GameOver),
        };

        Self {
            tick: state.time_ticks,
            phase: state.phase,
            countdown: state.countdown(),
            score: state.score(),
            hud: hud_text(state.countdown(), state.score()),
            banner,
            border: Border {
                half_width: config.screen_width,
                half_height: config.screen_height,
            },
            missiles,
            blasts,
        }
    }
}

/// Timer and score line, countdown zero-padded to three digits
pub fn hud_text(countdown: i32, score: i64) -> String {
    format!("Time: {:03} / Score: {}", countdown, score)
}
