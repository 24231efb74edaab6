//! Simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - Fixed timestep only
//! - Randomness only through an injected `RandomPolicy`
//! - No rendering or platform dependencies

pub mod blast;
pub mod clock;
pub mod collision;
pub mod missile;
pub mod registry;
pub mod rng;
pub mod score;
pub mod snapshot;
pub mod state;
pub mod tick;

pub use blast::Blast;
pub use clock::{ClockEvent, MatchClock};
pub use collision::{CollisionOutcome, Kill, resolve_collisions};
pub use missile::Missile;
pub use registry::EntityRegistry;
pub use rng::{PcgPolicy, RandomPolicy, ScriptedPolicy};
pub use score::ScoreLedger;
pub use snapshot::{Banner, BlastSnapshot, Border, MissileSnapshot, Snapshot, hud_text};
pub use state::{GameEvent, GamePhase, MatchState};
pub use tick::{fire, tick};
