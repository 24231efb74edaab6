//! Configuration error types.
//!
//! The simulation itself has no failure surface; everything that can go wrong
//! is a bad constant, and that is caught once when a [`crate::Game`] is built.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading or validating a [`crate::GameConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An inclusive integer range whose lower bound exceeds its upper bound.
    #[error("range '{name}' is empty: min {min} > max {max}")]
    EmptyRange {
        name: &'static str,
        min: i32,
        max: i32,
    },

    /// A per-tick probability that cannot be drawn.
    #[error("chance '{name}' is invalid: {numerator}/{denominator}")]
    InvalidChance {
        name: &'static str,
        numerator: u32,
        denominator: u32,
    },

    /// A scalar constant outside its usable range.
    #[error("constant '{name}' = {value} is outside safe range {safe_range}")]
    OutOfRange {
        name: &'static str,
        value: f64,
        safe_range: &'static str,
    },

    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Convenience alias: a `Result` using `ConfigError` as the error type.
pub type ConfigResult<T> = Result<T, ConfigError>;
