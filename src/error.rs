//! Error types
//!
//! The simulation itself has no failure modes; only configuration can be wrong.

use thiserror::Error;

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors raised while loading or validating a [`crate::MatchConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The JSON could not be parsed.
    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A timing value was zero, negative or not finite.
    #[error("{field} must be a positive number of seconds, got {value}")]
    NonPositiveTime {
        /// Name of the offending field.
        field: &'static str,
        /// The rejected value.
        value: f32,
    },

    /// A move-interval factor is on the wrong side of 1.
    #[error("{field} out of range: {value} ({expected})")]
    BadFactor {
        /// Name of the offending field.
        field: &'static str,
        /// The rejected value.
        value: f32,
        /// Human-readable accepted range.
        expected: &'static str,
    },

    /// No obstacle shapes to pick from.
    #[error("obstacle shape catalog is empty")]
    NoObstacleShapes,

    /// No power-up kinds to pick from.
    #[error("power-up catalog is empty")]
    NoPowerUps,

    /// Initial obstacle batch bounds are reversed or negative.
    #[error("initial obstacle range [{min}, {max}) is invalid")]
    BadObstacleBatch {
        /// Inclusive lower bound.
        min: i32,
        /// Exclusive upper bound.
        max: i32,
    },
}
