//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Elapsed time comes from the host; no clocks are read here
//! - Seeded RNG only, behind `RandomSource`
//! - Stable iteration order (by player index)
//! - No rendering, input or platform dependencies

pub mod collision;
pub mod grid;
pub mod obstacle;
pub mod placement;
pub mod powerup;
pub mod rng;
pub mod snake;
pub mod state;
pub mod tick;

pub use collision::CollisionKind;
pub use grid::{Direction, Grid, Position};
pub use obstacle::{Obstacle, ObstacleField, ObstacleShape};
pub use powerup::{EffectClock, PowerUp, PowerUpKind, SnakeEffects};
pub use rng::{RandomSource, ScriptedSource};
pub use snake::Snake;
pub use state::{GameEvent, GamePhase, Match, Mode, Outcome, PlayerId, Snapshot};
pub use tick::TickInput;
