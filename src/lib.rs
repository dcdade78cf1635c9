//! Snake Arena - a grid-based snake simulation core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, collisions, obstacles, power-ups, match state)
//! - `settings`: Match configuration and obstacle presets
//! - `highscores`: In-run personal best per mode
//! - `error`: Configuration errors
//!
//! Rendering, input polling, audio and window management belong to the host.
//! The host calls [`sim::Match::update`] once per frame with the elapsed time
//! and one directional intent per player, then reads positions back through
//! the snapshot accessors.

pub mod error;
pub mod highscores;
pub mod settings;
pub mod sim;

pub use error::ConfigError;
pub use highscores::HighScores;
pub use settings::{MatchConfig, ObstacleStyle};

/// Game configuration constants
pub mod consts {
    /// Grid dimensions (cells)
    pub const GRID_WIDTH: i32 = 40;
    pub const GRID_HEIGHT: i32 = 30;

    /// Base time between movement ticks (seconds)
    pub const BASE_MOVE_INTERVAL: f32 = 0.15;

    /// Snakes spawn with this many segments and never shrink below it while alive
    pub const MIN_SNAKE_LENGTH: usize = 3;

    /// Obstacle timing (seconds)
    pub const OBSTACLE_SPAWN_INTERVAL: f32 = 5.0;
    pub const OBSTACLE_LIFETIME: f32 = 8.0;
    /// Obstacles fade out linearly over this final window
    pub const OBSTACLE_FADE_WINDOW: f32 = 2.0;

    /// Random anchor attempts per obstacle before giving up
    pub const OBSTACLE_PLACEMENT_ATTEMPTS: u32 = 50;
    /// Obstacle cells may not be within this distance of a living snake's head
    pub const OBSTACLE_HEAD_CLEARANCE: f32 = 3.0;

    /// Obstacle batch size at match start, drawn from [MIN, MAX)
    pub const INITIAL_OBSTACLES_MIN: i32 = 3;
    pub const INITIAL_OBSTACLES_MAX: i32 = 7;

    /// Shared power-up effect duration (seconds)
    pub const POWERUP_DURATION: f32 = 5.0;
    /// Move-interval multipliers for Speed / Slow
    pub const SPEED_FACTOR: f32 = 0.5;
    pub const SLOW_FACTOR: f32 = 1.5;

    /// Food is worth this much, doubled under DoublePoints
    pub const FOOD_POINTS: u32 = 1;

    /// Rejection-sampling draws per cell (times grid area) before falling back to a scan
    pub const PLACEMENT_DRAWS_PER_CELL: usize = 64;
}
