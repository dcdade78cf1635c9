//! Match configuration and obstacle presets
//!
//! Grid size is fixed; everything else about a match's rules lives here.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{ConfigError, ConfigResult};
use crate::sim::{ObstacleShape, PowerUpKind};

/// Obstacle style presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ObstacleStyle {
    /// Single-cell wall blocks only
    Classic,
    /// Full shape catalog
    #[default]
    Shaped,
}

impl ObstacleStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            ObstacleStyle::Classic => "Classic",
            ObstacleStyle::Shaped => "Shaped",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "classic" | "walls" => Some(ObstacleStyle::Classic),
            "shaped" | "shapes" => Some(ObstacleStyle::Shaped),
            _ => None,
        }
    }

    /// Obstacle shapes this preset spawns
    pub fn shapes(&self) -> Vec<ObstacleShape> {
        match self {
            ObstacleStyle::Classic => vec![ObstacleShape::Single],
            ObstacleStyle::Shaped => ObstacleShape::ALL.to_vec(),
        }
    }
}

/// Rules of a match
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    // === Movement ===
    /// Seconds between movement ticks with no effect active
    pub move_interval: f32,

    // === Obstacles ===
    /// Seconds between periodic obstacle spawns
    pub obstacle_spawn_interval: f32,
    /// Seconds an obstacle stays on the board
    pub obstacle_lifetime: f32,
    /// Final seconds over which an obstacle fades out
    pub obstacle_fade_window: f32,
    /// Random anchors tried per obstacle
    pub placement_attempts: u32,
    /// Obstacle cells must be farther than this from every living head
    pub head_clearance: f32,
    /// Batch spawned at match start, size drawn from [min, max)
    pub initial_obstacles_min: i32,
    pub initial_obstacles_max: i32,
    /// Shapes to pick from
    pub obstacle_shapes: Vec<ObstacleShape>,

    // === Power-ups ===
    /// Seconds before all active effects expire together
    pub powerup_duration: f32,
    /// Move-interval multiplier for Speed (below 1)
    pub speed_factor: f32,
    /// Move-interval multiplier for Slow (above 1)
    pub slow_factor: f32,
    /// Kinds to pick from
    pub powerups: Vec<PowerUpKind>,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            move_interval: BASE_MOVE_INTERVAL,

            obstacle_spawn_interval: OBSTACLE_SPAWN_INTERVAL,
            obstacle_lifetime: OBSTACLE_LIFETIME,
            obstacle_fade_window: OBSTACLE_FADE_WINDOW,
            placement_attempts: OBSTACLE_PLACEMENT_ATTEMPTS,
            head_clearance: OBSTACLE_HEAD_CLEARANCE,
            initial_obstacles_min: INITIAL_OBSTACLES_MIN,
            initial_obstacles_max: INITIAL_OBSTACLES_MAX,
            obstacle_shapes: ObstacleStyle::default().shapes(),

            powerup_duration: POWERUP_DURATION,
            speed_factor: SPEED_FACTOR,
            slow_factor: SLOW_FACTOR,
            powerups: PowerUpKind::ALL.to_vec(),
        }
    }
}

impl MatchConfig {
    /// Default rules with the preset's obstacle catalog
    pub fn from_preset(style: ObstacleStyle) -> Self {
        Self {
            obstacle_shapes: style.shapes(),
            ..Self::default()
        }
    }

    /// Parse and validate a JSON config. Missing fields take their defaults.
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> ConfigResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> ConfigResult<()> {
        let times = [
            ("move_interval", self.move_interval),
            ("obstacle_spawn_interval", self.obstacle_spawn_interval),
            ("obstacle_lifetime", self.obstacle_lifetime),
            ("obstacle_fade_window", self.obstacle_fade_window),
            ("powerup_duration", self.powerup_duration),
        ];
        for (field, value) in times {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::NonPositiveTime { field, value });
            }
        }

        if !(self.speed_factor > 0.0 && self.speed_factor < 1.0) {
            return Err(ConfigError::BadFactor {
                field: "speed_factor",
                value: self.speed_factor,
                expected: "0 < factor < 1",
            });
        }
        if !(self.slow_factor > 1.0 && self.slow_factor.is_finite()) {
            return Err(ConfigError::BadFactor {
                field: "slow_factor",
                value: self.slow_factor,
                expected: "factor > 1",
            });
        }

        if self.obstacle_shapes.is_empty() {
            return Err(ConfigError::NoObstacleShapes);
        }
        if self.powerups.is_empty() {
            return Err(ConfigError::NoPowerUps);
        }
        if self.initial_obstacles_min < 0 || self.initial_obstacles_max < self.initial_obstacles_min
        {
            return Err(ConfigError::BadObstacleBatch {
                min: self.initial_obstacles_min,
                max: self.initial_obstacles_max,
            });
        }

        Ok(())
    }
}
