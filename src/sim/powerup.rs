//! Power-up catalog and effect timing
//!
//! Exactly one power-up sits on the board at a time. Shield and DoublePoints
//! are flags on the snake that picked them up; Speed and Slow change the one
//! move interval every snake shares. All active effects share a single
//! duration timer: any pickup restarts it, and when it runs out every effect
//! on every snake is cleared at once.

use serde::{Deserialize, Serialize};

use super::grid::Position;
use super::rng::RandomSource;

/// Power-up types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PowerUpKind {
    /// Shorter move interval (faster snakes)
    Speed,
    /// Longer move interval
    Slow,
    /// Absorbs one fatal collision
    Shield,
    /// Food scores double
    DoublePoints,
}

impl PowerUpKind {
    pub const ALL: [PowerUpKind; 4] = [
        PowerUpKind::Speed,
        PowerUpKind::Slow,
        PowerUpKind::Shield,
        PowerUpKind::DoublePoints,
    ];

    /// Uniform pick from a catalog. Falls back to Shield for an empty catalog.
    pub fn pick(catalog: &[PowerUpKind], rng: &mut dyn RandomSource) -> PowerUpKind {
        if catalog.is_empty() {
            return PowerUpKind::Shield;
        }
        let idx = rng.range(0, catalog.len() as i32) as usize;
        catalog[idx]
    }
}

/// The power-up currently on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PowerUp {
    pub pos: Position,
    pub kind: PowerUpKind,
}

/// Per-snake effect flags
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnakeEffects {
    pub shield: bool,
    pub double_points: bool,
}

impl SnakeEffects {
    pub fn any(&self) -> bool {
        self.shield || self.double_points
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Shared effect state: the move interval and the one expiry timer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EffectClock {
    base_interval: f32,
    move_interval: f32,
    /// Seconds until all effects expire, `None` when nothing is active
    remaining: Option<f32>,
}

impl EffectClock {
    pub fn new(base_interval: f32) -> Self {
        Self {
            base_interval,
            move_interval: base_interval,
            remaining: None,
        }
    }

    pub fn move_interval(&self) -> f32 {
        self.move_interval
    }

    pub fn base_interval(&self) -> f32 {
        self.base_interval
    }

    pub fn remaining(&self) -> Option<f32> {
        self.remaining
    }

    pub fn is_running(&self) -> bool {
        self.remaining.is_some()
    }

    /// Multiply the base interval by `factor`. Effects replace each other
    /// rather than compounding.
    pub fn scale_interval(&mut self, factor: f32) {
        self.move_interval = self.base_interval * factor;
    }

    /// (Re)start the shared duration timer
    pub fn restart(&mut self, duration: f32) {
        self.remaining = Some(duration);
    }

    /// Count down; returns true exactly once, on the call where the timer runs out.
    /// The interval is back at base afterwards.
    pub fn tick(&mut self, dt: f32) -> bool {
        let Some(remaining) = self.remaining.as_mut() else {
            return false;
        };
        *remaining -= dt;
        if *remaining > 0.0 {
            return false;
        }
        self.reset();
        true
    }

    pub fn reset(&mut self) {
        self.move_interval = self.base_interval;
        self.remaining = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::rng::ScriptedSource;

    #[test]
    fn test_pick_is_uniform_index() {
        let mut rng = ScriptedSource::new(vec![0, 1, 2, 3]);
        let picks: Vec<_> = (0..4)
            .map(|_| PowerUpKind::pick(&PowerUpKind::ALL, &mut rng))
            .collect();
        assert_eq!(picks, PowerUpKind::ALL.to_vec());
    }

    #[test]
    fn test_pick_from_restricted_catalog() {
        let mut rng = ScriptedSource::new(vec![3]);
        let kind = PowerUpKind::pick(&[PowerUpKind::Slow], &mut rng);
        assert_eq!(kind, PowerUpKind::Slow);
    }

    #[test]
    fn test_scale_does_not_compound() {
        let mut clock = EffectClock::new(0.15);
        clock.scale_interval(0.5);
        clock.scale_interval(0.5);
        assert_eq!(clock.move_interval(), 0.075);
        clock.scale_interval(1.5);
        assert!((clock.move_interval() - 0.225).abs() < 1e-6);
    }

    #[test]
    fn test_expiry_resets_interval() {
        let mut clock = EffectClock::new(0.15);
        assert!(!clock.tick(10.0));

        clock.scale_interval(0.5);
        clock.restart(5.0);
        assert!(!clock.tick(4.0));
        assert!(clock.is_running());

        // Restart extends the window
        clock.restart(5.0);
        assert!(!clock.tick(4.0));
        assert!(clock.tick(1.0));
        assert_eq!(clock.move_interval(), 0.15);
        assert!(!clock.is_running());
        assert!(!clock.tick(1.0));
    }

    #[test]
    fn test_effects_clear() {
        let mut effects = SnakeEffects {
            shield: true,
            double_points: true,
        };
        assert!(effects.any());
        effects.clear();
        assert!(!effects.any());
    }
}
