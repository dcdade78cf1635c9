//! Placement oracle: rejection sampling of free cells
//!
//! Food and power-ups are dropped on a uniformly random cell that nothing
//! occupies. Draws are capped; once the cap is hit we fall back to a uniform
//! pick among the free cells that remain, so a crowded board still gets an
//! item and a completely full one reports `None` instead of spinning.

use glam::IVec2;

use super::grid::{Grid, Position};
use super::obstacle::ObstacleField;
use super::rng::RandomSource;
use super::snake::Snake;
use crate::consts::PLACEMENT_DRAWS_PER_CELL;

/// Everything other than obstacles that a new item must avoid
#[derive(Debug, Clone, Default)]
pub struct Blockers<'a> {
    /// Living snakes only; dead bodies are off the board
    pub snakes: Vec<&'a Snake>,
    pub food: Option<Position>,
    pub power_up: Option<Position>,
}

impl<'a> Blockers<'a> {
    pub fn new(snakes: impl IntoIterator<Item = &'a Snake>) -> Self {
        Self {
            snakes: snakes.into_iter().filter(|s| s.is_alive()).collect(),
            food: None,
            power_up: None,
        }
    }

    pub fn with_items(mut self, food: Option<Position>, power_up: Option<Position>) -> Self {
        self.food = food;
        self.power_up = power_up;
        self
    }

    pub fn with_food(mut self, food: Position) -> Self {
        self.food = Some(food);
        self
    }

    pub fn with_power_up(mut self, pos: Position) -> Self {
        self.power_up = Some(pos);
        self
    }

    pub fn snake_at(&self, pos: Position) -> bool {
        self.snakes.iter().any(|s| s.occupies(pos))
    }

    pub fn item_at(&self, pos: Position) -> bool {
        self.food == Some(pos) || self.power_up == Some(pos)
    }

    pub fn heads(&self) -> impl Iterator<Item = Position> + '_ {
        self.snakes.iter().map(|s| s.head())
    }
}

/// Uniform random cell for which `blocked` is false
pub fn place_cell(
    grid: &Grid,
    rng: &mut dyn RandomSource,
    blocked: impl Fn(Position) -> bool,
) -> Option<Position> {
    let max_draws = grid.area() * PLACEMENT_DRAWS_PER_CELL;
    for _ in 0..max_draws {
        let pos = IVec2::new(rng.range(0, grid.width), rng.range(0, grid.height));
        if !blocked(pos) {
            return Some(pos);
        }
    }

    let free: Vec<Position> = grid.cells().filter(|&c| !blocked(c)).collect();
    if free.is_empty() {
        log::warn!("No free cell left on a {}x{} grid", grid.width, grid.height);
        return None;
    }
    log::debug!(
        "Rejection sampling gave up after {} draws, picking among {} free cells",
        max_draws,
        free.len()
    );
    Some(free[rng.range(0, free.len() as i32) as usize])
}

/// Food avoids living snakes and obstacles
pub fn place_food(
    grid: &Grid,
    rng: &mut dyn RandomSource,
    blockers: &Blockers<'_>,
    obstacles: &ObstacleField,
) -> Option<Position> {
    place_cell(grid, rng, |p| blockers.snake_at(p) || obstacles.occupies(p))
}

/// Power-ups additionally avoid the food cell
pub fn place_power_up(
    grid: &Grid,
    rng: &mut dyn RandomSource,
    blockers: &Blockers<'_>,
    obstacles: &ObstacleField,
) -> Option<Position> {
    place_cell(grid, rng, |p| {
        blockers.snake_at(p) || obstacles.occupies(p) || blockers.food == Some(p)
    })
}
