//! Timed obstacles
//!
//! Obstacles are small multi-cell shapes that block movement while their
//! lifetime lasts and fade out over the final seconds before they vanish.

use glam::{IVec2, Vec4};
use serde::{Deserialize, Serialize};

use super::grid::{Grid, Position, distance};
use super::placement::Blockers;
use super::rng::RandomSource;
use crate::settings::MatchConfig;

/// Obstacle shapes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ObstacleShape {
    /// One cell
    Single,
    /// Three cells in an L
    LShape,
    /// Four cells: a trunk with a three-wide crown below it
    Tree,
    /// Four cells in a row
    Wall,
    /// Five cells in a plus
    Cross,
}

impl ObstacleShape {
    pub const ALL: [ObstacleShape; 5] = [
        ObstacleShape::Single,
        ObstacleShape::LShape,
        ObstacleShape::Tree,
        ObstacleShape::Wall,
        ObstacleShape::Cross,
    ];

    /// Cell offsets from the anchor
    pub fn offsets(self) -> &'static [IVec2] {
        const SINGLE: [IVec2; 1] = [IVec2::new(0, 0)];
        const L_SHAPE: [IVec2; 3] = [IVec2::new(0, 0), IVec2::new(1, 0), IVec2::new(0, 1)];
        const TREE: [IVec2; 4] = [
            IVec2::new(0, 0),
            IVec2::new(-1, 1),
            IVec2::new(0, 1),
            IVec2::new(1, 1),
        ];
        const WALL: [IVec2; 4] = [
            IVec2::new(0, 0),
            IVec2::new(1, 0),
            IVec2::new(2, 0),
            IVec2::new(3, 0),
        ];
        const CROSS: [IVec2; 5] = [
            IVec2::new(0, 0),
            IVec2::new(1, 0),
            IVec2::new(-1, 0),
            IVec2::new(0, 1),
            IVec2::new(0, -1),
        ];

        match self {
            ObstacleShape::Single => &SINGLE,
            ObstacleShape::LShape => &L_SHAPE,
            ObstacleShape::Tree => &TREE,
            ObstacleShape::Wall => &WALL,
            ObstacleShape::Cross => &CROSS,
        }
    }

    /// Opaque display color (RGBA)
    pub fn base_color(self) -> Vec4 {
        match self {
            ObstacleShape::Single => Vec4::new(0.5, 0.5, 0.5, 1.0),
            ObstacleShape::LShape => Vec4::new(0.55, 0.35, 0.2, 1.0),
            ObstacleShape::Tree => Vec4::new(0.13, 0.55, 0.13, 1.0),
            ObstacleShape::Wall => Vec4::new(0.4, 0.4, 0.45, 1.0),
            ObstacleShape::Cross => Vec4::new(0.6, 0.2, 0.2, 1.0),
        }
    }

    /// Uniform pick from a catalog. Falls back to Single for an empty catalog.
    pub fn pick(catalog: &[ObstacleShape], rng: &mut dyn RandomSource) -> ObstacleShape {
        if catalog.is_empty() {
            return ObstacleShape::Single;
        }
        catalog[rng.range(0, catalog.len() as i32) as usize]
    }

    /// Cells covered when anchored at `anchor`
    pub fn cells_at(self, anchor: Position) -> Vec<Position> {
        self.offsets().iter().map(|&o| anchor + o).collect()
    }
}

/// An obstacle on the board
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub shape: ObstacleShape,
    pub cells: Vec<Position>,
    /// Seconds until removal
    pub time_remaining: f32,
    /// Display color; alpha drops during the fade window
    pub color: Vec4,
}

impl Obstacle {
    pub fn new(shape: ObstacleShape, anchor: Position, lifetime: f32) -> Self {
        Self {
            shape,
            cells: shape.cells_at(anchor),
            time_remaining: lifetime,
            color: shape.base_color(),
        }
    }

    pub fn contains(&self, pos: Position) -> bool {
        self.cells.contains(&pos)
    }

    pub fn alpha(&self) -> f32 {
        self.color.w
    }

    pub fn is_expired(&self) -> bool {
        self.time_remaining <= 0.0
    }

    fn age(&mut self, dt: f32, fade_window: f32) {
        self.time_remaining -= dt;
        if self.time_remaining <= fade_window && fade_window > 0.0 {
            self.color.w = (self.time_remaining / fade_window).clamp(0.0, 1.0);
        }
    }
}

/// The set of live obstacles
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ObstacleField {
    obstacles: Vec<Obstacle>,
}

impl ObstacleField {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    pub fn len(&self) -> usize {
        self.obstacles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }

    pub fn clear(&mut self) {
        self.obstacles.clear();
    }

    /// Add an obstacle without placement checks
    pub fn insert(&mut self, obstacle: Obstacle) {
        self.obstacles.push(obstacle);
    }

    pub fn occupies(&self, pos: Position) -> bool {
        self.obstacles.iter().any(|o| o.contains(pos))
    }

    /// Age every obstacle, update fade alpha and drop the expired ones.
    /// Returns how many were removed.
    pub fn tick(&mut self, dt: f32, fade_window: f32) -> usize {
        for obstacle in &mut self.obstacles {
            obstacle.age(dt, fade_window);
        }
        let before = self.obstacles.len();
        self.obstacles.retain(|o| !o.is_expired());
        before - self.obstacles.len()
    }

    /// A candidate cell is valid if it is on the board, clear of snakes,
    /// obstacles and items, and not too close to any living snake's head
    fn cell_is_clear(
        &self,
        grid: &Grid,
        blockers: &Blockers<'_>,
        clearance: f32,
        pos: Position,
    ) -> bool {
        grid.in_bounds(pos)
            && !blockers.snake_at(pos)
            && !self.occupies(pos)
            && !blockers.item_at(pos)
            && blockers.heads().all(|head| distance(head, pos) > clearance)
    }

    /// Try up to `placement_attempts` random anchors for one random shape.
    /// Returns the index of the new obstacle, or `None` if every attempt was
    /// rejected (which is not an error).
    pub fn try_spawn_one(
        &mut self,
        grid: &Grid,
        config: &MatchConfig,
        rng: &mut dyn RandomSource,
        blockers: &Blockers<'_>,
    ) -> Option<usize> {
        let shape = ObstacleShape::pick(&config.obstacle_shapes, rng);

        for _ in 0..config.placement_attempts {
            let anchor = IVec2::new(rng.range(0, grid.width), rng.range(0, grid.height));
            let cells = shape.cells_at(anchor);
            if cells
                .iter()
                .all(|&c| self.cell_is_clear(grid, blockers, config.head_clearance, c))
            {
                log::debug!("Spawned {:?} obstacle at {:?}", shape, anchor);
                self.obstacles.push(Obstacle {
                    shape,
                    cells,
                    time_remaining: config.obstacle_lifetime,
                    color: shape.base_color(),
                });
                return Some(self.obstacles.len() - 1);
            }
        }

        log::debug!(
            "No room for a {:?} obstacle after {} attempts",
            shape,
            config.placement_attempts
        );
        None
    }

    /// Spawn a batch of `[initial_obstacles_min, initial_obstacles_max)`
    /// obstacles. Returns how many were actually placed.
    pub fn spawn_batch(
        &mut self,
        grid: &Grid,
        config: &MatchConfig,
        rng: &mut dyn RandomSource,
        blockers: &Blockers<'_>,
    ) -> usize {
        let count = rng.range(config.initial_obstacles_min, config.initial_obstacles_max);
        let mut placed = 0;
        for _ in 0..count {
            if self.try_spawn_one(grid, config, rng, blockers).is_some() {
                placed += 1;
            }
        }
        placed
    }
}
