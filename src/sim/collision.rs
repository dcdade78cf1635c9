//! Fatal collision detection
//!
//! Checked against a snake's head after it has moved, in a fixed order:
//! walls and obstacles first, then the opposing snake, then its own body.
//! The first hit wins.

use serde::{Deserialize, Serialize};

use super::grid::Grid;
use super::obstacle::ObstacleField;
use super::snake::Snake;

/// What a snake ran into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CollisionKind {
    /// Left the grid
    Boundary,
    /// Entered an obstacle cell
    Obstacle,
    /// Hit any segment of the other snake
    Opponent,
    /// Hit its own body
    SelfBody,
}

/// Classify the collision (if any) for `snake`'s current head.
///
/// `opponent` is the other snake in a two-player match, if it was alive when
/// the tick began.
pub fn detect(
    grid: &Grid,
    snake: &Snake,
    opponent: Option<&Snake>,
    obstacles: &ObstacleField,
) -> Option<CollisionKind> {
    let head = snake.head();

    if !grid.in_bounds(head) {
        return Some(CollisionKind::Boundary);
    }
    if obstacles.occupies(head) {
        return Some(CollisionKind::Obstacle);
    }
    if opponent.is_some_and(|other| other.occupies(head)) {
        return Some(CollisionKind::Opponent);
    }
    if snake.hits_self() {
        return Some(CollisionKind::SelfBody);
    }
    None
}
