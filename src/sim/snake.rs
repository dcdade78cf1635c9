//! Player-controlled snakes

use serde::{Deserialize, Serialize};

use super::grid::{Direction, Position};
use super::powerup::SnakeEffects;
use crate::consts::MIN_SNAKE_LENGTH;

/// Record of one `advance`, enough to take it back
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Advance {
    /// Tail cell dropped by the move
    pub dropped: Option<Position>,
}

/// A snake on the grid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snake {
    /// Body segments, with head at index 0
    pub(crate) body: Vec<Position>,
    /// Heading used by the most recent move
    pub(crate) heading: Direction,
    /// Heading to apply on the next move (already checked against `heading`)
    pub(crate) queued: Option<Direction>,
    pub(crate) alive: bool,
    pub(crate) score: u32,
    pub(crate) effects: SnakeEffects,
}

impl Snake {
    /// Create a snake with `length` segments trailing behind `head`
    pub fn new(head: Position, heading: Direction, length: usize) -> Self {
        let back = heading.opposite().delta();
        let mut body = Vec::with_capacity(length.max(1));
        body.push(head);
        for i in 1..length {
            body.push(body[i - 1] + back);
        }

        Self {
            body,
            heading,
            queued: None,
            alive: true,
            score: 0,
            effects: SnakeEffects::default(),
        }
    }

    pub fn head(&self) -> Position {
        self.body[0]
    }

    pub fn tail(&self) -> Position {
        self.body[self.body.len() - 1]
    }

    /// All segments, head first
    pub fn segments(&self) -> &[Position] {
        &self.body
    }

    /// Segments excluding the head
    pub fn body_segments(&self) -> &[Position] {
        &self.body[1..]
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Never true for a constructed snake
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn heading(&self) -> Direction {
        self.heading
    }

    /// Heading the next move will use
    pub fn next_heading(&self) -> Direction {
        self.queued.unwrap_or(self.heading)
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn has_shield(&self) -> bool {
        self.effects.shield
    }

    pub fn double_points(&self) -> bool {
        self.effects.double_points
    }

    pub fn effects(&self) -> SnakeEffects {
        self.effects
    }

    /// Queue a heading change for the next move.
    ///
    /// Reversal is checked against the heading of the last move, not against
    /// earlier queued values, so two quick turns can't fold the snake onto
    /// itself. Returns false (and keeps the previous queue) on a reversal.
    pub fn steer(&mut self, dir: Direction) -> bool {
        if self.heading.is_opposite(dir) {
            return false;
        }
        self.queued = Some(dir);
        true
    }

    /// Move one cell along the queued heading
    pub fn advance(&mut self) -> Advance {
        if let Some(dir) = self.queued.take() {
            self.heading = dir;
        }
        let new_head = self.head() + self.heading.delta();
        self.body.insert(0, new_head);
        Advance {
            dropped: self.body.pop(),
        }
    }

    /// Take back an `advance`, restoring the body it started from
    pub fn retreat(&mut self, step: Advance) {
        if self.body.len() > 1 {
            self.body.remove(0);
        }
        if let Some(tail) = step.dropped {
            self.body.push(tail);
        }
    }

    /// Drop the tail segment, never going below the minimum length
    pub fn shrink(&mut self) -> bool {
        if self.body.len() <= MIN_SNAKE_LENGTH {
            return false;
        }
        self.body.pop();
        true
    }

    /// Grow by one segment now by duplicating the tail.
    ///
    /// The copy sits on the tail cell until the next move drops it, which
    /// leaves the snake one segment longer.
    pub fn grow(&mut self) {
        let tail = self.tail();
        self.body.push(tail);
    }

    /// Head overlaps one of the snake's own body segments
    pub fn hits_self(&self) -> bool {
        let head = self.head();
        self.body_segments().contains(&head)
    }

    pub fn occupies(&self, pos: Position) -> bool {
        self.body.contains(&pos)
    }
}
