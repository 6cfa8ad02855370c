//! Sheep state and movement.

use chase_core::{Direction, Position};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A sheep in the herd
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sheep {
    index: usize,
    position: Position,
    alive: bool,
    step: f64,
}

impl Sheep {
    pub fn new(index: usize, position: Position, step: f64) -> Self {
        Self {
            index,
            position,
            alive: true,
            step,
        }
    }

    /// Place a new sheep uniformly at random in `[-limit, limit]` on both axes
    pub fn spawn<R: Rng + ?Sized>(index: usize, limit: f64, step: f64, rng: &mut R) -> Self {
        let x = rng.gen_range(-limit..=limit);
        let y = rng.gen_range(-limit..=limit);
        let sheep = Self::new(index, Position::new(x, y), step);
        debug!(
            sheep = sheep.number(),
            x = sheep.position.x,
            y = sheep.position.y,
            "Sheep initialized"
        );
        sheep
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// One-based number used when talking to humans
    pub fn number(&self) -> usize {
        self.index + 1
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    /// Take one step of length `step` in a uniformly chosen cardinal direction.
    ///
    /// Dead sheep stay where they are and `None` is returned.
    pub fn wander<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<Direction> {
        if !self.alive {
            debug!(sheep = self.number(), "Dead sheep asked to move, ignoring");
            return None;
        }

        let direction = Direction::ALL[rng.gen_range(0..Direction::ALL.len())];
        let (dx, dy) = direction.to_delta();
        self.position = self.position.add(dx * self.step, dy * self.step);

        debug!(
            sheep = self.number(),
            %direction,
            x = self.position.x,
            y = self.position.y,
            "Sheep moved"
        );
        Some(direction)
    }

    /// Only the wolf kills sheep, and only once.
    pub(crate) fn mark_eaten(&mut self) {
        self.alive = false;
    }
}
