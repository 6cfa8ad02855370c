//! The wolf: nearest-prey selection, pursuit and capture.

use crate::sheep::Sheep;
use chase_core::{squared_distance, Error, Position, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// What happened during one wolf move
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Hunt {
    /// The prey was within reach; the wolf now stands where it stood.
    Captured { prey: usize, position: Position },
    /// The wolf closed in by one step; `distance` is measured before moving.
    Chasing { prey: usize, distance: f64 },
}

impl Hunt {
    pub fn prey(&self) -> usize {
        match self {
            Hunt::Captured { prey, .. } | Hunt::Chasing { prey, .. } => *prey,
        }
    }

    pub fn is_capture(&self) -> bool {
        matches!(self, Hunt::Captured { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wolf {
    position: Position,
    step: f64,
    prey: Option<usize>,
}

impl Wolf {
    pub fn new(position: Position, step: f64) -> Self {
        Self {
            position,
            step,
            prey: None,
        }
    }

    /// A wolf starting at the origin
    pub fn at_origin(step: f64) -> Self {
        Self::new(Position::ORIGIN, step)
    }

    pub fn position(&self) -> Position {
        self.position
    }

    /// Index of the sheep chosen on the last move
    pub fn prey(&self) -> Option<usize> {
        self.prey
    }

    /// Slot in `herd` of the living sheep closest to `from`.
    ///
    /// Exact ties keep the earliest slot.
    pub fn nearest_prey(from: Position, herd: &[&mut Sheep]) -> Option<usize> {
        let mut nearest: Option<(usize, f64)> = None;

        for (slot, sheep) in herd.iter().enumerate() {
            if !sheep.is_alive() {
                continue;
            }
            let d2 = squared_distance(from, sheep.position());
            match nearest {
                Some((_, best)) if d2 >= best => {}
                _ => nearest = Some((slot, d2)),
            }
        }

        nearest.map(|(slot, _)| slot)
    }

    /// Chase the nearest sheep of `live_herd` for one move.
    ///
    /// Captures it when it is within `step`, snapping onto its position,
    /// otherwise advances exactly `step` towards it. The prey is chosen
    /// afresh on every call.
    pub fn hunt(&mut self, live_herd: &mut [&mut Sheep]) -> Result<Hunt> {
        info!("Wolf is chasing!");

        let slot = Self::nearest_prey(self.position, live_herd).ok_or(Error::EmptyHerd)?;
        let prey = &mut *live_herd[slot];
        self.prey = Some(prey.index());

        let target = prey.position();
        let distance = squared_distance(self.position, target).sqrt();
        debug!(
            prey = prey.number(),
            distance = format!("{:.3}", distance),
            "Wolf picked its prey"
        );

        let dx = target.x - self.position.x;
        let dy = target.y - self.position.y;
        let length = dx.hypot(dy);

        if distance <= self.step || length == 0.0 || !length.is_finite() {
            if distance > self.step {
                debug!(prey = prey.number(), "Degenerate direction vector, treating as capture");
            }

            self.position = target;
            prey.mark_eaten();
            info!(
                prey = prey.number(),
                x = self.position.x,
                y = self.position.y,
                "Wolf has eaten a sheep"
            );

            return Ok(Hunt::Captured {
                prey: prey.index(),
                position: target,
            });
        }

        let ux = dx / length * self.step;
        let uy = dy / length * self.step;
        self.position = self.position.add(ux, uy);

        debug!(
            dx = ux,
            dy = uy,
            x = self.position.x,
            y = self.position.y,
            "Wolf moved"
        );
        info!(prey = prey.number(), "Wolf is still chasing! The prey stays alive");

        Ok(Hunt::Chasing {
            prey: prey.index(),
            distance,
        })
    }
}
