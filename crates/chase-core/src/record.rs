//! Per-round records handed to report writers.

use crate::types::Position;
use serde::{Deserialize, Serialize};

/// Snapshot of the wolf and the herd at the end of a round.
///
/// `sheep_positions` is indexed by sheep index; dead sheep are `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundRecord {
    pub round_number: u32,
    pub wolf_position: Position,
    pub sheep_positions: Vec<Option<Position>>,
}

impl RoundRecord {
    pub fn alive_count(&self) -> usize {
        self.sheep_positions.iter().filter(|p| p.is_some()).count()
    }
}

/// Number of living sheep at the end of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurvivorCount {
    pub round_number: u32,
    pub alive: usize,
}
