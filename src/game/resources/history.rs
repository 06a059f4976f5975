//! Move history for one table

use crate::game::components::MoveRecord;
use crate::game::types::Side;
use serde::{Deserialize, Serialize};

/// Chronological list of committed moves
///
/// Index 0 is White's first move, index 1 Black's reply, and so on.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveHistory {
    pub moves: Vec<MoveRecord>,
}

impl MoveHistory {
    pub fn add_move(&mut self, record: MoveRecord) {
        self.moves.push(record);
    }

    pub fn last_move(&self) -> Option<&MoveRecord> {
        self.moves.last()
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Moves made by one side, oldest first
    pub fn by_side(&self, side: Side) -> impl Iterator<Item = &MoveRecord> {
        self.moves.iter().filter(move |record| record.side == side)
    }

    pub fn captures(&self) -> usize {
        self.moves.iter().filter(|record| record.is_capture()).count()
    }
}
