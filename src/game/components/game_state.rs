//! Game state components

use crate::game::types::{Coord, PieceKind, Side};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Safety of a king as judged by the check evaluator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KingState {
    Safe,
    Check,
    CheckMate,
    /// No escape squares but not attacked. Informational only, not a draw.
    Trapped,
}

impl KingState {
    pub fn is_check(self) -> bool {
        matches!(self, KingState::Check | KingState::CheckMate)
    }
}

impl fmt::Display for KingState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            KingState::Safe => "safe",
            KingState::Check => "check",
            KingState::CheckMate => "checkmate",
            KingState::Trapped => "trapped",
        })
    }
}

/// Move record for a table's history
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    pub side: Side,
    pub kind: PieceKind,
    pub from: Coord,
    pub to: Coord,
    pub captured: Option<PieceKind>,
    /// State of the opponent's king right after the move, `None` if it was taken
    pub opponent_king: Option<KingState>,
}

impl MoveRecord {
    pub fn is_capture(&self) -> bool {
        self.captured.is_some()
    }

    pub fn gave_check(&self) -> bool {
        self.opponent_king.is_some_and(KingState::is_check)
    }
}
