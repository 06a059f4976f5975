//! Move-related components

use crate::game::types::{Coord, Side, TokenRef};
use serde::{Deserialize, Serialize};

/// Classification of a candidate destination square
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveKind {
    /// Unoccupied; the piece may move here and a ray may continue
    Empty,
    /// Enemy-occupied and capturable; a ray stops after it
    Attack,
    /// Enemy-occupied but not capturable with this geometry (pawn forward)
    Blocked,
    /// Friendly-occupied; the piece defends this square
    Guarding,
}

impl MoveKind {
    /// Whether this candidate may be offered to a player as a move
    pub fn is_available(self) -> bool {
        matches!(self, MoveKind::Empty | MoveKind::Attack)
    }
}

/// A classified candidate destination
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveCandidate {
    pub to: Coord,
    pub kind: MoveKind,
}

impl MoveCandidate {
    pub const fn new(to: Coord, kind: MoveKind) -> Self {
        MoveCandidate { to, kind }
    }

    pub fn is_available(&self) -> bool {
        self.kind.is_available()
    }
}

/// A move marker token currently shown on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Marker {
    pub token: TokenRef,
    pub at: Coord,
    /// Owner of the selection, so the marker can face its player
    pub side: Side,
    pub is_capture: bool,
}
