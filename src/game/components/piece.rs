//! Piece-related components

use crate::game::types::{Coord, PieceId, PieceKind, Side, TokenRef};
use serde::{Deserialize, Serialize};

/// A piece living in one board's arena
///
/// The coordinate is written only by [`crate::game::rules::Board`], which keeps
/// it in lockstep with the board's square index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Piece {
    pub id: PieceId,
    pub kind: PieceKind,
    pub side: Side,
    pub(crate) coord: Coord,
    /// Set on the first committed move. Only pawns consult it.
    pub has_moved: bool,
    /// +1 for White, -1 for Black; pawn advance and attack direction
    pub forward: i8,
    /// Visual token spawned for this piece, if the table has been rendered
    pub token: Option<TokenRef>,
}

impl Piece {
    pub(crate) fn new(id: PieceId, kind: PieceKind, side: Side, coord: Coord) -> Self {
        Piece {
            id,
            kind,
            side,
            coord,
            has_moved: false,
            forward: side.forward(),
            token: None,
        }
    }

    pub fn coord(&self) -> Coord {
        self.coord
    }

    pub fn is_enemy_of(&self, other: &Piece) -> bool {
        self.side != other.side
    }

    /// Human-readable description used in status text, e.g. "white rook"
    pub fn describe(&self) -> String {
        format!("{} {}", self.side, self.kind)
    }
}
