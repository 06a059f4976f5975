//! Starting layouts
//!
//! Data-driven placement: a back-row array plus per-opening overrides, looped
//! over for both sides instead of one spawn call per piece.

use super::board_state::Board;
use crate::game::error::GameResult;
use crate::game::types::{Coord, PieceKind, Side, BOARD_SIZE};
use serde::{Deserialize, Serialize};

/// Back row from file 0 to file 7. The king stands on file 3, the queen on 4.
const BACK_ROW: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::King,
    PieceKind::Queen,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Blitz pieces that start away from their standard square:
/// `(side, standard square, actual square)`
const BLITZ_DISPLACEMENTS: [(Side, Coord, Coord); 4] = [
    (Side::White, Coord::new(2, 0), Coord::new(5, 3)),
    (Side::White, Coord::new(4, 0), Coord::new(0, 4)),
    (Side::White, Coord::new(3, 1), Coord::new(3, 2)),
    (Side::Black, Coord::new(7, 6), Coord::new(7, 3)),
];

/// Which position a new table starts from
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Opening {
    #[default]
    Standard,
    /// Pre-advanced position that reaches a mating net within a few moves
    Blitz,
}

impl Opening {
    fn displacements(self) -> &'static [(Side, Coord, Coord)] {
        match self {
            Opening::Standard => &[],
            Opening::Blitz => &BLITZ_DISPLACEMENTS,
        }
    }

    /// Every `(kind, side, square)` this opening places
    pub fn placements(self) -> Vec<(PieceKind, Side, Coord)> {
        let mut placements = Vec::with_capacity(32);
        for side in [Side::White, Side::Black] {
            let rear = side.home_rank();
            let front = rear + side.forward();
            for file in 0..BOARD_SIZE {
                placements.push((BACK_ROW[file as usize], side, Coord::new(file, rear)));
                placements.push((PieceKind::Pawn, side, Coord::new(file, front)));
            }
        }

        for &(side, standard, actual) in self.displacements() {
            if let Some(entry) = placements
                .iter_mut()
                .find(|(_, s, coord)| *s == side && *coord == standard)
            {
                entry.2 = actual;
            }
        }
        placements
    }

    /// Build a fresh board in this opening
    pub fn board(self) -> GameResult<Board> {
        let mut board = Board::new();
        for (kind, side, coord) in self.placements() {
            board.spawn(kind, side, coord)?;
        }
        Ok(board)
    }
}
