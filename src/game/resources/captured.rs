//! Captured pieces tracking
//!
//! Tracks pieces captured by each side and calculates material advantage.
//!
//! # Material Values
//!
//! - Pawn: 1
//! - Knight/Bishop: 3
//! - Rook: 5
//! - Queen: 9
//! - King: 0
//!
//! Positive advantage means White is ahead, negative means Black is ahead.

use crate::game::types::{PieceKind, Side};
use serde::{Deserialize, Serialize};

/// Pieces taken so far at one table
///
/// ```rust,ignore
/// captured.add_capture(Side::Black, PieceKind::Queen);
/// let advantage = captured.material_advantage(); // +9 for White
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapturedPieces {
    /// Black pieces White has taken
    pub white_captured: Vec<PieceKind>,
    /// White pieces Black has taken
    pub black_captured: Vec<PieceKind>,
}

impl CapturedPieces {
    /// Record a capture; `captured_side` is the side that lost the piece
    pub fn add_capture(&mut self, captured_side: Side, kind: PieceKind) {
        match captured_side {
            Side::White => self.black_captured.push(kind),
            Side::Black => self.white_captured.push(kind),
        }
    }

    /// Pieces taken by `side`
    pub fn taken_by(&self, side: Side) -> &[PieceKind] {
        match side {
            Side::White => &self.white_captured,
            Side::Black => &self.black_captured,
        }
    }

    /// Material difference in pawn units
    pub fn material_advantage(&self) -> i32 {
        let white: i32 = self.white_captured.iter().copied().map(piece_value).sum();
        let black: i32 = self.black_captured.iter().copied().map(piece_value).sum();
        white - black
    }
}

/// Conventional material value of a piece kind
pub fn piece_value(kind: PieceKind) -> i32 {
    match kind {
        PieceKind::Pawn => 1,
        PieceKind::Knight => 3,
        PieceKind::Bishop => 3,
        PieceKind::Rook => 5,
        PieceKind::Queen => 9,
        PieceKind::King => 0,
    }
}
