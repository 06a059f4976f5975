//! Cached available moves for every piece on a table
//!
//! Rebuilt in full after each committed move.

use crate::game::components::MoveCandidate;
use crate::game::rules::{moves_with, Board, MoveRules};
use crate::game::types::PieceId;
use std::collections::BTreeMap;
use tracing::debug;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AvailableMoves {
    by_piece: BTreeMap<PieceId, Vec<MoveCandidate>>,
}

impl AvailableMoves {
    /// Compute moves for every live piece
    pub fn build(board: &Board, rules: MoveRules) -> Self {
        let mut moves = Self::default();
        moves.rebuild(board, rules);
        moves
    }

    pub fn rebuild(&mut self, board: &Board, rules: MoveRules) {
        self.by_piece = board
            .pieces()
            .map(|piece| (piece.id, moves_with(board, piece, rules)))
            .collect();
        debug!(
            "[TURN] Recomputed moves for {} pieces ({} total)",
            self.by_piece.len(),
            self.total()
        );
    }

    /// Moves for `piece`; empty for captured or unknown pieces
    pub fn get(&self, piece: PieceId) -> &[MoveCandidate] {
        self.by_piece.get(&piece).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn total(&self) -> usize {
        self.by_piece.values().map(Vec::len).sum()
    }
}
