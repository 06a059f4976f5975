//! King safety evaluation
//!
//! A king is judged against the union of every enemy piece's available
//! destinations. Only the king's own escape squares are considered: the
//! evaluator does not look for a piece that could block the check or capture
//! the attacker, and it does not replay a king move to see whether it uncovers
//! a line behind the king.

use super::board_state::Board;
use super::piece_moves::{candidates_from, moves_with, MoveRules};
use crate::game::components::{KingState, MoveCandidate, Piece};
use crate::game::error::{GameError, GameResult};
use crate::game::types::{Coord, Side};
use std::collections::BTreeSet;
use tracing::debug;

/// Outcome of a king safety evaluation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KingReport {
    pub side: Side,
    pub state: KingState,
    /// King destinations that no enemy piece can reach
    pub escapes: Vec<MoveCandidate>,
}

/// Squares `side` could move to or capture on this turn
pub fn threatened_squares(board: &Board, side: Side, rules: MoveRules) -> BTreeSet<Coord> {
    board
        .pieces_of(side)
        .flat_map(|piece| moves_with(board, piece, rules))
        .map(|candidate| candidate.to)
        .collect()
}

/// Evaluate `king` as if it stood on `at`
///
/// `at` is taken explicitly so callers can ask hypothetical questions; enemy
/// moves are always generated from the board as it is. An `at` off the board
/// is refused with [`GameError::OffBoard`].
pub fn evaluate_king(
    board: &Board,
    king: &Piece,
    at: Coord,
    rules: MoveRules,
) -> GameResult<KingReport> {
    if !at.is_on_board() {
        return Err(GameError::OffBoard { coord: at });
    }
    Ok(report_for(board, king, at, rules))
}

fn report_for(board: &Board, king: &Piece, at: Coord, rules: MoveRules) -> KingReport {
    let enemy = threatened_squares(board, king.side.opponent(), rules);
    let is_check = enemy.contains(&at);

    let nominal: Vec<MoveCandidate> = candidates_from(board, king, at, rules)
        .into_iter()
        .filter(MoveCandidate::is_available)
        .collect();
    let escapes: Vec<MoveCandidate> = nominal
        .iter()
        .copied()
        .filter(|candidate| !enemy.contains(&candidate.to))
        .collect();

    // A king walled in only by its own pieces is not trapped.
    let state = match (is_check, escapes.is_empty()) {
        (true, true) => KingState::CheckMate,
        (true, false) => KingState::Check,
        (false, true) if !nominal.is_empty() => KingState::Trapped,
        (false, _) => KingState::Safe,
    };

    debug!(
        "[CHECK] {} king at {} has {} moves - {}",
        king.side,
        at,
        escapes.len(),
        state
    );

    KingReport {
        side: king.side,
        state,
        escapes,
    }
}

/// Evaluate `side`'s king where it currently stands
///
/// Returns `None` when that side has no king left on the board.
pub fn king_state(board: &Board, side: Side, rules: MoveRules) -> Option<KingReport> {
    let king = board.king(side)?;
    Some(report_for(board, king, king.coord(), rules))
}
