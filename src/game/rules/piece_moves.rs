//! Chess piece movement rules
//!
//! Every piece kind is described by a [`Movement`] pattern: a set of rays that
//! are walked until something stops them, a set of single-step offsets, or the
//! pawn's special forward/diagonal rule. One walker serves all of them.
//!
//! Generation is geometry only. Whether a move would leave the mover's own king
//! attacked is not considered here.

use super::board_state::Board;
use crate::game::components::{MoveCandidate, MoveKind, Piece};
use crate::game::types::{Coord, PieceKind, Side};

const ORTHOGONAL: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, -1), (0, 1)];

const DIAGONAL: [(i8, i8); 4] = [(1, 1), (-1, 1), (1, -1), (-1, -1)];

const ALL_DIRECTIONS: [(i8, i8); 8] = [
    (1, 0),
    (-1, 0),
    (0, -1),
    (0, 1),
    (1, 1),
    (-1, 1),
    (1, -1),
    (-1, -1),
];

const KNIGHT_JUMPS: [(i8, i8); 8] = [
    (-1, -2),
    (1, -2),
    (-2, -1),
    (2, -1),
    (-2, 1),
    (2, 1),
    (-1, 2),
    (1, 2),
];

/// How a piece kind moves across the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Movement {
    /// Walk each direction until a non-empty square
    Ray(&'static [(i8, i8)]),
    /// Check each offset exactly once
    Step(&'static [(i8, i8)]),
    /// Forward push plus diagonal captures
    Pawn,
}

/// Movement pattern table
pub fn movement_pattern(kind: PieceKind) -> Movement {
    match kind {
        PieceKind::Pawn => Movement::Pawn,
        PieceKind::Knight => Movement::Step(&KNIGHT_JUMPS),
        PieceKind::Bishop => Movement::Ray(&DIAGONAL),
        PieceKind::Rook => Movement::Ray(&ORTHOGONAL),
        PieceKind::Queen => Movement::Ray(&ALL_DIRECTIONS),
        PieceKind::King => Movement::Step(&ALL_DIRECTIONS),
    }
}

/// Table-level rule switches
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MoveRules {
    /// Unmoved pawns may also advance two squares
    pub pawn_double_step: bool,
}

/// Available moves for a piece: `Empty` and `Attack` candidates only
pub fn moves_for(board: &Board, piece: &Piece) -> Vec<MoveCandidate> {
    moves_with(board, piece, MoveRules::default())
}

/// [`moves_for`] with explicit rule switches
pub fn moves_with(board: &Board, piece: &Piece, rules: MoveRules) -> Vec<MoveCandidate> {
    let mut moves = candidates_from(board, piece, piece.coord(), rules);
    moves.retain(MoveCandidate::is_available);
    moves
}

/// Every classified candidate, including `Blocked` and `Guarding`, as if the
/// piece stood on `origin`
pub(crate) fn candidates_from(
    board: &Board,
    piece: &Piece,
    origin: Coord,
    rules: MoveRules,
) -> Vec<MoveCandidate> {
    let mut candidates = Vec::new();
    if !origin.is_on_board() {
        return candidates;
    }
    match movement_pattern(piece.kind) {
        Movement::Ray(directions) => {
            for &(df, dr) in directions {
                walk_ray(board, piece.side, origin, df, dr, &mut candidates);
            }
        }
        Movement::Step(offsets) => {
            for &(df, dr) in offsets {
                if let Some(to) = origin.offset(df, dr) {
                    candidates.push(classify(board, piece.side, to, true));
                }
            }
        }
        Movement::Pawn => pawn_candidates(board, piece, origin, rules, &mut candidates),
    }
    candidates
}

fn walk_ray(
    board: &Board,
    side: Side,
    origin: Coord,
    df: i8,
    dr: i8,
    candidates: &mut Vec<MoveCandidate>,
) {
    let mut current = origin;
    while let Some(to) = current.offset(df, dr) {
        let candidate = classify(board, side, to, true);
        candidates.push(candidate);
        if candidate.kind != MoveKind::Empty {
            break;
        }
        current = to;
    }
}

fn pawn_candidates(
    board: &Board,
    piece: &Piece,
    origin: Coord,
    rules: MoveRules,
    candidates: &mut Vec<MoveCandidate>,
) {
    let forward = piece.forward;

    if let Some(one) = origin.offset(0, forward) {
        let step = classify(board, piece.side, one, false);
        candidates.push(step);

        if step.kind == MoveKind::Empty && rules.pawn_double_step && !piece.has_moved {
            if let Some(two) = origin.offset(0, 2 * forward) {
                candidates.push(classify(board, piece.side, two, false));
            }
        }
    }

    for df in [1, -1] {
        if let Some(to) = origin.offset(df, forward) {
            let probe = classify(board, piece.side, to, true);
            if probe.kind == MoveKind::Attack {
                candidates.push(probe);
            }
        }
    }
}

/// Classify one on-board destination for a piece of `side`
fn classify(board: &Board, side: Side, to: Coord, can_attack: bool) -> MoveCandidate {
    let kind = match board.side_at(to) {
        None => MoveKind::Empty,
        Some(occupant) if occupant == side => MoveKind::Guarding,
        Some(_) if can_attack => MoveKind::Attack,
        Some(_) => MoveKind::Blocked,
    };
    MoveCandidate::new(to, kind)
}
